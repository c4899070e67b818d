use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::record::Record;

/// Voting status of a governance proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Active,
    Ended,
}

impl FromStr for ProposalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "ended" => Ok(Self::Ended),
            other => Err(Error::Parse(format!("unknown proposal status '{}'", other))),
        }
    }
}

/// A governance proposal listed on the voting page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceProposal {
    pub id: String,
    pub title: String,
    pub votes: u64,
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for GovernanceProposal {
    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.title]
    }

    fn sort_key(&self) -> f64 {
        self.votes as f64
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_status_parses_case_insensitively() {
        assert_eq!(
            "Active".parse::<ProposalStatus>().unwrap(),
            ProposalStatus::Active
        );
        assert_eq!(
            "ended".parse::<ProposalStatus>().unwrap(),
            ProposalStatus::Ended
        );
        assert!("open".parse::<ProposalStatus>().is_err());
    }
}
