use std::fmt;

use blinkboard_types::{GovernanceProposal, LeaderboardEntry, ProposalStatus};
use serde::Serialize;

use crate::presentation::formatters::number;

#[derive(Debug, Serialize)]
pub struct ProposalRow {
    pub id: String,
    pub title: String,
    pub votes: u64,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct GovernanceViewModel {
    pub proposals: Vec<ProposalRow>,
}

impl GovernanceViewModel {
    pub fn new(proposals: &[GovernanceProposal]) -> Self {
        Self {
            proposals: proposals
                .iter()
                .map(|p| ProposalRow {
                    id: p.id.clone(),
                    title: p.title.clone(),
                    votes: p.votes,
                    status: match p.status {
                        ProposalStatus::Active => "active".to_string(),
                        ProposalStatus::Ended => "ended".to_string(),
                    },
                })
                .collect(),
        }
    }
}

impl fmt::Display for GovernanceViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.proposals.is_empty() {
            return writeln!(f, "No proposals.");
        }

        writeln!(f, "{:<4} {:<30} {:>7}  {}", "ID", "TITLE", "VOTES", "STATUS")?;
        for proposal in &self.proposals {
            writeln!(
                f,
                "{:<4} {:<30} {:>7}  {}",
                proposal.id, proposal.title, proposal.votes, proposal.status
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub name: String,
    pub blinks: u64,
    pub likes: u64,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardViewModel {
    pub entries: Vec<LeaderboardRow>,
}

impl LeaderboardViewModel {
    pub fn new(entries: &[LeaderboardEntry]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|e| LeaderboardRow {
                    rank: e.rank,
                    name: e.name.clone(),
                    blinks: e.blinks,
                    likes: e.likes,
                })
                .collect(),
        }
    }
}

impl fmt::Display for LeaderboardViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "Leaderboard is empty.");
        }

        writeln!(f, "{:<5} {:<20} {:>7} {:>7}", "RANK", "NAME", "BLINKS", "LIKES")?;
        for entry in &self.entries {
            writeln!(
                f,
                "{:<5} {:<20} {:>7} {:>7}",
                entry.rank,
                entry.name,
                entry.blinks,
                number::format_compact(entry.likes)
            )?;
        }
        Ok(())
    }
}
