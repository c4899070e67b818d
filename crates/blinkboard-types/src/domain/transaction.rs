use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::record::Record;

/// What a BARK transaction did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Swap,
    Purchase,
    Stake,
    Unstake,
    Claim,
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "swap" => Ok(Self::Swap),
            "purchase" => Ok(Self::Purchase),
            "stake" => Ok(Self::Stake),
            "unstake" => Ok(Self::Unstake),
            "claim" => Ok(Self::Claim),
            other => Err(Error::Parse(format!(
                "unknown transaction kind '{}'",
                other
            ))),
        }
    }
}

/// Settlement status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// A settled or in-flight BARK transaction shown in the history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarkTransaction {
    pub id: String,
    pub kind: TransactionKind,
    /// Amount in BARK.
    pub amount: f64,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
}

impl Record for BarkTransaction {
    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.id]
    }

    fn sort_key(&self) -> f64 {
        self.amount
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A quote for swapping one token into another, valid until `expires_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapQuote {
    pub from_token: String,
    pub to_token: String,
    pub from_amount: f64,
    pub to_amount: f64,
    pub exchange_rate: f64,
    pub expires_at: DateTime<Utc>,
}

impl SwapQuote {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_transaction_kind_parses() {
        assert_eq!(
            "stake".parse::<TransactionKind>().unwrap(),
            TransactionKind::Stake
        );
        assert!("mint".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_swap_quote_expiry() {
        let now = Utc::now();
        let quote = SwapQuote {
            from_token: "BARK".to_string(),
            to_token: "SOL".to_string(),
            from_amount: 100.0,
            to_amount: 150.0,
            exchange_rate: 1.5,
            expires_at: now + Duration::seconds(60),
        };

        assert!(!quote.is_expired(now));
        assert!(quote.is_expired(now + Duration::seconds(61)));
    }
}
