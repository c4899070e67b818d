use std::fmt;

use blinkboard_types::{BarkTransaction, SwapQuote, TransactionKind, TransactionStatus};
use serde::Serialize;

use crate::presentation::formatters::{number, time};

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Swap => "swap",
        TransactionKind::Purchase => "purchase",
        TransactionKind::Stake => "stake",
        TransactionKind::Unstake => "unstake",
        TransactionKind::Claim => "claim",
    }
}

fn status_label(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "pending",
        TransactionStatus::Completed => "completed",
        TransactionStatus::Failed => "failed",
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionViewModel {
    pub id: String,
    pub kind: String,
    pub amount: f64,
    pub status: String,
    pub timestamp: String,
}

impl TransactionViewModel {
    pub fn from_transaction(tx: &BarkTransaction) -> Self {
        Self {
            id: tx.id.clone(),
            kind: kind_label(tx.kind).to_string(),
            amount: tx.amount,
            status: status_label(tx.status).to_string(),
            timestamp: time::format_time(tx.timestamp),
        }
    }
}

impl fmt::Display for TransactionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Transaction {}: {} {} ({})",
            self.id,
            self.kind,
            number::format_bark(self.amount),
            self.status
        )
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionListViewModel {
    pub transactions: Vec<TransactionViewModel>,
}

impl TransactionListViewModel {
    pub fn new(transactions: &[BarkTransaction]) -> Self {
        Self {
            transactions: transactions
                .iter()
                .map(TransactionViewModel::from_transaction)
                .collect(),
        }
    }
}

impl fmt::Display for TransactionListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.transactions.is_empty() {
            return writeln!(f, "No transactions yet.");
        }

        writeln!(
            f,
            "{:<4} {:<10} {:>14} {:<10}  {}",
            "ID", "KIND", "AMOUNT", "STATUS", "WHEN"
        )?;
        for tx in &self.transactions {
            writeln!(
                f,
                "{:<4} {:<10} {:>14} {:<10}  {}",
                tx.id,
                tx.kind,
                number::format_bark(tx.amount),
                tx.status,
                tx.timestamp
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct SwapQuoteViewModel {
    pub from_token: String,
    pub to_token: String,
    pub from_amount: f64,
    pub to_amount: f64,
    pub exchange_rate: f64,
    pub expires_at: String,
}

impl SwapQuoteViewModel {
    pub fn from_quote(quote: &SwapQuote) -> Self {
        Self {
            from_token: quote.from_token.clone(),
            to_token: quote.to_token.clone(),
            from_amount: quote.from_amount,
            to_amount: quote.to_amount,
            exchange_rate: quote.exchange_rate,
            expires_at: time::format_time(quote.expires_at),
        }
    }
}

impl fmt::Display for SwapQuoteViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Quote: {} {} -> {} {} (rate {})",
            self.from_amount, self.from_token, self.to_amount, self.to_token, self.exchange_rate
        )?;
        writeln!(f, "Valid until {}", self.expires_at)
    }
}
