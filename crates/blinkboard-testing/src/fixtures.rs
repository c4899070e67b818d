use blinkboard_types::{
    BarkTransaction, Blink, CommerceItem, GovernanceProposal, ProposalStatus, TransactionKind,
    TransactionStatus,
};
use chrono::{TimeZone, Utc};

fn blink(id: &str, name: &str, description: &str, likes: u64, views: u64) -> Blink {
    Blink {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: None,
        created_at: Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap(),
        likes,
        shares: likes / 3,
        comments: likes / 5,
        views,
    }
}

/// The dashboard's six demo blinks. Names deliberately include "BARK" in
/// mixed case so search tests exercise case-insensitive matching.
pub fn seed_blinks() -> Vec<Blink> {
    vec![
        blink("1", "Underdog Rebel", "A fierce and determined Underdog Blink", 42, 230),
        blink("2", "Underdog Hero", "An inspiring Underdog Blink that overcomes all odds", 37, 180),
        blink("3", "Underdog Champion", "A victorious Underdog Blink that defies expectations", 51, 300),
        blink("4", "BARK Membership", "Exclusive BARK Membership Blink", 100, 500),
        blink("5", "Peaky Barkers Mascot", "The official CNFT mascot of The Peaky Barkers", 150, 1000),
        blink("6", "BARK Blink", "A futuristic tech-themed Blink", 45, 250),
    ]
}

pub fn seed_proposals() -> Vec<GovernanceProposal> {
    vec![
        GovernanceProposal {
            id: "1".to_string(),
            title: "Increase staking rewards".to_string(),
            votes: 100,
            status: ProposalStatus::Active,
            created_at: Utc.with_ymd_and_hms(2024, 9, 20, 9, 0, 0).unwrap(),
        },
        GovernanceProposal {
            id: "2".to_string(),
            title: "Fund community art drop".to_string(),
            votes: 75,
            status: ProposalStatus::Ended,
            created_at: Utc.with_ymd_and_hms(2024, 9, 5, 9, 0, 0).unwrap(),
        },
    ]
}

pub fn seed_commerce_items() -> Vec<CommerceItem> {
    vec![
        CommerceItem {
            id: "1".to_string(),
            name: "BARK T-Shirt".to_string(),
            description: "Cool BARK T-Shirt".to_string(),
            price: 20.0,
            listed_at: Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap(),
        },
        CommerceItem {
            id: "2".to_string(),
            name: "BARK Mug".to_string(),
            description: "BARK Coffee Mug".to_string(),
            price: 10.0,
            listed_at: Utc.with_ymd_and_hms(2024, 8, 2, 0, 0, 0).unwrap(),
        },
    ]
}

pub fn seed_transactions() -> Vec<BarkTransaction> {
    vec![
        BarkTransaction {
            id: "1".to_string(),
            kind: TransactionKind::Swap,
            amount: 100.0,
            status: TransactionStatus::Completed,
            timestamp: Utc.with_ymd_and_hms(2024, 10, 1, 10, 0, 0).unwrap(),
        },
        BarkTransaction {
            id: "2".to_string(),
            kind: TransactionKind::Purchase,
            amount: 20.0,
            status: TransactionStatus::Completed,
            timestamp: Utc.with_ymd_and_hms(2024, 10, 1, 11, 0, 0).unwrap(),
        },
        BarkTransaction {
            id: "3".to_string(),
            kind: TransactionKind::Stake,
            amount: 50.0,
            status: TransactionStatus::Completed,
            timestamp: Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap(),
        },
    ]
}
