use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// An item sold on the commerce page, priced in whole BARK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommerceItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub listed_at: DateTime<Utc>,
}

impl Record for CommerceItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn sort_key(&self) -> f64 {
        self.price
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.listed_at
    }
}
