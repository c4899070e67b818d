use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordering used when deriving a visible slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest sort key first
    Ascending,
    /// Largest sort key first (dashboard default)
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Descending
    }
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Contract every listed item (blink, proposal, commerce item, transaction)
/// fulfills so a single list view can search, sort, and page it.
///
/// Implementations never expose interior mutability through this trait; the
/// view derives its slices without touching the records.
pub trait Record {
    /// Unique identifier within a collection snapshot, stable for the
    /// record's lifetime.
    fn id(&self) -> &str;

    /// String attributes eligible for case-insensitive substring search,
    /// in display priority order (name before description).
    fn searchable_fields(&self) -> Vec<&str>;

    /// Numeric attribute used for ordering (likes, votes, price, amount).
    fn sort_key(&self) -> f64;

    /// Creation timestamp, used for display only.
    fn created_at(&self) -> DateTime<Utc>;
}

impl<R: Record> Record for &R {
    fn id(&self) -> &str {
        (*self).id()
    }

    fn searchable_fields(&self) -> Vec<&str> {
        (*self).searchable_fields()
    }

    fn sort_key(&self) -> f64 {
        (*self).sort_key()
    }

    fn created_at(&self) -> DateTime<Utc> {
        (*self).created_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_default_is_descending() {
        assert_eq!(SortOrder::default(), SortOrder::Descending);
    }

    #[test]
    fn test_sort_order_toggle_round_trips() {
        let order = SortOrder::Descending;
        assert_eq!(order.toggled(), SortOrder::Ascending);
        assert_eq!(order.toggled().toggled(), order);
    }
}
