use serde::Serialize;

/// Derived aggregates over the current view, for summary panels and list
/// footers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewStats {
    /// Records in the underlying collection.
    pub total: usize,
    /// Records matching the active search term.
    pub filtered: usize,
    /// Current zero-based page index.
    pub page: usize,
    /// Number of pages over the filtered view (zero when it is empty).
    pub page_count: usize,
    pub page_size: usize,
    /// Records on the current page.
    pub visible: usize,
    /// Sum of sort keys over the filtered view (total likes, total votes...).
    pub sort_key_sum: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_serialize_flat_for_json_output() {
        let stats = ViewStats {
            total: 6,
            filtered: 3,
            page: 0,
            page_count: 1,
            page_size: 3,
            visible: 3,
            sort_key_sum: 295.0,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["filtered"], 3);
        assert_eq!(json["sort_key_sum"], 295.0);
    }
}
