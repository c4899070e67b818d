use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables and summaries
    Plain,
    /// Machine-readable JSON (for pipes/scripts)
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    /// Smallest sort key first
    Asc,
    /// Largest sort key first
    Desc,
}

impl From<SortDirection> for blinkboard_types::SortOrder {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => blinkboard_types::SortOrder::Ascending,
            SortDirection::Desc => blinkboard_types::SortOrder::Descending,
        }
    }
}
