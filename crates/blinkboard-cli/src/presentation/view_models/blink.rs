use std::fmt;

use blinkboard_engine::ViewStats;
use blinkboard_types::{Blink, SortOrder};
use serde::Serialize;

use crate::presentation::formatters::{number, text, time};

/// Footer shared by every paged list: where the reader is and what shaped
/// the view.
#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    pub filtered: usize,
    pub has_more: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,

    pub sort: String,
}

impl PageSummary {
    pub fn from_stats(stats: &ViewStats, search_term: &str, order: SortOrder, key: &str) -> Self {
        let direction = match order {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        };

        Self {
            page: stats.page,
            page_count: stats.page_count,
            total: stats.total,
            filtered: stats.filtered,
            has_more: (stats.page + 1) * stats.page_size < stats.filtered,
            search_term: (!search_term.is_empty()).then(|| search_term.to_string()),
            sort: format!("{} {}", key, direction),
        }
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.page_count == 0 {
            return writeln!(f, "Page 0/0 (empty)");
        }

        write!(
            f,
            "Page {}/{} · sorted by {}",
            self.page + 1,
            self.page_count,
            self.sort
        )?;

        if let Some(ref term) = self.search_term {
            write!(f, " · {} of {} match \"{}\"", self.filtered, self.total, term)?;
        } else {
            write!(f, " · {} total", self.total)?;
        }

        writeln!(f)
    }
}

#[derive(Debug, Serialize)]
pub struct BlinkRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub likes: u64,
    pub shares: u64,
    pub views: u64,
    pub created_at: String,
}

impl BlinkRow {
    fn from_blink(blink: &Blink) -> Self {
        Self {
            id: blink.id.clone(),
            name: blink.name.clone(),
            description: text::truncate(&blink.description, 40),
            likes: blink.likes,
            shares: blink.shares,
            views: blink.views,
            created_at: time::format_time(blink.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlinkListViewModel {
    pub blinks: Vec<BlinkRow>,
    pub summary: PageSummary,
}

impl BlinkListViewModel {
    pub fn new(visible: &[&Blink], summary: PageSummary) -> Self {
        Self {
            blinks: visible.iter().map(|b| BlinkRow::from_blink(b)).collect(),
            summary,
        }
    }
}

impl fmt::Display for BlinkListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.blinks.is_empty() {
            writeln!(f, "No blinks on this page.")?;
            return write!(f, "{}", self.summary);
        }

        writeln!(
            f,
            "{:<4} {:<22} {:>7} {:>7} {:>7}  {}",
            "ID", "NAME", "LIKES", "SHARES", "VIEWS", "DESCRIPTION"
        )?;
        for blink in &self.blinks {
            writeln!(
                f,
                "{:<4} {:<22} {:>7} {:>7} {:>7}  {}",
                blink.id,
                text::truncate(&blink.name, 22),
                number::format_compact(blink.likes),
                number::format_compact(blink.shares),
                number::format_compact(blink.views),
                blink.description
            )?;
        }

        writeln!(f)?;
        write!(f, "{}", self.summary)
    }
}

/// A single blink, shown after creation.
#[derive(Debug, Serialize)]
pub struct BlinkViewModel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl BlinkViewModel {
    pub fn from_blink(blink: &Blink) -> Self {
        Self {
            id: blink.id.clone(),
            name: blink.name.clone(),
            description: blink.description.clone(),
            created_at: time::format_time(blink.created_at),
        }
    }
}

impl fmt::Display for BlinkViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Created blink {} ({})", self.id, self.name)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  at {}", self.created_at)
    }
}
