use std::fmt;

use blinkboard_types::CommerceItem;
use serde::Serialize;

use super::blink::PageSummary;
use crate::presentation::formatters::{number, text};

#[derive(Debug, Serialize)]
pub struct CommerceRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct CommerceListViewModel {
    pub items: Vec<CommerceRow>,
    pub summary: PageSummary,
}

impl CommerceListViewModel {
    pub fn new(visible: &[&CommerceItem], summary: PageSummary) -> Self {
        Self {
            items: visible
                .iter()
                .map(|item| CommerceRow {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    description: text::truncate(&item.description, 40),
                    price: item.price,
                })
                .collect(),
            summary,
        }
    }
}

impl fmt::Display for CommerceListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.items.is_empty() {
            writeln!(f, "No items on this page.")?;
            return write!(f, "{}", self.summary);
        }

        writeln!(f, "{:<4} {:<20} {:>12}  {}", "ID", "NAME", "PRICE", "DESCRIPTION")?;
        for item in &self.items {
            writeln!(
                f,
                "{:<4} {:<20} {:>12}  {}",
                item.id,
                text::truncate(&item.name, 20),
                number::format_bark(item.price),
                item.description
            )?;
        }

        writeln!(f)?;
        write!(f, "{}", self.summary)
    }
}
