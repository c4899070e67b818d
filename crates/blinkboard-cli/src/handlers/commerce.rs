use std::sync::Arc;

use anyhow::Result;
use blinkboard_client::Client;
use blinkboard_engine::ListView;

use crate::args::{OutputFormat, SortDirection};
use crate::presentation::{
    CommandResult, CommerceListViewModel, ConsoleRenderer, Guidance, PageSummary, Renderer,
    TransactionViewModel,
};

#[allow(clippy::too_many_arguments)]
pub fn handle_list(
    client: &Client,
    default_page_size: usize,
    page: usize,
    page_size: Option<usize>,
    sort: SortDirection,
    search: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let items = client.commerce().list()?;

    let mut view = ListView::new(items, page_size.unwrap_or(default_page_size))?;
    if !format.is_json() {
        view = view.with_sink(Arc::new(super::ConsoleSink));
    }

    view.set_sort_order(sort.into());
    if let Some(ref term) = search {
        view.apply_search(term);
    }
    view.set_page(page);

    let summary = PageSummary::from_stats(&view.stats(), view.search_term(), view.sort_order(), "price");
    let has_more = summary.has_more;
    let next_page = summary.page + 1;

    let mut result = CommandResult::new(CommerceListViewModel::new(&view.visible_slice(), summary));
    if has_more {
        result = result.with_suggestion(Guidance::new(
            "Next page",
            format!("blinkboard commerce list --page {}", next_page),
        ));
    }

    ConsoleRenderer::new(format.is_json()).render(result)
}

pub fn handle_buy(client: &Client, item_id: &str, format: OutputFormat) -> Result<()> {
    let tx = client.commerce().purchase(item_id)?;

    let result = CommandResult::new(TransactionViewModel::from_transaction(&tx))
        .with_suggestion(Guidance::new("Full history", "blinkboard tx"));

    ConsoleRenderer::new(format.is_json()).render(result)
}
