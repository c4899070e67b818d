use std::sync::Arc;

use anyhow::Result;
use blinkboard_client::Client;
use blinkboard_engine::ListView;

use crate::args::{OutputFormat, SortDirection};
use crate::presentation::{
    BlinkListViewModel, CommandResult, ConsoleRenderer, Guidance, PageSummary, Renderer,
};

#[allow(clippy::too_many_arguments)]
pub fn handle(
    client: &Client,
    default_page_size: usize,
    page: usize,
    page_size: Option<usize>,
    sort: SortDirection,
    search: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let blinks = client.blinks().list()?;

    let mut view = ListView::new(blinks, page_size.unwrap_or(default_page_size))?;
    if !format.is_json() {
        view = view.with_sink(Arc::new(super::ConsoleSink));
    }

    view.set_sort_order(sort.into());
    if let Some(ref term) = search {
        view.apply_search(term);
    }
    view.set_page(page);

    let summary = PageSummary::from_stats(&view.stats(), view.search_term(), view.sort_order(), "likes");
    let has_more = summary.has_more;
    let next_page = summary.page + 1;

    let mut result = CommandResult::new(BlinkListViewModel::new(&view.visible_slice(), summary));
    if has_more {
        result = result.with_suggestion(Guidance::new(
            "Next page",
            format!("blinkboard blink list --page {}", next_page),
        ));
    }

    ConsoleRenderer::new(format.is_json()).render(result)
}
