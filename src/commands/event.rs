//! Events command - scheduled items in start order

use itemtrack::SearchMode;
use itemtrack::output::{ItemInfo, ItemListResult, OutputMode};

use super::Session;

/// List events sorted by start time then priority, optionally filtered
pub fn events(
    session: &Session,
    query: Option<&str>,
    ignore_case: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let store = session.load()?;
    let search = if ignore_case {
        SearchMode::CaseInsensitive
    } else {
        session.config.search_mode()
    };

    let mut events = store.events().sort()?;
    if let Some(query) = query {
        events = events.find_with(query, search);
    }

    let infos = events
        .iter()
        .filter_map(|item| store.index_of(item).map(|i| ItemInfo::new(i + 1, item)))
        .collect();

    ItemListResult::new(infos).render(mode);
    Ok(())
}
