//! Item commands - add, list, find, edit, remove

use anyhow::Context;
use chrono::NaiveDateTime;
use itemtrack::models::{Event, Item, Priority, parse_datetime};
use itemtrack::output::{ItemInfo, ItemListResult, OperationResult, OutputMode};
use itemtrack::{AddOutcome, SearchMode};

use super::{Session, store_index};

/// Field updates requested by `edit`
#[derive(Debug, Default)]
pub struct ItemChanges {
    /// New description
    pub description: Option<String>,
    /// New start time
    pub start: Option<String>,
    /// New end time
    pub end: Option<String>,
    /// New priority
    pub priority: Option<String>,
}

fn parse_priority(priority: Option<&str>) -> anyhow::Result<Option<Priority>> {
    priority.map(str::parse).transpose().map_err(|e: String| anyhow::anyhow!(e))
}

fn parse_time(input: Option<&str>) -> anyhow::Result<Option<NaiveDateTime>> {
    input.map(parse_datetime).transpose().map_err(|e: String| anyhow::anyhow!(e))
}

/// Add an item; an equal item already in the store is left alone
pub fn add(
    session: &Session,
    description: &str,
    tags: Vec<String>,
    start: Option<&str>,
    end: Option<&str>,
    priority: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if description.trim().is_empty() {
        anyhow::bail!("Description must not be blank");
    }

    let mut item = Item::new(description).with_tags(tags);

    if let Some(start) = parse_time(start)? {
        let mut event = Event::new(start, parse_priority(priority)?.unwrap_or_default());
        if let Some(end) = parse_time(end)? {
            event = event.with_end(end).map_err(|e| anyhow::anyhow!(e))?;
        }
        item.event = Some(event);
    }

    let mut store = session.load_for_update()?;
    let outcome = store.add(item);

    if outcome.inserted() {
        session.save(&store)?;
    } else {
        log::info!("Store already contains \"{description}\". Skipping...");
    }

    let message = match outcome {
        AddOutcome::Inserted => format!("Added: {description}"),
        AddOutcome::SkippedDuplicate => format!("Already tracked: {description}"),
    };
    OperationResult {
        success: true,
        message,
    }
    .render(mode);

    Ok(())
}

/// List every item in store order
pub fn list(session: &Session, mode: OutputMode) -> anyhow::Result<()> {
    let store = session.load()?;
    let infos = store.iter().enumerate().map(|(i, item)| ItemInfo::new(i + 1, item)).collect();

    ItemListResult::new(infos).render(mode);
    Ok(())
}

/// List items whose description contains `query`
pub fn find(
    session: &Session,
    query: &str,
    ignore_case: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let store = session.load()?;
    let search = if ignore_case {
        SearchMode::CaseInsensitive
    } else {
        session.config.search_mode()
    };

    let hits = store.to_list().find_with(query, search);
    let infos = hits
        .iter()
        .filter_map(|item| store.index_of(item).map(|i| ItemInfo::new(i + 1, item)))
        .collect();

    ItemListResult::new(infos).render(mode);
    Ok(())
}

/// Apply `changes` to the item numbered `number`
pub fn edit(
    session: &Session,
    number: usize,
    changes: ItemChanges,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let index = store_index(number)?;
    let mut store = session.load_for_update()?;
    let mut item = store.get(index).with_context(|| format!("No item #{number}"))?.clone();

    if let Some(description) = changes.description {
        if description.trim().is_empty() {
            anyhow::bail!("Description must not be blank");
        }
        item.description = description;
    }

    let start = parse_time(changes.start.as_deref())?;
    let end = parse_time(changes.end.as_deref())?;
    let priority = parse_priority(changes.priority.as_deref())?;

    if let Some(event) = item.event.as_mut() {
        if let Some(start) = start {
            event.start = start;
        }
        if let Some(priority) = priority {
            event.priority = priority;
        }
        if end.is_some() {
            event.end = end;
        }
        event.validate().map_err(|e| anyhow::anyhow!(e))?;
    } else if let Some(start) = start {
        let mut event = Event::new(start, priority.unwrap_or_default());
        if let Some(end) = end {
            event = event.with_end(end).map_err(|e| anyhow::anyhow!(e))?;
        }
        item.event = Some(event);
    } else if end.is_some() || priority.is_some() {
        anyhow::bail!("Item #{number} is not an event; pass --start to schedule it");
    }

    store.replace(index, item).with_context(|| format!("Cannot update item #{number}"))?;
    session.save(&store)?;

    OperationResult {
        success: true,
        message: format!("Updated: #{number}"),
    }
    .render(mode);

    Ok(())
}

/// Remove the item numbered `number`
pub fn remove(session: &Session, number: usize, mode: OutputMode) -> anyhow::Result<()> {
    let index = store_index(number)?;
    let mut store = session.load_for_update()?;
    let removed = store.remove_at(index).with_context(|| format!("No item #{number}"))?;
    session.save(&store)?;

    OperationResult {
        success: true,
        message: format!("Removed: {}", removed.description),
    }
    .render(mode);

    Ok(())
}
