//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::models::{Item, Priority};
use crate::storage::LoadSummary;

/// Display format for event times
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Information about a listed item
#[derive(Debug, Clone, Serialize)]
pub struct ItemInfo {
    /// 1-based position in the store
    pub index: usize,
    /// Item description
    pub description: String,
    /// Item tags
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Event start, if the item is an event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Event end, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Event priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl ItemInfo {
    /// Describe `item` found at 1-based `index`
    #[must_use]
    pub fn new(index: usize, item: &Item) -> Self {
        let event = item.event.as_ref();
        Self {
            index,
            description: item.description.clone(),
            tags: item.tags.clone(),
            start: event.map(|e| e.start.format(TIME_FORMAT).to_string()),
            end: event.and_then(|e| e.end).map(|end| end.format(TIME_FORMAT).to_string()),
            priority: event.map(|e| e.priority.to_string()),
        }
    }

    fn render_line(&self) -> String {
        let mut line = format!("{:>4}. {}", self.index, self.description);

        if let Some(start) = &self.start {
            let when = self
                .end
                .as_ref()
                .map_or_else(|| start.clone(), |end| format!("{start} -> {end}"));
            let _ = write!(line, "  @ {}", when.cyan());
        }
        if let Some(priority) = &self.priority {
            let label = format!("[{priority}]");
            let label = match priority.parse::<Priority>() {
                Ok(Priority::P0) => label.red().bold(),
                Ok(Priority::P1) => label.yellow(),
                _ => label.normal(),
            };
            let _ = write!(line, "  {label}");
        }
        for tag in &self.tags {
            let _ = write!(line, "  {}", format!("#{tag}").dimmed());
        }
        line
    }
}

/// Result of a listing (items, search hits or events)
#[derive(Debug, Serialize)]
pub struct ItemListResult {
    /// Number of listed items
    pub total: usize,
    /// Listed items
    pub items: Vec<ItemInfo>,
}

impl ItemListResult {
    /// Build a result from listed items
    #[must_use]
    pub const fn new(items: Vec<ItemInfo>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.items.is_empty() {
            println!("No items found.");
            return;
        }

        for info in &self.items {
            println!("{}", info.render_line());
        }
        println!("\n{} item(s)", self.total);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of validating a store document
#[derive(Debug, Serialize)]
pub struct LoadReport {
    /// Document path
    pub path: String,
    /// Whether the document exists
    pub exists: bool,
    /// Load policy in effect
    pub policy: String,
    /// Load counters
    #[serde(flatten)]
    pub summary: LoadSummary,
}

impl LoadReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if !self.exists {
            println!("No store at {} yet.", self.path);
            return;
        }

        println!("Store: {}", self.path);
        println!("  Policy:     {}", self.policy);
        println!("  Loaded:     {}", self.summary.loaded);
        println!("  Duplicates: {}", self.summary.duplicates);
        println!("  Invalid:    {}", self.summary.skipped_invalid);
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
