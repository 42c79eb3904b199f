//! Output formatting: indented tree lines, the summary block and JSON.

use crate::config::{Decoration, FOLDER_KEY, icon_key};
use crate::node::{SummaryStats, TraversalResult};
use serde::Serialize;

/// Character repeated once per nesting level
const MARKER: &str = "-";

/// Display configuration
#[derive(Debug, Clone)]
pub struct Display {
    /// Icon strategy for entries
    pub decoration: Decoration,
    /// Emit color escape codes around icons
    pub color: bool,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            decoration: Decoration::Plain,
            color: false,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a str,
    deep: bool,
    entries: &'a TraversalResult,
    summary: SummaryStats,
}

impl Display {
    /// Create a new Display with plain, uncolored output
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render the root label followed by one line per entry
    pub fn render(&self, result: &TraversalResult, root_label: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(result.len() + 1);

        lines.push(match self.decoration.icon(FOLDER_KEY, self.color) {
            Some(icon) if !icon.is_empty() => format!("{} {}", icon, root_label),
            _ => root_label.to_string(),
        });

        for entry in result.iter() {
            let marker = MARKER.repeat(entry.depth + 1);
            let key = icon_key(&entry.name, entry.is_dir);
            let line = match self.decoration.icon(key, self.color) {
                Some(icon) => format!("{} {} {}", marker, icon, entry.name),
                None => format!("{} {}", marker, entry.name),
            };
            lines.push(line);
        }

        lines
    }

    /// The blank separator line and the summary block
    pub fn summary_lines(&self, stats: &SummaryStats) -> Vec<String> {
        vec![
            String::new(),
            "Summary:".to_string(),
            format!("Total Files: {}", stats.file_count),
            format!("Total Folders: {}", stats.folder_count),
            format!("Total Size: {}", format_size(stats.total_size)),
        ]
    }

    /// Print the listing and summary to stdout
    pub fn print_results(&self, result: &TraversalResult, root_label: &str) {
        let stats = result.summarize();
        for line in self
            .render(result, root_label)
            .into_iter()
            .chain(self.summary_lines(&stats))
        {
            println!("{}", line);
        }
    }

    /// Render the traversal as a pretty JSON document
    pub fn render_json(
        &self,
        result: &TraversalResult,
        root_label: &str,
        deep: bool,
    ) -> serde_json::Result<String> {
        let report = JsonReport {
            root: root_label,
            deep,
            entries: result,
            summary: result.summarize(),
        };
        serde_json::to_string_pretty(&report)
    }
}

/// Format a byte count with 1024-based units, e.g. `1023 B` or `1.50 KB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut unit = 0;
    let mut scale: u64 = 1024;
    while unit + 1 < UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    format!("{:.2} {}", bytes as f64 / scale as f64, UNITS[unit])
}
