//! Fixed-width progress report
//!
//! Pure formatting over [`TodoItemDto`]s. One block per item:
//!
//! ```text
//! 1) Complete Project Report - Finish the final report for the project (Work) Completed:True
//! 03/18/2025 00:00:00 -  30% |OOOOOOOOOOOOOOO                                   |
//! 03/19/2025 00:00:00 -  80% |OOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOO          |
//! 03/20/2025 00:00:00 - 100% |OOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOO|
//! ```

use std::fmt::Write;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::dto::{ProgressionDto, TodoItemDto};

/// Width of the bar between the `|` delimiters
pub const PROGRESS_BAR_WIDTH: usize = 50;

const FILL_GLYPH: char = 'O';
const DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Render every item, separated by one blank line, none after the last
pub fn render_items(items: &[TodoItemDto]) -> String {
    items
        .iter()
        .map(render_item)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one item: header line plus one line per progression in date order
pub fn render_item(item: &TodoItemDto) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{}) {} - {} ({}) Completed:{}",
        item.id,
        item.title,
        item.description,
        item.category,
        if item.is_completed { "True" } else { "False" }
    );

    let mut progressions: Vec<&ProgressionDto> = item.progressions.iter().collect();
    progressions.sort_by_key(|p| p.date);

    for progression in progressions {
        let _ = writeln!(
            out,
            "{} - {:>3}% {}",
            progression.date.format(DATE_FORMAT),
            progression.accumulated_percent.normalize().to_string(),
            progress_bar(progression.accumulated_percent)
        );
    }

    out
}

/// `|` + filled glyphs + padding + `|`; the fill length is truncated, not rounded
pub fn progress_bar(accumulated_percent: Decimal) -> String {
    let width = Decimal::from(PROGRESS_BAR_WIDTH);
    let filled = (width * accumulated_percent / Decimal::ONE_HUNDRED)
        .floor()
        .clamp(Decimal::ZERO, width)
        .to_usize()
        .unwrap_or(0);

    let mut bar = String::with_capacity(PROGRESS_BAR_WIDTH + 2);
    bar.push('|');
    bar.extend(std::iter::repeat(FILL_GLYPH).take(filled));
    bar.extend(std::iter::repeat(' ').take(PROGRESS_BAR_WIDTH - filled));
    bar.push('|');
    bar
}
