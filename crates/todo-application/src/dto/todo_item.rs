//! TodoItem-related DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use todo_domain::todo_item::{Progression, TodoItem};

/// Command to create or update a todo item
///
/// On update only `description` is applied; `title` and `category` are
/// validated but left unchanged on the stored item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoItemCommand {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
}

impl TodoItemCommand {
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description,
            category: category.into(),
        }
    }
}

/// Command to register progress on a todo item
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionCommand {
    pub date: DateTime<Utc>,
    pub percent: Decimal,
}

/// Todo item DTO
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItemDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub is_completed: bool,
    pub progressions: Vec<ProgressionDto>,
}

impl TodoItemDto {
    /// Create from domain aggregate
    ///
    /// `accumulated_percent` is recomputed here as a running sum in date order.
    pub fn from_domain(item: &TodoItem) -> Self {
        let mut ordered: Vec<&Progression> = item.progressions().iter().collect();
        ordered.sort_by_key(|p| p.date());

        let mut accumulated = Decimal::ZERO;
        let progressions = ordered
            .into_iter()
            .map(|p| {
                accumulated += p.percent();
                ProgressionDto::from_domain(p, accumulated)
            })
            .collect();

        Self {
            id: item.id().value(),
            title: item.title().to_string(),
            description: item.description().to_string(),
            category: item.category().to_string(),
            is_completed: item.is_completed(),
            progressions,
        }
    }
}

/// Progression DTO
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionDto {
    pub date: DateTime<Utc>,
    pub percent: Decimal,
    pub accumulated_percent: Decimal,
}

impl ProgressionDto {
    /// Create from domain entity with its running total
    pub fn from_domain(progression: &Progression, accumulated_percent: Decimal) -> Self {
        Self {
            date: progression.date(),
            percent: progression.percent(),
            accumulated_percent,
        }
    }
}
