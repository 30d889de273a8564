//! TodoItem Aggregate Root
//!
//! Owns the progression history and enforces every rule around it:
//! - percent of each progression in (0, 100]
//! - progression dates strictly increasing
//! - total progress never above 100%
//! - description edits and deletion only up to 50% progress

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{TodoItemId, MAX_PROGRESS_PERCENT, MAX_UPDATEABLE_PROGRESS_PERCENT};

use super::progression::Progression;

// ============================================================================
// TodoItem Aggregate Root
// ============================================================================

/// TodoItem Aggregate Root
///
/// Progressions are append-only and kept in insertion order, which the date
/// rule makes identical to chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    /// Immutable identity, assigned by the storage collaborator
    id: TodoItemId,

    /// Item title (non-empty)
    title: String,

    /// Free-form description, empty when none was given
    description: String,

    /// Category name from the registry
    category: String,

    /// Encapsulated progression history
    progressions: Vec<Progression>,
}

impl TodoItem {
    // ========================================================================
    // Factory Methods
    // ========================================================================

    /// Create a new todo item with no progressions
    ///
    /// Category membership in the registry is checked by the caller, which
    /// owns the registry; the aggregate only requires a non-empty name.
    pub fn create(
        id: TodoItemId,
        title: String,
        description: Option<String>,
        category: String,
    ) -> DomainResult<Self> {
        if id.value() <= 0 {
            return Err(DomainError::validation("id", "Id must be greater than zero"));
        }

        if title.trim().is_empty() {
            return Err(DomainError::validation("title", "Title is required"));
        }

        if category.trim().is_empty() {
            return Err(DomainError::validation("category", "Category is required"));
        }

        Ok(Self {
            id,
            title,
            description: description.unwrap_or_default(),
            category,
            progressions: Vec::new(),
        })
    }

    /// Reconstitute a todo item from persistence
    ///
    /// Bypasses validation since data was validated during original creation.
    pub fn reconstitute(
        id: TodoItemId,
        title: String,
        description: String,
        category: String,
        progressions: Vec<Progression>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            category,
            progressions,
        }
    }

    // ========================================================================
    // Progression Operations
    // ========================================================================

    /// Register progress made on `date`
    ///
    /// Rules are checked in order: percent range, date ordering, then the
    /// 100% ceiling. Equal dates count as a violation of the ordering rule.
    pub fn add_progression(&mut self, date: DateTime<Utc>, percent: Decimal) -> DomainResult<()> {
        Progression::validate_percent(percent)?;

        if let Some(latest) = self.latest_progression_date() {
            if date <= latest {
                return Err(DomainError::validation(
                    "date",
                    "Date must be greater than the date of any existing progression",
                ));
            }
        }

        let current = self.total_progress();
        if current + percent > MAX_PROGRESS_PERCENT {
            return Err(DomainError::validation(
                "percent",
                format!(
                    "Total progress cannot exceed {}%. Current: {}%, Attempted to add: {}%",
                    MAX_PROGRESS_PERCENT,
                    current.normalize(),
                    percent.normalize()
                ),
            ));
        }

        self.progressions.push(Progression::new(date, percent)?);
        Ok(())
    }

    // ========================================================================
    // Mutations gated by progress
    // ========================================================================

    /// Replace the description; `None` clears it
    pub fn update_description(&mut self, description: Option<String>) -> DomainResult<()> {
        if self.total_progress() > MAX_UPDATEABLE_PROGRESS_PERCENT {
            return Err(DomainError::InvalidState {
                reason: "Cannot update a TodoItem that has more than 50% progress".to_string(),
            });
        }

        self.description = description.unwrap_or_default();
        Ok(())
    }

    /// Whether the item may still be removed (total progress at most 50%)
    pub fn can_be_deleted(&self) -> bool {
        self.total_progress() <= MAX_UPDATEABLE_PROGRESS_PERCENT
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Exact sum of all progression percentages
    pub fn total_progress(&self) -> Decimal {
        self.progressions.iter().map(Progression::percent).sum()
    }

    /// Completed once the progressions add up to 100%
    pub fn is_completed(&self) -> bool {
        self.total_progress() >= MAX_PROGRESS_PERCENT
    }

    /// Date of the most recent progression, if any
    pub fn latest_progression_date(&self) -> Option<DateTime<Utc>> {
        self.progressions.iter().map(Progression::date).max()
    }

    /// Get immutable identity
    pub fn id(&self) -> TodoItemId {
        self.id
    }

    /// Get item title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get item description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get item category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get read-only access to progressions
    pub fn progressions(&self) -> &[Progression] {
        &self.progressions
    }
}
