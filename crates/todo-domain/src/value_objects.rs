//! Value objects representing immutable domain concepts

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Upper bound for a single progression and for an item's total progress
pub const MAX_PROGRESS_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Items past this total progress can no longer be edited or deleted
pub const MAX_UPDATEABLE_PROGRESS_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Todo item identifier, assigned by the storage collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoItemId(i64);

impl TodoItemId {
    /// Wrap a raw identifier; positivity is checked by the aggregate
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw integer value
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Identifier following this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TodoItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TodoItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Closed, ordered set of valid category names
///
/// Injected into whichever component validates categories instead of living
/// in global state, so tests can supply their own set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// Categories available when nothing else is configured
    pub const DEFAULT_CATEGORIES: [&'static str; 5] =
        ["Work", "Personal", "Shopping", "Health", "Education"];

    /// Build a registry, rejecting empty sets, blank names and duplicates
    pub fn new<I, S>(names: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(DomainError::validation(
                "categories",
                "At least one category is required",
            ));
        }

        for (index, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(DomainError::validation(
                    "categories",
                    "Category names cannot be blank",
                ));
            }
            if names[..index].contains(name) {
                return Err(DomainError::validation(
                    "categories",
                    format!("Duplicate category '{}'", name),
                ));
            }
        }

        Ok(Self { names })
    }

    /// Category names in registry order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Check membership (exact, case-sensitive match)
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            names: Self::DEFAULT_CATEGORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}
