//! Progression entity within a TodoItem
//!
//! A date-stamped slice of completion. Immutable once created.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::MAX_PROGRESS_PERCENT;

/// Progression entity within a TodoItem
#[derive(Debug, Clone, PartialEq)]
pub struct Progression {
    /// When the progress was made
    date: DateTime<Utc>,

    /// Share of the item completed, in (0, 100]
    percent: Decimal,
}

impl Progression {
    /// Create a progression, rejecting percentages outside (0, 100]
    pub fn new(date: DateTime<Utc>, percent: Decimal) -> DomainResult<Self> {
        Self::validate_percent(percent)?;
        Ok(Self { date, percent })
    }

    /// Check a percentage against the (0, 100] range
    pub fn validate_percent(percent: Decimal) -> DomainResult<()> {
        if percent <= Decimal::ZERO || percent > MAX_PROGRESS_PERCENT {
            return Err(DomainError::ValidationError {
                field: "percent".to_string(),
                reason: "Percent must be greater than 0 and less than or equal to 100"
                    .to_string(),
            });
        }
        Ok(())
    }

    /// Get progression date
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Get progression percentage
    pub fn percent(&self) -> Decimal {
        self.percent
    }
}
