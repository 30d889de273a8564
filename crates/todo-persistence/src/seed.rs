//! Sample data for development runs
//!
//! Failures are logged and swallowed: a server that cannot seed still starts.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use todo_domain::{
    errors::{DomainError, DomainResult},
    repositories::TodoListRepository,
    todo_item::TodoItem,
    value_objects::TodoItemId,
};

/// Insert the "Complete Project Report" sample item
///
/// Returns the id of the stored item, or `None` if seeding failed.
pub async fn seed_sample_data<R>(repository: &R) -> Option<TodoItemId>
where
    R: TodoListRepository + ?Sized,
{
    match try_seed(repository).await {
        Ok(id) => {
            info!(%id, "Seeded sample TodoItem");
            Some(id)
        }
        Err(err) => {
            warn!(error = %err, "Failed to seed sample data");
            None
        }
    }
}

async fn try_seed<R>(repository: &R) -> DomainResult<TodoItemId>
where
    R: TodoListRepository + ?Sized,
{
    let id = repository.next_id().await?;
    let mut item = TodoItem::create(
        id,
        "Complete Project Report".to_string(),
        Some("Finish the final report for the project".to_string()),
        "Work".to_string(),
    )?;

    for (day, percent) in [(18, 30), (19, 50), (20, 20)] {
        let date = Utc
            .with_ymd_and_hms(2025, 3, day, 0, 0, 0)
            .single()
            .ok_or_else(|| DomainError::StorageFailure {
                reason: format!("invalid sample date 2025-03-{}", day),
            })?;
        item.add_progression(date, Decimal::from(percent))?;
    }

    repository.add(&item).await?;
    Ok(id)
}
