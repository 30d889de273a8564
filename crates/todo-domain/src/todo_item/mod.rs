//! TodoItem Aggregate Root
//!
//! TodoItem aggregate with its Progression entities
//! - Aggregate root owning an append-only, date-ordered progression history
//! - Invariant enforcement (percent range, strictly increasing dates, 100% ceiling)
//! - 50% lock on description updates and deletion
//! - Completion derived from the progression total, never stored

mod progression;
mod todo_item;

pub use progression::Progression;
pub use todo_item::TodoItem;
