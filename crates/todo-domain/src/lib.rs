//! Todo List Domain Layer
//!
//! Aggregates, value objects, domain errors and repository traits for the
//! todo list service. The domain layer has no I/O; storage is reached only
//! through the traits in [`repositories`].
//!
//! ```text
//! TodoItem (aggregate root)
//!   └── Progression* (append-only, strictly increasing dates)
//!
//! CategoryRegistry (injected, read-only)
//! TodoListReader + TodoListWriter = TodoListRepository
//! ```

pub mod errors;
pub mod repositories;
pub mod todo_item;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
pub use repositories::{TodoListReader, TodoListRepository, TodoListWriter};
pub use todo_item::{Progression, TodoItem};
pub use value_objects::{CategoryRegistry, TodoItemId};
