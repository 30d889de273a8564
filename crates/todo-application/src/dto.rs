//! Data Transfer Objects (DTOs) for layer boundary crossing
//!
//! DTOs prevent domain model leakage to the presentation layer.
//! They provide a stable API contract while allowing domain internals to evolve.

pub mod todo_item;

// Re-export commonly used DTOs
pub use todo_item::*;
