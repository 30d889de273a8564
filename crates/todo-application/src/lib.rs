//! Todo List Application Layer
//!
//! The Application Layer implements the todo list use cases by orchestrating
//! the `TodoItem` aggregate through the repository traits of the domain layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Application Layer                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Services          │ DTOs               │ Report                         │
//! │  ─────────         │ ────               │ ──────                         │
//! │  TodoListService   │ TodoItemCommand    │ render_item                    │
//! │                    │ ProgressionCommand │ render_items                   │
//! │                    │ TodoItemDto        │                                │
//! │                    │ ProgressionDto     │                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ depends on
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Layer                                     │
//! │  TodoItem, Progression, CategoryRegistry, TodoListRepository            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Responsibilities
//!
//! - **Use Case Orchestration**: lookup, validate, mutate, persist
//! - **DTO Mapping**: convert aggregates to presentation-safe DTOs
//! - **Reporting**: fixed-width progress report for all items
//! - **Error Mapping**: translate domain errors to application-level errors
//!
//! # Non-Goals
//!
//! - Domain rules (belong in the Domain Layer)
//! - HTTP handling (belongs in the API crate)

pub mod dto;
pub mod errors;
pub mod report;
pub mod services;

// Re-export commonly used types
pub use dto::*;
pub use errors::{ApplicationError, ApplicationResult};
pub use services::*;
