//! Todo List Persistence Layer
//!
//! Infrastructure layer providing repository implementations for the
//! `TodoItem` aggregate. This crate implements the repository interfaces
//! defined in `todo-domain`.
//!
//! ## Features
//!
//! - **In-Memory Repository**: Thread-safe in-memory implementation, the
//!   default storage of the HTTP service
//! - **Sample Data**: Seeding of the development sample item
//!
//! ## Architecture
//!
//! Infrastructure implements domain interfaces
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Infrastructure Layer                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  memory/                     │  seed                             │
//! │  ─────────                   │  ────                             │
//! │  InMemoryTodoListRepository  │  seed_sample_data                 │
//! └─────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ implements
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Domain Layer                               │
//! │  TodoListReader, TodoListWriter, TodoListRepository              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use todo_persistence::memory::InMemoryTodoListRepository;
//! use todo_domain::value_objects::CategoryRegistry;
//! use std::sync::Arc;
//!
//! let repo = Arc::new(InMemoryTodoListRepository::new(CategoryRegistry::default()));
//! todo_persistence::seed::seed_sample_data(repo.as_ref()).await;
//! ```

pub mod error;
pub mod memory;
pub mod seed;

pub use error::PersistenceError;

// Re-export commonly used types
pub use memory::InMemoryTodoListRepository;
