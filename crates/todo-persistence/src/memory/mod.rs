//! In-Memory Repository Implementations
//!
//! Thread-safe in-memory implementations of domain repository interfaces.
//! Contents are lost when the process exits.

mod todo_list_repository;

pub use todo_list_repository::InMemoryTodoListRepository;
