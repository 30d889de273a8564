//! Repository interfaces for data persistence
//!
//! These interfaces define the contracts for data access.
//! Implementations are provided by infrastructure crates; the domain layer
//! defines only the traits.

use async_trait::async_trait;

use crate::{errors::*, todo_item::TodoItem, value_objects::TodoItemId};

// ============================================================================
// Todo List Repository Ports (ISP-Compliant Split)
// ============================================================================

/// Read-only todo list operations
#[async_trait]
pub trait TodoListReader: Send + Sync {
    /// Find an item by ID
    async fn find_by_id(&self, id: &TodoItemId) -> DomainResult<Option<TodoItem>>;

    /// Find all items
    ///
    /// Order is backend-defined but stable within a single call.
    async fn find_all(&self) -> DomainResult<Vec<TodoItem>>;

    /// Category names in registry order
    async fn all_categories(&self) -> DomainResult<Vec<String>>;

    /// Check whether a category is registered
    async fn category_exists(&self, category: &str) -> DomainResult<bool>;
}

/// Write todo list operations
#[async_trait]
pub trait TodoListWriter: Send + Sync {
    /// Insert a new item
    async fn add(&self, item: &TodoItem) -> DomainResult<()>;

    /// Replace the stored item with the same ID (no-op if absent)
    async fn update(&self, item: &TodoItem) -> DomainResult<()>;

    /// Delete an item by ID (no-op if absent)
    async fn delete(&self, id: &TodoItemId) -> DomainResult<()>;

    /// Reserve a fresh ID
    ///
    /// IDs strictly increase for the lifetime of the repository and are never
    /// reused, even after deletions.
    async fn next_id(&self) -> DomainResult<TodoItemId>;
}

/// Full todo list repository
///
/// Implemented automatically for anything that implements both halves.
pub trait TodoListRepository: TodoListReader + TodoListWriter {}

impl<T> TodoListRepository for T where T: TodoListReader + TodoListWriter {}
