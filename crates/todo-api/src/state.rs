//! Application state for the API server

use std::sync::Arc;
use std::time::Instant;

use todo_application::TodoListService;
use todo_persistence::InMemoryTodoListRepository;

/// Service type served by this API
pub type TodoService = TodoListService<InMemoryTodoListRepository>;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Todo list use cases
    pub todo_service: Arc<TodoService>,
    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(todo_service: Arc<TodoService>) -> Self {
        Self {
            todo_service,
            start_time: Instant::now(),
        }
    }

    /// Create state over an existing repository
    pub fn with_repository(repository: Arc<InMemoryTodoListRepository>) -> Self {
        Self::new(Arc::new(TodoListService::new(repository)))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
