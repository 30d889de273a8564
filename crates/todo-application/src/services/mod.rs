//! Application layer services
//!
//! These services orchestrate domain aggregates and implement use cases.
//! All services are stateless and use constructor injection for dependencies.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Services                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TodoListService - Todo items, progressions and reporting    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Responsibilities
//!
//! - Orchestrate multi-step use cases
//! - Validate requests before touching the aggregate
//! - Map domain entities to DTOs
//! - Audit-log every operation
//!
//! # Non-Goals
//!
//! - Domain logic (belongs in Domain Layer)
//! - Direct I/O (belongs in Infrastructure Layer)

mod todo_list_service;

pub use todo_list_service::TodoListService;
