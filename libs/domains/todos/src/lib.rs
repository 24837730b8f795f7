//! Todos Domain
//!
//! This module provides the domain implementation for managing todo items.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Business logic: validation, enrichment
//! └──────┬──────┘
//!        │          (Clock and IdProvider injected alongside)
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Todo entity, status enum
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{InMemoryTodoRepository, TodoService};
//!
//! // Create repository and service
//! let repository = InMemoryTodoRepository::new();
//! let service = TodoService::new(repository);
//! ```

pub mod clock;
pub mod error;
pub mod ids;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use error::{TodoError, TodoResult};
pub use ids::{IdProvider, UuidProvider};
pub use models::{Todo, TodoStatus};
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use service::TodoService;
