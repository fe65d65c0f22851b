//! Items Domain
//!
//! CRUD for the single `items` resource, stored through SeaORM.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Not-found mapping, seeding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SQL and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_items::{handlers, ItemService, SqlItemRepository};
//!
//! let db = database::pool::connect("sqlite://items.db?mode=rwc").await?;
//! let service = ItemService::new(SqlItemRepository::new(db));
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;
pub mod sql;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{Item, ItemInput, MessageResponse, Pagination};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use seed::{default_items, seed_default_items};
pub use service::ItemService;
pub use sql::SqlItemRepository;
