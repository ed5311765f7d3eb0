//! Food Items Domain
//!
//! Complete domain implementation for tracking pantry inventory: items with
//! expiration dates, storage placement, keywords, photos hosted on an
//! external file service, and a many-to-many category taxonomy.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, photo cleanup dispatch
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │ Repository  │     │  FileStore  │  ← external file host (best-effort)
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, listing adapter
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_food_items::{
//!     files::NoopFileStore,
//!     handlers,
//!     repository::InMemoryFoodItemRepository,
//!     service::FoodItemService,
//! };
//!
//! let repository = InMemoryFoodItemRepository::new();
//! let service = FoodItemService::new(repository, Arc::new(NoopFileStore));
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod files;
pub mod handlers;
pub mod listing;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{FoodItemError, FoodItemResult};
pub use files::{FileStore, FileStoreConfig, HttpFileStore, NoopFileStore};
pub use models::{
    CreateFoodItem, DeleteFoodItem, DeleteFoodItemResponse, DeletedFoodItem, FoodItem,
    FoodItemQuery, SortOrder, UpdateFoodItem,
};
pub use postgres::PgFoodItemRepository;
pub use repository::{FoodItemRepository, InMemoryFoodItemRepository};
pub use service::FoodItemService;
