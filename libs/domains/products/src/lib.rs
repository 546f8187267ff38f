//! Products Domain
//!
//! This module provides the product catalog: entities, business rules and
//! HTTP endpoints, backed by an in-memory store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{InMemoryProductRepository, ProductService, handlers};
//!
//! let repository = InMemoryProductRepository::with_seed_data();
//! let service = ProductService::new(repository);
//!
//! // Mount under `/api/products`
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProductRequest, Product, SearchQuery, UpdateProductRequest};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
