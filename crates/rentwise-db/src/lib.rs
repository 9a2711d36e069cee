//! # Rentwise DB
//!
//! Storage for users and property listings.
//!
//! Handlers never touch a database directly. They go through the
//! [`UserStore`] and [`PropertyStore`] traits held in the application
//! state, which are implemented by:
//!
//! - [`PgStore`]: PostgreSQL via SQLx, schema in `migrations/`
//! - [`MemoryStore`]: process-local maps, used by tests and
//!   `STORE_BACKEND=memory`
//!
//! ```ignore
//! use std::sync::Arc;
//! use rentwise_db::{MemoryStore, PropertyStore, UserStore};
//!
//! let store = Arc::new(MemoryStore::new());
//! let users: Arc<dyn UserStore> = store.clone();
//! let properties: Arc<dyn PropertyStore> = store;
//! ```

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::{PgStore, init_db_pool, run_migrations};
pub use sqlx::PgPool;
pub use store::{PropertyStore, UserStore};
