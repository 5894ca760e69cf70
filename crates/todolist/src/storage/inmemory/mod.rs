//! In-memory storage backend.
//!
//! Keeps serialized records in a `HashMap` wrapped in `Arc<RwLock<_>>`, so
//! every read goes through the same record decoding as a real store. Data is
//! lost when the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use todolist::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
