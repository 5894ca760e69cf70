//! Functional core of the todolist service: identifiers, validation, the ToDo
//! domain model, the storage adapter contract and the response envelope.
//!
//! Nothing here performs I/O; storage backends and the HTTP router live in
//! the `todolist` binary crate.

pub mod api;
pub mod storage;
pub mod todo;
