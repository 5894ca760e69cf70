//! DynamoDB storage backend implementation.
//!
//! The table uses `id` as partition key and `date` as sort key; items carry
//! exactly the `id`, `date` and `name` string attributes.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
