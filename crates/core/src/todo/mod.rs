mod error;
mod generate;
mod types;
mod validation;

pub use error::{RecordError, ValidationError};
pub use generate::{format_timestamp, new_id, now_timestamp};
pub use types::{ToDo, ToDoAttributes, ToDoPrimaryKey};
pub use validation::{validate_date, validate_name, validate_uuid};
