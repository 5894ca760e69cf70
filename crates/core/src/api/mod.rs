//! Request parsing, error taxonomy and the response envelope shared by every
//! ToDo handler.

mod error;
mod payloads;
mod request;
mod response;

pub use error::{api_error_to_status_code, ApiError, INTERNAL_ERROR_MESSAGE};
pub use payloads::{ErrorPayload, ItemPayload, ItemsPayload, MessagePayload};
pub use request::ApiRequest;
pub use response::{response_headers, AllowedMethods, ApiResponse};
