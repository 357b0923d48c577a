mod errors;
mod main;
mod types;

pub use errors::ApiError;
pub use main::ApiClient;

pub(crate) use main::file_part;
