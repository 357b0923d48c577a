mod core;
mod csrf;
mod transfer;


pub use core::ApiClient;

pub(crate) use transfer::file_part;
