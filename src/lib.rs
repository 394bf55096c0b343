mod views;
pub mod components;
pub mod dom;
mod utils;
pub mod server;
mod routes;
pub mod configs;
mod tests;
mod error;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::error::SubmitError;
