//! JSON API over the view models
//!
//! Every page of the site has an endpoint returning its view model; the
//! server only resolves query parameters and maps not-found outcomes to 404.

pub mod handler;
pub mod server;

pub use handler::HttpError;
pub use server::{router, HttpServer, ServerConfig};
