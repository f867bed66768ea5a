mod http_handler;
mod relay_service;
mod server;

pub use http_handler::*;
pub use relay_service::*;
pub use server::*;
