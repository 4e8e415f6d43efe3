//! Request handlers.

mod products;
mod response;


pub use products::*;
pub use response::*;
