pub mod errors;
pub mod net;

pub use errors::{DecodeError, RequestError};
pub use net::*;
