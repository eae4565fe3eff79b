pub mod http;

pub use http::{HttpTransport, RawResponse, TransportError};
