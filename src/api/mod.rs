pub mod client;
pub mod error;
pub mod queries;
pub mod transport;
pub mod types;

pub use client::LeetCodeClient;
pub use error::{ApiError, GraphQLError, GraphQLErrorResponse};
pub use transport::{ClientOption, HttpRequest, HttpResponse, Transport, add_header, replace_transport};
