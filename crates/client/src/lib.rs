pub mod config;
pub mod error;
pub mod http;
pub mod services;

pub use config::Config;
pub use error::{ApiError, ClientError, Result};
pub use http::{ApiClient, QueryParams, RequestOptions};
pub use services::github::GithubClient;
