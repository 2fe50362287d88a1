pub mod client;
pub mod client_trait;
pub mod config;
pub mod error;
pub mod models;

pub use client::GithubClient;
pub use client_trait::GithubClientTrait;
pub use config::Config;
pub use error::GithubClientError;
