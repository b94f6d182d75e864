//! # apihub-client
//!
//! Blocking HTTP client for synchronizing OpenAPI/Swagger definitions
//! with a SwaggerHub-compatible registry.
//!
//! Three operations are supported: download a definition by
//! owner/api/version coordinates, publish a definition, and mark a
//! version as the default for an API. The document payload is treated
//! as an opaque string; it is never parsed or validated here.
//!
//! ## Example
//!
//! ```rust,ignore
//! use apihub_client::{ApiRequest, RegistryClient, RegistryConfig};
//!
//! fn main() -> apihub_client::Result<()> {
//!     let config = RegistryConfig::new("api.swaggerhub.com").with_token("API-KEY");
//!     let client = RegistryClient::new(config)?;
//!
//!     let request = ApiRequest::new("my-org", "petstore", "1.0.0")?;
//!     let definition = client.fetch_definition(&request)?;
//!     println!("{definition}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod request;

pub use client::{RegistryClient, RegistryConfig};
pub use error::{Error, FailureKind, Result};
pub use request::ApiRequest;
