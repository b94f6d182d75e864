//! Request model for registry operations.

use crate::error::{Error, Result};

/// Coordinates and payload for one registry operation.
///
/// Immutable once built; construct a fresh value per call. `owner`,
/// `api` and `version` are required and must be non-empty. Owner and
/// API may contain pre-encoded characters; they are inserted into the
/// request URL verbatim, never re-encoded.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Organization or user owning the API on the registry.
    pub owner: String,

    /// Registry API identifier.
    pub api: String,

    /// API version the operation targets.
    pub version: String,

    /// Document format ("json" or "yaml"); selects the media-type
    /// suffix for Accept/Content-Type headers.
    pub format: String,

    /// Document text to publish. Absent for fetch and set-default.
    pub definition: Option<String>,

    /// OpenAPI Specification version tag ("2.0", "3.0.0", ...).
    /// Metadata only; passed through on upload.
    pub oas: Option<String>,

    /// Publish the definition as private.
    pub private: bool,

    /// Expand all internal references server-side on fetch.
    pub resolved: bool,
}

impl ApiRequest {
    /// Create a request for the given API coordinates.
    ///
    /// Fails with [`Error::InvalidRequest`] if any coordinate is empty.
    pub fn new(
        owner: impl Into<String>,
        api: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let owner = owner.into();
        let api = api.into();
        let version = version.into();

        for (name, value) in [("owner", &owner), ("api", &api), ("version", &version)] {
            if value.is_empty() {
                return Err(Error::InvalidRequest(format!("{name} must not be empty")));
            }
        }

        Ok(Self {
            owner,
            api,
            version,
            format: "json".to_string(),
            definition: None,
            oas: None,
            private: false,
            resolved: false,
        })
    }

    /// Set the document format (defaults to "json").
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Attach the document text for an upload.
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    /// Set the OpenAPI Specification version tag.
    pub fn with_oas(mut self, oas: impl Into<String>) -> Self {
        self.oas = Some(oas.into());
        self
    }

    /// Mark the published definition as private.
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Request server-side reference resolution on fetch.
    pub fn with_resolved(mut self, resolved: bool) -> Self {
        self.resolved = resolved;
        self
    }
}
