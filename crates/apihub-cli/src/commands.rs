//! CLI command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use thiserror::Error;

use apihub_client::{ApiRequest, RegistryClient, RegistryConfig};

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Registry(#[from] apihub_client::Error),

    #[error("Failed to upload API definition: an authorization token is required (--token)")]
    MissingToken,
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Registry connection settings shared by all subcommands.
#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// Registry host
    #[arg(long, default_value = "api.swaggerhub.com")]
    pub host: String,

    /// Registry port
    #[arg(long, default_value_t = 443)]
    pub port: u16,

    /// URL scheme (http or https)
    #[arg(long, default_value = "https")]
    pub protocol: String,

    /// Registry API key
    #[arg(long)]
    pub token: Option<String>,

    /// Target a self-hosted registry instance
    #[arg(long)]
    pub on_premise: bool,

    /// Path prefix for self-hosted registries
    #[arg(long, default_value = "v1")]
    pub on_premise_suffix: String,
}

impl RegistryArgs {
    fn to_config(&self) -> RegistryConfig {
        let mut config = RegistryConfig::new(&self.host)
            .with_port(self.port)
            .with_scheme(&self.protocol)
            .with_on_premise(self.on_premise)
            .with_on_premise_suffix(&self.on_premise_suffix);

        if let Some(token) = &self.token {
            config = config.with_token(token);
        }
        config
    }
}

/// Arguments for the `download` subcommand.
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// API owner (organization or user)
    #[arg(long)]
    pub owner: String,

    /// API identifier
    #[arg(long)]
    pub api: String,

    /// API version
    #[arg(long)]
    pub version: String,

    /// File to write the definition to
    #[arg(long)]
    pub output: PathBuf,

    /// Definition format (json or yaml)
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Expand all references server-side before download
    #[arg(long)]
    pub resolved: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

/// Arguments for the `upload` subcommand.
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// API owner (organization or user)
    #[arg(long)]
    pub owner: String,

    /// API identifier
    #[arg(long)]
    pub api: String,

    /// API version
    #[arg(long)]
    pub version: String,

    /// Definition file to upload
    #[arg(long)]
    pub input: PathBuf,

    /// Definition format (json or yaml)
    #[arg(long, default_value = "json")]
    pub format: String,

    /// OpenAPI Specification version of the document
    #[arg(long, default_value = "2.0")]
    pub oas: String,

    /// Publish the definition as private
    #[arg(long)]
    pub private: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

/// Arguments for the `set-default` subcommand.
#[derive(Args, Debug)]
pub struct SetDefaultArgs {
    /// API owner (organization or user)
    #[arg(long)]
    pub owner: String,

    /// API identifier
    #[arg(long)]
    pub api: String,

    /// Version to make the API default
    #[arg(long)]
    pub version: String,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

/// Download an API definition and write it to the output file.
pub fn download(args: &DownloadArgs) -> Result<()> {
    tracing::info!(
        host = %args.registry.host,
        owner = %args.owner,
        api = %args.api,
        version = %args.version,
        format = %args.format,
        resolved = args.resolved,
        output = %args.output.display(),
        on_premise = args.registry.on_premise,
        "downloading API definition"
    );

    let client = RegistryClient::new(args.registry.to_config())?;
    let request = ApiRequest::new(&args.owner, &args.api, &args.version)?
        .with_format(&args.format)
        .with_resolved(args.resolved);

    let definition = client.fetch_definition(&request)?;
    write_definition(&args.output, &definition)?;

    println!(
        "Saved {}/{} version {} to {}",
        args.owner,
        args.api,
        args.version,
        args.output.display()
    );
    Ok(())
}

/// Upload an API definition read from the input file.
pub fn upload(args: &UploadArgs) -> Result<()> {
    tracing::info!(
        host = %args.registry.host,
        owner = %args.owner,
        api = %args.api,
        version = %args.version,
        input = %args.input.display(),
        format = %args.format,
        private = args.private,
        oas = %args.oas,
        on_premise = args.registry.on_premise,
        "uploading API definition"
    );

    if args.registry.token.is_none() {
        return Err(CliError::MissingToken);
    }

    let definition = fs::read_to_string(&args.input)?;

    let client = RegistryClient::new(args.registry.to_config())?;
    let request = ApiRequest::new(&args.owner, &args.api, &args.version)?
        .with_format(&args.format)
        .with_oas(&args.oas)
        .with_private(args.private)
        .with_definition(definition);

    client.publish_definition(&request)?;

    println!(
        "Published {}/{} version {}",
        args.owner, args.api, args.version
    );
    Ok(())
}

/// Mark a version as the default for an API.
pub fn set_default(args: &SetDefaultArgs) -> Result<()> {
    tracing::info!(
        host = %args.registry.host,
        owner = %args.owner,
        api = %args.api,
        version = %args.version,
        on_premise = args.registry.on_premise,
        "setting default API version"
    );

    if args.registry.token.is_none() {
        return Err(CliError::MissingToken);
    }

    let client = RegistryClient::new(args.registry.to_config())?;
    let request = ApiRequest::new(&args.owner, &args.api, &args.version)?;

    client.set_default_version(&request)?;

    println!(
        "Set default version of {}/{} to {}",
        args.owner, args.api, args.version
    );
    Ok(())
}

/// Write the definition text, creating parent directories as needed.
fn write_definition(path: &Path, definition: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_definition_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("api").join("v1").join("petstore.json");

        write_definition(&nested, r#"{"swagger":"2.0"}"#).unwrap();

        assert_eq!(
            fs::read_to_string(&nested).unwrap(),
            r#"{"swagger":"2.0"}"#
        );
    }

    fn registry_args_without_token() -> RegistryArgs {
        RegistryArgs {
            host: "api.swaggerhub.com".to_string(),
            port: 443,
            protocol: "https".to_string(),
            token: None,
            on_premise: false,
            on_premise_suffix: "v1".to_string(),
        }
    }

    #[test]
    fn test_upload_without_token_names_the_operation() {
        let args = UploadArgs {
            owner: "owner".to_string(),
            api: "api".to_string(),
            version: "1.0.0".to_string(),
            input: PathBuf::from("does-not-exist.json"),
            format: "json".to_string(),
            oas: "2.0".to_string(),
            private: false,
            registry: registry_args_without_token(),
        };

        let err = upload(&args).unwrap_err();
        assert!(matches!(err, CliError::MissingToken));
        assert!(err
            .to_string()
            .starts_with("Failed to upload API definition: "));
    }

    #[test]
    fn test_set_default_without_token_names_the_operation() {
        let args = SetDefaultArgs {
            owner: "owner".to_string(),
            api: "api".to_string(),
            version: "1.0.0".to_string(),
            registry: registry_args_without_token(),
        };

        let err = set_default(&args).unwrap_err();
        assert!(matches!(err, CliError::MissingToken));
    }

    #[test]
    fn test_registry_args_to_config() {
        let args = RegistryArgs {
            host: "registry.local".to_string(),
            port: 8443,
            protocol: "http".to_string(),
            token: Some("KEY".to_string()),
            on_premise: true,
            on_premise_suffix: "proxy".to_string(),
        };

        let config = args.to_config();
        assert_eq!(config.host, "registry.local");
        assert_eq!(config.port, 8443);
        assert_eq!(config.scheme, "http");
        assert_eq!(config.token.as_deref(), Some("KEY"));
        assert!(config.on_premise);
        assert_eq!(config.on_premise_suffix, "proxy");
    }
}
