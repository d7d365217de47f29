//! Unified error types for theme generation and installation.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
    /// No usable API key was found in any configured source.
    MissingApiKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
            Self::MissingApiKey(msg) => write!(f, "missing API key: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the HTTP API layer.
#[derive(Debug)]
pub enum ApiError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the API.
    Status(u16, String),
}

impl ApiError {
    /// HTTP status code when this error came from a non-2xx response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(code, _) => Some(*code),
            Self::Http(e) => e.status().map(|status| status.as_u16()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code, body) => write!(f, "status {code}: {body}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Errors building or validating a theme and its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A value is not a `#RRGGBB` literal.
    InvalidColor { key: Option<String>, value: String },
    /// The theme name is empty or contains path/shell characters.
    InvalidName(String),
    /// Palette index outside `0..=15` or not a number.
    InvalidPaletteIndex(String),
    /// Key set twice on the same theme.
    DuplicateKey(String),
    /// Required keys absent from a generated theme.
    MissingKeys(Vec<String>),
    /// Key not part of the Ghostty theme schema.
    UnknownKey(String),
    /// Theme JSON was not an object of the expected shape.
    NotAnObject(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor {
                key: Some(key),
                value,
            } => write!(f, "invalid color `{value}` for `{key}`: expected #RRGGBB"),
            Self::InvalidColor { key: None, value } => {
                write!(f, "invalid color `{value}`: expected #RRGGBB")
            }
            Self::InvalidName(msg) => write!(f, "invalid theme name: {msg}"),
            Self::InvalidPaletteIndex(index) => {
                write!(f, "invalid palette index `{index}`: expected 0-15")
            }
            Self::DuplicateKey(key) => write!(f, "duplicate theme key `{key}`"),
            Self::MissingKeys(keys) => write!(f, "missing theme keys: {}", keys.join(", ")),
            Self::UnknownKey(key) => write!(f, "unknown theme key `{key}`"),
            Self::NotAnObject(msg) => write!(f, "malformed theme: {msg}"),
        }
    }
}

impl std::error::Error for ThemeError {}

// ---------------------------------------------------------------------------
// GenerationError
// ---------------------------------------------------------------------------

/// Errors while asking the model for a theme.
#[derive(Debug)]
pub enum GenerationError {
    Api(ApiError),
    /// Model returned no choices or an empty message.
    EmptyResponse,
    /// Model content did not parse as JSON; keeps the raw text for display.
    InvalidJson {
        source: serde_json::Error,
        raw: String,
    },
    /// JSON parsed but does not describe a valid theme.
    InvalidTheme(ThemeError),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "api: {e}"),
            Self::EmptyResponse => write!(f, "model returned empty response"),
            Self::InvalidJson { source, .. } => write!(f, "model did not return valid JSON: {source}"),
            Self::InvalidTheme(e) => write!(f, "model returned an invalid theme: {e}"),
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<ApiError> for GenerationError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

impl From<ThemeError> for GenerationError {
    fn from(e: ThemeError) -> Self {
        Self::InvalidTheme(e)
    }
}

// ---------------------------------------------------------------------------
// WriteError
// ---------------------------------------------------------------------------

/// Errors from a [`crate::install::PrivilegedWriter`].
#[derive(Debug)]
pub enum WriteError {
    /// The OS refused the write; eligible for an elevated retry.
    PermissionDenied(PathBuf),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The elevated helper could not be run or exited non-zero.
    Elevation(String),
}

impl WriteError {
    /// Classify an I/O failure for `path`, singling out permission errors.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied(path)
        } else {
            Self::Io { path, source }
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied(path) => write!(f, "permission denied: {}", path.display()),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Elevation(msg) => write!(f, "elevated write failed: {msg}"),
        }
    }
}

impl std::error::Error for WriteError {}

// ---------------------------------------------------------------------------
// InstallError
// ---------------------------------------------------------------------------

/// Errors while persisting or installing a theme.
#[derive(Debug)]
pub enum InstallError {
    /// Writing the inspection JSON file failed.
    Json(WriteError),
    Serialize(serde_json::Error),
    /// Target exists and the overwrite policy is `keep`.
    AlreadyExists(PathBuf),
    /// Install write was denied and elevation was declined or disabled.
    ElevationDeclined(PathBuf),
    /// Writing the flat theme file failed.
    Install(WriteError),
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "failed to save theme JSON: {e}"),
            Self::Serialize(e) => write!(f, "failed to serialize theme: {e}"),
            Self::AlreadyExists(path) => write!(
                f,
                "{} already exists and overwrite policy is `keep`",
                path.display()
            ),
            Self::ElevationDeclined(path) => write!(
                f,
                "no permission to write {} and elevation was not attempted",
                path.display()
            ),
            Self::Install(e) => write!(f, "failed to install theme: {e}"),
        }
    }
}

impl std::error::Error for InstallError {}

impl From<serde_json::Error> for InstallError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

// ---------------------------------------------------------------------------
// Error (top-level)
// ---------------------------------------------------------------------------

/// Top-level error type for one vibejam run.
#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    Theme(ThemeError),
    Generation(GenerationError),
    Install(InstallError),
    /// Reading interactive input failed.
    Input(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Theme(e) => write!(f, "theme: {e}"),
            Self::Generation(e) => write!(f, "generation failed: {e}"),
            Self::Install(e) => write!(f, "install: {e}"),
            Self::Input(e) => write!(f, "input: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ThemeError> for Error {
    fn from(e: ThemeError) -> Self {
        Self::Theme(e)
    }
}

impl From<GenerationError> for Error {
    fn from(e: GenerationError) -> Self {
        Self::Generation(e)
    }
}

impl From<InstallError> for Error {
    fn from(e: InstallError) -> Self {
        Self::Install(e)
    }
}
