// Synaptik - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant keeps the path it concerns and the underlying cause.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Synaptik operations.
#[derive(Debug)]
pub enum SynaptikError {
    /// Reading or writing a project file failed.
    Project(ProjectError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for SynaptikError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shown verbatim in error dialogs, so no category prefix.
        match self {
            Self::Project(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SynaptikError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Project(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Project errors
// ---------------------------------------------------------------------------

/// Errors related to project file I/O.
#[derive(Debug)]
pub enum ProjectError {
    /// The project file could not be read (missing, permissions, not UTF-8).
    Read { path: PathBuf, source: io::Error },

    /// The project file could not be written.
    Write { path: PathBuf, source: io::Error },
}

impl ProjectError {
    /// Path the failed operation targeted.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "cannot write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ProjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<ProjectError> for SynaptikError {
    fn from(e: ProjectError) -> Self {
        Self::Project(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range or not recognised.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::ValueOutOfRange { .. } => None,
        }
    }
}

impl From<ConfigError> for SynaptikError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for Synaptik results.
pub type Result<T> = std::result::Result<T, SynaptikError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_project_error_display_names_path_and_cause() {
        let err = ProjectError::Read {
            path: PathBuf::from("missing.syn"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.syn"), "{msg}");
        assert!(msg.contains("no such file"), "{msg}");
    }

    #[test]
    fn test_top_level_error_is_transparent_and_chains() {
        let err: SynaptikError = ProjectError::Write {
            path: PathBuf::from("out.syn"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(err.to_string(), "cannot write 'out.syn': denied");
        let inner = err.source().expect("project error source");
        assert!(inner.source().is_some(), "io::Error must stay in the chain");
    }

    #[test]
    fn test_config_error_converts_into_top_level() {
        let err: SynaptikError = ConfigError::ValueOutOfRange {
            field: "ui.theme".to_string(),
            value: "neon".to_string(),
            expected: "dark or light".to_string(),
        }
        .into();
        assert!(matches!(err, SynaptikError::Config(_)));
        assert!(err.to_string().contains("ui.theme"));
        assert!(err.source().is_some());
    }
}
