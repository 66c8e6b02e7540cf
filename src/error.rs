//! Error types for native-platform

use thiserror::Error;

/// Errors produced by the strict identity parsers
///
/// Detection itself is total and never fails: raw host strings that match
/// nothing resolve to the `Unknown` variants. Only parsing a display form
/// back into a variant (`FromStr`) can reject its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The string is not one of the platform family names
    #[error("Unknown platform family: '{0}'")]
    UnknownFamily(String),

    /// The string is not one of the architecture names
    #[error("Unknown architecture: '{0}'")]
    UnknownArchitecture(String),
}

/// Result type alias for native-platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
