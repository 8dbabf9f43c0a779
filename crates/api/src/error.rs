use smol_str::SmolStr;

/// Errors raised while ingesting declarations into an [`Api`](crate::Api).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Duplicate package: {0}")]
    DuplicatePackage(SmolStr),
    #[error("Unknown package: {0}")]
    UnknownPackage(SmolStr),
    #[error("Duplicate type '{name}' in package '{package}'")]
    DuplicateType { package: SmolStr, name: SmolStr },
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
