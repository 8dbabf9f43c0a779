use smol_str::SmolStr;
use thiserror::Error;

/// Raw signature text that is not a well-formed Java type name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid type name '{text}' at offset {offset}: {reason}")]
pub struct NameSyntaxError {
    pub text: String,
    pub offset: usize,
    pub reason: &'static str,
}

/// A structured name that matched no type variable, wildcard, primitive, or
/// declared type in scope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeResolutionError {
    #[error(transparent)]
    Syntax(#[from] NameSyntaxError),
    #[error("Type '{0}' was not found.")]
    NotFound(SmolStr),
    #[error("primitive type '{0}' cannot take generic arguments")]
    GenericPrimitive(SmolStr),
}

pub type Result<T> = std::result::Result<T, TypeResolutionError>;
