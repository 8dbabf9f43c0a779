use std::fmt::Display;

/// Separator used between a type and its members (methods, fields, constructors).
pub const MEMBER_SEPARATOR: char = '#';

/// Separator used between packages and between package/class.
pub const TYPE_SEPARATOR: char = '.';

/// Dotted name the parser gives to wildcard type arguments.
pub const WILDCARD: &str = "?";

/// Build the diagnostic name of a member.
///
/// # Examples
/// ```ignore
/// build_member_fqn("com.example.MyClass", "myMethod(int)") => "com.example.MyClass#myMethod(int)"
/// ```
pub fn build_member_fqn(type_fqn: &str, member: impl Display) -> String {
    format!("{}{}{}", type_fqn, MEMBER_SEPARATOR, member)
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

pub fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
