//! Structured form of raw Java type signatures.
//!
//! API descriptions carry types as dotted strings such as
//! `java.util.Map.Entry<K, ? extends V>[]`. [`TypeName::parse`] turns them
//! into a [`TypeName`] tree without looking anything up.

mod types;

use crate::error::NameSyntaxError;
use crate::naming::WILDCARD;
use javadjust_api::WildcardKind;
use smol_str::SmolStr;

/// A parsed-but-unresolved type signature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeName {
    /// Qualified name with generic arguments stripped, `?` for wildcards.
    pub dotted_name: SmolStr,
    /// `None` when the name carries no `<...>`. Arguments of every segment of
    /// a nested name (`Outer<A>.Inner<B>`) are concatenated in source order.
    pub generic_arguments: Option<Vec<TypeName>>,
    /// Array dimensions, `...` counting as one.
    pub array_rank: u32,
    /// Wildcard bound kind; always `Unbounded` for non-wildcards.
    pub bound: WildcardKind,
    /// Wildcard bounds (`? extends A & B`).
    pub constraints: Vec<TypeName>,
}

impl TypeName {
    pub fn parse(text: &str) -> Result<TypeName, NameSyntaxError> {
        types::Parser::new(text).parse_type_name()
    }

    pub fn is_wildcard(&self) -> bool {
        self.dotted_name == WILDCARD
    }

    /// Generic arguments, or an empty slice for raw names.
    pub fn arguments(&self) -> &[TypeName] {
        self.generic_arguments.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> TypeName {
        TypeName::parse(text).unwrap()
    }

    #[test]
    fn parses_plain_and_primitive_names() {
        let name = parse("java.lang.String");
        assert_eq!(name.dotted_name, "java.lang.String");
        assert_eq!(name.generic_arguments, None);
        assert_eq!(name.array_rank, 0);

        assert_eq!(parse("  int ").dotted_name, "int");
    }

    #[test]
    fn parses_nested_generic_arguments() {
        let name = parse("java.util.Map<java.lang.String, java.util.List<T>>");
        assert_eq!(name.dotted_name, "java.util.Map");
        let args = name.arguments();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].dotted_name, "java.lang.String");
        assert_eq!(args[1].dotted_name, "java.util.List");
        assert_eq!(args[1].arguments()[0].dotted_name, "T");
    }

    #[test]
    fn generic_outer_segments_are_stripped_from_the_dotted_name() {
        let name = parse("a.Outer<K>.Inner<V>");
        assert_eq!(name.dotted_name, "a.Outer.Inner");
        let args: Vec<_> = name.arguments().iter().map(|a| a.dotted_name.as_str()).collect();
        assert_eq!(args, ["K", "V"]);
    }

    #[test]
    fn counts_array_dimensions_and_varargs() {
        assert_eq!(parse("int[][]").array_rank, 2);
        assert_eq!(parse("int [ ] [ ]").array_rank, 2);
        assert_eq!(parse("java.lang.Object...").array_rank, 1);
        assert_eq!(parse("java.lang.String[]...").array_rank, 2);
        assert_eq!(parse("java.util.List<int[]>[]").arguments()[0].array_rank, 1);
    }

    #[test]
    fn parses_wildcards() {
        let name = parse("java.util.List<?>");
        let wildcard = &name.arguments()[0];
        assert!(wildcard.is_wildcard());
        assert_eq!(wildcard.bound, WildcardKind::Unbounded);
        assert!(wildcard.constraints.is_empty());

        let name = parse("java.lang.Comparable<? super T>");
        let wildcard = &name.arguments()[0];
        assert_eq!(wildcard.bound, WildcardKind::Super);
        assert_eq!(wildcard.constraints[0].dotted_name, "T");

        let name = parse("? extends java.lang.Number & java.lang.Comparable<T>");
        assert_eq!(name.bound, WildcardKind::Extends);
        assert_eq!(name.constraints.len(), 2);
    }

    #[test]
    fn rejects_malformed_names() {
        for text in [
            "",
            "   ",
            "java.util.List<>",
            "java.util.List<T",
            "java.util.",
            "int[",
            "?[]",
            "java.lang.String extra",
            "a..b",
            "1abc",
            "? extends",
            "Foo...[]",
        ] {
            assert!(TypeName::parse(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let nested = |depth: usize| {
            format!("{}a.X{}", "a.X<".repeat(depth), ">".repeat(depth))
        };
        assert!(TypeName::parse(&nested(types::MAX_NESTING - 1)).is_ok());

        let err = TypeName::parse(&nested(types::MAX_NESTING)).unwrap_err();
        assert_eq!(err.reason, "type nesting too deep");

        let unterminated = "a.X<".repeat(100_000);
        let err = TypeName::parse(&unterminated).unwrap_err();
        assert_eq!(err.reason, "type nesting too deep");
        assert_eq!(err.offset, "a.X<".len() * types::MAX_NESTING);
    }

    #[test]
    fn syntax_errors_report_the_offset() {
        let err = TypeName::parse("java.util.List<>").unwrap_err();
        assert_eq!(err.offset, 15);
        assert_eq!(err.text, "java.util.List<>");
    }
}
