//! Pseudo-types that API descriptions reference without declaring.
//!
//! They live in the registry packages of an [`Api`]: lookups fall back to them
//! after the declared packages, and the driver never resolves or removes them.

use javadjust_api::{Api, ApiResult, DeclaredType, TypeParameter};

#[derive(Clone, Copy)]
struct Builtin {
    package: &'static str,
    name: &'static str,
    interface: bool,
    type_parameters: &'static [&'static str],
}

const fn class(package: &'static str, name: &'static str) -> Builtin {
    Builtin {
        package,
        name,
        interface: false,
        type_parameters: &[],
    }
}

const fn interface(package: &'static str, name: &'static str) -> Builtin {
    Builtin {
        package,
        name,
        interface: true,
        type_parameters: &[],
    }
}

const fn generic(builtin: Builtin, type_parameters: &'static [&'static str]) -> Builtin {
    Builtin {
        type_parameters,
        ..builtin
    }
}

const BUILTINS: &[Builtin] = &[
    class("java.lang", "Object"),
    class("java.lang", "String"),
    generic(class("java.lang", "Class"), &["T"]),
    generic(class("java.lang", "Enum"), &["E"]),
    class("java.lang", "Number"),
    class("java.lang", "Throwable"),
    class("java.lang", "Exception"),
    class("java.lang", "RuntimeException"),
    generic(interface("java.lang", "Comparable"), &["T"]),
    generic(interface("java.lang", "Iterable"), &["T"]),
    interface("java.lang", "CharSequence"),
    interface("java.lang", "Cloneable"),
    interface("java.io", "Serializable"),
];

/// Register every built-in pseudo-type in `api`.
pub fn install(api: &mut Api) -> ApiResult<()> {
    for builtin in BUILTINS {
        let mut ty = if builtin.interface {
            DeclaredType::interface(builtin.name)
        } else {
            DeclaredType::class(builtin.name)
        };
        for param in builtin.type_parameters {
            ty = ty.with_type_parameter(TypeParameter::new(*param));
        }
        api.add_builtin_type(builtin.package, ty)?;
    }
    tracing::debug!(count = BUILTINS.len(), "installed builtin types");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_resolve_but_are_not_api_types() {
        let mut api = Api::new();
        install(&mut api).unwrap();

        assert!(api.has_builtins());
        assert_eq!(api.type_count(), 0);
        let comparable = api.find_type("java.lang.Comparable").unwrap();
        assert!(comparable.is_interface());
        assert_eq!(comparable.type_parameters[0].name, "T");
        assert!(api.find_type("java.io.Serializable").is_some());
    }

    #[test]
    fn installing_twice_is_rejected() {
        let mut api = Api::new();
        install(&mut api).unwrap();
        assert!(install(&mut api).is_err());
    }
}
