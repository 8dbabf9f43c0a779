use super::type_ref::TypeReference;
use smol_str::SmolStr;

/// Raw signature text as delivered by ingestion, plus its resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRef {
    pub signature: String,
    pub resolved: Option<TypeReference>,
}

impl SignatureRef {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            resolved: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}

/// One bound of a type parameter, e.g. `Comparable<T>` in `T extends Comparable<T>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericConstraint {
    pub bound: SignatureRef,
    /// Set once resolution failed. Removal only ever shrinks the graph, so
    /// such a bound is never retried.
    pub unresolvable: bool,
}

/// A generic type parameter of a declared type or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: SmolStr,
    pub constraints: Vec<GenericConstraint>,
}

impl TypeParameter {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, bound: impl Into<String>) -> Self {
        self.constraints.push(GenericConstraint {
            bound: SignatureRef::new(bound),
            unresolvable: false,
        });
        self
    }
}
