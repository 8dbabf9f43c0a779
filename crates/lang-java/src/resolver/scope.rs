use javadjust_api::{TypeId, TypeParameter, TypeVarOwner};

/// One lexical layer of type parameters: a generic type or a generic method.
///
/// Resolution takes an ordered slice of scopes, innermost first.
#[derive(Debug, Clone)]
pub struct TypeScope<'a> {
    pub owner: TypeVarOwner,
    pub parameters: &'a [TypeParameter],
}

impl<'a> TypeScope<'a> {
    pub fn for_type(id: TypeId, parameters: &'a [TypeParameter]) -> Self {
        Self {
            owner: TypeVarOwner::Type(id),
            parameters,
        }
    }

    /// `method` is the member label built by
    /// [`build_member_fqn`](crate::naming::build_member_fqn).
    pub fn for_method(declaring: TypeId, method: &str, parameters: &'a [TypeParameter]) -> Self {
        Self {
            owner: TypeVarOwner::Method {
                declaring,
                method: method.into(),
            },
            parameters,
        }
    }

    pub fn declares(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.name == name)
    }
}

/// Owner of the innermost scope declaring `name`.
pub fn find_type_variable<'s>(scopes: &'s [TypeScope<'_>], name: &str) -> Option<&'s TypeVarOwner> {
    scopes
        .iter()
        .find(|scope| scope.declares(name))
        .map(|scope| &scope.owner)
}
