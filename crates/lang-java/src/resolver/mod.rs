//! Resolution of raw signatures into [`TypeReference`]s.
//!
//! [`TypeResolver`] handles one signature, [`member`] one declared type, and
//! [`driver`] the whole [`Api`] until nothing else can be removed.

pub mod driver;
pub mod member;
pub mod scope;

pub use driver::{ApiResolver, ResolveSummary};
pub use member::{TypeOutcome, resolve_type};
pub use scope::{TypeScope, find_type_variable};

use crate::error::{Result, TypeResolutionError};
use crate::parser::TypeName;
use javadjust_api::{Api, PrimitiveKind, TypeReference};

/// Resolves structured names against the declared types of one [`Api`].
#[derive(Clone, Copy)]
pub struct TypeResolver<'a> {
    api: &'a Api,
}

impl<'a> TypeResolver<'a> {
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Parse `signature` and resolve it. Malformed text fails the same way an
    /// unknown name does, through [`TypeResolutionError`].
    pub fn resolve(&self, signature: &str, scopes: &[TypeScope<'_>]) -> Result<TypeReference> {
        let resolved = TypeName::parse(signature)
            .map_err(TypeResolutionError::from)
            .and_then(|name| self.resolve_name(&name, scopes));
        if let Err(e) = &resolved {
            tracing::trace!(signature, error = %e, "signature did not resolve");
        }
        resolved
    }

    /// The first interpretation that applies wins: type variable, wildcard,
    /// primitive, then declared type.
    pub fn resolve_name(&self, name: &TypeName, scopes: &[TypeScope<'_>]) -> Result<TypeReference> {
        self.resolve_type_variable(name, scopes)
            .or_else(|| self.resolve_wildcard(name, scopes))
            .or_else(|| self.resolve_primitive(name))
            .unwrap_or_else(|| self.resolve_declared(name, scopes))
    }

    fn resolve_type_variable(
        &self,
        name: &TypeName,
        scopes: &[TypeScope<'_>],
    ) -> Option<Result<TypeReference>> {
        let owner = find_type_variable(scopes, &name.dotted_name)?;
        let variable = TypeReference::TypeVariable {
            name: name.dotted_name.clone(),
            owner: owner.clone(),
        };
        Some(Ok(TypeReference::array(variable, name.array_rank)))
    }

    fn resolve_wildcard(
        &self,
        name: &TypeName,
        scopes: &[TypeScope<'_>],
    ) -> Option<Result<TypeReference>> {
        if !name.is_wildcard() {
            return None;
        }
        let wildcard = self
            .resolve_each(&name.constraints, scopes)
            .map(|bounds| TypeReference::Wildcard {
                kind: name.bound,
                bounds,
            });
        Some(wildcard.map(|w| TypeReference::array(w, name.array_rank)))
    }

    fn resolve_primitive(&self, name: &TypeName) -> Option<Result<TypeReference>> {
        let kind = PrimitiveKind::from_keyword(&name.dotted_name)?;
        if name.generic_arguments.is_some() {
            return Some(Err(TypeResolutionError::GenericPrimitive(
                name.dotted_name.clone(),
            )));
        }
        Some(Ok(TypeReference::array(
            TypeReference::Primitive(kind),
            name.array_rank,
        )))
    }

    fn resolve_declared(&self, name: &TypeName, scopes: &[TypeScope<'_>]) -> Result<TypeReference> {
        let declared = self
            .api
            .find_non_generic_type(&name.dotted_name)
            .ok_or_else(|| TypeResolutionError::NotFound(name.dotted_name.clone()))?;
        // Generic arguments see the same scopes as the name they decorate.
        let arguments = self.resolve_each(name.arguments(), scopes)?;
        Ok(TypeReference::Class {
            declared,
            name: name.dotted_name.clone(),
            arguments,
            rank: name.array_rank,
        })
    }

    fn resolve_each(
        &self,
        names: &[TypeName],
        scopes: &[TypeScope<'_>],
    ) -> Result<Vec<TypeReference>> {
        names.iter().map(|n| self.resolve_name(n, scopes)).collect()
    }
}
