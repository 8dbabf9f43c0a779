use super::{TypeResolver, TypeScope};
use crate::config::{InterfacePolicy, ResolverConfig};
use crate::error::Result;
use crate::naming::build_member_fqn;
use javadjust_api::{
    Api, Constructor, DeclaredType, ErrorSink, Field, Member, Method, TypeId, TypeKind,
    TypeParameter, TypeReference, TypeVarOwner,
};

/// What resolving one declared type removed or gave up on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeOutcome {
    pub removed_members: usize,
    pub dropped_interfaces: usize,
    pub unresolved_constraints: usize,
}

/// Resolve the type parameters, supertypes and members of `id` in place.
///
/// Member failures are logged and remove only the member. A failing
/// superclass, or a failing interface under [`InterfacePolicy::RemoveType`],
/// is returned as an error and the stored type is left untouched; removing it
/// is up to the caller. Constructor entries of interfaces stay unresolved.
pub fn resolve_type(
    api: &mut Api,
    id: TypeId,
    sink: &mut dyn ErrorSink,
    config: &ResolverConfig,
) -> Result<TypeOutcome> {
    let Some(declared) = api.declared(id) else {
        return Ok(TypeOutcome::default());
    };
    let mut working = declared.clone();

    let outcome = MemberResolver {
        resolver: TypeResolver::new(api),
        id,
        fqn: working.qualified_name(),
        sink,
        config,
        outcome: TypeOutcome::default(),
    }
    .run(&mut working)?;

    if let Some(slot) = api.declared_mut(id) {
        *slot = working;
    }
    Ok(outcome)
}

struct MemberResolver<'a, 's> {
    resolver: TypeResolver<'a>,
    id: TypeId,
    fqn: String,
    sink: &'s mut dyn ErrorSink,
    config: &'a ResolverConfig,
    outcome: TypeOutcome,
}

impl MemberResolver<'_, '_> {
    fn run(mut self, ty: &mut DeclaredType) -> Result<TypeOutcome> {
        let fqn = self.fqn.clone();
        self.resolve_constraints(&fqn, TypeVarOwner::Type(self.id), &mut ty.type_parameters, &[]);

        if let TypeKind::Class(info) = &mut ty.kind {
            if let Some(extends) = &mut info.extends {
                let scopes = [TypeScope::for_type(self.id, &ty.type_parameters)];
                extends.resolved = Some(self.resolver.resolve(&extends.signature, &scopes)?);
            }
        }

        self.resolve_interfaces(ty)?;

        let is_class = ty.is_class();
        let type_params = &ty.type_parameters;
        ty.members
            .retain_mut(|m| !matches!(m, Member::Field(_)) || self.resolve_member(m, type_params));
        ty.members
            .retain_mut(|m| !matches!(m, Member::Method(_)) || self.resolve_member(m, type_params));
        if is_class {
            ty.members.retain_mut(|m| {
                !matches!(m, Member::Constructor(_)) || self.resolve_member(m, type_params)
            });
        }

        Ok(self.outcome)
    }

    fn resolve_interfaces(&mut self, ty: &mut DeclaredType) -> Result<()> {
        let scopes = [TypeScope::for_type(self.id, &ty.type_parameters)];
        let mut kept = Vec::with_capacity(ty.implements.len());
        for mut iface in std::mem::take(&mut ty.implements) {
            match self.resolver.resolve(&iface.signature, &scopes) {
                Ok(resolved) => {
                    iface.resolved = Some(resolved);
                    kept.push(iface);
                }
                Err(e) => match self.config.interface_policy {
                    InterfacePolicy::RemoveType => return Err(e),
                    InterfacePolicy::DropInterface => {
                        self.sink.log_error(
                            &self.fqn,
                            &format!("dropping interface '{}': {e}", iface.signature),
                        );
                        self.outcome.dropped_interfaces += 1;
                    }
                },
            }
        }
        ty.implements = kept;
        Ok(())
    }

    /// Returns whether the member survives.
    fn resolve_member(&mut self, member: &mut Member, type_params: &[TypeParameter]) -> bool {
        let label = build_member_fqn(&self.fqn, &*member);
        let result = match member {
            Member::Field(f) => self.resolve_field(f, type_params),
            Member::Method(m) => self.resolve_method(m, type_params, &label),
            Member::Constructor(c) => self.resolve_constructor(c, type_params),
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(member = %label, error = %e, "removing member");
                self.sink.log_error(&label, &e.to_string());
                self.outcome.removed_members += 1;
                false
            }
        }
    }

    fn resolve_field(&self, field: &mut Field, type_params: &[TypeParameter]) -> Result<()> {
        let scopes = [TypeScope::for_type(self.id, type_params)];
        field.field_type.resolved = Some(self.resolver.resolve(&field.field_type.signature, &scopes)?);
        Ok(())
    }

    fn resolve_method(
        &mut self,
        method: &mut Method,
        type_params: &[TypeParameter],
        label: &str,
    ) -> Result<()> {
        let type_scope = TypeScope::for_type(self.id, type_params);
        let owner = TypeVarOwner::Method {
            declaring: self.id,
            method: label.into(),
        };
        self.resolve_constraints(
            label,
            owner,
            &mut method.type_parameters,
            std::slice::from_ref(&type_scope),
        );

        let (parameters, return_type) = {
            let scopes = [
                TypeScope::for_method(self.id, label, &method.type_parameters),
                type_scope,
            ];
            let parameters = self.resolve_parameters(&method.parameters, &scopes)?;
            let return_type = self.resolver.resolve(&method.return_type.signature, &scopes)?;
            (parameters, return_type)
        };

        for (p, resolved) in method.parameters.iter_mut().zip(parameters) {
            p.parameter_type.resolved = Some(resolved);
        }
        method.return_type.resolved = Some(return_type);
        Ok(())
    }

    fn resolve_constructor(
        &self,
        ctor: &mut Constructor,
        type_params: &[TypeParameter],
    ) -> Result<()> {
        let scopes = [TypeScope::for_type(self.id, type_params)];
        let parameters = self.resolve_parameters(&ctor.parameters, &scopes)?;
        for (p, resolved) in ctor.parameters.iter_mut().zip(parameters) {
            p.parameter_type.resolved = Some(resolved);
        }
        Ok(())
    }

    fn resolve_parameters(
        &self,
        parameters: &[javadjust_api::Parameter],
        scopes: &[TypeScope<'_>],
    ) -> Result<Vec<TypeReference>> {
        parameters
            .iter()
            .map(|p| self.resolver.resolve(&p.parameter_type.signature, scopes))
            .collect()
    }

    /// Best-effort resolution of generic bounds. Failures are warnings and
    /// leave the bound unresolved; bounds that failed before are skipped.
    fn resolve_constraints(
        &mut self,
        context: &str,
        owner: TypeVarOwner,
        params: &mut [TypeParameter],
        outer: &[TypeScope<'_>],
    ) {
        let results: Vec<Vec<Option<Result<TypeReference>>>> = {
            let mut scopes = Vec::with_capacity(outer.len() + 1);
            scopes.push(TypeScope {
                owner,
                parameters: &*params,
            });
            scopes.extend_from_slice(outer);
            params
                .iter()
                .map(|p| {
                    p.constraints
                        .iter()
                        .map(|c| {
                            (!c.unresolvable)
                                .then(|| self.resolver.resolve(&c.bound.signature, &scopes))
                        })
                        .collect()
                })
                .collect()
        };

        for (param, results) in params.iter_mut().zip(results) {
            for (constraint, result) in param.constraints.iter_mut().zip(results) {
                match result {
                    None => {}
                    Some(Ok(resolved)) => constraint.bound.resolved = Some(resolved),
                    Some(Err(e)) => {
                        self.sink.log_warning(
                            context,
                            &format!(
                                "failed to resolve generic constraint '{}': {e}",
                                constraint.bound.signature
                            ),
                        );
                        constraint.bound.resolved = None;
                        constraint.unresolvable = true;
                        self.outcome.unresolved_constraints += 1;
                    }
                }
            }
        }
    }
}
