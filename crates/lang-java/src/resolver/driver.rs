use super::member::{TypeOutcome, resolve_type};
use crate::builtin;
use crate::config::ResolverConfig;
use javadjust_api::{Api, ErrorSink, TypeId};
use smol_str::SmolStr;

/// Totals of one [`ApiResolver::resolve_all`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    pub passes: usize,
    /// Qualified names of removed types, in removal order.
    pub removed_types: Vec<SmolStr>,
    pub removed_members: usize,
    pub dropped_interfaces: usize,
    pub unresolved_constraints: usize,
    /// False only when `max_passes` cut the run short.
    pub converged: bool,
}

impl ResolveSummary {
    fn absorb(&mut self, outcome: TypeOutcome) {
        self.removed_members += outcome.removed_members;
        self.dropped_interfaces += outcome.dropped_interfaces;
        self.unresolved_constraints += outcome.unresolved_constraints;
    }
}

/// Resolves a whole [`Api`] to its fixed point.
///
/// Every pass resolves all classes, then all interfaces, in declaration
/// order. A type that fails is removed, which may break references held by
/// types visited earlier in the same pass; those only surface in the next
/// pass, so passes repeat until one removes no type.
#[derive(Debug, Clone, Default)]
pub struct ApiResolver {
    config: ResolverConfig,
}

impl ApiResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn resolve_all(&self, api: &mut Api, sink: &mut dyn ErrorSink) -> ResolveSummary {
        if self.config.install_builtins && !api.has_builtins() {
            if let Err(e) = builtin::install(api) {
                sink.log_warning("<builtins>", &e.to_string());
            }
        }

        let mut summary = ResolveSummary::default();
        loop {
            if self.config.max_passes.is_some_and(|max| summary.passes >= max) {
                sink.log_warning(
                    "<api>",
                    &format!("stopped after {} passes without reaching a fixed point", summary.passes),
                );
                return summary;
            }
            summary.passes += 1;

            let _span = tracing::debug_span!("resolve_pass", pass = summary.passes).entered();
            let removed_before = summary.removed_types.len();

            for id in resolution_order(api) {
                match resolve_type(api, id, sink, &self.config) {
                    Ok(outcome) => summary.absorb(outcome),
                    Err(e) => {
                        let name = api.qualified_name(id).unwrap_or_default();
                        tracing::debug!(type_name = %name, error = %e, "removing type");
                        sink.log_error(&name, &format!("Error while processing type '{name}': {e}"));
                        api.remove_type(id);
                        summary.removed_types.push(name.into());
                    }
                }
            }

            let removed = summary.removed_types.len() - removed_before;
            tracing::debug!(pass = summary.passes, removed, "pass finished");
            if removed == 0 {
                break;
            }
        }

        summary.converged = true;
        tracing::info!(
            passes = summary.passes,
            removed_types = summary.removed_types.len(),
            removed_members = summary.removed_members,
            remaining_types = api.type_count(),
            "api resolved"
        );
        summary
    }
}

/// Classes first, then interfaces, each in declaration order.
fn resolution_order(api: &Api) -> Vec<TypeId> {
    let classes = api.types().filter(|(_, t)| t.is_class()).map(|(id, _)| id);
    let interfaces = api.types().filter(|(_, t)| t.is_interface()).map(|(id, _)| id);
    classes.chain(interfaces).collect()
}
