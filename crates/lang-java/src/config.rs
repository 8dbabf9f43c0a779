/// What to do with a class or interface whose implemented-interface list does
/// not resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InterfacePolicy {
    /// Treat the interface like the superclass: remove the whole type.
    #[default]
    RemoveType,
    /// Log the failure and drop only the failing interface entry.
    DropInterface,
}

#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub interface_policy: InterfacePolicy,
    /// Hard cap on fixed-point passes. Resolution always terminates on its
    /// own; the cap only bounds work on very large inputs.
    pub max_passes: Option<usize>,
    /// Install the built-in pseudo-type registry before the first pass when
    /// the API has none.
    pub install_builtins: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            interface_policy: InterfacePolicy::default(),
            max_passes: None,
            install_builtins: true,
        }
    }
}
