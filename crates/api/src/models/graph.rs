use super::declared::DeclaredType;
use super::member::Member;
use super::type_ref::TypeReference;
use crate::error::{ApiError, ApiResult};
use indexmap::IndexMap;
use smol_str::SmolStr;

/// Stable handle of a declared type inside an [`Api`].
///
/// A handle outlives the type it names: after removal, [`Api::declared`]
/// returns `None` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct Package {
    name: SmolStr,
    types: IndexMap<SmolStr, TypeId>,
}

impl Package {
    fn new(name: SmolStr) -> Self {
        Self {
            name,
            types: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type handles in declaration order.
    pub fn type_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.types.values().copied()
    }

    pub fn get(&self, simple_name: &str) -> Option<TypeId> {
        self.types.get(simple_name).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Look up `qualified` as `<this package>.<simple name>`.
    fn lookup_qualified(&self, qualified: &str) -> Option<TypeId> {
        if self.name.is_empty() {
            return self.get(qualified);
        }
        qualified
            .strip_prefix(self.name.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|simple| self.get(simple))
    }
}

/// The declared-type universe: API packages, the built-in registry packages,
/// and the arena every [`TypeId`] points into.
#[derive(Debug, Default)]
pub struct Api {
    packages: IndexMap<SmolStr, Package>,
    builtins: IndexMap<SmolStr, Package>,
    types: Vec<Option<DeclaredType>>,
}

impl Api {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_package(&mut self, name: impl Into<SmolStr>) -> ApiResult<()> {
        let name = name.into();
        if self.packages.contains_key(&name) {
            return Err(ApiError::DuplicatePackage(name));
        }
        self.packages.insert(name.clone(), Package::new(name));
        Ok(())
    }

    /// Add a declared type to an existing package.
    pub fn add_type(&mut self, package: &str, ty: DeclaredType) -> ApiResult<TypeId> {
        let Some(pkg) = self.packages.get_mut(package) else {
            return Err(ApiError::UnknownPackage(package.into()));
        };
        Self::insert_into(pkg, &mut self.types, ty)
    }

    /// Register a pseudo-type in the built-in registry. Registry packages are
    /// created on demand and are only consulted after the API packages.
    pub fn add_builtin_type(&mut self, package: &str, ty: DeclaredType) -> ApiResult<TypeId> {
        let pkg = self
            .builtins
            .entry(SmolStr::new(package))
            .or_insert_with(|| Package::new(SmolStr::new(package)));
        Self::insert_into(pkg, &mut self.types, ty)
    }

    fn insert_into(
        pkg: &mut Package,
        arena: &mut Vec<Option<DeclaredType>>,
        mut ty: DeclaredType,
    ) -> ApiResult<TypeId> {
        if pkg.types.contains_key(&ty.name) {
            return Err(ApiError::DuplicateType {
                package: pkg.name.clone(),
                name: ty.name,
            });
        }
        let id = TypeId(arena.len() as u32);
        ty.package = pkg.name.clone();
        pkg.types.insert(ty.name.clone(), id);
        arena.push(Some(ty));
        Ok(id)
    }

    pub fn has_builtins(&self) -> bool {
        self.builtins.values().any(|p| !p.is_empty())
    }

    pub fn declared(&self, id: TypeId) -> Option<&DeclaredType> {
        self.types.get(id.index()).and_then(Option::as_ref)
    }

    pub fn declared_mut(&mut self, id: TypeId) -> Option<&mut DeclaredType> {
        self.types.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Remove a type from its package. Its handle stays allocated but no
    /// longer resolves.
    pub fn remove_type(&mut self, id: TypeId) -> Option<DeclaredType> {
        let ty = self.types.get_mut(id.index())?.take()?;
        for packages in [&mut self.packages, &mut self.builtins] {
            if let Some(pkg) = packages.get_mut(&ty.package) {
                if pkg.get(&ty.name) == Some(id) {
                    pkg.types.shift_remove(&ty.name);
                    break;
                }
            }
        }
        Some(ty)
    }

    pub fn packages(&self) -> impl Iterator<Item = &Package> + '_ {
        self.packages.values()
    }

    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// Live API types (registry excluded) in declaration order.
    pub fn types(&self) -> impl Iterator<Item = (TypeId, &DeclaredType)> + '_ {
        self.packages
            .values()
            .flat_map(|p| p.type_ids())
            .filter_map(|id| self.declared(id).map(|ty| (id, ty)))
    }

    pub fn type_count(&self) -> usize {
        self.packages.values().map(Package::len).sum()
    }

    pub fn qualified_name(&self, id: TypeId) -> Option<String> {
        self.declared(id).map(DeclaredType::qualified_name)
    }

    /// Symbol-table lookup of a generic-free qualified name: API packages
    /// first, then the built-in registry.
    pub fn find_non_generic_type(&self, name: &str) -> Option<TypeId> {
        self.packages
            .values()
            .find_map(|p| p.lookup_qualified(name))
            .or_else(|| self.builtins.values().find_map(|p| p.lookup_qualified(name)))
    }

    pub fn find_type(&self, name: &str) -> Option<&DeclaredType> {
        self.find_non_generic_type(name)
            .and_then(|id| self.declared(id))
    }

    /// True when `reference` names a type that is no longer in the graph.
    pub fn is_dangling(&self, reference: &TypeReference) -> bool {
        reference
            .referenced_types()
            .into_iter()
            .any(|id| self.declared(id).is_none())
    }

    /// Qualified names of live types that still hold a resolved reference to
    /// a removed type.
    pub fn dangling_holders(&self) -> Vec<String> {
        self.types()
            .filter(|(_, ty)| resolved_references(ty).any(|r| self.is_dangling(r)))
            .map(|(_, ty)| ty.qualified_name())
            .collect()
    }
}

fn resolved_references(ty: &DeclaredType) -> impl Iterator<Item = &TypeReference> + '_ {
    let supertypes = ty.extends().into_iter().chain(ty.implements.iter());
    let constraints = ty
        .type_parameters
        .iter()
        .flat_map(|p| p.constraints.iter().map(|c| &c.bound));
    let members = ty.members.iter().flat_map(|m| {
        let slots: Vec<_> = match m {
            Member::Field(f) => vec![&f.field_type],
            Member::Method(m) => std::iter::once(&m.return_type)
                .chain(m.parameters.iter().map(|p| &p.parameter_type))
                .chain(
                    m.type_parameters
                        .iter()
                        .flat_map(|p| p.constraints.iter().map(|c| &c.bound)),
                )
                .collect(),
            Member::Constructor(c) => c.parameters.iter().map(|p| &p.parameter_type).collect(),
        };
        slots
    });
    supertypes
        .chain(constraints)
        .chain(members)
        .filter_map(|slot| slot.resolved.as_ref())
}
