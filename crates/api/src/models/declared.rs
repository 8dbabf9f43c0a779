use super::member::Member;
use super::signature::{SignatureRef, TypeParameter};
use smol_str::SmolStr;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Class(ClassInfo),
    Interface,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassInfo {
    /// Superclass signature; `None` for `java.lang.Object` and friends.
    pub extends: Option<SignatureRef>,
}

/// A class or interface of the API description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredType {
    /// Simple name; nested types keep their outer names (`Map.Entry`).
    pub name: SmolStr,
    /// Name of the owning package. Filled in when the type is added to an `Api`.
    pub package: SmolStr,
    pub kind: TypeKind,
    pub type_parameters: Vec<TypeParameter>,
    pub implements: Vec<SignatureRef>,
    pub members: Vec<Member>,
}

impl DeclaredType {
    fn new(name: impl Into<SmolStr>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            package: SmolStr::default(),
            kind,
            type_parameters: Vec::new(),
            implements: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn class(name: impl Into<SmolStr>) -> Self {
        Self::new(name, TypeKind::Class(ClassInfo::default()))
    }

    pub fn interface(name: impl Into<SmolStr>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    /// Sets the superclass of a class. Interfaces list their super-interfaces
    /// as implemented interfaces, so on an interface this appends to
    /// `implements` instead.
    pub fn with_extends(mut self, signature: impl Into<String>) -> Self {
        match &mut self.kind {
            TypeKind::Class(info) => info.extends = Some(SignatureRef::new(signature)),
            TypeKind::Interface => self.implements.push(SignatureRef::new(signature)),
        }
        self
    }

    pub fn with_implements(mut self, signature: impl Into<String>) -> Self {
        self.implements.push(SignatureRef::new(signature));
        self
    }

    pub fn with_type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, TypeKind::Class(_))
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, TypeKind::Interface)
    }

    pub fn extends(&self) -> Option<&SignatureRef> {
        match &self.kind {
            TypeKind::Class(info) => info.extends.as_ref(),
            TypeKind::Interface => None,
        }
    }

    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.to_string()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &super::member::Field> + '_ {
        self.members.iter().filter_map(Member::as_field)
    }

    pub fn methods(&self) -> impl Iterator<Item = &super::member::Method> + '_ {
        self.members.iter().filter_map(Member::as_method)
    }

    pub fn constructors(&self) -> impl Iterator<Item = &super::member::Constructor> + '_ {
        self.members.iter().filter_map(Member::as_constructor)
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}.", self.package)?;
        }
        f.write_str(&self.name)
    }
}
