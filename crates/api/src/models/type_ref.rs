use super::graph::TypeId;
use smol_str::SmolStr;
use std::fmt;

/// Java primitive kinds, plus `void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Void,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.keyword() == keyword)
    }
}

/// Bound kind of a wildcard type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WildcardKind {
    #[default]
    Unbounded,
    Extends,
    Super,
}

/// The generic scope that declares a type variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeVarOwner {
    Type(TypeId),
    /// `method` is the full member label (`pkg.Type#name(params)`), so
    /// overloads of one generic method own distinct variables.
    Method { declaring: TypeId, method: SmolStr },
}

/// A resolved type signature.
///
/// Built fresh by the resolver on every attempt and owned by the slot that
/// asked for it. `Class` nodes only hold a [`TypeId`] handle: once the target
/// is removed from the [`Api`](super::graph::Api) the handle simply stops
/// resolving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeReference {
    Primitive(PrimitiveKind),
    TypeVariable {
        name: SmolStr,
        owner: TypeVarOwner,
    },
    Wildcard {
        kind: WildcardKind,
        bounds: Vec<TypeReference>,
    },
    Array {
        element: Box<TypeReference>,
        rank: u32,
    },
    Class {
        declared: TypeId,
        name: SmolStr,
        arguments: Vec<TypeReference>,
        rank: u32,
    },
}

impl TypeReference {
    pub const INT: TypeReference = TypeReference::Primitive(PrimitiveKind::Int);

    /// Wrap `element` into an array of `rank` dimensions. Rank 0 returns the
    /// element unchanged.
    pub fn array(element: TypeReference, rank: u32) -> Self {
        if rank == 0 {
            element
        } else {
            TypeReference::Array {
                element: Box::new(element),
                rank,
            }
        }
    }

    /// Total number of array dimensions, whether they are carried flat on a
    /// `Class` node or by (possibly nested) `Array` wrappers.
    pub fn array_rank(&self) -> u32 {
        match self {
            TypeReference::Array { element, rank } => rank + element.array_rank(),
            TypeReference::Class { rank, .. } => *rank,
            _ => 0,
        }
    }

    pub fn declared_type(&self) -> Option<TypeId> {
        match self {
            TypeReference::Class { declared, .. } => Some(*declared),
            TypeReference::Array { element, .. } => element.declared_type(),
            _ => None,
        }
    }

    /// Every declared type handle reachable from this reference, in
    /// left-to-right order.
    pub fn referenced_types(&self) -> Vec<TypeId> {
        let mut out = Vec::new();
        self.collect_types(&mut out);
        out
    }

    fn collect_types(&self, out: &mut Vec<TypeId>) {
        match self {
            TypeReference::Primitive(_) | TypeReference::TypeVariable { .. } => {}
            TypeReference::Wildcard { bounds, .. } => {
                bounds.iter().for_each(|b| b.collect_types(out));
            }
            TypeReference::Array { element, .. } => element.collect_types(out),
            TypeReference::Class {
                declared,
                arguments,
                ..
            } => {
                out.push(*declared);
                arguments.iter().for_each(|a| a.collect_types(out));
            }
        }
    }
}

fn write_dims(f: &mut fmt::Formatter<'_>, rank: u32) -> fmt::Result {
    for _ in 0..rank {
        f.write_str("[]")?;
    }
    Ok(())
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeReference::Primitive(kind) => f.write_str(kind.keyword()),
            TypeReference::TypeVariable { name, .. } => f.write_str(name),
            TypeReference::Wildcard { kind, bounds } => {
                f.write_str("?")?;
                let keyword = match kind {
                    WildcardKind::Unbounded => return Ok(()),
                    WildcardKind::Extends => " extends ",
                    WildcardKind::Super => " super ",
                };
                f.write_str(keyword)?;
                for (i, bound) in bounds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" & ")?;
                    }
                    write!(f, "{bound}")?;
                }
                Ok(())
            }
            TypeReference::Array { element, rank } => {
                write!(f, "{element}")?;
                write_dims(f, *rank)
            }
            TypeReference::Class {
                name,
                arguments,
                rank,
                ..
            } => {
                f.write_str(name)?;
                if !arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                write_dims(f, *rank)
            }
        }
    }
}
