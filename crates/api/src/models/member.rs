use super::signature::{SignatureRef, TypeParameter};
use smol_str::SmolStr;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(Field),
    Method(Method),
    Constructor(Constructor),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Field(f) => &f.name,
            Member::Method(m) => &m.name,
            Member::Constructor(c) => &c.name,
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Member::Field(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Member::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_constructor(&self) -> Option<&Constructor> {
        match self {
            Member::Constructor(c) => Some(c),
            _ => None,
        }
    }

    /// True when every signature slot of the member carries a resolution.
    pub fn is_resolved(&self) -> bool {
        match self {
            Member::Field(f) => f.field_type.is_resolved(),
            Member::Method(m) => {
                m.return_type.is_resolved() && m.parameters.iter().all(Parameter::is_resolved)
            }
            Member::Constructor(c) => c.parameters.iter().all(Parameter::is_resolved),
        }
    }
}

impl From<Field> for Member {
    fn from(field: Field) -> Self {
        Member::Field(field)
    }
}

impl From<Method> for Member {
    fn from(method: Method) -> Self {
        Member::Method(method)
    }
}

impl From<Constructor> for Member {
    fn from(ctor: Constructor) -> Self {
        Member::Constructor(ctor)
    }
}

fn write_parameters(f: &mut fmt::Formatter<'_>, parameters: &[Parameter]) -> fmt::Result {
    f.write_str("(")?;
    for (i, p) in parameters.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(&p.parameter_type.signature)?;
    }
    f.write_str(")")
}

/// Renders the member the way diagnostics refer to it: `name` for fields,
/// `name(raw, param, types)` for methods and constructors.
impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Field(field) => f.write_str(&field.name),
            Member::Method(m) => {
                f.write_str(&m.name)?;
                write_parameters(f, &m.parameters)
            }
            Member::Constructor(c) => {
                f.write_str(&c.name)?;
                write_parameters(f, &c.parameters)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: SmolStr,
    pub field_type: SignatureRef,
}

impl Field {
    pub fn new(name: impl Into<SmolStr>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: SignatureRef::new(field_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: SmolStr,
    pub parameter_type: SignatureRef,
}

impl Parameter {
    pub fn new(name: impl Into<SmolStr>, parameter_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter_type: SignatureRef::new(parameter_type),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.parameter_type.is_resolved()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: SmolStr,
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<Parameter>,
    pub return_type: SignatureRef,
}

impl Method {
    pub fn new(name: impl Into<SmolStr>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: SignatureRef::new(return_type),
        }
    }

    pub fn with_type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn with_parameter(mut self, name: impl Into<SmolStr>, ty: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }
}

/// Constructors have no type-parameter scope of their own; their parameters
/// see only the declaring type's parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub name: SmolStr,
    pub parameters: Vec<Parameter>,
}

impl Constructor {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<SmolStr>, ty: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }
}
