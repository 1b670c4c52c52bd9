//! Type representation for declarations and inferred expressions.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::builtins::{self, REAL_TYPE_NAME};

/// A named type, optionally an array of that name.
///
/// When the type denotes a callable declaration, `params` holds the ordered
/// parameter types and `name`/`is_array` describe the return type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    pub name: String,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Type>>,
}

impl Type {
    /// Creates a scalar type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_array: false,
            params: None,
        }
    }

    /// Creates an array type.
    #[must_use]
    pub fn array(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_array: true,
            params: None,
        }
    }

    /// Creates a function type from its return type and parameter types.
    #[must_use]
    pub fn function(return_type: &Type, params: Vec<Type>) -> Self {
        Self {
            name: return_type.name.clone(),
            is_array: return_type.is_array,
            params: Some(params),
        }
    }

    #[must_use]
    pub fn void() -> Self {
        Self::new(builtins::VOID)
    }

    #[must_use]
    pub fn bool() -> Self {
        Self::new(builtins::BOOL)
    }

    #[must_use]
    pub fn string() -> Self {
        Self::new(builtins::STRING)
    }

    #[must_use]
    pub fn int32() -> Self {
        Self::new(builtins::INT32)
    }

    #[must_use]
    pub fn real64() -> Self {
        Self::new(REAL_TYPE_NAME)
    }

    /// Nominal equality: same name and same array-ness.
    ///
    /// Function parameters are never compared.
    #[must_use]
    pub fn matches(&self, other: &Type) -> bool {
        self.name == other.name && self.is_array == other.is_array
    }

    /// Returns the element type of an array type.
    #[must_use]
    pub fn element(&self) -> Self {
        Self::new(self.name.clone())
    }

    /// Returns the parameter types if this is a function type.
    #[must_use]
    pub fn parameters(&self) -> Option<&[Type]> {
        self.params.as_deref()
    }

    /// Returns true if this type denotes a callable declaration.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        self.params.is_some()
    }

    /// Returns true if values of this type can index an array.
    #[must_use]
    pub fn is_indexer(&self) -> bool {
        !self.is_array && builtins::is_indexer(&self.name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.is_array {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

/// Property table of a nominal record declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub properties: HashMap<String, Type>,
}

impl ObjectType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    /// Adds a property, replacing an earlier one with the same name.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.properties.insert(name.into(), ty);
        self
    }

    pub fn property(&self, name: &str) -> Option<&Type> {
        self.properties.get(name)
    }
}
