//! Type environment of a program: what its functions may refer to.

use std::collections::HashMap;

use mlang_ast::{Declaration, Program};
use mlang_core::{Error, ObjectType, Result, Type};

/// Function and object types visible inside a program.
///
/// Built from every exported declaration of every import followed by every
/// local declaration; a later declaration replaces an earlier one of the same
/// name.
#[derive(Debug, Default)]
pub struct TypeEnvironment {
    functions: HashMap<String, Type>,
    objects: HashMap<String, ObjectType>,
}

impl TypeEnvironment {
    /// Builds the environment of `program`.
    ///
    /// # Errors
    /// Returns [`Error::UnresolvedImport`] if an import has not been resolved.
    pub fn from_program(program: &Program) -> Result<Self> {
        let mut environment = Self::default();
        for import in &program.imports {
            let imported = import
                .program
                .as_ref()
                .ok_or_else(|| Error::UnresolvedImport(import.path.clone()))?;
            environment.extend(imported.exported());
        }
        environment.extend(program.nodes.iter());
        Ok(environment)
    }

    fn extend<'a>(&mut self, declarations: impl Iterator<Item = &'a Declaration>) {
        for declaration in declarations {
            match declaration {
                Declaration::Function(function) => {
                    let params = function.params.iter().map(|p| p.ty.clone()).collect();
                    self.functions.insert(
                        function.name.clone(),
                        Type::function(&function.return_type, params),
                    );
                }
                Declaration::Object(object) => {
                    let properties = object
                        .properties
                        .iter()
                        .map(|p| (p.name.clone(), p.ty.clone()))
                        .collect();
                    self.objects.insert(
                        object.name.clone(),
                        ObjectType {
                            name: object.name.clone(),
                            properties,
                        },
                    );
                }
            }
        }
    }

    /// Function types by name.
    pub fn functions(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.functions.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn function(&self, name: &str) -> Option<&Type> {
        self.functions.get(name)
    }

    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        self.objects.get(name)
    }
}
