//! Import cache shared by every program loaded in one session.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use mlang_core::{Error, Type};

use crate::ast::{Declaration, Parameter, Program};

/// Path of the builtin module every cache starts with.
pub const SYSTEM_MODULE: &str = "system";

/// The builtin `system` module: `export void log(string message)`.
#[must_use]
pub fn system_module() -> Program {
    Program::new(vec![
        Declaration::function(
            "log",
            Type::void(),
            vec![Parameter::new("message", Type::string())],
            vec![],
        )
        .export(),
    ])
}

/// Maps import paths to parsed programs so repeated imports share one tree.
#[derive(Debug)]
pub struct ImportCache {
    programs: HashMap<String, Rc<Program>>,
    loading: HashSet<String>,
}

impl ImportCache {
    /// Creates a cache holding only the `system` module.
    #[must_use]
    pub fn new() -> Self {
        let mut cache = Self {
            programs: HashMap::new(),
            loading: HashSet::new(),
        };
        cache.seed();
        cache
    }

    fn seed(&mut self) {
        self.programs
            .insert(SYSTEM_MODULE.to_string(), Rc::new(system_module()));
    }

    /// Drops every cached program except `system`.
    pub fn clear(&mut self) {
        self.programs.clear();
        self.loading.clear();
        self.seed();
    }

    pub fn get(&self, path: &str) -> Option<Rc<Program>> {
        self.programs.get(path).cloned()
    }

    pub fn insert(&mut self, path: impl Into<String>, program: Program) -> Rc<Program> {
        let program = Rc::new(program);
        self.programs.insert(path.into(), Rc::clone(&program));
        program
    }

    pub fn contains(&self, path: &str) -> bool {
        self.programs.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Returns the cached program for `path`, or loads and caches it.
    ///
    /// `load` receives the cache so it can resolve the imports of the program
    /// it loads.
    ///
    /// # Errors
    /// Returns the loader's error, or [`Error::CyclicImport`] if `path` is
    /// requested again while it is still being loaded.
    pub fn resolve<F, E>(&mut self, path: &str, load: F) -> std::result::Result<Rc<Program>, E>
    where
        F: FnOnce(&mut Self, &str) -> std::result::Result<Program, E>,
        E: From<Error>,
    {
        if let Some(program) = self.get(path) {
            tracing::debug!(path, "import found in cache");
            return Ok(program);
        }
        if !self.loading.insert(path.to_string()) {
            return Err(Error::CyclicImport(path.to_string()).into());
        }

        tracing::debug!(path, "loading import");
        let loaded = load(self, path);
        self.loading.remove(path);
        Ok(self.insert(path, loaded?))
    }
}

impl Default for ImportCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_is_seeded_with_system() {
        let cache = ImportCache::new();
        let system = cache.get(SYSTEM_MODULE).unwrap();
        assert_eq!(system.exported().count(), 1);
        assert_eq!(system.nodes[0].name(), "log");
    }

    #[test]
    fn test_resolve_loads_once() {
        let mut cache = ImportCache::new();
        let mut loads = 0;
        let mut load = |_: &mut ImportCache, _: &str| -> Result<Program, Error> {
            loads += 1;
            Ok(Program::default())
        };
        let first = cache.resolve("util", &mut load).unwrap();
        let second = cache.resolve("util", &mut load).unwrap();
        assert_eq!(loads, 1);
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_resolve_detects_cycles() {
        fn empty(_: &mut ImportCache, _: &str) -> Result<Program, Error> {
            Ok(Program::default())
        }

        let mut cache = ImportCache::new();
        let result = cache.resolve("a", |cache, _| -> Result<Program, Error> {
            cache.resolve("b", |cache, _| -> Result<Program, Error> {
                cache.resolve("a", empty)?;
                Ok(Program::default())
            })?;
            Ok(Program::default())
        });
        assert!(matches!(result, Err(Error::CyclicImport(path)) if path == "a"));
        assert!(!cache.contains("a"));
        assert!(!cache.contains("b"));
    }

    #[test]
    fn test_clear_keeps_system() {
        let mut cache = ImportCache::new();
        cache.insert("util", Program::default());
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(SYSTEM_MODULE));
    }
}
