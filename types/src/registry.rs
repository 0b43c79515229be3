use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use smallvec::SmallVec;
use snafu::ensure;

use crate::error::{DuplicateTypeSnafu, EmptyNameSnafu, InvalidNameSnafu, Result, UnknownBaseSnafu};
use crate::{BaseType, ClassType, Type, TypeHierarchy};

// Process-wide class id counter.
//
// Relaxed ordering is enough: ids only need to be unique.
static CLASS_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

struct ClassInfo {
    class: ClassType,
    bases: SmallVec<[Type; 2]>,
}

#[derive(Default)]
struct Classes {
    by_id: HashMap<u64, ClassInfo>,
    by_name: HashMap<Arc<str>, ClassType>,
}

/// Extensible set of classes layered over the builtin lattice.
#[derive(Default)]
pub struct TypeRegistry {
    classes: RwLock<Classes>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class deriving from `bases`.
    ///
    /// An empty base list derives from `object`. Class bases must already be
    /// registered here, which also rules out inheritance cycles.
    pub fn register_class(&self, name: &str, bases: &[Type]) -> Result<Type> {
        ensure!(!name.is_empty(), EmptyNameSnafu);
        ensure!(is_identifier(name), InvalidNameSnafu { name });
        ensure!(BaseType::from_str(name).is_err(), DuplicateTypeSnafu { name });

        let mut classes = self.classes.write();
        ensure!(!classes.by_name.contains_key(name), DuplicateTypeSnafu { name });

        for base in bases {
            if let Type::Class(class) = base {
                ensure!(classes.by_id.contains_key(&class.id()), UnknownBaseSnafu { name: class.name() });
            }
        }

        let bases: SmallVec<[Type; 2]> =
            if bases.is_empty() { SmallVec::from_elem(Type::Object, 1) } else { bases.iter().cloned().collect() };

        let id = CLASS_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        let name: Arc<str> = Arc::from(name);
        let class = ClassType::new(id, Arc::clone(&name));

        tracing::debug!(class.name = %name, class.id = id, bases = ?bases, "class registered");

        classes.by_name.insert(name, class.clone());
        classes.by_id.insert(id, ClassInfo { class: class.clone(), bases });
        Ok(Type::Class(class))
    }

    /// Look a type up by its signature name: builtins first, then classes.
    pub fn resolve(&self, name: &str) -> Option<Type> {
        if let Ok(base) = BaseType::from_str(name) {
            return Some(Type::Base(base));
        }
        self.classes.read().by_name.get(name).cloned().map(Type::Class)
    }

    pub fn contains(&self, class: &ClassType) -> bool {
        self.classes.read().by_id.contains_key(&class.id())
    }

    /// Registered classes, in registration order.
    pub fn classes(&self) -> Vec<ClassType> {
        let mut classes: Vec<_> = self.classes.read().by_id.values().map(|info| info.class.clone()).collect();
        classes.sort();
        classes
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.read().by_id.is_empty()
    }
}

impl TypeHierarchy for TypeRegistry {
    fn direct_bases(&self, class: &ClassType) -> SmallVec<[Type; 2]> {
        self.classes.read().by_id.get(&class.id()).map(|info| info.bases.clone()).unwrap_or_default()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Global type registry instance.
static REGISTRY: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::new);

/// Get the global type registry.
pub fn registry() -> &'static TypeRegistry {
    &REGISTRY
}

/// Declare a class in the global registry.
pub fn register_class(name: &str, bases: &[Type]) -> Result<Type> {
    registry().register_class(name, bases)
}

/// Resolve a type name against the global registry.
pub fn resolve(name: &str) -> Option<Type> {
    registry().resolve(name)
}
