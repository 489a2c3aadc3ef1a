//! Identity-based value handles for enumerated domains.
//!
//! The engine never inspects the payload of a domain value: two values are
//! the same element if and only if they are the same allocation. Embedders
//! construct their values once, keep the [`ValueRef`] handles, and reuse the
//! same handle everywhere the value is meant to occur.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

/// The capability an embedder-supplied domain value must provide.
///
/// Identity comes from the allocation, not from this trait; the only thing
/// the engine ever asks of the payload is a printable label.
pub trait EnumValue: std::fmt::Debug + Send + Sync + 'static {
    fn label(&self) -> String;
}

/// A cheap, clonable handle to an [`EnumValue`].
///
/// Equality and hashing are by identity of the underlying allocation. Two
/// structurally identical values created separately are *different* domain
/// elements.
#[derive(Clone)]
pub struct ValueRef(Arc<dyn EnumValue>);

impl ValueRef {
    pub fn new<V: EnumValue>(value: V) -> Self {
        Self(Arc::new(value))
    }

    pub fn from_arc(value: Arc<dyn EnumValue>) -> Self {
        Self(value)
    }

    pub fn label(&self) -> String {
        self.0.label()
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for ValueRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.addr(), other.addr())
    }
}

impl Eq for ValueRef {}

impl Hash for ValueRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.addr() as usize).hash(state);
    }
}

impl fmt::Debug for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The payload behind the two solver-wide boolean sentinels.
#[derive(Debug)]
pub struct BoolValue(bool);

impl BoolValue {
    pub fn value(&self) -> bool {
        self.0
    }
}

impl EnumValue for BoolValue {
    fn label(&self) -> String {
        if self.0 { "True" } else { "False" }.to_string()
    }
}

static TRUE: LazyLock<ValueRef> = LazyLock::new(|| ValueRef::new(BoolValue(true)));
static FALSE: LazyLock<ValueRef> = LazyLock::new(|| ValueRef::new(BoolValue(false)));

/// The boolean `True` sentinel. Every call returns a handle to the same
/// allocation, so it compares equal only to itself.
pub fn true_value() -> ValueRef {
    TRUE.clone()
}

/// The boolean `False` sentinel.
pub fn false_value() -> ValueRef {
    FALSE.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Named(&'static str);

    impl EnumValue for Named {
        fn label(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn equality_is_by_identity_not_structure() {
        let a1 = ValueRef::new(Named("A"));
        let a2 = ValueRef::new(Named("A"));
        assert_eq!(a1, a1.clone());
        assert_ne!(a1, a2);
        assert_eq!(a1.label(), a2.label());
    }

    #[test]
    fn sentinels_are_stable_singletons() {
        assert_eq!(true_value(), true_value());
        assert_eq!(false_value(), false_value());
        assert_ne!(true_value(), false_value());
        assert_eq!(true_value().label(), "True");
        assert_eq!(false_value().label(), "False");
    }

    #[test]
    fn hashes_follow_identity() {
        let a = ValueRef::new(Named("A"));
        let set: im::HashSet<ValueRef> = [a.clone(), a.clone()].into_iter().collect();
        assert_eq!(set.len(), 1);
        let set: im::HashSet<ValueRef> =
            [a, ValueRef::new(Named("A"))].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
