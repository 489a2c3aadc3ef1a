//! Binary all-different.

use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::{ConstraintId, VariableId},
    store::Store,
};

/// Enforces that two variables take different values.
///
/// Inference is only possible once a side becomes singleton: its value is
/// then pruned from the counterpart. Both sides are checked on every trigger
/// so the propagator does not depend on which variable woke it.
#[derive(Debug)]
pub struct DistinctConstraint {
    id: ConstraintId,
    vars: [VariableId; 2],
}

impl DistinctConstraint {
    pub(crate) fn new(id: ConstraintId, a: VariableId, b: VariableId) -> Self {
        Self { id, vars: [a, b] }
    }
}

impl Constraint for DistinctConstraint {
    fn scope(&self) -> &[VariableId] {
        &self.vars
    }

    fn propagate(&self, store: &mut Store, trigger: VariableId) -> bool {
        let other = if trigger == self.vars[0] {
            self.vars[1]
        } else {
            self.vars[0]
        };

        if let Some(value) = store.domain(trigger).singleton_value() {
            if store.allows(other, &value) && !store.remove(other, &value, Some(self.id)) {
                return false;
            }
        }
        if let Some(value) = store.domain(other).singleton_value() {
            if store.allows(trigger, &value) && !store.remove(trigger, &value, Some(self.id)) {
                return false;
            }
        }
        true
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "DistinctConstraint".to_string(),
            description: format!("?{} ≠ ?{}", self.vars[0], self.vars[1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::solver::{engine::Solver, value::EnumValue, value::ValueRef};

    #[derive(Debug)]
    struct Named(&'static str);

    impl EnumValue for Named {
        fn label(&self) -> String {
            self.0.to_string()
        }
    }

    fn two_values() -> (ValueRef, ValueRef) {
        (ValueRef::new(Named("A")), ValueRef::new(Named("B")))
    }

    #[test]
    fn no_inference_while_both_sides_are_open() {
        let (a, b) = two_values();
        let mut s = Solver::new();
        let x = s.new_var([a.clone(), b.clone()]).unwrap();
        let y = s.new_var([a, b]).unwrap();
        let d = s.new_distinct(x, y);
        s.add(d).unwrap();
        assert!(s.propagate());
        assert_eq!(s.domain(x).len(), 2);
        assert_eq!(s.domain(y).len(), 2);
    }

    #[test]
    fn singleton_side_prunes_the_counterpart() {
        let (a, b) = two_values();
        let mut s = Solver::new();
        let x = s.new_var([a.clone()]).unwrap();
        let y = s.new_var([a.clone(), b.clone()]).unwrap();
        let d = s.new_distinct(x, y);
        s.add(d).unwrap();
        assert!(s.propagate());
        assert!(!s.allows(y, &a));
        assert!(s.allows(y, &b));
    }

    #[test]
    fn counterpart_trigger_is_handled_symmetrically() {
        let (a, b) = two_values();
        let mut s = Solver::new();
        let x = s.new_var([a.clone(), b.clone()]).unwrap();
        let y = s.new_var([a.clone(), b.clone()]).unwrap();
        let d = s.new_distinct(x, y);
        s.add(d).unwrap();
        assert!(s.propagate());
        let fix = s.new_assign(y, a.clone()).unwrap();
        s.add(fix).unwrap();
        assert!(s.propagate());
        assert!(!s.allows(x, &a));
        assert!(s.allows(x, &b));
    }

    #[test]
    fn equal_singletons_wipe_out() {
        let (a, _b) = two_values();
        let mut s = Solver::new();
        let x = s.new_var([a.clone()]).unwrap();
        let y = s.new_var([a]).unwrap();
        let d = s.new_distinct(x, y);
        s.add(d).unwrap();
        assert!(!s.propagate());
    }
}
