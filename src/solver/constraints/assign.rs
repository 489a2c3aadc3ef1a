//! Unary assignment.

use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::{ConstraintId, VariableId},
    store::Store,
    value::ValueRef,
};

/// Pins a variable to a single value from its initial domain.
///
/// Construction is validated against the initial domain; at propagation time
/// the constraint conflicts if the value has since been pruned, and otherwise
/// removes every other value.
#[derive(Debug)]
pub struct AssignConstraint {
    id: ConstraintId,
    scope: [VariableId; 1],
    value: ValueRef,
}

impl AssignConstraint {
    pub(crate) fn new(id: ConstraintId, var: VariableId, value: ValueRef) -> Self {
        Self {
            id,
            scope: [var],
            value,
        }
    }
}

impl Constraint for AssignConstraint {
    fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    fn propagate(&self, store: &mut Store, _trigger: VariableId) -> bool {
        let var = self.scope[0];
        if !store.allows(var, &self.value) {
            return false;
        }
        let stale: Vec<ValueRef> = store
            .domain(var)
            .iter()
            .filter(|value| **value != self.value)
            .cloned()
            .collect();
        for value in stale {
            if !store.remove(var, &value, Some(self.id)) {
                return false;
            }
        }
        true
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "AssignConstraint".to_string(),
            description: format!("?{} := {}", self.scope[0], self.value.label()),
        }
    }
}
