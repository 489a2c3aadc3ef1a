//! Unary exclusion.

use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::{ConstraintId, VariableId},
    store::Store,
    value::ValueRef,
};

/// Removes one value from a variable's domain.
///
/// Forbidding a value that is already gone is a silent success; the only
/// failure mode is emptying the domain.
#[derive(Debug)]
pub struct ForbidConstraint {
    id: ConstraintId,
    scope: [VariableId; 1],
    value: ValueRef,
}

impl ForbidConstraint {
    pub(crate) fn new(id: ConstraintId, var: VariableId, value: ValueRef) -> Self {
        Self {
            id,
            scope: [var],
            value,
        }
    }
}

impl Constraint for ForbidConstraint {
    fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    fn propagate(&self, store: &mut Store, _trigger: VariableId) -> bool {
        let var = self.scope[0];
        if store.allows(var, &self.value) {
            store.remove(var, &self.value, Some(self.id))
        } else {
            true
        }
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "ForbidConstraint".to_string(),
            description: format!("?{} ≠ {}", self.scope[0], self.value.label()),
        }
    }
}
