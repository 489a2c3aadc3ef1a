//! Binary equality of domains.

use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::{ConstraintId, VariableId},
    store::Store,
    value::ValueRef,
};

/// Enforces that two variables end up with identical domains.
///
/// On a trigger, every value of the counterpart that is no longer admissible
/// for the triggering variable is pruned from the counterpart. The opposite
/// direction runs when the counterpart is itself awakened, which `add`
/// guarantees for the first round.
#[derive(Debug)]
pub struct EqualConstraint {
    id: ConstraintId,
    vars: [VariableId; 2],
}

impl EqualConstraint {
    pub(crate) fn new(id: ConstraintId, a: VariableId, b: VariableId) -> Self {
        Self { id, vars: [a, b] }
    }
}

impl Constraint for EqualConstraint {
    fn scope(&self) -> &[VariableId] {
        &self.vars
    }

    fn propagate(&self, store: &mut Store, trigger: VariableId) -> bool {
        let other = if trigger == self.vars[0] {
            self.vars[1]
        } else {
            self.vars[0]
        };

        // Snapshot before pruning; removing while iterating the same set is
        // not sound.
        let stale: Vec<ValueRef> = store
            .domain(other)
            .iter()
            .filter(|value| !store.allows(trigger, value))
            .cloned()
            .collect();
        for value in stale {
            if !store.remove(other, &value, Some(self.id)) {
                return false;
            }
        }
        true
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "EqualConstraint".to_string(),
            description: format!("?{} = ?{}", self.vars[0], self.vars[1]),
        }
    }
}
