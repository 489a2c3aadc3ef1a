//! Conditional implication between two variable assignments.

use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::{ConstraintId, VariableId},
    store::Store,
    value::ValueRef,
};

/// Enforces `premise = premise_value ⟹ conclusion = conclusion_value`.
///
/// Two inferences only: once the premise is pinned to its value the
/// conclusion is forced, and once the conclusion value becomes inadmissible
/// the premise value is pruned (contrapositive). A premise that loses its
/// value makes the constraint vacuously true; no stronger reasoning is
/// performed.
#[derive(Debug)]
pub struct ImplyConstraint {
    id: ConstraintId,
    scope: [VariableId; 2],
    premise_value: ValueRef,
    conclusion_value: ValueRef,
}

impl ImplyConstraint {
    pub(crate) fn new(
        id: ConstraintId,
        premise: VariableId,
        premise_value: ValueRef,
        conclusion: VariableId,
        conclusion_value: ValueRef,
    ) -> Self {
        Self {
            id,
            scope: [premise, conclusion],
            premise_value,
            conclusion_value,
        }
    }

    fn premise(&self) -> VariableId {
        self.scope[0]
    }

    fn conclusion(&self) -> VariableId {
        self.scope[1]
    }
}

impl Constraint for ImplyConstraint {
    fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    fn propagate(&self, store: &mut Store, trigger: VariableId) -> bool {
        if trigger == self.premise()
            && store.domain(self.premise()).singleton_value() == Some(self.premise_value.clone())
        {
            if !store.allows(self.conclusion(), &self.conclusion_value) {
                return false;
            }
            let stale: Vec<ValueRef> = store
                .domain(self.conclusion())
                .iter()
                .filter(|value| **value != self.conclusion_value)
                .cloned()
                .collect();
            for value in stale {
                if !store.remove(self.conclusion(), &value, Some(self.id)) {
                    return false;
                }
            }
        }
        if trigger == self.conclusion()
            && !store.allows(self.conclusion(), &self.conclusion_value)
            && store.allows(self.premise(), &self.premise_value)
        {
            return store.remove(self.premise(), &self.premise_value, Some(self.id));
        }
        true
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "ImplyConstraint".to_string(),
            description: format!(
                "?{} = {} ⇒ ?{} = {}",
                self.premise(),
                self.premise_value.label(),
                self.conclusion(),
                self.conclusion_value.label()
            ),
        }
    }
}
