use crate::solver::{engine::VariableId, store::Store};

/// A human-readable summary of a constraint, used in state dumps and in the
/// statistics table.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// The propagator protocol.
///
/// A constraint exposes the variables it watches and a `propagate` operation
/// the solver invokes whenever one of those variables' domains has changed.
/// `propagate` returns `false` exactly when it proved a wipeout; any pruning
/// it performs goes through [`Store::remove`], which re-enqueues the changed
/// variable annotated with this constraint as the origin.
///
/// Propagators must be idempotent on an unchanged store and monotone: they
/// only ever remove values.
pub trait Constraint: std::fmt::Debug {
    fn scope(&self) -> &[VariableId];

    fn propagate(&self, store: &mut Store, trigger: VariableId) -> bool;

    fn descriptor(&self) -> ConstraintDescriptor;
}
