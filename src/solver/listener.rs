//! Synchronous per-variable domain-change subscriptions.

use crate::solver::engine::VariableId;
use crate::solver::store::Domain;

/// A numeric identifier for a registered listener.
pub type ListenerId = usize;

/// Receives a callback whenever a subscribed variable's current domain
/// changes, either through pruning or through a retraction reset.
///
/// Delivery is synchronous, from inside the mutation that caused the change,
/// and in occurrence order for any single variable. Implementations must not
/// call back into solver mutators; the callback deliberately exposes only a
/// read-only view of the changed domain.
pub trait DomainListener {
    fn domain_changed(&self, variable: VariableId, domain: &Domain);
}
