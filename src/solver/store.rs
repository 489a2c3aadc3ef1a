//! The variable store: initial and current domains, watchlists, the
//! propagation queue, and the `remove` mutation primitive propagators use.

use std::fmt;
use std::rc::Rc;

use im::HashSet;
use tracing::trace;

use crate::solver::{
    engine::{ConstraintId, VariableId},
    listener::{DomainListener, ListenerId},
    literal::{Lit, Truth},
    value::{false_value, true_value, ValueRef},
    work_list::{WorkItem, WorkList},
};

/// A finite set of admissible value identities for one variable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domain(HashSet<ValueRef>);

impl Domain {
    pub(crate) fn from_values(values: HashSet<ValueRef>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    pub fn contains(&self, value: &ValueRef) -> bool {
        self.0.contains(value)
    }

    /// If the domain is a singleton, returns its sole value.
    pub fn singleton_value(&self) -> Option<ValueRef> {
        if self.is_singleton() {
            self.0.iter().next().cloned()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValueRef> + '_ {
        self.0.iter()
    }

    fn remove(&mut self, value: &ValueRef) -> bool {
        self.0.remove(value).is_some()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = self.singleton_value() {
            return write!(f, "{}", value.label());
        }
        let mut labels: Vec<String> = self.0.iter().map(|v| v.label()).collect();
        labels.sort();
        write!(f, "{{{}}}", labels.join(", "))
    }
}

struct VarRecord {
    initial: Domain,
    current: Domain,
    watchers: Vec<ConstraintId>,
    listeners: Vec<(ListenerId, Rc<dyn DomainListener>)>,
}

/// Owns every variable's domains and watchlist plus the propagation queue.
///
/// Propagators receive a `&mut Store` while running and mutate domains
/// exclusively through [`Store::remove`]. Unknown variable ids are a
/// programmer error and panic on access.
#[derive(Default)]
pub struct Store {
    vars: Vec<VarRecord>,
    queue: WorkList,
    next_listener: ListenerId,
    removals: u64,
}

impl Store {
    pub(crate) fn new_var(&mut self, values: HashSet<ValueRef>) -> VariableId {
        let id = self.vars.len();
        self.vars.push(VarRecord {
            initial: Domain::from_values(values.clone()),
            current: Domain::from_values(values),
            watchers: Vec::new(),
            listeners: Vec::new(),
        });
        id
    }

    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Read-only view of `v`'s current domain.
    pub fn domain(&self, v: VariableId) -> &Domain {
        &self.vars[v].current
    }

    /// Read-only view of `v`'s immutable initial domain.
    pub fn initial_domain(&self, v: VariableId) -> &Domain {
        &self.vars[v].initial
    }

    /// Whether `value` is still admissible for `v`.
    pub fn allows(&self, v: VariableId, value: &ValueRef) -> bool {
        self.vars[v].current.contains(value)
    }

    /// Whether the current domains of `v0` and `v1` share at least one value.
    pub fn matches(&self, v0: VariableId, v1: VariableId) -> bool {
        let (small, large) = if self.domain(v0).len() <= self.domain(v1).len() {
            (v0, v1)
        } else {
            (v1, v0)
        };
        self.domain(small).iter().any(|val| self.allows(large, val))
    }

    /// Three-valued truth of a boolean variable: `True`/`False` only when the
    /// current domain is exactly the matching sentinel singleton.
    pub fn truth(&self, v: VariableId) -> Truth {
        match self.domain(v).singleton_value() {
            Some(value) if value == true_value() => Truth::True,
            Some(value) if value == false_value() => Truth::False,
            _ => Truth::Undefined,
        }
    }

    /// Three-valued truth of a literal, respecting its sign.
    pub fn truth_lit(&self, lit: Lit) -> Truth {
        if lit.positive {
            self.truth(lit.var)
        } else {
            !self.truth(lit.var)
        }
    }

    /// Removes `value` from `v`'s current domain. Returns `false` when the
    /// removal emptied the domain (wipeout); otherwise enqueues a wake-up for
    /// `v` annotated with the originating constraint and returns `true`.
    ///
    /// Precondition: `value` is currently admissible for `v`.
    pub fn remove(
        &mut self,
        v: VariableId,
        value: &ValueRef,
        origin: Option<ConstraintId>,
    ) -> bool {
        let removed = self.vars[v].current.remove(value);
        debug_assert!(removed, "removed value must be in the current domain");
        trace!(variable = v, value = %value.label(), "pruned value");
        self.removals += 1;
        self.notify(v);
        if self.vars[v].current.is_empty() {
            return false;
        }
        self.queue.push_back(v, origin);
        true
    }

    /// Restores `v`'s current domain to its initial domain. Used by
    /// retraction only; listeners are notified when the domain widens.
    pub(crate) fn reset_domain(&mut self, v: VariableId) {
        if self.vars[v].current == self.vars[v].initial {
            return;
        }
        self.vars[v].current = self.vars[v].initial.clone();
        self.notify(v);
    }

    fn notify(&self, v: VariableId) {
        let record = &self.vars[v];
        for (_, listener) in &record.listeners {
            listener.domain_changed(v, &record.current);
        }
    }

    pub(crate) fn enqueue(&mut self, v: VariableId, origin: Option<ConstraintId>) {
        self.queue.push_back(v, origin);
    }

    pub(crate) fn pop_work(&mut self) -> Option<WorkItem> {
        self.queue.pop_front()
    }

    pub(crate) fn watchers(&self, v: VariableId) -> &[ConstraintId] {
        &self.vars[v].watchers
    }

    pub(crate) fn add_watcher(&mut self, v: VariableId, c: ConstraintId) {
        let watchers = &mut self.vars[v].watchers;
        if !watchers.contains(&c) {
            watchers.push(c);
        }
    }

    pub(crate) fn remove_watcher(&mut self, v: VariableId, c: ConstraintId) {
        self.vars[v].watchers.retain(|&w| w != c);
    }

    pub(crate) fn subscribe(
        &mut self,
        vars: &[VariableId],
        listener: Rc<dyn DomainListener>,
    ) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        for &v in vars {
            self.vars[v].listeners.push((id, listener.clone()));
        }
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) {
        for record in &mut self.vars {
            record.listeners.retain(|(lid, _)| *lid != id);
        }
    }

    /// Total count of values pruned over the store's lifetime.
    pub(crate) fn removal_count(&self) -> u64 {
        self.removals
    }
}
