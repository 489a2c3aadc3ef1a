use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::{
    error::{Result, SolverError},
    solver::{
        constraint::Constraint,
        constraints::{
            assign::AssignConstraint, clause::ClauseConstraint, distinct::DistinctConstraint,
            equal::EqualConstraint, forbid::ForbidConstraint, imply::ImplyConstraint,
        },
        listener::{DomainListener, ListenerId},
        literal::{Lit, Truth},
        stats::{render_stats_table, PropagationStats},
        store::{Domain, Store},
        value::{false_value, true_value, ValueRef},
        work_list::WorkItem,
    },
};

/// A numeric identifier for a single variable, dense in allocation order.
pub type VariableId = usize;
/// A numeric identifier for a single constraint.
pub type ConstraintId = usize;

/// The canonical false variable, allocated by [`Solver::new`] with its domain
/// already pruned to `{False}`.
pub const FALSE_VAR: VariableId = 0;

/// The arc-consistency propagation engine.
///
/// The solver owns the variable store and every constraint ever built through
/// its factory methods. Posted constraints are registered on the watchlist of
/// each variable in their scope; [`Solver::propagate`] drains the work queue,
/// waking the watchers of each changed variable until either no further
/// pruning is possible or some domain is wiped out. Constraints can be
/// retracted again, which restores initial domains across the retracted
/// constraint's neighbourhood and lets the survivors re-prune.
pub struct Solver {
    store: Store,
    constraints: Vec<Rc<dyn Constraint>>,
    active: HashSet<ConstraintId>,
    stats: PropagationStats,
}

impl Solver {
    pub fn new() -> Self {
        let mut solver = Self {
            store: Store::default(),
            constraints: Vec::new(),
            active: HashSet::new(),
            stats: PropagationStats::default(),
        };
        let false_var = solver.new_sat();
        debug_assert_eq!(false_var, FALSE_VAR);
        let alive = solver.store.remove(FALSE_VAR, &true_value(), None);
        debug_assert!(alive);
        solver
    }

    /// Allocates a boolean variable with domain `{True, False}`.
    pub fn new_sat(&mut self) -> VariableId {
        let values = [true_value(), false_value()].into_iter().collect();
        self.store.new_var(values)
    }

    /// Allocates a variable over the given values, deduplicated by identity.
    /// An empty domain is rejected.
    pub fn new_var(&mut self, values: impl IntoIterator<Item = ValueRef>) -> Result<VariableId> {
        let values: im::HashSet<ValueRef> = values.into_iter().collect();
        if values.is_empty() {
            return Err(SolverError::EmptyDomain.into());
        }
        Ok(self.store.new_var(values))
    }

    pub fn num_vars(&self) -> usize {
        self.store.num_vars()
    }

    /// Read-only view of `v`'s current domain.
    pub fn domain(&self, v: VariableId) -> &Domain {
        self.store.domain(v)
    }

    /// Read-only view of `v`'s initial domain.
    pub fn initial_domain(&self, v: VariableId) -> &Domain {
        self.store.initial_domain(v)
    }

    /// Whether `value` is still admissible for `v`.
    pub fn allows(&self, v: VariableId, value: &ValueRef) -> bool {
        self.store.allows(v, value)
    }

    /// Whether the current domains of `v0` and `v1` intersect.
    pub fn matches(&self, v0: VariableId, v1: VariableId) -> bool {
        self.store.matches(v0, v1)
    }

    /// Sign-aware intersection test for two literals over boolean variables:
    /// agreeing signs ask whether the variables can agree, disagreeing signs
    /// whether they can differ.
    pub fn lit_matches(&self, l0: Lit, l1: Lit) -> bool {
        if l0.positive == l1.positive {
            self.matches(l0.var, l1.var)
        } else {
            !self.matches(l0.var, l1.var)
        }
    }

    /// Three-valued truth of a boolean variable.
    pub fn truth(&self, v: VariableId) -> Truth {
        self.store.truth(v)
    }

    /// Three-valued truth of a literal.
    pub fn truth_lit(&self, lit: Lit) -> Truth {
        self.store.truth_lit(lit)
    }

    fn install(
        &mut self,
        build: impl FnOnce(ConstraintId) -> Rc<dyn Constraint>,
    ) -> ConstraintId {
        let id = self.constraints.len();
        self.constraints.push(build(id));
        id
    }

    /// Builds a disjunctive clause over the given literals.
    pub fn new_clause(&mut self, lits: Vec<Lit>) -> ConstraintId {
        self.install(|id| Rc::new(ClauseConstraint::new(id, lits)))
    }

    /// Builds an equality constraint between two variables.
    pub fn new_equal(&mut self, a: VariableId, b: VariableId) -> ConstraintId {
        self.install(|id| Rc::new(EqualConstraint::new(id, a, b)))
    }

    /// Builds a binary all-different constraint.
    pub fn new_distinct(&mut self, a: VariableId, b: VariableId) -> ConstraintId {
        self.install(|id| Rc::new(DistinctConstraint::new(id, a, b)))
    }

    /// Builds an assignment constraint. The value must belong to the
    /// variable's initial domain.
    pub fn new_assign(&mut self, var: VariableId, value: ValueRef) -> Result<ConstraintId> {
        if !self.store.initial_domain(var).contains(&value) {
            return Err(SolverError::ValueOutsideDomain {
                variable: var,
                value: value.label(),
            }
            .into());
        }
        Ok(self.install(|id| Rc::new(AssignConstraint::new(id, var, value))))
    }

    /// Builds an exclusion constraint.
    pub fn new_forbid(&mut self, var: VariableId, value: ValueRef) -> ConstraintId {
        self.install(|id| Rc::new(ForbidConstraint::new(id, var, value)))
    }

    /// Builds a conditional implication
    /// `premise = premise_value ⟹ conclusion = conclusion_value`.
    pub fn new_imply(
        &mut self,
        premise: VariableId,
        premise_value: ValueRef,
        conclusion: VariableId,
        conclusion_value: ValueRef,
    ) -> ConstraintId {
        self.install(|id| {
            Rc::new(ImplyConstraint::new(
                id,
                premise,
                premise_value,
                conclusion,
                conclusion_value,
            ))
        })
    }

    /// Posts a constraint: registers it on the watchlist of every variable in
    /// its scope and wakes each of them so the constraint gets a first chance
    /// to prune. Posting an already active constraint is a no-op.
    pub fn add(&mut self, c: ConstraintId) -> Result<()> {
        let constraint = self
            .constraints
            .get(c)
            .ok_or(SolverError::UnknownConstraint(c))?
            .clone();
        if !self.active.insert(c) {
            return Ok(());
        }
        for &v in constraint.scope() {
            self.store.add_watcher(v, c);
            self.store.enqueue(v, None);
        }
        Ok(())
    }

    /// Whether `c` is currently posted.
    pub fn is_active(&self, c: ConstraintId) -> bool {
        self.active.contains(&c)
    }

    /// Withdraws a constraint and restores the values it may have pruned.
    ///
    /// The engine keeps no per-constraint removal trail, so restoration is a
    /// coarse flood-fill over the constraint graph: every variable reachable
    /// from the retracted constraint through scope/watchlist edges has its
    /// current domain reset to the initial domain and is re-enqueued, and the
    /// remaining active constraints re-derive the arc-consistent closure on
    /// the next `propagate()`. Values removed for unrelated reasons along the
    /// flooded region are restored too and simply re-pruned then.
    ///
    /// Retracting an inactive constraint is a no-op.
    pub fn retract(&mut self, c: ConstraintId) -> Result<()> {
        if c >= self.constraints.len() {
            return Err(SolverError::UnknownConstraint(c).into());
        }
        if !self.active.remove(&c) {
            return Ok(());
        }

        let mut visited: HashSet<VariableId> = HashSet::new();
        let mut pending: VecDeque<ConstraintId> = VecDeque::from([c]);
        while let Some(current) = pending.pop_front() {
            let scope = self.constraints[current].scope().to_vec();
            for v in scope {
                if visited.insert(v) {
                    self.store.reset_domain(v);
                    self.store.enqueue(v, None);
                    pending.extend(self.store.watchers(v).iter().copied());
                }
            }
        }

        let scope = self.constraints[c].scope().to_vec();
        for v in scope {
            self.store.remove_watcher(v, c);
        }
        debug!(constraint = c, restored = visited.len(), "retracted constraint");
        Ok(())
    }

    /// Runs propagation to a fixed point. Returns `false` as soon as some
    /// domain is wiped out; the partial pruning reached by then is left in
    /// place and the embedder is expected to retract a responsible constraint
    /// before propagating again.
    pub fn propagate(&mut self) -> bool {
        while let Some(WorkItem { variable, origin }) = self.store.pop_work() {
            self.stats.items_processed += 1;
            let watchers = self.store.watchers(variable).to_vec();
            for c in watchers {
                if Some(c) == origin {
                    continue;
                }
                let constraint = self.constraints[c].clone();
                let start = std::time::Instant::now();
                let removals_before = self.store.removal_count();
                self.stats.for_constraint(c).invocations += 1;

                let alive = constraint.propagate(&mut self.store, variable);

                let pruned = self.store.removal_count() > removals_before;
                let entry = self.stats.for_constraint(c);
                entry.time_spent_micros += start.elapsed().as_micros() as u64;
                if pruned {
                    entry.prunings += 1;
                }
                if !alive {
                    self.stats.wipeouts += 1;
                    debug!(variable, constraint = c, "domain wipeout");
                    return false;
                }
            }
        }
        debug!("propagation reached fixpoint");
        true
    }

    /// Subscribes a listener to the given variables. The listener is invoked
    /// synchronously on every change to any of their current domains.
    pub fn subscribe(
        &mut self,
        vars: &[VariableId],
        listener: Rc<dyn DomainListener>,
    ) -> ListenerId {
        self.store.subscribe(vars, listener)
    }

    /// Detaches a listener from every variable it was subscribed to.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.store.unsubscribe(id);
    }

    /// Statistics accumulated by the propagation loop so far.
    pub fn stats(&self) -> &PropagationStats {
        &self.stats
    }

    /// Renders the per-constraint statistics as a table.
    pub fn render_stats(&self) -> String {
        render_stats_table(&self.stats, &self.constraints)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in 0..self.store.num_vars() {
            let domain = self.store.domain(v);
            if domain.is_singleton() {
                writeln!(f, "?{} = {}", v, domain)?;
            } else {
                writeln!(f, "?{} ∈ {}", v, domain)?;
            }
        }
        let mut active: Vec<ConstraintId> = self.active.iter().copied().collect();
        active.sort_unstable();
        for c in active {
            writeln!(f, "[{}] {}", c, self.constraints[c].descriptor().description)?;
        }
        Ok(())
    }
}
