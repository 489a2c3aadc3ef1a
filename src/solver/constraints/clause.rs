//! Disjunctive boolean clauses with unit propagation.

use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::{ConstraintId, VariableId},
    literal::{Lit, Truth},
    store::Store,
    value::{false_value, true_value},
};

/// Enforces `ℓ1 ∨ ℓ2 ∨ … ∨ ℓn` over boolean variables.
///
/// The propagator is the standard unit rule: a clause with every literal
/// false is a conflict, and a clause with exactly one undefined literal and
/// no true literal forces that literal by pruning its falsifying sentinel.
#[derive(Debug)]
pub struct ClauseConstraint {
    id: ConstraintId,
    lits: Vec<Lit>,
    scope: Vec<VariableId>,
}

impl ClauseConstraint {
    pub(crate) fn new(id: ConstraintId, lits: Vec<Lit>) -> Self {
        let mut scope = Vec::new();
        for lit in &lits {
            if !scope.contains(&lit.var) {
                scope.push(lit.var);
            }
        }
        Self { id, lits, scope }
    }

    pub fn lits(&self) -> &[Lit] {
        &self.lits
    }
}

impl Constraint for ClauseConstraint {
    fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    fn propagate(&self, store: &mut Store, _trigger: VariableId) -> bool {
        let mut unit = None;
        let mut undefined = 0usize;
        for &lit in &self.lits {
            match store.truth_lit(lit) {
                Truth::True => return true,
                Truth::False => {}
                Truth::Undefined => {
                    undefined += 1;
                    unit = Some(lit);
                }
            }
        }
        match undefined {
            0 => false,
            1 => {
                // The surviving literal must hold; prune the sentinel that
                // would falsify it.
                let lit = unit.unwrap();
                let falsifier = if lit.positive {
                    false_value()
                } else {
                    true_value()
                };
                store.remove(lit.var, &falsifier, Some(self.id))
            }
            _ => true,
        }
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let lits_str = self
            .lits
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" ∨ ");
        ConstraintDescriptor {
            name: "ClauseConstraint".to_string(),
            description: format!("({})", lits_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::solver::{
        engine::Solver,
        literal::{Lit, Truth},
        value::{false_value, true_value},
    };

    #[test]
    fn clause_over_open_variables_prunes_nothing() {
        let mut s = Solver::new();
        let a = s.new_sat();
        let b = s.new_sat();
        let c = s.new_clause(vec![Lit::pos(a), Lit::pos(b)]);
        s.add(c).unwrap();
        assert!(s.propagate());
        assert_eq!(s.domain(a).len(), 2);
        assert_eq!(s.domain(b).len(), 2);
    }

    #[test]
    fn unit_clause_forces_its_literal() {
        let mut s = Solver::new();
        let a = s.new_sat();
        let c = s.new_clause(vec![Lit::pos(a)]);
        s.add(c).unwrap();
        assert!(s.propagate());
        assert_eq!(s.truth(a), Truth::True);
    }

    #[test]
    fn falsified_clause_reports_conflict() {
        let mut s = Solver::new();
        let a = s.new_sat();
        let b = s.new_sat();
        let clause = s.new_clause(vec![Lit::pos(a), Lit::pos(b)]);
        let fix_a = s.new_assign(a, false_value()).unwrap();
        let fix_b = s.new_assign(b, false_value()).unwrap();
        s.add(fix_a).unwrap();
        s.add(fix_b).unwrap();
        assert!(s.propagate());
        s.add(clause).unwrap();
        assert!(!s.propagate());
    }

    #[test]
    fn negative_unit_literal_prunes_true() {
        let mut s = Solver::new();
        let a = s.new_sat();
        let b = s.new_sat();
        let clause = s.new_clause(vec![Lit::pos(a), Lit::neg(b)]);
        let fix_a = s.new_assign(a, false_value()).unwrap();
        s.add(clause).unwrap();
        s.add(fix_a).unwrap();
        assert!(s.propagate());
        assert_eq!(s.truth(b), Truth::False);
        assert!(!s.allows(b, &true_value()));
    }
}
