//! Recant is a dynamic arc-consistency propagation engine over finite
//! enumerated domains.
//!
//! Variables carry a set of admissible values, constraints relate variables,
//! and propagation iteratively removes values that cannot appear in any
//! satisfying assignment. Constraints can be added *and retracted* at any
//! point: retraction restores the pruned values across the retracted
//! constraint's neighbourhood and lets the remaining constraints re-derive
//! the arc-consistent closure. The engine performs no search; it is the
//! propagation core an embedding application drives with its own decisions.
//!
//! # Core Concepts
//!
//! - **[`ValueRef`]**: an identity-based handle to an embedder-supplied
//!   domain value. Values are compared by allocation, never by structure.
//! - **[`Solver`]**: owns variables, domains, watchlists and constraints,
//!   and drives the propagation loop.
//! - **Factories**: [`Solver::new_clause`], [`Solver::new_equal`],
//!   [`Solver::new_distinct`], [`Solver::new_assign`],
//!   [`Solver::new_forbid`] and [`Solver::new_imply`] build constraints;
//!   [`Solver::add`] posts them and [`Solver::retract`] withdraws them.
//!
//! # Example: unit propagation and a retraction
//!
//! ```
//! use recant::{false_value, EnumValue, Lit, Solver, Truth, ValueRef};
//!
//! // Boolean side: (p ∨ ¬q), then pin p to false. Unit propagation forces
//! // q to false as well.
//! let mut solver = Solver::new();
//! let p = solver.new_sat();
//! let q = solver.new_sat();
//! let clause = solver.new_clause(vec![Lit::pos(p), Lit::neg(q)]);
//! solver.add(clause).unwrap();
//! let pin = solver.new_assign(p, false_value()).unwrap();
//! solver.add(pin).unwrap();
//! assert!(solver.propagate());
//! assert_eq!(solver.truth(q), Truth::False);
//!
//! // Enumerated side: embedder-defined values, compared by identity.
//! #[derive(Debug)]
//! struct Colour(&'static str);
//!
//! impl EnumValue for Colour {
//!     fn label(&self) -> String {
//!         self.0.to_string()
//!     }
//! }
//!
//! let red = ValueRef::new(Colour("Red"));
//! let blue = ValueRef::new(Colour("Blue"));
//!
//! let x = solver.new_var([red.clone(), blue.clone()]).unwrap();
//! let y = solver.new_var([red.clone(), blue.clone()]).unwrap();
//! let different = solver.new_distinct(x, y);
//! solver.add(different).unwrap();
//! let pin_x = solver.new_assign(x, red.clone()).unwrap();
//! solver.add(pin_x).unwrap();
//! assert!(solver.propagate());
//! assert!(!solver.allows(y, &red));
//!
//! // Retracting the pin restores both domains; the distinct constraint
//! // finds nothing left to prune.
//! solver.retract(pin_x).unwrap();
//! assert!(solver.propagate());
//! assert!(solver.allows(y, &red) && solver.allows(x, &blue));
//! ```

pub mod error;
pub mod examples;
pub mod solver;

pub use solver::{
    constraint::{Constraint, ConstraintDescriptor},
    constraints,
    engine::{ConstraintId, Solver, VariableId, FALSE_VAR},
    listener::{DomainListener, ListenerId},
    literal::{Lit, Truth},
    stats::{PerConstraintStats, PropagationStats},
    store::{Domain, Store},
    value::{false_value, true_value, BoolValue, EnumValue, ValueRef},
};
