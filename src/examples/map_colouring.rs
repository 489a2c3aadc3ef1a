//! Map colouring as an embedding of the propagation engine.
//!
//! Regions are variables over a shared palette of colour values and every
//! border is a binary distinct constraint. Propagation alone cannot colour a
//! map, since there is no search here, but it demonstrates the embedder loop:
//! post constraints, seed decisions with `assign`, inspect the pruned
//! domains, and retract decisions that led nowhere.

use crate::solver::{
    engine::{ConstraintId, Solver, VariableId},
    value::{EnumValue, ValueRef},
};

#[derive(Debug)]
pub struct Colour(&'static str);

impl EnumValue for Colour {
    fn label(&self) -> String {
        self.0.to_string()
    }
}

/// A fresh three-colour palette. Identity matters: every region's domain
/// must hold handles to the *same* colour allocations.
pub fn palette() -> Vec<ValueRef> {
    ["Red", "Green", "Blue"]
        .into_iter()
        .map(|name| ValueRef::new(Colour(name)))
        .collect()
}

/// The mainland-Australia template: seven regions, nine borders.
pub struct Australia {
    pub regions: Vec<VariableId>,
    pub borders: Vec<ConstraintId>,
}

pub fn australia(solver: &mut Solver, palette: &[ValueRef]) -> Australia {
    let regions: Vec<VariableId> = (0..7)
        .map(|_| solver.new_var(palette.iter().cloned()).unwrap())
        .collect();
    let (wa, nt, sa, q, nsw, v) = (
        regions[0], regions[1], regions[2], regions[3], regions[4], regions[5],
    );
    // Tasmania (regions[6]) borders nothing.
    let borders = [
        (wa, nt),
        (wa, sa),
        (nt, sa),
        (nt, q),
        (sa, q),
        (sa, nsw),
        (sa, v),
        (q, nsw),
        (nsw, v),
    ]
    .into_iter()
    .map(|(a, b)| {
        let border = solver.new_distinct(a, b);
        solver.add(border).unwrap();
        border
    })
    .collect();
    Australia { regions, borders }
}
