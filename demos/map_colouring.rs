//! Drives the map-colouring embedding from the library and dumps the solver
//! state at each step: after posting the borders, after seeding a decision,
//! after a conflicting decision, and after retracting it again.

use recant::examples::map_colouring::{australia, palette};
use recant::Solver;

fn main() {
    tracing_subscriber::fmt::init();

    let palette = palette();
    let mut solver = Solver::new();
    let map = australia(&mut solver, &palette);

    assert!(solver.propagate());
    println!("After posting the borders:\n{}", solver);

    let red = palette[0].clone();
    let seed_wa = solver.new_assign(map.regions[0], red.clone()).unwrap();
    solver.add(seed_wa).unwrap();
    assert!(solver.propagate());
    println!("After seeding WA := Red:\n{}", solver);

    // Forcing NT to Red as well contradicts the WA–NT border.
    let seed_nt = solver.new_assign(map.regions[1], red).unwrap();
    solver.add(seed_nt).unwrap();
    let consistent = solver.propagate();
    println!(
        "After seeding NT := Red (consistent: {}):\n{}",
        consistent, solver
    );

    solver.retract(seed_nt).unwrap();
    assert!(solver.propagate());
    println!("After retracting the NT seed:\n{}", solver);

    println!("{}", solver.render_stats());
}
