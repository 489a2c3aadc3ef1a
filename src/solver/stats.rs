use std::collections::HashMap;
use std::rc::Rc;

use prettytable::{Cell, Row, Table};

use crate::solver::{constraint::Constraint, engine::ConstraintId};

/// Holds performance statistics for a single constraint.
#[derive(Debug, Default, Clone, Copy)]
pub struct PerConstraintStats {
    /// The number of times the propagator was invoked.
    pub invocations: u64,
    /// The number of invocations that pruned at least one value.
    pub prunings: u64,
    /// The total time spent inside the propagator, in microseconds.
    pub time_spent_micros: u64,
}

/// Statistics accumulated across every `propagate()` call.
#[derive(Debug, Default)]
pub struct PropagationStats {
    /// The total number of work items serviced by the propagation loop.
    pub items_processed: u64,
    /// The number of `propagate()` calls that ended in a wipeout.
    pub wipeouts: u64,
    /// A map from [`ConstraintId`] to that constraint's statistics.
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

impl PropagationStats {
    pub(crate) fn for_constraint(&mut self, id: ConstraintId) -> &mut PerConstraintStats {
        self.constraint_stats.entry(id).or_default()
    }
}

pub fn render_stats_table(stats: &PropagationStats, constraints: &[Rc<dyn Constraint>]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Invocations"),
        Cell::new("Prunings"),
        Cell::new("Time / Call (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();

    sorted_stats.sort_by_key(|a| a.1.time_spent_micros);

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = constraints[*constraint_id].descriptor();
        let avg_time = if constraint_stats.invocations > 0 {
            constraint_stats.time_spent_micros as f64 / constraint_stats.invocations as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.invocations.to_string()),
            Cell::new(&constraint_stats.prunings.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                constraint_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
