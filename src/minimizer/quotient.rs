use crate::machine::*;
use crate::minimizer::{refine, Partition};
use itertools::Itertools;

/// Builds the quotient Mealy machine: one row per equivalence group, taken from
/// the group representative with successors remapped to group ids.
pub fn minimize_mealy(machine: &MealyMachine) -> MealyMachine {
  let partition = refine(machine);
  MealyMachine { inputs: machine.inputs, rows: quotient_rows(machine, &partition) }
}

pub fn minimize_moore(machine: &MooreMachine) -> MooreMachine {
  let partition = refine(machine);
  let rows = partition
    .reps
    .iter()
    .map(|&rep| {
      let row = &machine.rows[rep];
      let next =
        row.next.iter().map(|cell| cell.map(|state| partition.group_of[state])).collect_vec();
      MooreRow { output: row.output, next }
    })
    .collect();
  MooreMachine { inputs: machine.inputs, rows }
}

fn quotient_rows(machine: &MealyMachine, partition: &Partition) -> Vec<Vec<Option<Transition>>> {
  partition
    .reps
    .iter()
    .map(|&rep| {
      machine.rows[rep]
        .iter()
        .map(|cell| {
          cell.map(|t| Transition { state: partition.group_of[t.state], output: t.output })
        })
        .collect()
    })
    .collect()
}
