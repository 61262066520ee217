use crate::machine::*;
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};

/// Pulls each destination state's output down onto the transition.
pub fn moore_to_mealy(machine: &MooreMachine) -> MealyMachine {
  let rows = machine
    .rows
    .iter()
    .map(|row| {
      row
        .next
        .iter()
        .map(|cell| cell.map(|dest| Transition { state: dest, output: machine.rows[dest].output }))
        .collect()
    })
    .collect();
  MealyMachine { inputs: machine.inputs, rows }
}

/// Materializes one Moore state per distinct (destination, output) transition
/// pair, in sorted pair order. The pair's output becomes the state output and
/// its successors are the Moore states of the pairs found in the destination's
/// original row.
pub fn mealy_to_moore(machine: &MealyMachine) -> MooreMachine {
  let pairs: BTreeSet<Transition> =
    machine.rows.iter().flatten().flatten().copied().collect();
  let index: HashMap<Transition, usize> =
    pairs.iter().enumerate().map(|(i, &pair)| (pair, i)).collect();
  let rows = pairs
    .iter()
    .map(|pair| {
      let next = machine.rows[pair.state]
        .iter()
        .map(|cell| cell.map(|t| index[&t]))
        .collect_vec();
      MooreRow { output: pair.output, next }
    })
    .collect();
  MooreMachine { inputs: machine.inputs, rows }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn moore_to_mealy_copies_destination_outputs() {
    let machine = MooreMachine {
      inputs: 2,
      rows: vec![
        MooreRow { output: 4, next: vec![Some(1), None] },
        MooreRow { output: 9, next: vec![Some(0), Some(1)] },
      ],
    };
    let mealy = moore_to_mealy(&machine);
    assert_eq!(mealy.rows[0][0], Some(Transition { state: 1, output: 9 }));
    assert_eq!(mealy.rows[0][1], None);
    assert_eq!(mealy.rows[1][0], Some(Transition { state: 0, output: 4 }));
    assert_eq!(mealy.rows[1][1], Some(Transition { state: 1, output: 9 }));
  }

  #[test]
  fn mealy_to_moore_enumerates_pairs_in_sorted_order() {
    let machine = MealyMachine {
      inputs: 2,
      rows: vec![
        vec![Some(Transition { state: 1, output: 1 }), Some(Transition { state: 0, output: 2 })],
        vec![Some(Transition { state: 1, output: 1 }), None],
      ],
    };
    let moore = mealy_to_moore(&machine);
    // pairs sorted by (state, output): (0,2) then (1,1)
    assert_eq!(moore.len(), 2);
    assert_eq!(moore.rows[0].output, 2);
    assert_eq!(moore.rows[1].output, 1);
    // (0,2) behaves like original state 0: to (1,1) then (0,2)
    assert_eq!(moore.rows[0].next, vec![Some(1), Some(0)]);
    // (1,1) behaves like original state 1
    assert_eq!(moore.rows[1].next, vec![Some(1), None]);
  }

  #[test]
  fn mealy_to_moore_of_transitionless_machine_is_empty() {
    let machine = MealyMachine { inputs: 1, rows: vec![vec![None]] };
    assert!(mealy_to_moore(&machine).is_empty());
  }
}
