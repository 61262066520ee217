use crate::machine::*;
use std::collections::HashMap;
use std::hash::Hash;

mod quotient;
pub use quotient::*;

/// Table shape a machine must expose to be minimized by partition refinement.
pub trait Refinable {
  /// Locally observable signature used for the round-0 split: the row's output
  /// sequence for a Mealy machine, the state's own output for a Moore machine.
  type Seed: Eq + Hash;
  fn len(&self) -> usize;
  fn inputs(&self) -> usize;
  fn seed(&self, state: usize) -> Self::Seed;
  /// Successor under one input column, `None` where the transition is undefined.
  fn successor(&self, state: usize, symbol: usize) -> Option<usize>;
}

/// Grouping of states into equivalence classes. Group ids are 0-based and
/// contiguous, assigned in the order their signature was first encountered;
/// `reps[g]` is the first state scanned into group `g`.
pub struct Partition {
  pub group_of: Vec<usize>,
  pub reps: Vec<usize>,
}

impl Partition {
  pub fn len(&self) -> usize {
    self.reps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.reps.is_empty()
  }
}

/// Computes the coarsest stable partition of `machine`'s states.
///
/// Starts from the seed grouping and re-splits by the signature
/// `(own group, successor group per column)` until a round leaves the group
/// count unchanged. Refinement only ever splits groups, so the count is
/// non-decreasing and the loop converges within `len` rounds.
pub fn refine<M: Refinable>(machine: &M) -> Partition {
  let mut current = assign(machine.len(), |state| machine.seed(state));
  eprintln!("initial groups: {}", current.len());
  let mut round = 0;
  loop {
    let next = split(machine, &current);
    round += 1;
    assert!(round <= machine.len().max(1), "no fixpoint after {} rounds", round);
    eprintln!("round {}: {} groups", round, next.len());
    if next.len() == current.len() {
      return next;
    }
    current = next;
  }
}

fn split<M: Refinable>(machine: &M, current: &Partition) -> Partition {
  assign(machine.len(), |state| {
    let mut signature = Vec::with_capacity(machine.inputs() + 1);
    signature.push(Some(current.group_of[state]));
    signature.extend(
      (0..machine.inputs())
        .map(|symbol| machine.successor(state, symbol).map(|next| current.group_of[next])),
    );
    signature
  })
}

// States sharing a key share a group; ids handed out in first-encounter order.
// Keys are structural values, so distinct signatures can never collide the way
// concatenated digit strings can.
fn assign<K: Eq + Hash>(len: usize, key: impl Fn(usize) -> K) -> Partition {
  let mut groups = HashMap::new();
  let mut group_of = vec![0_usize; len];
  let mut reps = Vec::new();
  for (state, slot) in group_of.iter_mut().enumerate() {
    let next = reps.len();
    *slot = *groups.entry(key(state)).or_insert_with(|| {
      reps.push(state);
      next
    });
  }
  Partition { group_of, reps }
}

impl Refinable for MealyMachine {
  type Seed = Vec<Option<u32>>;

  fn len(&self) -> usize {
    self.rows.len()
  }

  fn inputs(&self) -> usize {
    self.inputs
  }

  fn seed(&self, state: usize) -> Self::Seed {
    self.rows[state].iter().map(|cell| cell.map(|t| t.output)).collect()
  }

  fn successor(&self, state: usize, symbol: usize) -> Option<usize> {
    self.rows[state][symbol].map(|t| t.state)
  }
}

impl Refinable for MooreMachine {
  type Seed = u32;

  fn len(&self) -> usize {
    self.rows.len()
  }

  fn inputs(&self) -> usize {
    self.inputs
  }

  fn seed(&self, state: usize) -> Self::Seed {
    self.rows[state].output
  }

  fn successor(&self, state: usize, symbol: usize) -> Option<usize> {
    self.rows[state].next[symbol]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn mealy(inputs: usize, cells: &[&[Option<(usize, u32)>]]) -> MealyMachine {
    let rows = cells
      .iter()
      .map(|row| {
        row.iter().map(|cell| cell.map(|(state, output)| Transition { state, output })).collect()
      })
      .collect();
    MealyMachine { inputs, rows }
  }

  fn check_invariants(partition: &Partition, len: usize) {
    assert_eq!(partition.group_of.len(), len);
    let mut seen = 0;
    for (state, &group) in partition.group_of.iter().enumerate() {
      assert!(group <= seen, "ids must appear in first-encounter order");
      if group == seen {
        assert_eq!(partition.reps[group], state);
        seen += 1;
      }
    }
    assert_eq!(partition.reps.len(), seen);
  }

  #[test]
  fn seed_groups_by_output_row() {
    let m = mealy(
      2,
      &[
        &[Some((1, 0)), Some((2, 0))],
        &[Some((2, 0)), Some((1, 1))],
        &[Some((1, 0)), Some((2, 1))],
      ],
    );
    let initial = assign(m.len(), |state| m.seed(state));
    check_invariants(&initial, 3);
    assert_eq!(initial.group_of, vec![0, 1, 1]);
  }

  #[test]
  fn split_is_monotone() {
    // chain that takes a full cascade of rounds to settle
    let m = mealy(
      1,
      &[&[Some((1, 0))], &[Some((2, 0))], &[Some((3, 0))], &[Some((4, 0))], &[None]],
    );
    let mut current = assign(m.len(), |state| m.seed(state));
    let mut counts = vec![current.len()];
    loop {
      let next = split(&m, &current);
      counts.push(next.len());
      if next.len() == current.len() {
        break;
      }
      current = next;
    }
    assert!(counts.windows(2).all(|w| w[0] <= w[1]), "group count decreased: {:?}", counts);
    assert!(counts.len() <= m.len() + 1);
    assert_eq!(*counts.last().unwrap(), 5);
  }

  #[test]
  fn refine_separates_states_with_distinct_futures() {
    // 0 and 1 emit the same outputs but disagree one step later
    let m = mealy(1, &[&[Some((1, 0))], &[Some((2, 0))], &[Some((2, 1))]]);
    let partition = refine(&m);
    check_invariants(&partition, 3);
    assert_eq!(partition.len(), 3);
  }

  #[test]
  fn refine_merges_relabeled_twins() {
    // states 1 and 2 simulate each other under the swap 1 <-> 2
    let m = mealy(
      2,
      &[
        &[Some((1, 0)), Some((2, 0))],
        &[Some((2, 0)), Some((1, 1))],
        &[Some((1, 0)), Some((2, 1))],
      ],
    );
    let partition = refine(&m);
    check_invariants(&partition, 3);
    assert_eq!(partition.len(), 2);
    assert_eq!(partition.group_of[1], partition.group_of[2]);
    assert_ne!(partition.group_of[0], partition.group_of[1]);
  }

  #[test]
  fn refine_moore_by_state_output() {
    let m = MooreMachine {
      inputs: 1,
      rows: vec![
        MooreRow { output: 0, next: vec![Some(1)] },
        MooreRow { output: 1, next: vec![Some(2)] },
        MooreRow { output: 1, next: vec![Some(1)] },
      ],
    };
    let partition = refine(&m);
    check_invariants(&partition, 3);
    // 1 and 2 share an output and both step into the {1, 2} class
    assert_eq!(partition.len(), 2);
    assert_eq!(partition.group_of[1], partition.group_of[2]);
  }

  #[test]
  fn sink_cells_refine_like_any_other_signature() {
    let m = mealy(1, &[&[Some((1, 0))], &[None], &[None]]);
    let partition = refine(&m);
    check_invariants(&partition, 3);
    assert_eq!(partition.group_of[1], partition.group_of[2]);
  }
}
