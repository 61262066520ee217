use crate::machine::{DfaMachine, NfaMachine};
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Subset construction over epsilon-closed state sets.
///
/// The worklist is seeded with the closure of state 0. Sets are named in FIFO
/// discovery order; a set may be enqueued more than once, duplicates are
/// dropped when dequeued. Per input symbol the successor is the epsilon
/// closure of the union of the member states' moves, or the sink when that
/// union is empty.
pub fn determinize(nfa: &NfaMachine, closures: &[Vec<usize>]) -> DfaMachine {
  let mut queue = VecDeque::from([closures[0].clone()]);
  let mut names: HashMap<Vec<usize>, usize> = HashMap::new();
  let mut rows: Vec<Vec<Option<Vec<usize>>>> = Vec::new();
  while let Some(set) = queue.pop_front() {
    if names.contains_key(&set) {
      continue;
    }
    names.insert(set.clone(), rows.len());
    let row = (0..nfa.inputs)
      .map(|symbol| {
        let mut targets = BTreeSet::new();
        for &state in &set {
          for &next in &nfa.rows[state].moves[symbol] {
            targets.extend(closures[next].iter().copied());
          }
        }
        if targets.is_empty() {
          return None;
        }
        let successor = targets.into_iter().collect_vec();
        queue.push_back(successor.clone());
        Some(successor)
      })
      .collect_vec();
    rows.push(row);
  }
  eprintln!("dfa states: {}", rows.len());
  // every recorded set was enqueued, so it carries a name by now
  let rows = rows
    .into_iter()
    .map(|row| row.into_iter().map(|cell| cell.map(|set| names[&set])).collect())
    .collect();
  DfaMachine { inputs: nfa.inputs, rows }
}
