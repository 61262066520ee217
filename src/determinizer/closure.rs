use crate::machine::NfaMachine;
use std::collections::VecDeque;

/// States reachable from `start` over epsilon edges alone, `start` included.
/// Returned sorted, so set equality reduces to sequence equality.
pub fn epsilon_closure(nfa: &NfaMachine, start: usize) -> Vec<usize> {
  let mut visited = vec![false; nfa.len()];
  let mut queue = VecDeque::from([start]);
  let mut result = Vec::new();
  while let Some(state) = queue.pop_front() {
    if visited[state] {
      continue;
    }
    visited[state] = true;
    result.push(state);
    queue.extend(nfa.rows[state].epsilon.iter().copied());
  }
  result.sort_unstable();
  result
}

/// Closure of every state, indexed by state. Computed once and reused by the
/// subset constructor.
pub fn all_closures(nfa: &NfaMachine) -> Vec<Vec<usize>> {
  (0..nfa.len()).map(|state| epsilon_closure(nfa, state)).collect()
}
