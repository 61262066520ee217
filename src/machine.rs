/// One Mealy transition: destination state plus the output emitted on the way.
#[derive(Debug, Hash, Eq, PartialEq, Copy, Clone, Ord, PartialOrd)]
pub struct Transition {
  pub state: usize,
  pub output: u32,
}

/// Mealy machine: outputs live on the transitions.
/// An undefined transition is `None`; there is no padded sink row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealyMachine {
  pub inputs: usize,
  pub rows: Vec<Vec<Option<Transition>>>,
}

impl MealyMachine {
  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub fn step(&self, state: usize, symbol: usize) -> Option<Transition> {
    self.rows[state][symbol]
  }

  /// Feeds `word` to the machine starting at `start` and collects the outputs,
  /// stopping early when a transition is undefined.
  pub fn run(&self, start: usize, word: &[usize]) -> Vec<u32> {
    let mut state = start;
    let mut outputs = Vec::with_capacity(word.len());
    for &symbol in word {
      match self.rows[state][symbol] {
        Some(t) => {
          outputs.push(t.output);
          state = t.state;
        }
        None => break,
      }
    }
    outputs
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MooreRow {
  pub output: u32,
  pub next: Vec<Option<usize>>,
}

/// Moore machine: outputs live on the states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MooreMachine {
  pub inputs: usize,
  pub rows: Vec<MooreRow>,
}

impl MooreMachine {
  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  /// Outputs observed along `word` from `start`, including the start state's
  /// own output, stopping early at an undefined transition.
  pub fn run(&self, start: usize, word: &[usize]) -> Vec<u32> {
    let mut state = start;
    let mut outputs = vec![self.rows[state].output];
    for &symbol in word {
      match self.rows[state].next[symbol] {
        Some(next) => {
          outputs.push(self.rows[next].output);
          state = next;
        }
        None => break,
      }
    }
    outputs
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaRow {
  pub moves: Vec<Vec<usize>>,
  pub epsilon: Vec<usize>,
}

/// Nondeterministic automaton with a distinguished epsilon column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaMachine {
  pub inputs: usize,
  pub rows: Vec<NfaRow>,
}

impl NfaMachine {
  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }
}

/// Deterministic, epsilon-free result of subset construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaMachine {
  pub inputs: usize,
  pub rows: Vec<Vec<Option<usize>>>,
}

impl DfaMachine {
  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }
}
