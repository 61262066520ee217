//! Plain-text transition tables.
//!
//! Every table starts with a `stateCount inputSymbolCount` header followed by
//! one whitespace-separated row per state. The sink marker `-` stands for an
//! undefined transition. Cell shapes per variant:
//! Mealy `dest,output`, Moore bare `dest` after a leading output token,
//! NFA a comma-separated destination list with a trailing epsilon column.

use crate::machine::*;
use itertools::Itertools;
use std::fmt::Write;
use std::str::SplitWhitespace;
use thiserror::Error;

pub const SINK: &str = "-";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
  #[error("missing table header")]
  MissingHeader,
  #[error("bad header token {0:?}: expected `<states> <inputs>`")]
  BadHeader(String),
  #[error("machine must have at least one state")]
  Empty,
  #[error("missing cell for state {state}, column {column}")]
  MissingCell { state: usize, column: usize },
  #[error("bad token {token:?} for state {state}, column {column}")]
  BadToken { token: String, state: usize, column: usize },
  #[error("successor {found} out of range for state {state} (states: {states})")]
  BadSuccessor { found: usize, state: usize, states: usize },
}

pub fn read_mealy(input: &str) -> Result<MealyMachine, TableError> {
  let mut tokens = input.split_whitespace();
  let (states, inputs) = read_header(&mut tokens)?;
  let rows = (0..states)
    .map(|state| {
      (0..inputs)
        .map(|column| {
          let token = next_cell(&mut tokens, state, column)?;
          if token == SINK {
            return Ok(None);
          }
          let (dest, output) = token
            .split_once(',')
            .ok_or_else(|| bad_token(token, state, column))?;
          let dest = parse_number(dest, token, state, column)?;
          let output = parse_output(output, token, state, column)?;
          check_range(dest, state, states)?;
          Ok(Some(Transition { state: dest, output }))
        })
        .try_collect()
    })
    .try_collect()?;
  Ok(MealyMachine { inputs, rows })
}

pub fn read_moore(input: &str) -> Result<MooreMachine, TableError> {
  let mut tokens = input.split_whitespace();
  let (states, inputs) = read_header(&mut tokens)?;
  let rows = (0..states)
    .map(|state| {
      let token = next_cell(&mut tokens, state, 0)?;
      let output = parse_output(token, token, state, 0)?;
      let next = (0..inputs)
        .map(|column| {
          let token = next_cell(&mut tokens, state, column + 1)?;
          if token == SINK {
            return Ok(None);
          }
          let dest = parse_number(token, token, state, column + 1)?;
          check_range(dest, state, states)?;
          Ok(Some(dest))
        })
        .try_collect()?;
      Ok(MooreRow { output, next })
    })
    .try_collect()?;
  Ok(MooreMachine { inputs, rows })
}

/// Reads an NFA table with `inputs + 1` columns, the last one being epsilon.
pub fn read_nfa(input: &str) -> Result<NfaMachine, TableError> {
  let mut tokens = input.split_whitespace();
  let (states, inputs) = read_header(&mut tokens)?;
  let rows = (0..states)
    .map(|state| {
      let mut cells: Vec<Vec<usize>> = (0..inputs + 1)
        .map(|column| {
          let token = next_cell(&mut tokens, state, column)?;
          if token == SINK {
            return Ok(Vec::new());
          }
          token
            .split(',')
            .map(|item| {
              let dest = parse_number(item, token, state, column)?;
              check_range(dest, state, states)?;
              Ok(dest)
            })
            .try_collect()
        })
        .try_collect()?;
      let epsilon = cells.pop().unwrap_or_default();
      Ok(NfaRow { moves: cells, epsilon })
    })
    .try_collect()?;
  Ok(NfaMachine { inputs, rows })
}

pub fn write_mealy(machine: &MealyMachine) -> String {
  write_rows(machine.len(), machine.inputs, |out, state| {
    let row = machine.rows[state]
      .iter()
      .map(|cell| match cell {
        Some(t) => format!("{},{}", t.state, t.output),
        None => SINK.to_string(),
      })
      .join(" ");
    out.push_str(&row);
  })
}

pub fn write_moore(machine: &MooreMachine) -> String {
  write_rows(machine.len(), machine.inputs, |out, state| {
    let row = &machine.rows[state];
    write!(out, "{} ", row.output).unwrap();
    let cells = row
      .next
      .iter()
      .map(|cell| match cell {
        Some(dest) => dest.to_string(),
        None => SINK.to_string(),
      })
      .join(" ");
    out.push_str(&cells);
  })
}

pub fn write_dfa(machine: &DfaMachine) -> String {
  write_rows(machine.len(), machine.inputs, |out, state| {
    let row = machine.rows[state]
      .iter()
      .map(|cell| match cell {
        Some(dest) => dest.to_string(),
        None => SINK.to_string(),
      })
      .join(" ");
    out.push_str(&row);
  })
}

fn write_rows(states: usize, inputs: usize, mut row: impl FnMut(&mut String, usize)) -> String {
  let mut out = format!("{} {}\n", states, inputs);
  for state in 0..states {
    row(&mut out, state);
    out.push('\n');
  }
  out
}

fn read_header(tokens: &mut SplitWhitespace) -> Result<(usize, usize), TableError> {
  let mut field = || {
    let token = tokens.next().ok_or(TableError::MissingHeader)?;
    token.parse::<usize>().map_err(|_| TableError::BadHeader(token.to_string()))
  };
  let states = field()?;
  let inputs = field()?;
  if states == 0 {
    return Err(TableError::Empty);
  }
  Ok((states, inputs))
}

fn next_cell<'a>(
  tokens: &mut SplitWhitespace<'a>,
  state: usize,
  column: usize,
) -> Result<&'a str, TableError> {
  tokens.next().ok_or(TableError::MissingCell { state, column })
}

fn parse_number(item: &str, token: &str, state: usize, column: usize) -> Result<usize, TableError> {
  item.parse::<usize>().map_err(|_| bad_token(token, state, column))
}

fn parse_output(item: &str, token: &str, state: usize, column: usize) -> Result<u32, TableError> {
  item.parse::<u32>().map_err(|_| bad_token(token, state, column))
}

fn bad_token(token: &str, state: usize, column: usize) -> TableError {
  TableError::BadToken { token: token.to_string(), state, column }
}

fn check_range(found: usize, state: usize, states: usize) -> Result<(), TableError> {
  if found >= states {
    return Err(TableError::BadSuccessor { found, state, states });
  }
  Ok(())
}
