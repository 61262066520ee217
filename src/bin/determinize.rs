use automin::determinizer::*;
use automin::table;
use clap::Parser;

/// Determinize an automaton with epsilon transitions via subset construction.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// the path to the machine description
    input: std::path::PathBuf,
}

fn main() {
  let args = Args::try_parse().unwrap_or_else(|err| {
    eprintln!("{}", err);
    std::process::exit(1);
  });
  let text = std::fs::read_to_string(&args.input).unwrap_or_else(|err| {
    eprintln!("cannot open {}: {}", args.input.display(), err);
    std::process::exit(1);
  });
  let machine = table::read_nfa(&text).unwrap_or_else(|err| {
    eprintln!("{}", err);
    std::process::exit(1);
  });
  eprintln!("nfa states: {}", machine.len());
  let closures = all_closures(&machine);
  let dfa = determinize(&machine, &closures);
  print!("{}", table::write_dfa(&dfa));
}
