use automin::minimizer::*;
use automin::table;
use clap::Parser;

/// Minimize a Mealy machine given as a transition table.
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
  let machine = table::read_mealy(&text).unwrap_or_else(|err| {
    eprintln!("{}", err);
    std::process::exit(1);
  });
  eprintln!("states: {}", machine.len());
  let minimized = minimize_mealy(&machine);
  eprintln!("minimized states: {}", minimized.len());
  print!("{}", table::write_mealy(&minimized));
}
