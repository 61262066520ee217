use automin::convert;
use automin::table;
use clap::Parser;

/// Convert a Moore machine to an equivalent Mealy machine.
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
  let machine = table::read_moore(&text).unwrap_or_else(|err| {
    eprintln!("{}", err);
    std::process::exit(1);
  });
  let mealy = convert::moore_to_mealy(&machine);
  eprintln!("mealy states: {}", mealy.len());
  print!("{}", table::write_mealy(&mealy));
}
