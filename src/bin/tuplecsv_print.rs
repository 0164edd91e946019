use std::env;
use std::error::Error;

use tuplecsv::{RecordDisplay, TupleCsvBuilder};

type Row = (i32, String, f32, char);

fn print_usage_and_exit() -> ! {
    eprintln!("Usage: tuplecsv_print <input> [skip_rows]");
    eprintln!("  <input>: file path or '-' for stdin");
    eprintln!("  rows are read as (int, string, float, char)");
    std::process::exit(1);
}

#[derive(Debug, PartialEq)]
struct Args {
    input: String,
    skip_rows: usize,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let input = args.next().ok_or("missing <input> argument")?;

    let skip_rows = match args.next() {
        Some(n) => n
            .parse::<usize>()
            .map_err(|e| format!("invalid skip_rows {n:?}: {e}"))?,
        None => 0,
    };

    if args.next().is_some() {
        return Err("too many arguments".into());
    }

    Ok(Args { input, skip_rows })
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let stream = TupleCsvBuilder::new()
        .with_skip_rows(args.skip_rows)
        .from_arg::<Row>(&args.input)?;

    for res in stream {
        let row = res.map_err(|e| format!("record error: {e}"))?;
        println!("({})", row.display());
    }

    Ok(())
}

fn main() {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("tuplecsv_print error: {e}");
            print_usage_and_exit();
        }
    };

    if let Err(e) = run(args) {
        eprintln!("tuplecsv_print error: {e}");
        std::process::exit(1);
    }
}
