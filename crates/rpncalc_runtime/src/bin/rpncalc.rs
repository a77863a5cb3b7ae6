//! Rpncalc CLI entry point.

use std::env;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use rpncalc_eval::Evaluator;
use rpncalc_runtime::{HelpCatalog, Repl, strip_comment};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_usage();
        return Ok(());
    }
    if args.iter().any(|arg| arg == "-V" || arg == "--version") {
        println!("rpncalc {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if !args.is_empty() {
        return batch(&args.join(" "));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        interactive()
    } else {
        let mut piped = String::new();
        stdin.lock().read_to_string(&mut piped)?;
        let source = piped
            .lines()
            .map(strip_comment)
            .collect::<Vec<_>>()
            .join(" ");
        batch(&source)
    }
}

/// Evaluates one token sequence, printing each emitted line, then drains
/// whatever is left on the stack. A fault skips the drain and fails.
fn batch(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut evaluator = Evaluator::new();

    let words: Vec<&str> = source.split_whitespace().collect();
    if let Some(response) = HelpCatalog::new().respond(&evaluator, &words) {
        for line in response {
            println!("{line}");
        }
        return Ok(());
    }

    evaluator.eval(source, &mut |line| println!("{line}"))?;
    drain(&evaluator);
    Ok(())
}

fn interactive() -> Result<(), Box<dyn std::error::Error>> {
    let mut repl = Repl::new()?;
    repl.run()?;
    drain(repl.evaluator());
    Ok(())
}

/// Prints anything left on the stack, top first.
fn drain(evaluator: &Evaluator) {
    for value in evaluator.stack().contents().iter().rev() {
        println!("{value}");
    }
}

fn print_usage() {
    println!(
        "rpncalc - Stack-based (RPN) expression evaluator

USAGE:
    rpncalc [TOKENS...]

With arguments, evaluates them as one token sequence and exits. With
input piped on stdin, evaluates it (one token sequence, '#' comments
stripped) and exits. Otherwise starts an interactive session.

Anything left on the stack is printed, top first, on the way out.

OPTIONS:
    -h, --help       Print help information
    -V, --version    Print version information

EXAMPLES:
    rpncalc 5 3 -              Evaluate and print the result
    rpncalc 2 10 '**'          Quote tokens your shell would expand
    echo '2 3 +' | rpncalc     Evaluate piped input
    rpncalc help               List every operation
    rpncalc help xchg          Describe one operation"
    );
}
