use std::io::{self, BufRead, Write};

use clap::Parser;
use rpncalc::calculate;

/// rpncalc is an easy to use command-line calculator for infix arithmetic
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates this expression and exits instead of starting the
    /// interactive prompt.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        println!("{}", calculate(&expression));
        return;
    }

    println!("Enter expression (type 'exit' or 'quit' to quit):");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        println!("{}", calculate(input));
    }
}
