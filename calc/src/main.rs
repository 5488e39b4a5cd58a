mod cli;
mod repl;
mod rlpl;
mod rppl;

use std::path::PathBuf;

use clap::Parser;

use calc_core::{
    eval::eval_source,
    lexer::prelude::tokenize,
    parser::prelude::{parse_source, Postfix},
    utils::prelude::Error,
};
use cli::{print_evaluated, print_evaluating};

#[derive(Parser)]
enum Command {
    /// Evaluates an arithmetic expression
    Eval {
        /// Expression to evaluate
        #[arg(required_unless_present = "path")]
        expression: Option<String>,
        /// Path of a file with one expression per line
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Print the token stream before the result
        #[arg(long, default_value_t = false)]
        print_tokens: bool,
        /// Print the syntax tree before the result
        #[arg(long, default_value_t = false)]
        print_ast: bool,
        /// Print the expression in reverse-Polish form
        #[arg(long, default_value_t = false)]
        postfix: bool,
    },
    /// Runs Read Eval Print Loop
    Repl,
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl
}

fn main() {
    match Command::parse() {
        Command::Eval { expression, path, print_tokens, print_ast, postfix } => {
            if let Some(expression) = expression {
                eval_one(&expression, print_tokens, print_ast, postfix);
            }

            if let Some(path) = path {
                eval_file(path);
            }
        },
        Command::Repl => {
            let _ = repl::start();
        },
        Command::Rlpl => {
            let _ = rlpl::start();
        },
        Command::Rppl => {
            let _ = rppl::start();
        }
    }
}

fn eval_one(expression: &str, print_tokens: bool, print_ast: bool, postfix: bool) {
    if print_tokens {
        if let Ok(tokens) = tokenize(expression) {
            for token in &tokens {
                println!("{token}");
            }
        }
    }

    if print_ast || postfix {
        if let Ok(parsed) = parse_source(expression) {
            if print_ast {
                println!("{parsed:#?}");
            }

            if postfix {
                println!("{}", parsed.postfix());
            }
        }
    }

    match eval_source(expression, PathBuf::from("<expression>")) {
        Ok(value) => println!("{value}"),
        Err(err) => print_error(&err)
    }
}

fn eval_file(path: PathBuf) {
    print_evaluating(path.to_str().unwrap_or("<file>"));
    let start = std::time::Instant::now();

    let src = match std::fs::read_to_string(&path) {
        Ok(src) => src,
        Err(err) => {
            print_error(&Error::StdIo { err: err.kind() });

            return;
        }
    };

    for line in src.lines() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        // A failed line is reported and the rest of the file still
        // runs; every expression is independent.
        match eval_source(line, path.clone()) {
            Ok(value) => println!("{line} = {value}"),
            Err(err) => print_error(&err)
        }
    }

    print_evaluated(std::time::Instant::now() - start);
}

fn print_error(error: &Error) {
    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    error.pretty(&mut buf);
    buf_writer
        .print(&buf)
        .expect("Writing error to stderr");
}
