use std::{io::Write, path::PathBuf};

use calc_core::eval::eval_source;

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	let _ = ctrlc::set_handler(|| {
		println!();
		std::process::exit(0);
	});

	let stdin = std::io::stdin();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;
		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			".exit" => return Ok(()),
			_ => {
				match eval_source(&input, PathBuf::from("<repl>")) {
					Ok(value) => println!("{value}"),
					Err(err) => {
						let buf_writer = crate::cli::stderr_buffer_writer();
						let mut buf = buf_writer.buffer();

						err.pretty(&mut buf);
						buf_writer
							.print(&buf)
							.expect("Writing error to stderr");
					}
				}
			}
		}
	}
}
