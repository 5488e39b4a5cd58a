use std::io::Write;

use calc_core::lexer::prelude::{Lexer, TokenKind};

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
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
				let mut lexer = Lexer::new(&input);

				loop {
					match lexer.next_token() {
						Ok(token) => {
							println!("{:?}", token);

							if token.kind == TokenKind::Eof {
								break;
							}
						},
						Err(err) => {
							let details = err.details();
							println!("[at {}] Lexical Error: {}", err.location.start, details.0);
							if details.1.len() > 0 {
								println!("{}", details.1.join("\n"));
							}
							break;
						}
					}
				}
			}
		}
	}
}
