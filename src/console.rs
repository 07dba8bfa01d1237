//! Operator-facing console collaborator.

use std::io::{self, BufRead, Write};

/// Blocking prompt/response surface between the session and the operator.
///
/// Every round-trip blocks the session until a response arrives. Tests
/// substitute a scripted implementation.
pub trait Console {
    /// Prints the message and waits for one line of input, trimmed.
    fn prompt(&mut self, message: &str) -> io::Result<String>;

    /// Prints one line of output.
    fn say(&mut self, message: &str);
}

/// Console over process stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a stdin/stdout console.
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        print!("{message} ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }
}
