use std::io::Write;

use crate::domain::{Console, ConsoleError};

#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print_line(&self, line: &str) -> Result<(), ConsoleError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}")?;
        Ok(())
    }
}
