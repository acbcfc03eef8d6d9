use thiserror::Error;

/// Output port every phone and operating system writes its status lines through.
pub trait Console {
    fn print_line(&self, line: &str) -> Result<(), ConsoleError>;
}

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("unable to write to the console: {0}")]
    Write(#[from] std::io::Error),
}
