mod in_memory_console;
mod stdout_console;

pub use in_memory_console::InMemoryConsole;
pub use stdout_console::StdoutConsole;
