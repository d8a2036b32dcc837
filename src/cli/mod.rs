//! Terminal I/O for the demo CLI

mod console;

pub use console::Console;
