pub mod commands;
mod print;
mod setup;

pub use print::format_error;
