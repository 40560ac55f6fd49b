mod commands;
mod parse;
mod print;
mod setup;

pub use commands::run;
