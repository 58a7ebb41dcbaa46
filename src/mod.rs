extern crate pest;
#[macro_use]
extern crate pest_derive;
#[macro_use]
extern crate prettytable;

mod app;
pub mod commands;
mod error;
pub mod models;
pub mod parser;

pub use app::{run_app, SplitOpts};
pub use error::{ConfigError, Error, ParserError, SplitError};
