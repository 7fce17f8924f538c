//! Command-line interface module.

mod args;
pub mod common;
pub mod init;
pub mod page;
pub mod schema;
pub mod sitemap;

pub use args::{Cli, Commands, EntityArgs};
