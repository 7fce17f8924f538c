//! Configuration utility types.
//!
//! | Module   | Purpose                                  |
//! |----------|------------------------------------------|
//! | `error`  | Configuration errors and diagnostics     |
//! | `field`  | Dotted field paths for diagnostics       |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
