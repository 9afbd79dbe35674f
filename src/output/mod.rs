//! Index output
//!
//! - `json` - writes the index document
//! - `report` - status lines for the operator
//! - `config` - output configuration types

mod config;
mod json;
mod report;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{render_json, write_index};
pub use report::{print_report, write_report};
