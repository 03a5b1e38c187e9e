//! Command line argument parsing for RelNorm tools.

use clap::Parser;

/// Command line arguments for RelNorm tools
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Name of a bundled demo schema, or "all" to analyze every demo
    #[arg(value_name = "SCHEMA")]
    pub schema: String,

    /// Attribute-count cap under which all subset closures are reported
    #[arg(long, value_name = "N", default_value_t = 8)]
    pub closure_cap: usize,
}

impl Config {
    pub fn target(&self) -> &str {
        &self.schema
    }

    pub fn should_process_all(&self) -> bool {
        self.schema == "all" || self.schema == "--all"
    }

    pub fn closure_cap(&self) -> usize {
        self.closure_cap
    }
}
