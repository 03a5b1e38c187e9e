//! Unified output formatting for processing all demo schemas.

use std::process;
use tracing::{error, info};

/// Unified output formatting for processing all demo schemas
pub struct RunSummary {
    tool_name: String,
    total_schemas: usize,
    successful: usize,
    failed: usize,
}

impl RunSummary {
    pub fn new(tool_name: &str, total_schemas: usize) -> Self {
        info!("Running {} on {} demo schemas...", tool_name, total_schemas);
        info!("{}", "=".repeat(80));

        Self {
            tool_name: tool_name.to_string(),
            total_schemas,
            successful: 0,
            failed: 0,
        }
    }

    pub fn report_success(&mut self, schema_name: &str, stats: Option<&str>) {
        self.successful += 1;
        if let Some(stats) = stats {
            info!("SUCCESS: {} ({})", schema_name, stats);
        } else {
            info!("SUCCESS: {}", schema_name);
        }
    }

    pub fn report_failure(&mut self, schema_name: &str, error: Option<&str>) {
        self.failed += 1;
        if let Some(error) = error {
            error!("FAILED: {} - {}", schema_name, error);
        } else {
            error!("FAILED: {}", schema_name);
        }
    }

    pub fn finish(self) {
        info!("");
        info!("{}", "=".repeat(80));
        info!("SUMMARY:");
        info!("  Total schemas: {}", self.total_schemas);
        info!("  Successful: {}", self.successful);
        info!("  Failed: {}", self.failed);

        if self.failed > 0 {
            error!(
                "Some schemas failed to process with {}. Check the errors above for details.",
                self.tool_name
            );
            process::exit(1);
        } else {
            info!(
                "All demo schemas processed successfully with {}!",
                self.tool_name
            );
        }
    }
}
