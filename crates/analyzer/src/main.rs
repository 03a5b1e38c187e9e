use analyzer::{demos, Analyzer};
use clap::Parser;
use common::{Config, RunSummary};
use itertools::Itertools;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::parse();

    if config.should_process_all() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("info"))
            .init();
        run_all_demos(&config);
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .init();

    let Some(demo) = demos::find_demo(config.target()) else {
        error!(
            "unknown demo schema '{}'; available: {}",
            config.target(),
            demos::demo_schemas().iter().map(|d| d.name()).join(", ")
        );
        std::process::exit(1);
    };

    info!("{}: {}", demo.name(), demo.description());
    let report = Analyzer::new(config.closure_cap()).analyze(demo.schema());
    info!("\n{report}");
}

fn run_all_demos(config: &Config) {
    let all_demos = demos::demo_schemas();
    let mut summary = RunSummary::new("analyzer", all_demos.len());

    for demo in &all_demos {
        match std::panic::catch_unwind(|| {
            Analyzer::new(config.closure_cap()).analyze(demo.schema())
        }) {
            Ok(report) => {
                let stats = format!(
                    "keys={}, cover={}, form={}",
                    report.candidate_keys().len(),
                    report.minimal_cover().len(),
                    report.normal_forms().highest_form()
                );
                summary.report_success(demo.name(), Some(&stats));
            }
            Err(panic_info) => {
                let error_msg = if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else {
                    "Unknown panic occurred".to_string()
                };
                summary.report_failure(demo.name(), Some(&error_msg));
            }
        }
    }

    summary.finish();
}
