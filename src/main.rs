use std::env;

use anyhow::Context;
use clap::Parser;
use log::info;

use node_readiness_gate::config::ReadinessGateConfig;
use node_readiness_gate::core::readiness::NodeReadinessEvaluator;
use node_readiness_gate::report::printer::{print_report, OutputFormat, ReportPrinterConfig};
use node_readiness_gate::snapshot::{evaluate_snapshot, ClusterSnapshot};

#[derive(Parser)]
struct Args {
    #[clap(short, long)]
    config_file: Option<std::path::PathBuf>,
    #[clap(short, long)]
    snapshot_file: std::path::PathBuf,
    /// Overrides report output file from config
    #[clap(short, long)]
    output_file: Option<std::path::PathBuf>,
    /// Overrides report format from config
    #[clap(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    // log level INFO by default
    let mut env_logger_builder = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        env_logger_builder.filter_level(log::LevelFilter::Info);
    }
    env_logger_builder.init();

    let args = Args::parse();

    let mut config = match &args.config_file {
        Some(config_file) => {
            info!("Path to config file: {:?}", config_file);
            ReadinessGateConfig::from_file(config_file)
                .with_context(|| format!("could not load config file {:?}", config_file))?
        }
        None => ReadinessGateConfig::default(),
    };
    info!("Path to snapshot file: {:?}", args.snapshot_file);

    let evaluator = NodeReadinessEvaluator::new(&config).context("invalid readiness rules")?;
    info!("Readiness rules: {:?}", evaluator.rule_names());

    let snapshot = ClusterSnapshot::from_file(&args.snapshot_file)
        .with_context(|| format!("could not load snapshot file {:?}", args.snapshot_file))?;
    let report = evaluate_snapshot(&evaluator, &snapshot);

    let printer_config: ReportPrinterConfig = config
        .report
        .take()
        .unwrap_or_default()
        .with_overrides(args.output_file, args.format);
    print_report(&report, &printer_config).context("could not write report")?;

    Ok(())
}
