use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use prettytable::{row, Table};
use serde::Deserialize;

use crate::error::GateError;
use crate::report::ReadinessReport;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    JSON,
    PrettyTable,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ReportPrinterConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// If not set the report is written to stdout
    pub output_file: Option<PathBuf>,
}

impl ReportPrinterConfig {
    /// Applies settings given on the command line on top of the config file ones.
    pub fn with_overrides(
        mut self,
        output_file: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(output_file) = output_file {
            self.output_file = Some(output_file);
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

pub fn print_report(
    report: &ReadinessReport,
    config: &ReportPrinterConfig,
) -> Result<(), GateError> {
    let mut output: Box<dyn Write> = match &config.output_file {
        Some(output_file) => Box::new(File::create(output_file)?),
        None => Box::new(std::io::stdout()),
    };
    write_report(report, config.format, &mut output)
}

pub fn write_report(
    report: &ReadinessReport,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), GateError> {
    match format {
        OutputFormat::PrettyTable => write_report_as_pretty_table(report, output),
        OutputFormat::JSON => write_report_as_json(report, output),
    }
}

fn write_report_as_pretty_table(
    report: &ReadinessReport,
    output: &mut dyn Write,
) -> Result<(), GateError> {
    let mut aggregated_table = Table::new();
    aggregated_table.add_row(row!["Metric", "Count"]);
    aggregated_table.add_row(row!["Total nodes", report.total_nodes]);
    aggregated_table.add_row(row!["Ready nodes", report.ready_nodes]);
    aggregated_table.add_row(row!["Not ready nodes", report.not_ready_nodes]);
    aggregated_table.add_row(row!["Malformed nodes", report.malformed_nodes]);

    let mut verdicts_table = Table::new();
    verdicts_table.add_row(row!["Node", "Not ready", "Malformed", "Fired rules"]);
    for verdict in report.verdicts.iter() {
        verdicts_table.add_row(row![
            verdict.node_name,
            verdict.not_ready,
            verdict.malformed,
            verdict.fired_rules.join(",")
        ]);
    }

    write!(output, "{}", aggregated_table)?;
    write!(output, "{}", verdicts_table)?;
    Ok(())
}

fn write_report_as_json(report: &ReadinessReport, output: &mut dyn Write) -> Result<(), GateError> {
    let serialized_json = serde_json::to_string_pretty(report)?;
    output.write_all(serialized_json.as_bytes())?;
    Ok(())
}
