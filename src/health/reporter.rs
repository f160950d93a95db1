//! Formatting and reporting for health check results

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::runner::HealthCheckReport;

/// Formats a health check report as a table followed by a summary
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Check", "Status", "Time", "Result"]);

    for outcome in &report.outcomes {
        builder.push_record([
            outcome.name.to_string(),
            outcome.result.status.colored_label(),
            format!("{:.2?}", outcome.result.duration),
            outcome.result.message.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!("{}\n{}", table, format_summary(report))
}

fn format_summary(report: &HealthCheckReport) -> String {
    let mut lines = vec![
        String::new(),
        format!("{}", "Summary".bold().underline()),
        format!(
            "  {} passed, {} warned, {} failed ({} total)",
            report.passed().to_string().green(),
            report.warned().to_string().yellow(),
            report.failed().to_string().red(),
            report.total()
        ),
    ];

    let overall = match (report.is_healthy(), report.has_warnings()) {
        (false, _) => "Overall: UNHEALTHY".red().bold(),
        (true, true) => "Overall: HEALTHY (with warnings)".yellow().bold(),
        (true, false) => "Overall: HEALTHY".green().bold(),
    };
    lines.push(format!("  {}", overall));
    lines.join("\n")
}

/// Prints the report table, then the details of every check that has some
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    for outcome in report.outcomes.iter().filter(|o| !o.result.details.is_empty()) {
        match outcome.description {
            Some(description) => println!("\n{} ({})", outcome.name.bold(), description),
            None => println!("\n{}", outcome.name.bold()),
        }
        for line in &outcome.result.details {
            println!("{}", line);
        }
    }
}
