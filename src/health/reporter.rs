//! Table formatting for health check reports

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::runner::HealthCheckReport;

/// Formats a health check report as a table followed by a summary
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Check", "Status", "Duration", "Message"]);

    for (name, result) in &report.results {
        builder.push_record([
            name.clone(),
            result.status.as_colored_str(),
            format!("{:.2?}", result.duration),
            result.message.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!("{table}\n{}", format_summary(report))
}

fn format_summary(report: &HealthCheckReport) -> String {
    let mut lines = vec![
        String::new(),
        "Summary".bold().underline().to_string(),
        format!("  Total checks: {}", report.total),
        format!("  {} Passed: {}", "✓".green(), report.passed),
    ];

    if report.warned > 0 {
        lines.push(format!("  {} Warned: {}", "⚠".yellow(), report.warned));
    }
    if report.failed > 0 {
        lines.push(format!("  {} Failed: {}", "✗".red(), report.failed));
    }

    lines.push(String::new());
    let overall = match (report.is_healthy(), report.has_warnings()) {
        (true, false) => "Overall: HEALTHY".green().bold(),
        (true, true) => "Overall: HEALTHY (with warnings)".yellow().bold(),
        (false, _) => "Overall: UNHEALTHY".red().bold(),
    };
    lines.push(format!("  {overall}"));

    lines.join("\n") + "\n"
}

/// Formats the detail blocks of every check that produced them
pub fn format_details(report: &HealthCheckReport) -> String {
    report
        .results
        .iter()
        .filter_map(|(name, result)| {
            result
                .details
                .as_ref()
                .map(|details| format!("\n{} Details:\n{}", name.bold(), details))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints a health check report and its details to stdout
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    let details = format_details(report);
    if !details.is_empty() {
        println!("{details}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::check::CheckResult;

    fn sample_report() -> HealthCheckReport {
        HealthCheckReport {
            results: vec![
                (
                    "Shader".to_string(),
                    CheckResult::pass("2 stages compiled").with_details("  vertex: 120 bytes"),
                ),
                ("Graphics Backend".to_string(), CheckResult::warn("no adapters")),
            ],
            total: 2,
            passed: 1,
            warned: 1,
            failed: 0,
        }
    }

    #[test]
    fn test_report_lists_every_check() {
        colored::control::set_override(false);
        let text = format_report(&sample_report());

        assert!(text.contains("Shader"));
        assert!(text.contains("Graphics Backend"));
        assert!(text.contains("2 stages compiled"));
        assert!(text.contains("Overall: HEALTHY (with warnings)"));
    }

    #[test]
    fn test_details_only_for_checks_with_details() {
        colored::control::set_override(false);
        let details = format_details(&sample_report());

        assert!(details.contains("Shader Details:"));
        assert!(details.contains("vertex: 120 bytes"));
        assert!(!details.contains("Graphics Backend"));
    }
}
