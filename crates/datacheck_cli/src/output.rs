use colored::*;
use datacheck_artifacts::ValidationReport;

pub fn print_report(report: &ValidationReport, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    println!("\nContract: {}", report.contract.bold());

    if report.valid {
        println!(
            "{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!("{} {}", "✗".red().bold(), "Validation FAILED".red().bold());
    }

    if !report.errors.is_empty() {
        println!("\n{}", "Violations:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.red());
        }
    }

    let sensitive: Vec<_> = report
        .pii_summary
        .values()
        .filter(|f| f.is_sensitive())
        .collect();
    if !sensitive.is_empty() {
        println!("\n{}", "PII findings:".yellow().bold());
        for finding in sensitive {
            let labels: Vec<&str> = finding.hits.iter().map(|l| l.as_str()).collect();
            println!(
                "  {} matched {} ({} values sampled)",
                finding.field.yellow(),
                labels.join(", "),
                finding.count
            );
        }
    }

    if !report.suggested_tags.is_empty() {
        println!("\n{} {}", "Suggested tags:".bold(), report.suggested_tags.join(", "));
    }

    println!("\n{}", "Artifacts:".bold());
    println!("  Lineage: {}", report.lineage);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &ValidationReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to render report as JSON: {e}"),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
