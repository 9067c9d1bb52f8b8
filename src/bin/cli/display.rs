//! Display and output formatting functions for CLI.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use retheme::core::config::RethemeConfig;
use retheme::core::pipeline::{FileStatus, ImportOutcome, RunSummary, StageReport, Variant};

/// Display the totals of one run, and optionally a per-file table.
pub fn display_run_summary(summary: &RunSummary, details: bool) {
    let heading = match summary.variant {
        Variant::Refined => "Rewrite complete",
        Variant::FirstDraft => "Draft complete (no files written)",
    };
    println!("{}", heading.bright_green().bold());
    println!(
        "  files {} | eligible {} | changed {} | written {}",
        summary.files_discovered(),
        summary.files_eligible(),
        summary.files_changed(),
        summary.files_written()
    );
    println!(
        "  substitutions {} | prepended imports {}",
        summary.total_substitutions(),
        summary.prepended_imports()
    );

    if summary.prepended_imports() > 0 {
        println!(
            "{}",
            "  note: prepended imports may duplicate an existing import of the same module".yellow()
        );
    }

    if details {
        display_file_table(summary);
    }
}

/// Row for the per-file results table.
#[derive(Tabled)]
struct FileRow {
    file: String,
    import: String,
    styles: usize,
    injected: String,
    dropped: usize,
    substitutions: usize,
}

fn display_file_table(summary: &RunSummary) {
    let rows: Vec<FileRow> = summary
        .outcomes
        .iter()
        .filter_map(|outcome| match &outcome.status {
            FileStatus::Processed { report, .. } => {
                Some(file_row(&outcome.path.display().to_string(), report))
            }
            FileStatus::Ineligible => None,
        })
        .collect();

    if rows.is_empty() {
        println!("{}", "  no eligible files".dimmed());
        return;
    }

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
}

fn file_row(path: &str, report: &StageReport) -> FileRow {
    let import = match report.import {
        ImportOutcome::Skipped => "-".to_string(),
        ImportOutcome::Augmented(n) => format!("augmented ({n})"),
        ImportOutcome::Prepended => "prepended".to_string(),
    };
    let injected = report
        .injection
        .injected_after
        .map(|line| format!("after line {}", line + 1))
        .unwrap_or_else(|| "-".to_string());

    FileRow {
        file: path.to_string(),
        import,
        styles: report.style_declarations,
        injected,
        dropped: report.injection.dropped_lines,
        substitutions: report.substitutions,
    }
}

/// Display the effective configuration
pub fn display_config_summary(config: &RethemeConfig) {
    /// Row for configuration display table.
    #[derive(Tabled)]
    struct ConfigRow {
        setting: String,
        value: String,
    }

    let config_rows = vec![
        ConfigRow {
            setting: "Root".to_string(),
            value: config.discovery.root.display().to_string(),
        },
        ConfigRow {
            setting: "Suffixes".to_string(),
            value: config.discovery.suffixes.join(", "),
        },
        ConfigRow {
            setting: "Hook Import".to_string(),
            value: format!("{} from \"{}\"", config.imports.symbol, config.imports.module),
        },
        ConfigRow {
            setting: "Registry".to_string(),
            value: format!(
                "{} -> {}",
                config.substitution.registry_prefix(),
                config.substitution.theme_prefix()
            ),
        },
        ConfigRow {
            setting: "Excluded Block".to_string(),
            value: config.substitution.global_block_marker.clone(),
        },
    ];

    let mut table = Table::new(config_rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
    println!();
}
