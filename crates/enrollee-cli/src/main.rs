//! Enrollee Pipeline CLI
//!
//! Command-line tool for processing and inspecting enrollee CSV files.

use clap::{Parser, Subcommand};
use enrollee_core::{
    group_by, merge_by, prefer_higher_version, read_enrollees, run_pipeline, sort_by_name,
    writer, Enrollee, PipelineConfig, COLUMNS,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "enrollee-cli")]
#[command(about = "Enrollee CSV processing pipeline", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group by insurance, merge duplicate user IDs, sort, and write one file per group
    Run {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Directory receiving one output file per insurance value
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Treat the first input row as data instead of a header
        #[arg(long)]
        no_input_header: bool,

        /// Omit the header row from the output files
        #[arg(long)]
        no_output_header: bool,

        /// Write a JSON run report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Decode and display the records of an input file
    Show {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum number of records to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Treat the first input row as data instead of a header
        #[arg(long)]
        no_header: bool,
    },

    /// List insurance groups with their pre-merge record counts
    Groups {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Treat the first input row as data instead of a header
        #[arg(long)]
        no_header: bool,
    },

    /// Merge and sort records per group, then export everything to a single file
    Export {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (csv or json)
        #[arg(long, default_value = "csv")]
        format: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Treat the first input row as data instead of a header
        #[arg(long)]
        no_header: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> enrollee_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            out_dir,
            no_input_header,
            no_output_header,
            report,
        } => cmd_run(input, out_dir, no_input_header, no_output_header, report),
        Commands::Show {
            input,
            limit,
            no_header,
        } => cmd_show(&input, limit, no_header),
        Commands::Groups { input, no_header } => cmd_groups(&input, no_header),
        Commands::Export {
            input,
            format,
            output,
            no_header,
        } => cmd_export(&input, &format, &output, no_header),
    }
}

fn cmd_run(
    input: PathBuf,
    out_dir: PathBuf,
    no_input_header: bool,
    no_output_header: bool,
    report_path: Option<PathBuf>,
) -> enrollee_core::Result<()> {
    let config = PipelineConfig {
        input,
        out_dir,
        input_has_header: !no_input_header,
        write_header: !no_output_header,
    };

    let report = run_pipeline(&config)?;

    println!(
        "Processed {} records into {} group(s):",
        report.records_read,
        report.groups.len()
    );
    for group in &report.groups {
        println!(
            "  {} -> {} ({} records, {} after merge)",
            group.insurance,
            group.output_path.display(),
            group.records_in,
            group.records_out
        );
    }
    println!("{} duplicate(s) dropped", report.duplicates_dropped());

    if let Some(path) = report_path {
        report.save(&path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn cmd_show(input: &PathBuf, limit: Option<usize>, no_header: bool) -> enrollee_core::Result<()> {
    let enrollees = read_enrollees(input, !no_header)?;

    println!("File: {}", input.display());
    println!("Records: {}", enrollees.len());
    println!();

    println!("{}", COLUMNS.join("\t"));
    println!("{}", "-".repeat(COLUMNS.len() * 12));

    let row_limit = limit.unwrap_or(enrollees.len());
    for e in enrollees.iter().take(row_limit) {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            e.user_id, e.first_name, e.last_name, e.version, e.insurance
        );
    }

    if enrollees.len() > row_limit {
        println!("... ({} more records)", enrollees.len() - row_limit);
    }

    Ok(())
}

fn cmd_groups(input: &PathBuf, no_header: bool) -> enrollee_core::Result<()> {
    let enrollees = read_enrollees(input, !no_header)?;
    let groups = group_by(enrollees, |e: &Enrollee| e.insurance.clone());

    println!("Groups ({}):", groups.len());
    for (insurance, records) in &groups {
        println!("  {} ({} records)", insurance, records.len());
    }

    Ok(())
}

fn cmd_export(
    input: &PathBuf,
    format: &str,
    output: &PathBuf,
    no_header: bool,
) -> enrollee_core::Result<()> {
    let enrollees = read_enrollees(input, !no_header)?;

    // Same per-group processing as the pipeline, concatenated in group order
    let mut processed: Vec<Enrollee> = Vec::new();
    for (_, records) in group_by(enrollees, |e: &Enrollee| e.insurance.clone()) {
        let mut merged = merge_by(records, |e| e.user_id, prefer_higher_version);
        sort_by_name(&mut merged);
        processed.extend(merged);
    }

    let file = File::create(output)?;
    let mut out = BufWriter::new(file);

    match format.to_lowercase().as_str() {
        "csv" => {
            writer::write_lines(&mut out, &processed, true)?;
        }
        "json" => {
            serde_json::to_writer_pretty(&mut out, &processed)?;
            out.flush()?;
        }
        _ => {
            eprintln!("Unknown format: {}. Supported formats: csv, json", format);
            std::process::exit(1);
        }
    }

    println!(
        "Exported {} records to {}",
        processed.len(),
        output.display()
    );

    Ok(())
}
