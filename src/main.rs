use crate::cli::GcReport;
use crate::config::Config;
use crate::utils::fasta::InputUnavailable;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use log::error;
use std::process::ExitCode;
mod analysis;
mod cli;
mod config;
mod metrics;
mod pipeline;
mod report;
mod translation;
mod utils;
mod validation;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = GcReport::parse();
    let config = Config::from_args(&args);

    match pipeline::run(&config) {
        Ok(summary) => {
            println!(
                "{} {} sequences analyzed, {} skipped. Results saved to {}",
                "Analysis complete.".green(),
                summary.analyzed,
                summary.skipped,
                summary.table.display()
            );
            if let Some(chart) = summary.chart {
                println!("GC content chart saved to {}", chart.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) if err.downcast_ref::<InputUnavailable>().is_some() => {
            error!("{err:#}");
            eprintln!("{}", "Make sure that:".yellow());
            eprintln!("   - the file exists at the given path or inside --input-dir");
            eprintln!("   - the file name is spelled correctly, including the .fasta extension");
            ExitCode::from(1)
        }
        Err(err) => {
            error!("Unexpected error: {err:#}");
            eprintln!("{}", "Debug info:".yellow());
            eprintln!("   - input: {}", config.input.display());
            eprintln!("   - output table: {}", config.table.display());
            eprintln!("   - output image: {}", config.chart.display());
            eprintln!("   - input exists: {}", config.input.exists());
            ExitCode::from(2)
        }
    }
}
