#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use dimr_cli::args::CliArgs;
use dimr_cli::driver;
use dimr_cli::reporter::Reporter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS_PRESENT: i32 = 2;

fn main() -> Result<()> {
    // DIMR_LOG / RUST_LOG enable tracing; DIMR_LOG_FORMAT=tree|json|text.
    dimr_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let report = driver::run(&args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        let pretty = args.pretty.unwrap_or_else(|| std::io::stdout().is_terminal());
        let reporter = Reporter::new(pretty);
        if let Some(entries) = &report.implementations {
            print!("{}", reporter.render_implementations(entries));
        }
        print!("{}", reporter.render(&report.diagnostics));
        eprintln!(
            "{}",
            reporter.format_summary(report.error_count(), report.warning_count())
        );
    }

    if report.has_errors() {
        std::process::exit(EXIT_DIAGNOSTICS_PRESENT);
    }
    std::process::exit(EXIT_SUCCESS);
}
