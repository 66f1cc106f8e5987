/*!
 * procmem - Main Entry Point
 *
 * Prints the memory usage of a process broken down by mapped object
 * (libraries, heap, anonymous regions), with totals.
 */

use clap::Parser;
use procmem::{
    init_tracing, show, OutputFormat, Pid, ProcFsSource, ProcMemError, ReportConfig, SourceConfig,
};

/// Display memory statistics of a process
#[derive(Debug, Parser)]
#[command(name = "procmem", version, about)]
struct Args {
    /// Process to inspect
    #[arg(short, long, value_name = "PID")]
    pid: String,

    /// One row per mapping instead of one per object
    #[arg(short, long)]
    verbose: bool,

    /// Only show mappings with private dirty memory
    #[arg(short, long)]
    terse: bool,

    /// Show address ranges, ordered by address
    #[arg(short, long)]
    addresses: bool,

    /// Emit records and totals as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn report_config(&self) -> ReportConfig {
        ReportConfig {
            verbose: self.verbose,
            terse: self.terse,
            addresses: self.addresses,
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            },
        }
    }

    fn pid(&self) -> Result<Pid, ProcMemError> {
        match self.pid.parse::<Pid>() {
            Ok(pid) if pid > 0 => Ok(pid),
            _ => Err(ProcMemError::InvalidPid(self.pid.clone())),
        }
    }
}

fn main() -> miette::Result<()> {
    init_tracing();

    let args = Args::parse();
    let pid = args.pid()?;
    let config = args.report_config();
    let source = ProcFsSource::with_config(&SourceConfig::from_env());

    let stdout = std::io::stdout();
    show(&source, pid, &config, &mut stdout.lock())?;
    Ok(())
}
