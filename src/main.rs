use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dec_int_check::run_file;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "dec_int_check")]
#[command(about = "Runs BigInt test cases from a file and writes every failed result to a report file.")]
struct Args {
    /// Test-case file to read
    #[arg(long, default_value = "BigIntTestCases.txt")]
    input: PathBuf,

    /// Report file to write
    #[arg(long, default_value = "TestOutput.txt")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let report = run_file(&args.input, &args.output)
        .with_context(|| format!("test run over `{}` failed", args.input.display()))?;

    info!(
        cases = report.cases(),
        failed_results = report.mismatches().len(),
        output = %args.output.display(),
        "Tests Complete!"
    );
    Ok(())
}
