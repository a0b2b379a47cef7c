use std::process;

use card_payoff::cli::Cli;
use card_payoff::PayoffReport;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // diagnostics go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.resolve() {
        Ok((terms, config)) => {
            let report = PayoffReport::project(&terms, config);
            println!("{}", report.render(cli.schedule));
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
