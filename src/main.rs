use clap::Parser;
use sentiment_universe::cli::{run, Cli};
use sentiment_universe::logging;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run(cli)
}
