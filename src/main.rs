use std::process::ExitCode;

use clap::Parser;
use phone_bridge::{app::Showcase, infra::StdoutConsole};
use tracing::{Level, error};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Most verbose level of diagnostics written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level)
        .init();

    let showcase = match Showcase::standard() {
        Ok(showcase) => showcase,
        Err(e) => {
            error!("unable to assemble the showcase: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = showcase.run(&StdoutConsole) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
