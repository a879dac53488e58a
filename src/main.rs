use anyhow::Result;
use clap::Parser;
use spreadkit::cli::Cli;
use spreadkit::config::{load_config, RunSettings};

fn main() -> Result<()> {
    let cli = Cli::parse();
    spreadkit::logging::init_logging(cli.verbose);

    let cwd = std::env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &cwd)?;
    let settings = RunSettings::resolve(&config, cli.pretty, cli.seed);

    let outcome = spreadkit::commands::execute(&cli.command, &settings, &cwd)?;
    println!("{}", spreadkit::commands::render(&outcome, settings.pretty)?);
    Ok(())
}
