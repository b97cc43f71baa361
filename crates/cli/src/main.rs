use std::io::stdout;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use crossterm::style::Stylize;
use log::debug;
use ssm_output_cli::cli_args::Args;
use ssm_output_core::config;
use ssm_output_core::error::{Error, Result};
use ssm_output_core::report;
use ssm_output_core::service::SsmService;

fn execute() -> Result<()> {
    let args = Args::parse();

    // Nothing else is read or contacted without a command ID
    args.command_id()?;

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);
    let file_config = config::read_file_config(&config_path)?;

    let settings = args.settings(&file_config)?;
    debug!("Settings: {:?}", settings);

    let service = SsmService::connect(&settings.region, settings.profile.as_deref())?;
    report::run(&settings, &service, stdout().lock())?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::EmptyCommandId) => {
            eprintln!("{}", Args::command().render_help());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}
