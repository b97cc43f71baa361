//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and turns the
//! parsed arguments into the [`Settings`] the report pipeline runs with.

use clap::Parser;
use ssm_output_core::command_records::CommandId;
use ssm_output_core::config::{resolve_region, FileConfig, Settings, DEFAULT_REGION};
use ssm_output_core::error::Result;
use ssm_output_core::render::RenderOptions;
use ssm_output_core::report::ErrorPolicy;

/// Command-line arguments for the `ssmo` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use ssm_output_cli::cli_args::Args;
///
/// let args = Args::parse_from(["ssmo", "--commandId", "0b8f6d1e", "--html"]);
/// assert!(args.html);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[command(about = "Print the output of a command previously run through AWS Systems Manager")]
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// The AWS region to operate in.
    ///
    /// Falls back to the `region` in the config file, then to `ap-southeast-2`.
    #[arg(long)]
    pub region: Option<String>,

    /// The command ID of a previously run command.
    #[arg(long = "commandId", visible_alias = "command-id")]
    pub command_id: Option<String>,

    /// Output as HTML.
    ///
    /// Writes an index of instances followed by a section per instance.
    #[arg(long, action)]
    pub html: bool,

    /// Be quiet.
    ///
    /// Skips the command comment and progress lines. Command output is always shown.
    #[arg(long, short = 'q', action)]
    pub quiet: bool,

    /// Named AWS credentials profile to use.
    #[arg(long)]
    pub profile: Option<String>,

    /// Path to the config file YAML.
    ///
    /// If not provided, defaults to `~/.ssm-output/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Keep going when an instance has no output, and fail at the end.
    #[arg(long, short = 'k', action)]
    pub keep_going: bool,
}

impl Args {
    /// Validates the command ID given on the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if no command ID, or an empty one, was given.
    pub fn command_id(&self) -> Result<CommandId> {
        CommandId::parse(self.command_id.as_deref().unwrap_or_default())
    }

    /// Builds the run settings, with arguments taking precedence over the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the command ID is missing or empty.
    pub fn settings(&self, file_config: &FileConfig) -> Result<Settings> {
        let command_id = self.command_id()?;

        Ok(Settings {
            region: resolve_region(self.region.as_deref(), file_config),
            profile: self.profile.clone().or_else(|| file_config.profile.clone()),
            command_id: command_id.to_string(),
            render: RenderOptions::new(self.html, self.quiet),
            policy: if self.keep_going {
                ErrorPolicy::Continue
            } else {
                ErrorPolicy::FailFast
            },
        })
    }
}
