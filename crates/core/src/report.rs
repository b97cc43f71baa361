//! Pipeline from a command ID to a rendered report.

use std::io::Write;

use log::{error, info};

use crate::command_records::CommandId;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::fetcher::fetch_invocation;
use crate::render::Renderer;
use crate::resolver::resolve;
use crate::service::CommandService;

/// What to do when one instance's invocation cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failed instance.
    #[default]
    FailFast,
    /// Log the failure, render the remaining instances and fail at the end.
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub commands: usize,
    pub instances: usize,
}

/// Resolves the configured command and writes its report to `out`.
///
/// Instances are fetched one at a time in target order, and each section is
/// written before the next fetch starts.
///
/// # Errors
///
/// Returns [`Error::EmptyCommandId`] before any service call if the command ID
/// is empty. Under [`ErrorPolicy::FailFast`] the first lookup failure is
/// returned; under [`ErrorPolicy::Continue`] instance failures are collected
/// into [`Error::PartialFailure`].
pub fn run<S: CommandService, W: Write>(
    settings: &Settings,
    service: &S,
    out: W,
) -> Result<RunSummary> {
    let command_id = CommandId::parse(&settings.command_id)?;
    let mut renderer = Renderer::new(out, settings.render);
    let mut summary = RunSummary::default();
    let mut failed = Vec::new();

    renderer.preamble(&settings.region, command_id.as_ref())?;

    for record in resolve(service, &command_id)? {
        renderer.command(&record)?;
        summary.commands += 1;

        for instance_id in record.instance_ids() {
            renderer.instance(instance_id)?;

            match fetch_invocation(service, &command_id, instance_id) {
                Ok(invocation) => {
                    renderer.output(&invocation)?;
                    summary.instances += 1;
                }
                Err(e) if settings.policy == ErrorPolicy::Continue && e.is_instance_failure() => {
                    error!("{e}");
                    failed.push(instance_id.to_string());
                }
                Err(e) => return Err(e),
            }
        }
    }

    info!(
        "Rendered {} instance(s) across {} command record(s)",
        summary.instances, summary.commands
    );

    if failed.is_empty() {
        Ok(summary)
    } else {
        Err(Error::PartialFailure { failed })
    }
}
