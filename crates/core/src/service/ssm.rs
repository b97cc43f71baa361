use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::error::{DisplayErrorContext, SdkError};
use aws_sdk_ssm::operation::get_command_invocation::GetCommandInvocationError;
use aws_sdk_ssm::types::{Command, Target};
use aws_sdk_ssm::Client;
use log::debug;
use tokio::runtime::{Builder, Runtime};

use crate::command_records::{CommandId, CommandRecord, InvocationResult, TargetGroup};
use crate::error::{Error, Result};
use crate::service::CommandService;

/// Target key used when a command was sent to explicit instance IDs.
const INSTANCE_IDS_TARGET_KEY: &str = "InstanceIds";

/// [`CommandService`] backed by AWS Systems Manager.
///
/// Every SDK call is driven to completion on a single-threaded runtime before
/// returning, so callers see plain blocking calls.
pub struct SsmService {
    runtime: Runtime,
    client: Client,
}

impl SsmService {
    /// Builds a client for `region`, optionally using a named credentials profile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientConfig`] if the async runtime cannot be created.
    pub fn connect(region: &str, profile: Option<&str>) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::ClientConfig(e.to_string()))?;

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
        if let Some(profile) = profile {
            debug!("Using credentials profile `{}`", profile);
            loader = loader.profile_name(profile);
        }

        let sdk_config = runtime.block_on(loader.load());
        let client = Client::new(&sdk_config);

        Ok(Self { runtime, client })
    }
}

impl CommandService for SsmService {
    fn list_commands(&self, command_id: &CommandId) -> Result<Vec<CommandRecord>> {
        let request = self
            .client
            .list_commands()
            .command_id(command_id.as_ref())
            .send();

        let response = self
            .runtime
            .block_on(request)
            .map_err(|e| Error::ListCommands {
                command_id: command_id.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(response.commands().iter().map(command_record).collect())
    }

    fn get_command_invocation(
        &self,
        command_id: &CommandId,
        instance_id: &str,
    ) -> Result<InvocationResult> {
        let request = self
            .client
            .get_command_invocation()
            .command_id(command_id.as_ref())
            .instance_id(instance_id)
            .send();

        let response = self
            .runtime
            .block_on(request)
            .map_err(|e| invocation_error(command_id, instance_id, &e))?;

        Ok(InvocationResult {
            instance_id: response
                .instance_id()
                .unwrap_or(instance_id)
                .to_string(),
            standard_output: response.standard_output_content().map(ToString::to_string),
            status: response.status().map(|status| status.as_str().to_string()),
        })
    }
}

fn invocation_error(
    command_id: &CommandId,
    instance_id: &str,
    e: &SdkError<GetCommandInvocationError>,
) -> Error {
    let not_found = e
        .as_service_error()
        .is_some_and(GetCommandInvocationError::is_invocation_does_not_exist);

    if not_found {
        Error::InvocationNotFound {
            command_id: command_id.to_string(),
            instance_id: instance_id.to_string(),
        }
    } else {
        Error::GetCommandInvocation {
            command_id: command_id.to_string(),
            instance_id: instance_id.to_string(),
            message: DisplayErrorContext(e).to_string(),
        }
    }
}

fn target_group(target: &Target) -> TargetGroup {
    TargetGroup {
        key: target.key().map(ToString::to_string),
        values: target.values().to_vec(),
    }
}

fn command_record(command: &Command) -> CommandRecord {
    let mut targets: Vec<TargetGroup> = command.targets().iter().map(target_group).collect();

    // Commands sent with `--instance-ids` carry no targets
    if targets.is_empty() && !command.instance_ids().is_empty() {
        targets.push(TargetGroup {
            key: Some(INSTANCE_IDS_TARGET_KEY.to_string()),
            values: command.instance_ids().to_vec(),
        });
    }

    CommandRecord {
        id: command.command_id().unwrap_or_default().to_string(),
        comment: command.comment().map(ToString::to_string),
        targets,
    }
}
