use log::debug;

use crate::command_records::{CommandId, InvocationResult};
use crate::error::{Error, Result};
use crate::service::CommandService;

/// Fetches the captured output of `command_id` on `instance_id`.
///
/// # Errors
///
/// Returns [`Error::EmptyInstanceId`] without calling the service if the
/// instance ID is empty, otherwise propagates the service failure.
pub fn fetch_invocation<S: CommandService>(
    service: &S,
    command_id: &CommandId,
    instance_id: &str,
) -> Result<InvocationResult> {
    if instance_id.is_empty() {
        return Err(Error::EmptyInstanceId);
    }

    let invocation = service.get_command_invocation(command_id, instance_id)?;
    debug!(
        "Invocation of `{}` on `{}` has status {}",
        command_id,
        instance_id,
        invocation.status.as_deref().unwrap_or("unknown")
    );

    Ok(invocation)
}
