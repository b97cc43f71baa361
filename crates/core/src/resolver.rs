use log::debug;

use crate::command_records::{CommandId, CommandRecord};
use crate::error::Result;
use crate::service::CommandService;

/// Looks up the records of a previously sent command.
///
/// No matching record is not an error; the result is simply empty.
///
/// # Errors
///
/// Propagates any failure of the underlying service call.
pub fn resolve<S: CommandService>(
    service: &S,
    command_id: &CommandId,
) -> Result<Vec<CommandRecord>> {
    let records = service.list_commands(command_id)?;
    debug!(
        "Found {} record(s) for command `{}`",
        records.len(),
        command_id
    );
    for record in &records {
        debug!("Command record: {}", record);
    }

    Ok(records)
}
