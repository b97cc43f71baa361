//! Access to the remote command execution service.
//!
//! The pipeline only talks to Systems Manager through [`CommandService`], so
//! the resolver, fetcher and report can be driven by an in-memory service in
//! tests.

pub mod ssm;

pub use ssm::SsmService;

use crate::command_records::{CommandId, CommandRecord, InvocationResult};
use crate::error::Result;

/// Read-only view of commands that were already sent to a fleet.
pub trait CommandService {
    /// Lists every command record matching `command_id`, in service order.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or rejects the request.
    fn list_commands(&self, command_id: &CommandId) -> Result<Vec<CommandRecord>>;

    /// Gets the captured invocation of `command_id` on one instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the service call fails, including when the
    /// instance has no invocation for the command.
    fn get_command_invocation(
        &self,
        command_id: &CommandId,
        instance_id: &str,
    ) -> Result<InvocationResult>;
}
