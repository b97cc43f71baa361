use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("A command ID is required, but none was given.")]
    EmptyCommandId,

    #[error("Invalid instance ID: ID may not be empty")]
    EmptyInstanceId,

    #[error("Unable to create the Systems Manager client: {}", .0)]
    ClientConfig(String),

    #[error("Error listing command `{}`: {}", .command_id, .message)]
    ListCommands { command_id: String, message: String },

    #[error(
        "Error getting invocation of command `{}` on instance `{}`: {}",
        .command_id,
        .instance_id,
        .message
    )]
    GetCommandInvocation {
        command_id: String,
        instance_id: String,
        message: String,
    },

    #[error("No invocation of command `{}` exists for instance `{}`", .command_id, .instance_id)]
    InvocationNotFound {
        command_id: String,
        instance_id: String,
    },

    #[error("Could not get output for {} instance(s): {}", .failed.len(), .failed.join(", "))]
    PartialFailure { failed: Vec<String> },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error writing report: {}", .0)]
    Output(#[from] std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// Whether the error only concerns one instance's invocation. Service or
    /// transport failures are not, since every later lookup would fail too.
    pub fn is_instance_failure(&self) -> bool {
        matches!(self, Self::EmptyInstanceId | Self::InvocationNotFound { .. })
    }
}
