use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a command previously sent through Systems Manager.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandId(String);

impl CommandId {
    /// Parses a command ID supplied by the operator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCommandId`] if the ID is empty or only whitespace.
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(Error::EmptyCommandId);
        }

        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for CommandId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CommandId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetGroup {
    pub key: Option<String>,
    pub values: Vec<String>,
}

impl TargetGroup {
    pub fn new(key: Option<&str>, values: &[&str]) -> Self {
        Self {
            key: key.map(ToString::to_string),
            values: values.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    pub id: String,
    pub comment: Option<String>,
    pub targets: Vec<TargetGroup>,
}

impl CommandRecord {
    /// Instance IDs across every target group, in target order.
    pub fn instance_ids(&self) -> Vec<&str> {
        flatten_instance_ids(&self.targets)
    }
}

impl Display for CommandRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.comment {
            Some(comment) => write!(formatter, "{} ({})", self.id, comment),
            None => formatter.write_str(&self.id),
        }
    }
}

/// Flattens target groups into one instance ID sequence.
///
/// Group boundaries are dropped; order is kept and duplicates are not removed.
pub fn flatten_instance_ids(targets: &[TargetGroup]) -> Vec<&str> {
    targets
        .iter()
        .flat_map(|target| target.values.iter().map(String::as_str))
        .collect()
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    pub instance_id: String,
    pub standard_output: Option<String>,
    pub status: Option<String>,
}

impl InvocationResult {
    pub fn standard_output_or_empty(&self) -> &str {
        self.standard_output.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_id_parse() {
        let command_id = CommandId::parse("0b8f6d1e-1234").unwrap();
        assert_eq!(command_id.as_ref(), "0b8f6d1e-1234");
        assert_eq!(command_id.to_string(), "0b8f6d1e-1234");
    }

    #[test]
    fn test_command_id_parse_keeps_value_as_given() {
        let command_id = CommandId::parse(" 0b8f6d1e-1234").unwrap();
        assert_eq!(command_id.as_ref(), " 0b8f6d1e-1234");
    }

    #[test]
    fn test_command_id_parse_empty() {
        assert!(matches!(CommandId::parse(""), Err(Error::EmptyCommandId)));
        assert!(matches!(CommandId::parse("   "), Err(Error::EmptyCommandId)));
    }

    #[test]
    fn test_flatten_keeps_target_order() {
        let targets = vec![
            TargetGroup::new(Some("tag:Role"), &["i1", "i2"]),
            TargetGroup::new(Some("tag:Env"), &["i3"]),
        ];
        assert_eq!(flatten_instance_ids(&targets), vec!["i1", "i2", "i3"]);
    }

    #[test]
    fn test_flatten_keeps_duplicates() {
        let targets = vec![
            TargetGroup::new(None, &["i1", "i2"]),
            TargetGroup::new(None, &["i2"]),
        ];
        assert_eq!(flatten_instance_ids(&targets), vec!["i1", "i2", "i2"]);
    }

    #[test]
    fn test_flatten_empty() {
        let record = CommandRecord {
            id: "cmd".to_string(),
            comment: None,
            targets: vec![TargetGroup::default()],
        };
        assert!(record.instance_ids().is_empty());
    }

    #[test]
    fn test_command_record_display() {
        let mut record = CommandRecord {
            id: "cmd".to_string(),
            comment: Some("patch hosts".to_string()),
            targets: vec![],
        };
        assert_eq!(record.to_string(), "cmd (patch hosts)");

        record.comment = None;
        assert_eq!(record.to_string(), "cmd");
    }

    #[test]
    fn test_standard_output_or_empty() {
        let invocation = InvocationResult {
            instance_id: "i1".to_string(),
            standard_output: None,
            status: None,
        };
        assert_eq!(invocation.standard_output_or_empty(), "");
    }
}
