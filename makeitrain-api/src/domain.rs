use serde::{Deserialize, Serialize};

/// Action a record is being edited under, as understood by the server.
///
/// - `Add`: the record does not exist remotely yet
/// - `Edit`: the record exists and is being modified
/// - `Delete`: the record is scheduled for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerAction {
    Add,
    Edit,
    Delete,
}

impl ServerAction {
    /// Only edits of existing records produce field-level change log entries.
    pub fn is_auditable(&self) -> bool {
        matches!(self, ServerAction::Edit)
    }
}

impl std::fmt::Display for ServerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerAction::Add => write!(f, "add"),
            ServerAction::Edit => write!(f, "edit"),
            ServerAction::Delete => write!(f, "delete"),
        }
    }
}

impl std::str::FromStr for ServerAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(ServerAction::Add),
            "edit" => Ok(ServerAction::Edit),
            "delete" => Ok(ServerAction::Delete),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_only_edit_is_auditable() {
        assert!(!ServerAction::Add.is_auditable());
        assert!(ServerAction::Edit.is_auditable());
        assert!(!ServerAction::Delete.is_auditable());
    }

    #[test]
    fn test_server_action_wire_format() {
        let json = serde_json::to_string(&ServerAction::Edit).unwrap();
        assert_eq!(json, "\"edit\"");
        assert_eq!(ServerAction::from_str("delete"), Ok(ServerAction::Delete));
        assert_eq!(ServerAction::from_str("Delete"), Err(()));
    }
}
