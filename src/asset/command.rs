use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandResult {
    Successful,
    Failed,
}

/// Outcome of an administrative command, with a human readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub result: CommandResult,
    pub message: String,
}

impl CommandResponse {
    pub fn successful(message: impl Into<String>) -> Self {
        Self { result: CommandResult::Successful, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { result: CommandResult::Failed, message: message.into() }
    }

    pub fn is_successful(&self) -> bool {
        self.result == CommandResult::Successful
    }
}
