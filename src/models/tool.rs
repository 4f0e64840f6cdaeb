//! Tool calls as delivered by the conversation host.

use serde::Deserialize;
use serde_json::Value;

/// One tool invocation in the conversation.
///
/// `result` stays `None` while the tool is still running.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCall {
    #[serde(alias = "tool_name")]
    pub tool_name: String,
    #[serde(default)]
    pub result: Option<Value>,
}

impl ToolCall {
    pub fn is_pending(&self) -> bool {
        self.result.is_none()
    }

    /// Parse a JSON array of tool calls.
    pub fn parse_list(json: &str) -> Result<Vec<ToolCall>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
