use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

/// Terminal outcome of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Failed,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Success => "success",
            ActionStatus::Failed => "failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionStatus::Success)
    }
}

/// Accumulates what one action run hands back to the platform: data items,
/// a summary record and a terminal status.
///
/// The status is set once; later `set_status` calls are ignored so that an
/// early failure cannot be overwritten by a later step.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActionResult {
    #[serde(serialize_with = "serialize_status")]
    status: Option<ActionStatus>,
    message: String,
    data: Vec<Value>,
    summary: Map<String, Value>,
}

impl ActionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_data(&mut self, item: Value) {
        self.data.push(item);
    }

    /// Merge `entries` into the summary, replacing existing keys.
    pub fn update_summary(&mut self, entries: Map<String, Value>) {
        self.summary.extend(entries);
    }

    /// Record the terminal status and return it.
    pub fn set_status(&mut self, status: ActionStatus, message: impl Into<String>) -> ActionStatus {
        if let Some(existing) = self.status {
            let message = message.into();
            warn!(
                existing = existing.as_str(),
                ignored = status.as_str(),
                %message,
                "action status already set"
            );
            return existing;
        }
        self.status = Some(status);
        self.message = message.into();
        status
    }

    /// Current status. An action that never set one is reported as failed.
    pub fn get_status(&self) -> ActionStatus {
        self.status.unwrap_or(ActionStatus::Failed)
    }

    pub fn is_status_set(&self) -> bool {
        self.status.is_some()
    }

    pub fn is_success(&self) -> bool {
        self.get_status().is_success()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> &[Value] {
        &self.data
    }

    pub fn summary(&self) -> &Map<String, Value> {
        &self.summary
    }
}

fn serialize_status<S: Serializer>(
    status: &Option<ActionStatus>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    status.unwrap_or(ActionStatus::Failed).serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_status_reports_failed() {
        let result = ActionResult::new();
        assert!(!result.is_status_set());
        assert_eq!(result.get_status(), ActionStatus::Failed);
    }

    #[test]
    fn status_is_set_once() {
        let mut result = ActionResult::new();
        assert_eq!(
            result.set_status(ActionStatus::Failed, "first"),
            ActionStatus::Failed
        );
        assert_eq!(
            result.set_status(ActionStatus::Success, "second"),
            ActionStatus::Failed
        );
        assert_eq!(result.message(), "first");
    }

    #[test]
    fn summary_merges() {
        let mut result = ActionResult::new();
        let mut first = Map::new();
        first.insert("a".into(), json!(1));
        first.insert("b".into(), json!(2));
        result.update_summary(first);

        let mut second = Map::new();
        second.insert("b".into(), json!(3));
        result.update_summary(second);

        assert_eq!(Value::Object(result.summary().clone()), json!({"a": 1, "b": 3}));
    }

    #[test]
    fn serializes_for_the_platform() {
        let mut result = ActionResult::new();
        result.add_data(json!({"response": {}}));
        result.set_status(ActionStatus::Success, "done");

        let rendered = serde_json::to_value(&result).unwrap();
        assert_eq!(
            rendered,
            json!({
                "status": "success",
                "message": "done",
                "data": [{"response": {}}],
                "summary": {}
            })
        );
    }

    #[test]
    fn unset_status_serializes_as_failed() {
        let rendered = serde_json::to_value(ActionResult::new()).unwrap();
        assert_eq!(rendered["status"], json!("failed"));
    }
}
