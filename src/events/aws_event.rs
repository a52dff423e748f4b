use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Envelope shared by every event kind, with a typed `detail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AwsEvent<D> {
    pub version: String,
    pub id: String,
    pub detail_type: String,
    pub source: String,
    pub account: String,
    pub time: DateTime<Utc>,
    pub region: String,
    #[serde(default)]
    pub resources: Vec<String>,
    pub detail: D,
}

impl<D> AwsEvent<D> {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        detail_type: impl Into<String>,
        detail: D,
    ) -> Self {
        Self {
            version: "0".to_string(),
            id: id.into(),
            detail_type: detail_type.into(),
            source: source.into(),
            account: String::new(),
            time: Utc::now(),
            region: String::new(),
            resources: Vec::new(),
            detail,
        }
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    pub fn with_resources(mut self, resources: Vec<String>) -> Self {
        self.resources = resources;
        self
    }
}

impl<D: Serialize> AwsEvent<D> {
    /// Flat JSON rendering of the envelope for structured logs.
    pub fn log_record(&self) -> Value {
        serde_json::to_value(self)
            .unwrap_or_else(|e| json!({ "id": self.id, "serialization_error": e.to_string() }))
    }
}
