//! ExternalOutput: a terminal observable (ledger transaction, record, trade, document, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    FoundationTx,
    AwsRecord,
    TradeExecution,
    Document,
    ApiResponse,
    Notification,
    File,
    Other,
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoundationTx => "foundation_tx",
            Self::AwsRecord => "aws_record",
            Self::TradeExecution => "trade_execution",
            Self::Document => "document",
            Self::ApiResponse => "api_response",
            Self::Notification => "notification",
            Self::File => "file",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStatus {
    Pending,
    Confirmed,
    Failed,
    Reverted,
}

impl OutputStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Failed => "failed",
            Self::Reverted => "reverted",
        }
    }
}

/// Default retention period in years.
pub const DEFAULT_RETENTION_YEARS: u32 = 7;

fn default_retention_years() -> u32 {
    DEFAULT_RETENTION_YEARS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalOutput {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub output_type: OutputType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<i64>,
    pub content_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_size: Option<i64>,
    pub status: OutputStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Regulatory metadata (SEC, HIPAA, ...).
    #[serde(default)]
    pub compliance: serde_json::Value,
    #[serde(default = "default_retention_years")]
    pub retention_years: u32,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl ExternalOutput {
    pub fn new(output_type: OutputType, content_hash: &str) -> Self {
        Self {
            id: super::new_node_id(),
            timestamp: Utc::now(),
            output_type,
            destination: None,
            destination_id: None,
            transaction_id: None,
            block_hash: None,
            block_number: None,
            content_hash: content_hash.to_string(),
            content_size: None,
            status: OutputStatus::Pending,
            domain: None,
            compliance: serde_json::Value::Null,
            retention_years: DEFAULT_RETENTION_YEARS,
            metadata: serde_json::Value::Null,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn to_destination(mut self, destination: &str) -> Self {
        self.destination = Some(destination.to_string());
        self
    }
}
