//! Wire-format DTOs for the source API.
//!
//! The server speaks Portuguese field names; the types here accept those and
//! the English spellings some payloads carry, and coerce loosely-typed values
//! into the dashboard model.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use mailboard_core::{Employee, Priority, Record, Region, Status};
use serde::Deserialize;
use serde_json::Value;

/// Response envelope wrapping every endpoint payload.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub(crate) struct Envelope<T> {
    /// Whether the server processed the request.
    #[serde(default)]
    pub success: bool,
    /// Payload, present on success.
    #[serde(default)]
    pub data: Option<T>,
    /// Server-side error message, present on failure.
    #[serde(default)]
    pub error: Option<String>,
}

/// A record as served by the source API.
#[derive(Debug, Clone, Deserialize)]
pub struct WireRecord {
    /// Server-side identifier; string or number.
    #[serde(default)]
    pub id: Value,
    /// Subject line.
    #[serde(default, alias = "assunto")]
    pub subject: Option<String>,
    /// Sender address.
    #[serde(default, alias = "remetente")]
    pub sender: Option<String>,
    /// Recipient address.
    #[serde(default, alias = "destinatario", alias = "receiver")]
    pub recipient: Option<String>,
    /// Body text.
    #[serde(default, alias = "corpo")]
    pub content: Option<String>,
    /// Timestamp; the server has emitted RFC 3339, RFC 2822, and plain
    /// date strings.
    #[serde(default, alias = "data")]
    pub date: Value,
    /// Two-letter region code.
    #[serde(default, alias = "estado")]
    pub region: Option<String>,
    /// City name.
    #[serde(default, alias = "municipio")]
    pub city: Option<String>,
    /// Category label.
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
    /// Whether the record has been classified.
    #[serde(default, alias = "classificado")]
    pub classified: Option<bool>,
    /// Priority label.
    #[serde(default, alias = "prioridade")]
    pub priority: Option<String>,
    /// Tags; an array of strings or a single scalar.
    #[serde(default)]
    pub tags: Value,
}

impl WireRecord {
    /// Maps the wire representation into the dashboard model.
    #[must_use]
    pub fn into_record(self) -> Record {
        let status = if self.classified == Some(true) {
            Status::Classified
        } else {
            Status::Pending
        };
        let priority = self
            .priority
            .as_deref()
            .and_then(Priority::parse)
            .unwrap_or_default();

        Record {
            id: value_to_string(&self.id).unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            sender: self.sender.unwrap_or_default(),
            recipient: self.recipient.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            status,
            priority,
            category: non_empty(self.category),
            region: self.region.as_deref().and_then(Region::parse),
            city: non_empty(self.city),
            date: parse_wire_date(&self.date),
            tags: parse_tags(&self.tags),
        }
    }
}

/// An employee as served by the source API.
#[derive(Debug, Clone, Deserialize)]
pub struct WireEmployee {
    /// Server-side identifier; omitted in list payloads.
    #[serde(default)]
    pub id: Value,
    /// Display name.
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
    /// Sent-mail counter; number or numeric string.
    #[serde(default)]
    pub total_emails: Value,
    /// Whether the employee is active.
    #[serde(default, alias = "ativo")]
    pub active: Option<bool>,
}

impl WireEmployee {
    /// Maps the wire representation into the roster model.
    #[must_use]
    pub fn into_employee(self) -> Employee {
        let email = self.email.unwrap_or_default();
        Employee {
            id: value_to_string(&self.id).unwrap_or_else(|| email.clone()),
            name: self.name.unwrap_or_default(),
            email,
            total_emails: parse_count(&self.total_emails),
            active: self.active.unwrap_or(true),
        }
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn parse_tags(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(value_to_string).collect(),
        Value::Null => Vec::new(),
        scalar => value_to_string(scalar).map_or_else(Vec::new, |tag| vec![tag]),
    }
}

fn parse_count(value: &Value) -> u32 {
    match value {
        Value::Number(number) => number
            .as_u64()
            .and_then(|count| u32::try_from(count).ok())
            .unwrap_or(0),
        Value::String(text) => text.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Absent or unparseable timestamps map to the Unix epoch.
fn parse_wire_date(value: &Value) -> DateTime<Utc> {
    value
        .as_str()
        .and_then(parse_date_text)
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
}
