use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment status of a customer record.
///
/// Serialized as the capitalized string form ("Open", "Paid", ...) to match
/// the persisted JSON layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Open,
    Paid,
    Due,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::Paid => "Paid",
            Status::Due => "Due",
            Status::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Status::Open),
            "Paid" => Ok(Status::Paid),
            "Due" => Ok(Status::Due),
            "Inactive" => Ok(Status::Inactive),
            other => Err(format!(
                "unknown status '{}' (expected Open, Paid, Due, or Inactive)",
                other
            )),
        }
    }
}

/// A customer payment entry.
///
/// `id` is opaque, client-assigned, and immutable after creation. The
/// collection keeps insertion order with the newest record first; `id` is the
/// only identity, there are no cross-record relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub deposit: f64,
}

impl Record {
    /// A blank draft with the given id and all defaults (status Open,
    /// amounts 0). The create-form starting point.
    pub fn draft(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            status: Status::Open,
            rate: 0.0,
            balance: 0.0,
            deposit: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [Status::Open, Status::Paid, Status::Due, Status::Inactive] {
            assert_eq!(status.as_str().parse::<Status>(), Ok(status));
        }
        assert!("open".parse::<Status>().is_err());
    }

    #[test]
    fn record_serializes_with_persisted_field_names() {
        let record = Record {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            description: "Web Dev Project".to_string(),
            status: Status::Paid,
            rate: 85.0,
            balance: 0.0,
            deposit: 500.0,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["status"], "Paid");
        assert_eq!(json["deposit"], 500.0);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let record: Record = serde_json::from_str(r#"{"id":"9","name":"X"}"#).unwrap();
        assert_eq!(record.status, Status::Open);
        assert_eq!(record.description, "");
        assert_eq!(record.rate, 0.0);
    }
}
