use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Processing state of a contact message. Wire values are the French labels
/// the dataset uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MessageStatus {
    #[serde(rename = "nouveau")]
    New,
    #[serde(rename = "lu")]
    Read,
    #[serde(rename = "traité")]
    Processed,
    #[serde(rename = "archivé")]
    Archived,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "nouveau",
            Self::Read => "lu",
            Self::Processed => "traité",
            Self::Archived => "archivé",
        }
    }
}

/// Contact-form message record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outbound message shape: the record plus the derived human-readable
/// elapsed-time label.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    #[serde(flatten)]
    pub message: Message,
    pub time_ago: String,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        let time_ago = time_ago(message.created_at, Utc::now());
        Self { message, time_ago }
    }
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// Counters for the contact-message admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageStats {
    pub total: u64,
    pub unread: u64,
    pub read: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<DateTime<Utc>>,
}

/// Human-readable elapsed time since `created`, in the dataset's French
/// phrasing ("À l'instant", "Il y a 3 heures", ...).
pub fn time_ago(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created).num_minutes();
    if minutes < 1 {
        return "À l'instant".to_string();
    }
    if minutes < 60 {
        return format!("Il y a {} minute{}", minutes, if minutes > 1 { "s" } else { "" });
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("Il y a {} heure{}", hours, if hours > 1 { "s" } else { "" });
    }

    let days = hours / 24;
    format!("Il y a {} jour{}", days, if days > 1 { "s" } else { "" })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn time_ago_boundaries() {
        let now = Utc::now();
        assert_eq!(time_ago(now, now), "À l'instant");
        assert_eq!(time_ago(now - Duration::minutes(1), now), "Il y a 1 minute");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "Il y a 59 minutes");
        assert_eq!(time_ago(now - Duration::hours(1), now), "Il y a 1 heure");
        assert_eq!(time_ago(now - Duration::hours(23), now), "Il y a 23 heures");
        assert_eq!(time_ago(now - Duration::days(1), now), "Il y a 1 jour");
        assert_eq!(time_ago(now - Duration::days(12), now), "Il y a 12 jours");
    }

    #[test]
    fn status_wire_values_are_french() {
        assert_eq!(
            serde_json::to_value(MessageStatus::Processed).unwrap(),
            serde_json::json!("traité")
        );
        let parsed: MessageStatus = serde_json::from_str("\"archivé\"").unwrap();
        assert_eq!(parsed, MessageStatus::Archived);
    }
}
