//! Comments, reminders, and notifications attached to applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EntityType, ItemId};

/// A free-form comment on an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier.
    pub id: Uuid,
    /// The application the comment belongs to.
    pub application_id: ItemId,
    /// Comment text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last edit timestamp.
    pub updated_at: DateTime<Utc>,
    /// Author's user identifier.
    pub created_by: i64,
    /// Author's display name, when the backend expands it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,
}

/// Request body for creating a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreateRequest {
    /// The application to comment on.
    pub application_id: ItemId,
    /// Comment text.
    pub content: String,
}

/// A scheduled reminder tied to an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Reminder identifier.
    pub id: Uuid,
    /// The application the reminder is about.
    pub application_id: ItemId,
    /// When the reminder fires.
    pub reminder_date: DateTime<Utc>,
    /// Reminder text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderCreateRequest {
    /// The application the reminder is about.
    pub application_id: ItemId,
    /// When the reminder fires.
    pub reminder_date: DateTime<Utc>,
    /// Reminder text.
    pub content: String,
}

/// A notification delivered to a user, typically from a fired reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification identifier.
    pub id: i64,
    /// Receiving user.
    pub user_id: i64,
    /// Notification kind as reported by the backend.
    #[serde(rename = "type")]
    pub kind: String,
    /// Notification text.
    pub content: String,
    /// The entity type the notification refers to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_entity_type: Option<EntityType>,
    /// The referenced entity's identifier, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_entity_id: Option<i64>,
    /// Whether delivery has happened.
    pub is_delivered: bool,
    /// Whether the user has read it.
    pub is_read: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
    /// Read timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_kind_wire_name() {
        let json = r#"{
            "id": 1,
            "user_id": 2,
            "type": "reminder",
            "content": "Call the candidate",
            "is_delivered": true,
            "is_read": false,
            "created_at": "2025-03-05T09:00:00Z"
        }"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.kind, "reminder");
        assert!(!notification.is_read);
    }
}
