//! Request and response types for the Messenger Graph API.
//!
//! Field names mirror the platform's wire contract exactly and must not be
//! renamed.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Thread control
// ─────────────────────────────────────────────────────────────────────────────

/// Recipient of a thread control directive, addressed by page-scoped ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Page-scoped user ID.
    pub id: String,
}

/// Request body for passing thread control to another app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassThreadControl {
    /// App ID receiving control of the conversation.
    pub target_app_id: i64,
    /// The user whose conversation is handed off.
    pub recipient: Recipient,
    /// Free-form metadata passed to the receiving app.
    pub metadata: String,
}

/// Request body for taking thread control back from a secondary app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeThreadControl {
    /// The user whose conversation is reclaimed.
    pub recipient: Recipient,
    /// Free-form metadata passed to the app losing control.
    pub metadata: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// User profile
// ─────────────────────────────────────────────────────────────────────────────

/// A requestable user profile field.
///
/// <https://developers.facebook.com/docs/messenger-platform/identity/user-profile>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    FirstName,
    LastName,
    ProfilePic,
    Locale,
    Timezone,
    Gender,
}

impl ProfileField {
    /// The wire name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::FirstName => "first_name",
            ProfileField::LastName => "last_name",
            ProfileField::ProfilePic => "profile_pic",
            ProfileField::Locale => "locale",
            ProfileField::Timezone => "timezone",
            ProfileField::Gender => "gender",
        }
    }
}

/// User profile data returned by the platform.
///
/// Which fields are populated depends on the field list requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub profile_pic: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gender: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Private replies
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for a private reply to a comment or visitor post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateReply {
    /// ID of the comment or post being replied to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Text of the reply.
    pub message: String,
}

/// Acknowledgement for a sent private reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateReplyResponse {
    /// ID of the newly created message.
    pub id: String,
    /// App-scoped user ID of the visitor.
    pub user_id: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Personas
// ─────────────────────────────────────────────────────────────────────────────

/// A persona: a named sender identity attached to a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Persona {
    pub name: String,
    pub profile_picture_url: String,
    pub id: String,
}

/// Response to persona creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaResponse {
    /// ID of the created persona.
    pub id: String,
}

/// Response listing a page's personas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPersonasResponse {
    #[serde(default)]
    pub data: Vec<Persona>,
}

/// Outcome flag for persona deletion. The platform encodes refusal in this
/// body, not in the HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePersonaResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_thread_control_round_trip() {
        let payload = PassThreadControl {
            target_app_id: 123,
            recipient: Recipient {
                id: "999".to_string(),
            },
            metadata: "m".to_string(),
        };

        let encoded = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            encoded,
            r#"{"target_app_id":123,"recipient":{"id":"999"},"metadata":"m"}"#
        );

        let decoded: PassThreadControl = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_take_thread_control_shape() {
        let payload = TakeThreadControl {
            recipient: Recipient {
                id: "42".to_string(),
            },
            metadata: String::new(),
        };

        let encoded = serde_json::to_string(&payload).unwrap();
        assert_eq!(encoded, r#"{"recipient":{"id":"42"},"metadata":""}"#);
    }

    #[test]
    fn test_profile_partial_body() {
        let profile: Profile =
            serde_json::from_str(r#"{"name":"Jo Doe","first_name":"Jo","last_name":"Doe"}"#)
                .unwrap();
        assert_eq!(profile.name, "Jo Doe");
        assert!(profile.profile_pic.is_empty());
        assert!(profile.timezone.is_none());
    }

    #[test]
    fn test_private_reply_omits_absent_id() {
        let reply = PrivateReply {
            id: None,
            message: "hi".to_string(),
        };
        assert_eq!(serde_json::to_string(&reply).unwrap(), r#"{"message":"hi"}"#);
    }

    #[test]
    fn test_persona_list_defaults_to_empty() {
        let list: ListPersonasResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(list.data.is_empty());
    }
}
