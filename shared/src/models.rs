use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ProfileError, ProfileResult};

/// The only trigger source that results in a profile write
pub const CONFIRM_SIGN_UP_TRIGGER: &str = "PostConfirmation_ConfirmSignUp";

pub const USER_KEY_PREFIX: &str = "#USER:";
pub const PROFILE_SORT_KEY: &str = "PROFILE";
pub const UNKNOWN_DISPLAY_NAME: &str = "unknown";

/// Attribute names checked in order when resolving the display name
pub const DISPLAY_NAME_ATTRIBUTES: [&str; 2] = ["nickname", "name"];

/// User attributes as Cognito sends them, values left as raw JSON
pub type UserAttributes = Map<String, Value>;

// Everything except `triggerSource` stays raw JSON in `extra` so the event
// goes back to Cognito exactly as it arrived, whatever its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostConfirmationEvent {
    pub trigger_source: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostConfirmationEvent {
    pub fn is_confirm_sign_up(&self) -> bool {
        self.trigger_source == CONFIRM_SIGN_UP_TRIGGER
    }

    /// `request.userAttributes` of a confirm-signup event.
    ///
    /// Any other trigger source is rejected with `UnsupportedTrigger`.
    pub fn sign_up_attributes(&self) -> ProfileResult<&UserAttributes> {
        if !self.is_confirm_sign_up() {
            return Err(ProfileError::UnsupportedTrigger(self.trigger_source.clone()));
        }

        self.extra
            .get("request")
            .and_then(|request| request.get("userAttributes"))
            .and_then(Value::as_object)
            .ok_or_else(|| ProfileError::MissingAttribute("request.userAttributes".to_string()))
    }
}

/// Profile row written once per confirmed signup
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfileRecord {
    pub user_id: String,
    pub email: Option<String>,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

impl UserProfileRecord {
    /// Map Cognito user attributes onto a profile record.
    ///
    /// `sub` is required. `email` is optional and the display name falls back
    /// from `nickname` to `name` to `"unknown"`. Non-string values count as
    /// absent.
    pub fn from_attributes(
        attributes: &UserAttributes,
        created_at: DateTime<Utc>,
    ) -> ProfileResult<Self> {
        let user_id = string_attribute(attributes, "sub")
            .ok_or_else(|| ProfileError::MissingAttribute("sub".to_string()))?;

        Ok(Self {
            user_id,
            email: string_attribute(attributes, "email"),
            nickname: display_name(attributes),
            created_at,
        })
    }

    pub fn partition_key(&self) -> String {
        format!("{}{}", USER_KEY_PREFIX, self.user_id)
    }

    pub fn sort_key(&self) -> &'static str {
        PROFILE_SORT_KEY
    }
}

fn string_attribute(attributes: &UserAttributes, key: &str) -> Option<String> {
    attributes.get(key).and_then(Value::as_str).map(str::to_string)
}

fn display_name(attributes: &UserAttributes) -> String {
    DISPLAY_NAME_ATTRIBUTES
        .iter()
        .find_map(|key| string_attribute(attributes, key))
        .unwrap_or_else(|| UNKNOWN_DISPLAY_NAME.to_string())
}
