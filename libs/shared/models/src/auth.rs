use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Non-sensitive identity stored in the server-side session at login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Body of `GET /api/user`: whether the caller has an active session and,
/// if so, the identity fields safe to show the front end.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicUser>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PublicUser {
    pub username: String,
    pub email: String,
}

impl SessionStatus {
    pub fn anonymous() -> Self {
        Self {
            logged_in: false,
            user: None,
        }
    }

    pub fn for_user(user: &SessionUser) -> Self {
        Self {
            logged_in: true,
            user: Some(PublicUser {
                username: user.username.clone(),
                email: user.email.clone(),
            }),
        }
    }
}
