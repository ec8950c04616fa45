//! Authentication request/response DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use ottb_core::domain::entities::user::FilteredUser;
use ottb_core::services::auth::SignUpData;
use ottb_shared::{DataResponse, Status};

/// Request body for POST /api/auth/signup
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 3, max = 30, message = "Username must be 3 to 30 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[serde(rename = "passwordConfirm")]
    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub password_confirm: String,

    #[serde(default = "default_photo")]
    pub photo: String,
}

fn default_photo() -> String {
    "default.png".to_string()
}

impl From<SignUpRequest> for SignUpData {
    fn from(req: SignUpRequest) -> Self {
        SignUpData {
            name: req.name,
            username: req.username,
            email: req.email,
            password: req.password,
            password_confirm: req.password_confirm,
            photo: req.photo,
        }
    }
}

/// Request body for POST /api/auth/signin
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response body carrying a fresh access token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub status: Status,
    pub access_token: String,
}

impl TokenResponse {
    pub fn new(access_token: String) -> Self {
        Self {
            status: Status::Success,
            access_token,
        }
    }
}

/// Response body wrapping a single user record
pub type UserEnvelope = DataResponse<UserData>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub user: FilteredUser,
}

/// Wraps a user record in the `{status, data:{user}}` envelope
pub fn user_envelope(user: FilteredUser) -> UserEnvelope {
    DataResponse::success(UserData { user })
}
