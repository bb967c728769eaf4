use poem_openapi::Object;

use business::domain::user::model::{ProfileView, UserProfile};

#[derive(Debug, Clone, Object)]
pub struct ProfileRequest {
    pub email: String,
    /// Letters, digits and `.@+-_` only, at most 150 characters
    pub username: String,
    #[oai(default)]
    pub first_name: String,
    #[oai(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    /// User id (bearer token subject)
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the caller follows this user
    pub is_subscribed: bool,
}

impl UserResponse {
    pub fn new(profile: UserProfile, is_subscribed: bool) -> Self {
        Self {
            id: profile.id.to_string(),
            email: profile.email,
            username: profile.username,
            first_name: profile.first_name,
            last_name: profile.last_name,
            is_subscribed,
        }
    }
}

impl From<ProfileView> for UserResponse {
    fn from(view: ProfileView) -> Self {
        Self::new(view.profile, view.is_subscribed)
    }
}
