use std::sync::Arc;

use serde::Serialize;

use crate::shared::infrastructure::backend::CivicBackend;

/// What an issue card or the user menu actually renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    pub display_name: String,
    pub email: Option<String>,
}

pub struct ViewProfileHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    backend: Arc<TBackend>,
}

impl<TBackend> ViewProfileHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    pub fn new(backend: Arc<TBackend>) -> Self {
        Self { backend }
    }

    /// Never fails the card render: a lookup failure degrades to the generic
    /// placeholder label.
    pub async fn card(&self, user_id: &str) -> ProfileCard {
        match self.backend.fetch_user_profile(user_id).await {
            Ok(profile) => ProfileCard {
                display_name: profile.display_name().to_string(),
                email: Some(profile.email),
            },
            Err(error) => {
                tracing::warn!(user_id, %error, "profile lookup failed, using placeholder");
                ProfileCard {
                    display_name: "User".to_string(),
                    email: None,
                }
            }
        }
    }
}
