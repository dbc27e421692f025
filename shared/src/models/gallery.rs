use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PostId, ServerId, UserId};

/// Screenshot or other media a player shared for a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPost {
    pub id: PostId,
    pub server_id: ServerId,
    pub user_id: UserId,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl GalleryPost {
    pub fn belongs_to(&self, server_id: ServerId) -> bool {
        self.server_id == server_id
    }
}
