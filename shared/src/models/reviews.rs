use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ReviewId, ServerId, User, UserId};
use crate::Error;

/// Star rating of a review, `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(Error::InvalidRating(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub server_id: ServerId,
    pub user_id: UserId,
    /// Stored value as sent by the service. Only new reviews are validated.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    pub fn belongs_to(&self, server_id: ServerId) -> bool {
        self.server_id == server_id
    }
}

/// Payload of the review creation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub server_id: ServerId,
    pub user: User,
    pub rating: Rating,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(Rating::try_from(0).is_err());
        assert_eq!(Rating::try_from(1).map(Rating::get), Ok(1));
        assert_eq!(Rating::try_from(5).map(Rating::get), Ok(5));
        assert_eq!(Rating::try_from(6), Err(Error::InvalidRating(6)));
    }

    #[test]
    fn stored_reviews_decode_without_range_checks() {
        let payload = r#"[
            {"id":1,"serverId":7,"userId":2,"rating":4,"comment":"good"},
            {"id":2,"serverId":9,"userId":3,"rating":0,"comment":"broken"}
        ]"#;
        let reviews: Vec<Review> = serde_json::from_str(payload).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[1].rating, 0);
    }

    #[test]
    fn new_reviews_still_need_a_valid_rating() {
        let payload = r#"{"serverId":7,"user":{"id":1,"username":"alex"},"rating":9,"comment":"x"}"#;
        assert!(serde_json::from_str::<CreateReview>(payload).is_err());
    }

    #[test]
    fn review_decodes_loose_foreign_key() {
        let payload = r#"{"id":1,"serverId":"7","userId":2,"rating":4,"comment":"nice",
            "createdAt":"2024-05-01T10:00:00Z"}"#;
        let review: Review = serde_json::from_str(payload).unwrap();
        assert!(review.belongs_to(ServerId(7)));
        assert!(!review.belongs_to(ServerId(9)));
        assert!(review.created_at.is_some());
    }
}
