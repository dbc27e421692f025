use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Profile fields this crate does not interpret, kept for round trips.
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        User {
            id,
            username: username.into(),
            avatar_url: None,
            profile: Map::new(),
        }
    }
}

/// Looks up the author of a review or post among the loaded users.
pub fn find_user(users: &[User], id: UserId) -> Option<&User> {
    users.iter().find(|user| user.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_fields_survive_a_round_trip() {
        let payload = r#"{"id":"4","username":"steve","level":12,"badges":["og"]}"#;
        let user: User = serde_json::from_str(payload).unwrap();
        assert_eq!(user.id, UserId(4));
        assert_eq!(user.profile.get("level"), Some(&Value::from(12)));

        let encoded = serde_json::to_value(&user).unwrap();
        assert_eq!(encoded["badges"][0], "og");
        assert_eq!(encoded["id"], 4);
    }

    #[test]
    fn users_without_username_still_decode() {
        let payload = r#"[{"id":1,"username":"alex"},{"id":2,"displayName":"Steve"}]"#;
        let users: Vec<User> = serde_json::from_str(payload).unwrap();
        assert_eq!(users[1].username, "");
        assert_eq!(users[1].profile.get("displayName"), Some(&Value::from("Steve")));
    }

    #[test]
    fn find_user_by_id() {
        let users = vec![User::new(UserId(1), "alex"), User::new(UserId(2), "steve")];
        assert_eq!(find_user(&users, UserId(2)).map(|u| u.username.as_str()), Some("steve"));
        assert!(find_user(&users, UserId(3)).is_none());
    }
}
