use serde::{Deserialize, Serialize};
use shared::models::User;

use crate::FromEvent;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum LoginStatus {
    LoggedIn(User),
    #[default]
    LoggedOut,
}
impl FromEvent for LoginStatus {}

impl LoginStatus {
    pub fn user(&self) -> Option<&User> {
        match self {
            LoginStatus::LoggedIn(user) => Some(user),
            LoginStatus::LoggedOut => None,
        }
    }
}

impl From<Option<User>> for LoginStatus {
    fn from(value: Option<User>) -> Self {
        match value {
            Some(user) => LoginStatus::LoggedIn(user),
            None => LoginStatus::LoggedOut,
        }
    }
}
