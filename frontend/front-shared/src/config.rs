//! Build-time settings of the front end.

/// Host commands the browser side invokes through the bridge.
pub mod commands {
    pub const FETCH_SERVERS: &str = "fetch_servers";
    pub const FETCH_REVIEWS: &str = "fetch_reviews";
    pub const FETCH_GALLERY_POSTS: &str = "fetch_gallery_posts";
    pub const FETCH_USERS: &str = "fetch_users";
    pub const CREATE_REVIEW: &str = "create_review";
    pub const SUMMARIZE_REVIEWS: &str = "summarize_reviews";
    pub const CURRENT_USER: &str = "current_user";
}

/// Host event carrying a [`crate::LoginStatus`] whenever the session changes.
pub const LOGIN_STATUS_EVENT: &str = "login_status";

/// Tags shown on a server card; the detail view shows all of them.
pub const CARD_TAG_LIMIT: usize = 4;

/// Shown on cards and headers when a server has no banner of its own.
pub const FALLBACK_BANNER: &str = "/public/banner.svg";

const DEFAULT_LOG_FILTER: &str = "info";

/// `tracing` filter directive, overridable at build time with `SERVERBOARD_LOG`.
pub fn log_filter() -> &'static str {
    option_env!("SERVERBOARD_LOG").unwrap_or(DEFAULT_LOG_FILTER)
}
