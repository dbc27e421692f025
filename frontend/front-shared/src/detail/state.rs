use shared::models::{GalleryPost, Review, ServerId, User};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Tab {
    #[default]
    Details,
    Gallery,
    Reviews,
    Community,
}

/// Everything one load brings in for a server, already scoped to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerData {
    pub reviews: Vec<Review>,
    pub gallery_posts: Vec<GalleryPost>,
    pub users: Vec<User>,
}

impl ServerData {
    /// Keeps only the reviews and posts of `server_id`. Users are global.
    pub fn scoped_to(
        server_id: ServerId,
        reviews: Vec<Review>,
        gallery_posts: Vec<GalleryPost>,
        users: Vec<User>,
    ) -> Self {
        ServerData {
            reviews: reviews
                .into_iter()
                .filter(|review| review.belongs_to(server_id))
                .collect(),
            gallery_posts: gallery_posts
                .into_iter()
                .filter(|post| post.belongs_to(server_id))
                .collect(),
            users,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub server_id: Option<ServerId>,
    pub active_tab: Tab,
    pub loading: bool,
    pub reviews: Vec<Review>,
    pub gallery_posts: Vec<GalleryPost>,
    pub users: Vec<User>,
    pub summary: String,
    pub summarizing: bool,
    pub summary_error: Option<String>,
}

impl DetailState {
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Enters the loading phase for `server_id`. Data of a different server is
    /// dropped right away; the summary always is.
    pub fn begin_load(&mut self, server_id: ServerId) {
        if self.server_id != Some(server_id) {
            self.reviews.clear();
            self.gallery_posts.clear();
        }
        self.server_id = Some(server_id);
        self.loading = true;
        self.summary.clear();
        self.summarizing = false;
        self.summary_error = None;
    }

    pub fn apply_loaded(&mut self, data: ServerData) {
        self.reviews = data.reviews;
        self.gallery_posts = data.gallery_posts;
        self.users = data.users;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    pub fn prepend_review(&mut self, review: Review) {
        self.reviews.insert(0, review);
    }

    pub fn can_summarize(&self) -> bool {
        !self.reviews.is_empty() && !self.summarizing
    }

    pub fn begin_summary(&mut self) {
        self.summarizing = true;
        self.summary.clear();
        self.summary_error = None;
    }

    pub fn finish_summary(&mut self, summary: String) {
        self.summary = summary;
        self.summarizing = false;
    }

    pub fn summary_failed(&mut self, message: String) {
        self.summary_error = Some(message);
        self.summarizing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ReviewId, UserId};
    use strum::IntoEnumIterator;

    fn review(id: u64, server: u64) -> Review {
        Review {
            id: ReviewId(id),
            server_id: ServerId(server),
            user_id: UserId(1),
            rating: 4,
            comment: format!("review {id}"),
            created_at: None,
        }
    }

    #[test]
    fn tabs_start_on_details_in_display_order() {
        assert_eq!(DetailState::default().active_tab, Tab::Details);
        let labels: Vec<String> = Tab::iter().map(|tab| tab.to_string()).collect();
        assert_eq!(labels, ["Details", "Gallery", "Reviews", "Community"]);
    }

    #[test]
    fn scoping_drops_foreign_reviews() {
        let data = ServerData::scoped_to(
            ServerId(7),
            vec![review(1, 7), review(2, 9), review(3, 7)],
            vec![],
            vec![],
        );
        let ids: Vec<_> = data.reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, [ReviewId(1), ReviewId(3)]);
    }

    #[test]
    fn reloading_the_same_server_keeps_data_until_applied() {
        let mut state = DetailState::default();
        state.begin_load(ServerId(7));
        state.apply_loaded(ServerData {
            reviews: vec![review(1, 7)],
            ..Default::default()
        });
        state.summary = "great".to_string();

        state.begin_load(ServerId(7));
        assert_eq!(state.reviews.len(), 1);
        assert!(state.summary.is_empty());

        state.begin_load(ServerId(9));
        assert!(state.reviews.is_empty());
    }

    #[test]
    fn summary_cycle() {
        let mut state = DetailState::default();
        assert!(!state.can_summarize());

        state.prepend_review(review(1, 7));
        assert!(state.can_summarize());

        state.begin_summary();
        assert!(!state.can_summarize());

        state.finish_summary("solid server".to_string());
        assert_eq!(state.summary, "solid server");
        assert!(state.can_summarize());

        state.begin_summary();
        assert!(state.summary.is_empty());
        state.summary_failed("quota".to_string());
        assert_eq!(state.summary_error.as_deref(), Some("quota"));
        assert!(!state.summarizing);
    }
}
