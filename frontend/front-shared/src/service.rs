use async_trait::async_trait;
use shared::models::{CreateReview, GalleryPost, Review, Server, User};

use crate::Error;

/// Backing data service of the listing.
///
/// Every call may take arbitrarily long; timeouts and retries are the
/// implementation's business. Futures are not `Send`: the browser runs them
/// on its single event loop.
#[async_trait(?Send)]
pub trait DataService {
    async fn fetch_servers(&self) -> Result<Vec<Server>, Error>;
    async fn current_user(&self) -> Result<Option<User>, Error>;
    /// All reviews, across servers.
    async fn fetch_reviews(&self) -> Result<Vec<Review>, Error>;
    /// All gallery posts, across servers.
    async fn fetch_gallery_posts(&self) -> Result<Vec<GalleryPost>, Error>;
    async fn fetch_users(&self) -> Result<Vec<User>, Error>;
    async fn create_review(&self, request: CreateReview) -> Result<Review, Error>;
    /// Short digest of `reviews`. May be empty.
    async fn summarize_reviews(&self, reviews: &[Review]) -> Result<String, Error>;
}
