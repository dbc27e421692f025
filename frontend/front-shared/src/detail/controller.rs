use std::{cell::RefCell, pin::pin};

use futures_util::future::{Either, select, try_join3};
use shared::models::{CreateReview, Rating, ReviewId, ServerId, User};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{DetailState, ServerData, Tab};
use crate::{DataService, Error};

/// Where the controller keeps its [`DetailState`]. The browser stores it in a
/// reactive signal, tests in a plain `RefCell`.
pub trait DetailStore {
    fn read<R>(&self, f: impl FnOnce(&DetailState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut DetailState));
}

impl DetailStore for RefCell<DetailState> {
    fn read<R>(&self, f: impl FnOnce(&DetailState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut DetailState)) {
        f(&mut self.borrow_mut())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Applied,
    Failed(Error),
    /// Superseded by a newer load or by teardown; nothing was applied.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(ReviewId),
    NotLoggedIn,
    NotLoaded,
    Failed(Error),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    Stored,
    /// No reviews yet, or a summary is already being generated.
    Skipped,
    Failed(Error),
    Cancelled,
}

/// Drives one mounted detail view.
///
/// Every load runs under a child of the view's lifecycle token. Starting a new
/// load cancels the previous one, [`teardown`](Self::teardown) cancels all of
/// them, and a cancelled operation never writes to the store.
pub struct ServerDetailController<S, St> {
    service: S,
    store: St,
    lifecycle: CancellationToken,
    current: RefCell<CancellationToken>,
}

impl<S: DataService, St: DetailStore> ServerDetailController<S, St> {
    pub fn new(service: S, store: St) -> Self {
        let lifecycle = CancellationToken::new();
        let current = RefCell::new(lifecycle.child_token());
        ServerDetailController {
            service,
            store,
            lifecycle,
            current,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    /// Cancelling the returned token has the same effect as `teardown`.
    pub fn lifecycle_token(&self) -> CancellationToken {
        self.lifecycle.clone()
    }

    pub fn teardown(&self) {
        self.lifecycle.cancel();
    }

    fn next_load_token(&self) -> CancellationToken {
        let token = self.lifecycle.child_token();
        self.current.replace(token.clone()).cancel();
        token
    }

    fn current_token(&self) -> CancellationToken {
        self.current.borrow().clone()
    }

    /// Fetches reviews, gallery posts and users concurrently and applies them
    /// only if all three succeed and the load was not superseded meanwhile.
    pub async fn load(&self, server_id: ServerId) -> LoadOutcome {
        let token = self.next_load_token();
        if token.is_cancelled() {
            return LoadOutcome::Cancelled;
        }
        self.store.write(|state| state.begin_load(server_id));

        let fetches = try_join3(
            self.service.fetch_reviews(),
            self.service.fetch_gallery_posts(),
            self.service.fetch_users(),
        );
        let fetched = match select(pin!(token.cancelled()), pin!(fetches)).await {
            Either::Left(_) => None,
            Either::Right((result, _)) => Some(result),
        };
        let Some(result) = fetched.filter(|_| !token.is_cancelled()) else {
            debug!(%server_id, "Dropping superseded server load");
            return LoadOutcome::Cancelled;
        };

        match result {
            Ok((reviews, gallery_posts, users)) => {
                let data = ServerData::scoped_to(server_id, reviews, gallery_posts, users);
                debug!(
                    %server_id,
                    reviews = data.reviews.len(),
                    gallery_posts = data.gallery_posts.len(),
                    "Loaded server data"
                );
                self.store.write(|state| state.apply_loaded(data));
                LoadOutcome::Applied
            }
            Err(e) => {
                warn!(%server_id, error = %e, "Failed to load reviews or gallery posts");
                self.store.write(DetailState::load_failed);
                LoadOutcome::Failed(e)
            }
        }
    }

    pub fn select_tab(&self, tab: Tab) {
        self.store.write(|state| state.select_tab(tab));
    }

    /// Creates a review for the loaded server and puts the stored result at
    /// the top of the list. Without a user nothing happens. A reload of the
    /// same server keeps the result; switching servers or teardown drops it.
    pub async fn submit_review(
        &self,
        user: Option<User>,
        rating: Rating,
        comment: String,
    ) -> SubmitOutcome {
        let Some(user) = user else {
            return SubmitOutcome::NotLoggedIn;
        };
        let Some(server_id) = self.store.read(|state| state.server_id) else {
            return SubmitOutcome::NotLoaded;
        };
        let request = CreateReview {
            server_id,
            user,
            rating,
            comment,
        };

        let result = self.service.create_review(request).await;
        if self.lifecycle.is_cancelled()
            || self.store.read(|state| state.server_id) != Some(server_id)
        {
            debug!(%server_id, "Dropping review created for a view that moved on");
            return SubmitOutcome::Cancelled;
        }
        match result {
            Ok(review) => {
                let id = review.id;
                self.store.write(|state| state.prepend_review(review));
                SubmitOutcome::Created(id)
            }
            Err(e) => {
                warn!(%server_id, error = %e, "Failed to create review");
                SubmitOutcome::Failed(e)
            }
        }
    }

    pub async fn generate_summary(&self) -> SummaryOutcome {
        if !self.store.read(DetailState::can_summarize) {
            return SummaryOutcome::Skipped;
        }
        let token = self.current_token();
        self.store.write(DetailState::begin_summary);
        let reviews = self.store.read(|state| state.reviews.clone());

        let result = self.service.summarize_reviews(&reviews).await;
        if token.is_cancelled() {
            return SummaryOutcome::Cancelled;
        }
        match result {
            Ok(summary) => {
                self.store.write(|state| state.finish_summary(summary));
                SummaryOutcome::Stored
            }
            Err(e) => {
                warn!(error = %e, "Failed to summarize reviews");
                self.store.write(|state| state.summary_failed(e.to_string()));
                SummaryOutcome::Failed(e)
            }
        }
    }
}

impl<S, St> Drop for ServerDetailController<S, St> {
    fn drop(&mut self) {
        self.lifecycle.cancel();
    }
}
