use async_trait::async_trait;
use front_shared::{config::commands, DataService, Error};
use serde::{de::DeserializeOwned, Serialize};
use serde_wasm_bindgen::{from_value, Serializer};
use shared::models::{CreateReview, GalleryPost, Review, Server, User};
use wasm_bindgen::JsValue;

use crate::utils::{invoke, js_error_text};

/// Reaches the data service through the host bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostDataService;

#[derive(Serialize)]
struct CreateReviewArgs {
    request: CreateReview,
}

#[derive(Serialize)]
struct SummarizeArgs<'a> {
    reviews: &'a [Review],
}

async fn call<R: DeserializeOwned>(command: &str, args: JsValue) -> Result<R, Error> {
    let value = invoke(command, args)
        .await
        .map_err(|e| Error::Service(js_error_text(e)))?;
    Ok(from_value(value)?)
}

/// Arguments go out as plain objects, flattened profile fields included.
async fn call_with<A: Serialize, R: DeserializeOwned>(command: &str, args: &A) -> Result<R, Error> {
    let args = args.serialize(&Serializer::json_compatible())?;
    call(command, args).await
}

#[async_trait(?Send)]
impl DataService for HostDataService {
    async fn fetch_servers(&self) -> Result<Vec<Server>, Error> {
        call(commands::FETCH_SERVERS, JsValue::UNDEFINED).await
    }

    async fn current_user(&self) -> Result<Option<User>, Error> {
        call(commands::CURRENT_USER, JsValue::UNDEFINED).await
    }

    async fn fetch_reviews(&self) -> Result<Vec<Review>, Error> {
        call(commands::FETCH_REVIEWS, JsValue::UNDEFINED).await
    }

    async fn fetch_gallery_posts(&self) -> Result<Vec<GalleryPost>, Error> {
        call(commands::FETCH_GALLERY_POSTS, JsValue::UNDEFINED).await
    }

    async fn fetch_users(&self) -> Result<Vec<User>, Error> {
        call(commands::FETCH_USERS, JsValue::UNDEFINED).await
    }

    async fn create_review(&self, request: CreateReview) -> Result<Review, Error> {
        call_with(commands::CREATE_REVIEW, &CreateReviewArgs { request }).await
    }

    async fn summarize_reviews(&self, reviews: &[Review]) -> Result<String, Error> {
        call_with(commands::SUMMARIZE_REVIEWS, &SummarizeArgs { reviews }).await
    }
}
