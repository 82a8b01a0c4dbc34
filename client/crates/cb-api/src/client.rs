use crate::{ClientError, ClientResult};

use std::path::Path;
use std::sync::Arc;

use cb_core::{ApiMessage, Category, Comment, CoreError, Recipe, RecipeDraft, RecipeImage};
use cb_session::SessionManager;
use futures::future::join_all;
use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url, header::AUTHORIZATION};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const SESSION_EXPIRED: &str = "Session expired. Please log in again.";
const NO_REPLY: &str = "No reply from the assistant.";
const MISSING_BASE_URL: &str = "API base URL is not defined. Check your configuration.";
const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

/// Outcome of looking up locally saved recipe ids.
#[derive(Debug, Default)]
pub struct SavedLookup {
    /// Recipes that still exist, in the order of the ids given.
    pub found: Vec<Recipe>,
    /// Ids the backend no longer knows.
    pub missing: Vec<String>,
}

/// HTTP client for the cookbook REST API
///
/// Requests carry the current session's bearer credential, if any. A
/// response that rejects the credential signs the session out.
pub struct Client {
    pub base_url: String,
    session: Arc<SessionManager>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:8080")
    /// * `session` - Session holder supplying the bearer credential
    pub fn new(base_url: &str, session: Arc<SessionManager>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client: ReqwestClient::new(),
        }
    }

    /// Create a client that talks to the same backend as `session`.
    #[track_caller]
    pub fn from_session(session: Arc<SessionManager>) -> ClientResult<Self> {
        let base_url = session
            .base_url()
            .map(String::from)
            .ok_or_else(|| ClientError::config(MISSING_BASE_URL))?;
        Ok(Self::new(&base_url, session))
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// Endpoint URL with each segment percent-encoded, so ids never change
    /// the path shape or add a query.
    #[track_caller]
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let invalid = || ClientError::config(format!("Invalid API base URL '{}'", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build a request with the bearer header when signed in
    fn request(&self, method: Method, segments: &[&str]) -> ClientResult<reqwest::RequestBuilder> {
        let url = self.endpoint(segments)?;
        debug!("{method} {url}");
        let mut req = self.client.request(method, url);

        if let Some(user) = self.session.current() {
            req = req.header(AUTHORIZATION, user.bearer_header());
        }

        Ok(req)
    }

    /// Execute request and handle errors
    ///
    /// `fallback` is reported when a rejection carries no message.
    async fn execute(&self, req: reqwest::RequestBuilder, fallback: &str) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .map(|body| ApiMessage::from_body(&body))
                .unwrap_or_default();

            if (status == StatusCode::UNAUTHORIZED || message.mentions_token())
                && self.session.is_authenticated()
            {
                self.expire_session().await;
                return Err(ClientError::session_expired(SESSION_EXPIRED));
            }

            return Err(ClientError::api(status.as_u16(), message.or(fallback)));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        fallback: &str,
    ) -> ClientResult<T> {
        let body = self.execute(req, fallback).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn expire_session(&self) {
        if let Err(e) = self.session.invalidate().await {
            warn!("Failed to clear expired session: {}", e.message());
        }
    }

    #[track_caller]
    fn require_session(&self) -> ClientResult<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(ClientError::not_signed_in())
        }
    }

    #[track_caller]
    fn require_admin(&self) -> ClientResult<()> {
        self.require_session()?;
        if self.session.is_admin() {
            Ok(())
        } else {
            Err(ClientError::forbidden())
        }
    }

    // =========================================================================
    // Recipe Operations
    // =========================================================================

    /// List all recipes
    pub async fn list_recipes(&self) -> ClientResult<Vec<Recipe>> {
        let req = self.request(Method::GET, &["api", "recipes"])?;
        self.fetch(req, "Failed to fetch recipes").await
    }

    /// Get a recipe by ID
    pub async fn get_recipe(&self, id: &str) -> ClientResult<Recipe> {
        let req = self.request(Method::GET, &["api", "recipes", id])?;
        self.fetch(req, "Failed to fetch recipe").await
    }

    /// List recipe categories
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        let req = self.request(Method::GET, &["api", "recipes", "categories"])?;
        self.fetch(req, "Failed to fetch categories").await
    }

    /// Create a recipe (admin only)
    pub async fn create_recipe(&self, draft: &RecipeDraft) -> ClientResult<Value> {
        self.require_admin()?;
        draft.validate()?;

        let form = recipe_form(draft).await?;
        let req = self
            .request(Method::POST, &["api", "recipes"])?
            .multipart(form);
        self.execute(req, "Failed to create recipe.").await
    }

    /// Replace a recipe (admin only)
    pub async fn update_recipe(&self, id: &str, draft: &RecipeDraft) -> ClientResult<Value> {
        self.require_admin()?;
        draft.validate()?;

        let form = recipe_form(draft).await?;
        let req = self
            .request(Method::PUT, &["api", "recipes", id])?
            .multipart(form);
        self.execute(req, "Failed to update recipe.").await
    }

    /// Delete a recipe (admin only)
    pub async fn delete_recipe(&self, id: &str) -> ClientResult<Value> {
        self.require_admin()?;

        let req = self.request(Method::DELETE, &["api", "recipes", id])?;
        self.execute(req, "Failed to delete recipe").await
    }

    /// Look up saved recipe ids concurrently.
    ///
    /// Ids the backend rejects are reported as missing. Transport failures
    /// abort the lookup so that an offline device never looks like an empty
    /// catalogue.
    pub async fn resolve_saved(&self, ids: &[String]) -> ClientResult<SavedLookup> {
        let results = join_all(ids.iter().map(|id| self.get_recipe(id))).await;

        let mut lookup = SavedLookup::default();
        for (id, result) in ids.iter().zip(results) {
            match result {
                Ok(recipe) => lookup.found.push(recipe),
                Err(ClientError::Api { status, .. }) => {
                    debug!("Saved recipe {id} is gone (status {status})");
                    lookup.missing.push(id.clone());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(lookup)
    }

    // =========================================================================
    // Comment Operations
    // =========================================================================

    /// List comments on a recipe
    pub async fn list_comments(&self, recipe_id: &str) -> ClientResult<Vec<Comment>> {
        let req = self.request(Method::GET, &["api", "comments", recipe_id])?;
        self.fetch(req, "Failed to fetch comments").await
    }

    /// Add a comment to a recipe
    pub async fn add_comment(&self, recipe_id: &str, content: &str) -> ClientResult<Comment> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AddCommentRequest<'a> {
            recipe_id: &'a str,
            content: &'a str,
        }

        self.require_session()?;
        if content.trim().is_empty() {
            return Err(CoreError::validation("Comment cannot be empty.").into());
        }

        let body = AddCommentRequest { recipe_id, content };
        let req = self
            .request(Method::POST, &["api", "comments"])?
            .json(&body);
        self.fetch(req, "Failed to add comment").await
    }

    // =========================================================================
    // Assistant Operations
    // =========================================================================

    /// Ask the cooking assistant; returns its reply text
    pub async fn suggest(&self, message: &str) -> ClientResult<String> {
        #[derive(Serialize)]
        struct SuggestRequest<'a> {
            message: &'a str,
        }

        self.require_session()?;
        if message.trim().is_empty() {
            return Err(CoreError::validation("Message cannot be empty.").into());
        }

        let req = self
            .request(Method::POST, &["api", "ai", "suggest"])?
            .json(&SuggestRequest { message });
        let body = self.execute(req, "Failed to reach the assistant").await?;

        Ok(body
            .get("reply")
            .and_then(|v| v.as_str())
            .filter(|r| !r.is_empty())
            .unwrap_or(NO_REPLY)
            .to_string())
    }
}

/// Multipart body shared by recipe create and update.
async fn recipe_form(draft: &RecipeDraft) -> ClientResult<Form> {
    let Some(category) = &draft.category else {
        return Err(CoreError::validation("Please select a category.").into());
    };

    let mut form = Form::new()
        .text("name", draft.name.clone())
        .text("description", draft.description.clone())
        .text("cookTime", draft.normalized_cook_time())
        .text("difficulty", draft.difficulty.clone())
        .text("calories", draft.calories.trim().to_string())
        .text(
            "ingredients",
            serde_json::to_string(&draft.valid_ingredients())?,
        )
        .text("instructions", draft.instructions.clone())
        .text("categories", serde_json::to_string(&[category])?);

    match &draft.image {
        Some(RecipeImage::File(path)) => form = form.part("image", image_part(path).await?),
        Some(RecipeImage::Url(url)) => form = form.text("imageUrl", url.clone()),
        None => {}
    }

    Ok(form)
}

async fn image_part(path: &Path) -> ClientResult<Part> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ClientError::io(path.to_path_buf(), e))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_IMAGE_EXTENSION)
        .to_lowercase();

    Ok(Part::bytes(bytes)
        .file_name(format!("recipe.{extension}"))
        .mime_str(&format!("image/{extension}"))?)
}
