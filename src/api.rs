//! HTTP client for the recipe journal API

use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError};
use crate::model::{Recipe, RecipeDraft, RecipeStats};

const RECIPES_PATH: &str = "/api/recipes";
const STATS_PATH: &str = "/api/stats";

/// Anything the recipe list can load its recipes from
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch the full recipe collection
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError>;
}

/// Thin wrapper around the recipe endpoints
///
/// Every call is a single request: no retries, no caching, no cancellation.
#[derive(Debug, Clone)]
pub struct RecipeApi {
    client: Client,
    config: ClientConfig,
}

impl RecipeApi {
    /// Create a client for the configured base URL
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// Create a client for an explicit base URL
    pub fn with_base_url(api_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(api_url))
    }

    /// The validated configuration this client sends requests with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /api/recipes`
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let request = self.request(Method::GET, RECIPES_PATH);
        self.fetch_json(request).await
    }

    /// `GET /api/recipes?search=<query>`, matching title or notes on the server
    pub async fn search_recipes(&self, query: &str) -> Result<Vec<Recipe>, ApiError> {
        let request = self
            .request(Method::GET, RECIPES_PATH)
            .query(&[("search", query)]);
        self.fetch_json(request).await
    }

    /// `GET /api/recipes/{id}`
    pub async fn get_recipe(&self, id: i64) -> Result<Recipe, ApiError> {
        let request = self.request(Method::GET, &recipe_path(id)?);
        self.fetch_json(request).await
    }

    /// `POST /api/recipes`. The server assigns the id and timestamps.
    pub async fn create_recipe(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        let request = self.request(Method::POST, RECIPES_PATH).json(draft);
        self.fetch_json(request).await
    }

    /// `PUT /api/recipes/{id}`
    pub async fn update_recipe(&self, id: i64, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        let request = self.request(Method::PUT, &recipe_path(id)?).json(draft);
        self.fetch_json(request).await
    }

    /// `DELETE /api/recipes/{id}`. Any response body is ignored.
    pub async fn delete_recipe(&self, id: i64) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &recipe_path(id)?);
        self.send(request).await?;
        Ok(())
    }

    /// `GET /api/stats`
    pub async fn stats(&self) -> Result<RecipeStats, ApiError> {
        let request = self.request(Method::GET, STATS_PATH);
        self.fetch_json(request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint_url(path);
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("response status {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeSource for RecipeApi {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        RecipeApi::list_recipes(self).await
    }
}

fn recipe_path(id: i64) -> Result<String, ApiError> {
    if id <= 0 {
        return Err(ApiError::InvalidId(id));
    }
    Ok(format!("{RECIPES_PATH}/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_path() {
        assert_eq!(recipe_path(12).unwrap(), "/api/recipes/12");
        assert!(matches!(recipe_path(0), Err(ApiError::InvalidId(0))));
        assert!(matches!(recipe_path(-3), Err(ApiError::InvalidId(-3))));
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        assert!(RecipeApi::with_base_url("not a url").is_err());
        assert!(RecipeApi::with_base_url("http://localhost:8000").is_ok());
    }

    #[test]
    fn test_config_is_kept() {
        let api = RecipeApi::with_base_url("https://rezepte.example/").unwrap();
        assert_eq!(api.config().api_url, "https://rezepte.example/");
        assert_eq!(
            api.config().endpoint_url(RECIPES_PATH),
            "https://rezepte.example/api/recipes"
        );
    }

    #[tokio::test]
    async fn test_invalid_id_makes_no_request() {
        // Port 9 is discard; a request would fail with a network error instead
        let api = RecipeApi::with_base_url("http://127.0.0.1:9").unwrap();
        assert!(matches!(api.get_recipe(0).await, Err(ApiError::InvalidId(0))));
        assert!(matches!(
            api.delete_recipe(-1).await,
            Err(ApiError::InvalidId(-1))
        ));
    }
}
