// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: build the request, send it, decode the answer.
// Non-2xx responses become ApiError via ApiError::from_response.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    CreatePostResponse, LoginRequest, LoginResponse, NewPost, PostQuery, PostType,
    PostTypeResponse, PostsPage, RegisterRequest, RegisterResponse, ValidateTokenRequest,
    ValidateTokenResponse,
};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Signing in {}", request.email);
        let builder = Request::post(&self.url("/auth/login"));
        send_json(builder, request).await
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        log::info!("📝 Registering {} as {}", request.company_name, request.user_type.as_str());
        let builder = Request::post(&self.url("/auth/register"));
        send_json(builder, request).await
    }

    /// `POST /auth/validate-token`
    pub async fn validate_token(&self, token: &str) -> Result<ValidateTokenResponse, ApiError> {
        let builder = Request::post(&self.url("/auth/validate-token"));
        let body = ValidateTokenRequest {
            token: token.to_string(),
        };
        send_json(builder, &body).await
    }

    /// `GET /api/posts/post-type`: the role of the signed-in account.
    pub async fn fetch_post_type(&self, token: &str) -> Result<PostType, ApiError> {
        let builder = Request::get(&self.url("/api/posts/post-type")).header("Authorization", token);
        let response = send(builder).await?;
        let parsed: PostTypeResponse = read_json(response).await?;
        Ok(parsed.post_type)
    }

    /// `GET /api/posts`
    pub async fn list_posts(&self, token: &str, query: &PostQuery) -> Result<PostsPage, ApiError> {
        log::debug!("📋 Listing posts {:?}", query);
        let pairs = query.to_pairs();
        let builder = Request::get(&self.url("/api/posts"))
            .header("Authorization", token)
            .query(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        let response = send(builder).await?;
        let page: PostsPage = read_json(response).await?;
        log::info!("✅ {} posts received (page {} of {})", page.posts.len(), query.page, page.total_pages);
        Ok(page)
    }

    /// `POST /api/posts/create`
    pub async fn create_post(&self, token: &str, post: &NewPost) -> Result<CreatePostResponse, ApiError> {
        log::info!("📤 Creating post for {}", post.company_name);
        let builder = Request::post(&self.url("/api/posts/create")).header("Authorization", token);
        send_json(builder, post).await
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Parse(format!("request serialization: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()));
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response(status, &body);
    log::warn!("⚠️ {} answered {}", response.url(), error);
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let client = ApiClient::with_base_url("https://api.example.com/");
        assert_eq!(client.url("/auth/login"), "https://api.example.com/auth/login");
    }
}
