//! HTTP client for the Driftbox server API
//!
//! One thin method per server endpoint. Methods take the bearer token as an
//! argument rather than holding it; the session store stays the single owner
//! of the token and handlers decide whether a request may be made at all.
//!
//! All responses pass through [`ApiClient::classify`], which turns the
//! reserved session-invalid status into [`ApiError::SessionExpired`] before
//! any per-endpoint handling sees it.

use std::path::Path;

use driftbox_common::UPLOAD_FIELD_NAME;
use driftbox_common::api::{
    FileRecord, LoginRequest, LoginResponse, ResetPasswordRequest, SignupRequest, UserProfile,
    UserRecord,
};

use super::error::ApiError;

/// Client for the Driftbox server REST API
///
/// Cheap to clone; the inner reqwest client shares its connection pool
/// across clones, so handlers can move clones into async tasks freely.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given server base URL
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    pub fn new(server_base: impl Into<String>) -> Self {
        let base: String = server_base.into();
        Self {
            http_client: reqwest::Client::new(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// Build an absolute URL for an API path like `/login`
    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Build an absolute URL for a collection item, percent-encoding the id
    fn item_url(&self, collection: &str, id: &str) -> Result<String, ApiError> {
        let mut url = reqwest::Url::parse(&self.api_url(collection))
            .map_err(|e| ApiError::Network(format!("Invalid server URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Network("Invalid server URL".to_string()))?
            .push(id);
        Ok(url.to_string())
    }

    /// Send a request and classify transport and status failures
    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            ApiError::Network(e.to_string())
        })?;
        Self::classify(response).await
    }

    /// Split responses into success, session expiry, and API errors
    async fn classify(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    /// Parse a success response body as JSON
    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("Invalid server response: {}", e)))
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Exchange credentials for a bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let url = self.api_url("/login");
        tracing::debug!("POST {}", url);
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = Self::send(self.http_client.post(&url).json(&request)).await?;
        let login: LoginResponse = Self::parse_json(response).await?;
        Ok(login.token)
    }

    /// Fetch the profile of the token's owner
    pub async fn user_info(&self, token: &str) -> Result<UserProfile, ApiError> {
        let url = self.api_url("/user-info");
        tracing::debug!("GET {}", url);
        let response = Self::send(self.http_client.get(&url).bearer_auth(token)).await?;
        Self::parse_json(response).await
    }

    /// Change the caller's own password
    pub async fn reset_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let url = self.api_url("/reset-password");
        tracing::debug!("PUT {}", url);
        let request = ResetPasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        Self::send(self.http_client.put(&url).bearer_auth(token).json(&request)).await?;
        Ok(())
    }

    // ========================================================================
    // Files
    // ========================================================================

    /// List files, optionally scoped to the shared collection and a keyword
    ///
    /// The `shared` flag is omitted from the query entirely when false, and
    /// an empty keyword sends no keyword parameter (a full listing).
    pub async fn files(
        &self,
        token: &str,
        shared: bool,
        keyword: &str,
    ) -> Result<Vec<FileRecord>, ApiError> {
        let url = self.api_url("/files");
        let mut query: Vec<(&str, String)> = Vec::new();
        if shared {
            query.push(("shared", "true".to_string()));
        }
        if !keyword.is_empty() {
            query.push(("keyword", keyword.to_string()));
        }
        tracing::debug!("GET {} (shared: {}, keyword: {:?})", url, shared, keyword);
        let response =
            Self::send(self.http_client.get(&url).query(&query).bearer_auth(token)).await?;
        Self::parse_json(response).await
    }

    /// Upload a single file from disk
    ///
    /// Reads the whole file into memory and sends it as one multipart
    /// request. Batch semantics (one request per file, in order) are the
    /// upload coordinator's responsibility, not this method's.
    pub async fn upload_file(
        &self,
        token: &str,
        path: &Path,
        shared: bool,
    ) -> Result<(), ApiError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| ApiError::Io(format!("Invalid file name: {}", path.display())))?;

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name)
            .mime_str("application/octet-stream")
            .map_err(|e| ApiError::Io(format!("Invalid upload part: {}", e)))?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD_NAME, part);

        let url = self.api_url("/upload");
        let mut query: Vec<(&str, String)> = Vec::new();
        if shared {
            query.push(("shared", "true".to_string()));
        }
        tracing::debug!("POST {} (shared: {})", url, shared);
        Self::send(
            self.http_client
                .post(&url)
                .query(&query)
                .bearer_auth(token)
                .multipart(form),
        )
        .await?;
        Ok(())
    }

    /// Download a file's content to the given destination path
    pub async fn download_file(
        &self,
        token: &str,
        id: &str,
        dest: &Path,
    ) -> Result<(), ApiError> {
        let url = self.item_url("/file", id)?;
        tracing::debug!("GET {}", url);
        let response = Self::send(self.http_client.get(&url).bearer_auth(token)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Download interrupted: {}", e)))?;
        tokio::fs::write(dest, &bytes)
            .await
            .map_err(|e| ApiError::Io(format!("Failed to write {}: {}", dest.display(), e)))?;
        Ok(())
    }

    /// Delete a single file
    pub async fn delete_file(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let url = self.item_url("/file", id)?;
        tracing::debug!("DELETE {}", url);
        Self::send(self.http_client.delete(&url).bearer_auth(token)).await?;
        Ok(())
    }

    // ========================================================================
    // User Management
    // ========================================================================

    /// Create a new account (admin only)
    pub async fn signup(
        &self,
        token: &str,
        username: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<(), ApiError> {
        let url = self.api_url("/signup");
        tracing::debug!("POST {}", url);
        let request = SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
            is_admin,
        };
        Self::send(self.http_client.post(&url).bearer_auth(token).json(&request)).await?;
        Ok(())
    }

    /// List all accounts (admin only)
    pub async fn users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError> {
        let url = self.api_url("/users");
        tracing::debug!("GET {}", url);
        let response = Self::send(self.http_client.get(&url).bearer_auth(token)).await?;
        Self::parse_json(response).await
    }

    /// Delete an account (admin only)
    pub async fn delete_user(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let url = self.item_url("/users", id)?;
        tracing::debug!("DELETE {}", url);
        Self::send(self.http_client.delete(&url).bearer_auth(token)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_prefix() {
        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(client.api_url("/login"), "http://localhost:8080/api/login");
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.api_url("/files"), "http://localhost:8080/api/files");
    }

    #[test]
    fn test_item_url_appends_id() {
        let client = ApiClient::new("http://localhost:8080");
        let url = client.item_url("/file", "abc123").expect("url");
        assert_eq!(url, "http://localhost:8080/api/file/abc123");
    }

    #[test]
    fn test_item_url_percent_encodes_id() {
        // Ids can be server-generated strings or fallback filenames, which
        // may contain spaces or slashes
        let client = ApiClient::new("http://localhost:8080");
        let url = client.item_url("/file", "my report.pdf").expect("url");
        assert_eq!(url, "http://localhost:8080/api/file/my%20report.pdf");

        let url = client.item_url("/file", "a/b").expect("url");
        assert_eq!(url, "http://localhost:8080/api/file/a%2Fb");
    }

    #[test]
    fn test_item_url_for_users() {
        let client = ApiClient::new("https://files.example.com");
        let url = client.item_url("/users", "42").expect("url");
        assert_eq!(url, "https://files.example.com/api/users/42");
    }
}
