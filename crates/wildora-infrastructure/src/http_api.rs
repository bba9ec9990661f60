//! HTTP adapter for the Wildora REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use wildora_core::activity::{AchievementRecord, ActivityApi, QuizAttempt, QuizAttemptReceipt};
use wildora_core::config::ApiSettings;
use wildora_core::user::{NewProfile, ProfileApi, ProfileUpdate, UserProfile};
use wildora_core::{Result, WildoraError};

pub const PROFILE_PATH: &str = "/api/user/profile";
pub const QUIZ_ATTEMPT_PATH: &str = "/api/quiz/attempt";
pub const ACHIEVEMENTS_PATH: &str = "/api/achievements";

const PROFILE_ENTITY: &str = "user_profile";
const ATTEMPT_ENTITY: &str = "quiz_attempt";
const ACHIEVEMENT_ENTITY: &str = "achievement";

/// reqwest client for the profile and activity endpoints.
#[derive(Clone)]
pub struct HttpWildoraApi {
    client: Client,
    base_url: String,
    session_token: Option<String>,
    timeout: Option<Duration>,
}

impl HttpWildoraApi {
    pub fn new(base_url: impl Into<String>, session_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session_token,
            timeout: None,
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        tracing::info!(
            "[HttpWildoraApi] Initialized with URL: {}, session token: {}",
            settings.base_url,
            if settings.session_token.is_some() {
                "present"
            } else {
                "none"
            }
        );
        Self::new(&settings.base_url, settings.session_token.clone())
            .with_timeout(settings.timeout_secs.map(Duration::from_secs))
    }

    /// Per-request timeout. `None` waits until the request resolves.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Attaches the bearer token and timeout, if configured.
    fn auth_request(&self, request: RequestBuilder) -> RequestBuilder {
        let request = match &self.session_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        };
        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    async fn send(
        &self,
        request: RequestBuilder,
        entity: &'static str,
        action: &str,
    ) -> Result<Response> {
        let response = self
            .auth_request(request)
            .send()
            .await
            .map_err(|e| transport_error(action, e))?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        if status != 404 {
            tracing::warn!("[HttpWildoraApi] {}: HTTP {}", action, status);
        }
        Err(status_error(status, entity, action, &body))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        entity: &'static str,
        action: &str,
    ) -> Result<T> {
        let response = self.send(request, entity, action).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| WildoraError::network(None, format!("{}: invalid response: {}", action, e)))
    }
}

#[async_trait]
impl ProfileApi for HttpWildoraApi {
    async fn fetch_profile(&self) -> Result<UserProfile> {
        let url = self.endpoint(PROFILE_PATH);
        tracing::debug!("[HttpWildoraApi] GET {}", url);
        self.send_json(self.client.get(&url), PROFILE_ENTITY, "Failed to fetch profile")
            .await
    }

    async fn create_profile(&self, profile: &NewProfile) -> Result<UserProfile> {
        let url = self.endpoint(PROFILE_PATH);
        tracing::debug!("[HttpWildoraApi] POST {}", url);
        self.send_json(
            self.client.post(&url).json(profile),
            PROFILE_ENTITY,
            "Failed to create profile",
        )
        .await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let url = self.endpoint(PROFILE_PATH);
        tracing::debug!("[HttpWildoraApi] PUT {}", url);
        self.send_json(
            self.client.put(&url).json(update),
            PROFILE_ENTITY,
            "Failed to update profile",
        )
        .await
    }
}

#[async_trait]
impl ActivityApi for HttpWildoraApi {
    async fn submit_quiz_attempt(&self, attempt: &QuizAttempt) -> Result<QuizAttemptReceipt> {
        let url = self.endpoint(QUIZ_ATTEMPT_PATH);
        tracing::debug!("[HttpWildoraApi] POST {}", url);
        self.send_json(
            self.client.post(&url).json(attempt),
            ATTEMPT_ENTITY,
            "Failed to submit quiz attempt",
        )
        .await
    }

    async fn record_achievement(&self, record: &AchievementRecord) -> Result<()> {
        let url = self.endpoint(ACHIEVEMENTS_PATH);
        tracing::debug!("[HttpWildoraApi] POST {}", url);
        self.send(
            self.client.post(&url).json(record),
            ACHIEVEMENT_ENTITY,
            "Failed to record achievement",
        )
        .await?;
        Ok(())
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Maps a non-2xx status into the error taxonomy.
pub(crate) fn status_error(
    status: u16,
    entity: &'static str,
    action: &str,
    body: &str,
) -> WildoraError {
    if status == 404 {
        return WildoraError::not_found(entity, "current user");
    }
    let message = if body.trim().is_empty() {
        action.to_string()
    } else {
        format!("{}: {}", action, body.trim())
    };
    WildoraError::network(Some(status), message)
}

fn transport_error(action: &str, err: reqwest::Error) -> WildoraError {
    tracing::warn!("[HttpWildoraApi] {}: {}", action, err);
    WildoraError::network(err.status().map(|s| s.as_u16()), format!("{}: {}", action, err))
}
