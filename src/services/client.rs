// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Activity backend client.
//!
//! Handles:
//! - Listing the signed-in user's activities
//! - Fetching one activity with its recommendation bundle
//! - Creating activities (validated before anything is sent)
//! - Mapping HTTP failures onto [`ClientError`] kinds

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::models::{Activity, NewActivity};
use crate::services::session::{Credential, Session};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Header the gateway uses to scope activities to a user.
pub const USER_ID_HEADER: &str = "X-User-ID";

/// Operations the views need from the activity backend.
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// All activities of the signed-in user.
    async fn list_activities(&self) -> Result<Vec<Activity>>;

    /// One activity, including the recommendation bundle once it exists.
    async fn get_activity(&self, id: &str) -> Result<Activity>;

    /// Create an activity. The returned record may not have a
    /// recommendation bundle yet.
    async fn create_activity(&self, input: &NewActivity) -> Result<Activity>;
}

/// HTTP implementation of [`ActivityApi`].
#[derive(Clone)]
pub struct HttpActivityClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HttpActivityClient {
    /// Create a client for the configured backend, authenticated through `session`.
    pub fn new(config: &Config, session: Session) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn activities_url(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    fn authorized(
        &self,
        request: reqwest::RequestBuilder,
        credential: &Credential,
    ) -> reqwest::RequestBuilder {
        request
            .bearer_auth(credential.access_token())
            .header(USER_ID_HEADER, credential.user().user_id.as_str())
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let credential = self.session.credential()?;

        let response = self
            .authorized(self.http.get(url), &credential)
            .send()
            .await?;

        check_response_json(response).await
    }
}

#[async_trait]
impl ActivityApi for HttpActivityClient {
    async fn list_activities(&self) -> Result<Vec<Activity>> {
        let activities: Vec<Activity> = self.get_json(&self.activities_url()).await?;
        tracing::debug!(count = activities.len(), "Fetched activities");
        Ok(activities)
    }

    async fn get_activity(&self, id: &str) -> Result<Activity> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ClientError::NotFound("Empty activity id".to_string()));
        }

        let url = format!("{}/{}", self.activities_url(), urlencoding::encode(id));
        self.get_json(&url).await.map_err(|e| match e {
            ClientError::NotFound(_) => ClientError::NotFound(format!("Activity {}", id)),
            other => other,
        })
    }

    async fn create_activity(&self, input: &NewActivity) -> Result<Activity> {
        input.check()?;
        let credential = self.session.credential()?;

        let response = self
            .authorized(self.http.post(self.activities_url()), &credential)
            .json(input)
            .send()
            .await?;

        let activity: Activity = check_response_json(response).await?;
        tracing::info!(
            activity_id = %activity.id,
            activity_type = %input.activity_type,
            "Activity created"
        );
        Ok(activity)
    }
}

/// Check response status and parse the JSON body.
async fn check_response_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_for_status(status, &body));
    }

    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::Unknown(format!("JSON parse error: {}", e)))
}

fn error_for_status(status: StatusCode, body: &str) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            tracing::warn!(status = %status, "Backend rejected credential");
            ClientError::Auth(format!("HTTP {}", status))
        }
        StatusCode::NOT_FOUND => ClientError::NotFound(format!("HTTP {}: {}", status, body)),
        _ => ClientError::Network(format!("HTTP {}: {}", status, body)),
    }
}
