use anyhow::{Context, Result};
use async_trait::async_trait;

use super::BaseMirrorStore;

/// Firebase Realtime Database client implementing BaseMirrorStore.
///
/// Talks to the RTDB REST API: `PUT/PATCH/DELETE {base_url}/{path}.json`.
/// An optional database secret / ID token is appended as the `auth` query
/// parameter.
pub struct FirebaseRtdbClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl FirebaseRtdbClient {
    pub fn new(base_url: String, auth_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
        }
    }

    fn url_for(&self, path: &str) -> String {
        let mut url = format!("{}/{}.json", self.base_url, path.trim_matches('/'));
        if let Some(token) = &self.auth_token {
            url.push_str(&format!("?auth={}", token));
        }
        url
    }
}

#[async_trait]
impl BaseMirrorStore for FirebaseRtdbClient {
    async fn set(&self, path: &str, value: serde_json::Value) -> Result<()> {
        self.client
            .put(self.url_for(path))
            .json(&value)
            .send()
            .await
            .context("Firebase set request failed")?
            .error_for_status()
            .context("Firebase set returned an error status")?;
        Ok(())
    }

    async fn update(&self, path: &str, value: serde_json::Value) -> Result<()> {
        self.client
            .patch(self.url_for(path))
            .json(&value)
            .send()
            .await
            .context("Firebase update request failed")?
            .error_for_status()
            .context("Firebase update returned an error status")?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.client
            .delete(self.url_for(path))
            .send()
            .await
            .context("Firebase delete request failed")?
            .error_for_status()
            .context("Firebase delete returned an error status")?;
        Ok(())
    }
}
