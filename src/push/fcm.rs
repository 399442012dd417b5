use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::collections::HashMap;

use super::{PushError, PushGateway};
use crate::config::FcmConfig;

// FCM HTTP v1 message envelope.
// See: https://firebase.google.com/docs/reference/fcm/rest/v1/projects.messages#Message
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    message: Message<'a>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    token: &'a str,
    notification: Notification<'a>,
    data: &'a HashMap<String, String>,
}

#[derive(Debug, Serialize)]
struct Notification<'a> {
    title: &'a str,
    body: &'a str,
}

pub struct FcmClient {
    http: Client,
    url: String,
    access_token: SecretString,
}

impl FcmClient {
    pub fn new(endpoint: &str, project_id: &str, access_token: SecretString) -> Self {
        Self {
            http: Client::new(),
            url: format!(
                "{}/v1/projects/{}/messages:send",
                endpoint.trim_end_matches('/'),
                project_id
            ),
            access_token,
        }
    }

    pub fn from_config(config: &FcmConfig) -> Self {
        Self::new(
            &config.endpoint,
            &config.project_id,
            config.access_token.clone(),
        )
    }
}

#[async_trait]
impl PushGateway for FcmClient {
    async fn send(
        &self,
        token: &str,
        title: &str,
        body: &str,
        data: &HashMap<String, String>,
    ) -> Result<(), PushError> {
        let request = SendRequest {
            message: Message {
                token,
                notification: Notification { title, body },
                data,
            },
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(self.access_token.expose_secret())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::Rejected { status, body });
        }

        Ok(())
    }
}
