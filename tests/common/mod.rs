use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use secrecy::SecretString;
use tower::ServiceExt;
use uuid::Uuid;

use arenax_notify::app::create_router;
use arenax_notify::app_state::AppState;
use arenax_notify::config::{
    AppConfig, Config, DatabaseConfig, Environment, FcmConfig, ServerConfig,
};
use arenax_notify::db::{Booking, DatabaseError, Match, Profile, ProfileRole, Store, Venue};
use arenax_notify::push::{PushError, PushGateway};

/// In-memory stand-in for the Postgres store.
#[derive(Default)]
pub struct FakeStore {
    pub profiles: Mutex<HashMap<Uuid, Profile>>,
    pub venues: HashMap<Uuid, Venue>,
    pub bookings: HashMap<Uuid, Booking>,
    pub matches: HashMap<Uuid, Match>,
}

impl FakeStore {
    pub fn add_profile(&self, profile: Profile) {
        self.profiles.lock().unwrap().insert(profile.id, profile);
    }

    pub fn fcm_token_of(&self, profile_id: Uuid) -> Option<String> {
        self.profiles
            .lock()
            .unwrap()
            .get(&profile_id)
            .and_then(|p| p.fcm_token.clone())
    }
}

#[async_trait]
impl Store for FakeStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn profile_by_id(&self, profile_id: Uuid) -> Result<Option<Profile>, DatabaseError> {
        Ok(self.profiles.lock().unwrap().get(&profile_id).cloned())
    }

    async fn admin_profiles(&self) -> Result<Vec<Profile>, DatabaseError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.role == ProfileRole::Admin)
            .cloned()
            .collect())
    }

    async fn venue_by_id(&self, venue_id: Uuid) -> Result<Option<Venue>, DatabaseError> {
        Ok(self.venues.get(&venue_id).cloned())
    }

    async fn booking_by_id(&self, booking_id: Uuid) -> Result<Option<Booking>, DatabaseError> {
        Ok(self.bookings.get(&booking_id).cloned())
    }

    async fn match_by_id(&self, match_id: Uuid) -> Result<Option<Match>, DatabaseError> {
        Ok(self.matches.get(&match_id).cloned())
    }

    async fn set_fcm_token(&self, profile_id: Uuid, token: &str) -> Result<(), DatabaseError> {
        if let Some(profile) = self.profiles.lock().unwrap().get_mut(&profile_id) {
            profile.fcm_token = Some(token.to_string());
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SentPush {
    pub token: String,
    pub title: String,
    pub body: String,
    pub data: HashMap<String, String>,
}

/// Gateway fake that records every send and can be told to reject
/// deliveries to specific tokens.
#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<SentPush>>,
    fail_tokens: Mutex<Vec<String>>,
}

impl RecordingGateway {
    pub fn fail_for(&self, token: &str) {
        self.fail_tokens.lock().unwrap().push(token.to_string());
    }

    pub fn sent(&self) -> Vec<SentPush> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushGateway for RecordingGateway {
    async fn send(
        &self,
        token: &str,
        title: &str,
        body: &str,
        data: &HashMap<String, String>,
    ) -> Result<(), PushError> {
        if self.fail_tokens.lock().unwrap().iter().any(|t| t == token) {
            return Err(PushError::Rejected {
                status: 404,
                body: "UNREGISTERED".to_string(),
            });
        }
        self.sent.lock().unwrap().push(SentPush {
            token: token.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            data: data.clone(),
        });
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            workers: None,
        },
        database: DatabaseConfig {
            url: "postgres://localhost/unused".to_string(),
            max_connections: None,
            min_connections: None,
        },
        fcm: FcmConfig {
            project_id: "arenax-test".to_string(),
            access_token: SecretString::from("test-token"),
            endpoint: "http://localhost:0".to_string(),
        },
        app: AppConfig {
            name: "arenax-notify".to_string(),
            environment: Environment::Development,
        },
    }
}

pub fn test_app(store: Arc<FakeStore>, gateway: Arc<RecordingGateway>) -> Router {
    create_router(AppState::new(store, gateway, test_config()))
}

pub fn profile(role: ProfileRole, first: &str, last: &str, token: Option<&str>) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        role,
        fcm_token: token.map(str::to_string),
        email: format!("{first}.{last}@example.com").to_lowercase(),
    }
}

pub async fn post_json(
    app: Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
