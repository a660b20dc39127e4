use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use promptvault::config::Config;
use promptvault::seed;
use promptvault::storage::MemoryStorage;
use promptvault::store::EntityStore;

/// A running test server instance backed by in-memory storage.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        organization_code: Option<&str>,
    ) -> (Value, StatusCode) {
        let mut body = json!({ "name": name, "email": email, "password": password });
        if let Some(code) = organization_code {
            body["organizationCode"] = json!(code);
        }
        let resp = self
            .client
            .post(self.url("/api/v1/auth/signup"))
            .json(&body)
            .send()
            .await
            .expect("signup request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn login(&self, email: &str, password: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/v1/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Sign up a default user, return their session token.
    pub async fn bootstrap(&self) -> String {
        let (body, status) = self
            .signup("Admin", "admin@test.com", "password123", None)
            .await;
        assert_eq!(status, StatusCode::OK, "bootstrap signup failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Create a prompt, return the prompt JSON.
    pub async fn create_prompt(
        &self,
        token: &str,
        title: &str,
        content: &str,
        is_public: bool,
    ) -> Value {
        let (body, status) = self
            .post_auth(
                "/api/v1/prompts",
                token,
                &json!({
                    "title": title,
                    "description": format!("{title} description"),
                    "content": content,
                    "isPublic": is_public,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create prompt non-200: {body}");
        body["prompt"].clone()
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn put_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("put request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        data_dir: "unused".into(),
        jwt_secret: "test-jwt-secret-that-is-long-enough".to_string(),
        session_ttl_hours: 24,
        seed_demo_data: false,
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app over an empty in-memory store.
pub async fn spawn_app() -> TestApp {
    spawn(false).await
}

/// Spawn a test app with the demo organization and sample prompts seeded.
pub async fn spawn_app_seeded() -> TestApp {
    spawn(true).await
}

async fn spawn(seeded: bool) -> TestApp {
    let storage = Arc::new(MemoryStorage::new());
    let store = EntityStore::open(storage)
        .await
        .expect("failed to open entity store");

    if seeded {
        seed::ensure_demo_data(&store)
            .await
            .expect("failed to seed demo data");
    }

    let app = promptvault::build_app(store, test_config());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}
