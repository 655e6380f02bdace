use enrollment_adapters::{
    api::ApiResponse,
    config::{self, AllowedOrigins},
    persistence::HashMapUserStore,
};
use enrollment_core::{UserStore, UserSummary, normalize_email};
use enrollment_service::EnrollmentService;
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const VALID_PASSWORD: &str = "SecurePass123!";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub user_store: HashMapUserStore,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_allowed_origins(None).await
    }

    pub async fn with_allowed_origins(allowed_origins: Option<AllowedOrigins>) -> Self {
        let user_store = HashMapUserStore::new();
        let service = EnrollmentService::new(user_store.clone());

        let listener = TcpListener::bind(config::test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(
            listener,
            allowed_origins,
            std::future::pending(),
        ));

        Self {
            address,
            http_client: reqwest::Client::new(),
            user_store,
        }
    }

    pub async fn post_register<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/register", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> UserSummary {
        let response = self
            .post_register(&json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        read_body(response)
            .await
            .data
            .expect("registration response carries data")
    }

    pub async fn stored_user_count(&self) -> usize {
        self.user_store.len().await
    }

    pub async fn is_registered(&self, email: &str) -> bool {
        self.user_store
            .get_user_by_email(&normalize_email(email))
            .await
            .unwrap()
            .is_some()
    }
}

pub async fn read_body(response: reqwest::Response) -> ApiResponse<UserSummary> {
    response
        .json::<ApiResponse<UserSummary>>()
        .await
        .expect("Could not deserialize response body")
}

pub async fn read_raw_body(response: reqwest::Response) -> Value {
    response
        .json::<Value>()
        .await
        .expect("Could not deserialize response body")
}

pub fn random_name() -> String {
    Name().fake()
}

pub fn random_email() -> String {
    SafeEmail().fake()
}
