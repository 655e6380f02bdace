use std::future::Future;

use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::post,
};
use enrollment_adapters::{
    api::UserApi,
    config::AllowedOrigins,
    http::routes::{login, register},
};
use enrollment_application::UserService;
use enrollment_core::UserStore;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// HTTP front for user registration and login
pub struct EnrollmentService {
    router: Router,
}

impl EnrollmentService {
    /// Create a new EnrollmentService backed by the given store
    ///
    /// # Arguments
    /// * `user_store` - Store for user records (must be Clone)
    ///
    /// # Note on Architecture
    /// Stores implement Clone via internal Arc<RwLock> so every request
    /// handler sees the same data.
    pub fn new<U>(user_store: U) -> Self
    where
        U: UserStore + Clone + 'static,
    {
        Self::from_api(UserApi::new(UserService::new(user_store)))
    }

    pub fn from_api<U>(api: UserApi<U>) -> Self
    where
        U: UserStore + Clone + 'static,
    {
        let router = Router::new()
            .route("/register", post(register::<U>))
            .route("/login", post(login::<U>))
            .with_state(api);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the EnrollmentService into a router that can be nested into
    /// another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server until `shutdown` resolves
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    /// * `shutdown` - Future that triggers graceful shutdown
    pub async fn run_standalone<F>(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
        shutdown: F,
    ) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Enrollment service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
