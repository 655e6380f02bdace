//! # Enrollment - User Registration Library
//!
//! This is a facade crate that re-exports all public APIs from the enrollment components.
//! Use this crate to get access to registration and login in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! enrollment = { path = "../enrollment" }
//! ```
//!
//! ## Structure
//!
//! - **Validators**: `is_valid_email`, `is_valid_password`, `is_valid_age`
//! - **Core domain types**: `Email`, `Password`, `UserName`, `User`, etc.
//! - **Repository traits**: `UserStore`
//! - **Service**: `UserService` - validation and uniqueness on top of a store
//! - **API**: `UserApi` - uniform `{success, data?, error?}` responses
//! - **Adapters**: `HashMapUserStore`, HTTP routes, configuration
//! - **HTTP service**: `EnrollmentService` - axum router for the API

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, value objects and validators
pub mod core {
    pub use enrollment_core::*;
}

// Re-export most commonly used core types at the root level
pub use enrollment_core::{
    Email, Password, User, UserError, UserId, UserName, UserSummary, is_valid_age,
    is_valid_email, is_valid_password, normalize_email,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use enrollment_core::{UserStore, UserStoreError};
}

pub use core::{UserStore, UserStoreError};

// ============================================================================
// Service (Application Layer)
// ============================================================================

pub use enrollment_application::{CreateUserError, UserService};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Request/response adapter
    pub mod api {
        pub use enrollment_adapters::api::*;
    }

    /// HTTP route handlers
    pub mod http {
        pub use enrollment_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use enrollment_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use enrollment_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use enrollment_adapters::{
    api::{ApiError, ApiResponse, LoginRequest, RegistrationRequest, UserApi},
    config::EnrollmentSetting,
    persistence::HashMapUserStore,
};

// ============================================================================
// HTTP Service (Main Entry Point)
// ============================================================================

pub use enrollment_service::{EnrollmentService, init_tracing, shutdown_signal};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
