//! # Latchkey - Credential Service Library
//!
//! This is a facade crate that re-exports all public APIs from the credential service components.
//! Use this crate to get access to account registration and verification in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `PasswordHash`, `Account`, `AccountView`
//! - **Ports**: `AccountStore`, `PasswordHasher`
//! - **Use cases**: `CheckEmailUseCase`, `SignupUseCase`, `LoginUseCase`
//! - **Adapters**: `HashMapAccountStore`, `Argon2PasswordHasher`, settings and HTTP routes
//! - **Service**: `AuthService` - The main entry point for the HTTP service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use latchkey_core::*;
}

// Re-export most commonly used core types at the root level
pub use latchkey_core::{
    Account, AccountView, DisplayName, Email, EmailError, NewAccount, Password, PasswordError,
    PasswordHash, PasswordHashError,
};

// ============================================================================
// Ports
// ============================================================================

/// Store and hasher trait definitions
pub mod ports {
    pub use latchkey_core::{AccountStore, AccountStoreError, PasswordHasher, PasswordHasherError};
}

pub use latchkey_core::{AccountStore, AccountStoreError, PasswordHasher, PasswordHasherError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use latchkey_application::*;
}

pub use latchkey_application::{AuthError, CheckEmailUseCase, LoginUseCase, SignupUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use latchkey_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use latchkey_adapters::persistence::*;
    }

    /// Password hashing implementations
    pub mod hashing {
        pub use latchkey_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use latchkey_adapters::config::*;
    }
}

pub use latchkey_adapters::{hashing::Argon2PasswordHasher, persistence::HashMapAccountStore};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use latchkey_auth_service::AuthService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use tokio;
