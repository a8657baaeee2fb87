pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountView, NewAccount},
    display_name::DisplayName,
    email::{Email, EmailError},
    password::{Password, PasswordError},
    password_hash::{PasswordHash, PasswordHashError},
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{PasswordHasher, PasswordHasherError},
};
