pub mod account;
pub mod display_name;
pub mod email;
pub mod password;
pub mod password_hash;
