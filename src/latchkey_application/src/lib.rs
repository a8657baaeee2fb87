pub mod error;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use error::AuthError;
pub use use_cases::{CheckEmailUseCase, LoginUseCase, SignupUseCase};
