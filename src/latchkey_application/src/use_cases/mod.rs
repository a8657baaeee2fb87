pub mod check_email;
pub mod login;
pub mod signup;

pub use check_email::CheckEmailUseCase;
pub use login::LoginUseCase;
pub use signup::SignupUseCase;
