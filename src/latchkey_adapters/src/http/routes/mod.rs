pub mod check_email;
pub mod error;
pub mod health;
pub mod login;
pub mod signup;

pub use check_email::{CheckEmailRequest, CheckEmailResponse, check_email};
pub use error::{AuthApiError, ErrorResponse};
pub use health::{HealthResponse, ServiceDescriptor, health, root};
pub use login::{LoginRequest, login};
pub use signup::{SignupRequest, signup};
