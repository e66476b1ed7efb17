pub mod application;
pub mod auth;

pub use application::{Application, ApplicationStatus, NewApplication, StatusUpdateRequest};
pub use auth::{CurrentUser, LoginRequest, RegisterRequest, Role, TokenPair};
