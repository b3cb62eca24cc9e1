pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{CreateUserRequest, UserResponse};
pub use error::UserServiceError;
pub use model::{generate_api_key, User};
pub use service::UserService;
