pub mod domain;
pub mod ports;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, normalize_email},
    password::Password,
    user::{User, UserError, UserSummary},
    user_id::UserId,
    user_name::UserName,
};

pub use ports::repositories::{UserStore, UserStoreError};

pub use validation::{is_valid_age, is_valid_email, is_valid_password};
