//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the user API.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - Token (login) handler
//! ├── me.rs       - Get current user handler
//! ├── listing.rs  - User listing handler
//! └── logout.rs   - Session cookie removal
//! ```
//!
//! # Handlers
//!
//! - **`register_user`** - POST /users/register - User registration
//! - **`login_for_access_token`** - POST /token - User authentication
//! - **`read_users_me`** - GET /users/me - Get current user info
//! - **`list_users`** - GET /users - List registered users
//! - **`logout`** - POST /logout - Clear the session cookie
//!
//! # Authentication Flow
//!
//! 1. **Register**: User submits the registration form → User stored
//! 2. **Login**: User submits email and password → JWT returned and set as cookie
//! 3. **Get Me**: User sends the JWT as bearer token or cookie → User info returned

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// User listing handler
pub mod listing;

/// Logout handler
pub mod logout;

// Re-export commonly used types
pub use types::{PasswordForm, Token, UserOut, UserRegister};

// Re-export handlers
pub use listing::list_users;
pub use login::{login_for_access_token, INCORRECT_CREDENTIALS};
pub use logout::logout;
pub use me::read_users_me;
pub use register::register_user;
