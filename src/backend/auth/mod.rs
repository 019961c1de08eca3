//! Authentication Module
//!
//! This module handles user registration, credential checks and access
//! tokens.
//!
//! # Architecture
//!
//! - **`passwords`** - bcrypt hashing and verification
//! - **`sessions`** - JWT token generation and validation
//! - **`users`** - User model and the in-memory store
//! - **`handlers`** - HTTP handlers for the user API
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── passwords.rs    - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── users.rs        - User model and store
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after `SECURITY_ACCESS_TOKEN_EXPIRE_MINUTES`
//! - Invalid credentials return 401 (no information leakage)

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// User model and store
pub mod users;

/// HTTP handlers for the user API
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{
    list_users, login_for_access_token, logout, read_users_me, register_user, Token, UserOut,
    UserRegister,
};
pub use sessions::{Claims, TokenKeys};
pub use users::{authenticate_user, UserInDb, UserStore};
