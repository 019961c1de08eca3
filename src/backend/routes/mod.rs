//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs             - Module exports and documentation
//! ├── paths.rs           - Route path constants
//! ├── router.rs          - Main router creation
//! ├── api_routes.rs      - JSON API routes
//! └── frontend_routes.rs - Pages and static files
//! ```
//!
//! # Route Types
//!
//! ## API Routes
//!
//! - `POST /users/register` - User registration
//! - `GET /users` - List users
//! - `GET /users/me` - Get current user
//! - `POST /token` - Login
//! - `POST /logout` - Logout
//!
//! ## Frontend Routes
//!
//! - `/` - Home page
//! - `/login` - Login page
//! - `/register` - Registration page
//! - `/favicon.ico`, `/static/*` - Static files

/// Route path constants
pub mod paths;

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

/// Page and static file routes
pub mod frontend_routes;

// Re-export commonly used functions
pub use router::create_router;
