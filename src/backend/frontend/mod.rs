//! Frontend Module
//!
//! Server-rendered pages for the browser frontend. The pages are thin:
//! forms post to the JSON API from `static/js/app.js`, which also maps
//! validation errors onto the form fields.
//!
//! - **`templates`** - Template compilation and rendering
//! - **`handlers`** - `GET /`, `GET /login` and `GET /register`

pub mod handlers;
pub mod templates;

pub use handlers::{index, login_page, register_page, PageSettings};
pub use templates::Templates;
