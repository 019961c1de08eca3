//! Route paths shared by the router, the templates' scripts and tests.

pub const API_USER_REGISTER: &str = "/users/register";
pub const API_USERS: &str = "/users";
pub const API_USERS_ME: &str = "/users/me";
pub const API_TOKEN: &str = "/token";
pub const API_LOGOUT: &str = "/logout";

pub const PAGE_INDEX: &str = "/";
pub const PAGE_LOGIN: &str = "/login";
pub const PAGE_REGISTER: &str = "/register";

pub const FAVICON: &str = "/favicon.ico";
pub const STATIC_PREFIX: &str = "/static";
