//! Request Extractors
//!
//! Body extractors that run a type's [`FromBody`](crate::shared::FromBody)
//! rules and reject with a `422` listing every failed rule.
//!
//! - **`ValidatedJson`** - `application/json` bodies
//! - **`ValidatedForm`** - `application/x-www-form-urlencoded` bodies

pub mod validated;

pub use validated::{ValidatedForm, ValidatedJson};
