//! Feature modules. Each one has a `controller` (HTTP handlers), a
//! `service` (logic over the stores) and a `router`.

pub mod admin;
pub mod auth;
pub mod properties;
pub mod users;
