pub mod access;
pub mod auth;
pub mod navigation;
