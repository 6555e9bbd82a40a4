pub mod alert;
pub mod auth;
pub mod dashboard;
pub mod prediction;
pub mod user;
pub mod vlog;
