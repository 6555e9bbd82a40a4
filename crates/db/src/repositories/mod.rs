//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod alert_repo;
pub mod prediction_repo;
pub mod stats_repo;
pub mod user_repo;
pub mod vlog_comment_repo;
pub mod vlog_repo;

pub use alert_repo::AlertRepo;
pub use prediction_repo::PredictionRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
pub use vlog_comment_repo::VlogCommentRepo;
pub use vlog_repo::VlogRepo;
