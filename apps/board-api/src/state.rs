//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbConn;

use board_core::ports::{
    CommentRepository, CompanyRepository, LikeRepository, PostRepository, RecordRepository,
};
use board_infra::database::{
    PostgresCommentRepository, PostgresCompanyRepository, PostgresLikeRepository,
    PostgresPostRepository, PostgresRecordRepository,
};

/// Shared application state. One handle per port; all of them borrow
/// connections from the same pool.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub records: Arc<dyn RecordRepository>,
    pub companies: Arc<dyn CompanyRepository>,
}

impl AppState {
    /// Wire the PostgreSQL repositories onto a connection.
    ///
    /// Taking `DbConn` rather than a config keeps this constructible from a
    /// mock connection in tests.
    pub fn new(db: DbConn) -> Self {
        tracing::info!("Application state initialized");

        let db = Arc::new(db);

        Self {
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db.clone())),
            likes: Arc::new(PostgresLikeRepository::new(db.clone())),
            records: Arc::new(PostgresRecordRepository::new(db.clone())),
            companies: Arc::new(PostgresCompanyRepository::new(db)),
        }
    }
}
