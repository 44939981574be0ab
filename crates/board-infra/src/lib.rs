//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//! Everything in here talks to PostgreSQL through SeaORM.

pub mod database;

pub use database::{
    DatabaseConfig, PostgresCommentRepository, PostgresCompanyRepository, PostgresLikeRepository,
    PostgresPostRepository, PostgresRecordRepository,
};
