//! Database connection management and repositories.

mod connections;
mod postgres_base;
pub mod postgres_repo;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use postgres_repo::{
    PostgresCommentRepository, PostgresCompanyRepository, PostgresLikeRepository,
    PostgresPostRepository, PostgresRecordRepository,
};

#[cfg(test)]
mod tests;
