//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionError, TransactionTrait,
};
use uuid::Uuid;

use board_core::domain::{
    ChickRecord, Comment, Company, Like, LikeState, PAGE_SIZE, Page, Post, PostSummary,
};
use board_core::error::RepoError;
use board_core::ports::{
    CommentRepository, CompanyRepository, LikeRepository, PostRepository, RecordRepository,
};

use super::entity::chick_info::{self, Entity as ChickEntity};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::company::{self, Entity as CompanyEntity};
use super::entity::like::{self, Entity as LikeEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL like repository.
pub type PostgresLikeRepository = PostgresBaseRepository<LikeEntity>;

/// PostgreSQL reference-dataset repository.
pub type PostgresRecordRepository = PostgresBaseRepository<ChickEntity>;

/// PostgreSQL company repository.
pub type PostgresCompanyRepository = PostgresBaseRepository<CompanyEntity>;

/// Listing projection row - the index query never ships post bodies.
#[derive(Debug, FromQueryResult)]
struct PostSummaryRow {
    id: Uuid,
    title: String,
    author: String,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
    view_count: i64,
    like_count: i64,
}

impl From<PostSummaryRow> for PostSummary {
    fn from(row: PostSummaryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: row.author,
            created_at: row.created_at.into(),
            view_count: row.view_count,
            like_count: row.like_count,
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_recent(&self) -> Result<Vec<PostSummary>, RepoError> {
        let rows = PostEntity::find()
            .select_only()
            .columns([
                post::Column::Id,
                post::Column::Title,
                post::Column::Author,
                post::Column::CreatedAt,
                post::Column::ViewCount,
                post::Column::LikeCount,
            ])
            .order_by_desc(post::Column::CreatedAt)
            .into_model::<PostSummaryRow>()
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn view(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        // Counter bump happens in SQL so concurrent reads never lose one.
        let updated = PostEntity::update_many()
            .col_expr(
                post::Column::ViewCount,
                Expr::col(post::Column::ViewCount).add(1),
            )
            .filter(post::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if updated.rows_affected == 0 {
            return Ok(None);
        }

        let model = PostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.map(Into::into))
    }

    async fn update_content(
        &self,
        id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, RepoError> {
        // updated_at moves on every successful edit, unchanged content included.
        let updated = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(title.trim()))
            .col_expr(post::Column::Content, Expr::value(content.trim()))
            .col_expr(post::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(post::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if updated.rows_affected == 0 {
            return Ok(None);
        }

        let model = PostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.map(Into::into))
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn add(&self, new_comment: Comment) -> Result<Comment, RepoError> {
        let active_model: comment::ActiveModel = new_comment.into();
        let model = CommentEntity::insert(active_model)
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let models = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn toggle(&self, post_id: Uuid, client_addr: &str) -> Result<LikeState, RepoError> {
        let addr = client_addr.to_owned();

        // Row flip and counter move commit together or not at all; two
        // sequential statements outside a transaction would lose updates
        // under concurrent toggles.
        self.db
            .transaction::<_, LikeState, RepoError>(move |txn| {
                Box::pin(async move {
                    let target = PostEntity::find_by_id(post_id)
                        .one(txn)
                        .await
                        .map_err(|e| RepoError::Query(e.to_string()))?
                        .ok_or(RepoError::NotFound)?;

                    let existing = LikeEntity::find_by_id((post_id, addr.clone()))
                        .one(txn)
                        .await
                        .map_err(|e| RepoError::Query(e.to_string()))?;

                    let (liked, delta): (bool, i64) = match existing {
                        Some(row) => {
                            let deleted = row
                                .delete(txn)
                                .await
                                .map_err(|e| RepoError::Query(e.to_string()))?;
                            // A racing toggle from the same address may have
                            // removed the row first; don't decrement twice.
                            if deleted.rows_affected == 0 {
                                (false, 0)
                            } else {
                                (false, -1)
                            }
                        }
                        None => {
                            let row: like::ActiveModel = Like::new(post_id, &addr).into();
                            row.insert(txn)
                                .await
                                .map_err(|e| RepoError::Query(e.to_string()))?;
                            (true, 1)
                        }
                    };

                    if delta == 0 {
                        return Ok(LikeState {
                            liked,
                            like_count: target.like_count,
                        });
                    }

                    PostEntity::update_many()
                        .col_expr(
                            post::Column::LikeCount,
                            Expr::col(post::Column::LikeCount).add(delta),
                        )
                        .filter(post::Column::Id.eq(post_id))
                        .exec(txn)
                        .await
                        .map_err(|e| RepoError::Query(e.to_string()))?;

                    let refreshed = PostEntity::find_by_id(post_id)
                        .one(txn)
                        .await
                        .map_err(|e| RepoError::Query(e.to_string()))?
                        .ok_or(RepoError::NotFound)?;

                    Ok(LikeState {
                        liked,
                        like_count: refreshed.like_count,
                    })
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(db_err) => RepoError::Connection(db_err.to_string()),
                TransactionError::Transaction(repo_err) => repo_err,
            })
    }

    async fn is_liked(&self, post_id: Uuid, client_addr: &str) -> Result<bool, RepoError> {
        let row = LikeEntity::find_by_id((post_id, client_addr.to_owned()))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl RecordRepository for PostgresRecordRepository {
    async fn page(&self, page: u64) -> Result<Page<ChickRecord>, RepoError> {
        let paginator = ChickEntity::find()
            .order_by_asc(chick_info::Column::Id)
            .paginate(self.db.as_ref(), PAGE_SIZE);

        let total_items = paginator
            .num_items()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        // Pages past the end come back empty, not as an error.
        let items = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Page::new(
            items.into_iter().map(ChickRecord::from).collect(),
            page,
            PAGE_SIZE,
            total_items,
        ))
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn top_by_employees(&self, limit: u64) -> Result<Vec<Company>, RepoError> {
        let models = CompanyEntity::find()
            .order_by_desc(company::Column::EmployeesCount)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
