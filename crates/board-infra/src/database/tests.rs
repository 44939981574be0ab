#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use uuid::Uuid;

    use board_core::domain::Post;
    use board_core::error::RepoError;
    use board_core::ports::{
        BaseRepository, LikeRepository, PostRepository, RecordRepository,
    };

    use crate::database::entity::{chick_info, like, post};
    use crate::database::postgres_repo::{
        PostgresLikeRepository, PostgresPostRepository, PostgresRecordRepository,
    };

    fn post_model(id: Uuid, view_count: i64, like_count: i64) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            title: "Test Post".to_owned(),
            author: "alice".to_owned(),
            content: "Content".to_owned(),
            created_at: now.into(),
            updated_at: None,
            view_count,
            like_count,
        }
    }

    fn chick_model(id: i64) -> chick_info::Model {
        chick_info::Model {
            id,
            breed: "leghorn".to_owned(),
            gender: "f".to_owned(),
            weight_g: 42,
            arrived_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(post_id, 0, 0)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.id, post_id);
    }

    #[tokio::test]
    async fn test_view_bumps_counter_and_returns_post() {
        let post_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([vec![post_model(post_id, 1, 0)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let viewed = repo.view(post_id).await.unwrap().unwrap();
        assert_eq!(viewed.view_count, 1);
    }

    #[tokio::test]
    async fn test_view_of_missing_post_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.view(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_of_missing_post_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo
            .update_content(Uuid::new_v4(), "t", "c")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_sets_updated_at() {
        let post_id = Uuid::new_v4();
        let now = chrono::Utc::now();

        let mut edited = post_model(post_id, 0, 0);
        edited.title = "New title".to_owned();
        edited.content = "New content".to_owned();
        edited.updated_at = Some(now.into());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([vec![edited]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo
            .update_content(post_id, "New title", "New content")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result.title, "New title");
        assert!(result.updated_at.is_some());

        // The UPDATE itself must stamp updated_at, not just the refetch.
        let log = std::sync::Arc::into_inner(repo.db)
            .unwrap()
            .into_transaction_log();
        assert!(format!("{:?}", log[0]).contains("updated_at"));
    }

    #[tokio::test]
    async fn test_delete_post_removes_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_of_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let err = BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_toggle_like_adds_row_and_increments() {
        let post_id = Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // post exists, nothing liked yet
            .append_query_results([vec![post_model(post_id, 0, 0)]])
            .append_query_results([Vec::<like::Model>::new()])
            // INSERT .. RETURNING the new like row
            .append_query_results([vec![like::Model {
                post_id,
                client_addr: "1.1.1.1".to_owned(),
                created_at: now.into(),
            }]])
            // refetch after the counter update
            .append_query_results([vec![post_model(post_id, 0, 1)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresLikeRepository::new(db);

        let state = repo.toggle(post_id, "1.1.1.1").await.unwrap();
        assert!(state.liked);
        assert_eq!(state.like_count, 1);
    }

    #[tokio::test]
    async fn test_toggle_like_removes_row_and_decrements() {
        let post_id = Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(post_id, 0, 1)]])
            .append_query_results([vec![like::Model {
                post_id,
                client_addr: "1.1.1.1".to_owned(),
                created_at: now.into(),
            }]])
            .append_query_results([vec![post_model(post_id, 0, 0)]])
            .append_exec_results([
                // delete of the like row
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                // counter decrement
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let repo = PostgresLikeRepository::new(db);

        let state = repo.toggle(post_id, "1.1.1.1").await.unwrap();
        assert!(!state.liked);
        assert_eq!(state.like_count, 0);
    }

    #[tokio::test]
    async fn test_toggle_like_on_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresLikeRepository::new(db);

        let err = repo.toggle(Uuid::new_v4(), "1.1.1.1").await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_reference_page_metadata() {
        // 23 rows total, page 3 holds the last 3
        let count_row = BTreeMap::from([("num_items", Value::BigInt(Some(23)))]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row]])
            .append_query_results([vec![chick_model(21), chick_model(22), chick_model(23)]])
            .into_connection();

        let repo = PostgresRecordRepository::new(db);

        let page = repo.page(3).await.unwrap();
        assert_eq!(page.total_items, 23);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.page, 3);
    }

    #[tokio::test]
    async fn test_reference_page_past_end_is_empty() {
        let count_row = BTreeMap::from([("num_items", Value::BigInt(Some(23)))]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row]])
            .append_query_results([Vec::<chick_info::Model>::new()])
            .into_connection();

        let repo = PostgresRecordRepository::new(db);

        let page = repo.page(4).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
    }
}
