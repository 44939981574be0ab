//! HTTP handlers and route configuration.

mod comments;
mod companies;
mod health;
mod likes;
mod posts;
mod records;

use actix_web::{HttpRequest, web};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::get().to(posts::detail))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/comments", web::post().to(comments::add))
                    .route("/{id}/like", web::post().to(likes::toggle)),
            )
            .route("/records", web::get().to(records::list))
            .route("/companies/summary", web::get().to(companies::summary)),
    );
}

/// Address identifying the caller for like semantics.
/// Honors `Forwarded`/`X-Forwarded-For` so proxied deployments keep
/// one-like-per-client behavior.
pub(crate) fn client_addr(req: &HttpRequest) -> Option<String> {
    req.connection_info()
        .realip_remote_addr()
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use sea_orm::{DatabaseBackend, DbConn, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use board_shared::dto::{LikeResponse, PageResponse, PostResponse, RecordResponse};

    use super::configure_routes;
    use crate::state::AppState;
    use board_infra::database::entity::{like, post};

    async fn send(
        db: DbConn,
        req: test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(db)))
                .configure(configure_routes),
        )
        .await;
        test::call_service(&app, req.to_request()).await
    }

    fn post_model(id: Uuid, view_count: i64, like_count: i64) -> post::Model {
        post::Model {
            id,
            title: "A".to_owned(),
            author: "B".to_owned(),
            content: "C".to_owned(),
            created_at: chrono::Utc::now().into(),
            updated_at: None,
            view_count,
            like_count,
        }
    }

    #[actix_web::test]
    async fn create_with_blank_title_is_rejected_without_write() {
        // No mock results appended: any statement would fail the test.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let req = test::TestRequest::post().uri("/api/posts").set_json(
            serde_json::json!({"title": "  ", "author": "B", "content": "C"}),
        );
        let resp = send(db, req).await;

        assert_eq!(resp.status(), 422);
    }

    #[actix_web::test]
    async fn create_valid_post_returns_created() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(Uuid::new_v4(), 0, 0)]])
            .into_connection();

        let req = test::TestRequest::post().uri("/api/posts").set_json(
            serde_json::json!({"title": "A", "author": "B", "content": "C"}),
        );
        let resp = send(db, req).await;

        assert_eq!(resp.status(), 201);
        let body: PostResponse = test::read_body_json(resp).await;
        assert_eq!(body.title, "A");
        assert_eq!(body.view_count, 0);
    }

    #[actix_web::test]
    async fn detail_of_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let req = test::TestRequest::get().uri(&format!("/api/posts/{}", Uuid::new_v4()));
        let resp = send(db, req).await;

        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn toggle_like_reports_new_state() {
        let post_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(post_id, 2, 0)]])
            .append_query_results([Vec::<like::Model>::new()])
            .append_query_results([vec![like::Model {
                post_id,
                client_addr: "9.9.9.9".to_owned(),
                created_at: chrono::Utc::now().into(),
            }]])
            .append_query_results([vec![post_model(post_id, 2, 1)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{post_id}/like"))
            .peer_addr("9.9.9.9:40000".parse().unwrap());
        let resp = send(db, req).await;

        assert_eq!(resp.status(), 200);
        let body: LikeResponse = test::read_body_json(resp).await;
        assert!(body.liked);
        assert_eq!(body.like_count, 1);
    }

    #[actix_web::test]
    async fn health_reports_board_service() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let req = test::TestRequest::get().uri("/api/health");
        let resp = send(db, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "board-api");
    }

    #[actix_web::test]
    async fn delete_post_returns_no_content() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let req =
            test::TestRequest::delete().uri(&format!("/api/posts/{}", Uuid::new_v4()));
        let resp = send(db, req).await;

        assert_eq!(resp.status(), 204);
    }

    #[actix_web::test]
    async fn delete_of_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let req =
            test::TestRequest::delete().uri(&format!("/api/posts/{}", Uuid::new_v4()));
        let resp = send(db, req).await;

        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn records_default_to_first_page() {
        let count_row = std::collections::BTreeMap::from([(
            "num_items",
            sea_orm::Value::BigInt(Some(0)),
        )]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row]])
            .append_query_results([Vec::<board_infra::database::entity::chick_info::Model>::new()])
            .into_connection();

        let req = test::TestRequest::get().uri("/api/records");
        let resp = send(db, req).await;

        assert_eq!(resp.status(), 200);
        let body: PageResponse<RecordResponse> = test::read_body_json(resp).await;
        assert_eq!(body.page, 1);
        assert_eq!(body.total_pages, 0);
        assert!(body.items.is_empty());
    }

    #[actix_web::test]
    async fn malformed_page_param_falls_back_to_first_page() {
        let count_row = std::collections::BTreeMap::from([(
            "num_items",
            sea_orm::Value::BigInt(Some(0)),
        )]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row]])
            .append_query_results([Vec::<board_infra::database::entity::chick_info::Model>::new()])
            .into_connection();

        let req = test::TestRequest::get().uri("/api/records?page=abc");
        let resp = send(db, req).await;

        assert_eq!(resp.status(), 200);
        let body: PageResponse<RecordResponse> = test::read_body_json(resp).await;
        assert_eq!(body.page, 1);
    }
}
