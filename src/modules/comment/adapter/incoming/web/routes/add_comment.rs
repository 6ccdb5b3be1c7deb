use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::CommentResponse;
use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    comment::application::ports::incoming::use_cases::{
        AddCommentCommand, AddCommentCommandError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub content: String,
    pub parent_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = "Comments",
    params(("post_id" = String, Path, description = "Post id")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment stored", body = CommentResponse),
        (status = 400, description = "Empty content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/posts/{post_id}/comments")]
pub async fn add_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<AddCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match AddCommentCommand::new(
        path.into_inner(),
        user.user_id,
        payload.content,
        payload.parent_id,
    ) {
        Ok(cmd) => cmd,
        Err(AddCommentCommandError::EmptyContent) => {
            return ApiResponse::bad_request("EMPTY_CONTENT", "Comment content cannot be empty")
        }
        Err(AddCommentCommandError::EmptyPostId) => {
            return ApiResponse::bad_request("INVALID_POST_ID", "Post id cannot be empty")
        }
    };

    match data.comment.add.execute(command).await {
        Some(comment) => ApiResponse::created(CommentResponse::from(comment)),
        None => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{bearer, identity_data, StubIdentityProvider},
        stubs::StubAddCommentUseCase,
    };

    #[actix_web::test]
    async fn creates_comment_for_caller() {
        // Arrange
        let stub = StubAddCommentUseCase::echo();
        let state = TestAppStateBuilder::default()
            .with_add_comment(stub.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(identity_data(StubIdentityProvider::user("u9", None)))
                .service(add_comment_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::post()
            .uri("/api/posts/p1/comments")
            .insert_header(bearer())
            .set_json(json!({ "content": "  loved it ", "parentId": "c1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::CREATED);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["content"], "loved it");
        assert_eq!(json["data"]["authorId"], "u9");
        assert_eq!(json["data"]["postId"], "p1");
        assert_eq!(json["data"]["parentId"], "c1");
        assert_eq!(stub.calls(), 1);
    }

    #[actix_web::test]
    async fn blank_content_is_rejected_before_use_case() {
        let stub = StubAddCommentUseCase::echo();
        let state = TestAppStateBuilder::default()
            .with_add_comment(stub.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(identity_data(StubIdentityProvider::user("u9", None)))
                .service(add_comment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts/p1/comments")
            .insert_header(bearer())
            .set_json(json!({ "content": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "EMPTY_CONTENT");
        assert_eq!(stub.calls(), 0);
    }

    #[actix_web::test]
    async fn anonymous_caller_is_unauthorized() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(identity_data(StubIdentityProvider::user("u9", None)))
                .service(add_comment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts/p1/comments")
            .set_json(json!({ "content": "hi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn storage_failure_is_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_add_comment(StubAddCommentUseCase::failing())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(identity_data(StubIdentityProvider::user("u9", None)))
                .service(add_comment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts/p1/comments")
            .insert_header(bearer())
            .set_json(json!({ "content": "hi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
