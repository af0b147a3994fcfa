use super::api;

use axum::Router;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::status::get_status,
        api::quizzes::list_quizzes,
        api::quizzes::list_published_quizzes,
        api::quizzes::create_quiz,
        api::quizzes::get_quiz,
        api::quizzes::publish_quiz,
    ),
    tags(
        (name = "quizzes", description = "Create, list and publish quizzes"),
        (name = "util", description = "Health checks"),
    )
)]
pub(crate) struct ApiDoc;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        // rapidoc reuses the document served for swagger ui
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_quiz_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert!(paths.contains(&"/api/quizzes"));
        assert!(paths.contains(&"/api/quizzes/published"));
        assert!(paths.contains(&"/api/quizzes/{quiz_id}"));
        assert!(paths.contains(&"/api/quizzes/{quiz_id}/publish"));
        assert!(paths.contains(&"/api/status"));
    }
}
