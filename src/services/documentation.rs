use utoipa::OpenApi;

#[derive(OpenApi)]
/// OpenAPI specification for the REST endpoints served next to `/graphql`.
#[openapi(
    paths(crate::routes::health::healthcheck),
    components(schemas(crate::dto::health::HealthResponse)),
    tags((name = "health", description = "Health check endpoints"))
)]
pub struct ApiDoc;
