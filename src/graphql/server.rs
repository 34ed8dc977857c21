use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::error::Result;

use super::schema::ChirpSchema;

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/")))
}

/// Serve the schema over HTTP: GraphQL POST and playground GET, both at `/`.
pub async fn run_server(schema: ChirpSchema, host: &str, port: u16) -> Result<()> {
    let app = Router::new().route(
        "/",
        get(graphql_playground).post_service(GraphQL::new(schema)),
    );

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("GraphQL server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
