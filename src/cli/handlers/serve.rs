use anyhow::Result;

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>) -> Result<()> {
    let schema = build_schema(ctx.store);

    let host = ctx.config.server.host;
    let port = port.unwrap_or(ctx.config.server.port);

    println!("Starting GraphQL server on http://{}:{}", host, port);
    println!("GraphQL Playground: http://{}:{}", host, port);

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &host, port).await })?;
    Ok(())
}
