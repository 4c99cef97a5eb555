use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::gql::{build_schema, OperationRoot};
use api::state::AppState;
use infra::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into());
    let store = Arc::new(MemoryStore::load_dir(&data_dir)?);
    tracing::info!("Loaded seed collections from {}", data_dir);

    // Compose the schema and dispatch table; any merge failure aborts
    // startup before the listener binds.
    let (schema, table) = build_schema()?;
    tracing::info!(
        query_fields = schema.root_fields(OperationRoot::Query).len(),
        mutation_fields = schema.root_fields(OperationRoot::Mutation).len(),
        types = schema.objects().len(),
        enums = schema.enums().len(),
        "Composed schema"
    );

    let state = AppState::new(store, schema, table);
    let app = build_router(state);

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
