#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pedidos_observability::init();

    let config = pedidos_api::config::ApiConfig::from_env()?;
    let app = pedidos_api::app::build_app(&config).await;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
