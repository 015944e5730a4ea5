use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = shopdesk_admin::AdminConfig::from_env().context("invalid configuration")?;
    shopdesk_observability::init(config.log_format);

    let app = shopdesk_admin::app::build_app(&config).context("failed to build backend client")?;

    let address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tracing::info!(
        address = %listener.local_addr()?,
        backend = %config.api_base_url,
        "admin listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
