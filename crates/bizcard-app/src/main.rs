use bizcard_app::app::router;
use bizcard_core::config::load_config;
use bizcard_rfc::rfc::vcard::{ContactRecord, encode, verify};
use salvo::conn::TcpListener;
use salvo::{Listener, Server};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting bizcard server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    // Fail fast if the configured card cannot produce a readable vCard.
    let record = ContactRecord::from(&config.card);
    verify(&encode(&record))?;
    tracing::info!(
        name = %record.full_name,
        fields = record.present_optional_fields(),
        policy = ?config.delivery.policy,
        "Contact card ready"
    );

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    tracing::info!("Server listening on {bind_addr}");

    Server::new(acceptor).serve(router(&config)).await;

    Ok(())
}
