use gpio_read_publisher::app;
use gpio_read_publisher::config::env_lookup;
use gpio_read_publisher::error::Error;
use gpio_read_publisher::mqtt::client::MqttClient;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match app::run(env_lookup, MqttClient::new).await {
        Ok(()) => {}
        Err(Error::Config(e)) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
