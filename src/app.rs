use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::gpio;
use crate::mqtt::{Connection, MessagePublisher};

/// One full pass: load config, connect, request a read of every pin, flush,
/// disconnect. Config is resolved before `connect` is called, so a bad
/// environment never opens a client.
pub async fn run<L, F, P, C>(lookup: L, connect: F) -> Result<()>
where
    L: Fn(&str) -> Option<String>,
    F: FnOnce(&Config) -> (P, C),
    P: MessagePublisher,
    C: Connection,
{
    let config = Config::from_lookup(lookup)?;

    info!(
        "Starting gpio reader (mqtt={}:{}, thing={}, pins={:?})",
        config.mqtt.broker_host,
        config.mqtt.broker_port,
        config.thing_name,
        config.input_gpios,
    );

    let (publisher, mut connection) = connect(&config);
    gpio::publish_all_reads(&config.input_gpios, &config.thing_name, &publisher).await?;
    connection.flush(config.input_gpios.len()).await?;
    connection.disconnect().await?;

    info!("gpio reader done");
    Ok(())
}
