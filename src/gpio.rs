use tracing::info;

use crate::error::Result;
use crate::mqtt::MessagePublisher;

/// Read-request topic for one pin, addressed to the GPIO connector.
/// Example: ("device-123", 6) → "gpio/device-123/6/read"
pub fn read_topic(thing_name: &str, pin: u32) -> String {
    ["gpio", thing_name, &pin.to_string(), "read"].join("/")
}

/// Publish an empty read request for each pin, in order. The first publish
/// error aborts the run.
pub async fn publish_all_reads<P: MessagePublisher>(
    pins: &[u32],
    thing_name: &str,
    client: &P,
) -> Result<()> {
    info!("Reading GPIOs");
    for &pin in pins {
        client.publish(&read_topic(thing_name, pin), "").await?;
    }
    Ok(())
}
