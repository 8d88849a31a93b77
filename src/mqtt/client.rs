use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, Incoming, MqttOptions, Outgoing, QoS};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;

use super::{Connection, MessagePublisher};

/// Slack on top of one queued request per pin, leaving room for the disconnect.
const REQUEST_CAPACITY_SLACK: usize = 10;

pub fn mqtt_options(config: &Config) -> MqttOptions {
    let mut mqttopts = MqttOptions::new(
        &config.mqtt.client_id,
        &config.mqtt.broker_host,
        config.mqtt.broker_port,
    );
    mqttopts.set_keep_alive(Duration::from_secs(30));

    if let (Some(user), Some(pass)) = (&config.mqtt.username, &config.mqtt.password) {
        mqttopts.set_credentials(user, pass);
    }
    mqttopts
}

pub struct MqttClient;

impl MqttClient {
    /// Build the publishing handle and the connection that drives it. Nothing
    /// touches the network until the connection is polled.
    pub fn new(config: &Config) -> (MqttPublisher, MqttConnection) {
        let capacity = config.input_gpios.len() + REQUEST_CAPACITY_SLACK;
        let (client, eventloop) = AsyncClient::new(mqtt_options(config), capacity);

        (
            MqttPublisher {
                client: client.clone(),
            },
            MqttConnection { client, eventloop },
        )
    }
}

#[derive(Clone)]
pub struct MqttPublisher {
    client: AsyncClient,
}

impl MessagePublisher for MqttPublisher {
    async fn publish(&self, topic: &str, payload: &str) -> Result<()> {
        info!("Publishing {}", topic);
        self.client
            .publish(topic, QoS::AtMostOnce, false, payload.as_bytes().to_vec())
            .await?;
        Ok(())
    }
}

pub struct MqttConnection {
    client: AsyncClient,
    eventloop: EventLoop,
}

impl Connection for MqttConnection {
    /// Connection errors are returned as-is; there is no reconnect.
    async fn flush(&mut self, expected: usize) -> Result<()> {
        let mut written = 0;
        while written < expected {
            match self.eventloop.poll().await? {
                Event::Incoming(Incoming::ConnAck(_)) => {
                    info!("Connected to MQTT broker");
                }
                Event::Outgoing(Outgoing::Publish(_)) => {
                    written += 1;
                    debug!("Flushed publish {}/{}", written, expected);
                }
                _ => {}
            }
        }
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        self.client.disconnect().await?;
        loop {
            if let Event::Outgoing(Outgoing::Disconnect) = self.eventloop.poll().await? {
                debug!("Sent MQTT disconnect");
                return Ok(());
            }
        }
    }
}
