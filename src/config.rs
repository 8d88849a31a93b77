use std::env;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub mqtt: MqttConfig,
    /// Thing name of this device, used as the second topic segment.
    pub thing_name: String,
    pub input_gpios: Vec<u32>,
}

#[derive(Debug, Clone)]
pub struct MqttConfig {
    pub broker_host: String,
    pub broker_port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub client_id: String,
}

const DEFAULT_INPUT_GPIOS: &str = "6";

/// Key lookup backed by the process environment.
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

fn env_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.is_empty())
}

fn env_or_default<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Build the config from an arbitrary key lookup instead of the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let thing_name = env_required(&lookup, "AWS_IOT_THING_NAME")?;

        let pins = env_optional(&lookup, "GPIO_INPUT_PINS")
            .unwrap_or_else(|| DEFAULT_INPUT_GPIOS.to_string());
        let input_gpios = parse_pins(&pins)?;

        let broker_port = match env_optional(&lookup, "MQTT_BROKER_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("Invalid MQTT_BROKER_PORT {port:?}: {e}")))?,
            None => 1883,
        };

        let config = Self {
            mqtt: MqttConfig {
                broker_host: env_or_default(&lookup, "MQTT_BROKER_HOST", "localhost".to_string()),
                broker_port,
                username: env_optional(&lookup, "MQTT_USERNAME"),
                password: env_optional(&lookup, "MQTT_PASSWORD"),
                client_id: env_optional(&lookup, "MQTT_CLIENT_ID")
                    .unwrap_or_else(|| format!("{thing_name}-gpio-reader")),
            },
            thing_name,
            input_gpios,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.mqtt.broker_host.is_empty() {
            return Err(Error::Config("MQTT_BROKER_HOST must not be empty".into()));
        }
        if self.input_gpios.is_empty() {
            return Err(Error::Config("GPIO_INPUT_PINS must list at least one pin".into()));
        }
        Ok(())
    }
}

/// Parse a comma separated pin list: "6" or "5, 6,13".
fn parse_pins(raw: &str) -> Result<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse()
                .map_err(|e| Error::Config(format!("Invalid GPIO pin {p:?} in GPIO_INPUT_PINS: {e}")))
        })
        .collect()
}
