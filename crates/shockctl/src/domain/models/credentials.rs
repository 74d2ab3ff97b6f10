use anyhow::bail;
use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// API token and device identifier, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_token: String,
    pub device_id: String,
}

impl Credentials {
    pub fn from_config() -> Result<Credentials> {
        let api_token = Config::get(ConfigKey::ApiToken);
        let device_id = Config::get(ConfigKey::DeviceId);

        if api_token.is_empty() || device_id.is_empty() {
            bail!(
                "API token or device ID not found. Set api-token and device-id in {}, or pass --api-token and --device-id.",
                Config::get(ConfigKey::ConfigFile)
            );
        }

        return Ok(Credentials {
            api_token,
            device_id,
        });
    }
}
