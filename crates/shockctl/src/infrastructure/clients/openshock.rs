use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CommandRequest;
use crate::domain::models::CommandType;
use crate::domain::models::Credentials;
use crate::domain::models::Dispatcher;
use crate::domain::models::DispatcherName;

#[cfg(test)]
#[path = "openshock_test.rs"]
mod tests;

const CUSTOM_NAME: &str = "ShockControl";
const REQUEST_TIMEOUT_MS: u64 = 5000;

#[derive(Serialize)]
struct ControlCommand {
    id: String,
    #[serde(rename = "type")]
    command_type: CommandType,
    intensity: u8,
    duration: u64,
    exclusive: bool,
}

#[derive(Serialize)]
struct ControlBody {
    shocks: Vec<ControlCommand>,
    #[serde(rename = "customName")]
    custom_name: String,
}

pub struct OpenShock {
    credentials: Credentials,
    url: String,
}

impl OpenShock {
    pub fn new(credentials: Credentials) -> OpenShock {
        return OpenShock::with_endpoint(credentials, Config::get(ConfigKey::Endpoint));
    }

    pub fn with_endpoint(credentials: Credentials, url: String) -> OpenShock {
        return OpenShock { credentials, url };
    }

    fn body(&self, request: &CommandRequest) -> ControlBody {
        return ControlBody {
            shocks: vec![ControlCommand {
                id: self.credentials.device_id.clone(),
                command_type: request.command_type,
                intensity: request.intensity,
                duration: request.duration_ms,
                exclusive: request.exclusive,
            }],
            custom_name: CUSTOM_NAME.to_string(),
        };
    }
}

#[async_trait]
impl Dispatcher for OpenShock {
    fn name(&self) -> DispatcherName {
        return DispatcherName::OpenShock;
    }

    /// Success is strictly HTTP 200. Everything else, including transport
    /// failures, degrades to false and is left to the caller to retry.
    async fn dispatch(&self, request: CommandRequest) -> bool {
        let res = reqwest::Client::new()
            .post(&self.url)
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .header("accept", "application/json")
            .header("OpenShockToken", &self.credentials.api_token)
            .json(&self.body(&request))
            .send()
            .await;

        match res {
            Ok(response) => {
                let status = response.status().as_u16();
                if status == 200 {
                    tracing::debug!(
                        intensity = request.intensity,
                        duration_ms = request.duration_ms,
                        "command acknowledged"
                    );
                    return true;
                }

                tracing::warn!(status = status, "control request rejected");
                return false;
            }
            Err(err) => {
                tracing::warn!(error = ?err, "control request failed");
                return false;
            }
        }
    }
}
