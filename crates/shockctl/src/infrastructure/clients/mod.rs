pub mod openshock;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::Credentials;
use crate::domain::models::DispatcherBox;
use crate::domain::models::DispatcherName;

pub struct DispatcherManager {}

impl DispatcherManager {
    pub fn get(name: DispatcherName, credentials: Credentials) -> Result<DispatcherBox> {
        if name == DispatcherName::OpenShock {
            return Ok(Box::new(openshock::OpenShock::new(credentials)));
        }

        bail!(format!("No dispatcher implemented for {name}"))
    }
}
