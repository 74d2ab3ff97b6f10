use async_trait::async_trait;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::EnumVariantNames;

use crate::domain::models::CommandRequest;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum DispatcherName {
    #[default]
    OpenShock,
}

/// Synchronous capability for sending one control command to the remote
/// service. Returning a bool rather than a Result is deliberate: the loop
/// treats every failure mode the same way, by retrying on the next tick.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    fn name(&self) -> DispatcherName;
    async fn dispatch(&self, request: CommandRequest) -> bool;
}

pub type DispatcherBox = Box<dyn Dispatcher>;
