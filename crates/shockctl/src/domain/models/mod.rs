mod command;
mod credentials;
mod dispatcher;
mod event;

pub use command::*;
pub use credentials::*;
pub use dispatcher::*;
pub use event::*;
