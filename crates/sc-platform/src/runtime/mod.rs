mod event_bus;
#[allow(clippy::module_inception)]
mod runtime;

pub use event_bus::{
    PlatformCommandReceiver, PlatformCommandSender, PlatformEventReceiver, PlatformEventSender,
};
pub use runtime::{PlatformRuntime, WatcherMode, MIN_POLL_INTERVAL};
