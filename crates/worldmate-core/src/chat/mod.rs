//! Chat bus and outbound chat port.

pub mod bus;
pub mod port;

pub use bus::ChatBus;
pub use port::ChatPort;
