//! Handler implementations

pub mod stream;

pub use stream::{SharedBuffer, StreamHandler, DEFAULT_HANDLER_NAME};

pub use crate::core::Handler;
