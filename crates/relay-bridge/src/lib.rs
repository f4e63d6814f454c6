pub mod bridge;
pub mod config;
pub mod error;

pub use bridge::{AssistantBridge, AssistantReply};
pub use config::BridgeConfig;
pub use error::{
    BridgeError, NO_REPLY_MESSAGE, POLL_TIMEOUT_MESSAGE, TIMEOUT_MESSAGE, UNEXPECTED_MESSAGE,
};
