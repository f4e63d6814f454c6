pub mod message;
pub mod run;
pub mod thread;

pub use message::{CreateMessageRequest, MessageList, MessageRole, ThreadMessage};
pub use run::{CreateRunRequest, Run, RunStatus};
pub use thread::Thread;
