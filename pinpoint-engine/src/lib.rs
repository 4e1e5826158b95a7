mod channel;
mod engine;
mod error;
mod request;
mod result;

pub use channel::ChannelCallback;
pub use engine::{LocationEngine, PositionCallback};
pub use error::Unavailable;
pub use request::{Priority, UpdateRequest};
pub use result::{PositionSample, ResultBatch, UtcDT};

pub mod prelude {
    use anyhow::Error as AnyhowError;
    use std::result::Result as StdResult;
    pub type Result<T = (), E = AnyhowError> = StdResult<T, E>;
    pub use anyhow::Context;
}
