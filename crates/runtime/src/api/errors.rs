//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and registry commands so clients
//! can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use house_core::HouseError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a house to be configured before building")]
    MissingHouse,

    #[error("invalid runtime configuration: {0}")]
    InvalidConfig(&'static str),

    #[error(transparent)]
    House(#[from] HouseError),

    #[error(transparent)]
    Transport(#[from] crate::transport::TransportError),
}
