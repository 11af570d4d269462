//! GuardView Infrastructure Layer
pub mod http;
pub mod timers;

pub use http::ReqwestUrlProbe;
pub use timers::TokioRetryTimer;
