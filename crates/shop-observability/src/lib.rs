//! Observability for the lure shop.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one browsing session
//! - `StructuredLogger` - Structured logging with session context, emitted through `tracing`
//! - `LogBuilder` - An entry being assembled field by field before it is emitted

mod logging;
mod session;

pub use logging::*;
pub use session::SessionId;
