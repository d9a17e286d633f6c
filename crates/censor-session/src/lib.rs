//! # censor-session
//!
//! The state a caller holds between detection runs: input text, the current
//! segmentation, censor toggles, error and loading flags.
//!
//! ## Modules
//!
//! - `state`: `SessionState` record with pure transition functions
//! - `ticket`: `RequestTicket` for discarding out-of-order detector responses
//! - `manager`: `SessionManager` with `DashMap` for concurrent access

pub mod manager;
pub mod state;
pub mod ticket;

pub use manager::{SessionEntry, SessionManager};
pub use state::SessionState;
pub use ticket::RequestTicket;
