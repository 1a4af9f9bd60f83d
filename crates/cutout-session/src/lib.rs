//! cutout-session - The interactive correction loop
//!
//! This crate drives one extraction run as an explicit state machine
//! advanced by discrete pointer events: initial automatic
//! segmentation, any number of scribble-correction rounds, and a final
//! accept or cancel.

mod error;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use session::{
    CorrectionSession, PointerButton, RoundResult, SessionConfig, SessionState,
};
