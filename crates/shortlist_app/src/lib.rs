//! Shortlist runtime: wires the pure core to the engine.
mod effects;
mod session;

pub use effects::EffectRunner;
pub use session::{Session, SessionError};
