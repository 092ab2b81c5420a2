//! The session gate: whether composing messages is allowed yet.

pub mod gate;

pub use gate::SessionGate;
