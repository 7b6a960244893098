//! Derived roster views. Every function here is pure and synchronous: it
//! takes a snapshot of the full roster and recomputes the view from
//! scratch, the way the dashboard re-derives its cards on each render.

pub mod mentorship;
pub mod pairing;
pub mod rollup;
pub mod search;
pub mod status;
