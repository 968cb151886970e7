//! Mouse look and quit handling
//!
//! The demo only needs relative pointer motion and a close request, both
//! polled once per frame.

mod state;

pub use state::*;
