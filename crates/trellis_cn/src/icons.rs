//! Icon class names used by the standard button presets
//!
//! Any css class understood by the client widget library can be used as a
//! button icon; these are the ones the presets refer to.

/// tick
pub const TICK: &str = "k-i-tick";

/// cancel
pub const CANCEL: &str = "k-i-cancel";
