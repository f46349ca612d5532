//! Trellis Core
//!
//! Foundational primitives for trellis button controls:
//!
//! - **Sequences**: short, wrapping, thread-safe ids for element markup
//! - **Labels**: literal or deferred label text with null-safe matching
//! - **Commands**: enable/disable/show/hide instructions for a rendered client view
//!
//! # Example
//!
//! ```rust
//! use trellis_core::command::{ClientCommand, CommandChannel};
//! use trellis_core::sequence::{IdAllocator, SequenceAllocator};
//!
//! let allocator = SequenceAllocator::new();
//! let id = allocator.next();
//!
//! let mut sent: Vec<ClientCommand> = Vec::new();
//! sent.send(ClientCommand::hide(format!("btn{:04x}", id.get())));
//! assert_eq!(sent[0].element_id(), "btn0000");
//! ```

pub mod command;
pub mod error;
pub mod label;
pub mod sequence;

pub use command::{
    ClientCommand, CommandChannel, CommandKind, ScriptBuffer, DEFAULT_SELECTOR_FUNCTION,
};
pub use error::{Result, TrellisError};
pub use label::{Label, TextProvider};
pub use sequence::{
    default_allocator, install_allocator, next_id, ButtonId, IdAllocator, SequenceAllocator,
    MAX_SEQUENCE, SEQUENCE_LEN,
};
