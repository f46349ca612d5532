//! # Trellis Component Library (trellis_cn)
//!
//! Dialog and window buttons whose state is mirrored to an already-rendered
//! client view.
//!
//! - **Primitives**: `trellis_core` provides id sequences, labels and client commands
//! - **Components**: `trellis_cn` provides buttons, presets and button bars
//!
//! ## Example
//!
//! ```rust
//! use trellis_cn::prelude::*;
//!
//! let settings = Settings::default();
//! let allocator = settings.allocator();
//!
//! let mut bar = ButtonBar::from_preset(standard_catalog(), "OK_CANCEL", &allocator).unwrap();
//! let mut script = settings.script_buffer();
//!
//! // Later, once the dialog is open on the client
//! bar.sync_enabled("Cancel", true, &mut script).unwrap();
//! assert_eq!(script.statements(), ["jQuery('#btn0001').button('enable');"]);
//! ```

pub mod components;
pub mod icons;
pub mod settings;

pub use components::*;
pub use settings::Settings;

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::button::button;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::{
        button, standard_catalog, ButtonBar, ButtonOptions, ButtonPreset, ButtonSet,
        DialogButton, PresetCatalog,
    };
    pub use crate::icons;
    pub use crate::settings::Settings;
    // Re-export commonly needed core types
    pub use trellis_core::{
        ClientCommand, CommandChannel, IdAllocator, Label, ScriptBuffer, SequenceAllocator,
        TrellisError,
    };
}
