//! Button components for dialogs and windows
//!
//! - `DialogButton`: one labeled button with client-synchronized state
//! - `ButtonSet`: shared, read-only ordered buttons
//! - `PresetCatalog` / `ButtonPreset`: named button presets
//! - `ButtonBar`: the buttons owned by one surface

pub mod button;
pub mod button_bar;
pub mod button_set;
pub mod presets;

pub use button::{button, ButtonOptions, DialogButton, ELEMENT_ID_PREFIX};
pub use button_bar::ButtonBar;
pub use button_set::ButtonSet;
pub use presets::{standard_catalog, ButtonPreset, PresetBuilder, PresetCatalog};
