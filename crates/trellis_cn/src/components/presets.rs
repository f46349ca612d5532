//! Button presets for dialogs and windows
//!
//! A [`PresetCatalog`] maps preset names to builder functions. Each preset is
//! built at most once per catalog and then shared read-only; callers that
//! need to mutate buttons take their own copies with
//! [`PresetCatalog::instantiate`].
//!
//! The standard presets are available through [`ButtonPreset`]:
//!
//! ```ignore
//! use trellis_cn::prelude::*;
//!
//! let buttons = ButtonPreset::OkCancel.to_list();
//! assert_eq!(buttons[1].text(), Some("Cancel"));
//! assert!(!buttons[1].is_enabled());
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use trellis_core::{default_allocator, IdAllocator, Result, TrellisError};

use super::button::DialogButton;
use super::button_set::ButtonSet;
use crate::icons;

pub const LBL_OK: &str = "OK";
pub const LBL_CANCEL: &str = "Cancel";
pub const LBL_YES: &str = "Yes";
pub const LBL_NO: &str = "No";

/// Builder producing the buttons of one preset
pub type PresetBuilder = Box<dyn Fn(&dyn IdAllocator) -> ButtonSet + Send + Sync>;

struct PresetEntry {
    builder: PresetBuilder,
    built: OnceLock<ButtonSet>,
}

/// Named button presets
pub struct PresetCatalog {
    allocator: Arc<dyn IdAllocator>,
    entries: IndexMap<String, PresetEntry>,
}

impl PresetCatalog {
    /// Create an empty catalog whose presets draw ids from `allocator`
    pub fn new(allocator: Arc<dyn IdAllocator>) -> Self {
        Self {
            allocator,
            entries: IndexMap::new(),
        }
    }

    /// Catalog with the standard presets, using the process-wide allocator
    pub fn standard() -> Self {
        Self::standard_in(default_allocator())
    }

    /// Catalog with the standard presets
    pub fn standard_in(allocator: Arc<dyn IdAllocator>) -> Self {
        let mut catalog = Self::new(allocator);
        for preset in ButtonPreset::ALL {
            catalog.register(preset.name(), move |allocator| preset.build(allocator));
        }
        catalog
    }

    /// Register (or replace) a preset
    pub fn register<F>(&mut self, name: impl Into<String>, builder: F) -> &mut Self
    where
        F: Fn(&dyn IdAllocator) -> ButtonSet + Send + Sync + 'static,
    {
        let name = name.into();
        let entry = PresetEntry {
            builder: Box::new(builder),
            built: OnceLock::new(),
        };
        if self.entries.insert(name.clone(), entry).is_some() {
            tracing::debug!(preset = %name, "replaced button preset");
        }
        self
    }

    /// Build every registered preset that has not been built yet
    pub fn preload(&self) {
        for name in self.entries.keys() {
            let _ = self.get(name);
        }
    }

    /// Shared button set for `name`, built on first access
    pub fn get(&self, name: &str) -> Option<&ButtonSet> {
        let entry = self.entries.get(name)?;
        Some(entry.built.get_or_init(|| {
            let set = (entry.builder)(self.allocator.as_ref());
            tracing::debug!(preset = name, buttons = set.len(), "built button preset");
            set
        }))
    }

    /// Ordered, read-only buttons of `name`
    pub fn to_list(&self, name: &str) -> Result<&[DialogButton]> {
        self.get(name)
            .map(ButtonSet::to_list)
            .ok_or_else(|| TrellisError::UnknownPreset(name.to_string()))
    }

    /// Surface-owned copies of the buttons of `name`, with fresh ids
    pub fn instantiate(
        &self,
        name: &str,
        allocator: &dyn IdAllocator,
    ) -> Result<Vec<DialogButton>> {
        self.get(name)
            .map(|set| set.instantiate(allocator))
            .ok_or_else(|| TrellisError::UnknownPreset(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Preset names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PresetCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresetCatalog")
            .field("presets", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

static STANDARD_CATALOG: OnceLock<PresetCatalog> = OnceLock::new();

/// The process-wide standard catalog, fully built on first access
pub fn standard_catalog() -> &'static PresetCatalog {
    STANDARD_CATALOG.get_or_init(|| {
        let catalog = PresetCatalog::standard();
        catalog.preload();
        catalog
    })
}

/// Standard button presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonPreset {
    /// OK
    Ok,
    /// OK (tick icon), Cancel (cancel icon, initially disabled)
    OkCancel,
    /// Yes, No
    YesNo,
    /// Yes, No, Cancel (initially disabled)
    YesNoCancel,
}

impl ButtonPreset {
    pub const ALL: [ButtonPreset; 4] = [
        ButtonPreset::Ok,
        ButtonPreset::OkCancel,
        ButtonPreset::YesNo,
        ButtonPreset::YesNoCancel,
    ];

    /// Catalog name of the preset
    pub fn name(&self) -> &'static str {
        match self {
            ButtonPreset::Ok => "OK",
            ButtonPreset::OkCancel => "OK_CANCEL",
            ButtonPreset::YesNo => "YES_NO",
            ButtonPreset::YesNoCancel => "YES_NO_CANCEL",
        }
    }

    /// Build a new button set for this preset
    pub fn build(&self, allocator: &dyn IdAllocator) -> ButtonSet {
        match self {
            ButtonPreset::Ok => ButtonSet::from_labels(allocator, [LBL_OK]),
            ButtonPreset::OkCancel => ButtonSet::from_buttons([
                DialogButton::new_in(allocator, LBL_OK).with_icon(icons::TICK),
                DialogButton::new_in(allocator, LBL_CANCEL)
                    .with_icon(icons::CANCEL)
                    .with_enabled(false),
            ]),
            ButtonPreset::YesNo => ButtonSet::from_labels(allocator, [LBL_YES, LBL_NO]),
            ButtonPreset::YesNoCancel => ButtonSet::from_buttons([
                DialogButton::new_in(allocator, LBL_YES),
                DialogButton::new_in(allocator, LBL_NO),
                DialogButton::new_in(allocator, LBL_CANCEL).with_enabled(false),
            ]),
        }
    }

    /// Shared buttons of this preset from the standard catalog
    pub fn to_list(&self) -> &'static [DialogButton] {
        standard_catalog()
            .get(self.name())
            .map(ButtonSet::to_list)
            .unwrap_or_default()
    }
}

impl fmt::Display for ButtonPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonPreset {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self> {
        ButtonPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| TrellisError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use trellis_core::SequenceAllocator;

    fn catalog() -> PresetCatalog {
        PresetCatalog::standard_in(Arc::new(SequenceAllocator::new()))
    }

    #[test]
    fn test_ok_cancel() {
        let catalog = catalog();
        let buttons = catalog.to_list("OK_CANCEL").unwrap();

        assert_eq!(buttons.len(), 2);
        assert!(buttons[0].matches(Some("OK")));
        assert!(buttons[1].matches(Some("Cancel")));
        assert_eq!(buttons[0].icon(), Some(icons::TICK));
        assert_eq!(buttons[1].icon(), Some(icons::CANCEL));
        assert!(buttons[0].is_enabled());
        assert!(!buttons[1].is_enabled());
    }

    #[test]
    fn test_standard_presets() {
        let catalog = catalog();

        let ok = catalog.to_list("OK").unwrap();
        assert_eq!(ok.len(), 1);
        assert_eq!(ok[0], "OK");

        let yes_no = catalog.to_list("YES_NO").unwrap();
        assert_eq!(yes_no.len(), 2);
        assert_eq!(yes_no[0], "Yes");
        assert_eq!(yes_no[1], "No");
        assert!(yes_no.iter().all(|b| b.is_enabled()));

        let yes_no_cancel = catalog.to_list("YES_NO_CANCEL").unwrap();
        let states: Vec<_> = yes_no_cancel.iter().map(|b| b.is_enabled()).collect();
        assert_eq!(states, [true, true, false]);
        assert_eq!(yes_no_cancel[2], "Cancel");
    }

    #[test]
    fn test_names_in_registration_order() {
        let catalog = catalog();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, ["OK", "OK_CANCEL", "YES_NO", "YES_NO_CANCEL"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_built_once_and_shared() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut catalog = PresetCatalog::new(Arc::new(SequenceAllocator::new()));
        catalog.register("CLOSE", move |allocator| {
            counter.fetch_add(1, Ordering::SeqCst);
            ButtonSet::from_labels(allocator, ["Close"])
        });

        let first = catalog.to_list("CLOSE").unwrap();
        let second = catalog.to_list("CLOSE").unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_preload_builds_everything() {
        let allocator = Arc::new(SequenceAllocator::new());
        let catalog = PresetCatalog::standard_in(allocator.clone());
        catalog.preload();
        // 1 + 2 + 2 + 3 buttons
        assert_eq!(allocator.peek().get(), 8);
    }

    #[test]
    fn test_register_replaces() {
        let mut catalog = catalog();
        catalog.register("OK", |allocator| ButtonSet::from_labels(allocator, ["Okay"]));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.to_list("OK").unwrap()[0], "Okay");
    }

    #[test]
    fn test_unknown_preset() {
        let catalog = catalog();
        assert!(matches!(
            catalog.to_list("ABORT_RETRY"),
            Err(TrellisError::UnknownPreset(_))
        ));
        assert!(catalog.get("ABORT_RETRY").is_none());
        assert!(!catalog.contains("ABORT_RETRY"));
    }

    #[test]
    fn test_instantiate_gives_owned_copies() {
        let catalog = catalog();
        let allocator = SequenceAllocator::starting_at(100);
        let mut owned = catalog.instantiate("OK_CANCEL", &allocator).unwrap();

        owned[1].set_enabled(true);
        assert_eq!(owned[0].id().get(), 100);
        assert!(!catalog.to_list("OK_CANCEL").unwrap()[1].is_enabled());
    }

    #[test]
    fn test_button_preset_enum() {
        let buttons = ButtonPreset::OkCancel.to_list();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0], "OK");
        assert!(!buttons[1].is_enabled());
        assert!(std::ptr::eq(buttons, ButtonPreset::OkCancel.to_list()));

        assert_eq!("YES_NO".parse::<ButtonPreset>().unwrap(), ButtonPreset::YesNo);
        assert!("NOPE".parse::<ButtonPreset>().is_err());
        assert_eq!(ButtonPreset::YesNoCancel.to_string(), "YES_NO_CANCEL");
    }
}
