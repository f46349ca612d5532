//! Buttons owned by one dialog or window
//!
//! A `ButtonBar` holds the buttons a surface declared, in order. Labels are
//! unique within a bar so that label lookups are unambiguous, and client
//! clicks (which arrive addressed by element id) can be routed back to the
//! owning button.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use trellis_core::{CommandChannel, IdAllocator, Result, TrellisError};

use super::button::{ButtonOptions, DialogButton};
use super::presets::PresetCatalog;

/// Ordered buttons of a single surface
#[derive(Debug, Default)]
pub struct ButtonBar {
    buttons: SmallVec<[DialogButton; 4]>,
    by_element_id: FxHashMap<String, usize>,
}

impl ButtonBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt `buttons` in order
    pub fn from_buttons<I>(buttons: I) -> Result<Self>
    where
        I: IntoIterator<Item = DialogButton>,
    {
        let mut bar = Self::new();
        for button in buttons {
            bar.push(button)?;
        }
        Ok(bar)
    }

    /// Adopt fresh copies of a catalog preset
    pub fn from_preset(
        catalog: &PresetCatalog,
        name: &str,
        allocator: &dyn IdAllocator,
    ) -> Result<Self> {
        Self::from_buttons(catalog.instantiate(name, allocator)?)
    }

    /// Append a button.
    ///
    /// Fails if a button with the same label, or the same element id, is
    /// already part of the bar.
    pub fn push(&mut self, button: DialogButton) -> Result<&mut DialogButton> {
        if self.buttons.iter().any(|owned| *owned == button) {
            return Err(TrellisError::DuplicateLabel(describe(&button)));
        }

        let element_id = button.element_id();
        if self.by_element_id.contains_key(&element_id) {
            return Err(TrellisError::InvalidArgument(format!(
                "element id {} is already in use",
                element_id
            )));
        }

        let index = self.buttons.len();
        self.by_element_id.insert(element_id, index);
        self.buttons.push(button);
        Ok(&mut self.buttons[index])
    }

    pub fn buttons(&self) -> &[DialogButton] {
        &self.buttons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DialogButton> {
        self.buttons.iter()
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Button whose label matches `text`
    pub fn find(&self, text: Option<&str>) -> Option<&DialogButton> {
        self.buttons.iter().find(|button| button.matches(text))
    }

    pub fn find_mut(&mut self, text: Option<&str>) -> Option<&mut DialogButton> {
        self.buttons.iter_mut().find(|button| button.matches(text))
    }

    /// Button rendered with `element_id`
    pub fn find_by_element_id(&self, element_id: &str) -> Option<&DialogButton> {
        self.by_element_id
            .get(element_id)
            .map(|&index| &self.buttons[index])
    }

    /// Push the enabled state of the button labeled `text` to the client
    pub fn sync_enabled<C>(&mut self, text: &str, enabled: bool, channel: &mut C) -> Result<()>
    where
        C: CommandChannel + ?Sized,
    {
        self.require_mut(text)?.sync_enabled(enabled, channel);
        Ok(())
    }

    /// Push the visible state of the button labeled `text` to the client.
    ///
    /// Returns whether a command was sent.
    pub fn sync_visible<C>(&mut self, text: &str, visible: bool, channel: &mut C) -> Result<bool>
    where
        C: CommandChannel + ?Sized,
    {
        Ok(self.require_mut(text)?.sync_visible(visible, channel))
    }

    /// Client-side options for every button, in order
    pub fn render_options(&self) -> Result<Vec<ButtonOptions>> {
        self.buttons.iter().map(DialogButton::render_options).collect()
    }

    /// Client-side options as a JSON array
    pub fn to_json(&self) -> Result<String> {
        let options = self.render_options()?;
        serde_json::to_string(&options).map_err(|e| TrellisError::Serialization(e.to_string()))
    }

    fn require_mut(&mut self, text: &str) -> Result<&mut DialogButton> {
        self.find_mut(Some(text))
            .ok_or_else(|| TrellisError::UnknownButton(text.to_string()))
    }
}

impl<'a> IntoIterator for &'a ButtonBar {
    type Item = &'a DialogButton;
    type IntoIter = std::slice::Iter<'a, DialogButton>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn describe(button: &DialogButton) -> String {
    match button.text() {
        Some(text) => text.to_string(),
        None => "<null>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::presets::ButtonPreset;
    use std::sync::Arc;
    use trellis_core::{ClientCommand, Label, ScriptBuffer, SequenceAllocator};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    fn ok_cancel_bar() -> ButtonBar {
        let catalog = PresetCatalog::standard_in(Arc::new(SequenceAllocator::new()));
        let allocator = SequenceAllocator::starting_at(0x10);
        ButtonBar::from_preset(&catalog, ButtonPreset::OkCancel.name(), &allocator).unwrap()
    }

    #[test]
    fn test_from_preset() {
        let bar = ok_cancel_bar();
        assert_eq!(bar.len(), 2);
        assert_eq!(bar.buttons()[0], "OK");
        assert_eq!(bar.buttons()[0].element_id(), "btn0010");
        assert_eq!(bar.buttons()[1].element_id(), "btn0011");
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let allocator = SequenceAllocator::new();
        let mut bar = ButtonBar::new();
        bar.push(DialogButton::new_in(&allocator, "OK")).unwrap();

        let result = bar.push(DialogButton::new_in(&allocator, "OK").with_icon("x"));
        assert!(matches!(result, Err(TrellisError::DuplicateLabel(label)) if label == "OK"));
        assert_eq!(bar.len(), 1);
    }

    #[test]
    fn test_duplicate_element_id_rejected() {
        let allocator = SequenceAllocator::new();
        let mut bar = ButtonBar::new();
        bar.push(DialogButton::new_in(&allocator, "OK")).unwrap();

        allocator.reset();
        let result = bar.push(DialogButton::new_in(&allocator, "Cancel"));
        assert!(matches!(result, Err(TrellisError::InvalidArgument(_))));
    }

    #[test]
    fn test_find_by_element_id() {
        let bar = ok_cancel_bar();
        let cancel = bar.find_by_element_id("btn0011").unwrap();
        assert_eq!(cancel, "Cancel");
        assert!(bar.find_by_element_id("btn0012").is_none());
        assert_eq!(bar.find(Some("OK")).map(|b| b.element_id()), Some("btn0010".into()));
    }

    #[test]
    fn test_routed_sync() {
        init_tracing();
        let mut bar = ok_cancel_bar();
        let mut script = ScriptBuffer::new();

        bar.sync_enabled("Cancel", true, &mut script).unwrap();
        assert!(bar.sync_visible("OK", false, &mut script).unwrap());
        assert!(!bar.sync_visible("OK", false, &mut script).unwrap());

        assert_eq!(
            script.statements(),
            [
                "jQuery('#btn0011').button('enable');",
                "jQuery('#btn0010').hide();",
            ]
        );
        assert!(bar.find(Some("Cancel")).unwrap().is_enabled());
    }

    #[test]
    fn test_routed_sync_unknown_label() {
        let mut bar = ok_cancel_bar();
        let mut sent: Vec<ClientCommand> = Vec::new();

        let result = bar.sync_enabled("Apply", true, &mut sent);
        assert!(matches!(result, Err(TrellisError::UnknownButton(label)) if label == "Apply"));
        assert!(sent.is_empty());
    }

    #[test]
    fn test_to_json() {
        let bar = ok_cancel_bar();
        assert_eq!(
            bar.to_json().unwrap(),
            r#"[{"id":"btn0010","text":"OK","icon":"k-i-tick"},{"id":"btn0011","text":"Cancel","icon":"k-i-cancel","disabled":true}]"#
        );
    }

    #[test]
    fn test_render_fails_on_null_label() {
        let allocator = SequenceAllocator::new();
        let bar = ButtonBar::from_buttons([
            DialogButton::new_in(&allocator, "OK"),
            DialogButton::new_in(&allocator, Label::null()),
        ])
        .unwrap();

        assert!(matches!(
            bar.render_options(),
            Err(TrellisError::InvalidArgument(_))
        ));
    }
}
