//! Ordered, read-only button sets
//!
//! A `ButtonSet` is built once and then shared by every consumer; cloning it
//! only bumps a reference count. Surfaces that need buttons of their own
//! (with their own ids and mutable state) call [`ButtonSet::instantiate`].

use std::sync::Arc;

use trellis_core::{IdAllocator, Label};

use super::button::DialogButton;

/// Ordered sequence of buttons, immutable once built
#[derive(Clone, Debug)]
pub struct ButtonSet {
    buttons: Arc<[DialogButton]>,
}

impl ButtonSet {
    /// Build from plain label strings
    pub fn from_labels<I, S>(allocator: &dyn IdAllocator, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_buttons(
            labels
                .into_iter()
                .map(|label| DialogButton::new_in(allocator, Label::literal(label))),
        )
    }

    /// Build from label sources, which may be deferred
    pub fn from_sources<I>(allocator: &dyn IdAllocator, sources: I) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        Self::from_buttons(
            sources
                .into_iter()
                .map(|source| DialogButton::new_in(allocator, source)),
        )
    }

    /// Build from fully specified buttons
    pub fn from_buttons<I>(buttons: I) -> Self
    where
        I: IntoIterator<Item = DialogButton>,
    {
        Self {
            buttons: buttons.into_iter().collect(),
        }
    }

    /// The buttons, in declaration order
    pub fn to_list(&self) -> &[DialogButton] {
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

    /// First button whose label matches `text`
    pub fn find(&self, text: Option<&str>) -> Option<&DialogButton> {
        self.buttons.iter().find(|button| button.matches(text))
    }

    pub fn contains(&self, text: Option<&str>) -> bool {
        self.find(text).is_some()
    }

    /// Fresh, surface-owned copies of every button with new ids
    pub fn instantiate(&self, allocator: &dyn IdAllocator) -> Vec<DialogButton> {
        self.buttons
            .iter()
            .map(|button| button.duplicate_in(allocator))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ButtonSet {
    type Item = &'a DialogButton;
    type IntoIter = std::slice::Iter<'a, DialogButton>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
