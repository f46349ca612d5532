//! Dialog button with client-synchronized state
//!
//! A `DialogButton` is declared by a dialog or window and rendered as part of
//! its button pane. After render, enable/visible changes are pushed to the
//! client through a [`CommandChannel`], addressed by the button's element id.
//!
//! The label doubles as the button's logical identity: two buttons with the
//! same label compare equal whatever their id, icon or state. The id is only
//! used to derive the markup-facing element id.
//!
//! # Example
//!
//! ```ignore
//! use trellis_cn::prelude::*;
//!
//! let mut submit = DialogButton::new("Submit").with_icon(icons::TICK);
//!
//! // ... surface rendered, inside an interaction ...
//! submit.sync_enabled(false, &mut script);
//! submit.sync_visible(false, &mut script);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use trellis_core::{
    next_id, ButtonId, ClientCommand, CommandChannel, CommandKind, IdAllocator, Label, Result,
    TrellisError,
};

/// Constant tag in front of every button element id
pub const ELEMENT_ID_PREFIX: &str = "btn";

/// Create an enabled button with a label
///
/// The id comes from the process-wide allocator; use
/// [`DialogButton::new_in`] to pick the allocator explicitly.
///
/// # Example
///
/// ```ignore
/// use trellis_cn::prelude::*;
///
/// cn::button("OK").with_icon(icons::TICK)
/// ```
pub fn button(label: impl Into<Label>) -> DialogButton {
    DialogButton::new(label)
}

/// A labeled, stateful dialog button
#[derive(Debug)]
pub struct DialogButton {
    id: ButtonId,
    label: Label,
    icon: Option<String>,
    enabled: bool,
    visible: bool,
}

impl DialogButton {
    /// Create an enabled button, drawing its id from the process-wide allocator
    pub fn new(label: impl Into<Label>) -> Self {
        Self::with_id(next_id(), label.into())
    }

    /// Create an enabled button, drawing its id from `allocator`
    pub fn new_in(allocator: &dyn IdAllocator, label: impl Into<Label>) -> Self {
        Self::with_id(allocator.next(), label.into())
    }

    fn with_id(id: ButtonId, label: Label) -> Self {
        tracing::trace!(id = id.get(), "allocated button id");
        Self {
            id,
            label,
            icon: None,
            enabled: true,
            visible: true,
        }
    }

    /// Set the icon (css class, e.g. `ui-icon-check`)
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the initial enabled state
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Copy label, icon and enabled state into a new button with a fresh id.
    ///
    /// The copy starts visible.
    pub fn duplicate_in(&self, allocator: &dyn IdAllocator) -> Self {
        let mut button = Self::new_in(allocator, self.label.clone()).with_enabled(self.enabled);
        button.icon = self.icon.clone();
        button
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Resolved label text
    pub fn text(&self) -> Option<&str> {
        self.label.text()
    }

    /// Key for set/map membership keyed on label semantics.
    ///
    /// `Hash` and `PartialEq` are both derived from this key; use
    /// [`DialogButton::id`] when allocation identity is wanted instead.
    pub fn label_key(&self) -> Option<&str> {
        self.label.text()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) {
        self.icon = Some(icon.into());
    }

    pub fn clear_icon(&mut self) {
        self.icon = None;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the enabled state locally; takes effect on the next render
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set the enabled state and push it to the rendered client.
    ///
    /// Always sends exactly one `enable` or `disable` command, whatever the
    /// previous state. Only valid once the owning surface is rendered.
    pub fn sync_enabled<C>(&mut self, enabled: bool, channel: &mut C)
    where
        C: CommandChannel + ?Sized,
    {
        self.enabled = enabled;
        let kind = if enabled {
            CommandKind::Enable
        } else {
            CommandKind::Disable
        };
        self.emit(kind, channel);
    }

    /// Set the visible state and push it to the rendered client.
    ///
    /// Sends one `show` or `hide` command only when the state actually
    /// changes. Returns whether a command was sent.
    pub fn sync_visible<C>(&mut self, visible: bool, channel: &mut C) -> bool
    where
        C: CommandChannel + ?Sized,
    {
        if self.visible == visible {
            return false;
        }

        self.visible = visible;
        let kind = if visible {
            CommandKind::Show
        } else {
            CommandKind::Hide
        };
        self.emit(kind, channel);
        true
    }

    /// Markup id, e.g. `btn002a`
    pub fn element_id(&self) -> String {
        format!("{}{:04x}", ELEMENT_ID_PREFIX, self.id.get())
    }

    /// Null-safe exact match of the label against `text`
    pub fn matches(&self, text: Option<&str>) -> bool {
        self.label.matches(text)
    }

    /// Client-side options for the initial render.
    ///
    /// Fails with [`TrellisError::InvalidArgument`] if the label resolves to
    /// null.
    pub fn render_options(&self) -> Result<ButtonOptions> {
        let element_id = self.element_id();
        let Some(text) = self.label.text() else {
            tracing::warn!(%element_id, "cannot render button without a label");
            return Err(TrellisError::InvalidArgument(format!(
                "button {} has no label",
                element_id
            )));
        };

        Ok(ButtonOptions {
            id: element_id,
            text: text.to_string(),
            icon: self.icon.clone(),
            disabled: !self.enabled,
            hidden: !self.visible,
        })
    }

    fn emit<C>(&self, kind: CommandKind, channel: &mut C)
    where
        C: CommandChannel + ?Sized,
    {
        let element_id = self.element_id();
        tracing::debug!(%element_id, command = %kind, "sending button command");
        channel.send(ClientCommand::new(kind, element_id));
    }
}

impl PartialEq for DialogButton {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.label_key())
    }
}

impl Eq for DialogButton {}

impl Hash for DialogButton {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label_key().hash(state);
    }
}

impl PartialEq<str> for DialogButton {
    fn eq(&self, other: &str) -> bool {
        self.matches(Some(other))
    }
}

impl PartialEq<&str> for DialogButton {
    fn eq(&self, other: &&str) -> bool {
        self.matches(Some(*other))
    }
}

impl fmt::Display for DialogButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.label, f)
    }
}

/// Options handed to the client widget when the button pane is first rendered
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonOptions {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hidden: bool,
}

impl ButtonOptions {
    /// Serialize to a JSON object literal
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| TrellisError::Serialization(e.to_string()))
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
