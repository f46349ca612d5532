//! Out-of-band client commands
//!
//! Once a surface has been rendered, button state changes reach the client
//! as individual instructions addressed by element id. The channel that
//! carries them is owned by the caller and already bound to the right
//! client view; commands are delivered in the order they are sent, with no
//! buffering beyond what the channel itself does.
//!
//! # Example
//!
//! ```rust
//! use trellis_core::command::{ClientCommand, CommandChannel, ScriptBuffer};
//!
//! let mut buffer = ScriptBuffer::new();
//! buffer.send(ClientCommand::disable("btn0001"));
//! assert_eq!(buffer.statements(), ["jQuery('#btn0001').button('disable');"]);
//! ```

use std::fmt;

/// Selector function used when rendering commands to script
pub const DEFAULT_SELECTOR_FUNCTION: &str = "jQuery";

/// The four state transitions a button can push to the client
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Enable,
    Disable,
    Show,
    Hide,
}

impl CommandKind {
    /// Name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Enable => "enable",
            CommandKind::Disable => "disable",
            CommandKind::Show => "show",
            CommandKind::Hide => "hide",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instruction addressed to a rendered element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientCommand {
    kind: CommandKind,
    element_id: String,
}

impl ClientCommand {
    pub fn new(kind: CommandKind, element_id: impl Into<String>) -> Self {
        Self {
            kind,
            element_id: element_id.into(),
        }
    }

    pub fn enable(element_id: impl Into<String>) -> Self {
        Self::new(CommandKind::Enable, element_id)
    }

    pub fn disable(element_id: impl Into<String>) -> Self {
        Self::new(CommandKind::Disable, element_id)
    }

    pub fn show(element_id: impl Into<String>) -> Self {
        Self::new(CommandKind::Show, element_id)
    }

    pub fn hide(element_id: impl Into<String>) -> Self {
        Self::new(CommandKind::Hide, element_id)
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Render as a single script statement using `selector_function`
    /// (usually `jQuery` or `$`) to look the element up.
    pub fn to_script(&self, selector_function: &str) -> String {
        let target = format!("{}('#{}')", selector_function, self.element_id);
        match self.kind {
            CommandKind::Enable => format!("{}.button('enable');", target),
            CommandKind::Disable => format!("{}.button('disable');", target),
            CommandKind::Show => format!("{}.show();", target),
            CommandKind::Hide => format!("{}.hide();", target),
        }
    }
}

impl fmt::Display for ClientCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_script(DEFAULT_SELECTOR_FUNCTION))
    }
}

/// Sink for client commands, bound to one live client view
pub trait CommandChannel {
    /// Deliver one command
    fn send(&mut self, command: ClientCommand);
}

impl CommandChannel for Vec<ClientCommand> {
    fn send(&mut self, command: ClientCommand) {
        self.push(command);
    }
}

impl<C: CommandChannel + ?Sized> CommandChannel for &mut C {
    fn send(&mut self, command: ClientCommand) {
        (**self).send(command);
    }
}

/// Channel that renders each command to a script statement, to be appended
/// to the response of the current interaction.
#[derive(Clone, Debug)]
pub struct ScriptBuffer {
    selector_function: String,
    statements: Vec<String>,
}

impl ScriptBuffer {
    pub fn new() -> Self {
        Self::with_selector_function(DEFAULT_SELECTOR_FUNCTION)
    }

    pub fn with_selector_function(selector_function: impl Into<String>) -> Self {
        Self {
            selector_function: selector_function.into(),
            statements: Vec::new(),
        }
    }

    pub fn selector_function(&self) -> &str {
        &self.selector_function
    }

    /// Statements in the order they were sent
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Drain all statements
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.statements)
    }

    /// All statements joined into one script body
    pub fn to_script(&self) -> String {
        self.statements.join("\n")
    }
}

impl Default for ScriptBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandChannel for ScriptBuffer {
    fn send(&mut self, command: ClientCommand) {
        let statement = command.to_script(&self.selector_function);
        tracing::trace!(%statement, "appending client script");
        self.statements.push(statement);
    }
}
