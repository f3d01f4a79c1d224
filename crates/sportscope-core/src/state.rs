//! State management for the dashboard.
//!
//! Follows the Elm Architecture: `State + Message → (State, Command)`.
//! A state value owns all mutable data; the binding layer turns user
//! actions into messages and performs whatever the returned [`Command`]
//! asks for.
//!
//! # Examples
//!
//! ```
//! use sportscope_core::{Command, State};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize)]
//! struct Clicks {
//!     count: u32,
//! }
//!
//! impl State for Clicks {
//!     type Message = ();
//!
//!     fn update(&mut self, _msg: ()) -> Command {
//!         self.count += 1;
//!         Command::RenderTable
//!     }
//! }
//!
//! let mut clicks = Clicks::default();
//! assert!(clicks.update(()).renders_table());
//! assert_eq!(clicks.count, 1);
//! ```

use serde::{Deserialize, Serialize};

/// Application state trait.
pub trait State: Clone + Serialize + for<'de> Deserialize<'de> {
    /// Message type for state updates
    type Message;

    /// Update state in response to a message.
    ///
    /// Returns the re-rendering the surface has to perform.
    fn update(&mut self, msg: Self::Message) -> Command;
}

/// Rendering work requested by a state update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Nothing changed
    #[default]
    None,
    /// Re-project the table rows and header indicators
    RenderTable,
    /// Re-project the detail panel and chart
    RenderDetail,
    /// Several of the above
    Batch(Vec<Command>),
}

impl Command {
    /// Create a batch of commands.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Re-render everything.
    #[must_use]
    pub fn render_all() -> Self {
        Self::batch([Self::RenderTable, Self::RenderDetail])
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether the table has to be re-rendered.
    #[must_use]
    pub fn renders_table(&self) -> bool {
        match self {
            Self::RenderTable => true,
            Self::Batch(cmds) => cmds.iter().any(Self::renders_table),
            Self::None | Self::RenderDetail => false,
        }
    }

    /// Whether the detail panel has to be re-rendered.
    #[must_use]
    pub fn renders_detail(&self) -> bool {
        match self {
            Self::RenderDetail => true,
            Self::Batch(cmds) => cmds.iter().any(Self::renders_detail),
            Self::None | Self::RenderTable => false,
        }
    }
}
