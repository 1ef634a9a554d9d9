//! Button objects

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{read_document, write_document, ConfigError};
use crate::model::StateInstance;

/// Kind of button object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonType {
    /// Plain two-state button
    #[default]
    General,
    /// Button with an arbitrary number of numbered states
    MultistateGeneral,
    /// Level display
    Bargraph,
    /// Level display with one state per level step
    MultistateBargraph,
    /// Two-axis level control
    Joystick,
    /// Keyboard text entry field
    TextInput,
    /// Remote desktop surface
    ComputerControl,
    /// Freehand drawing surface
    Takenote,
    /// Scrolling view of sub-pages
    SubPageView,
    /// Data-driven list
    Listview,
}

impl ButtonType {
    /// Whether the type carries a variable number of states
    pub const fn is_multistate(self) -> bool {
        matches!(self, Self::MultistateGeneral | Self::MultistateBargraph)
    }
}

/// One editable button or graphical object
///
/// `width` and `height` are shared by every state: the renderer allocates one
/// canvas size per object and reuses it for each instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonObject {
    /// Numeric id, unique within its page
    pub id: u32,
    /// Display name
    pub name: String,
    /// Button type tag
    pub button_type: ButtonType,
    /// Left edge on the page
    pub left: i32,
    /// Top edge on the page
    pub top: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Stacking order on the page
    pub z_order: i32,
    /// Visual states, index = state number
    pub states: Vec<StateInstance>,
}

impl ButtonObject {
    /// Create an object of the given size with no states
    pub fn new(id: u32, name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id,
            name: name.into(),
            width,
            height,
            ..Default::default()
        }
    }

    /// Append a state
    pub fn with_state(mut self, state: StateInstance) -> Self {
        self.states.push(state);
        self
    }

    /// Load a button description from a `.ron` or `.toml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let object: Self = read_document(path)?;
        log::debug!(
            "Loaded button '{}' ({}x{}, {} state(s))",
            object.name,
            object.width,
            object.height,
            object.states.len()
        );
        Ok(object)
    }

    /// Save the description to a `.ron` or `.toml` file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        write_document(self, path)
    }
}
