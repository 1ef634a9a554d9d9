//! Button object data model
//!
//! A [`ButtonObject`] owns an ordered list of [`StateInstance`] values; the
//! state index is the position in that list. All values here are plain data
//! built by whoever edits the object and consumed read-only by the renderer.

pub mod instance;
pub mod object;

pub use instance::{BitmapLayer, ChameleonImage, Justification, StateInstance, MAX_BITMAP_LAYERS};
pub use object::{ButtonObject, ButtonType};
