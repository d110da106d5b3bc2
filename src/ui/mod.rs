// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`viewer`] - the viewer window, its image view and pane
//! - [`metadata_panel`] - the properties sidebar
//! - [`styles`] - shared widget styles
//! - [`design_tokens`] - design system constants

pub mod design_tokens;
pub mod metadata_panel;
pub mod styles;
pub mod viewer;
