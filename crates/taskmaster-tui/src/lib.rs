#![forbid(unsafe_code)]

//! Terminal task list application.
//!
//! An Elm-style update/view loop over crossterm: key events become messages,
//! the [`app::AppModel`] update mutates the task list and returns a command,
//! [`program::Cmd::Save`] flushes the full sequence to the persistent slot,
//! and the view redraws the entire screen from current state. There is no
//! diffing and no partial update; every frame is a full rebuild.

pub mod app;
pub mod cli;
pub mod event;
pub mod input;
pub mod logging;
pub mod program;
pub mod view;
