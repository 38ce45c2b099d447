#![forbid(unsafe_code)]

//! Task records and the ordered in-memory task list.
//!
//! This crate holds the data model and the state store: a [`Task`] is one
//! to-do item, a [`TaskList`] is the insertion-ordered sequence of tasks the
//! application mutates in response to user input. Persistence and rendering
//! live in other crates; the list itself performs no side effects.

mod list;
mod task;

pub use list::TaskList;
pub use task::Task;
