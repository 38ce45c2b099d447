#![forbid(unsafe_code)]

//! Elm-style runtime: the update/persist/render loop.
//!
//! The program runtime owns the model, the persistent store, and the
//! terminal session. Events are mapped to messages, `update()` mutates the
//! model and returns a command, and a [`Cmd::Save`] flushes the full task
//! sequence to the slot before the next frame is drawn. Every update marks
//! the frame dirty; rendering is always a full rebuild from current state.
//!
//! The loop is strictly sequential: each handler runs to completion before
//! the next event is read, so no two mutations ever interleave.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event as cte;
use crossterm::{cursor, execute, terminal};
use taskmaster_core::TaskList;
use taskmaster_store::TaskStore;
use tracing::{debug, warn};

use crate::event::Event;

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// The message type for this model. Must be convertible from input
    /// events.
    type Message: From<Event>;

    /// Initialize the model with startup commands.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::None
    }

    /// Update the model in response to a message.
    ///
    /// This is the core state transition function. Returns the command the
    /// runtime executes before the next render.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state as a complete frame.
    ///
    /// Called whenever the model changed. The frame is written through any
    /// writer so tests can capture it; the runtime passes the terminal.
    fn view(&self, out: &mut dyn Write) -> io::Result<()>;

    /// The task sequence to persist when a [`Cmd::Save`] is executed.
    fn snapshot(&self) -> &TaskList;
}

/// Commands represent side effects to be executed by the runtime.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Quit the application.
    Quit,
    /// Send a follow-up message to the model.
    Msg(M),
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
    /// Flush the model's task sequence to the persistent slot.
    ///
    /// Executed before the next render, so the on-disk snapshot never lags
    /// the frame the user sees.
    Save,
}

impl<M> Cmd<M> {
    /// Convenience constructor for [`Cmd::None`].
    #[must_use]
    pub fn none() -> Self {
        Cmd::None
    }

    /// Convenience constructor for [`Cmd::Quit`].
    #[must_use]
    pub fn quit() -> Self {
        Cmd::Quit
    }
}

/// How long to block waiting for input before re-checking the running flag.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// The program runtime: owns the model, the store, and the terminal session.
pub struct Program<M: Model> {
    model: M,
    store: TaskStore,
    running: bool,
    dirty: bool,
}

impl<M: Model> Program<M> {
    /// Create a runtime over the given model and store.
    #[must_use]
    pub fn new(model: M, store: TaskStore) -> Self {
        Self {
            model,
            store,
            running: true,
            dirty: false,
        }
    }

    /// Borrow the model (frame assertions in tests).
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Borrow the store (persistence assertions in tests).
    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Whether the runtime is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run the main event loop on the process terminal.
    ///
    /// Sets up raw mode and the alternate screen, and restores both on every
    /// exit path, including errors.
    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.event_loop(&mut stdout);

        // Restore the terminal regardless of result, without clobbering the
        // loop's error.
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        result
    }

    fn event_loop(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let cmd = self.model.init();
        self.execute_cmd(cmd);

        // Seed the model with the real terminal size before the first frame.
        if let Ok((width, height)) = terminal::size() {
            self.dispatch(Event::Resize { width, height });
        }

        self.render(out)?;

        while self.running {
            if cte::poll(POLL_TIMEOUT)? {
                // Drain all pending events before rendering once.
                loop {
                    if let Some(event) = Event::from_crossterm(cte::read()?) {
                        self.dispatch(event);
                    }
                    if !cte::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            if self.dirty {
                self.render(out)?;
            }
        }

        Ok(())
    }

    /// Map an event to a message, update the model, and execute the returned
    /// command. Mutation, then persistence, then (via the dirty flag) a full
    /// re-render: that ordering is the contract.
    pub fn dispatch(&mut self, event: Event) {
        let msg = M::Message::from(event);
        let cmd = self.model.update(msg);
        self.dirty = true;
        self.execute_cmd(cmd);
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(msg) => {
                let cmd = self.model.update(msg);
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_cmd(cmd);
                }
            }
            Cmd::Save => {
                if let Err(e) = self.store.save(self.model.snapshot()) {
                    // Nothing is fatal: the in-memory list stays
                    // authoritative and the session continues.
                    warn!(backend = %self.store.backend_name(), error = %e, "failed to persist snapshot");
                }
            }
        }
    }

    /// Draw a complete frame from current state.
    pub fn render(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.model.view(out)?;
        out.flush()?;
        self.dirty = false;
        debug!("rendered frame");
        Ok(())
    }
}
