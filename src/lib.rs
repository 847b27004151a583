//! In-page "terminal" widget core for a single-page portfolio site.
//!
//! Two cooperating components: the command [`Interpreter`] (registry,
//! parsing, scrollback, input history, session state) and the
//! [`CommentStore`] CRUD layer re-exported from `local_store`. The
//! presentation shell plugs in through the [`Host`] trait (navigation, theme
//! application, comment-form focus) and reads interpreter state back through
//! the pure [`view`] helpers.
//!
//! Invariant: every submitted line appends exactly one scrollback entry,
//! except `/clear` which empties the scrollback and appends nothing.
//!
//! # Public API Overview
//! - Drive the widget with [`Interpreter::submit`], [`Interpreter::autocomplete`],
//!   and [`Interpreter::navigate_history`].
//! - Persist through any [`KvStore`]: [`MemoryKv`] for tests, [`DirKv`] for
//!   real shells.
//! - Observe comment mutations via [`CommentStore::subscribe`].
//! - Format output with the width-aware helpers in [`view`].

pub mod commands;
pub mod config;
pub mod interpreter;
pub mod session;
pub mod view;

/// Command registry and line parsing.
pub use crate::commands::{help_lines, parse_command, split_input, suggest, Command, CommandSpec, COMMANDS};

/// Owner content and environment overrides.
pub use crate::config::TerminalConfig;

/// The interpreter core and its presentation-shell contract.
pub use crate::interpreter::{HistoryDirection, Host, Interpreter, ScrollbackEntry};

/// Transient per-tab state.
pub use crate::session::{SessionState, SiteTheme, VisualMode, WindowPosition};

/// Width-aware text projection helpers.
pub use crate::view::{
    pad_to_width, render_scrollback, render_suggestions, render_title, truncate_to_width,
};

/// Persistence layer re-exports for shells that wire their own storage.
pub use local_store::{
    Comment, CommentPatch, CommentStore, DirKv, KvStore, MemoryKv, Preferences, StoreError,
    SubscriberId,
};
