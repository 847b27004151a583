//! Browser-localStorage-style persistence for the portfolio terminal.
//!
//! Two logical key families live behind the same [`KvStore`] boundary:
//!
//! - the visitor comment list (a JSON array under [`COMMENTS_KEY`]), owned by
//!   [`CommentStore`] together with its change-notification fan-out, and
//! - scalar preferences (admin flag, site version, default theme), exposed
//!   through [`Preferences`].
//!
//! Contract notes:
//! - Reads never fail upward. Unreadable or corrupt data degrades to an empty
//!   list / default value with a warning log.
//! - Every mutating call rewrites its whole key, so each key is atomic from
//!   the caller's point of view. There is no cross-key transaction.
//! - All types are single-threaded by design (the reference runtime is a
//!   browser event loop); shared access goes through `Rc`.

mod comments;
mod error;
mod kv;
mod prefs;

pub use comments::{
    next_comment_id, now_unix_ms, Comment, CommentPatch, CommentStore, SubscriberId, COMMENTS_KEY,
};
pub use error::StoreError;
pub use kv::{sanitize_key, DirKv, KvStore, MemoryKv};
pub use prefs::{Preferences, ADMIN_KEY, DEFAULT_THEME_KEY, VERSION_KEY};
