//! Visitor comment CRUD and change notification.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::kv::KvStore;

pub const COMMENTS_KEY: &str = "portfolio-comments";

/// A visitor-submitted note. `id` and `timestamp` are set at creation and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: i64,
}

/// Partial update for [`CommentStore::update`]. Absent fields keep their
/// stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Observer = Rc<dyn Fn()>;

/// Owns the persisted comment list and broadcasts "comments changed" to every
/// subscriber on each mutating call.
///
/// All reads return independent snapshots; there are no shared mutable
/// references into the store.
pub struct CommentStore {
    kv: Rc<dyn KvStore>,
    subscribers: RefCell<Vec<(u64, Observer)>>,
    next_subscriber: Cell<u64>,
}

impl CommentStore {
    #[must_use]
    pub fn new(kv: Rc<dyn KvStore>) -> Self {
        Self {
            kv,
            subscribers: RefCell::new(Vec::new()),
            next_subscriber: Cell::new(1),
        }
    }

    /// Snapshot of the persisted list, newest first.
    ///
    /// Never fails: unreadable or unparseable data degrades to an empty list.
    #[must_use]
    pub fn list(&self) -> Vec<Comment> {
        let raw = match self.kv.get(COMMENTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                log::warn!("comment read failed, treating store as empty: {error}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(comments) => comments,
            Err(error) => {
                log::warn!("discarding corrupt comment data: {error}");
                Vec::new()
            }
        }
    }

    /// Stores a new comment at the front of the list and returns its id.
    ///
    /// Inputs are taken as already trimmed and non-empty; validation is the
    /// caller's responsibility.
    pub fn create(&self, name: &str, email: &str, message: &str) -> String {
        let mut comments = self.list();
        let id = next_comment_id(&comments);
        comments.insert(
            0,
            Comment {
                id: id.clone(),
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
                timestamp: now_unix_ms(),
            },
        );
        self.write(&comments);
        self.notify();
        id
    }

    /// Replaces the provided fields on the matching comment. A miss is a
    /// silent no-op and publishes no notification.
    pub fn update(&self, id: &str, patch: CommentPatch) {
        let mut comments = self.list();
        let Some(comment) = comments.iter_mut().find(|comment| comment.id == id) else {
            return;
        };
        if let Some(name) = patch.name {
            comment.name = name;
        }
        if let Some(email) = patch.email {
            comment.email = email;
        }
        if let Some(message) = patch.message {
            comment.message = message;
        }
        self.write(&comments);
        self.notify();
    }

    /// Removes the matching comment if present. Idempotent, and notifies even
    /// on a miss so observers can refresh unconditionally.
    pub fn delete(&self, id: &str) {
        let mut comments = self.list();
        comments.retain(|comment| comment.id != id);
        self.write(&comments);
        self.notify();
    }

    /// Empties the list unconditionally.
    pub fn clear(&self) {
        self.write(&[]);
        self.notify();
    }

    pub fn subscribe(&self, observer: impl Fn() + 'static) -> SubscriberId {
        let id = self.next_subscriber.get();
        self.next_subscriber.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(observer)));
        SubscriberId(id)
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers
            .borrow_mut()
            .retain(|(subscriber, _)| *subscriber != id.0);
    }

    fn write(&self, comments: &[Comment]) {
        let raw = match serde_json::to_string(comments) {
            Ok(raw) => raw,
            Err(error) => {
                log::warn!("failed to serialize comments, keeping previous value: {error}");
                return;
            }
        };
        if let Err(error) = self.kv.set(COMMENTS_KEY, &raw) {
            log::warn!("comment write failed, keeping previous value: {error}");
        }
    }

    fn notify(&self) {
        // Snapshot first so a callback may subscribe or mutate the store
        // without hitting a re-entrant borrow.
        let observers: Vec<Observer> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer();
        }
    }
}

/// The smallest unused positive integer id, rendered as a string.
///
/// Non-numeric ids (from older data) are ignored for the maximum but remain
/// valid list members.
#[must_use]
pub fn next_comment_id(comments: &[Comment]) -> String {
    let max = comments
        .iter()
        .filter_map(|comment| comment.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_unix_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
