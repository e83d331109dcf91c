// Document traits - the live chart document as the history queue sees it

use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a live document.
///
/// The queue is single-threaded and cooperative, so `Rc<RefCell<_>>` is
/// enough: recorded argument lists carry the same handle the replayed
/// handlers receive, and identity is observable via `Rc::ptr_eq`.
pub type DocumentHandle<D> = Rc<RefCell<D>>;

/// The mutable document a history queue records edits against.
///
/// The queue never looks inside the document; it only reads and writes the
/// transient replaying flag and asks for the optional alternate-history
/// capability. Everything else about the document belongs to the host
/// application and its registered handlers.
pub trait Document {
    /// True while a recorded undo or redo call is being replayed against
    /// this document.
    fn is_replaying(&self) -> bool;

    /// Set or clear the transient replaying flag.
    fn set_replaying(&mut self, replaying: bool);

    /// Alternate history handler, for documents that manage their own
    /// history (legacy chart frameworks). When present, `undo` and `redo`
    /// forward to it and never touch the queue.
    fn alternate_history(&mut self) -> Option<&mut dyn HistoryDelegate> {
        None
    }
}

/// Undo/redo surface of an alternate history implementation.
pub trait HistoryDelegate {
    fn undo(&mut self);
    fn redo(&mut self);
}
