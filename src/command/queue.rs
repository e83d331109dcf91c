// History queue - cursor-based undo/redo state machine

use std::cell::RefCell;

use crate::document::{Document, DocumentHandle};

use super::error::{CommandError, CommandResult};
use super::group::{CommandGroup, EditCall};
use super::registry::HandlerRegistry;
use super::snapshot::snapshot_args;

/// Hook fired after every replayed call, e.g. to redraw an open style
/// overlay. Best-effort: failures are logged and swallowed.
pub type RefreshHook<D> = Box<dyn Fn(&DocumentHandle<D>) -> CommandResult<()>>;

/// Recorded groups plus the cursor separating undoable past from redoable
/// future, and the recording-mode flags.
struct HistoryQueue<D> {
    /// Cursor position, `0..=groups.len()`. Groups below it can be undone,
    /// groups at or above it can be redone.
    index: usize,
    groups: Vec<CommandGroup<D>>,
    /// Subsequent `add` calls collapse into the group at `index - 1`.
    recording_sequence: bool,
    /// Set by `start_sequence`, consumed by the first `add` after it.
    sequence_started: bool,
    /// An undo or redo batch is replaying; `add` must not record.
    replaying: bool,
}

impl<D> Default for HistoryQueue<D> {
    fn default() -> Self {
        Self {
            index: 0,
            groups: Vec::new(),
            recording_sequence: false,
            sequence_started: false,
            replaying: false,
        }
    }
}

/// Undo/redo controller for one document.
///
/// Edit code records each reversible operation with [`add`](History::add),
/// supplying the call that reverses it and the call that reapplies it.
/// [`undo`](History::undo) and [`redo`](History::redo) move the cursor and
/// replay the recorded batch through the registered handlers.
///
/// The controller takes `&self` throughout: queue state sits behind a
/// `RefCell`, and no borrow of it or of the document is held while a handler
/// runs, so a replayed handler may call back into the queue. A re-entrant
/// `add` is suppressed by the replaying flags rather than recorded.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use mychart_history::{Arg, ArgValue, Document, EditCall, HandlerRegistry, History};
///
/// struct Chart {
///     title: Option<String>,
///     replaying: bool,
/// }
///
/// impl Document for Chart {
///     fn is_replaying(&self) -> bool {
///         self.replaying
///     }
///     fn set_replaying(&mut self, replaying: bool) {
///         self.replaying = replaying;
///     }
/// }
///
/// let mut registry: HandlerRegistry<Chart> = HandlerRegistry::new();
/// registry.register("set_title", |args| {
///     let doc = args[0].doc().expect("first argument is the document");
///     doc.borrow_mut().title = match args[1].value() {
///         Some(ArgValue::Str(title)) => Some(title.clone()),
///         _ => None,
///     };
///     Ok(())
/// });
///
/// // the edit itself has already been applied; record how to reverse it
/// let doc = Rc::new(RefCell::new(Chart {
///     title: Some("after".into()),
///     replaying: false,
/// }));
/// let history = History::new();
/// history.add(
///     &doc,
///     EditCall::new("set_title", vec![Arg::Doc(doc.clone()), ArgValue::from("before").into()]),
///     EditCall::new("set_title", vec![Arg::Doc(doc.clone()), ArgValue::from("after").into()]),
/// );
///
/// history.undo(&doc, &registry)?;
/// assert_eq!(doc.borrow().title.as_deref(), Some("before"));
/// history.redo(&doc, &registry)?;
/// assert_eq!(doc.borrow().title.as_deref(), Some("after"));
/// # Ok::<(), mychart_history::CommandError>(())
/// ```
pub struct History<D> {
    state: RefCell<HistoryQueue<D>>,
    refresh: Option<RefreshHook<D>>,
}

impl<D: Document> History<D> {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(HistoryQueue::default()),
            refresh: None,
        }
    }

    /// Install the refresh hook fired after each replayed call.
    pub fn set_refresh(&mut self, hook: RefreshHook<D>) {
        self.refresh = Some(hook);
    }

    /// Record one reversible edit: `undo_call` reverses it, `redo_call`
    /// reapplies it.
    ///
    /// Outside a sequence each call starts a new group, discarding any
    /// redoable future. Within a sequence the open group absorbs the call:
    /// its undo batch grows from the front and its redo batch from the back,
    /// so each batch replays in the right order later. Calls made while a
    /// replay is in flight are dropped.
    ///
    /// The caller must not hold a mutable borrow of `doc` across this call.
    pub fn add(&self, doc: &DocumentHandle<D>, undo_call: EditCall<D>, redo_call: EditCall<D>) {
        let mut state = self.state.borrow_mut();

        // Either a replayed handler re-entering the queue, or a stale flag
        // left by an edit applied outside it. Don't record; in the stale
        // case also repair the flag.
        let doc_replaying = doc.borrow().is_replaying();
        if doc_replaying {
            if !state.replaying {
                doc.borrow_mut().set_replaying(false);
            }
            log::debug!("add of `{}` suppressed during replay", redo_call.handler);
            return;
        }

        if !state.recording_sequence || state.sequence_started {
            let cursor = state.index;
            state.groups.truncate(cursor);
            state.groups.push(CommandGroup::default());
            state.index += 1;
        }
        state.sequence_started = false;

        log::trace!(
            "recorded `{}` (undo via `{}`)",
            redo_call.handler,
            undo_call.handler
        );

        let cursor = state.index;
        let group = &mut state.groups[cursor - 1];
        group.undo_calls.insert(0, undo_call);
        group.redo_calls.push(redo_call);
    }

    /// Open a sequence: subsequent `add` calls collapse into a single
    /// undoable group until [`stop_sequence`](History::stop_sequence).
    /// Idempotent.
    pub fn start_sequence(&self) {
        let mut state = self.state.borrow_mut();
        state.recording_sequence = true;
        state.sequence_started = true;
    }

    /// Close the open sequence. Call this only once the edit chain is
    /// complete: stopping early splits what was meant to be one undo step.
    pub fn stop_sequence(&self) {
        let mut state = self.state.borrow_mut();
        state.recording_sequence = false;
        state.sequence_started = false;
    }

    /// Step one group back and replay its undo batch.
    ///
    /// Forwards to the document's alternate history handler when one is
    /// present, bypassing the queue entirely. With nothing to undo this is
    /// a silent no-op, so UI buttons can call it blindly. A failing handler
    /// propagates its error; the cursor stays on the group it moved to.
    pub fn undo(&self, doc: &DocumentHandle<D>, registry: &HandlerRegistry<D>) -> CommandResult<()> {
        {
            let mut doc_ref = doc.borrow_mut();
            if let Some(alternate) = doc_ref.alternate_history() {
                alternate.undo();
                return Ok(());
            }
        }

        let calls = {
            let mut state = self.state.borrow_mut();
            if state.index == 0 {
                return Ok(());
            }
            // the cursor points at the next forward group; step onto the
            // one being undone
            state.index -= 1;
            state.replaying = true;
            let cursor = state.index;
            state.groups[cursor].undo_calls.to_vec()
        };

        log::debug!("undoing a group of {} call(s)", calls.len());
        self.replay(doc, registry, &calls)
    }

    /// Replay the current group's redo batch and step one group forward.
    ///
    /// Same contract as [`undo`](History::undo); the cursor moves only after
    /// the whole batch replayed successfully.
    pub fn redo(&self, doc: &DocumentHandle<D>, registry: &HandlerRegistry<D>) -> CommandResult<()> {
        {
            let mut doc_ref = doc.borrow_mut();
            if let Some(alternate) = doc_ref.alternate_history() {
                alternate.redo();
                return Ok(());
            }
        }

        let calls = {
            let mut state = self.state.borrow_mut();
            if state.index >= state.groups.len() {
                return Ok(());
            }
            state.replaying = true;
            let cursor = state.index;
            state.groups[cursor].redo_calls.to_vec()
        };

        log::debug!("redoing a group of {} call(s)", calls.len());
        self.replay(doc, registry, &calls)?;

        // the cursor points at the group just redone; move past it
        self.state.borrow_mut().index += 1;
        Ok(())
    }

    /// Run one batch through `plot_do`, then clear the replay flags whether
    /// or not every call succeeded. The queue stays usable after a failed
    /// replay even though the cursor is not rolled back.
    fn replay(
        &self,
        doc: &DocumentHandle<D>,
        registry: &HandlerRegistry<D>,
        calls: &[EditCall<D>],
    ) -> CommandResult<()> {
        let mut outcome = Ok(());
        for call in calls {
            outcome = self.plot_do(doc, registry, call);
            if outcome.is_err() {
                break;
            }
        }

        self.state.borrow_mut().replaying = false;
        doc.borrow_mut().set_replaying(false);
        outcome
    }

    /// The single funnel every undo and redo call passes through: marks the
    /// document as replaying, snapshots the arguments, and dispatches the
    /// registered handler.
    fn plot_do(
        &self,
        doc: &DocumentHandle<D>,
        registry: &HandlerRegistry<D>,
        call: &EditCall<D>,
    ) -> CommandResult<()> {
        doc.borrow_mut().set_replaying(true);

        let args = snapshot_args(&call.args);

        let handler = registry
            .get(call.handler)
            .ok_or_else(|| CommandError::UnknownHandler(call.handler.to_string()))?;
        handler(&args)?;

        if let Some(refresh) = &self.refresh {
            if let Err(err) = refresh(doc) {
                log::warn!("refresh hook failed after `{}`: {err}", call.handler);
            }
        }
        Ok(())
    }

    /// Check if there is a group to undo.
    pub fn can_undo(&self) -> bool {
        self.state.borrow().index > 0
    }

    /// Check if there is a group to redo.
    pub fn can_redo(&self) -> bool {
        let state = self.state.borrow();
        state.index < state.groups.len()
    }

    /// Number of groups behind the cursor.
    pub fn undo_depth(&self) -> usize {
        self.state.borrow().index
    }

    /// Number of groups ahead of the cursor.
    pub fn redo_depth(&self) -> usize {
        let state = self.state.borrow();
        state.groups.len() - state.index
    }

    /// Drop all recorded groups and reset the cursor.
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.groups.clear();
        state.index = 0;
    }
}

impl<D: Document> Default for History<D> {
    fn default() -> Self {
        Self::new()
    }
}
