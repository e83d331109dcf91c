// Edit calls and command groups - the recorded units of undo/redo

use std::fmt;

use super::args::Arg;

/// A single recorded call: the tag of a registered handler plus the argument
/// list to replay it with. Calls are plain data; the handler itself lives in
/// the [`HandlerRegistry`](super::registry::HandlerRegistry).
pub struct EditCall<D> {
    pub handler: &'static str,
    pub args: Vec<Arg<D>>,
}

impl<D> EditCall<D> {
    pub fn new(handler: &'static str, args: Vec<Arg<D>>) -> Self {
        Self { handler, args }
    }
}

impl<D> Clone for EditCall<D> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler,
            args: self.args.clone(),
        }
    }
}

impl<D> fmt::Debug for EditCall<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditCall")
            .field("handler", &self.handler)
            .field("args", &self.args)
            .finish()
    }
}

/// One undoable step, possibly composed of several primitive edits.
///
/// `undo_calls` is kept in reverse-of-recording order so a forward loop over
/// it fully undoes the group; `redo_calls` stays in recording order.
pub struct CommandGroup<D> {
    pub(crate) undo_calls: Vec<EditCall<D>>,
    pub(crate) redo_calls: Vec<EditCall<D>>,
}

impl<D> CommandGroup<D> {
    /// Undo batch, in execution order.
    pub fn undo_calls(&self) -> &[EditCall<D>] {
        &self.undo_calls
    }

    /// Redo batch, in execution order.
    pub fn redo_calls(&self) -> &[EditCall<D>] {
        &self.redo_calls
    }
}

impl<D> Default for CommandGroup<D> {
    fn default() -> Self {
        Self {
            undo_calls: Vec::new(),
            redo_calls: Vec::new(),
        }
    }
}

impl<D> fmt::Debug for CommandGroup<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandGroup")
            .field("undo_calls", &self.undo_calls)
            .field("redo_calls", &self.redo_calls)
            .finish()
    }
}
