// Undo/redo command queue for reversible chart edits
//
// Edit code records each operation together with its precomputed inverse;
// the queue keeps a linear history of groups and a cursor, and replays the
// recorded batches on undo and redo. Sequences collapse several primitive
// edits into one undoable step.
//
// Architecture:
// - args/snapshot: payload values with an explicit unset sentinel, copied
//   for replay without losing unset-valued properties
// - group: EditCall (handler tag + argument list) and CommandGroup
// - registry: tag -> handler dispatch table, populated by the host app
// - queue: History controller and the cursor state machine
//
// Replay integration:
// - handlers run against the live document carried inside the argument list
// - the document's replaying flag suppresses re-entrant recording, so
//   handlers that normally record themselves can be replayed as-is

pub mod args;
pub mod error;
pub mod group;
pub mod queue;
pub mod registry;
pub mod snapshot;

pub use args::{Arg, ArgValue};
pub use error::{CommandError, CommandResult};
pub use group::{CommandGroup, EditCall};
pub use queue::{History, RefreshHook};
pub use registry::{HandlerFn, HandlerRegistry};
pub use snapshot::snapshot_args;
