// MyChart history - library exports

pub mod command;
pub mod document;

// Re-export commonly used types for convenience
pub use command::{
    Arg, ArgValue, CommandError, CommandGroup, CommandResult, EditCall, HandlerFn,
    HandlerRegistry, History, RefreshHook, snapshot_args,
};
pub use document::{Document, DocumentHandle, HistoryDelegate};
