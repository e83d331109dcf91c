// Argument snapshots - isolate replayed calls from live document state

use std::rc::Rc;

use super::args::{Arg, ArgValue};

/// Copy an argument list for replay.
///
/// The document handle passes through by identity and is never copied; every
/// other element is copied so the handler sees the values as they were when
/// the call was recorded. Object arguments keep every property, including
/// ones explicitly set to [`ArgValue::Unset`]: handlers tell "clear this
/// field" apart from "leave this field untouched" by the property's mere
/// presence, so any copy or merge step that strips unset-valued properties
/// is wrong here. Unset values nested inside list elements get no such
/// guarantee beyond ordinary cloning.
pub fn snapshot_args<D>(args: &[Arg<D>]) -> Vec<Arg<D>> {
    args.iter().map(snapshot_arg).collect()
}

fn snapshot_arg<D>(arg: &Arg<D>) -> Arg<D> {
    match arg {
        // the live document is not payload: same handle, never a copy
        Arg::Doc(handle) => Arg::Doc(Rc::clone(handle)),
        Arg::Value(ArgValue::List(items)) => Arg::Value(ArgValue::List(items.to_vec())),
        Arg::Value(ArgValue::Object(entries)) => {
            // every entry survives, unset-valued ones included
            let copy = entries
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            Arg::Value(ArgValue::Object(copy))
        }
        Arg::Value(value) => Arg::Value(value.clone()),
    }
}
