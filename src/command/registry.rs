// Handler registry - replay dispatch table for reversible edits

use std::collections::HashMap;

use super::args::Arg;
use super::error::CommandResult;

/// A registered reversible-edit handler.
///
/// Handlers receive the snapshotted argument list; when the document takes
/// part in the call it rides inside the list as [`Arg::Doc`]. A handler must
/// be safe to re-invoke with snapshotted arguments and must not hold a
/// mutable document borrow when it calls back into the queue.
pub type HandlerFn<D> = Box<dyn Fn(&[Arg<D>]) -> CommandResult<()>>;

/// Maps static handler tags to the functions replay dispatches through.
///
/// The queue records only tags, never callables, so recorded groups stay
/// plain cloneable data. The host application registers its edit operations
/// once at startup.
pub struct HandlerRegistry<D> {
    handlers: HashMap<&'static str, HandlerFn<D>>,
}

impl<D> HandlerRegistry<D> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` under `tag`, replacing any previous registration.
    pub fn register<F>(&mut self, tag: &'static str, handler: F)
    where
        F: Fn(&[Arg<D>]) -> CommandResult<()> + 'static,
    {
        if self.handlers.insert(tag, Box::new(handler)).is_some() {
            log::debug!("handler `{tag}` re-registered");
        }
    }

    /// Look a handler up by tag.
    pub fn get(&self, tag: &str) -> Option<&HandlerFn<D>> {
        self.handlers.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<D> Default for HandlerRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::args::ArgValue;

    struct Doc;

    #[test]
    fn test_register_and_dispatch() {
        let mut registry: HandlerRegistry<Doc> = HandlerRegistry::new();
        registry.register("noop", |_args| Ok(()));

        assert!(registry.contains("noop"));
        assert!(!registry.contains("relayout"));
        assert_eq!(registry.len(), 1);

        let handler = registry.get("noop").unwrap();
        handler(&[Arg::Value(ArgValue::Int(1))]).unwrap();
    }

    #[test]
    fn test_re_registration_replaces() {
        let mut registry: HandlerRegistry<Doc> = HandlerRegistry::new();
        registry.register("op", |_args| Ok(()));
        registry.register("op", |_args| {
            Err(crate::command::error::CommandError::ExecutionFailed(
                "second".into(),
            ))
        });

        assert_eq!(registry.len(), 1);
        assert!(registry.get("op").unwrap()(&[]).is_err());
    }
}
