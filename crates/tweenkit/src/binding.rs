//! Target bindings: generic read/write access to an external mutable value.
//!
//! A binding carries caller-supplied closures over whatever field is being
//! animated; the core never inspects or owns the target itself. Any missing
//! piece (getter, setter, or plugin) degrades value application to a no-op
//! rather than an error.

use std::fmt;

use crate::plugin::Plugin;
use crate::value::Value;

/// Reads the current value of the bound target.
pub type TweenGetter = Box<dyn Fn() -> Value>;
/// Writes an interpolated value back to the bound target.
pub type TweenSetter = Box<dyn FnMut(Value)>;

#[derive(Default)]
pub struct Binding {
    pub getter: Option<TweenGetter>,
    pub setter: Option<TweenSetter>,
    pub plugin: Option<Plugin>,
}

impl Binding {
    pub fn new(
        getter: impl Fn() -> Value + 'static,
        setter: impl FnMut(Value) + 'static,
        plugin: Plugin,
    ) -> Self {
        Self {
            getter: Some(Box::new(getter)),
            setter: Some(Box::new(setter)),
            plugin: Some(plugin),
        }
    }

    /// A binding with no target access; used for Wait entries in sequences.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read the target's current value, if a getter is bound.
    #[inline]
    pub fn read(&self) -> Option<Value> {
        self.getter.as_ref().map(|g| g())
    }

    /// Blend `start` toward `end` at progress `t` and write the result to the
    /// target. Silently does nothing unless both setter and plugin are bound.
    pub fn apply(&mut self, start: &Value, end: &Value, t: f32) {
        let Some(plugin) = self.plugin else { return };
        let Some(setter) = self.setter.as_mut() else {
            return;
        };
        setter(plugin.evaluate(start, end, t));
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("getter", &self.getter.is_some())
            .field("setter", &self.setter.is_some())
            .field("plugin", &self.plugin)
            .finish()
    }
}
