//! Registry of special-form directives.
//!
//! A handful of directives have argument shapes the generic
//! whitespace-separated grammar cannot express; the parser consults this
//! registry to dispatch them to dedicated handling. The built-in set matches
//! the standard distribution plus OpenResty, and new forms can be registered
//! for third-party modules.

use std::collections::HashMap;

/// How a directive's arguments deviate from the generic grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialForm {
    /// `if (...)`: the parenthesized condition is one logical argument even
    /// though it contains whitespace.
    IfCondition,
    /// `set $var value`: everything after the first argument is captured as
    /// a single verbatim argument up to the terminator.
    VerbatimTail,
    /// `return` / `rewrite`: parsed generically, but argument quoting must
    /// survive a rebuild (the quoted flags are authoritative).
    PreserveQuoting,
    /// `*_by_lua_block { ... }`: the block body is one opaque string
    /// argument, lexed with Lua awareness; the directive has no block.
    LuaBlock,
}

/// Maps directive names (exactly or by suffix) to their special form.
#[derive(Debug, Clone)]
pub struct Registry {
    exact: HashMap<String, SpecialForm>,
    suffixes: Vec<(String, SpecialForm)>,
}

impl Registry {
    /// An empty registry; every directive parses generically.
    pub fn empty() -> Self {
        Self {
            exact: HashMap::new(),
            suffixes: Vec::new(),
        }
    }

    /// Registers an exact directive name.
    pub fn register(&mut self, name: &str, form: SpecialForm) {
        self.exact.insert(name.to_string(), form);
    }

    /// Registers a name suffix (e.g. `_by_lua_block`).
    pub fn register_suffix(&mut self, suffix: &str, form: SpecialForm) {
        self.suffixes.push((suffix.to_string(), form));
    }

    /// The special form for `name`, if any. Exact matches win over suffixes.
    pub fn classify(&self, name: &str) -> Option<SpecialForm> {
        if let Some(&form) = self.exact.get(name) {
            return Some(form);
        }
        self.suffixes
            .iter()
            .find(|(suffix, _)| name.ends_with(suffix.as_str()))
            .map(|&(_, form)| form)
    }
}

impl Default for Registry {
    /// The standard set: `if`, `set`, `return`, `rewrite` and the OpenResty
    /// `*_by_lua_block` family.
    fn default() -> Self {
        let mut registry = Registry::empty();
        registry.register("if", SpecialForm::IfCondition);
        registry.register("set", SpecialForm::VerbatimTail);
        registry.register("return", SpecialForm::PreserveQuoting);
        registry.register("rewrite", SpecialForm::PreserveQuoting);
        registry.register_suffix("_by_lua_block", SpecialForm::LuaBlock);
        registry
    }
}

/// Whether a directive's block body is an opaque Lua chunk, per the default
/// registry. The builder uses this to emit the body verbatim.
pub fn is_lua_block(name: &str) -> bool {
    name.ends_with("_by_lua_block")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = Registry::default();
        assert_eq!(registry.classify("if"), Some(SpecialForm::IfCondition));
        assert_eq!(registry.classify("set"), Some(SpecialForm::VerbatimTail));
        assert_eq!(registry.classify("return"), Some(SpecialForm::PreserveQuoting));
        assert_eq!(
            registry.classify("content_by_lua_block"),
            Some(SpecialForm::LuaBlock)
        );
        assert_eq!(registry.classify("listen"), None);
    }

    #[test]
    fn test_exact_beats_suffix() {
        let mut registry = Registry::default();
        registry.register("content_by_lua_block", SpecialForm::VerbatimTail);
        assert_eq!(
            registry.classify("content_by_lua_block"),
            Some(SpecialForm::VerbatimTail)
        );
        // other members of the family still match the suffix
        assert_eq!(
            registry.classify("log_by_lua_block"),
            Some(SpecialForm::LuaBlock)
        );
    }

    #[test]
    fn test_custom_registration() {
        let mut registry = Registry::default();
        registry.register("my_expr", SpecialForm::IfCondition);
        assert_eq!(registry.classify("my_expr"), Some(SpecialForm::IfCondition));
    }
}
