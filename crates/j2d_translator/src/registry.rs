//! Binding registry: which Dart identifiers denote which Java symbol.
//!
//! Every identifier emitted for a declared entity is recorded under the
//! entity's binding key. After the whole batch is translated, a rename of
//! one key rewrites the text of all its occurrences, in every unit, through
//! the shared [`IdentifierTable`].

use j2d_core::collections::{FxHashMap, MultiMap};
use j2d_dart_ast::{IdentifierId, IdentifierTable, SimpleIdentifier};
use thiserror::Error;

/// How identifiers without a resolved binding are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// Unresolved identifiers are not registered and never renamed.
    #[default]
    ResolvedOnly,
    /// Unresolved identifiers are keyed by their text. Same-named symbols
    /// from different scopes then share a key; see
    /// [`BindingRegistry::collisions`].
    BestEffort,
}

/// A text-derived key that occurs in more than one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: String,
    /// Scopes the key was seen in, in registration order. A scope is the
    /// unit path, followed by `#` and the dotted names of the enclosing
    /// declarations when there are any (`A.java#A.f`).
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("key '{key}' was derived from identifier text in several scopes ({}); refusing to rename", scopes.join(", "))]
    AmbiguousFallbackKey { key: String, scopes: Vec<String> },
}

#[derive(Debug, Default)]
pub struct BindingRegistry {
    identifiers: IdentifierTable,
    occurrences: MultiMap<String, IdentifierId>,
    keys: FxHashMap<IdentifierId, String>,
    /// Scopes in which each text-derived key was registered.
    fallback_scopes: FxHashMap<String, Vec<String>>,
    policy: KeyPolicy,
    current_unit: String,
    /// Names of the declarations enclosing the current position.
    scope_path: Vec<String>,
}

impl BindingRegistry {
    pub fn new(policy: KeyPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    /// Fallback keys registered from now on are attributed to `unit`.
    pub fn begin_unit(&mut self, unit: impl Into<String>) {
        self.current_unit = unit.into();
        self.scope_path.clear();
    }

    /// Narrows the scope of fallback keys to the declaration `name` inside
    /// the current scope, until the matching [`exit_scope`](Self::exit_scope).
    pub fn enter_scope(&mut self, name: impl Into<String>) {
        self.scope_path.push(name.into());
    }

    pub fn exit_scope(&mut self) {
        self.scope_path.pop();
    }

    /// The scope fallback keys are currently attributed to.
    pub fn current_scope(&self) -> String {
        if self.scope_path.is_empty() {
            self.current_unit.clone()
        } else {
            format!("{}#{}", self.current_unit, self.scope_path.join("."))
        }
    }

    /// A fresh, unregistered identifier occurrence.
    pub fn new_identifier(&mut self, name: impl Into<String>) -> SimpleIdentifier {
        SimpleIdentifier { id: self.identifiers.create(name) }
    }

    /// Records `identifier` as an occurrence of `key`. Without a key, the
    /// identifier's text is used under [`KeyPolicy::BestEffort`] and the
    /// identifier stays unregistered otherwise.
    ///
    /// Returns whether the identifier was registered.
    pub fn register(&mut self, key: Option<&str>, identifier: &SimpleIdentifier) -> bool {
        if self.keys.contains_key(&identifier.id) {
            return false;
        }
        let key = match key {
            Some(key) => key.to_string(),
            None if self.policy == KeyPolicy::BestEffort => {
                let key = self.identifiers.name(identifier.id).to_string();
                let scope = self.current_scope();
                let scopes = self.fallback_scopes.entry(key.clone()).or_default();
                if !scopes.contains(&scope) {
                    scopes.push(scope);
                }
                key
            }
            None => return false,
        };
        self.occurrences.insert(key.clone(), identifier.id);
        self.keys.insert(identifier.id, key);
        true
    }

    pub fn occurrences(&self, key: &str) -> &[IdentifierId] {
        self.occurrences.get(key)
    }

    pub fn key_of(&self, identifier: &SimpleIdentifier) -> Option<&str> {
        self.keys.get(&identifier.id).map(String::as_str)
    }

    /// Registered keys with their occurrence counts, in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = (&str, usize)> {
        self.occurrences.iter().map(|(key, ids)| (key.as_str(), ids.len()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Number of registered identifier occurrences.
    pub fn occurrence_count(&self) -> usize {
        self.keys.len()
    }

    /// Text-derived keys seen in more than one scope.
    pub fn collisions(&self) -> Vec<KeyCollision> {
        let mut collisions: Vec<KeyCollision> = self
            .fallback_scopes
            .iter()
            .filter(|(_, scopes)| scopes.len() > 1)
            .map(|(key, scopes)| KeyCollision { key: key.clone(), scopes: scopes.clone() })
            .collect();
        collisions.sort_by(|a, b| a.key.cmp(&b.key));
        collisions
    }

    /// Sets the text of every occurrence of `key` to `new_name` and returns
    /// how many occurrences changed. Renaming an unknown key changes nothing.
    pub fn rename_all(&mut self, key: &str, new_name: &str) -> Result<usize, RegistryError> {
        if let Some(scopes) = self.fallback_scopes.get(key).filter(|scopes| scopes.len() > 1) {
            return Err(RegistryError::AmbiguousFallbackKey { key: key.to_string(), scopes: scopes.clone() });
        }
        let occurrences = self.occurrences.get(key);
        for id in occurrences {
            self.identifiers.set_name(*id, new_name);
        }
        Ok(occurrences.len())
    }

    pub fn identifiers(&self) -> &IdentifierTable {
        &self.identifiers
    }

    /// The identifier table, for callers that outlive the registry.
    pub fn into_identifiers(self) -> IdentifierTable {
        self.identifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_rewrites_every_occurrence() {
        let mut registry = BindingRegistry::new(KeyPolicy::ResolvedOnly);
        let declaration = registry.new_identifier("foo");
        let call = registry.new_identifier("foo");
        let other = registry.new_identifier("foo");
        assert!(registry.register(Some("LA;.foo(I)V"), &declaration));
        assert!(registry.register(Some("LA;.foo(I)V"), &call));
        assert!(registry.register(Some("LA;.foo()V"), &other));

        assert_eq!(registry.rename_all("LA;.foo(I)V", "foo2"), Ok(2));
        assert_eq!(registry.identifiers().name(declaration.id), "foo2");
        assert_eq!(registry.identifiers().name(call.id), "foo2");
        assert_eq!(registry.identifiers().name(other.id), "foo");

        // A second rename overwrites the first.
        assert_eq!(registry.rename_all("LA;.foo(I)V", "bar"), Ok(2));
        assert_eq!(registry.identifiers().name(call.id), "bar");
        assert_eq!(registry.key_of(&call), Some("LA;.foo(I)V"));
    }

    #[test]
    fn unresolved_identifiers_are_skipped_by_default() {
        let mut registry = BindingRegistry::default();
        let print = registry.new_identifier("print");
        assert!(!registry.register(None, &print));
        assert!(registry.is_empty());
        assert_eq!(registry.rename_all("print", "log"), Ok(0));
        assert_eq!(registry.identifiers().name(print.id), "print");
    }

    #[test]
    fn identifiers_register_once() {
        let mut registry = BindingRegistry::default();
        let x = registry.new_identifier("x");
        assert!(registry.register(Some("k"), &x));
        assert!(!registry.register(Some("k"), &x));
        assert_eq!(registry.occurrences("k").len(), 1);
        assert_eq!(registry.occurrence_count(), 1);
    }

    #[test]
    fn best_effort_keys_report_collisions() {
        let mut registry = BindingRegistry::new(KeyPolicy::BestEffort);
        registry.begin_unit("A.java");
        let first = registry.new_identifier("print");
        let local = registry.new_identifier("tmp");
        registry.register(None, &first);
        registry.register(None, &local);
        registry.begin_unit("B.java");
        let second = registry.new_identifier("print");
        registry.register(None, &second);

        assert_eq!(
            registry.collisions(),
            vec![KeyCollision { key: "print".into(), scopes: vec!["A.java".into(), "B.java".into()] }]
        );
        assert!(matches!(
            registry.rename_all("print", "log"),
            Err(RegistryError::AmbiguousFallbackKey { .. })
        ));
        assert_eq!(registry.identifiers().name(first.id), "print");
        assert_eq!(registry.rename_all("tmp", "scratch"), Ok(1));
        assert_eq!(registry.identifiers().name(local.id), "scratch");
    }

    #[test]
    fn declarations_narrow_the_fallback_scope() {
        let mut registry = BindingRegistry::new(KeyPolicy::BestEffort);
        registry.begin_unit("A.java");
        assert_eq!(registry.current_scope(), "A.java");
        registry.enter_scope("A");
        registry.enter_scope("f");
        let first = registry.new_identifier("print");
        let again = registry.new_identifier("print");
        registry.register(None, &first);
        registry.register(None, &again);
        assert_eq!(registry.current_scope(), "A.java#A.f");
        registry.exit_scope();
        registry.exit_scope();
        assert!(registry.collisions().is_empty());

        registry.enter_scope("B");
        let second = registry.new_identifier("print");
        registry.register(None, &second);
        assert_eq!(
            registry.collisions(),
            vec![KeyCollision { key: "print".into(), scopes: vec!["A.java#A.f".into(), "A.java#B".into()] }]
        );
        assert!(registry.rename_all("print", "log").is_err());

        registry.begin_unit("B.java");
        assert_eq!(registry.current_scope(), "B.java");
    }
}
