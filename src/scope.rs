use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Every known scope, keyed by alias.
///
/// Built on first use and never modified afterwards.
static REGISTRY: Lazy<HashMap<&'static str, Scope>> = Lazy::new(|| {
    crate::legacy::scopes::ALL
        .iter()
        .chain(crate::basic_display::scopes::ALL)
        .chain(crate::graph::scopes::ALL)
        .map(|scope| (scope.alias(), *scope))
        .collect()
});

/// A named oauth permission.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    alias: &'static str,
    name: &'static str,
    description: &'static str,
}

impl Scope {
    /// Make a new [`Scope`].
    pub const fn new(alias: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            alias,
            name,
            description,
        }
    }

    /// The alias, which is the value sent to the api.
    pub fn alias(&self) -> &'static str {
        self.alias
    }

    /// A human readable name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// A description of what this scope grants.
    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.alias)
    }
}

/// Look up a scope by alias.
pub fn get(alias: &str) -> Option<Scope> {
    REGISTRY.get(alias).copied()
}

/// Check whether a scope with the given alias is known.
pub fn exists(alias: &str) -> bool {
    REGISTRY.contains_key(alias)
}

/// Iterate over every known scope, in no particular order.
pub fn all() -> impl Iterator<Item = Scope> {
    REGISTRY.values().copied()
}

/// An ordered list of scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeList(Vec<Scope>);

impl ScopeList {
    /// Make an empty [`ScopeList`].
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a scope if it is not already present.
    pub fn push(&mut self, scope: Scope) {
        if !self.0.contains(&scope) {
            self.0.push(scope);
        }
    }

    /// Add a scope, returning self.
    pub fn with(mut self, scope: Scope) -> Self {
        self.push(scope);
        self
    }

    /// Parse a list of aliases separated by commas or whitespace.
    ///
    /// Returns the first unknown alias on failure.
    pub fn parse(aliases: &str) -> Result<Self, String> {
        let mut list = Self::new();
        for alias in aliases
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|alias| !alias.is_empty())
        {
            list.push(get(alias).ok_or_else(|| alias.to_string())?);
        }
        Ok(list)
    }

    /// Whether there are no scopes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of scopes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the scopes.
    pub fn iter(&self) -> std::slice::Iter<'_, Scope> {
        self.0.iter()
    }

    /// Join the aliases with the given separator.
    pub fn join(&self, separator: &str) -> String {
        let mut ret = String::new();
        for (i, scope) in self.0.iter().enumerate() {
            if i != 0 {
                ret.push_str(separator);
            }
            ret.push_str(scope.alias);
        }
        ret
    }
}

impl From<&[Scope]> for ScopeList {
    fn from(scopes: &[Scope]) -> Self {
        scopes.iter().copied().collect()
    }
}

impl FromIterator<Scope> for ScopeList {
    fn from_iter<I: IntoIterator<Item = Scope>>(iter: I) -> Self {
        let mut list = Self::new();
        for scope in iter {
            list.push(scope);
        }
        list
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        basic_display,
        graph,
        legacy,
    };

    #[test]
    fn registry_lookup() {
        let scope = get("instagram_basic").expect("missing scope");
        assert!(scope == graph::scopes::INSTAGRAM_BASIC);
        assert!(exists("user_media"));
        assert!(exists("public_content"));
        assert!(!exists("not_a_scope"));
        assert!(get("").is_none());
    }

    #[test]
    fn aliases_are_unique() {
        let total =
            legacy::scopes::ALL.len() + basic_display::scopes::ALL.len() + graph::scopes::ALL.len();
        assert!(all().count() == total);
    }

    #[test]
    fn list_dedups_and_joins() {
        let list = ScopeList::new()
            .with(basic_display::scopes::USER_PROFILE)
            .with(basic_display::scopes::USER_MEDIA)
            .with(basic_display::scopes::USER_PROFILE);

        assert!(list.len() == 2);
        assert!(list.join(",") == "user_profile,user_media");
    }

    #[test]
    fn parse_list() {
        let list = ScopeList::parse("basic, likes comments").expect("failed to parse");
        assert!(list.join(" ") == "basic likes comments");

        let error = ScopeList::parse("basic,nope").expect_err("parsed unknown scope");
        assert!(error == "nope");
    }
}
