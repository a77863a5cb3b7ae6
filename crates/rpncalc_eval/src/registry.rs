//! Name-to-operation dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use rpncalc_foundation::Result;

use crate::alias::AliasDef;
use crate::builtin::{BUILTINS, Builtin};
use crate::machine::Machine;

/// A dispatchable operation: an entry from the builtin catalog or a
/// user-defined alias.
#[derive(Debug, Clone)]
pub enum Operation {
    /// A builtin from the static catalog.
    Builtin(&'static Builtin),
    /// A user-defined alias.
    Alias(Arc<AliasDef>),
}

impl Operation {
    /// Runs the operation against the machine.
    pub(crate) fn perform(
        &self,
        machine: &mut Machine,
        out: &mut dyn FnMut(String),
    ) -> Result<()> {
        match self {
            Self::Builtin(builtin) => (builtin.func)(machine, out),
            Self::Alias(alias) => alias.perform(machine, out),
        }
    }
}

/// Resolves invocation names to operations.
///
/// Every builtin synonym is indexed at construction; aliases accumulate as
/// definitions are evaluated. Lookup prefers builtins, and definition-time
/// uniqueness checks keep the two maps disjoint anyway.
#[derive(Debug)]
pub struct Registry {
    builtins: HashMap<&'static str, &'static Builtin>,
    aliases: HashMap<String, Arc<AliasDef>>,
    /// Alias names in definition order, for stable listings.
    alias_order: Vec<String>,
}

impl Registry {
    /// Creates a registry holding the full builtin catalog and no aliases.
    #[must_use]
    pub fn new() -> Self {
        let mut builtins = HashMap::new();
        for builtin in BUILTINS {
            for name in builtin.names {
                builtins.insert(*name, builtin);
            }
        }
        Self {
            builtins,
            aliases: HashMap::new(),
            alias_order: Vec::new(),
        }
    }

    /// Resolves a name to an operation, builtins first.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Operation> {
        if let Some(builtin) = self.builtins.get(name) {
            Some(Operation::Builtin(builtin))
        } else {
            self.aliases.get(name).cloned().map(Operation::Alias)
        }
    }

    /// Returns true if `name` resolves to any operation.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.builtins.contains_key(name) || self.aliases.contains_key(name)
    }

    /// Registers a compiled alias under its name.
    ///
    /// The alias compiler rejects duplicate names before construction, so
    /// this never shadows an existing operation.
    pub fn define(&mut self, alias: AliasDef) {
        let name = alias.name().to_string();
        self.aliases.insert(name.clone(), Arc::new(alias));
        self.alias_order.push(name);
    }

    /// Canonical names of every registered operation: builtins in catalog
    /// order, then aliases in definition order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        BUILTINS
            .iter()
            .map(|builtin| builtin.names[0].to_string())
            .chain(self.alias_order.iter().cloned())
            .collect()
    }

    /// Every invocation name, synonyms included.
    #[must_use]
    pub fn all_names(&self) -> Vec<String> {
        BUILTINS
            .iter()
            .flat_map(|builtin| builtin.names.iter().map(ToString::to_string))
            .chain(self.alias_order.iter().cloned())
            .collect()
    }

    /// The full synonym set for any invocation name of an operation.
    ///
    /// Aliases have exactly one name; unknown names return an empty set.
    #[must_use]
    pub fn synonyms(&self, name: &str) -> Vec<String> {
        for builtin in BUILTINS {
            if builtin.names.contains(&name) {
                return builtin.names.iter().map(ToString::to_string).collect();
            }
        }
        if self.aliases.contains_key(name) {
            vec![name.to_string()]
        } else {
            Vec::new()
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
