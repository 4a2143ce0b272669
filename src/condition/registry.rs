use std::collections::HashMap;
use std::fmt;

use super::{
    BooleanCondition, Condition, CurrentUserCapabilityCondition, CurrentUserIdCondition,
    CurrentUserRoleCondition, ItemFormatCondition, ItemIdCondition, ItemLevelCondition,
    ItemParentIdCondition, ItemTemplateCondition, ItemTermCondition, ItemTypeCondition,
    TermCondition, TermLevelCondition, TermTaxonomyCondition, UserCapabilityCondition,
    UserIdCondition, UserRoleCondition,
};
use crate::comparer::ComparerSet;
use crate::types::ConditionError;

type Factory = Box<dyn Fn() -> Box<dyn Condition> + Send + Sync>;

/// Maps condition-kind names to constructors.
///
/// Populated once during bootstrap (usually via [`Registry::with_builtins`])
/// and shared read-only afterwards; translators and hosts hold `&Registry`.
/// Registering a name that already exists overwrites it, which is how
/// extension points replace a built-in kind.
pub struct Registry {
    factories: HashMap<String, Factory>,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry populated with the full built-in kind set, each kind
    /// bound to its standard comparer bundle.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register("boolean", || {
            Box::new(BooleanCondition::new(ComparerSet::equality_only()))
        });

        registry.register("item_id", || {
            Box::new(ItemIdCondition::new(ComparerSet::generic()))
        });
        registry.register("item_parent_id", || {
            Box::new(ItemParentIdCondition::new(ComparerSet::generic()))
        });
        registry.register("item_type", || {
            Box::new(ItemTypeCondition::new(ComparerSet::without_scalar()))
        });
        registry.register("item_format", || {
            Box::new(ItemFormatCondition::new(ComparerSet::without_scalar()))
        });
        registry.register("item_level", || {
            Box::new(ItemLevelCondition::new(ComparerSet::generic()))
        });
        registry.register("item_template", || {
            Box::new(ItemTemplateCondition::new(ComparerSet::without_scalar()))
        });
        registry.register("item_term", || Box::new(ItemTermCondition));

        registry.register("term", || {
            Box::new(TermCondition::new(ComparerSet::without_scalar()))
        });
        registry.register("term_taxonomy", || {
            Box::new(TermTaxonomyCondition::new(ComparerSet::without_scalar()))
        });
        registry.register("term_level", || {
            Box::new(TermLevelCondition::new(ComparerSet::generic()))
        });

        registry.register("user_id", || {
            Box::new(UserIdCondition::new(ComparerSet::generic()))
        });
        registry.register("user_role", || Box::new(UserRoleCondition));
        registry.register("user_capability", || Box::new(UserCapabilityCondition));

        registry.register("current_user_id", || {
            Box::new(CurrentUserIdCondition::new(ComparerSet::generic()))
        });
        registry.register("current_user_role", || Box::new(CurrentUserRoleCondition));
        registry.register("current_user_capability", || {
            Box::new(CurrentUserCapabilityCondition)
        });

        registry
    }

    /// Register a kind under a name. Last write wins.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Box<dyn Condition> + Send + Sync + 'static,
    ) {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Instantiate the kind registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError::UnknownKind`] for an unregistered name.
    pub fn create(&self, name: &str) -> Result<Box<dyn Condition>, ConditionError> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(ConditionError::UnknownKind {
                name: name.to_owned(),
            }),
        }
    }

    /// Whether a kind is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// The number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("kinds", &names).finish()
    }
}
