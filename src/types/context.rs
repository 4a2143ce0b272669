use std::collections::{HashMap, HashSet};

/// A content item being edited: a page, an article, an attachment.
///
/// `terms` maps a taxonomy name to the term slugs the item is associated
/// with under that taxonomy.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub kind: String,
    pub format: Option<String>,
    pub template: Option<String>,
    pub terms: HashMap<String, Vec<String>>,
}

impl Item {
    #[must_use]
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            parent_id: None,
            kind: kind.into(),
            format: None,
            template: None,
            terms: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Associate the item with terms under a taxonomy.
    #[must_use]
    pub fn with_terms(
        mut self,
        taxonomy: impl Into<String>,
        slugs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.terms
            .entry(taxonomy.into())
            .or_default()
            .extend(slugs.into_iter().map(Into::into));
        self
    }
}

/// A taxonomy term being edited.
#[derive(Debug, Clone)]
pub struct Term {
    pub id: i64,
    pub slug: String,
    pub taxonomy: String,
    pub parent_id: Option<i64>,
}

impl Term {
    #[must_use]
    pub fn new(id: i64, slug: impl Into<String>, taxonomy: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            taxonomy: taxonomy.into(),
            parent_id: None,
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// A user, either the editing target or the currently authenticated one.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub roles: Vec<String>,
    pub capabilities: Vec<String>,
}

impl User {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id,
            roles: Vec::new(),
            capabilities: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    #[must_use]
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }
}

/// The runtime bundle a fulfillable tree is evaluated against.
///
/// The caller prepares everything up front; evaluation only reads. Any part
/// may be absent — condition kinds that need a missing part answer their
/// documented safe default instead of failing.
///
/// Ancestor tables back the hierarchy-level conditions: `item_level` and
/// `term_level` walk parent references through them.
#[derive(Debug, Clone, Default)]
pub struct Context {
    item: Option<Item>,
    term: Option<Term>,
    user: Option<User>,
    current_user: Option<User>,
    items: HashMap<i64, Item>,
    terms: HashMap<i64, Term>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target item. The item is also added to the ancestor table.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.id, item.clone());
        self.item = Some(item);
        self
    }

    /// Set the target term. The term is also added to the ancestor table.
    #[must_use]
    pub fn with_term(mut self, term: Term) -> Self {
        self.terms.insert(term.id, term.clone());
        self.term = Some(term);
        self
    }

    /// Set the target user (the user being edited).
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Set the currently authenticated user.
    #[must_use]
    pub fn with_current_user(mut self, user: User) -> Self {
        self.current_user = Some(user);
        self
    }

    /// Add an item to the ancestor table without making it the target.
    #[must_use]
    pub fn with_ancestor_item(mut self, item: Item) -> Self {
        self.items.insert(item.id, item);
        self
    }

    /// Add a term to the ancestor table without making it the target.
    #[must_use]
    pub fn with_ancestor_term(mut self, term: Term) -> Self {
        self.terms.insert(term.id, term);
        self
    }

    #[must_use]
    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    #[must_use]
    pub fn term(&self) -> Option<&Term> {
        self.term.as_ref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Hierarchy depth of the target item: 1 for a root item, +1 per
    /// resolvable ancestor. `None` when there is no target item.
    #[must_use]
    pub fn item_level(&self) -> Option<i64> {
        let item = self.item.as_ref()?;
        Some(walk_level(item.id, item.parent_id, |id| {
            self.items.get(&id).map(|i| i.parent_id)
        }))
    }

    /// Hierarchy depth of the target term, analogous to [`item_level`].
    ///
    /// [`item_level`]: Context::item_level
    #[must_use]
    pub fn term_level(&self) -> Option<i64> {
        let term = self.term.as_ref()?;
        Some(walk_level(term.id, term.parent_id, |id| {
            self.terms.get(&id).map(|t| t.parent_id)
        }))
    }
}

/// Walk parent references upward, counting depth. The visited set stops the
/// walk on a repeated identifier, so a corrupt parent graph with a cycle
/// still terminates with a finite depth. An unresolvable parent reference
/// also stops the walk.
fn walk_level(
    start_id: i64,
    mut parent: Option<i64>,
    lookup: impl Fn(i64) -> Option<Option<i64>>,
) -> i64 {
    let mut visited = HashSet::from([start_id]);
    let mut level = 1;
    while let Some(parent_id) = parent {
        if !visited.insert(parent_id) {
            break;
        }
        match lookup(parent_id) {
            Some(grandparent) => {
                level += 1;
                parent = grandparent;
            }
            None => break,
        }
    }
    level
}
