//! Boundary group registry.
//!
//! Groups are user-assigned labels over boundaries. The registry only
//! tracks which names exist and their display properties; membership
//! lives on the boundaries themselves as a soft reference, so removing
//! a group leaves any boundary still carrying its name untouched.

use hashbrown::HashMap;

use tetview_types::Color;

/// Display properties of one boundary group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupProperties {
    color: Color,
}

impl GroupProperties {
    /// The group's display color, black until assigned.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Set the group's display color.
    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// Mapping from group name to [`GroupProperties`].
///
/// # Example
///
/// ```
/// use tetview_model::{Color, GroupRegistry};
///
/// let mut registry = GroupRegistry::new();
/// registry.register("walls").set_color(Color::new(0.6, 0.6, 0.6));
///
/// // Registering again returns the existing entry
/// assert_eq!(registry.register("walls").color(), Color::new(0.6, 0.6, 0.6));
///
/// registry.remove("walls");
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: HashMap<String, GroupProperties>,
}

impl GroupRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group name, or fetch it if already present.
    ///
    /// New entries start with the default (black) color. Idempotent:
    /// registering an existing name never resets its properties.
    pub fn register(&mut self, name: impl Into<String>) -> &mut GroupProperties {
        self.groups.entry(name.into()).or_default()
    }

    /// Remove a group, returning its properties. No-op when the name is
    /// not registered.
    ///
    /// Boundaries tagged with the removed name keep their tag; readers
    /// must tolerate such orphaned references.
    pub fn remove(&mut self, name: &str) -> Option<GroupProperties> {
        self.groups.remove(name)
    }

    /// Look up a group's properties.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GroupProperties> {
        self.groups.get(name)
    }

    /// Look up a group's properties for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut GroupProperties> {
        self.groups.get_mut(name)
    }

    /// Check whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Iterate over all `(name, properties)` pairs.
    ///
    /// The order is unspecified but stable while the registry is not
    /// mutated; use [`names`](Self::names) for a sorted listing.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupProperties)> {
        self.groups.iter().map(|(name, props)| (name.as_str(), props))
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no groups are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
