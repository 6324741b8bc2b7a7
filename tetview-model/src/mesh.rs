//! The loaded mesh model.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;

use tetview_types::{Aabb, Point, Tetrahedron, Triangle};

use crate::group::GroupRegistry;
use crate::zone::{Boundary, Domain};

/// The in-memory model of a loaded tetrahedral mesh.
///
/// Owns the normalized point set, the id-keyed boundary and domain
/// maps, and the group registry. Ids are whatever the source file
/// declared; they are neither contiguous nor zero-based, so the maps are
/// sparse.
///
/// A loader builds one instance per successful load and hands it to the
/// caller, which swaps it in only on success; a failed load never
/// touches a previously held model.
///
/// # Example
///
/// ```
/// use tetview_model::{Tetrahedron, TetMesh};
///
/// let mut mesh = TetMesh::new();
/// mesh.add_tetrahedron(5, Tetrahedron::new(0, 1, 2, 3));
/// mesh.add_tetrahedron(100, Tetrahedron::new(1, 2, 3, 4));
///
/// assert_eq!(mesh.domain_ids(), vec![5, 100]);
/// assert_eq!(mesh.domain(5).map(|d| d.len()), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TetMesh {
    path: PathBuf,
    points: Vec<Point>,
    boundaries: HashMap<u32, Boundary>,
    domains: HashMap<u32, Domain>,
    groups: GroupRegistry,
    bounds: Aabb,
}

impl TetMesh {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a model from an already normalized point set.
    ///
    /// Used by the loader after pass 1: `bounds` carries the
    /// source-coordinate extrema captured before normalization.
    #[must_use]
    pub fn from_parts(path: impl Into<PathBuf>, points: Vec<Point>, bounds: Aabb) -> Self {
        Self {
            path: path.into(),
            points,
            bounds,
            ..Self::default()
        }
    }

    /// Path of the file this model was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The point set. Indices stored in elements refer into this slice.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Extrema of the source coordinates, captured before normalization
    /// and retained for reference.
    #[must_use]
    pub const fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Append a tetrahedron to the domain keyed by `domain_id`, creating
    /// the domain on first reference.
    pub fn add_tetrahedron(&mut self, domain_id: u32, tet: Tetrahedron) {
        self.domains.entry(domain_id).or_default().add(tet);
    }

    /// Append a triangle to the boundary keyed by `surface_id`, creating
    /// the boundary on first reference.
    pub fn add_triangle(&mut self, surface_id: u32, tri: Triangle) {
        self.boundaries.entry(surface_id).or_default().add(tri);
    }

    /// The boundary map.
    #[must_use]
    pub const fn boundaries(&self) -> &HashMap<u32, Boundary> {
        &self.boundaries
    }

    /// The boundary map for mutation.
    pub fn boundaries_mut(&mut self) -> &mut HashMap<u32, Boundary> {
        &mut self.boundaries
    }

    /// The domain map.
    #[must_use]
    pub const fn domains(&self) -> &HashMap<u32, Domain> {
        &self.domains
    }

    /// The domain map for mutation.
    pub fn domains_mut(&mut self) -> &mut HashMap<u32, Domain> {
        &mut self.domains
    }

    /// Look up one boundary.
    #[must_use]
    pub fn boundary(&self, id: u32) -> Option<&Boundary> {
        self.boundaries.get(&id)
    }

    /// Look up one boundary for mutation.
    pub fn boundary_mut(&mut self, id: u32) -> Option<&mut Boundary> {
        self.boundaries.get_mut(&id)
    }

    /// Look up one domain.
    #[must_use]
    pub fn domain(&self, id: u32) -> Option<&Domain> {
        self.domains.get(&id)
    }

    /// Look up one domain for mutation.
    pub fn domain_mut(&mut self, id: u32) -> Option<&mut Domain> {
        self.domains.get_mut(&id)
    }

    /// All boundary ids, sorted.
    ///
    /// The maps themselves iterate in unspecified order; panels that
    /// list zones want the stable ordering.
    #[must_use]
    pub fn boundary_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.boundaries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All domain ids, sorted.
    #[must_use]
    pub fn domain_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.domains.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The group registry.
    #[must_use]
    pub const fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    /// The group registry for mutation.
    pub fn groups_mut(&mut self) -> &mut GroupRegistry {
        &mut self.groups
    }

    /// Set the highlight flag on every boundary.
    pub fn highlight_all_boundaries(&mut self, highlighted: bool) {
        for boundary in self.boundaries.values_mut() {
            boundary.set_highlighted(highlighted);
        }
    }

    /// Set the highlight flag on every domain.
    pub fn highlight_all_domains(&mut self, highlighted: bool) {
        for domain in self.domains.values_mut() {
            domain.set_highlighted(highlighted);
        }
    }

    /// Enable or disable display of every boundary.
    pub fn display_all_boundaries(&mut self, enabled: bool) {
        for boundary in self.boundaries.values_mut() {
            boundary.set_display_enabled(enabled);
        }
    }

    /// Enable or disable display of every domain.
    pub fn display_all_domains(&mut self, enabled: bool) {
        for domain in self.domains.values_mut() {
            domain.set_display_enabled(enabled);
        }
    }

    /// Ids of the boundaries whose group tag equals `name`, sorted.
    ///
    /// The name does not have to be registered; an orphaned tag still
    /// counts as membership.
    #[must_use]
    pub fn boundaries_in_group(&self, name: &str) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .boundaries
            .iter()
            .filter(|(_, boundary)| boundary.group() == name)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Highlight exactly the boundaries belonging to the named group.
    ///
    /// Clears the highlight on every other boundary first, so the
    /// highlight set always mirrors the group's current membership.
    pub fn highlight_group(&mut self, name: &str) {
        for boundary in self.boundaries.values_mut() {
            let member = boundary.group() == name;
            boundary.set_highlighted(member);
        }
    }
}
