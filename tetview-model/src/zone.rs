//! Generic zone container.
//!
//! A zone aggregates all elements that share one file-declared
//! identifier, together with the presentation state a viewer needs
//! (display, highlight, color, group tag) and lazily computed geometric
//! statistics.

use hashbrown::HashSet;

use tetview_types::{Color, Element, Point};

/// Edge-length statistics over a zone's deduplicated edge set.
///
/// Edges shared between adjacent elements count once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLengths {
    /// Shortest edge.
    pub min: f64,
    /// Longest edge.
    pub max: f64,
    /// Mean over all unique edges.
    pub avg: f64,
}

/// An ordered collection of elements of one kind under one identifier.
///
/// Zones are created by the loader on the first occurrence of their id
/// and only ever grow during load. Element membership is immutable
/// afterwards, which is why the edge-length cache never needs an
/// invalidation path: display and group state do not affect geometry.
///
/// Duplicate elements are preserved as distinct entries; `add` performs
/// no deduplication.
///
/// # Example
///
/// ```
/// use tetview_model::{Point, Triangle, Zone};
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(3.0, 0.0, 0.0),
///     Point::new(3.0, 4.0, 0.0),
/// ];
///
/// let mut zone: Zone<Triangle> = Zone::new();
/// zone.add(Triangle::new(0, 1, 2));
///
/// let lengths = zone.edge_lengths(&points).unwrap();
/// assert_eq!(lengths.min, 3.0);
/// assert_eq!(lengths.max, 5.0);
/// assert_eq!(lengths.avg, 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct Zone<E> {
    elements: Vec<E>,
    display_enabled: bool,
    highlighted: bool,
    color: Color,
    alpha: f32,
    group: String,
    edge_lengths: Option<EdgeLengths>,
    render_handle: Option<u64>,
}

impl<E> Zone<E> {
    /// Create an empty zone with default presentation state.
    ///
    /// Display starts enabled, highlight off, color red, alpha zero, no
    /// group tag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            display_enabled: true,
            highlighted: false,
            color: Color::RED,
            alpha: 0.0,
            group: String::new(),
            edge_lengths: None,
            render_handle: None,
        }
    }

    /// Append an element.
    ///
    /// Duplicates are kept; the zone is a sequence, not a set.
    #[inline]
    pub fn add(&mut self, element: E) {
        self.elements.push(element);
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the zone has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The elements in insertion order.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Whether the presentation layer should draw this zone.
    #[inline]
    #[must_use]
    pub const fn display_enabled(&self) -> bool {
        self.display_enabled
    }

    /// Enable or disable drawing of this zone.
    #[inline]
    pub fn set_display_enabled(&mut self, enabled: bool) {
        self.display_enabled = enabled;
    }

    /// Whether the zone is currently highlighted.
    #[inline]
    #[must_use]
    pub const fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Set the highlight flag.
    #[inline]
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Display color.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Set the display color. Channels are stored as given, unclamped.
    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Set the alpha channel. Stored as given, unclamped.
    #[inline]
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    /// The group tag, empty when the zone belongs to no group.
    ///
    /// This is a soft reference into the group registry: removing the
    /// registry entry does not clear the tag here, and readers must
    /// tolerate a tag that names no registered group.
    #[inline]
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Assign the group tag. An empty string detaches the zone.
    #[inline]
    pub fn set_group(&mut self, group: impl Into<String>) {
        self.group = group.into();
    }

    /// Opaque handle slot for the presentation layer.
    ///
    /// The viewer stores whatever it needs to redraw the zone (a display
    /// list id, a buffer handle); the model never interprets the value.
    #[inline]
    #[must_use]
    pub const fn render_handle(&self) -> Option<u64> {
        self.render_handle
    }

    /// Set or clear the opaque render handle.
    #[inline]
    pub fn set_render_handle(&mut self, handle: Option<u64>) {
        self.render_handle = handle;
    }
}

impl<E: Element> Zone<E> {
    /// Edge-length statistics for this zone.
    ///
    /// Computed on first call and cached; later calls return the cached
    /// triple unchanged. `points` is the owning model's point set, which
    /// the element indices refer into.
    ///
    /// Returns `None` for a zone with no elements.
    ///
    /// # Panics
    ///
    /// Panics if an element references an index outside `points`. The
    /// loader validates indices, so this only fires on hand-built zones
    /// with broken indices.
    pub fn edge_lengths(&mut self, points: &[Point]) -> Option<EdgeLengths> {
        if self.edge_lengths.is_none() {
            self.edge_lengths = self.compute_edge_lengths(points);
        }
        self.edge_lengths
    }

    /// Shortest edge in the zone, `None` when the zone is empty.
    #[inline]
    pub fn min_edge_length(&mut self, points: &[Point]) -> Option<f64> {
        self.edge_lengths(points).map(|l| l.min)
    }

    /// Longest edge in the zone, `None` when the zone is empty.
    #[inline]
    pub fn max_edge_length(&mut self, points: &[Point]) -> Option<f64> {
        self.edge_lengths(points).map(|l| l.max)
    }

    /// Mean edge length over the unique edges, `None` when the zone is
    /// empty.
    #[inline]
    pub fn avg_edge_length(&mut self, points: &[Point]) -> Option<f64> {
        self.edge_lengths(points).map(|l| l.avg)
    }

    fn compute_edge_lengths(&self, points: &[Point]) -> Option<EdgeLengths> {
        // Unordered pairs of each element's vertices; pairs are already
        // sorted because the element tuples are canonical.
        let mut edges: HashSet<(u32, u32)> = HashSet::new();
        for element in &self.elements {
            let pts = element.points();
            for i in 0..pts.len() {
                for j in (i + 1)..pts.len() {
                    edges.insert((pts[i], pts[j]));
                }
            }
        }

        if edges.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &(a, b) in &edges {
            let d = points[a as usize].distance_from(&points[b as usize]);
            min = min.min(d);
            max = max.max(d);
            sum += d;
        }

        #[allow(clippy::cast_precision_loss)]
        let avg = sum / edges.len() as f64;
        Some(EdgeLengths { min, max, avg })
    }
}

impl<E> Default for Zone<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// A surface zone: triangles sharing one surface id.
pub type Boundary = Zone<tetview_types::Triangle>;

/// A volumetric zone: tetrahedra sharing one domain id.
pub type Domain = Zone<tetview_types::Tetrahedron>;
