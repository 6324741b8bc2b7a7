//! Netgen neutral mesh format support.
//!
//! The neutral format is a headerless stream of whitespace-separated
//! tokens with three sections in fixed order:
//!
//! ```text
//! <pointCount>
//! x y z                    (pointCount times)
//! <tetCount>
//! domainId p0 p1 p2 p3     (tetCount times)
//! <triCount>
//! surfaceId p0 p1 p2       (triCount times)
//! ```
//!
//! Vertex indices are **1-based** in the file and converted to 0-based
//! on read. Line breaks carry no meaning; any content after the third
//! section is ignored.
//!
//! # Normalization
//!
//! After the point section is read, the point set is re-centered on the
//! per-axis midpoints and divided by the largest axis extent, so the
//! mesh ends up inside a unit box spanning roughly `[-0.5, 0.5]` on its
//! longest axis. Scaling is uniform over all three axes, preserving the
//! aspect ratio. The source-coordinate extrema stay available through
//! [`TetMesh::bounds`].
//!
//! # Example
//!
//! ```no_run
//! use tetview_io::load_neutral;
//!
//! let mesh = load_neutral("model.mesh").unwrap();
//! println!("{} domains", mesh.domains().len());
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::SplitWhitespace;

use tracing::{debug, info};

use tetview_model::TetMesh;
use tetview_types::{Aabb, Point, Tetrahedron, Triangle};

use crate::error::{IoError, IoResult};

const SEC_POINTS: &str = "points";
const SEC_TETS: &str = "tetrahedra";
const SEC_TRIS: &str = "boundary triangles";

/// Load a mesh from a Netgen neutral file.
///
/// Runs to completion synchronously, performing blocking I/O; a caller
/// that must not block runs this on a worker context of its own.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - A section ends before its declared count is satisfied
/// - A token is not the expected number
/// - A vertex index falls outside the declared point set
///
/// On failure no model is produced; the caller keeps whatever model it
/// held before.
///
/// # Example
///
/// ```no_run
/// use tetview_io::load_neutral;
///
/// let mesh = load_neutral("model.mesh").unwrap();
/// println!("loaded {} points", mesh.point_count());
/// ```
pub fn load_neutral<P: AsRef<Path>>(path: P) -> IoResult<TetMesh> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    parse_neutral(&contents, path)
}

/// Parse neutral-format content into a model.
fn parse_neutral(contents: &str, path: &Path) -> IoResult<TetMesh> {
    let mut tokens = contents.split_whitespace();

    // Pass 1: points, tracking the source-coordinate extrema.
    let point_count = parse_count(&mut tokens, SEC_POINTS)?;
    let mut points = Vec::with_capacity(point_count);
    let mut bounds = Aabb::empty();
    for _ in 0..point_count {
        let x = parse_coord(&mut tokens)?;
        let y = parse_coord(&mut tokens)?;
        let z = parse_coord(&mut tokens)?;
        let point = Point::new(x, y, z);
        bounds.expand_to_include(&point.position);
        points.push(point);
    }
    debug!(points = point_count, "read point section");

    normalize_points(&mut points, &bounds);

    let mut mesh = TetMesh::from_parts(path, points, bounds);

    // Pass 2: tetrahedra, grouped into domains by declared id.
    let tet_count = parse_count(&mut tokens, SEC_TETS)?;
    for item in 0..tet_count {
        let domain_id = parse_id(&mut tokens, SEC_TETS)?;
        let p0 = parse_point_index(&mut tokens, SEC_TETS, item, point_count)?;
        let p1 = parse_point_index(&mut tokens, SEC_TETS, item, point_count)?;
        let p2 = parse_point_index(&mut tokens, SEC_TETS, item, point_count)?;
        let p3 = parse_point_index(&mut tokens, SEC_TETS, item, point_count)?;
        mesh.add_tetrahedron(domain_id, Tetrahedron::new(p0, p1, p2, p3));
    }
    debug!(tetrahedra = tet_count, "read tetrahedron section");

    // Pass 3: boundary triangles, grouped into boundaries by surface id.
    let tri_count = parse_count(&mut tokens, SEC_TRIS)?;
    for item in 0..tri_count {
        let surface_id = parse_id(&mut tokens, SEC_TRIS)?;
        let p0 = parse_point_index(&mut tokens, SEC_TRIS, item, point_count)?;
        let p1 = parse_point_index(&mut tokens, SEC_TRIS, item, point_count)?;
        let p2 = parse_point_index(&mut tokens, SEC_TRIS, item, point_count)?;
        mesh.add_triangle(surface_id, Triangle::new(p0, p1, p2));
    }
    debug!(triangles = tri_count, "read boundary triangle section");

    // Anything after the third section is ignored.

    for (id, domain) in mesh.domains() {
        debug!(domain = *id, tetrahedra = domain.len(), "domain loaded");
    }
    for (id, boundary) in mesh.boundaries() {
        debug!(boundary = *id, triangles = boundary.len(), "boundary loaded");
    }
    info!(
        path = %path.display(),
        points = point_count,
        domains = mesh.domains().len(),
        boundaries = mesh.boundaries().len(),
        "mesh loaded"
    );

    Ok(mesh)
}

/// Re-center the point set on the box midpoints and rescale it by the
/// largest axis extent.
///
/// A degenerate point set (zero extent on every axis) is re-centered but
/// not divided.
fn normalize_points(points: &mut [Point], bounds: &Aabb) {
    if points.is_empty() {
        return;
    }

    let center = bounds.center();
    let scale = bounds.max_extent();
    for point in &mut *points {
        point.translate(-center.coords);
        if scale > 0.0 {
            point.normalize(scale);
        }
    }
    debug!(scale, "normalized point set");
}

fn next_token<'a>(tokens: &mut SplitWhitespace<'a>, section: &'static str) -> IoResult<&'a str> {
    tokens.next().ok_or(IoError::UnexpectedEof { section })
}

fn parse_count(tokens: &mut SplitWhitespace<'_>, section: &'static str) -> IoResult<usize> {
    let token = next_token(tokens, section)?;
    token.parse().map_err(|_| IoError::InvalidToken {
        section,
        token: token.to_string(),
    })
}

fn parse_coord(tokens: &mut SplitWhitespace<'_>) -> IoResult<f64> {
    let token = next_token(tokens, SEC_POINTS)?;
    token.parse().map_err(|_| IoError::InvalidToken {
        section: SEC_POINTS,
        token: token.to_string(),
    })
}

fn parse_id(tokens: &mut SplitWhitespace<'_>, section: &'static str) -> IoResult<u32> {
    let token = next_token(tokens, section)?;
    token.parse().map_err(|_| IoError::InvalidToken {
        section,
        token: token.to_string(),
    })
}

/// Read a 1-based vertex index, validate it against the point count, and
/// convert it to 0-based.
fn parse_point_index(
    tokens: &mut SplitWhitespace<'_>,
    section: &'static str,
    item: usize,
    point_count: usize,
) -> IoResult<u32> {
    let token = next_token(tokens, section)?;
    let index: usize = token.parse().map_err(|_| IoError::InvalidToken {
        section,
        token: token.to_string(),
    })?;

    if index == 0 || index > point_count {
        return Err(IoError::IndexOutOfRange {
            section,
            item,
            index,
            point_count,
        });
    }

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: element indices are u32, point sets beyond u32 range are unsupported
    let zero_based = (index - 1) as u32;
    Ok(zero_based)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetview_types::Element;

    fn parse(contents: &str) -> IoResult<TetMesh> {
        parse_neutral(contents, Path::new("test.mesh"))
    }

    #[test]
    fn minimal_mesh() {
        let mesh = parse("0\n0\n0\n").ok();
        let mesh = mesh.as_ref();
        assert!(mesh.is_some_and(|m| m.point_count() == 0));
        assert!(mesh.is_some_and(|m| m.domains().is_empty()));
        assert!(mesh.is_some_and(|m| m.boundaries().is_empty()));
    }

    #[test]
    fn indices_converted_to_zero_based() {
        let input = "3\n0 0 0\n1 0 0\n0 1 0\n0\n1\n4 1 2 3\n";
        let mesh = parse(input).ok();

        let boundary = mesh.as_ref().and_then(|m| m.boundary(4));
        assert!(boundary.is_some_and(|b| b.len() == 1));
        let tri = boundary.and_then(|b| b.elements().first());
        assert!(tri.is_some_and(|t| t.points() == &[0, 1, 2][..]));
    }

    #[test]
    fn whitespace_layout_is_irrelevant() {
        let packed = "2 0 0 0 1 1 1 0 0";
        let mesh = parse(packed).ok();
        assert!(mesh.is_some_and(|m| m.point_count() == 2));
    }

    #[test]
    fn trailing_content_ignored() {
        let input = "1\n0 0 0\n0\n0\nextra tokens here\n";
        assert!(parse(input).is_ok());
    }

    #[test]
    fn truncated_points_section() {
        let result = parse("3\n0 0 0\n1 0\n");
        assert!(matches!(
            result,
            Err(IoError::UnexpectedEof {
                section: SEC_POINTS
            })
        ));
    }

    #[test]
    fn missing_tet_section() {
        let result = parse("1\n0 0 0\n");
        assert!(matches!(
            result,
            Err(IoError::UnexpectedEof { section: SEC_TETS })
        ));
    }

    #[test]
    fn non_numeric_coordinate() {
        let result = parse("1\n0 zero 0\n0\n0\n");
        assert!(
            matches!(result, Err(IoError::InvalidToken { section, token }) if section == SEC_POINTS && token == "zero")
        );
    }

    #[test]
    fn zero_vertex_index_rejected() {
        let input = "3\n0 0 0\n1 0 0\n0 1 0\n0\n1\n1 0 1 2\n";
        let result = parse(input);
        assert!(matches!(
            result,
            Err(IoError::IndexOutOfRange {
                index: 0,
                item: 0,
                ..
            })
        ));
    }

    #[test]
    fn vertex_index_above_point_count_rejected() {
        let input = "2\n0 0 0\n1 0 0\n1\n1 1 2 3 4\n0\n";
        let result = parse(input);
        assert!(matches!(
            result,
            Err(IoError::IndexOutOfRange {
                section: "tetrahedra",
                index: 3,
                point_count: 2,
                ..
            })
        ));
    }

    #[test]
    fn degenerate_point_set_is_recentered_not_scaled() {
        let input = "2\n5 5 5\n5 5 5\n0\n0\n";
        let mesh = parse(input).ok();
        let first = mesh.as_ref().and_then(|m| m.points().first());
        assert!(first.is_some_and(|p| p.x().abs() < 1e-12 && p.y().abs() < 1e-12));
    }
}
