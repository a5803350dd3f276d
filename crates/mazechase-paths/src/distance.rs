use mazechase_core::Point;

/// Manhattan (L1) distance between two points, ignoring wraparound.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Manhattan distance on a `rows` × `cols` torus: each axis may be crossed
/// directly or around the edge, whichever is shorter.
#[inline]
pub fn toroidal_manhattan(a: Point, b: Point, rows: i32, cols: i32) -> i32 {
    let dr = (a.row - b.row).abs();
    let dc = (a.col - b.col).abs();
    dr.min(rows - dr) + dc.min(cols - dc)
}
