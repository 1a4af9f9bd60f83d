//! Line point generation
//!
//! Integer Bresenham line rasterization used to stamp user scribbles
//! into a trimap. Points may fall outside the image; consumers clip.

/// Generate the points of a line using Bresenham's integer algorithm.
///
/// The line connects `(x1, y1)` to `(x2, y2)` with 8-connectivity and
/// uses no floating-point arithmetic.
pub fn line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    // Degenerate case: single point
    if x1 == x2 && y1 == y2 {
        return vec![(x1, y1)];
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1i32 } else { -1 };
    let sy = if y2 > y1 { 1i32 } else { -1 };

    let npts = (dx.max(dy) + 1) as usize;
    let mut points = Vec::with_capacity(npts);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        // Step along x (more horizontal)
        let mut err = dx / 2;
        for _ in 0..npts {
            points.push((x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        // Step along y (more vertical)
        let mut err = dy / 2;
        for _ in 0..npts {
            points.push((x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    points
}

/// Generate the points of a line with the given stroke width.
///
/// For `width > 1`, parallel lines are added on alternating sides of
/// the base line, offset perpendicular to the dominant direction.
pub fn wide_line_points(x1: i32, y1: i32, x2: i32, y2: i32, width: u32) -> Vec<(i32, i32)> {
    let width = width.max(1);

    let base = line_points(x1, y1, x2, y2);
    if width == 1 {
        return base;
    }

    let mut points = Vec::with_capacity(base.len() * width as usize);
    points.extend_from_slice(&base);

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let is_horizontal = dx > dy;

    for i in 1..width {
        let offset = (i + 1).div_ceil(2) as i32;
        let sign = if i % 2 == 1 { -1 } else { 1 };
        let actual_offset = offset * sign;

        let (x1a, y1a, x2a, y2a) = if is_horizontal {
            (x1, y1 + actual_offset, x2, y2 + actual_offset)
        } else {
            (x1 + actual_offset, y1, x2 + actual_offset, y2)
        };

        points.extend(line_points(x1a, y1a, x2a, y2a));
    }

    points
}
