//! Squarified treemap tiling.
//!
//! Children are packed into rows whose aspect ratio stays as close as possible
//! to the golden ratio; each row is laid out along the shorter side of the
//! remaining area. Siblings have no padding between them.

use crate::model::Node;

pub const PHI: f64 = 1.618_033_988_749_895;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Inverted extents collapse to their midpoint.
    fn normalized(mut self) -> Self {
        if self.x1 < self.x0 {
            let m = (self.x0 + self.x1) / 2.0;
            self.x0 = m;
            self.x1 = m;
        }
        if self.y1 < self.y0 {
            let m = (self.y0 + self.y1) / 2.0;
            self.y0 = m;
            self.y1 = m;
        }
        self
    }
}

/// One positioned leaf.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutRect {
    pub rect: Rect,
    pub name: String,
    pub category: String,
    pub value: f64,
}

/// Lays out every leaf of `root` inside `[0, width] x [0, height]`.
/// Leaves are returned in the (sorted) pre-order of the hierarchy.
pub fn treemap(root: &Node, width: f64, height: f64) -> Vec<LaidOutRect> {
    let mut out = Vec::new();
    position(root, Rect::new(0.0, 0.0, width.max(0.0), height.max(0.0)), &mut out);
    out
}

fn position(node: &Node, rect: Rect, out: &mut Vec<LaidOutRect>) {
    let rect = rect.normalized();
    if node.is_leaf() {
        out.push(LaidOutRect {
            rect,
            name: node.name.clone(),
            category: node.category.clone(),
            value: node.value,
        });
        return;
    }
    let values: Vec<f64> = node.children.iter().map(|c| c.value).collect();
    let cells = squarify(PHI, &values, node.value, rect);
    for (child, cell) in node.children.iter().zip(cells) {
        position(child, cell, out);
    }
}

/// Splits `rect` among `values` (which sum to `total`) in squarified rows.
pub fn squarify(ratio: f64, values: &[f64], total: f64, rect: Rect) -> Vec<Rect> {
    let n = values.len();
    let Rect { mut x0, mut y0, x1, y1 } = rect;
    if total <= 0.0 {
        return vec![Rect::new(x0, y0, x0, y0); n];
    }

    let mut out = Vec::with_capacity(n);
    let mut remaining = total;
    let mut i0 = 0;
    let mut i1 = 0;
    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // First non-empty node opens the row.
        let mut sum;
        loop {
            sum = values[i1];
            i1 += 1;
            if sum != 0.0 || i1 >= n {
                break;
            }
        }
        let mut min_value = sum;
        let mut max_value = sum;
        let alpha = (dy / dx).max(dx / dy) / (remaining * ratio);
        let mut beta = sum * sum * alpha;
        let mut min_ratio = (max_value / beta).max(beta / min_value);

        // Grow the row while its worst aspect ratio does not get worse.
        while i1 < n {
            let v = values[i1];
            sum += v;
            min_value = min_value.min(v);
            max_value = max_value.max(v);
            beta = sum * sum * alpha;
            let new_ratio = (max_value / beta).max(beta / min_value);
            if new_ratio > min_ratio {
                sum -= v;
                break;
            }
            min_ratio = new_ratio;
            i1 += 1;
        }

        let row = &values[i0..i1];
        if dx < dy {
            let top = y0;
            let bottom = if remaining != 0.0 {
                y0 += dy * sum / remaining;
                y0
            } else {
                y1
            };
            dice(row, sum, Rect::new(x0, top, x1, bottom), &mut out);
        } else {
            let left = x0;
            let right = if remaining != 0.0 {
                x0 += dx * sum / remaining;
                x0
            } else {
                x1
            };
            slice(row, sum, Rect::new(left, y0, right, y1), &mut out);
        }
        remaining -= sum;
        i0 = i1;
    }
    out
}

/// Lays a row out left to right.
fn dice(values: &[f64], sum: f64, rect: Rect, out: &mut Vec<Rect>) {
    let k = if sum != 0.0 { rect.width() / sum } else { 0.0 };
    let mut x = rect.x0;
    for v in values {
        let next = x + v * k;
        out.push(Rect::new(x, rect.y0, next, rect.y1));
        x = next;
    }
}

/// Lays a row out top to bottom.
fn slice(values: &[f64], sum: f64, rect: Rect, out: &mut Vec<Rect>) {
    let k = if sum != 0.0 { rect.height() / sum } else { 0.0 };
    let mut y = rect.y0;
    for v in values {
        let next = y + v * k;
        out.push(Rect::new(rect.x0, y, rect.x1, next));
        y = next;
    }
}
