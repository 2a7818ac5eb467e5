use glam::Vec2;
use tonegrid_core::{ROWS, STEPS};

/// Size of one grid cell for a canvas of `size` pixels.
#[inline]
pub fn cell_size(size: Vec2) -> Vec2 {
    Vec2::new(size.x / STEPS as f32, size.y / ROWS as f32)
}

/// Cell under a canvas pixel, `(row, col)`. Row 0 is the top row.
#[inline]
pub fn cell_at(px: Vec2, size: Vec2) -> Option<(usize, usize)> {
    if size.x <= 0.0 || size.y <= 0.0 || px.x < 0.0 || px.y < 0.0 {
        return None;
    }
    let cell = cell_size(size);
    let col = (px.x / cell.x) as usize;
    let row = (px.y / cell.y) as usize;
    (row < ROWS && col < STEPS).then_some((row, col))
}

/// Like [`cell_at`] but pinned to the grid edge, for drags that leave the
/// canvas.
#[inline]
pub fn cell_at_clamped(px: Vec2, size: Vec2) -> (usize, usize) {
    let cell = cell_size(size.max(Vec2::ONE));
    let col = (px.x.max(0.0) / cell.x) as usize;
    let row = (px.y.max(0.0) / cell.y) as usize;
    (row.min(ROWS - 1), col.min(STEPS - 1))
}

/// Top-left pixel of a cell.
#[inline]
pub fn cell_origin(row: usize, col: usize, size: Vec2) -> Vec2 {
    let cell = cell_size(size);
    Vec2::new(col as f32 * cell.x, row as f32 * cell.y)
}

/// Backing-store pixels for a CSS box at `dpr`, never zero.
#[inline]
pub fn backing_px(css: Vec2, dpr: f32) -> (u32, u32) {
    let scaled = css * if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    (scaled.x.max(1.0) as u32, scaled.y.max(1.0) as u32)
}
