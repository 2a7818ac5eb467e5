use crate::constants::*;
use crate::input;
use glam::Vec2;
use tonegrid_core::{row_pitch, CellColor, RenderModel, ROWS, STEPS};
use web_sys as web;

#[inline]
fn cell_fill(color: CellColor) -> &'static str {
    match color {
        CellColor::Empty => COLOR_EMPTY,
        CellColor::Note => COLOR_NOTE,
        CellColor::Sustain => COLOR_SUSTAIN,
        CellColor::Pending => COLOR_PENDING,
        CellColor::Playing => COLOR_PLAYING,
    }
}

/// Draw the grid cells, their pitch labels and the playhead.
pub fn draw_grid(ctx: &web::CanvasRenderingContext2d, size: Vec2, model: &RenderModel) {
    let (w, h) = (size.x as f64, size.y as f64);
    ctx.clear_rect(0.0, 0.0, w, h);

    let cell = input::cell_size(size);
    let (cw, ch) = (cell.x as f64, cell.y as f64);
    let labels = cw >= LABEL_MIN_CELL_PX;
    ctx.set_line_width(GRID_LINE_WIDTH);
    ctx.set_stroke_style_str(COLOR_GRID_LINE);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for row in 0..ROWS {
        let name = row_pitch(row).name;
        for col in 0..STEPS {
            let o = input::cell_origin(row, col, size);
            let (x, y) = (o.x as f64, o.y as f64);
            ctx.set_fill_style_str(cell_fill(model.cell_color(row, col)));
            ctx.fill_rect(x, y, cw, ch);
            ctx.stroke_rect(x, y, cw, ch);
            if labels {
                ctx.set_fill_style_str(COLOR_LABEL);
                _ = ctx.fill_text(&format!("{}-{}", name, col), x + cw * 0.5, y + ch * 0.5);
            }
        }
    }

    let x = (model.playhead_percent / 100.0).clamp(0.0, 1.0) * w;
    ctx.set_line_width(PLAYHEAD_WIDTH);
    ctx.set_stroke_style_str(COLOR_PLAYHEAD);
    ctx.begin_path();
    ctx.move_to(x, 0.0);
    ctx.line_to(x, h);
    ctx.stroke();
}
