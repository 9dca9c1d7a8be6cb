//! Checkerboard backdrop painted under the alpha gradient.

use floem::context::PaintCx;
use floem::kurbo::Rect;
use floem::peniko::Color;
use floem_renderer::Renderer;

const LIGHT: Color = Color::rgb8(0x9F, 0x9F, 0x9F);
const DARK: Color = Color::rgb8(0x63, 0x63, 0x63);

/// Paint a checkerboard of `cell`-sized squares into `rect`.
///
/// Dark cells sit where row and column parity differ, so each row is offset
/// from its neighbour by one cell. Edge cells are clipped to the rect.
pub(crate) fn paint_checkerboard(cx: &mut PaintCx, rect: Rect, cell: f64) {
    cx.fill(&rect, LIGHT, 0.0);

    let mut row = 0usize;
    let mut y = rect.y0;
    while y < rect.y1 {
        // Odd rows start dark one cell in
        let mut x = rect.x0 + ((row + 1) % 2) as f64 * cell;
        while x < rect.x1 {
            let square = Rect::new(x, y, (x + cell).min(rect.x1), (y + cell).min(rect.y1));
            cx.fill(&square, DARK, 0.0);
            x += cell * 2.0;
        }
        y += cell;
        row += 1;
    }
}
