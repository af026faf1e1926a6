//! Modal placement helpers

use ratatui::layout::Rect;

/// Center a fixed-size rect within an area, shrinking it to fit.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use passgen_tui::widgets::modal::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
