use ratatui::layout::Rect;

/// Card footprint in the grid, borders included.
pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 5;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Rect of `width` x `height` centered in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Placement of the card grid inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
    /// First row on screen; keeps the selected card visible.
    pub first_row: usize,
}

impl Grid {
    pub fn new(body: Rect, selected: Option<usize>) -> Self {
        let columns = (body.width / CARD_WIDTH).max(1) as usize;
        let rows = (body.height / CARD_HEIGHT).max(1) as usize;
        let first_row = match selected {
            Some(index) => (index / columns + 1).saturating_sub(rows),
            None => 0,
        };
        Self {
            columns,
            rows,
            first_row,
        }
    }

    /// Range of card indices on screen, clipped to `len` cards.
    pub fn visible_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = (self.first_row * self.columns).min(len);
        let end = (start + self.rows * self.columns).min(len);
        start..end
    }

    /// Rect for card `index`, which must be within `visible_range`.
    pub fn card_rect(&self, body: Rect, index: usize) -> Rect {
        let slot = index - self.first_row * self.columns;
        let column = (slot % self.columns) as u16;
        let row = (slot / self.columns) as u16;
        let x = body.x + column * CARD_WIDTH;
        let y = body.y + row * CARD_HEIGHT;
        Rect {
            x,
            y,
            width: CARD_WIDTH.min(body.right().saturating_sub(x)),
            height: CARD_HEIGHT.min(body.bottom().saturating_sub(y)),
        }
    }
}
