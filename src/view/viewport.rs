/// The viewport - what portion of the buffer is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible buffer row
    pub row_offset: usize,

    /// First visible display column (horizontal scroll position)
    pub col_offset: usize,

    /// Number of text rows (terminal height minus status and message bars)
    pub screen_rows: usize,

    /// Number of text columns
    pub screen_cols: usize,
}

/// Rows reserved at the bottom of the terminal for the status and message bars
pub const RESERVED_ROWS: usize = 2;

impl Viewport {
    /// Create a viewport for a terminal of the given size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen_rows: (height as usize).saturating_sub(RESERVED_ROWS),
            screen_cols: width as usize,
        }
    }

    /// Update terminal dimensions
    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen_rows = (height as usize).saturating_sub(RESERVED_ROWS);
        self.screen_cols = width as usize;
    }

    /// Adjust offsets so that (`row`, `display_col`) is inside the visible band.
    pub fn scroll_to(&mut self, row: usize, display_col: usize) {
        if row < self.row_offset {
            self.row_offset = row;
        }
        if row >= self.row_offset + self.screen_rows {
            self.row_offset = (row + 1).saturating_sub(self.screen_rows);
        }
        if display_col < self.col_offset {
            self.col_offset = display_col;
        }
        if display_col >= self.col_offset + self.screen_cols {
            self.col_offset = (display_col + 1).saturating_sub(self.screen_cols);
        }
    }

    /// Whether (`row`, `display_col`) is currently on screen
    pub fn contains(&self, row: usize, display_col: usize) -> bool {
        (self.row_offset..self.row_offset + self.screen_rows).contains(&row)
            && (self.col_offset..self.col_offset + self.screen_cols).contains(&display_col)
    }
}
