use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: usize = 10;

/// Scroll offset of a dialog body plus its scrollbar
#[derive(Debug, Default, Clone)]
pub struct ScrollState {
    offset: usize,
    scrollbar: ScrollbarState,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn scrollbar_mut(&mut self) -> &mut ScrollbarState {
        &mut self.scrollbar
    }

    pub fn up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_SIZE));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_SIZE));
    }

    pub fn top(&mut self) {
        self.set(0);
    }

    /// Clamped to the content at the next render
    pub fn bottom(&mut self) {
        self.set(usize::MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Keep the offset inside the content and size the scrollbar.
    /// Returns the clamped offset.
    pub fn clamp(&mut self, total_lines: usize, visible_lines: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_lines);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar = self
            .scrollbar
            .content_length(max_scroll + 1)
            .viewport_content_length(visible_lines)
            .position(self.offset);
        self.offset
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar = self.scrollbar.position(offset);
    }
}
