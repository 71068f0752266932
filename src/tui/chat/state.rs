//! Chat surface state
//!
//! Holds only presentation state: the input buffer, scrolling, the loading
//! flag, and transient banners. The turn history itself lives in
//! [`Conversation`](crate::application::conversation::Conversation) and is
//! rendered from there directly.

/// Presentation state for the chat screen
pub struct ChatState {
    /// Current input buffer
    pub input: String,
    /// Cursor position in input, counted in chars
    pub cursor_pos: usize,
    /// Scroll offset for the turn list
    pub scroll_offset: u16,
    /// Whether a request is in flight. While set, input is ignored, which
    /// keeps submissions strictly serialized.
    pub loading: bool,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Last failure, shown until the next submit
    pub error_message: Option<String>,
    /// Transient notice (help text, reset confirmation)
    pub status_message: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            loading: false,
            loading_frame: 0,
            error_message: None,
            status_message: None,
        }
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    fn byte_pos(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_pos();
        self.input.insert(at, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_pos();
            self.input.remove(at);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            let at = self.byte_pos();
            self.input.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            self.cursor_pos += 1;
        }
    }

    /// Move cursor to start
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    /// Scroll turns up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll turns down
    pub fn scroll_down(&mut self, max_scroll: u16) {
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to bottom of the turn list
    pub fn scroll_to_bottom(&mut self) {
        // Clamped to the real maximum during render.
        self.scroll_offset = u16::MAX;
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.loading {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Check if input is a command
    pub fn is_command(&self) -> bool {
        self.input.starts_with('/') || self.input.starts_with(':')
    }
}
