use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::ListState,
};

/// Selection over a list whose items live elsewhere. Callers pass the
/// current length so the cursor never points past the end.
#[derive(Debug, Default)]
pub struct ListCursor {
    pub state: ListState,
}

impl ListCursor {
    pub fn with_len(len: usize) -> ListCursor {
        let mut state = ListState::default();
        // Start with the first item selected
        if len > 0 {
            state.select(Some(0));
        }
        ListCursor { state }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Re-anchors the selection after the list changed size.
    pub fn clamp(&mut self, len: usize) {
        let i = match (self.state.selected(), len) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.state.select(i);
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    i
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn first(&mut self, len: usize) {
        if len > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn last(&mut self, len: usize) {
        if len > 0 {
            self.state.select(Some(len - 1));
        }
    }

    pub fn jump_up(&mut self, offset: usize, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(offset),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn jump_down(&mut self, offset: usize, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + offset).min(len - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }
}

/// Single-buffer text field.
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Applies an editing key. Returns false if the key was not for the field.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }
}

/// Rect of `percent_x` by `height` rows centered in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
