//! Framework-free key events. The terminal backend converts its own event
//! type into [`KeyPress`]; the dispatch layer never sees backend types.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Enter,
    Esc,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
        }
    }

    pub fn shift(code: KeyCode) -> Self {
        Self {
            shift: true,
            ..Self::plain(code)
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(code)
        }
    }

    pub fn meta(code: KeyCode) -> Self {
        Self {
            meta: true,
            ..Self::plain(code)
        }
    }
}

/// Platform discriminator, used only to decide which modifier combination
/// counts as "control-like".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

#[cfg(feature = "tui")]
impl From<crossterm::event::KeyEvent> for KeyPress {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;

        let code = match event.code {
            crossterm::event::KeyCode::Enter => KeyCode::Enter,
            crossterm::event::KeyCode::Esc => KeyCode::Esc,
            crossterm::event::KeyCode::Tab => KeyCode::Tab,
            crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
            crossterm::event::KeyCode::Up => KeyCode::Up,
            crossterm::event::KeyCode::Down => KeyCode::Down,
            crossterm::event::KeyCode::Left => KeyCode::Left,
            crossterm::event::KeyCode::Right => KeyCode::Right,
            crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
            _ => KeyCode::Other,
        };

        let shift = event.modifiers.contains(KeyModifiers::SHIFT)
            || matches!(code, KeyCode::Char(ch) if ch.is_ascii_uppercase());

        Self {
            code,
            shift,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            meta: event.modifiers.contains(KeyModifiers::SUPER)
                || event.modifiers.contains(KeyModifiers::META),
        }
    }
}
