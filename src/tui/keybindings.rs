//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for different contexts

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active on the tour screen
    Tour,
    /// Active on the home screen
    Home,
    /// Active on the status screen
    Status,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('?'),
        modifiers: KeyModifiers::NONE,
        description: "Help",
        context: KeyContext::Global,
    },
    // Tour
    Keybinding {
        key: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        description: "Next step",
        context: KeyContext::Tour,
    },
    Keybinding {
        key: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        description: "Next step",
        context: KeyContext::Tour,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Next step / finish",
        context: KeyContext::Tour,
    },
    Keybinding {
        key: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        description: "Previous step",
        context: KeyContext::Tour,
    },
    Keybinding {
        key: KeyCode::Char('1'),
        modifiers: KeyModifiers::NONE,
        description: "Jump to a step (1-5)",
        context: KeyContext::Tour,
    },
    Keybinding {
        key: KeyCode::Char('g'),
        modifiers: KeyModifiers::NONE,
        description: "First step",
        context: KeyContext::Tour,
    },
    Keybinding {
        key: KeyCode::Char('G'),
        modifiers: KeyModifiers::SHIFT,
        description: "Last step",
        context: KeyContext::Tour,
    },
    Keybinding {
        key: KeyCode::Char('s'),
        modifiers: KeyModifiers::NONE,
        description: "Skip the tour",
        context: KeyContext::Tour,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Skip the tour",
        context: KeyContext::Tour,
    },
    // Home
    Keybinding {
        key: KeyCode::Char('t'),
        modifiers: KeyModifiers::NONE,
        description: "Replay the tour",
        context: KeyContext::Home,
    },
    Keybinding {
        key: KeyCode::Char('s'),
        modifiers: KeyModifiers::NONE,
        description: "Status screen",
        context: KeyContext::Home,
    },
    // Status
    Keybinding {
        key: KeyCode::Char('r'),
        modifiers: KeyModifiers::NONE,
        description: "Re-run checks",
        context: KeyContext::Status,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Back to home",
        context: KeyContext::Status,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context || kb.context == KeyContext::Global)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }
    if kb.modifiers.contains(KeyModifiers::SHIFT) {
        // Only show Shift for non-character keys
        if !matches!(kb.key, KeyCode::Char(_)) {
            parts.push("Shift");
        }
    }

    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(&key_str);
    parts.join("+")
}
