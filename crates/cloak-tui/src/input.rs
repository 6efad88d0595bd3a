use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Quit the application.
    Quit,
    /// Append a character to the focused login field.
    LoginChar(char),
    /// Remove the last character from the focused login field.
    LoginBackspace,
    /// Move focus to the other login field.
    LoginSwitchField,
    /// Submit the login form.
    LoginSubmit,
    NextTab,
    PrevTab,
    /// Jump to a tab by 0-based index.
    SelectTab(usize),
    Logout,
    /// Open the form on the active tab.
    BeginEdit,
    // Dashboard form actions
    /// Append a character to the focused form field.
    FormChar(char),
    /// Remove the last character from the focused form field.
    FormBackspace,
    /// Apply the focused field and move to the next one.
    FormNextField,
    /// Apply the focused field and move to the previous one.
    FormPrevField,
    /// Flip the focused on/off field.
    FormToggle,
    /// Apply, toggle or save depending on the focused row.
    FormConfirm,
    /// Close the form.
    FormCancel,
    /// No action for this key.
    None,
}

/// Maps a key event to an InputAction based on the current mode.
///
/// Ctrl+C quits from every mode. While a login is pending every other key
/// is ignored.
pub fn handle_key(key: KeyEvent, mode: AppMode) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => InputAction::Quit,
            _ => InputAction::None,
        };
    }
    match mode {
        AppMode::Login => handle_login_key(key),
        AppMode::LoginPending => InputAction::None,
        AppMode::Dashboard => handle_dashboard_key(key),
        AppMode::EditSettings => handle_settings_key(key),
        AppMode::EditToken => handle_token_key(key),
    }
}

fn handle_login_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::Quit,
        KeyCode::Enter => InputAction::LoginSubmit,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            InputAction::LoginSwitchField
        }
        KeyCode::Backspace => InputAction::LoginBackspace,
        KeyCode::Char(c) => InputAction::LoginChar(c),
        _ => InputAction::None,
    }
}

fn handle_dashboard_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => InputAction::NextTab,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => InputAction::PrevTab,
        KeyCode::Char(c @ '1'..='6') => InputAction::SelectTab(c as usize - '1' as usize),
        KeyCode::Char('o') => InputAction::Logout,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('e') | KeyCode::Enter => InputAction::BeginEdit,
        _ => InputAction::None,
    }
}

fn handle_settings_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::FormCancel,
        KeyCode::Enter => InputAction::FormConfirm,
        KeyCode::Tab | KeyCode::Down => InputAction::FormNextField,
        KeyCode::BackTab | KeyCode::Up => InputAction::FormPrevField,
        KeyCode::Char(' ') => InputAction::FormToggle,
        KeyCode::Backspace => InputAction::FormBackspace,
        KeyCode::Char(c) => InputAction::FormChar(c),
        _ => InputAction::None,
    }
}

fn handle_token_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::FormCancel,
        KeyCode::Enter => InputAction::FormConfirm,
        KeyCode::Backspace => InputAction::FormBackspace,
        KeyCode::Char(c) => InputAction::FormChar(c),
        _ => InputAction::None,
    }
}
