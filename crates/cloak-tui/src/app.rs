use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use cloak_core::config::settings::Config;
use cloak_core::config::theme::Theme;
use cloak_core::{
    AuthError, FileStore, Notice, ProtectionSettings, SessionGate, SettingsField, SettingsState,
};

use crate::ui::login::LoginFormState;
use crate::ui::settings_form::{SettingsFormState, SettingsRow};
use crate::ui::storage::TokenFormState;

/// Application mode. Determines how input is routed and what is drawn.
///
/// Derived from the session gate: every mode other than the two login modes
/// implies an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Login,
    /// Login submitted, waiting for the artificial delay to elapse.
    LoginPending,
    Dashboard,
    EditSettings,
    EditToken,
}

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Statistics,
    Storage,
    Users,
    Settings,
    Logs,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 6] = [
        DashboardTab::Overview,
        DashboardTab::Statistics,
        DashboardTab::Storage,
        DashboardTab::Users,
        DashboardTab::Settings,
        DashboardTab::Logs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::Statistics => "Statistics",
            Self::Storage => "Storage",
            Self::Users => "Users",
            Self::Settings => "Settings",
            Self::Logs => "Logs",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which dashboard form is open, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EditState {
    None,
    Settings(SettingsFormState),
    Token(TokenFormState),
}

#[derive(Debug, Clone)]
struct ActiveNotice {
    notice: Notice,
    shown_at: Instant,
}

/// Top-level application state.
///
/// Every transition consumes the app and returns the next one.
pub struct App {
    gate: SessionGate,
    /// Protection settings every new session starts from.
    initial_protection: ProtectionSettings,
    theme: Theme,
    notice_ttl: Duration,
    login_delay: Duration,
    login_form: LoginFormState,
    active_tab: DashboardTab,
    settings: SettingsState,
    edit: EditState,
    notice: Option<ActiveNotice>,
    should_quit: bool,
}

/// Resolves the config file path.
///
/// `$CLOAK_ADMIN_CONFIG` wins, then `config/default.toml` in the working
/// directory, then `~/.config/cloak-admin/config.toml`.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("CLOAK_ADMIN_CONFIG").filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let local = PathBuf::from("config").join("default.toml");
    if local.exists() {
        return local;
    }
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".config")
        .join("cloak-admin")
        .join("config.toml")
}

/// Loads the config at `path`, falling back to defaults when it is missing
/// or unreadable.
pub fn load_config(path: &Path) -> Config {
    match Config::load(path) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(cloak_core::CoreError::NotFound(_)) => {
            tracing::debug!("No config at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => {
            tracing::warn!("Ignoring config {}: {e}", path.display());
            Config::default()
        }
    }
}

/// Loads the theme at `path`, falling back to the default theme.
pub fn load_theme(path: &Path) -> Theme {
    match Theme::load(path) {
        Ok(theme) => {
            tracing::info!("Loaded theme from {}", path.display());
            theme
        }
        Err(cloak_core::CoreError::NotFound(_)) => Theme::default(),
        Err(e) => {
            tracing::warn!("Ignoring theme {}: {e}", path.display());
            Theme::default()
        }
    }
}

impl App {
    /// Creates an app around `gate`. Call [`App::restore_session`] to pick
    /// up a stored token.
    pub fn new(gate: SessionGate, config: &Config, theme: Theme) -> Self {
        Self {
            gate,
            initial_protection: config.protection,
            theme,
            notice_ttl: Duration::from_secs(config.ui.notice_seconds),
            login_delay: Duration::from_millis(config.ui.login_delay_ms),
            login_form: LoginFormState::default(),
            active_tab: DashboardTab::Overview,
            settings: SettingsState::new(config.protection),
            edit: EditState::None,
            notice: None,
            should_quit: false,
        }
    }

    /// Builds the app from the config file next to `config_path`: store,
    /// verifier and theme.
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        let config = load_config(config_path);
        let config_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let theme = load_theme(&config_dir.join("theme.toml"));
        let store = FileStore::new(config.storage.resolve(&config_dir));
        tracing::debug!("Session store at {}", store.path().display());
        let verifier = config.auth.verifier()?;

        let gate = SessionGate::new(Box::new(store), verifier);
        Ok(Self::new(gate, &config, theme).restore_session())
    }

    pub fn mode(&self) -> AppMode {
        if !self.gate.is_authenticated() {
            return if self.login_form.is_pending() {
                AppMode::LoginPending
            } else {
                AppMode::Login
            };
        }
        match self.edit {
            EditState::None => AppMode::Dashboard,
            EditState::Settings(_) => AppMode::EditSettings,
            EditState::Token(_) => AppMode::EditToken,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn login_delay(&self) -> Duration {
        self.login_delay
    }

    pub fn login_form(&self) -> &LoginFormState {
        &self.login_form
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn settings_form(&self) -> Option<&SettingsFormState> {
        match &self.edit {
            EditState::Settings(form) => Some(form),
            _ => None,
        }
    }

    pub fn token_form(&self) -> Option<&TokenFormState> {
        match &self.edit {
            EditState::Token(form) => Some(form),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().map(|n| &n.notice)
    }

    /// Username verified in this process, if any.
    pub fn username(&self) -> Option<&str> {
        self.gate.identity().map(|i| i.username.as_str())
    }

    pub fn with_quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }

    pub fn with_notice(self, notice: Notice) -> Self {
        Self {
            notice: Some(ActiveNotice {
                notice,
                shown_at: Instant::now(),
            }),
            ..self
        }
    }

    /// Drops the notice once it has been visible for the configured time.
    pub fn with_expired_notice(self, now: Instant) -> Self {
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= self.notice_ttl);
        if expired {
            Self {
                notice: None,
                ..self
            }
        } else {
            self
        }
    }

    // --- Session ---

    pub fn restore_session(self) -> Self {
        let mut gate = self.gate;
        gate.restore_session();
        Self { gate, ..self }
    }

    fn with_login_form(self, login_form: LoginFormState) -> Self {
        Self { login_form, ..self }
    }

    pub fn login_char(self, c: char) -> Self {
        let mut form = self.login_form.clone();
        form.focused_value_mut().push(c);
        form.hint = None;
        self.with_login_form(form)
    }

    pub fn login_backspace(self) -> Self {
        let mut form = self.login_form.clone();
        form.focused_value_mut().pop();
        self.with_login_form(form)
    }

    pub fn login_switch_field(self) -> Self {
        let form = LoginFormState {
            focused: self.login_form.focused.toggle(),
            ..self.login_form.clone()
        };
        self.with_login_form(form)
    }

    /// Starts the login delay, or shows a hint if a field is empty.
    ///
    /// The caller is expected to schedule [`App::complete_login`] once
    /// [`App::login_delay`] has elapsed when this leaves the app in
    /// [`AppMode::LoginPending`].
    pub fn submit_login(self) -> Self {
        if self.login_form.is_pending() {
            return self;
        }
        let form = match self.login_form.missing_field() {
            Some(field) => {
                let hint = match field {
                    crate::ui::login::LoginField::Username => "Enter a username",
                    crate::ui::login::LoginField::Password => "Enter a password",
                };
                LoginFormState {
                    focused: field,
                    hint: Some(hint.to_string()),
                    ..self.login_form.clone()
                }
            }
            None => LoginFormState {
                hint: None,
                pending_since: Some(Instant::now()),
                ..self.login_form.clone()
            },
        };
        self.with_login_form(form)
    }

    /// Runs the credential check for a pending login.
    pub fn complete_login(self) -> Self {
        if !self.login_form.is_pending() {
            return self;
        }
        let mut gate = self.gate;
        let result = gate.authenticate(&self.login_form.username, &self.login_form.password);
        let app = Self { gate, ..self };

        match result {
            Ok(_) => {
                let settings = SettingsState::new(app.initial_protection);
                Self {
                    login_form: LoginFormState::default(),
                    active_tab: DashboardTab::Overview,
                    settings,
                    edit: EditState::None,
                    ..app
                }
                .with_notice(Notice::login_succeeded())
            }
            Err(e) => {
                let notice = match e {
                    AuthError::InvalidCredentials => Notice::login_failed(),
                    AuthError::Storage(_) => Notice::session_unavailable(),
                };
                let form = LoginFormState {
                    pending_since: None,
                    ..app.login_form.clone()
                };
                app.with_login_form(form).with_notice(notice)
            }
        }
    }

    pub fn logout(self) -> Self {
        let mut gate = self.gate;
        // The gate logs a failed delete and is unauthenticated either way.
        let _ = gate.logout();
        Self {
            gate,
            login_form: LoginFormState::default(),
            active_tab: DashboardTab::Overview,
            settings: SettingsState::new(self.initial_protection),
            edit: EditState::None,
            ..self
        }
    }

    // --- Tabs ---

    pub fn with_tab(self, active_tab: DashboardTab) -> Self {
        Self { active_tab, ..self }
    }

    pub fn next_tab(self) -> Self {
        let tab = self.active_tab.next();
        self.with_tab(tab)
    }

    pub fn prev_tab(self) -> Self {
        let tab = self.active_tab.prev();
        self.with_tab(tab)
    }

    /// Jumps to the tab at `index`; out-of-range indices are ignored.
    pub fn select_tab(self, index: usize) -> Self {
        match DashboardTab::from_index(index) {
            Some(tab) => self.with_tab(tab),
            None => self,
        }
    }

    // --- Forms ---

    fn with_edit(self, edit: EditState) -> Self {
        Self { edit, ..self }
    }

    /// Opens the form of the active tab, if it has one.
    pub fn begin_edit(self) -> Self {
        let edit = match self.active_tab {
            DashboardTab::Settings => {
                EditState::Settings(SettingsFormState::new(&self.settings.protection))
            }
            DashboardTab::Storage => EditState::Token(TokenFormState::new(&self.settings.api_token)),
            _ => return self,
        };
        self.with_edit(edit)
    }

    pub fn form_char(self, c: char) -> Self {
        let edit = match &self.edit {
            EditState::Settings(form) if form.focused.is_numeric() => {
                let mut form = form.clone();
                form.buffer.push(c);
                EditState::Settings(form)
            }
            EditState::Token(form) => {
                let mut form = form.clone();
                form.buffer.push(c);
                EditState::Token(form)
            }
            _ => return self,
        };
        self.with_edit(edit)
    }

    pub fn form_backspace(self) -> Self {
        let edit = match &self.edit {
            EditState::Settings(form) => {
                let mut form = form.clone();
                form.buffer.pop();
                EditState::Settings(form)
            }
            EditState::Token(form) => {
                let mut form = form.clone();
                form.buffer.pop();
                EditState::Token(form)
            }
            EditState::None => return self,
        };
        self.with_edit(edit)
    }

    /// Applies the focused numeric row's buffer.
    ///
    /// On a rejected value the settings are left as they were and the form
    /// keeps focus with the reason attached. Returns whether it applied.
    fn apply_settings_buffer(self) -> (Self, bool) {
        let form = match &self.edit {
            EditState::Settings(form) => form.clone(),
            _ => return (self, false),
        };
        let field = match form.focused {
            SettingsRow::Field(field) if form.focused.is_numeric() => field,
            _ => return (self, true),
        };
        match self.settings.protection.update_field(field, &form.buffer) {
            Ok(protection) => {
                let settings = self.settings.clone().with_protection(protection);
                let form = SettingsFormState::focused_on(form.focused, &protection);
                let app = Self { settings, ..self }.with_edit(EditState::Settings(form));
                (app, true)
            }
            Err(e) => {
                tracing::debug!("Rejected settings input: {e}");
                let form = form.with_error(e.to_string());
                (self.with_edit(EditState::Settings(form)), false)
            }
        }
    }

    fn move_settings_focus(self, step: fn(SettingsRow) -> SettingsRow) -> Self {
        let (app, applied) = self.apply_settings_buffer();
        if !applied {
            return app;
        }
        let row = match &app.edit {
            EditState::Settings(form) => step(form.focused),
            _ => return app,
        };
        let form = SettingsFormState::focused_on(row, &app.settings.protection);
        app.with_edit(EditState::Settings(form))
    }

    pub fn form_next_field(self) -> Self {
        self.move_settings_focus(SettingsRow::next)
    }

    pub fn form_prev_field(self) -> Self {
        self.move_settings_focus(SettingsRow::prev)
    }

    /// Flips the enabled flag when it has focus.
    pub fn form_toggle(self) -> Self {
        let focused_enabled = matches!(
            &self.edit,
            EditState::Settings(form) if form.focused == SettingsRow::Field(SettingsField::Enabled)
        );
        if !focused_enabled {
            return self;
        }
        let protection = self.settings.protection.toggled();
        let settings = self.settings.clone().with_protection(protection);
        Self { settings, ..self }
    }

    /// Enter: apply a numeric row, toggle the flag, or save.
    pub fn form_confirm(self) -> Self {
        match self.edit.clone() {
            EditState::Settings(form) => match form.focused {
                SettingsRow::Save => {
                    let ack = self.settings.protection.save();
                    self.with_edit(EditState::None).with_notice(ack.into_notice())
                }
                SettingsRow::Field(SettingsField::Enabled) => self.form_toggle(),
                SettingsRow::Field(_) => self.apply_settings_buffer().0,
            },
            EditState::Token(form) => {
                let settings = self.settings.clone().with_api_token(form.buffer);
                let ack = settings.save_api_token();
                Self { settings, ..self }
                    .with_edit(EditState::None)
                    .with_notice(ack.into_notice())
            }
            EditState::None => self,
        }
    }

    /// Closes the form. Values already applied are kept.
    pub fn form_cancel(self) -> Self {
        self.with_edit(EditState::None)
    }
}
