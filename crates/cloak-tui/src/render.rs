use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, AppMode, DashboardTab};
use crate::ui::login::render_login;
use crate::ui::logs::render_logs;
use crate::ui::notice::render_notice;
use crate::ui::overview::render_overview;
use crate::ui::placeholder::render_placeholder;
use crate::ui::settings_form::render_settings;
use crate::ui::statusbar::{render_statusbar, StatusBarProps};
use crate::ui::storage::render_storage;
use crate::ui::tab_bar::{render_header, render_tab_bar};

/// Main render function. Draws the login form or the dashboard depending on
/// the session, then the notice toast on top.
pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme();

    match app.mode() {
        AppMode::Login | AppMode::LoginPending => render_login(f, app.login_form(), theme),
        mode => render_dashboard(f, app, mode),
    }

    if let Some(notice) = app.notice() {
        render_notice(f, notice, theme);
    }
}

fn render_dashboard(f: &mut Frame, app: &App, mode: AppMode) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // tabs
            Constraint::Min(3),    // body
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], theme);
    render_tab_bar(f, chunks[1], app.active_tab(), theme);

    let body = chunks[2];
    match app.active_tab() {
        DashboardTab::Overview => render_overview(f, body, theme),
        DashboardTab::Statistics => render_placeholder(
            f,
            body,
            "Analytics and metrics",
            "Detailed service usage statistics",
            "Analytics charts coming soon",
            theme,
        ),
        DashboardTab::Storage => render_storage(
            f,
            body,
            &app.settings().api_token,
            app.token_form(),
            theme,
        ),
        DashboardTab::Users => render_placeholder(
            f,
            body,
            "User management",
            "Users and their activity",
            "User list coming soon",
            theme,
        ),
        DashboardTab::Settings => render_settings(
            f,
            body,
            &app.settings().protection,
            app.settings_form(),
            theme,
        ),
        DashboardTab::Logs => render_logs(f, body, theme),
    }

    let props = StatusBarProps {
        mode,
        username: app.username(),
    };
    render_statusbar(f, chunks[3], &props, theme);
}
