//! UI rendering components

pub mod dashboard;
pub mod layout;
pub mod login;
pub mod navbar;
pub mod quiz_page;
pub mod recommendation;
pub mod schedule;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::state::{AppState, Screen};
use crate::config::Config;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, config: &Config) {
    let theme = config.active_theme();

    // Every route renders the login form until a student is signed in.
    if state.student.is_none() {
        login::draw(frame, &state.login, &theme);
        return;
    }

    let chunks =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(frame.area());

    navbar::draw(frame, chunks[0], state, &theme);

    match state.screen {
        Screen::Login => login::draw(frame, &state.login, &theme),
        Screen::Dashboard => dashboard::draw(frame, chunks[1], state, &theme),
        Screen::Recommendation => recommendation::draw(frame, chunks[1], state, &theme),
        Screen::Quiz => quiz_page::draw(frame, chunks[1], state, &theme),
        Screen::Schedule => schedule::draw(frame, chunks[1], state, &theme),
    }
}
