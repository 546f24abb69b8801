//! Top-level application state and key dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::warn;

use crate::calculator::Calculator;
use crate::explorer::Explorer;
use crate::export;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Calculator,
    Explorer,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Calculator, Tab::Explorer]
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Calculator => "Loan Calculator",
            Self::Explorer => "State Explorer",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Calculator => Self::Explorer,
            Self::Explorer => Self::Calculator,
        }
    }
}

/// Modal overlays. Cosmetic chrome: each is independent of the screens and
/// of the other, and closing one never disturbs calculator or explorer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    Mission,
}

pub struct App {
    pub tab: Tab,
    pub calculator: Calculator,
    pub explorer: Explorer,
    pub overlay: Option<Overlay>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            tab: Tab::Calculator,
            calculator: Calculator::new(),
            explorer: Explorer::new(),
            overlay: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(overlay) = self.overlay {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.overlay = None,
                KeyCode::Char('?') if overlay == Overlay::Help => self.overlay = None,
                KeyCode::Char('m') if overlay == Overlay::Mission => self.overlay = None,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.tab = self.tab.next(),
            KeyCode::Char('1') => self.tab = Tab::Calculator,
            KeyCode::Char('2') => self.tab = Tab::Explorer,
            KeyCode::Char('?') => self.overlay = Some(Overlay::Help),
            KeyCode::Char('m') => self.overlay = Some(Overlay::Mission),
            _ => match self.tab {
                Tab::Calculator => handle_calculator_key(self, key),
                Tab::Explorer => handle_explorer_key(self, key),
            },
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn handle_calculator_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => app.calculator.type_char(c),
        KeyCode::Backspace => app.calculator.backspace(),
        KeyCode::Down | KeyCode::Char('j') => app.calculator.focus_next(),
        KeyCode::Up | KeyCode::Char('k') => app.calculator.focus_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.calculator.nudge_up(),
        KeyCode::Left | KeyCode::Char('h') => app.calculator.nudge_down(),
        KeyCode::Char('e') | KeyCode::Char('E') => export_summary(app),
        _ => {}
    }
}

fn handle_explorer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.explorer.hover_next(),
        KeyCode::Up | KeyCode::Char('k') => app.explorer.hover_prev(),
        KeyCode::Enter => app.explorer.select(),
        KeyCode::Char('f') => app.explorer.cycle_filter(),
        KeyCode::Char('c') => app.explorer.close_panel(),
        KeyCode::Char('p') => app.explorer.toggle_panel(),
        KeyCode::PageDown => app.explorer.scroll_down(),
        KeyCode::PageUp => app.explorer.scroll_up(),
        KeyCode::Char('e') | KeyCode::Char('E') => export_state(app),
        KeyCode::Esc => app.explorer.close_panel(),
        _ => {}
    }
}

fn export_summary(app: &mut App) {
    let (Some(params), Some(result)) = (app.calculator.parameters(), app.calculator.result())
    else {
        app.status = Some("Nothing to export: inputs are incomplete".to_string());
        return;
    };
    let filename = "emi_summary.csv";
    match export::write_summary_csv(filename, &params, result) {
        Ok(()) => app.status = Some(format!("Exported to {filename}")),
        Err(err) => {
            warn!(%err, "summary export failed");
            app.status = Some(format!("Export failed: {err}"));
        }
    }
}

fn export_state(app: &mut App) {
    let Some(record) = app.explorer.panel_record() else {
        app.status = Some("No state data to export".to_string());
        return;
    };
    let filename = format!("{}.json", record.id);
    match export::write_state_json(&filename, record) {
        Ok(()) => app.status = Some(format!("Exported to {filename}")),
        Err(err) => {
            warn!(%err, "state export failed");
            app.status = Some(format!("Export failed: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn tab_switching_and_quit() {
        let mut app = App::new();
        assert_eq!(app.tab, Tab::Calculator);
        app.on_key(press(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Explorer);
        app.on_key(press(KeyCode::Char('1')));
        assert_eq!(app.tab, Tab::Calculator);
        app.on_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn overlay_swallows_screen_keys() {
        let mut app = App::new();
        app.on_key(press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Some(Overlay::Help));

        let before = *app.calculator.result().unwrap();
        app.on_key(press(KeyCode::Char('5')));
        assert_eq!(*app.calculator.result().unwrap(), before);

        app.on_key(press(KeyCode::Esc));
        assert_eq!(app.overlay, None);
        assert!(!app.should_quit);
    }

    #[test]
    fn typing_reaches_the_focused_input() {
        let mut app = App::new();
        app.on_key(press(KeyCode::Backspace));
        app.on_key(press(KeyCode::Char('9')));
        let text = app.calculator.input(crate::calculator::Field::Amount).text();
        assert_eq!(text, "1000009");
    }

    #[test]
    fn explorer_keys_drive_hover_and_selection() {
        let mut app = App::new();
        app.on_key(press(KeyCode::Char('2')));
        app.on_key(press(KeyCode::Down));
        app.on_key(press(KeyCode::Enter));
        assert!(app.explorer.is_selected(1));
        app.on_key(press(KeyCode::Char('c')));
        assert!(!app.explorer.panel_visible());
    }
}
