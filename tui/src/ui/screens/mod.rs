pub mod estimator;

use crossterm::event::KeyCode;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
}

pub enum Screen<'a> {
    Estimator(estimator::EstimatorState<'a>),
}

impl Screen<'_> {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Estimator(s) => crate::ui::draw::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Estimator(s) => estimator::handle_key(s, key),
        }
    }
}
