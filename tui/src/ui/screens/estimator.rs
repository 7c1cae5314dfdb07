use crossterm::event::KeyCode;
use valuation::{Artifacts, Background, Session};

use crate::state::form::{FormEvent, FormState};

use super::Action;

pub struct EstimatorState<'a> {
    pub form: FormState,
    pub session: Session<'a>,
    pub background: &'a Background,
    /// Inline error from the last submission, if it failed.
    pub error: Option<String>,
}

impl<'a> EstimatorState<'a> {
    pub fn new(artifacts: &'a Artifacts, currency: &str) -> Self {
        Self::with_session(artifacts.session(currency), &artifacts.background)
    }

    pub fn with_session(session: Session<'a>, background: &'a Background) -> Self {
        let form = FormState::new(&session.neighborhoods().distinct_neighborhoods());
        Self {
            form,
            session,
            background,
            error: None,
        }
    }

    fn submit(&mut self) {
        let input = self.form.to_input();
        match self.session.submit(&input) {
            Ok(_) => self.error = None,
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

pub fn handle_key(state: &mut EstimatorState<'_>, key: KeyCode) -> Action {
    match state.form.handle_key(key) {
        FormEvent::Quit => Action::Quit,
        FormEvent::Submit => {
            state.submit();
            Action::None
        }
        FormEvent::Changed => {
            state.session.reset();
            state.error = None;
            Action::None
        }
        FormEvent::None => Action::None,
    }
}
