use ratatui::{widgets::Block, Frame};
use valuation::Phase;

use crate::ui::{layout, screens::estimator::EstimatorState, theme::Theme, widgets};

/// Banner rows never take more than this, whatever the art's height.
const MAX_BANNER_HEIGHT: u16 = 9;

/// Draws the estimator screen.
pub fn draw(f: &mut Frame, state: &EstimatorState<'_>) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let banner_height = (state.background.height() as u16).min(MAX_BANNER_HEIGHT);
    let (banner_area, title_area, body_area, footer_area) =
        layout::vertical(area, banner_height);
    let (form_area, result_area) = layout::body(body_area);
    let (card_area, map_area) = layout::result(result_area);

    f.render_widget(widgets::banner(state.background), banner_area);
    f.render_widget(widgets::title(), title_area);
    f.render_widget(widgets::form(&state.form), form_area);

    let estimate = match state.session.phase() {
        Phase::ResultDisplayed(estimate) => Some(estimate),
        Phase::AwaitingInput => None,
    };

    f.render_widget(
        widgets::price_card(estimate, state.error.as_deref()),
        card_area,
    );

    match estimate {
        Some(estimate) => f.render_widget(widgets::location_map(estimate.map), map_area),
        None => {
            let block = widgets::empty_map_block();
            let inner = block.inner(map_area);
            f.render_widget(block, map_area);
            f.render_widget(
                widgets::empty_map(),
                layout::centered_rect(80, 40, inner),
            );
        }
    }

    f.render_widget(widgets::hints(), footer_area);
}
