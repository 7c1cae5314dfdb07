use ratatui::{
    layout::Alignment,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Map, MapResolution, Points},
        Block, Borders, Paragraph, Wrap,
    },
};
use valuation::{map::MapView, Background, Estimate};

use crate::{
    state::form::{Field, FormState},
    ui::theme::Theme,
};

const LABEL_WIDTH: usize = 22;

pub fn banner(background: &Background) -> Paragraph<'_> {
    let lines = background
        .lines()
        .iter()
        .map(|l| Line::from(Span::styled(l.as_str(), Theme::muted())))
        .collect::<Vec<_>>();

    Paragraph::new(lines).alignment(Alignment::Center)
}

pub fn title() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("⌂ ", Theme::value()),
        Span::styled("Property Price Prediction", Theme::title()),
    ]))
    .alignment(Alignment::Center)
}

pub fn form(state: &FormState) -> Paragraph<'static> {
    let mut lines = Vec::with_capacity(Field::ORDER.len() * 2);

    for field in Field::ORDER {
        let focused = field == state.focus;
        let line = match field {
            Field::Predict => button(focused),
            _ => input_row(field, value_text(state, field), focused),
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(" Property Details ")
            .title_style(Theme::title()),
    )
}

fn value_text(state: &FormState, field: Field) -> String {
    match field {
        Field::Area => state.area.value().to_string(),
        Field::Bedrooms => state.bedrooms.value().to_string(),
        Field::Bathrooms => state.bathrooms.value().to_string(),
        Field::UnitType => state
            .unit_type
            .selected()
            .map(|u| u.label().to_string())
            .unwrap_or_default(),
        Field::Location => match state.location.selected() {
            Some(name) => format!(
                "{name} ({}/{})",
                state.location.position() + 1,
                state.location.len()
            ),
            None => "no locations".to_string(),
        },
        Field::Predict => String::new(),
    }
}

fn input_row(field: Field, value: String, focused: bool) -> Line<'static> {
    let (prefix, row_style) = if focused {
        ("▶ ", Theme::focused())
    } else {
        ("  ", Theme::base())
    };

    Line::from(vec![
        Span::styled(prefix, Theme::value().patch(row_style)),
        Span::styled(
            format!("{:<width$}", field.label(), width = LABEL_WIDTH),
            Theme::label().patch(row_style),
        ),
        Span::styled("◀ ", Theme::muted().patch(row_style)),
        Span::styled(value, Theme::value().patch(row_style)),
        Span::styled(" ▶", Theme::muted().patch(row_style)),
    ])
}

fn button(focused: bool) -> Line<'static> {
    let style = if focused {
        Theme::button_focused()
    } else {
        Theme::button()
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[ {} ]", Field::Predict.label()), style),
    ])
}

/// The price card: the estimate, an error, or a prompt.
pub fn price_card<'a>(estimate: Option<&'a Estimate>, error: Option<&'a str>) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::card_border())
        .title(" Estimate ")
        .title_style(Theme::title());

    let line = match (estimate, error) {
        (_, Some(err)) => Line::from(vec![
            Span::styled(" ✖ ", Theme::error()),
            Span::styled(err, Theme::error()),
        ]),
        (Some(estimate), None) => Line::from(Span::styled(
            format!(" Predicted Price: {} ", estimate.display),
            Theme::card_text(),
        )),
        (None, None) => Line::from(Span::styled(
            "Fill in the details and press [p] to predict.",
            Theme::muted(),
        )),
    };

    Paragraph::new(vec![Line::from(""), line])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
}

fn map_block(view: Option<&MapView>) -> Block<'static> {
    let title = match view {
        Some(v) => format!(
            " Property Location on Map · zoom {} · pitch {}° ",
            v.zoom, v.pitch
        ),
        None => " Property Location on Map ".to_string(),
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(title)
        .title_style(Theme::title())
}

/// Single-marker map centred on the estimate's location.
pub fn location_map(view: MapView) -> Canvas<'static, impl Fn(&mut Context)> {
    Canvas::default()
        .block(map_block(Some(&view)))
        .marker(Marker::Braille)
        .x_bounds(view.x_bounds())
        .y_bounds(view.y_bounds())
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: Theme::coastline(),
                resolution: MapResolution::High,
            });
            ctx.layer();
            ctx.draw(&Circle {
                x: view.longitude,
                y: view.latitude,
                radius: view.marker_radius_deg(),
                color: Theme::marker(),
            });
            ctx.draw(&Points {
                coords: &[(view.longitude, view.latitude)],
                color: Theme::marker(),
            });
            ctx.print(
                view.longitude,
                view.latitude + view.marker_radius_deg() * 1.5,
                Span::styled(
                    format!("{:.4}, {:.4}", view.latitude, view.longitude),
                    Theme::value(),
                ),
            );
        })
}

pub fn empty_map() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        "The property location appears here after a prediction.",
        Theme::muted(),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
}

pub fn empty_map_block() -> Block<'static> {
    map_block(None)
}

pub fn hints() -> Paragraph<'static> {
    let pairs = [
        ("↑↓", "field"),
        ("←→", "change"),
        ("0-9", "type"),
        ("p", "predict"),
        ("q", "quit"),
    ];

    let spans = pairs
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!("[{key}]"), Theme::key()),
                Span::styled(format!(" {action}   "), Theme::muted()),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
