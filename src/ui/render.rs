use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{COUNT_TEXT, FIELD_ACTIVE, HEADER_TEXT, HISTORY_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new().widget(state.status), header);
    frame.render_widget(Clear, body);
    frame.render_widget(body_widget(app), body);
    frame.render_widget(Footer::new().widget(footer), footer);
}

fn body_widget(app: &App) -> Paragraph<'static> {
    let state = app.state();
    let text_style = Style::default().fg(HEADER_TEXT);
    let count_style = Style::default().fg(COUNT_TEXT).add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(HISTORY_TEXT);

    let step_style = if app.focus() == Focus::StepField {
        Style::default().fg(FIELD_ACTIVE).add_modifier(Modifier::BOLD)
    } else {
        text_style
    };
    let step_marker = if app.focus() == Focus::StepField {
        "▏"
    } else {
        ""
    };
    let step_note = if state.step.is_none() {
        "  (not a number)"
    } else {
        ""
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Current Count: ", text_style),
            Span::styled(state.count.to_string(), count_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Step Value: ", text_style),
            Span::styled(format!("{}{}", state.step_input, step_marker), step_style),
            Span::styled(step_note, dim_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Count History:", text_style)),
    ];

    for value in &state.history {
        lines.push(Line::from(Span::styled(
            format!("    • {}", value),
            dim_style,
        )));
    }

    Paragraph::new(lines)
}
