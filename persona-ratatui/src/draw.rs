//! Rendering of the three screens.

use persona_survey::{Mode, Outcome, Progress};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::Theme;
use crate::app::{App, Focus, RESULT_BUTTONS};

const SUBTITLE: &str = "Create and discover your personality type";

const REMOVE_MARKER: &str = "  ✕";

pub(crate) fn draw(frame: &mut Frame, app: &App, theme: &Theme, title: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Tabs
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let header = Paragraph::new(vec![
        Line::from(title.to_string()).style(Style::default().fg(theme.primary).bold()),
        Line::from(SUBTITLE).style(Style::default().fg(theme.border)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(header, chunks[0]);

    draw_tabs(frame, chunks[1], app, theme);

    match app.session.mode() {
        Mode::Creating => draw_creator(frame, chunks[2], app, theme),
        Mode::Taking { .. } => draw_taking(frame, chunks[2], app, theme),
        Mode::ShowingResults { outcome } => draw_results(frame, chunks[2], app, outcome, theme),
    }

    let help_text = match app.session.mode() {
        Mode::Creating => "Tab/↑↓: Move  Enter: Activate  Ctrl+D: Remove  F2: Take Survey  Esc: Quit",
        Mode::Taking { .. } => "↑/↓: Select  Enter or 1-9: Answer  F1: Create Survey  Esc: Quit",
        Mode::ShowingResults { .. } => {
            "←/→: Choose  Enter: Confirm  R: Retake  C: Create New  Esc: Quit"
        }
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[3]);
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let creating = app.session.mode().is_creating();
    let active = Style::default().fg(theme.highlight).bold();
    let inactive = Style::default().fg(theme.text);

    let take_style = if !app.session.can_start() {
        Style::default().fg(theme.border)
    } else if creating {
        inactive
    } else {
        active
    };
    let tabs = Line::from(vec![
        Span::styled(" F1 Create Survey ", if creating { active } else { inactive }),
        Span::raw("   "),
        Span::styled(" F2 Take Survey ", take_style),
    ]);
    frame.render_widget(Paragraph::new(tabs).alignment(Alignment::Center), area);
}

fn draw_creator(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let draft = app.session.draft();
    let option_rows = draft.options().len() as u16 + 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title
            Constraint::Length(3),           // Description
            Constraint::Length(3),           // Question
            Constraint::Length(option_rows), // Options
            Constraint::Length(1),           // Add option
            Constraint::Length(1),           // Add question
            Constraint::Min(0),
        ])
        .split(columns[0]);

    let survey = app.session.survey();
    text_field(
        frame,
        rows[0],
        app,
        Focus::Title,
        " Survey Title ",
        &survey.title,
        "e.g., Introvert vs Extrovert Test",
        theme,
    );
    text_field(
        frame,
        rows[1],
        app,
        Focus::Description,
        " Description ",
        &survey.description,
        "Brief description of your survey...",
        theme,
    );
    text_field(
        frame,
        rows[2],
        app,
        Focus::QuestionText,
        " Question ",
        draft.text(),
        "Enter your question...",
        theme,
    );

    // Answer options
    let removable = draft.can_remove_option();
    let mut cursor_column = None;
    let lines: Vec<Line> = draft
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let focused = app.focus == Focus::Option(i);
            let marker = if focused { "► " } else { "  " };
            let suffix = format!("  ({} pt)", option.score);
            let remove_width = if removable { REMOVE_MARKER.chars().count() } else { 0 };
            let reserved = marker.chars().count() + suffix.chars().count() + remove_width;
            let label_width = rows[3].width.saturating_sub(2 + reserved as u16);
            let label = if option.text.is_empty() {
                Span::styled(
                    format!("Option {}...", i + 1),
                    Style::default().fg(theme.border).italic(),
                )
            } else {
                let cursor = if focused { app.cursor } else { 0 };
                let (visible, column) = visible_window(&option.text, cursor, label_width);
                if focused {
                    cursor_column = Some(column);
                }
                Span::styled(visible, Style::default().fg(theme.text))
            };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(theme.highlight)),
                label,
                Span::styled(suffix, Style::default().fg(theme.border)),
            ];
            if removable {
                spans.push(Span::styled(REMOVE_MARKER, Style::default().fg(theme.error)));
            }
            Line::from(spans)
        })
        .collect();
    let options_focused = matches!(app.focus, Focus::Option(_));
    let options = Paragraph::new(lines).block(field_block(" Answer Options ", options_focused, theme));
    frame.render_widget(options, rows[3]);
    if let Focus::Option(i) = app.focus {
        frame.set_cursor_position((
            rows[3].x + 3 + cursor_column.unwrap_or(0),
            rows[3].y + 1 + i as u16,
        ));
    }

    frame.render_widget(
        button("+ Add Option", app.focus == Focus::AddOption, true, theme),
        rows[4],
    );
    frame.render_widget(
        button(
            "Add Question",
            app.focus == Focus::AddQuestion,
            app.session.can_commit(),
            theme,
        ),
        rows[5],
    );

    draw_question_list(frame, columns[1], app, theme);
}

#[allow(clippy::too_many_arguments)]
fn text_field(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    focus: Focus,
    label: &str,
    value: &str,
    placeholder: &str,
    theme: &Theme,
) {
    let focused = app.focus == focus;
    let cursor = if focused { app.cursor } else { 0 };
    let (visible, column) = visible_window(value, cursor, area.width.saturating_sub(2));
    let content = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(theme.border).italic())
    } else {
        Span::styled(visible, Style::default().fg(theme.text))
    };
    let widget = Paragraph::new(Line::from(content)).block(field_block(label, focused, theme));
    frame.render_widget(widget, area);

    if focused {
        frame.set_cursor_position((area.x + 1 + column, area.y + 1));
    }
}

/// The tail of `text` that keeps the cursor inside a field `width` columns wide,
/// and the cursor's column within it.
///
/// `cursor` counts characters; columns are display width, so wide glyphs take two.
fn visible_window(text: &str, cursor: usize, width: u16) -> (String, u16) {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let columns = |from: usize| Span::raw(chars[from..cursor].iter().collect::<String>()).width();

    // The cell under the cursor must fit too.
    let mut start = 0;
    while start < cursor && columns(start) >= usize::from(width) {
        start += 1;
    }
    let column = u16::try_from(columns(start)).unwrap_or(u16::MAX);
    (chars[start..].iter().collect(), column)
}

fn field_block<'a>(label: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused { theme.primary } else { theme.border };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(label)
        .title_style(Style::default().fg(theme.secondary))
}

fn button<'a>(label: &'a str, focused: bool, enabled: bool, theme: &Theme) -> Paragraph<'a> {
    let style = match (enabled, focused) {
        (false, true) => Style::default().fg(theme.border).bold(),
        (false, false) => Style::default().fg(theme.border),
        (true, true) => Style::default().fg(theme.highlight).bold(),
        (true, false) => Style::default().fg(theme.secondary),
    };
    let marker = if focused { "► " } else { "  " };
    Paragraph::new(Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("[ {label} ]"), style),
    ]))
}

fn draw_question_list(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let survey = app.session.survey();
    let mut lines = Vec::new();
    for (i, question) in survey.questions().iter().enumerate() {
        let style = if app.focus == Focus::Question(i) {
            Style::default().fg(theme.highlight).bold()
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, question.text()),
            style,
        )));
        for option in question.options() {
            lines.push(Line::from(Span::styled(
                format!("   • {}", option.text),
                Style::default().fg(theme.border),
            )));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No questions yet. Fill in a question and its options, then choose Add Question.",
            Style::default().fg(theme.border).italic(),
        )));
    }

    let list = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" Questions ({}) ", survey.len()))
                .title_style(Style::default().fg(theme.secondary)),
        );
    frame.render_widget(list, area);
}

fn draw_taking(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let (Some(question), Some(progress)) =
        (app.session.current_question(), app.session.progress())
    else {
        return;
    };

    // Title and description, when the author provided them
    let survey = app.session.survey();
    let mut prelude = Vec::new();
    if !survey.title.is_empty() {
        prelude.push(Line::from(survey.title.clone()).style(Style::default().fg(theme.primary).bold()));
    }
    if !survey.description.is_empty() {
        prelude.push(Line::from(survey.description.clone()).style(Style::default().fg(theme.text)));
    }
    let prelude_height = if prelude.is_empty() { 0 } else { 3 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(prelude_height), // Prelude
            Constraint::Length(2),              // Progress bar
            Constraint::Length(3),              // Question prompt
            Constraint::Min(5),                 // Options
        ])
        .split(area);

    if !prelude.is_empty() {
        let widget = Paragraph::new(prelude)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(widget, chunks[0]);
    }

    draw_progress(frame, chunks[1], progress, theme);

    let prompt = Paragraph::new(question.text().to_string())
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Question ")
                .title_style(Style::default().fg(theme.highlight)),
        );
    frame.render_widget(prompt, chunks[2]);

    let items: Vec<ListItem> = question
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if i == app.selected {
                Style::default().fg(theme.highlight).bold()
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(format!("  {}. {}", i + 1, option.text)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Select Option ")
                .title_style(Style::default().fg(theme.secondary)),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected));
    frame.render_stateful_widget(list, chunks[3], &mut list_state);
}

/// Thin single-line bar filled to the share of questions reached, caption below.
fn draw_progress(frame: &mut Frame, area: Rect, progress: Progress, theme: &Theme) {
    let caption = format!(" {} ", progress.label());
    let bar_width = area.width.saturating_sub(2);
    let text_width = (caption.chars().count() as u16).min(bar_width);
    let filled_width = (progress.fraction() * bar_width as f64) as u16;

    let bar_x = area.x + 1;
    let bar_y = area.y;

    let track = "─".repeat(bar_width as usize);
    let track_widget = Paragraph::new(track).style(Style::default().fg(theme.border));
    frame.render_widget(track_widget, Rect::new(bar_x, bar_y, bar_width, 1));

    if filled_width > 0 {
        let filled = "━".repeat(filled_width as usize);
        let filled_widget = Paragraph::new(filled).style(Style::default().fg(theme.primary));
        frame.render_widget(filled_widget, Rect::new(bar_x, bar_y, filled_width, 1));
    }

    let text_x = bar_x + (bar_width.saturating_sub(text_width)) / 2;
    let text_widget = Paragraph::new(caption).style(Style::default().fg(theme.secondary));
    frame.render_widget(text_widget, Rect::new(text_x, bar_y + 1, text_width, 1));
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App, outcome: &Outcome, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .title(" Result ")
        .title_style(Style::default().fg(theme.success).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buttons: Vec<Span> = RESULT_BUTTONS
        .iter()
        .enumerate()
        .flat_map(|(i, label)| {
            let style = if i == app.selected {
                Style::default().fg(theme.highlight).bold()
            } else {
                Style::default().fg(theme.secondary)
            };
            [Span::styled(format!("[ {label} ]"), style), Span::raw("   ")]
        })
        .collect();

    let text = vec![
        Line::from(outcome.label()).style(Style::default().fg(theme.primary).bold()),
        Line::default(),
        Line::from(outcome.description()).style(Style::default().fg(theme.text)),
        Line::default(),
        Line::from("Your Score").style(Style::default().fg(theme.border)),
        Line::from(outcome.scorecard.to_string()).style(Style::default().fg(theme.highlight).bold()),
        Line::default(),
        Line::from(buttons),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Min(10),
            Constraint::Percentage(20),
        ])
        .split(inner);

    frame.render_widget(paragraph, centered[1]);
}
