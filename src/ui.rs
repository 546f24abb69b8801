//! All rendering. The core modules never touch the terminal; this is the
//! thin presentation layer over them.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, Overlay, Tab};
use crate::calculator::{Calculator, Field};
use crate::chart::ChartAdapter;
use crate::explorer::Explorer;
use crate::format::{format_inr, format_inr_rounded};
use crate::states::StateRecord;

const PRINCIPAL_COLOR: Color = Color::Blue;
const INTEREST_COLOR: Color = Color::Red;

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_tabs(f, chunks[0], app.tab);

    match app.tab {
        Tab::Calculator => render_calculator(f, chunks[1], &app.calculator),
        Tab::Explorer => render_explorer(f, chunks[1], &mut app.explorer),
    }

    render_footer(f, chunks[2], app);

    match app.overlay {
        Some(Overlay::Help) => render_help_overlay(f, app.tab),
        Some(Overlay::Mission) => render_mission_overlay(f),
        None => {}
    }
}

fn render_tabs(f: &mut Frame, area: Rect, current: Tab) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(t.title(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("EduAccess India"))
        .select(Tab::all().iter().position(|&t| t == current).unwrap_or(0));
    f.render_widget(tabs, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let help = match app.tab {
        Tab::Calculator => "↑/↓: field | ←/→: adjust | 0-9: edit | e: export | Tab: switch | m: mission | ?: help | q: quit",
        Tab::Explorer => "↑/↓: hover | Enter: pin | f: filter | p: panel | c: close | PgUp/PgDn: scroll | e: export | q: quit",
    };
    let mut lines = vec![Line::from(Span::styled(
        help,
        Style::default().fg(Color::DarkGray),
    ))];
    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(Color::Cyan),
        )));
    }
    let footer = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn render_calculator(f: &mut Frame, area: Rect, calc: &Calculator) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let input_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    for (i, field) in Field::all().iter().enumerate() {
        render_input_group(f, input_rows[i], calc, *field);
    }

    let result_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(7)])
        .split(columns[1]);

    render_results(f, result_rows[0], calc);
    render_chart(f, result_rows[1], calc.chart());
}

fn render_input_group(f: &mut Frame, area: Rect, calc: &Calculator, field: Field) {
    let focused = calc.focus() == field;
    let input = calc.input(field);

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(field.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 3 || inner.width < 2 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let text = if focused {
        format!("{}▏", input.text())
    } else {
        input.text().to_string()
    };
    let value = Paragraph::new(text).style(Style::default().fg(Color::Yellow));
    f.render_widget(value, rows[0]);

    let slider = Gauge::default()
        .gauge_style(Style::default().fg(if focused { Color::Yellow } else { Color::DarkGray }))
        .ratio(input.slider_ratio())
        .label("");
    f.render_widget(slider, rows[1]);

    let label = Paragraph::new(input.formatted_label())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Right);
    f.render_widget(label, rows[2]);
}

fn render_results(f: &mut Frame, area: Rect, calc: &Calculator) {
    let block = Block::default().borders(Borders::ALL).title("EMI Breakdown");

    let text = if let Some(result) = calc.result() {
        vec![
            Line::from(vec![
                Span::styled("Monthly Payable: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("₹ {} /mo", format_inr_rounded(result.monthly_installment)),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Principal Amount: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("₹ {}", format_inr(result.total_principal)),
                    Style::default().fg(PRINCIPAL_COLOR),
                ),
            ]),
            Line::from(vec![
                Span::styled("Total Interest: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("₹ {}", format_inr_rounded(result.total_interest)),
                    Style::default().fg(INTEREST_COLOR),
                ),
            ]),
            Line::from(vec![
                Span::styled("Total Payable: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("₹ {}", format_inr_rounded(result.total_payable)),
                    Style::default().fg(Color::Green),
                ),
            ]),
        ]
    } else {
        vec![Line::from("Enter a positive amount, tenure, and rate.")]
    };

    f.render_widget(Paragraph::new(text).block(block), area);
}

fn render_chart(f: &mut Frame, area: Rect, chart: &ChartAdapter) {
    let block = Block::default().borders(Borders::ALL).title("Payment Breakdown");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 4 || inner.width < 4 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let width = inner.width as usize;
    let principal_cells = ((chart.principal_ratio() * width as f64).round() as usize).min(width);
    let bar = Line::from(vec![
        Span::styled("█".repeat(principal_cells), Style::default().fg(PRINCIPAL_COLOR)),
        Span::styled("█".repeat(width - principal_cells), Style::default().fg(INTEREST_COLOR)),
    ]);
    f.render_widget(Paragraph::new(bar), rows[0]);

    let principal_pct = chart.principal_ratio() * 100.0;
    let legend_principal = Line::from(vec![
        Span::styled("■ ", Style::default().fg(PRINCIPAL_COLOR)),
        Span::raw(format!(
            "Principal  ₹ {}  ({principal_pct:.1}%)",
            format_inr_rounded(chart.principal())
        )),
    ]);
    let legend_interest = Line::from(vec![
        Span::styled("■ ", Style::default().fg(INTEREST_COLOR)),
        Span::raw(format!(
            "Interest   ₹ {}  ({:.1}%)",
            format_inr_rounded(chart.interest()),
            100.0 - principal_pct
        )),
    ]);
    f.render_widget(Paragraph::new(legend_principal), rows[2]);
    f.render_widget(Paragraph::new(legend_interest), rows[3]);
}

fn render_explorer(f: &mut Frame, area: Rect, explorer: &mut Explorer) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_state_list(f, columns[0], explorer);

    if !explorer.panel_visible() {
        render_welcome_panel(f, columns[1]);
    } else {
        match explorer.panel_record() {
            Some(record) => render_state_panel(f, columns[1], explorer, record),
            None => render_no_data_panel(f, columns[1]),
        }
    }
}

fn render_state_list(f: &mut Frame, area: Rect, explorer: &Explorer) {
    let filter = explorer.filter();
    let items: Vec<ListItem> = crate::states::STATES
        .iter()
        .enumerate()
        .map(|(i, state)| {
            let pinned = explorer.is_selected(i);
            let marker = if pinned { "▶ " } else { "  " };
            let style = if pinned {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if filter.matches(state) {
                Style::default().fg(Color::White)
            } else {
                // Filtered-out states are dimmed, not hidden.
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker}{}", state.name),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("States · filter: {}", filter.label())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut state = ListState::default();
    state.select(Some(explorer.cursor()));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_welcome_panel(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Interactive India Education Map",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Move over any state to see its educational institutions"),
        Line::from("and scholarships. Press Enter to keep a state pinned."),
        Line::from(""),
        Line::from("Explore universities, colleges, and institutes across"),
        Line::from("India, and discover state-specific scholarships."),
    ];
    let panel = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Welcome to EduAccess India"))
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

fn render_no_data_panel(f: &mut Frame, area: Rect) {
    let panel = Paragraph::new("No data available for this state.")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("State Details"))
        .alignment(Alignment::Center);
    f.render_widget(panel, area);
}

fn render_state_panel(f: &mut Frame, area: Rect, explorer: &mut Explorer, record: &StateRecord) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            record.name,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Known for: {}", record.known_for),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(format!(
            "Institutions: {}   Scholarships: {}",
            record.institutions.len(),
            record.scholarships.len()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Top Educational Institutions",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    for inst in record.institutions {
        lines.push(Line::from(vec![
            Span::raw("  • "),
            Span::styled(inst.name, Style::default().fg(Color::Yellow)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {} · {} · {}", inst.kind.label(), inst.ranking, inst.specialty),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", inst.website),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "State Scholarships",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for sch in record.scholarships {
        lines.push(Line::from(vec![
            Span::raw(format!("  {}  ", sch.name)),
            Span::styled(sch.amount, Style::default().fg(Color::Green)),
        ]));
    }

    let block = Block::default().borders(Borders::ALL);
    let inner_height = block.inner(area).height;
    let max_scroll = (lines.len() as u16).saturating_sub(inner_height);
    explorer.clamp_scroll(max_scroll);

    // Scroll position indicator in the panel title.
    let title = if max_scroll > 0 {
        let pct = (explorer.scroll() as f64 / max_scroll as f64 * 100.0).round();
        format!("State Details · {pct:.0}%")
    } else {
        "State Details".to_string()
    };

    let panel = Paragraph::new(lines)
        .block(block.title(title))
        .scroll((explorer.scroll(), 0));
    f.render_widget(panel, area);
}

fn render_help_overlay(f: &mut Frame, tab: Tab) {
    let area = centered_rect(60, 60, f.size());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled("Keys", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Tab / 1 / 2    switch between calculator and explorer"),
        Line::from("m              mission statement"),
        Line::from("q              quit"),
        Line::from(""),
    ];
    match tab {
        Tab::Calculator => {
            lines.push(Line::from("↑/↓ or j/k     move between inputs"));
            lines.push(Line::from("←/→ or h/l     slide the focused value"));
            lines.push(Line::from("0-9 and .      edit the focused value directly"));
            lines.push(Line::from("Backspace      delete the last character"));
            lines.push(Line::from("e              export the EMI summary as CSV"));
        }
        Tab::Explorer => {
            lines.push(Line::from("↑/↓ or j/k     hover across states"));
            lines.push(Line::from("Enter          pin the hovered state"));
            lines.push(Line::from("f              cycle the institution filter"));
            lines.push(Line::from("p              show or hide the detail panel"));
            lines.push(Line::from("c or Esc       close the panel and unpin"));
            lines.push(Line::from("PgUp/PgDn      scroll the detail panel"));
            lines.push(Line::from("e              export the state record as JSON"));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    let help = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: false });
    f.render_widget(help, area);
}

fn render_mission_overlay(f: &mut Frame) {
    let area = centered_rect(60, 40, f.size());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from("Education should never be out of reach because of"),
        Line::from("geography or cost. EduAccess India brings together"),
        Line::from("state-wise institutions, scholarships, and a clear"),
        Line::from("picture of what an education loan really costs, so"),
        Line::from("every student can plan with open eyes."),
        Line::from(""),
        Line::from(Span::styled(
            "Esc or m to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let mission = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Our Mission"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(mission, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
