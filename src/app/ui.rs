use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};
use rust_decimal::Decimal;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{
    app::{
        calc,
        utils::{format_currency, format_decimal},
        view_model::HoldingsState,
    },
    models::Holding,
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(Clone, Copy, Debug, Display, EnumIter)]
enum Column {
    Symbol,
    #[strum(to_string = "Net Qty")]
    Quantity,
    #[strum(to_string = "LTP")]
    Ltp,
    #[strum(to_string = "Avg Price")]
    AvgPrice,
    #[strum(to_string = "P&L")]
    Pnl,
}

impl Column {
    fn width(&self) -> Constraint {
        match self {
            Column::Symbol => Constraint::Length(20),
            Column::Quantity => Constraint::Length(10),
            _ => Constraint::Length(18),
        }
    }

    fn cell(&self, holding: &Holding) -> Cell<'static> {
        match self {
            Column::Symbol => Cell::from(holding.symbol().to_string()),
            Column::Quantity => Cell::from(holding.quantity().to_string()),
            Column::Ltp => Cell::from(format_currency(*holding.ltp())),
            Column::AvgPrice => Cell::from(format_currency(*holding.avg_price())),
            Column::Pnl => Cell::from(format_currency(*holding.pnl()))
                .style(Style::default().fg(gain_color(*holding.pnl() >= 0.0))),
        }
    }
}

fn gain_color(positive: bool) -> Color {
    if positive { Color::Green } else { Color::Red }
}

pub fn render(
    frame: &mut Frame,
    state: &HoldingsState,
    table_state: &mut TableState,
    summary_expanded: bool,
    tick: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let subtitle = match state {
        HoldingsState::Loaded {
            fetched_at,
            from_cache: true,
            ..
        } => format!(
            "Offline, showing holdings saved {}",
            fetched_at.format("%d %b %H:%M")
        ),
        HoldingsState::Loaded { fetched_at, .. } => {
            format!("Updated at {}", fetched_at.format("%H:%M:%S"))
        }
        HoldingsState::Loading => "Refreshing...".to_string(),
        _ => String::new(),
    };
    let title = Paragraph::new(Line::from(vec![
        Span::styled("Holdings", Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(subtitle, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    match state {
        HoldingsState::Idle => render_message(frame, chunks[1], "Press r to load holdings.", Color::Gray),
        HoldingsState::Loading => {
            let message = format!("{} Loading holdings...", SPINNER[tick % SPINNER.len()]);
            render_message(frame, chunks[1], &message, Color::Cyan);
        }
        HoldingsState::Loaded { holdings, .. } if holdings.is_empty() => render_message(
            frame,
            chunks[1],
            "No holdings yet. Your positions will appear here.",
            Color::Yellow,
        ),
        HoldingsState::Loaded { holdings, .. } => {
            render_holdings(frame, chunks[1], holdings, table_state, summary_expanded)
        }
        HoldingsState::Failed { error, .. } => {
            let lines = vec![
                Line::from(Span::styled(
                    "Something went wrong",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(error.to_string()),
                Line::from(error.recovery_suggestion()),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter or r to retry",
                    Style::default().fg(Color::Yellow),
                )),
            ];
            let panel = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Error").borders(Borders::ALL));
            frame.render_widget(panel, chunks[1]);
        }
    }

    let help = Paragraph::new("q quit | r refresh | s summary | up/down select")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let panel = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_holdings(
    frame: &mut Frame,
    area: Rect,
    holdings: &[Holding],
    table_state: &mut TableState,
    summary_expanded: bool,
) {
    let summary_height = if summary_expanded { 7 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(summary_height)])
        .split(area);

    let header = Row::new(
        Column::iter().map(|c| Cell::from(c.to_string()).style(Style::default().fg(Color::Yellow))),
    )
    .height(1);

    let rows = holdings
        .iter()
        .map(|holding| Row::new(Column::iter().map(|c| c.cell(holding))).height(1));

    let widths: Vec<Constraint> = Column::iter().map(|c| c.width()).collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Holdings").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, chunks[0], table_state);

    let lines = match calc::summarize(holdings) {
        Ok(summary) => {
            let row = |label: &str, value: Decimal, colored: bool| {
                let style = if colored {
                    Style::default().fg(gain_color(value >= Decimal::ZERO))
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::raw(format!("{:<18}", label)),
                    Span::styled(format_decimal(value), style),
                ])
            };
            let mut lines = Vec::new();
            if summary_expanded {
                lines.push(row("Current value*", *summary.current_value(), false));
                lines.push(row("Total investment*", *summary.total_investment(), false));
                lines.push(row("Today's P&L*", *summary.todays_pnl(), true));
            }
            lines.push(row("Profit & Loss*", *summary.total_pnl(), true));
            lines
        }
        Err(err) => vec![Line::from(Span::styled(
            format!("Summary unavailable: {}", err),
            Style::default().fg(Color::Red),
        ))],
    };

    let summary = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(summary, chunks[1]);
}
