use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, Paragraph, Row, Table,
        TableState, Tabs,
    },
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use strum::IntoEnumIterator;

use crate::{
    app::{
        chart_range::ChartRange,
        form::{AddHoldingForm, FormField},
        format::{format_idr, format_percent, format_signed_idr},
    },
    models::{ChartPoint, Holding, MarketIndex, PortfolioSummary},
};

fn gain_color(value: Decimal) -> Color {
    if value >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    }
}

pub fn render(
    frame: &mut Frame,
    holdings: &[Holding],
    summary: &PortfolioSummary,
    indices: &[MarketIndex],
    chart: &[ChartPoint],
    chart_range: ChartRange,
    table_state: &mut TableState,
    form: Option<&AddHoldingForm>,
    status: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Length(12),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("InvestoPort")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_market_strip(frame, chunks[1], indices);
    render_summary(frame, chunks[2], summary);
    render_chart(frame, chunks[3], chart, chart_range);
    render_holdings(frame, chunks[4], holdings, table_state);

    let footer = match status {
        Some(message) => Paragraph::new(message.as_str()).style(Style::default().fg(Color::Yellow)),
        None => Paragraph::new(
            "a: add stock | ←/→: range | ↑/↓: select | esc: clear | q: quit",
        )
        .style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(footer, chunks[5]);

    if let Some(form) = form {
        render_form(frame, form);
    }
}

fn render_market_strip(frame: &mut Frame, area: Rect, indices: &[MarketIndex]) {
    if indices.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, indices.len() as u32); indices.len()])
        .split(area);

    for (index, column) in indices.iter().zip(columns.iter()) {
        let color = if *index.is_positive() {
            Color::Green
        } else {
            Color::Red
        };
        let text = vec![
            Line::from(Span::styled(
                index.value().as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(index.change().as_str(), Style::default().fg(color))),
        ];
        let widget = Paragraph::new(text).block(
            Block::default()
                .title(index.name().as_str())
                .borders(Borders::ALL),
        );
        frame.render_widget(widget, *column);
    }
}

fn render_summary(frame: &mut Frame, area: Rect, summary: &PortfolioSummary) {
    let gain = *summary.total_gain();
    let color = gain_color(gain);

    let text = vec![
        Line::from(Span::styled(
            format_idr(*summary.total_value()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Gain / Loss  "),
            Span::styled(format_signed_idr(gain), Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(
                format!("({})", format_percent(*summary.gain_percent())),
                Style::default().fg(color),
            ),
        ]),
        Line::from(Span::styled(
            format!("Invested {}", format_idr(*summary.total_cost())),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(text).block(
        Block::default()
            .title("Total Portfolio Value")
            .borders(Borders::ALL),
    );
    frame.render_widget(widget, area);
}

fn render_chart(frame: &mut Frame, area: Rect, chart: &[ChartPoint], chart_range: ChartRange) {
    let block = Block::default().title("Performance").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let tabs = Tabs::new(ChartRange::iter().map(|range| range.to_string()))
        .select(chart_range.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[0]);

    if chart.is_empty() {
        return;
    }

    let points: Vec<(f64, f64)> = chart
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value().to_f64().unwrap_or(0.0)))
        .collect();
    let min = points.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let max = points
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut labels = vec![chart[0].date().clone()];
    if chart.len() > 2 {
        labels.push(chart[chart.len() / 2].date().clone());
    }
    if chart.len() > 1 {
        labels.push(chart[chart.len() - 1].date().clone());
    }

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Blue))
        .data(&points);

    let widget = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, (points.len() - 1) as f64])
                .labels(labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([min - 10.0, max + 10.0]),
        );
    frame.render_widget(widget, chunks[1]);
}

fn render_holdings(frame: &mut Frame, area: Rect, holdings: &[Holding], table_state: &mut TableState) {
    if holdings.is_empty() {
        let empty_message = Paragraph::new("No holdings yet. Press 'a' to add a stock.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().title("My Holdings").borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = [
        "Ticker", "Name", "Lots", "Shares", "Avg Price", "Price", "Value", "Daily %",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = holdings.iter().map(|holding| {
        let daily_gain = *holding.daily_gain_percentage();
        let cells = [
            Cell::from(holding.ticker().clone()).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(holding.name().clone()),
            Cell::from(holding.lots().normalize().to_string()),
            Cell::from(holding.shares().normalize().to_string()),
            Cell::from(format_idr(*holding.purchase_price())),
            Cell::from(format_idr(*holding.current_price())),
            Cell::from(format_idr(holding.market_value())),
            Cell::from(format!("{:+.2}%", daily_gain)).style(Style::default().fg(gain_color(daily_gain))),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("My Holdings").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_form(frame: &mut Frame, form: &AddHoldingForm) {
    let area = centered_rect(56, 13, frame.area());
    frame.render_widget(Clear, area);

    let mut text = Vec::new();
    for field in FormField::iter() {
        let focused = field == form.focus();
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        text.push(Line::from(Span::styled(format!("{}{}", marker, field), style)));
        text.push(Line::from(format!("    {}", form.value(field))));
    }

    text.push(Line::from(""));
    text.push(Line::from(vec![
        Span::raw("Total Estimated Investment  "),
        Span::styled(
            form.estimated_investment()
                .map(format_idr)
                .unwrap_or_else(|| String::from("too large")),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    match form.error() {
        Some(message) => text.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        ))),
        None => text.push(Line::from(Span::styled(
            "tab: next field | enter: add | esc: cancel",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let widget = Paragraph::new(text).block(
        Block::default()
            .title("Add New Stock")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(widget, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
