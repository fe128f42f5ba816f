use {
    super::{
        renderer::{amount_color, bar_color, bar_height, bar_label, status_color, tone_color},
        terminal::App,
    },
    crate::{
        series::series_caption,
        view::{SearchPhase, WalletView},
    },
    ratatui::{
        layout::{Constraint, Direction, Layout as RatLayout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
        Frame,
    },
};

const BAR_WIDTH: u16 = 11;

/// Render the main UI layout
pub fn render_layout(f: &mut Frame, area: Rect, app: &App) {
    let chunks = RatLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Address input
            Constraint::Min(0),    // Results
            Constraint::Length(3), // Footer/Status
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_input(f, chunks[1], app);
    render_body(f, chunks[2], app);
    render_footer(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Block::default().borders(Borders::ALL);

    let text = vec![Line::from(vec![
        Span::styled(
            "Solana Wallet Tracker",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - Track and analyze your Solana wallet activities"),
    ])];

    f.render_widget(Paragraph::new(text).block(header), area);
}

fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.search().is_loading() {
        "Wallet address (loading...)"
    } else {
        "Wallet address"
    };

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Magenta)),
        Span::raw(app.input()),
    ]))
    .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(input, area);
}

fn render_body(f: &mut Frame, area: Rect, app: &App) {
    match app.search().phase() {
        SearchPhase::Idle => render_message(
            f,
            area,
            "Enter a Solana wallet address and press Enter",
            Color::Gray,
        ),
        SearchPhase::Loading => render_message(f, area, "Loading wallet activities...", Color::Magenta),
        SearchPhase::Failed(message) => render_message(f, area, message, Color::Red),
        SearchPhase::Loaded(view) if view.is_empty() => render_message(
            f,
            area,
            "No Activities Found - This wallet has no recent transactions.",
            Color::Gray,
        ),
        SearchPhase::Loaded(view) => render_view(f, area, view),
    }
}

fn render_message(f: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

fn render_view(f: &mut Frame, area: Rect, view: &WalletView) {
    let chunks = RatLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Address
            Constraint::Length(4),  // Stat cards
            Constraint::Length(12), // Chart
            Constraint::Min(0),     // Table
        ])
        .split(area);

    let address = Paragraph::new(Line::from(vec![
        Span::styled("Viewing wallet: ", Style::default().fg(Color::Gray)),
        Span::raw(view.address.clone()),
    ]));
    f.render_widget(address, chunks[0]);

    render_stat_cards(f, chunks[1], view);
    render_chart(f, chunks[2], view);
    render_table(f, chunks[3], view);
}

fn render_stat_cards(f: &mut Frame, area: Rect, view: &WalletView) {
    let cards = view.stats.stat_cards();
    let columns = RatLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let color = tone_color(card.tone);
        let mut lines = vec![Line::from(Span::styled(
            card.value.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        if let Some(subtitle) = &card.subtitle {
            lines.push(Line::from(Span::styled(subtitle.clone(), Style::default().fg(Color::Gray))));
        }

        let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(card.title));
        f.render_widget(widget, *column);
    }
}

fn render_chart(f: &mut Frame, area: Rect, view: &WalletView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Transaction Activity ({})", series_caption(&view.series)));

    if !view.has_chart_data() {
        let empty = Paragraph::new("No transaction data available for chart.").block(block);
        f.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = view
        .series
        .iter()
        .map(|point| {
            Bar::default()
                .value(bar_height(point))
                .text_value(point.tooltip())
                .label(Line::from(bar_label(&point.label, BAR_WIDTH as usize)))
                .style(Style::default().fg(bar_color(point)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_table(f: &mut Frame, area: Rect, view: &WalletView) {
    let header = Row::new(vec![
        "Status",
        "Signature",
        "Amount",
        "Fee",
        "Time",
        "Confirmation",
        "Explorer",
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(Span::styled(row.glyph.symbol(), Style::default().fg(status_color(row.glyph)))),
                Cell::from(row.short_signature.clone()),
                Cell::from(Span::styled(
                    row.amount.clone(),
                    Style::default().fg(amount_color(row.amount_sign)).add_modifier(Modifier::BOLD),
                )),
                Cell::from(row.fee.clone()),
                Cell::from(row.time.clone()),
                Cell::from(Span::styled(row.confirmation.clone(), Style::default().fg(Color::Magenta))),
                Cell::from(row.explorer_url.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),  // Status
        Constraint::Length(20), // Signature
        Constraint::Length(16), // Amount
        Constraint::Length(14), // Fee
        Constraint::Length(24), // Time
        Constraint::Length(12), // Confirmation
        Constraint::Min(20),    // Explorer
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Recent Transactions - Latest {} activities", view.rows.len())),
    );

    f.render_widget(table, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let status = match app.search().phase() {
        SearchPhase::Idle => Span::raw("Idle"),
        SearchPhase::Loading => Span::styled("Loading", Style::default().fg(Color::Yellow)),
        SearchPhase::Loaded(view) => Span::styled(
            format!("{} activities", view.stats.total),
            Style::default().fg(Color::Green),
        ),
        SearchPhase::Failed(_) => Span::styled("Error", Style::default().fg(Color::Red)),
    };

    let text = vec![Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::Cyan)),
        status,
        Span::raw(" | "),
        Span::raw("Enter: search  Esc: quit  q: quit (empty input)"),
    ])];

    let footer = Block::default().borders(Borders::ALL).title("Status");
    f.render_widget(Paragraph::new(text).block(footer), area);
}
