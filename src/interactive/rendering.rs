//! TUI rendering with ratatui
//!
//! Board, ranking and statistics views for the helper.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ALPHABET_SIZE, Mark, WORD_LENGTH, letter_at};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, BorderType, Borders, Cell, Clear, Gauge, List, ListItem,
        Paragraph, Row, Table,
    },
};

/// Rows drawn on the board when the guess budget is unlimited
const DEFAULT_BOARD_ROWS: usize = 6;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Board and filler
            Constraint::Percentage(60), // Ranking and messages
        ])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_right_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_stats {
        render_stats_overlay(f, app, f.area());
    }
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORDLE ASSIST - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(14), Constraint::Percentage(35)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_filler(f, app, chunks[1]);
}

const fn mark_symbol(mark: Mark) -> char {
    match mark {
        Mark::Absent => '-',
        Mark::Present => 'Y',
        Mark::Correct => 'G',
    }
}

fn tile_style(mark: Option<Mark>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match mark {
        Some(Mark::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Mark::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Mark::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White).bg(Color::Black),
    }
}

fn tile_row(letters: &[u8], marks: &[Mark]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for i in 0..WORD_LENGTH {
        let ch = letters
            .get(i)
            .map_or('·', |&b| char::from(b).to_ascii_uppercase());
        spans.push(Span::styled(format!(" {ch} "), tile_style(marks.get(i).copied())));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let max = app.session.config().max_guesses;
    let rows = if max == 0 {
        DEFAULT_BOARD_ROWS.max(history.len() + 1)
    } else {
        max
    };

    let mut lines = vec![Line::from("")];
    for record in history {
        lines.push(tile_row(record.guess.chars(), record.feedback.marks()));
        lines.push(Line::from(""));
    }

    if history.len() < rows && app.accepts_guesses() {
        let current = match &app.pending_guess {
            Some(word) => tile_row(word.chars(), &app.marks),
            None => tile_row(app.guess_buffer.as_bytes(), &[]),
        };
        lines.push(current);
        lines.push(Line::from(""));
    }

    let drawn = (lines.len() - 1) / 2;
    for _ in drawn..rows {
        lines.push(tile_row(&[], &[]));
        lines.push(Line::from(""));
    }

    // Unlimited games can outgrow the panel; keep the latest rows visible
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    f.render_widget(Paragraph::new(lines).block(rounded(" Board ")), area);
}

fn render_filler(f: &mut Frame, app: &App, area: Rect) {
    let content: Vec<Line> = if app.filler_results.is_empty() {
        vec![Line::from(Span::styled(
            "Tab: find words using only given letters",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let width = usize::from(area.width.saturating_sub(2)).max(6);
        let per_line = (width / 6).max(1);
        app.filler_results
            .chunks(per_line)
            .map(|chunk| {
                Line::from(
                    chunk
                        .iter()
                        .map(|w| format!("{} ", w.text().to_uppercase()))
                        .collect::<String>(),
                )
            })
            .collect()
    };

    let title = format!(" Filler Words ({}) ", app.filler_results.len());
    f.render_widget(Paragraph::new(content).block(rounded(&title)), area);
}

fn render_right_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Candidate gauge
            Constraint::Percentage(55), // Suggestions
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_candidate_gauge(f, app, chunks[0]);
    render_suggestions(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_candidate_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.corpus().len();
    let remaining = app.session.candidate_count();
    let ratio = if total == 0 {
        0.0
    } else {
        remaining as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(rounded(" Candidates "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining} of {total} words possible"));

    f.render_widget(gauge, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, scored)| {
            let style = if i == 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:>2}. ", i + 1)),
                Span::styled(scored.word.text().to_uppercase(), style),
                Span::styled(
                    format!("  {}", scored.score),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(rounded(" Suggested Guesses "));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guess => (
            " Enter Guess (Enter on empty = top suggestion) | TAB filler | F2 stats ".to_string(),
            app.guess_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::Feedback => {
            let guess = app
                .pending_guess
                .as_ref()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();
            let typed: String = app
                .marks
                .iter()
                .map(|&m| mark_symbol(m))
                .collect();
            (
                format!(" Marks for {guess} (0/-=gray 1/Y=yellow 2/G=green) | ESC back "),
                typed,
                Color::Green,
            )
        }
        InputMode::Filler => (
            " Filler Letters (up to 5) | ESC back ".to_string(),
            app.filler_buffer.to_uppercase(),
            Color::Cyan,
        ),
        InputMode::GameOver => (
            " Game Over | 'n' new game | 'q' quit ".to_string(),
            String::new(),
            Color::Magenta,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let guesses = match app.session.guesses_left() {
        Some(left) => format!("Guess {} | {left} left", app.session.guesses_used()),
        None => format!("Guess {}", app.session.guesses_used()),
    };
    f.render_widget(Paragraph::new(guesses).alignment(Alignment::Center), chunks[0]);

    let games = format!(
        "Games: {} | Solved: {}",
        app.games.total_games, app.games.games_solved
    );
    f.render_widget(Paragraph::new(games).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Ctrl-R: Reset | F2: Stats | Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// Rect of the given percentage size centred in `r`
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

fn render_stats_overlay(f: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(90, 85, area);
    f.render_widget(Clear, popup);

    let title = format!(
        " Letter Statistics: {} candidates | F2/ESC close ",
        app.statistics.word_count()
    );
    let outer = rounded(&title).style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(popup);
    f.render_widget(outer, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(inner);

    render_letter_chart(
        f,
        " Occurrences (words containing letter) ",
        app.statistics.occurrences(),
        Color::Green,
        chunks[0],
    );
    render_letter_chart(
        f,
        " Frequencies (total appearances) ",
        app.statistics.frequencies(),
        Color::Yellow,
        chunks[1],
    );
    render_position_table(f, app, chunks[2]);
}

fn render_letter_chart(
    f: &mut Frame,
    title: &str,
    counts: &[u32; ALPHABET_SIZE],
    color: Color,
    area: Rect,
) {
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::default()
                .value(u64::from(count))
                .label(Line::from(
                    char::from(letter_at(i)).to_ascii_uppercase().to_string(),
                ))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .bar_width(2)
        .bar_gap(1)
        .value_style(Style::default().fg(Color::Black).bg(color));

    f.render_widget(chart, area);
}

fn render_position_table(f: &mut Frame, app: &App, area: Rect) {
    let mut ranked = app.statistics.top_frequencies(ALPHABET_SIZE);
    ranked.retain(|&(_, count)| count > 0);

    let rows: Vec<Row> = ranked
        .iter()
        .map(|&(letter, _)| {
            let mut cells = vec![Cell::from(
                char::from(letter).to_ascii_uppercase().to_string(),
            )];
            cells.extend(
                app.statistics
                    .positions(letter)
                    .iter()
                    .map(|n| Cell::from(n.to_string())),
            );
            Row::new(cells)
        })
        .collect();

    let header = Row::new(["", "1", "2", "3", "4", "5"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, [Constraint::Length(6); WORD_LENGTH + 1])
        .header(header)
        .block(Block::default().title(" Positions ").borders(Borders::ALL));

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SessionConfig;
    use crate::wordlists::WordCorpus;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_suggestions() {
        let corpus = WordCorpus::from_strs(&["crane", "slate", "plate", "crate"]);
        let app = App::new(&corpus, SessionConfig::default());

        let screen = draw(&app);
        assert!(screen.contains("Board"));
        assert!(screen.contains("Suggested Guesses"));
        assert!(screen.contains("4 of 4 words possible"));
    }

    #[test]
    fn renders_stats_overlay() {
        let corpus = WordCorpus::from_strs(&["crane", "slate"]);
        let mut app = App::new(&corpus, SessionConfig::default());
        app.show_stats = true;

        let screen = draw(&app);
        assert!(screen.contains("Letter Statistics"));
        assert!(screen.contains("Positions"));
    }

    #[test]
    fn tile_row_pads_missing_letters() {
        let line = tile_row(b"ab", &[Mark::Correct]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains(" A "));
        assert!(text.contains(" · "));
        assert_eq!(line.spans[1].style, tile_style(Some(Mark::Correct)));
        assert_eq!(line.spans[3].style, tile_style(None));
    }
}
