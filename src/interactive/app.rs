//! TUI application state and logic

use crate::core::{Feedback, Mark, WORD_LENGTH, Word};
use crate::solver::{GuessOutcome, LetterStatistics, ScoredWord, Session, SessionConfig};
use crate::wordlists::WordCorpus;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Ranked suggestions kept on screen
pub const SUGGESTION_COUNT: usize = 10;

/// Remaining words listed when the guess budget runs out
const OUT_OF_GUESSES_LISTED: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub suggestions: Vec<ScoredWord<'a>>,
    pub statistics: LetterStatistics,
    pub input_mode: InputMode,
    pub guess_buffer: String,
    pub pending_guess: Option<Word>,
    pub marks: Vec<Mark>,
    pub filler_buffer: String,
    pub filler_results: Vec<&'a Word>,
    pub messages: Vec<Message>,
    pub games: GameTally,
    pub show_stats: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the word that was played
    Guess,
    /// Typing the tile marks for the pending guess
    Feedback,
    /// Typing letters for a filler search
    Filler,
    /// Session finished; waiting for reset or quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Games finished in this run
#[derive(Debug, Default, Clone, Copy)]
pub struct GameTally {
    pub total_games: usize,
    pub games_solved: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus, config: SessionConfig) -> Self {
        let mut app = Self {
            session: Session::new(corpus, config),
            suggestions: Vec::new(),
            statistics: LetterStatistics::default(),
            input_mode: InputMode::Guess,
            guess_buffer: String::new(),
            pending_guess: None,
            marks: Vec::with_capacity(WORD_LENGTH),
            filler_buffer: String::new(),
            filler_results: Vec::new(),
            messages: Vec::new(),
            games: GameTally::default(),
            show_stats: false,
            should_quit: false,
        };
        app.refresh();
        app.add_message(
            &format!("Loaded {} words. Type your guess and press Enter.", corpus.len()),
            MessageStyle::Info,
        );
        app.add_message(
            "Enter on an empty line plays the top suggestion.",
            MessageStyle::Info,
        );
        app
    }

    /// Recompute the cached ranking and statistics
    fn refresh(&mut self) {
        self.statistics = self.session.statistics();
        self.suggestions = self.session.suggestions(SUGGESTION_COUNT);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.reset();
                return;
            }
            KeyCode::F(2) => {
                self.show_stats = !self.show_stats;
                return;
            }
            KeyCode::Esc if self.show_stats => {
                self.show_stats = false;
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::Guess => self.handle_guess_key(key.code),
            InputMode::Feedback => self.handle_feedback_key(key.code),
            InputMode::Filler => self.handle_filler_key(key.code),
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'r') | KeyCode::Enter => self.reset(),
                _ => {}
            },
        }
    }

    fn handle_guess_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.input_mode = InputMode::Filler;
                self.add_message("Filler search: type up to 5 letters", MessageStyle::Info);
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.guess_buffer.len() < WORD_LENGTH {
                    self.guess_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.guess_buffer.pop();
            }
            KeyCode::Enter => self.confirm_guess(),
            _ => {}
        }
    }

    fn confirm_guess(&mut self) {
        if self.guess_buffer.is_empty()
            && let Some(top) = self.suggestions.first()
        {
            self.guess_buffer = top.word.text().to_string();
        }

        match self.session.validate_guess(&self.guess_buffer) {
            Ok(word) => {
                self.pending_guess = Some(word);
                self.marks.clear();
                self.input_mode = InputMode::Feedback;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn handle_feedback_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.back_to_guess(),
            KeyCode::Backspace => {
                if self.marks.pop().is_none() {
                    self.back_to_guess();
                }
            }
            KeyCode::Char(c) => {
                if let Some(mark) = Mark::from_char(c) {
                    if self.marks.len() < WORD_LENGTH {
                        self.marks.push(mark);
                    }
                } else if !c.is_whitespace() {
                    self.add_message(
                        &format!("'{c}' is not a mark. Use 0/1/2 or -/Y/G"),
                        MessageStyle::Error,
                    );
                }
            }
            KeyCode::Enter => self.submit_feedback(),
            _ => {}
        }
    }

    fn back_to_guess(&mut self) {
        self.pending_guess = None;
        self.marks.clear();
        self.input_mode = InputMode::Guess;
    }

    fn submit_feedback(&mut self) {
        let Some(guess) = self.pending_guess.clone() else {
            self.back_to_guess();
            return;
        };
        let values: Vec<u8> = self.marks.iter().map(|m| m.value()).collect();
        let feedback = match Feedback::from_values(&values) {
            Ok(feedback) => feedback,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.session.apply(guess.text(), feedback) {
            Ok(outcome) => {
                self.guess_buffer.clear();
                self.pending_guess = None;
                self.marks.clear();
                self.input_mode = InputMode::Guess;
                self.refresh();
                self.report_outcome(outcome);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn report_outcome(&mut self, outcome: GuessOutcome<'a>) {
        match outcome {
            GuessOutcome::Narrowed { remaining } => {
                let best = self
                    .suggestions
                    .first()
                    .map(|s| s.word.text().to_uppercase())
                    .unwrap_or_default();
                self.add_message(
                    &format!("{remaining} words remaining. Next: {best}"),
                    MessageStyle::Info,
                );
            }
            GuessOutcome::Solved(answer) => {
                self.finish_game(true);
                self.add_message(
                    &format!("🎉 The answer is {}!", answer.text().to_uppercase()),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GuessOutcome::Contradiction { reset } => {
                self.add_message(
                    "No words match your criteria. Please check your inputs.",
                    MessageStyle::Error,
                );
                if reset {
                    self.add_message(
                        &format!("Reset to {} words", self.session.candidate_count()),
                        MessageStyle::Info,
                    );
                } else {
                    self.finish_game(false);
                    self.add_message("Press 'n' to start over.", MessageStyle::Info);
                }
            }
            GuessOutcome::OutOfGuesses { remaining } => {
                self.finish_game(false);
                let listed: Vec<String> = self
                    .session
                    .candidates()
                    .iter()
                    .take(OUT_OF_GUESSES_LISTED)
                    .map(|w| w.text().to_uppercase())
                    .collect();
                let mut text = format!("Out of guesses. Still possible: {}", listed.join(", "));
                if remaining > OUT_OF_GUESSES_LISTED {
                    text.push_str(&format!(" and {} more", remaining - OUT_OF_GUESSES_LISTED));
                }
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    fn finish_game(&mut self, solved: bool) {
        self.games.total_games += 1;
        if solved {
            self.games.games_solved += 1;
        }
        self.input_mode = InputMode::GameOver;
    }

    fn handle_filler_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Tab => {
                self.filler_buffer.clear();
                self.input_mode = if self.session.state().is_terminal() {
                    InputMode::GameOver
                } else {
                    InputMode::Guess
                };
            }
            KeyCode::Char(c) if !c.is_whitespace() => self.filler_buffer.push(c),
            KeyCode::Backspace => {
                self.filler_buffer.pop();
            }
            KeyCode::Enter => self.run_filler(),
            _ => {}
        }
    }

    fn run_filler(&mut self) {
        match self.session.filler_words(&self.filler_buffer) {
            Ok(words) => {
                let text = format!(
                    "{} filler word(s) for '{}'",
                    words.len(),
                    self.filler_buffer.to_uppercase()
                );
                self.filler_results = words;
                self.add_message(&text, MessageStyle::Success);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Start over with the full word list
    pub fn reset(&mut self) {
        self.session.reset();
        self.guess_buffer.clear();
        self.pending_guess = None;
        self.marks.clear();
        self.filler_buffer.clear();
        self.filler_results.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.refresh();
        self.add_message(
            &format!("New game! {} words possible.", self.session.candidate_count()),
            MessageStyle::Info,
        );
    }

    /// Whether the board has room for another row
    #[must_use]
    pub fn accepts_guesses(&self) -> bool {
        !self.session.state().is_terminal()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
