//! TUI application state and logic

use crate::core::{Feedback, SolveError, Word};
use crate::solver::{Session, SessionState, Verdict, is_consistent};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session<'a, StdRng>,
    pub current_guess: Option<Word>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    /// Solved or out of guesses, waiting for `n` or `q`
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a, StdRng>) -> Self {
        let mut app = Self {
            session,
            current_guess: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_word: String::new(),
        };
        app.add_message(
            "Welcome! I'll narrow the word list with every piece of feedback.",
            MessageStyle::Info,
        );
        app.add_message(
            "Enter feedback (e.g. '01120', 'GY-G-' or '🟩🟨⬜🟩🟨')",
            MessageStyle::Info,
        );
        app.compute_suggestion();
        app
    }

    pub fn compute_suggestion(&mut self) {
        match self.session.next_guess() {
            Ok(word) => self.current_guess = Some(word),
            Err(SolveError::EmptyPopulation) => {
                self.current_guess = None;
                self.add_message(
                    "No words remain - the feedback may be incorrect. Press 'n' to start over.",
                    MessageStyle::Error,
                );
            }
            Err(_) => self.current_guess = None,
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let Some(guess) = self.current_guess.clone() else {
            self.add_message("No guess to give feedback for.", MessageStyle::Error);
            return;
        };

        let input = input.trim().to_lowercase();
        let verdict = if matches!(input.as_str(), "solved" | "correct") {
            Verdict::Solved
        } else {
            match Feedback::parse(&input) {
                Ok(feedback) => Verdict::Feedback(feedback),
                Err(e) => {
                    self.add_message(&e.to_string(), MessageStyle::Error);
                    return;
                }
            }
        };

        match self.session.record(&guess, verdict) {
            Ok(SessionState::Solved { guesses_used }) => self.finish_won(guesses_used),
            Ok(SessionState::Exhausted) => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::Finished;
                self.current_guess = None;
                self.add_message("😞 Out of guesses!", MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(SessionState::AwaitingGuess { .. }) => {
                let remaining = self.population_count();
                self.compute_suggestion();
                if remaining > 0 {
                    self.add_message(&format!("{remaining} words remaining"), MessageStyle::Info);
                }
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        self.input_buffer.clear();
    }

    fn finish_won(&mut self, guesses_used: usize) {
        self.stats.games_won += 1;
        self.stats.total_games += 1;
        if let Some(slot) = self.stats.guess_distribution.get_mut(guesses_used) {
            *slot += 1;
        }

        self.input_mode = InputMode::Finished;
        self.current_guess = None;

        let celebration = match guesses_used {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            _ => "😅 PHEW! Got it in six! 😅",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.current_guess = None;
        self.input_buffer.clear();
        self.manual_word.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
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

    #[must_use]
    pub fn population_count(&self) -> usize {
        self.session.population().len()
    }

    /// Replace the suggestion with the word typed in manual mode
    pub fn use_manual_word(&mut self) {
        let Ok(word) = Word::new(&self.manual_word) else {
            self.add_message("Invalid word format!", MessageStyle::Error);
            return;
        };

        if !self.session.words().contains(&word) {
            self.add_message(
                &format!("Word '{}' not in the word list!", word.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        if !is_consistent(&word, self.session.store()) {
            self.add_message(
                "Note: that word is already ruled out by the feedback",
                MessageStyle::Info,
            );
        }
        self.add_message(
            &format!("Using: {}", word.text().to_uppercase()),
            MessageStyle::Success,
        );

        self.current_guess = Some(word);
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Finished => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Feedback => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Tab => {
                        app.input_mode = InputMode::ManualWord;
                        app.add_message("Enter your own word (5 letters)", MessageStyle::Info);
                    }
                    KeyCode::Char(c) => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_feedback(&input);
                    }
                    _ => {}
                },
                InputMode::ManualWord => match key.code {
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_word.clear();
                        app.add_message("Cancelled manual word entry", MessageStyle::Info);
                    }
                    KeyCode::Tab => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_word.clear();
                    }
                    KeyCode::Char(c) => {
                        if app.manual_word.len() < 5 && c.is_ascii_alphabetic() {
                            app.manual_word.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.manual_word.pop();
                    }
                    KeyCode::Enter => {
                        if app.manual_word.len() == 5 {
                            app.use_manual_word();
                        } else {
                            app.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
