use std::io::{self, BufRead, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

use crate::domain::types::Amount;
use crate::prompt::{Prompt, PromptError};

/// Terminal frontend: questions render on stdout, answers come from stdin.
///
/// Text and numeric questions use plain line input. Password and select
/// questions switch the terminal into raw mode to read individual key
/// events, so the secret is masked and the menu is navigated in place.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        ConsolePrompt
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }
}

/// Restores cooked mode when dropped, including on early returns.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl Prompt for ConsolePrompt {
    fn text(&mut self, message: &str) -> Result<String, PromptError> {
        let mut out = io::stdout();
        write!(out, "{} ", message)?;
        out.flush()?;
        self.read_line()
    }

    fn password(&mut self, message: &str) -> Result<String, PromptError> {
        let mut out = io::stdout();
        write!(out, "{} ", message)?;
        out.flush()?;

        let raw = RawMode::enable()?;
        let mut secret = String::new();
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Enter => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Err(PromptError::Closed);
                    }
                    KeyCode::Backspace => {
                        if secret.pop().is_some() {
                            execute!(out, cursor::MoveLeft(1), Print(' '), cursor::MoveLeft(1))?;
                        }
                    }
                    KeyCode::Char(c) => {
                        secret.push(c);
                        execute!(out, Print('*'))?;
                    }
                    _ => {}
                }
            }
        }
        drop(raw);

        writeln!(out)?;
        Ok(secret)
    }

    fn amount(&mut self, message: &str, default: Option<Amount>) -> Result<Amount, PromptError> {
        let mut out = io::stdout();
        loop {
            match default {
                Some(default) => write!(out, "{} [{}] ", message, default)?,
                None => write!(out, "{} ", message)?,
            }
            out.flush()?;

            let line = self.read_line()?;
            if line.is_empty() {
                if let Some(default) = default {
                    return Ok(default);
                }
            }
            match Amount::from_str_rounded(&line) {
                Ok(amount) => return Ok(amount),
                Err(_) => writeln!(out, "Please enter a valid amount.")?,
            }
        }
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, PromptError> {
        let mut out = io::stdout();
        writeln!(out, "{}", message)?;

        let raw = RawMode::enable()?;
        let mut selected = 0;
        render_choices(&mut out, choices, selected, false)?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Enter => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Err(PromptError::Closed);
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        selected = if selected == 0 {
                            choices.len() - 1
                        } else {
                            selected - 1
                        };
                        render_choices(&mut out, choices, selected, true)?;
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        selected = (selected + 1) % choices.len();
                        render_choices(&mut out, choices, selected, true)?;
                    }
                    KeyCode::Char(c @ '1'..='9') => {
                        let index = (c as usize) - ('1' as usize);
                        if index < choices.len() {
                            selected = index;
                            render_choices(&mut out, choices, selected, true)?;
                        }
                    }
                    _ => {}
                }
            }
        }
        drop(raw);

        Ok(selected)
    }
}

fn render_choices<W: Write>(
    out: &mut W,
    choices: &[&str],
    selected: usize,
    redraw: bool,
) -> io::Result<()> {
    if redraw {
        queue!(out, cursor::MoveUp(choices.len() as u16))?;
    }
    for (index, choice) in choices.iter().enumerate() {
        let marker = if index == selected { '>' } else { ' ' };
        // Raw mode needs explicit carriage returns
        queue!(
            out,
            Clear(ClearType::CurrentLine),
            Print(format!("{} {}\r\n", marker, choice))
        )?;
    }
    out.flush()
}
