//! Line-oriented front end for [`SynthesisController`].
//!
//! Typed lines accumulate in the text field the way they would in a
//! textarea. A blank line is the Ctrl+Enter shortcut.

use std::future::Future;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::{Key, KeyPress, Outcome, SynthesisController};

const HELP: &str = "Type text, then an empty line (Ctrl+Enter) to synthesize. \
Commands: /say, /preset [NAME], /clear, /quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a line to the text field.
    Line(String),
    /// Empty line, delivered as Ctrl+Enter.
    Submit,
    /// Press the trigger button.
    Say,
    /// Select a preset, or clear the selection.
    Preset(Option<String>),
    Clear,
    Quit,
}

impl Command {
    /// Unknown `/` commands are treated as text.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Command::Submit;
        }
        if let Some(rest) = line.strip_prefix('/') {
            let (name, arg) = match rest.split_once(char::is_whitespace) {
                Some((name, arg)) => (name, arg.trim()),
                None => (rest, ""),
            };
            match name {
                "say" => return Command::Say,
                "preset" => return Command::Preset((!arg.is_empty()).then(|| arg.to_string())),
                "clear" => return Command::Clear,
                "quit" | "exit" => return Command::Quit,
                _ => {}
            }
        }
        Command::Line(line.to_string())
    }
}

pub struct Terminal {
    controller: SynthesisController,
    output: PathBuf,
}

impl Terminal {
    /// Played audio is written to `output`.
    pub fn new(controller: SynthesisController, output: impl Into<PathBuf>) -> Self {
        Self {
            controller,
            output: output.into(),
        }
    }

    pub fn controller(&self) -> &SynthesisController {
        &self.controller
    }

    /// Synthesize `text` once, as if typed and clicked.
    pub async fn say<W: Write>(&self, text: &str, out: &mut W) -> Result<Outcome> {
        self.controller.set_text(text);
        let outcome = self
            .drive(async { Some(self.controller.handle_synthesize_click().await) }, out)
            .await?;
        Ok(outcome.unwrap_or(Outcome::Busy))
    }

    /// Read commands from `input` until EOF or `/quit`.
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "{HELP}")?;
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let command = Command::parse(&line);
            debug!(?command, "terminal input");
            match command {
                Command::Line(text) => {
                    let mut value = self.controller.snapshot().text_input.value;
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(&text);
                    self.controller.set_text(&value);
                }
                Command::Submit => {
                    let key = KeyPress::new(Key::Enter).with_ctrl();
                    self.drive(self.controller.handle_keyboard_shortcut(&key), out)
                        .await?;
                }
                Command::Say => {
                    self.drive(async { Some(self.controller.handle_synthesize_click().await) }, out)
                        .await?;
                }
                Command::Preset(preset) => {
                    if self.controller.select_preset(preset.as_deref()) {
                        writeln!(out, "preset: {}", preset.as_deref().unwrap_or("(none)"))?;
                    } else if self.controller.snapshot().preset_selector.is_none() {
                        writeln!(out, "voice presets are not enabled")?;
                    } else {
                        writeln!(out, "unknown preset: {}", preset.unwrap_or_default())?;
                    }
                }
                Command::Clear => self.controller.set_text(""),
                Command::Quit => break,
            }
        }
        Ok(())
    }

    /// Run `action`, printing the busy label while the request is pending,
    /// then report how it ended.
    async fn drive<W, F>(&self, action: F, out: &mut W) -> Result<Option<Outcome>>
    where
        W: Write,
        F: Future<Output = Option<Outcome>>,
    {
        let mut changes = self.controller.subscribe();
        tokio::pin!(action);
        let outcome = loop {
            tokio::select! {
                biased;
                outcome = &mut action => break outcome,
                Ok(()) = changes.changed() => {
                    let busy = {
                        let w = changes.borrow_and_update();
                        (!w.loader.hidden).then(|| w.trigger.label.clone())
                    };
                    if let Some(label) = busy {
                        writeln!(out, "{label}")?;
                    }
                }
            }
        };
        if let Some(outcome) = &outcome {
            self.report(outcome, out).await?;
        }
        Ok(outcome)
    }

    async fn report<W: Write>(&self, outcome: &Outcome, out: &mut W) -> Result<()> {
        match outcome {
            Outcome::Success(url) => {
                let audio = self.controller.current_audio().unwrap_or_default();
                if let Err(e) = tokio::fs::write(&self.output, &audio).await {
                    warn!(error = %e, path = %self.output.display(), "failed writing audio");
                    writeln!(out, "error: could not write {}: {e}", self.output.display())?;
                    return Ok(());
                }
                writeln!(
                    out,
                    "audio ready: {url} ({} bytes written to {})",
                    audio.len(),
                    self.output.display()
                )?;
                self.controller.set_text("");
            }
            Outcome::Busy => writeln!(out, "still generating, please wait")?,
            _ => {
                let widgets = self.controller.snapshot();
                if !widgets.error_message.hidden {
                    writeln!(out, "error: {}", widgets.error_message.text)?;
                }
            }
        }
        Ok(())
    }
}
