//! Command-line interface: run the scrub engine against a file
//!
//! Supports:
//! - `inspect`: show the literal at a position as JSON
//! - `nudge`: step the literal up or down N times
//! - `drag`: replay pointer x positions as one drag
//! - `keys`: replay keystrokes through the keymap
//!
//! Lines and columns are 1-indexed on the command line.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::config::ScrubConfig;
use crate::keymap::{load_default_keymap, parse_key_string, Command, Keymap};
use crate::messages::ScrubMsg;
use crate::model::{Document, DocumentId, GroupTagAllocator, Position};
use crate::scrub::{detect, LiteralKind, NudgeDirection};
use crate::update::{update, Scrubber};

/// Scrub numeric and color literals in a file
#[derive(Parser, Debug)]
#[command(name = "scrubber", version, about = "Scrub numeric and color literals in place")]
pub struct CliArgs {
    /// Config file (defaults to ~/.config/scrubber/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print the literal at a position as JSON
    Inspect(Target),
    /// Nudge the literal at a position
    Nudge {
        #[command(flatten)]
        target: Target,
        /// Decrement instead of increment
        #[arg(long)]
        down: bool,
        /// Number of nudges
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Drag the literal; each X is a pointer position relative to where the drag began
    Drag {
        #[command(flatten)]
        target: Target,
        /// Pointer x positions in pixels
        #[arg(value_name = "X", allow_negative_numbers = true, required = true)]
        positions: Vec<f64>,
    },
    /// Replay keystrokes (e.g. "cmd+alt+up") through the keymap
    Keys {
        #[command(flatten)]
        target: Target,
        /// Keystrokes to replay in order
        #[arg(value_name = "KEY", required = true)]
        keys: Vec<String>,
    },
}

/// The file and position a command acts on
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// File to edit
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Line number (1-indexed)
    #[arg(long, value_name = "N")]
    pub line: usize,

    /// Column number (1-indexed)
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub column: usize,

    /// Print the result without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

impl Target {
    /// Convert from 1-indexed (user input) to 0-indexed (internal)
    pub fn position(&self) -> Position {
        Position::new(self.line.saturating_sub(1), self.column.saturating_sub(1))
    }
}

/// JSON shape printed by `inspect`
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub line: usize,
    pub kind: LiteralKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl CliArgs {
    /// Config from `--config`, or the user config
    pub fn load_config(&self) -> ScrubConfig {
        match &self.config {
            Some(path) => ScrubConfig::load_from(path),
            None => ScrubConfig::load(),
        }
    }
}

/// Run a parsed command and return what should be printed
pub fn run(args: CliArgs) -> Result<String> {
    run_with_keymap(args, || Keymap::with_bindings(load_default_keymap()))
}

/// [`run`] with the keymap used by `keys` supplied by the caller
pub fn run_with_keymap<F>(args: CliArgs, keymap: F) -> Result<String>
where
    F: FnOnce() -> Keymap,
{
    let config = args.load_config();

    match args.command {
        CliCommand::Inspect(target) => inspect(&target),
        CliCommand::Nudge {
            target,
            down,
            times,
        } => {
            let direction = if down {
                NudgeDirection::Down
            } else {
                NudgeDirection::Up
            };
            edit(&target, config, |doc, scrubber| {
                for _ in 0..times {
                    let msg = ScrubMsg::Nudge {
                        cursor: doc.cursor(),
                        direction,
                    };
                    update(scrubber, doc, msg);
                }
                Ok(())
            })
        }
        CliCommand::Drag { target, positions } => {
            let position = target.position();
            edit(&target, config, |doc, scrubber| {
                let modifiers = scrubber.config.drag_modifiers();
                update(
                    scrubber,
                    doc,
                    ScrubMsg::PointerDown {
                        position,
                        x: 0.0,
                        modifiers,
                    },
                );
                if !scrubber.is_dragging() {
                    bail!("No literal at line {}, column {}", target.line, target.column);
                }
                for x in positions {
                    update(scrubber, doc, ScrubMsg::PointerMove { x });
                }
                update(scrubber, doc, ScrubMsg::PointerUp);
                Ok(())
            })
        }
        CliCommand::Keys { target, keys } => {
            let keymap = keymap();
            edit(&target, config, |doc, scrubber| replay_keys(&keymap, doc, scrubber, &keys))
        }
    }
}

fn inspect(target: &Target) -> Result<String> {
    let doc = open(&target.file)?;
    let position = target.position();
    let line = doc
        .get_line_cow(position.line)
        .with_context(|| format!("{} has no line {}", target.file.display(), target.line))?;

    // A match that does not decode is not a literal.
    let mut tags = GroupTagAllocator::new();
    let Some((span, state)) = detect(&line, position.column, &mut tags) else {
        bail!("No literal at line {}, column {}", target.line, target.column);
    };

    let report = InspectReport {
        line: target.line,
        kind: state.kind(),
        start: span.start + 1,
        end: span.end + 1,
        text: span.text,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize report")
}

/// Replay keystrokes; nudges go through the scrub controller, undo/redo to the document
pub fn replay_keys(
    keymap: &Keymap,
    doc: &mut Document,
    scrubber: &mut Scrubber,
    keys: &[String],
) -> Result<()> {
    for key in keys {
        let stroke = parse_key_string(key).with_context(|| format!("Bad keystroke {:?}", key))?;
        let Some(command) = keymap.lookup(&stroke) else {
            tracing::warn!("No binding for {}", stroke);
            continue;
        };
        tracing::debug!(%stroke, %command, "replaying key");
        match command {
            Command::Undo => {
                doc.undo();
            }
            Command::Redo => {
                doc.redo();
            }
            _ => {
                if let Some(msg) = command.to_msg(doc.cursor()) {
                    update(scrubber, doc, msg);
                }
            }
        }
    }
    Ok(())
}

fn open(path: &Path) -> Result<Document> {
    Document::from_file(DocumentId(1), path.to_path_buf())
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Open the target, run `f`, write back unless dry-run, and return the edited line
fn edit<F>(target: &Target, config: ScrubConfig, f: F) -> Result<String>
where
    F: FnOnce(&mut Document, &mut Scrubber) -> Result<()>,
{
    let mut doc = open(&target.file)?;
    let position = target.position();
    if position.line >= doc.line_count() {
        bail!("{} has no line {}", target.file.display(), target.line);
    }
    doc.set_cursor(position);

    let mut scrubber = Scrubber::new(config);
    f(&mut doc, &mut scrubber)?;

    if doc.is_modified && !target.dry_run {
        doc.save().map_err(anyhow::Error::msg)?;
    }

    Ok(doc
        .get_line_cow(position.line)
        .map(|line| line.into_owned())
        .unwrap_or_default())
}
