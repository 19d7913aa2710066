//! Pointer-event scripts for the headless driver.
//!
//! A script is the stand-in for live platform glue: each line is one
//! inbound event, applied in order, with the redraw hints drained into the
//! offscreen buffer after every event, the same contract a windowing
//! backend would follow per pointer event.

use thiserror::Error;

use crate::draw::buffer::OffscreenBuffer;
use crate::draw::color;
use crate::draw::damage::Redraw;
use crate::input::events::ToolSelect;
use crate::input::state::{BoardState, Mode};
use crate::input::tool;

/// One line of an event script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PointerDown(i32, i32),
    PointerMove(i32, i32),
    PointerUp(i32, i32),
    Tool(ToolSelect),
    Resize(u32, u32),
}

/// Script parse failures, with the offending line number (1-based).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{word}'")]
    UnknownCommand { line: usize, word: String },

    #[error("line {line}: unknown tool '{name}'")]
    UnknownTool { line: usize, name: String },

    #[error("line {line}: '{command}' expects {expected}")]
    BadArguments {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },
}

/// Parses a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw_line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let mut words = content.split_whitespace();
        let word = words.next().unwrap_or("");
        let args: Vec<&str> = words.collect();

        let command = match word {
            "down" => {
                let (x, y) = parse_xy(line, "down", &args)?;
                Command::PointerDown(x, y)
            }
            "move" => {
                let (x, y) = parse_xy(line, "move", &args)?;
                Command::PointerMove(x, y)
            }
            "up" => {
                let (x, y) = parse_xy(line, "up", &args)?;
                Command::PointerUp(x, y)
            }
            "tool" => {
                let name = args.first().copied().ok_or(ScriptError::BadArguments {
                    line,
                    command: "tool",
                    expected: "a tool name",
                })?;
                Command::Tool(tool_by_name(name).ok_or_else(|| ScriptError::UnknownTool {
                    line,
                    name: name.to_string(),
                })?)
            }
            "page" => {
                let index: usize = args
                    .first()
                    .and_then(|arg| arg.parse().ok())
                    .ok_or(ScriptError::BadArguments {
                        line,
                        command: "page",
                        expected: "a page number",
                    })?;
                Command::Tool(ToolSelect::Page(index))
            }
            "resize" => {
                let (w, h) = parse_xy(line, "resize", &args)?;
                if w < 0 || h < 0 {
                    return Err(ScriptError::BadArguments {
                        line,
                        command: "resize",
                        expected: "two non-negative integers",
                    });
                }
                Command::Resize(w as u32, h as u32)
            }
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    word: other.to_string(),
                });
            }
        };
        commands.push(command);
    }

    Ok(commands)
}

/// Resolves a `tool` argument to a selection.
pub fn tool_by_name(name: &str) -> Option<ToolSelect> {
    if let Some(index) = color::name_to_index(name) {
        return Some(ToolSelect::Color(index));
    }
    match name {
        "eraser" => Some(ToolSelect::Eraser),
        "thin" => Some(ToolSelect::Width(tool::THIN_WIDTH)),
        "normal" => Some(ToolSelect::Width(tool::NORMAL_WIDTH)),
        "thick" => Some(ToolSelect::Width(tool::THICK_WIDTH)),
        "verythick" => Some(ToolSelect::Width(tool::VERY_THICK_WIDTH)),
        "clear" => Some(ToolSelect::Clear),
        "calibrate" => Some(ToolSelect::Calibrate),
        "quit" => Some(ToolSelect::Quit),
        _ => None,
    }
}

fn parse_xy(
    line: usize,
    command: &'static str,
    args: &[&str],
) -> Result<(i32, i32), ScriptError> {
    let bad = || ScriptError::BadArguments {
        line,
        command,
        expected: "two integers",
    };
    if args.len() != 2 {
        return Err(bad());
    }
    let x = args[0].parse().map_err(|_| bad())?;
    let y = args[1].parse().map_err(|_| bad())?;
    Ok((x, y))
}

/// Replays parsed commands, draining redraw work after each event.
///
/// Stops early when the board requests exit (the `quit` tool).
pub fn run(
    board: &mut BoardState,
    buffer: &mut OffscreenBuffer,
    commands: &[Command],
) -> Result<(), cairo::Error> {
    for command in commands {
        match *command {
            Command::PointerDown(x, y) => board.on_pointer_down(x, y),
            Command::PointerMove(x, y) => board.on_pointer_move(x, y),
            Command::PointerUp(x, y) => board.on_pointer_up(x, y),
            Command::Tool(selection) => board.on_tool_select(selection),
            Command::Resize(w, h) => board.on_resize(w, h),
        }
        sync(board, buffer)?;
        if board.should_exit {
            break;
        }
    }
    Ok(())
}

/// Applies one batch of redraw hints to the offscreen buffer.
pub fn sync(board: &mut BoardState, buffer: &mut OffscreenBuffer) -> Result<(), cairo::Error> {
    match board.take_redraw() {
        Some(Redraw::Full) => {
            if board.surface_width > 0 && board.surface_height > 0 {
                buffer.ensure_size(board.surface_width, board.surface_height)?;
            }
            if board.mode == Mode::Calibrating {
                buffer.repaint_calibration(board.calibration.target())?;
            } else {
                buffer.repaint(board.pages.active(), board.current_stroke())?;
            }
        }
        Some(Redraw::Segments(segments)) => {
            for segment in segments {
                buffer.append_segment(segment)?;
            }
        }
        None => {}
    }
    Ok(())
}
