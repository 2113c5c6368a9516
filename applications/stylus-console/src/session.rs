/// Console commands and their execution against a controller
use std::io::{BufRead, Write};
use stylus_playback::{PlayMode, PlaybackController, Player, TrackDescriptor};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  play                       load the current track
  next | prev                advance per the play mode
  pause | resume             control the player
  mode [repeat|loop|random]  set the play mode (no argument cycles)
  add <id> <uri> [title...]  append a track
  remove <index>             remove a track
  select <index>             jump to a track and load it
  clear                      empty the queue
  list                       show the queue
  status                     show player status
  help                       show this text
  quit                       exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play,
    Next,
    Previous,
    Pause,
    Resume,
    Mode(Option<PlayMode>),
    Add(TrackDescriptor),
    Remove(usize),
    Select(usize),
    Clear,
    List,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    InvalidArgument(String),
}

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Command {
    /// Parse one input line; blank lines and `#` comments yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "play" => Command::Play,
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "mode" => match args.first() {
                None => Command::Mode(None),
                Some(mode) => Command::Mode(Some(
                    mode.parse().map_err(ParseError::InvalidArgument)?,
                )),
            },
            "add" => {
                let [id, uri, title @ ..] = args.as_slice() else {
                    return Err(ParseError::Usage("add <id> <uri> [title...]"));
                };
                let title = if title.is_empty() {
                    (*id).to_string()
                } else {
                    title.join(" ")
                };
                Command::Add(TrackDescriptor::new(*id, *uri, title, "Unknown Artist"))
            }
            "remove" | "rm" => Command::Remove(parse_index(&args, "remove <index>")?),
            "select" | "goto" => Command::Select(parse_index(&args, "select <index>")?),
            "clear" => Command::Clear,
            "list" | "ls" => Command::List,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_index(args: &[&str], usage: &'static str) -> Result<usize, ParseError> {
    let [index] = args else {
        return Err(ParseError::Usage(usage));
    };
    index
        .parse()
        .map_err(|_| ParseError::InvalidArgument(format!("not an index: {}", index)))
}

/// Run one command, writing its outcome to `out`
///
/// Queue errors are reported to the user and do not end the session; only
/// write failures are returned.
pub fn execute<P: Player>(
    controller: &mut PlaybackController<P>,
    command: Command,
    out: &mut impl Write,
) -> std::io::Result<Flow> {
    let outcome = match command {
        Command::Play => controller.play().map(|t| format!("playing {}", describe(&t))),
        Command::Next => controller.next().map(|t| format!("next: {}", describe(&t))),
        Command::Previous => controller
            .previous()
            .map(|t| format!("previous: {}", describe(&t))),
        Command::Pause => {
            controller.pause();
            Ok("pause requested".to_string())
        }
        Command::Resume => {
            controller.resume();
            Ok("resume requested".to_string())
        }
        Command::Mode(Some(mode)) => {
            controller.set_play_mode(mode);
            Ok(format!("mode: {}", mode))
        }
        Command::Mode(None) => Ok(format!("mode: {}", controller.cycle_play_mode())),
        Command::Add(track) => {
            let line = format!("added {}", describe(&track));
            controller.add_to_queue(track);
            Ok(line)
        }
        Command::Remove(index) => controller
            .remove_from_queue(index)
            .map(|t| format!("removed {}", describe(&t))),
        Command::Select(index) => controller
            .skip_to_queue_index(index)
            .map(|t| format!("playing {}", describe(&t))),
        Command::Clear => {
            controller.clear_queue();
            Ok("queue cleared".to_string())
        }
        Command::List => Ok(render_queue(controller)),
        Command::Status => Ok(format!(
            "status: {:?}, mode: {}, tracks: {}",
            controller.get_status(),
            controller.get_play_mode(),
            controller.queue_len()
        )),
        Command::Help => Ok(HELP.to_string()),
        Command::Quit => return Ok(Flow::Quit),
    };

    match outcome {
        Ok(line) => writeln!(out, "{}", line)?,
        Err(err) => writeln!(out, "error: {}", err)?,
    }
    Ok(Flow::Continue)
}

/// Read commands from `input` until it ends or a `quit` command
///
/// Pending status changes are dispatched after every line and `out` is
/// flushed, so listener output interleaves with command output. Returns the
/// flow of the last command run.
pub fn run<P: Player>(
    controller: &mut PlaybackController<P>,
    input: impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<Flow> {
    for line in input.lines() {
        let line = line?;

        let flow = match Command::parse(&line) {
            Ok(Some(command)) => execute(controller, command, out)?,
            Ok(None) => Flow::Continue,
            Err(err) => {
                writeln!(out, "error: {}", err)?;
                Flow::Continue
            }
        };

        controller.dispatch_events();
        out.flush()?;

        if flow == Flow::Quit {
            tracing::debug!("Quit requested");
            return Ok(Flow::Quit);
        }
    }

    Ok(Flow::Continue)
}

fn describe(track: &TrackDescriptor) -> String {
    format!("[{}] {} - {}", track.id, track.artist, track.title)
}

fn render_queue<P: Player>(controller: &PlaybackController<P>) -> String {
    if controller.queue_len() == 0 {
        return "queue is empty".to_string();
    }

    let cursor = controller.get_queue_index();
    controller
        .get_queue()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = if Some(i) == cursor { '>' } else { ' ' };
            format!("{} {:>3}  {}", marker, i, describe(track))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
