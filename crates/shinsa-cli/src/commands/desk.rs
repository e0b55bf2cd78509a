//! `shinsa desk`: a line-oriented review session.
//!
//! Reads one command per line, applies it to a [`ReviewDesk`] and prints the
//! outcome. Refused actions and failed imports are printed as notices; the
//! session only ends on `quit` or end of input.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use shinsa_core::availability::ActionAvailability;
use shinsa_core::entities::Score;
use shinsa_core::responses::DeskView;
use shinsa_store::{Clock, KvStore, ReviewDesk};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeskArgs;
use crate::commands::export::write_export;
use crate::commands::shared::read_papers;
use crate::context::AppContext;

const HELP: &str = "\
commands:
  load <file>       import a paper CSV
  show              show the current paper
  next | prev       move to the next / previous paper
  goto <n>          jump to paper n (1-based)
  score <1-5>       select a score
  comment <text>    replace the comment
  preset <n>        append preset comment n
  presets           list preset comments
  save              save score and comment
  finalize          lock the saved review
  unfinalize        unlock a finalized review
  list [query]      paper states, optionally filtered
  stats             score distribution and progress
  reviewer <name>   set the reviewer name
  export [dir]      write review_<reviewer>.csv
  reset             delete every stored review (asks for confirmation)
  help              this text
  quit              leave the desk";

/// A parsed desk command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeskCommand {
    Load(PathBuf),
    Show,
    Next,
    Prev,
    Goto(usize),
    Score(Score),
    Comment(String),
    Preset(usize),
    Presets,
    Save,
    Finalize,
    Unfinalize,
    List(Option<String>),
    Stats,
    Reviewer(String),
    Export(Option<PathBuf>),
    Reset,
    Help,
    Quit,
}

impl DeskCommand {
    /// Parse one input line. The error is a message for the reviewer.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word.to_ascii_lowercase().as_str() {
            "load" => Self::Load(PathBuf::from(required(rest, "load <file>")?)),
            "show" => Self::Show,
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "goto" | "g" => Self::Goto(position(required(rest, "goto <n>")?)?),
            "score" | "s" => Self::Score(
                required(rest, "score <1-5>")?
                    .parse()
                    .map_err(|error: shinsa_core::errors::CoreError| error.to_string())?,
            ),
            "comment" | "c" => Self::Comment(rest.to_string()),
            "preset" => Self::Preset(position(required(rest, "preset <n>")?)?),
            "presets" => Self::Presets,
            "save" => Self::Save,
            "finalize" => Self::Finalize,
            "unfinalize" => Self::Unfinalize,
            "list" | "ls" => Self::List((!rest.is_empty()).then(|| rest.to_string())),
            "stats" => Self::Stats,
            "reviewer" => Self::Reviewer(required(rest, "reviewer <name>")?.to_string()),
            "export" => Self::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("unknown command '{other}' (try 'help')")),
        };
        Ok(command)
    }
}

fn required<'a>(rest: &'a str, usage: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        return Err(format!("usage: {usage}"));
    }
    Ok(rest)
}

/// Parse a 1-based position into a zero-based index.
fn position(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| format!("'{value}' is not a position (1, 2, ...)"))
}

/// Handle `shinsa desk`.
pub async fn handle(
    args: &DeskArgs,
    ctx: &AppContext,
    _flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut desk = ReviewDesk::open(ctx.open_service());
    desk.set_presets(ctx.presets.load_or_empty(&ctx.config.presets.source).await);

    let mut out = io::stdout().lock();
    if let Some(path) = &args.papers {
        load(&mut desk, path, &mut out)?;
    }
    writeln!(
        out,
        "reviewer: {}  (type 'help' for commands)",
        display_reviewer(desk.session().reviewer())
    )?;

    let stdin = io::stdin();
    run(&mut desk, &ctx.config.general.export_dir, stdin.lock(), &mut out)
}

/// Drive the desk from `input` until `quit` or end of input.
pub fn run<S: KvStore, C: Clock>(
    desk: &mut ReviewDesk<S, C>,
    export_dir: &Path,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut last_actions: Option<ActionAvailability> = None;
    let mut confirming_reset = false;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if confirming_reset {
            confirming_reset = false;
            if line == "yes" {
                match desk.reset() {
                    Ok(removed) => writeln!(out, "removed {removed} review(s)")?,
                    Err(error) => notice(out, &error)?,
                }
            } else {
                writeln!(out, "reset cancelled")?;
            }
        } else if !line.is_empty() {
            match DeskCommand::parse(line) {
                Ok(DeskCommand::Quit) => break,
                Ok(DeskCommand::Reset) => {
                    confirming_reset = true;
                    writeln!(
                        out,
                        "delete every stored review of every reviewer? type 'yes' to confirm"
                    )?;
                    continue;
                }
                Ok(command) => execute(desk, command, export_dir, out)?,
                Err(message) => writeln!(out, "! {message}")?,
            }
        }

        let actions = desk.availability();
        if last_actions.as_ref() != Some(&actions) {
            print_actions(&actions, out)?;
            last_actions = Some(actions);
        }
    }
    Ok(())
}

fn execute<S: KvStore, C: Clock>(
    desk: &mut ReviewDesk<S, C>,
    command: DeskCommand,
    export_dir: &Path,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        DeskCommand::Load(path) => load(desk, &path, out)?,
        DeskCommand::Show => print_view(&desk.view(), out)?,
        DeskCommand::Next => moved(desk.next(), desk, "already at the last paper", out)?,
        DeskCommand::Prev => moved(desk.prev(), desk, "already at the first paper", out)?,
        DeskCommand::Goto(index) => {
            moved(desk.go_to(index), desk, "no paper at that position", out)?;
        }
        DeskCommand::Score(score) => {
            if desk.select_score(score) {
                writeln!(out, "score: {score}")?;
            } else {
                writeln!(out, "! {}", locked_or_empty(desk))?;
            }
        }
        DeskCommand::Comment(text) => {
            if !desk.set_comment(&text) {
                writeln!(out, "! {}", locked_or_empty(desk))?;
            }
        }
        DeskCommand::Preset(index) => {
            if desk.insert_preset(index) {
                writeln!(out, "comment: {}", desk.session().pending_comment())?;
            } else if index >= desk.presets().len() {
                writeln!(out, "! no preset {}", index + 1)?;
            } else {
                writeln!(out, "! {}", locked_or_empty(desk))?;
            }
        }
        DeskCommand::Presets => {
            if desk.presets().is_empty() {
                writeln!(out, "(no presets)")?;
            }
            for (n, preset) in desk.presets().iter().enumerate() {
                writeln!(out, "{:>3}. {}", n + 1, preset.text)?;
            }
        }
        DeskCommand::Save => match desk.save() {
            Ok(review) => writeln!(out, "saved {}", review.paper_id)?,
            Err(error) => notice(out, &error)?,
        },
        DeskCommand::Finalize => match desk.finalize() {
            Ok(review) => writeln!(out, "finalized {}", review.paper_id)?,
            Err(error) => notice(out, &error)?,
        },
        DeskCommand::Unfinalize => match desk.unfinalize() {
            Ok(review) => writeln!(out, "unfinalized {}", review.paper_id)?,
            Err(error) => notice(out, &error)?,
        },
        DeskCommand::List(query) => {
            let rows = desk.statuses(query.as_deref());
            if rows.is_empty() {
                writeln!(out, "(no papers)")?;
            }
            let current = desk.session().current_index();
            for row in rows {
                let marker = if row.index == current { '*' } else { ' ' };
                writeln!(
                    out,
                    "{marker}{:>4}  {:<10}  {}  {}",
                    row.index + 1,
                    row.state.as_str(),
                    row.id,
                    row.title
                )?;
            }
        }
        DeskCommand::Stats => {
            let stats = desk.stats();
            let distribution = stats
                .score_counts
                .iter()
                .enumerate()
                .map(|(bucket, count)| format!("{}:{count}", bucket + 1))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(out, "scores      {distribution}")?;
            writeln!(
                out,
                "progress    not started {}  in progress {}  finalized {}",
                stats.not_started, stats.in_progress, stats.finalized
            )?;
        }
        DeskCommand::Reviewer(name) => match desk.set_reviewer(&name) {
            Ok(()) => {
                let reviewer = display_reviewer(desk.session().reviewer());
                writeln!(out, "reviewer: {reviewer}")?;
            }
            Err(error) => notice(out, &error)?,
        },
        DeskCommand::Export(dir) => match desk.export() {
            Ok(file) => {
                let path = write_export(&file, dir.as_deref().unwrap_or(export_dir))?;
                writeln!(out, "exported {} review(s) to {}", file.rows, path.display())?;
            }
            Err(error) => notice(out, &error)?,
        },
        DeskCommand::Help => writeln!(out, "{HELP}")?,
        DeskCommand::Reset | DeskCommand::Quit => {}
    }
    Ok(())
}

fn load<S: KvStore, C: Clock>(
    desk: &mut ReviewDesk<S, C>,
    path: &Path,
    out: &mut impl Write,
) -> io::Result<()> {
    match read_papers(path) {
        Ok(papers) => {
            writeln!(out, "loaded {} paper(s) from {}", papers.len(), path.display())?;
            desk.load_papers(papers);
            print_view(&desk.view(), out)
        }
        Err(error) => {
            desk.clear_papers();
            writeln!(out, "! {error:#}")
        }
    }
}

fn moved<S: KvStore, C: Clock>(
    moved: bool,
    desk: &ReviewDesk<S, C>,
    otherwise: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    if moved {
        print_view(&desk.view(), out)
    } else {
        writeln!(out, "! {otherwise}")
    }
}

fn locked_or_empty<S: KvStore, C: Clock>(desk: &ReviewDesk<S, C>) -> &'static str {
    if desk.session().has_papers() {
        "this paper is finalized; unfinalize it to edit"
    } else {
        "no papers are loaded"
    }
}

fn notice(out: &mut impl Write, error: &impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "! {error}")
}

fn display_reviewer(reviewer: &str) -> &str {
    if reviewer.is_empty() { "(not set)" } else { reviewer }
}

fn print_view(view: &DeskView, out: &mut impl Write) -> io::Result<()> {
    let Some(paper) = &view.paper else {
        return writeln!(out, "(no papers loaded)");
    };
    writeln!(
        out,
        "[{}/{}] {}  ({})",
        view.position, view.total, paper.id, view.state
    )?;
    writeln!(out, "title:    {}", paper.title)?;
    if !paper.section.is_empty() {
        writeln!(out, "section:  {}", paper.section)?;
    }
    writeln!(out, "abstract: {}", paper.abstract_text)?;
    let score = view
        .pending_score
        .map_or_else(|| String::from("-"), |score| score.to_string());
    writeln!(out, "score:    {score}")?;
    writeln!(out, "comment:  {}", view.pending_comment)
}

fn print_actions(actions: &ActionAvailability, out: &mut impl Write) -> io::Result<()> {
    let flag = |enabled: bool, name: &str| {
        if enabled {
            name.to_string()
        } else {
            format!("({name})")
        }
    };
    write!(
        out,
        "actions: {} {} {}",
        flag(actions.can_save, "save"),
        flag(actions.can_finalize, "finalize"),
        flag(actions.can_unfinalize, "unfinalize"),
    )?;
    let hints: Vec<&str> = actions.hints.iter().map(|hint| hint.message()).collect();
    if hints.is_empty() {
        writeln!(out)
    } else {
        writeln!(out, "  - {}", hints.join("; "))
    }
}
