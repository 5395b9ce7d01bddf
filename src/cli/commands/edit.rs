use crate::cli::commands::show;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::Field;
use crate::storage::JsonFileStore;
use crate::ui::messages;
use crate::utils::clock::SystemClock;
use crate::utils::time::format_total_short;
use std::io::{self, BufRead, Write};

/// Interactive editing session. This is where undo/redo live: history has
/// session lifetime and is never persisted, so the one-shot subcommands
/// cannot offer it.
///
/// `type` updates a field without recording history; consecutive `type`
/// lines form one burst that becomes a single undo step as soon as any
/// other command (or `commit`) closes it. This mirrors the keystroke
/// coalescing of a live form, with the command boundary standing in for
/// the blur/debounce timer.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = super::open_session(cfg)?;

    messages::info("Interactive session. Type 'help' for commands, 'quit' to leave.");
    print!("{}", show::render(session.pairs(), session.last_recorded_date()));
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            prompt()?;
            continue;
        }

        // Any command other than `type` ends a pending typed burst first.
        if words[0] != "type" {
            session.commit_edit();
        }

        match run_line(&mut session, &words) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => break,
            Err(e) => messages::error(e),
        }
        prompt()?;
    }

    // EOF or quit: don't lose an in-flight burst.
    session.commit_edit();
    Ok(())
}

enum Outcome {
    Continue,
    Quit,
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn parse_index(word: &str) -> AppResult<usize> {
    let n: usize = word
        .parse()
        .map_err(|_| AppError::Other(format!("not a pair number: {}", word)))?;
    n.checked_sub(1).ok_or(AppError::InvalidPair(n))
}

/// "-" clears a field; anything else is stored as typed (the calculator
/// skips values that do not parse, the field itself keeps them).
fn parse_value(word: &str) -> &str {
    if word == "-" { "" } else { word }
}

fn run_line(
    session: &mut Session<JsonFileStore, SystemClock>,
    words: &[&str],
) -> AppResult<Outcome> {
    match words {
        ["quit"] | ["exit"] | ["q"] => return Ok(Outcome::Quit),

        ["help"] | ["h"] => print_help(),

        ["list"] | ["l"] => {
            print!("{}", show::render(session.pairs(), session.last_recorded_date()));
        }

        ["total"] | ["t"] => {
            println!("{} h", format_total_short(session.total_hours()));
        }

        ["add"] | ["a"] => {
            session.add_pair()?;
            messages::success(format!("Added pair {}", session.pairs().len()));
        }

        ["del"] | ["d"] => {
            if session.delete_latest()? {
                messages::success("Deleted the latest entered time");
            } else {
                messages::info("Nothing to delete");
            }
        }

        ["del", index] => {
            let idx = parse_index(index)?;
            session.delete_pair(idx)?;
            messages::success(format!("Deleted pair {}", index));
        }

        ["set", index, field, value] => {
            let idx = parse_index(index)?;
            let field = Field::from_code(field)?;
            session.set_field(idx, field, parse_value(value))?;
        }

        ["type", index, field, value] => {
            let idx = parse_index(index)?;
            let field = Field::from_code(field)?;
            session.typed_edit(idx, field, parse_value(value))?;
        }

        ["commit"] => {
            // burst already closed above; nothing more to do
        }

        ["now"] | ["c"] => {
            let (idx, field, time) = session.set_now_first_empty()?;
            messages::success(format!("Set {} of pair {} to {}", field, idx + 1, time));
        }

        ["now", index, field] => {
            let idx = parse_index(index)?;
            let field = Field::from_code(field)?;
            let time = session.set_now(idx, field)?;
            messages::success(format!("Set {} of pair {} to {}", field, idx + 1, time));
        }

        ["undo"] | ["u"] => {
            if session.undo()? {
                print!("{}", show::render(session.pairs(), session.last_recorded_date()));
            } else {
                messages::info("Nothing to undo");
            }
        }

        ["redo"] | ["r"] => {
            if session.redo()? {
                print!("{}", show::render(session.pairs(), session.last_recorded_date()));
            } else {
                messages::info("Nothing to redo");
            }
        }

        ["reset"] => {
            if session.reset_all()? {
                messages::success("Cleared all pairs");
            } else {
                messages::info("Already empty");
            }
        }

        _ => {
            return Err(AppError::Other(format!(
                "unknown command: {} (try 'help')",
                words.join(" ")
            )));
        }
    }

    Ok(Outcome::Continue)
}

fn print_help() {
    println!("Commands:");
    println!("  list                    show pairs and total");
    println!("  total                   show the total only");
    println!("  add                     append an empty pair");
    println!("  del [N]                 delete pair N, or the latest entered time");
    println!("  set N start|end HH:MM   set a field ('-' clears it)");
    println!("  type N start|end VALUE  edit without history; consecutive lines");
    println!("                          coalesce into one undo step");
    println!("  commit                  close a 'type' burst explicitly");
    println!("  now [N start|end]       record the current time");
    println!("  undo / redo             step through the session history");
    println!("  reset                   clear everything");
    println!("  quit                    leave the session");
}
