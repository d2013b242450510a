use crate::adjust::{Lie, WindDirection};
use crate::repl::commands::{ArgKind, REPL_COMMANDS, find_command};
use rustyline::Helper;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use std::cell::RefCell;
use std::rc::Rc;

pub(crate) struct ReplHelperState {
    club_names: Vec<String>,
}

impl ReplHelperState {
    pub(crate) fn new(club_names: Vec<String>) -> Self {
        Self { club_names }
    }

    pub(crate) fn set_club_names(&mut self, club_names: Vec<String>) {
        self.club_names = club_names;
    }
}

pub(crate) struct ReplHelper {
    state: Rc<RefCell<ReplHelperState>>,
}

impl ReplHelper {
    pub(crate) fn new(state: Rc<RefCell<ReplHelperState>>) -> Self {
        Self { state }
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let club_names = self.state.borrow().club_names.clone();
        Ok(complete_line(line, pos, &club_names))
    }
}

pub(crate) fn complete_line(line: &str, pos: usize, club_names: &[String]) -> (usize, Vec<Pair>) {
    let prefix = &line[..pos];
    let start = prefix
        .rfind(char::is_whitespace)
        .map_or(0, |idx| idx + 1);
    let current = &prefix[start..];

    if start == 0 {
        let candidates = REPL_COMMANDS
            .iter()
            .flat_map(|command| command.aliases.iter().copied().chain([command.name]))
            .filter(|cmd| cmd.starts_with(current))
            .map(pair)
            .collect();
        return (0, candidates);
    }

    let mut words = prefix.split_whitespace();
    let Some(command) = words.next().and_then(find_command) else {
        return (pos, Vec::new());
    };
    let arg_position = prefix[..start].split_whitespace().count();
    let options: Vec<String> = match (command.completes, arg_position) {
        (ArgKind::ClubName, 1) => club_names.to_vec(),
        (ArgKind::Lie, 1) => Lie::ALL
            .iter()
            .map(|lie| lie.display_name().to_lowercase().replace(' ', "_"))
            .collect(),
        (ArgKind::WindDirection, 2) => WindDirection::ALL
            .iter()
            .map(|dir| dir.label().to_string())
            .collect(),
        _ => Vec::new(),
    };
    // Match on the bare name; a spaced club name goes back quoted.
    let lowered = current.trim_start_matches('"').to_lowercase();
    let candidates = options
        .iter()
        .filter(|option| option.to_lowercase().starts_with(&lowered))
        .map(|option| Pair {
            display: option.clone(),
            replacement: quote_if_spaced(option),
        })
        .collect();
    (start, candidates)
}

fn pair(text: &str) -> Pair {
    Pair {
        display: text.to_string(),
        replacement: text.to_string(),
    }
}

fn quote_if_spaced(name: &str) -> String {
    if name.contains(char::is_whitespace) {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}
