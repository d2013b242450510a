use crate::bag::{self, ClubBag};
use crate::config::DistanceSource;
use crate::config::parse::{
    check_distance, check_elevation, check_wind_speed, parse_lie, parse_number, parse_wind_angle,
};
use crate::repl::commands::{CommandId, build_repl_help, find_command};
use crate::repl::helper::{ReplHelper, ReplHelperState};
use crate::repl::parse::{format_parse_error, parse_items};
use crate::shot::{format_yards, plan_shot, render_carry_table};
use anyhow::{Context, Result, anyhow};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tracing::{debug, info};

mod commands;
mod helper;
mod parse;
mod state;

pub use state::ReplState;

#[derive(Debug, PartialEq, Eq)]
pub enum ReplFlow {
    Continue,
    Exit,
}

/// Run the interactive calculator until the user exits.
///
/// # Errors
/// Returns an error if the terminal cannot be read or written.
pub fn run_repl(state: &mut ReplState) -> Result<()> {
    let help_text = build_repl_help();
    println!("Yardage calculator. Type help for commands, Ctrl-C or Ctrl-D to quit.");
    let mut rl = Editor::<ReplHelper, DefaultHistory>::new().context("init repl")?;
    let helper_state = Rc::new(RefCell::new(ReplHelperState::new(state.bag.names())));
    rl.set_helper(Some(ReplHelper::new(Rc::clone(&helper_state))));
    let mut stdout = std::io::stdout();
    loop {
        match rl.readline("yardage> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                rl.add_history_entry(input)?;
                let flow = handle_line(input, state, &mut stdout, &help_text)?;
                helper_state.borrow_mut().set_club_names(state.bag.names());
                if flow == ReplFlow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("read repl input"),
        }
    }
    Ok(())
}

/// Apply one REPL line to `state`, writing user-facing output to `out`.
///
/// Bad input is reported on `out` and the session carries on.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub fn handle_line(
    line: &str,
    state: &mut ReplState,
    out: &mut impl Write,
    help_text: &str,
) -> Result<ReplFlow> {
    let input = line.trim();
    if input.is_empty() {
        return Ok(ReplFlow::Continue);
    }
    let items = match parse_items(input) {
        Ok(items) => items,
        Err(err) => {
            writeln!(out, "{}", format_parse_error(input, err.index))?;
            return Ok(ReplFlow::Continue);
        }
    };
    let Some((command_token, args)) = items.split_first() else {
        return Ok(ReplFlow::Continue);
    };
    let Some(command) = find_command(command_token) else {
        writeln!(out, "Unknown command: {command_token}")?;
        writeln!(out, "{help_text}")?;
        return Ok(ReplFlow::Continue);
    };
    debug!(command = command.name, ?args, "repl command");

    let outcome: Result<()> = match command.id {
        CommandId::Help => writeln!(out, "{help_text}").map_err(anyhow::Error::from),
        CommandId::Clubs => print_clubs(&state.bag, out),
        CommandId::Add => handle_add(state, args, out),
        CommandId::Remove => handle_remove(state, args, out),
        CommandId::Rename => handle_rename(state, args, out),
        CommandId::Set => handle_set(state, args, out),
        CommandId::Save => handle_save(state, out),
        CommandId::Load => handle_load(state, out),
        CommandId::Reset => {
            state.bag = ClubBag::default();
            writeln!(out, "Bag reset to {} default clubs.", state.bag.len()).map_err(Into::into)
        }
        CommandId::Club => handle_club(state, args, out),
        CommandId::Distance => handle_distance(state, args, out),
        CommandId::Wind => handle_wind(state, args, out),
        CommandId::Elevation => handle_elevation(state, args, out),
        CommandId::Lie => handle_lie(state, args, out),
        CommandId::Conditions => print_conditions(state, out),
        CommandId::Calc => handle_calc(state, out),
        CommandId::Exit | CommandId::Quit => return Ok(ReplFlow::Exit),
    };
    if let Err(err) = outcome {
        if err.is::<std::io::Error>() {
            return Err(err);
        }
        writeln!(out, "Error: {err:#}")?;
        if !command.usage.is_empty() {
            writeln!(out, "Usage: {} {}", command.name, command.usage)?;
        }
    }
    Ok(ReplFlow::Continue)
}

fn expect_args<'a, const N: usize>(args: &'a [String]) -> Result<[&'a str; N]> {
    if args.len() != N {
        return Err(anyhow!("expected {N} argument(s), got {}", args.len()));
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// REPL indexes are 1-based.
fn parse_index(value: &str, bag: &ClubBag) -> Result<usize> {
    let number: usize = value
        .trim()
        .parse()
        .map_err(|_| anyhow!("club number must be a whole number, got {value:?}"))?;
    if number == 0 || number > bag.len() {
        return Err(anyhow!(
            "club number must be between 1 and {}, got {number}",
            bag.len()
        ));
    }
    Ok(number - 1)
}

fn print_clubs(bag: &ClubBag, out: &mut impl Write) -> Result<()> {
    if bag.is_empty() {
        writeln!(out, "Bag is empty.")?;
        return Ok(());
    }
    let name_width = bag.iter().map(|club| club.name.len()).max().unwrap_or(0);
    for (index, club) in bag.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {:<name_width$} {:>6}",
            index + 1,
            club.name,
            format_yards(club.distance)
        )?;
    }
    Ok(())
}

fn handle_add(state: &mut ReplState, args: &[String], out: &mut impl Write) -> Result<()> {
    let [name, yards] = expect_args::<2>(args)?;
    let distance = parse_number(yards, "distance")?;
    let existed = state.bag.find(name).is_some();
    let index = state.bag.add_club(name, distance)?;
    let club = &state.bag.clubs()[index];
    if existed {
        writeln!(out, "Updated {} to {}y.", club.name, format_yards(club.distance))?;
    } else {
        writeln!(
            out,
            "Added {}. {} ({}y).",
            index + 1,
            club.name,
            format_yards(club.distance)
        )?;
    }
    Ok(())
}

fn handle_remove(state: &mut ReplState, args: &[String], out: &mut impl Write) -> Result<()> {
    let [number] = expect_args::<1>(args)?;
    let index = parse_index(number, &state.bag)?;
    let removed = state.bag.remove_club(index)?;
    writeln!(out, "Removed {}.", removed.name)?;
    Ok(())
}

fn handle_rename(state: &mut ReplState, args: &[String], out: &mut impl Write) -> Result<()> {
    let [number, name] = expect_args::<2>(args)?;
    let index = parse_index(number, &state.bag)?;
    let old_name = state.bag.clubs()[index].name.clone();
    state.bag.rename_club(index, name)?;
    let new_name = state.bag.clubs()[index].name.clone();
    state.follow_rename(&old_name, &new_name);
    writeln!(out, "Renamed {old_name} to {new_name}.")?;
    Ok(())
}

fn handle_set(state: &mut ReplState, args: &[String], out: &mut impl Write) -> Result<()> {
    let [number, yards] = expect_args::<2>(args)?;
    let index = parse_index(number, &state.bag)?;
    let distance = parse_number(yards, "distance")?;
    state.bag.set_distance(index, distance)?;
    let club = &state.bag.clubs()[index];
    writeln!(out, "{} now carries {}y.", club.name, format_yards(club.distance))?;
    Ok(())
}

fn handle_save(state: &ReplState, out: &mut impl Write) -> Result<()> {
    bag::save(&state.bag_json, &state.bag)?;
    writeln!(
        out,
        "Saved {} clubs to {}.",
        state.bag.len(),
        state.bag_json.display()
    )?;
    Ok(())
}

fn handle_load(state: &mut ReplState, out: &mut impl Write) -> Result<()> {
    match bag::read_bag(&state.bag_json)? {
        Some(loaded) if !loaded.is_empty() => {
            state.bag = loaded;
            info!(path = %state.bag_json.display(), "bag reloaded");
            writeln!(
                out,
                "Loaded {} clubs from {}.",
                state.bag.len(),
                state.bag_json.display()
            )?;
        }
        Some(_) => writeln!(out, "Saved bag is empty; keeping the current bag.")?,
        None => writeln!(
            out,
            "No saved bag at {}; keeping the current bag.",
            state.bag_json.display()
        )?,
    }
    Ok(())
}

fn handle_club(state: &mut ReplState, args: &[String], out: &mut impl Write) -> Result<()> {
    let [name] = expect_args::<1>(args)?;
    let club = state
        .bag
        .find(name)
        .cloned()
        .ok_or_else(|| anyhow!("no club named {name} in the bag"))?;
    writeln!(
        out,
        "Playing from {} ({}y).",
        club.name,
        format_yards(club.distance)
    )?;
    state.source = Some(DistanceSource::Club(club.name));
    Ok(())
}

fn handle_distance(state: &mut ReplState, args: &[String], out: &mut impl Write) -> Result<()> {
    let [yards] = expect_args::<1>(args)?;
    let distance = check_distance(parse_number(yards, "distance")?)?;
    state.source = Some(DistanceSource::Yards(distance));
    writeln!(out, "Playing from {}y.", format_yards(distance))?;
    Ok(())
}

fn handle_wind(state: &mut ReplState, args: &[String], out: &mut impl Write) -> Result<()> {
    let (speed, angle) = match args {
        [speed] => (speed, None),
        [speed, direction] => (speed, Some(parse_wind_angle(direction)?)),
        _ => return Err(anyhow!("expected 1 or 2 argument(s), got {}", args.len())),
    };
    state.conditions.wind_speed = check_wind_speed(parse_number(speed, "wind speed")?)?;
    if let Some(angle) = angle {
        state.conditions.wind_angle_deg = angle;
    }
    writeln!(
        out,
        "Wind {} mph from {}°.",
        state.conditions.wind_speed, state.conditions.wind_angle_deg
    )?;
    Ok(())
}

fn handle_elevation(state: &mut ReplState, args: &[String], out: &mut impl Write) -> Result<()> {
    let [feet] = expect_args::<1>(args)?;
    state.conditions.elevation_ft = check_elevation(parse_number(feet, "elevation")?)?;
    writeln!(out, "Elevation change {} ft.", state.conditions.elevation_ft)?;
    Ok(())
}

fn handle_lie(state: &mut ReplState, args: &[String], out: &mut impl Write) -> Result<()> {
    let name = args.join(" ");
    if name.trim().is_empty() {
        return Err(anyhow!("expected 1 argument(s), got 0"));
    }
    state.conditions.lie = parse_lie(&name)?;
    writeln!(
        out,
        "Lie {} ({:.0}% penalty).",
        state.conditions.lie,
        state.conditions.lie.penalty() * 100.0
    )?;
    Ok(())
}

fn print_conditions(state: &ReplState, out: &mut impl Write) -> Result<()> {
    let source = match &state.source {
        Some(DistanceSource::Club(name)) => match state.bag.find(name) {
            Some(club) => format!("{} ({}y)", club.name, format_yards(club.distance)),
            None => format!("{name} (not in bag)"),
        },
        Some(DistanceSource::Yards(yards)) => format!("{}y", format_yards(*yards)),
        None => "not set".to_string(),
    };
    let conditions = &state.conditions;
    writeln!(out, "Distance:  {source}")?;
    writeln!(
        out,
        "Wind:      {} mph from {}°",
        conditions.wind_speed, conditions.wind_angle_deg
    )?;
    writeln!(out, "Elevation: {} ft", conditions.elevation_ft)?;
    writeln!(out, "Lie:       {}", conditions.lie)?;
    writeln!(out, "Bag file:  {}", state.bag_json.display())?;
    Ok(())
}

fn handle_calc(state: &ReplState, out: &mut impl Write) -> Result<()> {
    let Some(source) = &state.source else {
        return Err(anyhow!(
            "no distance set; use club <name> or distance <yards> first"
        ));
    };
    let report = plan_shot(&state.bag, source, &state.conditions)?;
    writeln!(out, "{}", report.summary())?;
    write!(out, "{}", render_carry_table(&state.bag, &report))?;
    Ok(())
}
