use anyhow::{Context, Result};
use clap::Parser;
use golf_yardage::bag;
use golf_yardage::config::{AppMode, Cli, load_config};
use golf_yardage::repl::{ReplState, run_repl};
use golf_yardage::shot::{plan_shot, render_carry_table};
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match load_config(cli)? {
        AppMode::OneShot {
            bag_json,
            source,
            conditions,
        } => {
            let bag = bag::load(&bag_json);
            let report = plan_shot(&bag, &source, &conditions)?;
            println!("{}", report.summary());
            print!("{}", render_carry_table(&bag, &report));
            Ok(())
        }
        AppMode::Repl {
            bag_json,
            source,
            conditions,
        } => {
            let bag = bag::load(&bag_json);
            let mut state = ReplState::new(bag, bag_json, source, conditions);
            run_repl(&mut state).context("run repl")
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
