//! listcells - Interactive gallery of list-cell content configurations.
//!
//! Opens four screens, one per list appearance. Keys 1-4 (or Tab) switch
//! screens, j/k scroll, q quits.
//!
//! Usage:
//!   listcells                 # start on the plain screen
//!   listcells sidebar         # start on the sidebar screen
//!   listcells -v              # debug logging to stderr

use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use listcells::model::Appearance;
use listcells::screen::Screen;
use listcells::tui::App;

/// Screen selection on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScreenArg {
    Plain,
    Grouped,
    InsetGrouped,
    Sidebar,
}

impl From<ScreenArg> for Appearance {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Plain => Appearance::Plain,
            ScreenArg::Grouped => Appearance::Grouped,
            ScreenArg::InsetGrouped => Appearance::InsetGrouped,
            ScreenArg::Sidebar => Appearance::Sidebar,
        }
    }
}

/// Gallery of built-in list-cell content configurations.
#[derive(Parser)]
#[command(name = "listcells", about = "List-cell content configuration gallery")]
struct Args {
    /// Screen to open first.
    #[arg(value_enum, value_name = "SCREEN", default_value = "plain")]
    screen: ScreenArg,

    /// Increase log verbosity (-v: debug, -vv: trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    // All four screens load up front; a missing asset fails here, not mid-render.
    let screens = match Screen::load_all() {
        Ok(screens) => screens,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let app = App::new(screens, args.screen.into());
    if let Err(e) = app.run(Duration::from_millis(250)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("listcells={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
