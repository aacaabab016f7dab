use crate::application::replay::{self, ReplayEvent, parse_date, parse_date_list, parse_month};
use crate::application::{Config, logging};
use crate::infrastructure::{Clock, FixedClock, SelectionLoggerListener, SystemClock};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rangepicker")]
#[command(about = "Drive the date picker engine from the terminal and inspect its view")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply interaction events and print the resulting view model as JSON
    Replay {
        #[command(flatten)]
        picker: PickerArgs,

        /// Also print the outcome of every event
        #[arg(long)]
        steps: bool,

        /// Forward pointer events even on days a renderer would block
        #[arg(long)]
        force: bool,

        /// Events: activate:YYYY-MM-DD, hover:YYYY-MM-DD, next, prev,
        /// external:YYYY-MM-DD,... (empty list clears)
        events: Vec<String>,
    },
    /// Print the effective configuration as JSON
    Config {
        #[command(flatten)]
        picker: PickerArgs,
    },
}

/// Overrides applied on top of the loaded config file
#[derive(Args)]
pub struct PickerArgs {
    /// Config file (defaults to $RANGEPICKER_CONFIG or the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD format, defaults to today)
    #[arg(short, long)]
    pub today: Option<String>,

    /// Enable two-click range selection
    #[arg(short, long)]
    pub range: bool,

    /// First month (YYYY-MM)
    #[arg(long)]
    pub first: Option<String>,

    /// Last month (YYYY-MM)
    #[arg(long)]
    pub last: Option<String>,

    /// Number of months shown side by side
    #[arg(long)]
    pub visible: Option<usize>,

    /// Initially selected dates, comma separated
    #[arg(short, long)]
    pub select: Option<String>,
}

impl PickerArgs {
    fn clock(&self) -> Result<Box<dyn Clock>> {
        Ok(match &self.today {
            Some(date) => Box::new(FixedClock(parse_date(date)?)),
            None => Box::new(SystemClock),
        })
    }

    fn resolve(&self) -> Result<(Config, NaiveDate)> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::from_env()?,
        };

        if self.range {
            config.range_select = true;
        }
        if let Some(first) = &self.first {
            config.first_month = Some(parse_month(first)?);
        }
        if let Some(last) = &self.last {
            config.last_month = Some(parse_month(last)?);
        }
        if let Some(visible) = self.visible {
            config.visible_months = visible;
        }

        Ok((config, self.clock()?.today()))
    }

    fn initial_selection(&self) -> Result<Vec<NaiveDate>> {
        match &self.select {
            Some(dates) => parse_date_list(dates),
            None => Ok(Vec::new()),
        }
    }
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Self::parse();
        logging::init(cli.verbose);

        match cli.command {
            Commands::Replay {
                picker,
                steps,
                force,
                events,
            } => {
                let (config, today) = picker.resolve()?;
                let events = events
                    .iter()
                    .map(|event| event.parse())
                    .collect::<Result<Vec<ReplayEvent>>>()?;

                let mut engine = config.build_engine(picker.initial_selection()?, today);
                engine.register_listener(SelectionLoggerListener);

                for event in &events {
                    let outcome = replay::apply(&mut engine, event, force)?;
                    if steps {
                        println!("{}", serde_json::to_string(&outcome)?);
                    }
                }

                println!("{}", serde_json::to_string_pretty(&engine.view_model())?);
            }
            Commands::Config { picker } => {
                let (config, today) = picker.resolve()?;
                let effective = serde_json::json!({
                    "today": today,
                    "window": config.window_config(today),
                    "config": config,
                });
                println!("{}", serde_json::to_string_pretty(&effective)?);
            }
        }

        Ok(())
    }
}
