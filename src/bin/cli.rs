use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use timegrid::config::{Config, DEFAULT_CONFIG_FILE};
use timegrid::weekday::weekday_name;
use timegrid::{Schedule, ScheduleFile, lay_out, render_to_path};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    #[clap(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
enum Command {
    /// Draw the schedule as an SVG image.
    Render {
        input: PathBuf,
        #[clap(default_value = "schedule.svg")]
        output: PathBuf,
    },
    /// Print the draw instructions as JSON.
    Layout { input: PathBuf },
    /// Print each day's events in time order.
    List { input: PathBuf },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = Config::load(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config.display()))?;

    match args.cmd {
        Command::Render { input, output } => {
            let layout = render_to_path(read_input(&input)?, &config, &output)?;
            info!(
                output = %output.display(),
                width = layout.width,
                height = layout.height,
                "wrote schedule"
            );
        }
        Command::Layout { input } => {
            let layout = lay_out(read_input(&input)?, &config)?;
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &layout)?;
            writeln!(stdout)?;
        }
        Command::List { input } => {
            let schedule = Schedule::from_file(read_input(&input)?, &config.schedule_options())?;
            for day in schedule.active_days() {
                println!("{}", weekday_name(day));
                for event in schedule.events_on(day) {
                    println!("  {event}");
                }
            }
            println!("busiest day: {} events", schedule.busiest_day_count());
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<ScheduleFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .try_init();
}
