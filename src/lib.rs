use std::path::Path;

use anyhow::Context;

pub mod config;
pub mod day_axis;
pub mod error;
pub mod event;
pub mod layout;
pub mod palette;
pub mod schedule;
pub mod surface;
pub mod svg;
pub mod time;
pub mod time_axis;
pub mod weekday;

pub use error::{Result, ScheduleError, ValidationReason};
pub use event::{Event, EventInfo, EventRecord};
pub use layout::{Instruction, Layout, LayoutEngine, Metrics};
pub use schedule::{Schedule, ScheduleFile, ScheduleOptions};
pub use time::Time;

/// Validates `file` and lays it out with the configured palette, day order and metrics.
pub fn lay_out(file: ScheduleFile, config: &config::Config) -> Result<Layout> {
    let schedule = Schedule::from_file(file, &config.schedule_options())?;
    LayoutEngine::new(config.layout.clone()).layout(&schedule)
}

/// Lays out `file` and writes it as SVG to `path`. Nothing is created when layout fails.
pub fn render_to_path(
    file: ScheduleFile,
    config: &config::Config,
    path: &Path,
) -> anyhow::Result<Layout> {
    let layout = lay_out(file, config)?;
    svg::write_svg(&layout, path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(layout)
}
