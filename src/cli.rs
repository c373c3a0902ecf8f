use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "phong-tracer")]
#[command(about = "Phong-shaded ray tracer with hard shadows")]
pub struct Args {
    /// Scene description (JSON)
    pub scene: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "out.png")]
    pub output: PathBuf,

    /// Override the scene's image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the scene's image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Render pixels one at a time in scanline order instead of in parallel
    #[arg(long)]
    pub serial: bool,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
