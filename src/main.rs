use std::convert::Infallible;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::Result;

use rainbow::config::{self, ConfigResult};
use rainbow::error::RainbowError;
use rainbow::grammar::Grammar;
use rainbow::highlight::{self, HighlightMode, HighlightRequest, Palette};
use rainbow::input::read_source;
use rainbow::kakoune::render_command;
use rainbow::position::{Position, parse_pair};
use rainbow::scan::scan;
use rainbow::viewport::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// A command for the Kakoune client
    #[default]
    Kakoune,
    /// The highlight ranges as a JSON array
    Json,
}

/// Depth-colored delimiter highlighting
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Depth-colored delimiter highlighting for a buffer read from stdin"
)]
struct Args {
    /// Client the generated command is evaluated in
    client: String,

    /// Buffer timestamp the ranges refer to
    timestamp: String,

    /// 0: delimiters only, 1: also the pair around the cursor, 2: also every scope
    mode: HighlightMode,

    /// Cursor position as <line>.<column>
    cursor: Position,

    /// First visible position as <line>.<column>
    window_top: Position,

    /// Visible size as <lines>.<columns>
    #[arg(value_parser = parse_window_size)]
    window_size: (usize, usize),

    /// Buffer filetype; c, cpp and rust are understood, anything else is plain text
    filetype: String,

    /// Y to treat angle brackets of generics/templates as delimiters
    #[arg(value_parser = parse_toggle, action = ArgAction::Set)]
    resolve_generics: bool,

    /// Foreground colors by depth, optionally followed by `!` and background colors
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    colors: Vec<String>,

    /// Read the buffer from a file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Kakoune)]
    format: OutputFormat,

    /// Lines highlighted above and below the window (overrides the config file)
    #[arg(long)]
    margin: Option<usize>,
}

fn parse_window_size(s: &str) -> Result<(usize, usize), RainbowError> {
    parse_pair(s).ok_or_else(|| RainbowError::InvalidSize(s.to_string()))
}

fn parse_toggle(s: &str) -> Result<bool, Infallible> {
    Ok(s.starts_with(['Y', 'y']))
}

fn main() -> Result<()> {
    // Writes to /tmp/rainbow-debug.log at DEBUG level; stdout carries the editor command
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    let ConfigResult { config, warning } = config::load_config();
    if let Some(warning) = warning {
        eprintln!("rainbow: {warning}");
    }

    let source = read_source(args.input.as_deref())?;
    let grammar = Grammar::from_filetype_with_aliases(&args.filetype, &config.filetypes);
    let pairs = scan(&source, grammar, args.resolve_generics)?;

    let margin = args.margin.unwrap_or(config.viewport.margin);
    let window = Window::from_viewport(args.window_top, args.window_size, margin);
    let palette = Palette::from_args(&args.colors).or_else(&config.colors.palette());
    let request = HighlightRequest {
        mode: args.mode,
        cursor: args.cursor,
        window,
        palette: &palette,
        cursor_color: &config.colors.cursor,
    };
    let ranges = highlight::build_ranges(&pairs, &request);

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Kakoune => {
            writeln!(
                stdout,
                "{}",
                render_command(&args.client, &args.timestamp, &ranges)
            )?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut stdout, &ranges)?;
            writeln!(stdout)?;
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("=== RAINBOW RUN ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/rainbow-debug.log")
    else {
        return;
    };

    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();

    log::debug!("=== RAINBOW RUN STARTED ===");
}
