mod app;
mod calendar;
mod decorate;
mod format;
mod help;
mod holiday;
mod kst;
mod selection;
mod theme;
use crate::app::App;
use crate::calendar::{CalendarType, Page};
use crate::decorate::HolidayDecorator;
use crate::holiday::HolidayCalendar;
use crate::selection::SelectMode;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};
use tracing::info;
use tracing_subscriber::EnvFilter;

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct RunOptions {
    date: Option<Date>,
    mode: SelectMode,
    calendar_type: CalendarType,
    log_file: Option<PathBuf>,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('r') | Arg::Long("range") => opts.mode = SelectMode::Range,
                Arg::Short('c') | Arg::Long("calendar-type") => {
                    opts.calendar_type = parser.value()?.parse()?;
                }
                Arg::Long("log-file") => opts.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if opts.date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => opts.date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                let now = OffsetDateTime::now_local().context("failed to determine local date")?;
                if let Some(path) = &opts.log_file {
                    init_logging(path)?;
                }
                info!(
                    today = %now.date(),
                    host_offset = %now.offset(),
                    calendar_type = %opts.calendar_type,
                    mode = ?opts.mode,
                    "starting calendar"
                );
                let decorator = HolidayDecorator::new(HolidayCalendar::default(), now.offset());
                let mut page = Page::new(now.date(), opts.calendar_type);
                if let Some(date) = opts.date {
                    page = page.start_date(date);
                }
                let app = App::new(page, decorator, opts.mode);
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    app.run(terminal).context("failed to run calendar")?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: holical [OPTIONS] [YYYY-MM-DD]");
                println!();
                println!("Terminal calendar highlighting weekends and holidays observed at UTC+9");
                println!();
                println!("Options:");
                println!("  -c, --calendar-type <TYPE>");
                println!("                    Lay out weeks per TYPE: gregorian, hebrew,");
                println!("                    islamic, or iso8601 [default: hebrew]");
                println!("      --log-file <PATH>");
                println!("                    Write logs to PATH; level is set with RUST_LOG");
                println!("  -r, --range       Select a range of dates instead of a single date");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
