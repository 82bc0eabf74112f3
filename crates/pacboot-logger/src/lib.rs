use crossterm::{QueueableCommand, cursor, terminal};
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

pub struct Logger {
    start_time: Instant,
    quiet: bool,
    interactive: bool,
    /// Whether a transient status line is on screen. Locked across each
    /// clear and print.
    pending: Mutex<bool>,
}

pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
    Debug,
}

/// Wipes the transient line from an interactive terminal, if one is shown.
fn clear_pending<W: Write>(out: &mut W, pending: &mut bool, interactive: bool) -> io::Result<()> {
    if *pending && interactive {
        out.queue(cursor::MoveToColumn(0))?
            .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    }
    *pending = false;
    Ok(())
}

/// Writes one message. Transient messages stay on the current line of an
/// interactive terminal until the next write replaces them; everywhere else
/// every message gets its own line.
fn write_line<W: Write>(
    out: &mut W,
    pending: &mut bool,
    interactive: bool,
    message: &str,
    transient: bool,
) -> io::Result<()> {
    clear_pending(out, pending, interactive)?;
    if transient && interactive {
        write!(out, "{message}")?;
        *pending = true;
    } else {
        writeln!(out, "{message}")?;
    }
    out.flush()
}

impl Logger {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            start_time: Instant::now(),
            quiet,
            interactive: io::stdout().is_terminal(),
            pending: Mutex::new(false),
        }
    }

    fn emit(&self, message: &str, transient: bool) {
        if let Ok(mut pending) = self.pending.lock() {
            let mut stdout = io::stdout().lock();
            let _ = write_line(&mut stdout, &mut pending, self.interactive, message, transient);
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if self.quiet && !matches!(level, LogLevel::Error) {
            return;
        }

        let (prefix, colored_message) = match level {
            LogLevel::Info => (
                "pacboot".bright_cyan().bold().to_string(),
                message.white().to_string(),
            ),
            LogLevel::Success => (
                "✓".bright_green().bold().to_string(),
                message.bright_green().to_string(),
            ),
            LogLevel::Warning => (
                "⚠".bright_yellow().bold().to_string(),
                message.bright_yellow().to_string(),
            ),
            LogLevel::Error => (
                "✗".bright_red().bold().to_string(),
                message.bright_red().to_string(),
            ),
            LogLevel::Debug => (
                "•".bright_black().bold().to_string(),
                message.bright_black().to_string(),
            ),
        };

        let line = format!("{prefix} {colored_message}");
        if matches!(level, LogLevel::Error) {
            if let Ok(mut pending) = self.pending.lock() {
                let mut stdout = io::stdout().lock();
                let _ = clear_pending(&mut stdout, &mut pending, self.interactive)
                    .and_then(|()| stdout.flush());
                eprintln!("{line}");
            }
        } else {
            self.emit(&line, false);
        }
    }

    pub fn finish(&self, message: &str) {
        if self.quiet {
            return;
        }

        let elapsed = self.start_time.elapsed();
        let time_str = if elapsed.as_millis() < 1000 {
            format!("{}ms", elapsed.as_millis())
        } else {
            format!("{:.2}s", elapsed.as_secs_f64())
        };

        let final_message = format!(
            "{} {} {}",
            "✓".bright_green().bold(),
            message.bright_green(),
            format!("[{time_str}]").bright_black()
        );

        self.emit(&final_message, false);
    }

    pub fn progress(&self, message: &str, current: usize, total: usize) {
        if self.quiet {
            return;
        }

        let spinners = ["◐", "◓", "◑", "◒"];
        let spinner = spinners.get(current % spinners.len()).unwrap_or(&"◐");

        let progress_text = if total > 0 {
            format!(
                "{} {} ({}/{})",
                spinner.bright_cyan(),
                message.bright_white(),
                current.to_string().bright_cyan().bold(),
                total.to_string().bright_white()
            )
        } else {
            format!("{} {}", spinner.bright_cyan(), message.bright_white())
        };

        self.emit(&progress_text, true);
    }

    pub fn status(&self, message: &str) {
        if self.quiet {
            return;
        }

        let status_msg = format!("{} {}", "◦".bright_cyan(), message.bright_white());
        self.emit(&status_msg, true);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn success(&self, message: &str) {
        self.log(LogLevel::Success, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn debug(&self, message: &str, debug_enabled: bool) {
        if debug_enabled {
            self.log(LogLevel::Debug, message);
        }
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs the process-wide logger. Only the first call has an effect.
pub fn init_logger(quiet: bool) {
    let _ = LOGGER.set(Logger::new(quiet));
}

fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(false))
}

pub fn status(message: &str) {
    get_logger().status(message);
}

pub fn info(message: &str) {
    get_logger().info(message);
}

pub fn success(message: &str) {
    get_logger().success(message);
}

pub fn warn(message: &str) {
    get_logger().warn(message);
}

pub fn error(message: &str) {
    get_logger().error(message);
}

pub fn debug(message: &str, debug_enabled: bool) {
    get_logger().debug(message, debug_enabled);
}

pub fn progress(message: &str, current: usize, total: usize) {
    get_logger().progress(message, current, total);
}

pub fn finish(message: &str) {
    get_logger().finish(message);
}
