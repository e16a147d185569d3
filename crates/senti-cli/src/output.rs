//! Terminal output formatting.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

use senti_core::presentation::{RESULT_HEADING, SUCCESS_NOTICE};
use senti_core::{PresentationShell, Rendering, SentimentDisplay};

/// Terminal shell: spinner while waiting, colored result afterwards.
pub struct TerminalShell {
    json: bool,
    spinner: Option<ProgressBar>,
}

impl TerminalShell {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            spinner: None,
        }
    }
}

impl PresentationShell for TerminalShell {
    fn begin_busy(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn end_busy(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn render(&mut self, rendering: &Rendering) {
        if self.json {
            println!("{}", rendering_json(rendering));
        } else {
            print_rendering(rendering);
        }
    }
}

/// Print a rendering for humans.
pub fn print_rendering(rendering: &Rendering) {
    match rendering {
        Rendering::Warning(msg) => {
            println!("{} {}", "⚠".yellow().bold(), msg.yellow());
        }
        Rendering::Failure(msg) => {
            println!("{} {}", "✗".red().bold(), msg.red());
        }
        Rendering::Sentiment(display) => print_sentiment(display),
    }
}

/// Print the success notice and the centered, colored label.
fn print_sentiment(display: &SentimentDisplay) {
    let (r, g, b) = display.tone.rgb();

    println!("{} {}", "✓".green().bold(), SUCCESS_NOTICE.green());
    println!();
    println!("{}", RESULT_HEADING.bold());
    println!();
    println!(
        "{}{}",
        " ".repeat(center_padding(&display.label, term_width())),
        display.label.truecolor(r, g, b).bold()
    );
    println!();
}

/// Serialized shape of a rendering.
#[derive(Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum RenderingJson<'a> {
    Warning {
        message: &'a str,
    },
    Failure {
        message: &'a str,
    },
    Sentiment {
        #[serde(flatten)]
        display: &'a SentimentDisplay,
        color: &'static str,
    },
}

/// JSON form of a rendering, for `--json`.
pub fn rendering_json(rendering: &Rendering) -> serde_json::Value {
    let json = match rendering {
        Rendering::Warning(msg) => RenderingJson::Warning { message: msg },
        Rendering::Failure(msg) => RenderingJson::Failure { message: msg },
        Rendering::Sentiment(display) => RenderingJson::Sentiment {
            display,
            color: display.color(),
        },
    };
    serde_json::to_value(json).unwrap_or_default()
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Left padding that centers `s` within `width` columns.
fn center_padding(s: &str, width: usize) -> usize {
    width.saturating_sub(UnicodeWidthStr::width(s)) / 2
}
