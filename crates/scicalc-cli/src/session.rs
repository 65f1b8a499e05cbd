//! Calculator session: feeds token lines to the engine and renders its state

use crate::config::{CliConfig, HistoryOrder};
use crate::error::CliResult;
use console::Style;
use scicalc::core::{Constant, Operator, ScientificFn};
use scicalc::intent::parse_script;
use scicalc::CalculatorEngine;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Help text for the REPL: accepted tokens and `:` meta-commands
#[must_use]
pub fn repl_help() -> String {
    let join = |items: Vec<&str>| items.join(" ");
    format!(
        "Keys:      0-9 . ( ) c ce neg m+ m- mr mc mode ch\n\
         Operators: {}\n\
         Functions: {}\n\
         Constants: {} (or pi)\n\
         Commands:  :history [json]  :memory  :state  :reset  :help  :quit",
        join(Operator::ALL.iter().map(Operator::symbol).collect()),
        join(ScientificFn::ALL.iter().map(ScientificFn::name).collect()),
        join(Constant::ALL.iter().map(Constant::label).collect()),
    )
}

/// One calculator session bound to a configuration
#[derive(Debug)]
pub struct Session {
    engine: CalculatorEngine,
    config: CliConfig,
    use_color: bool,
}

impl Session {
    /// Creates a session with a fresh engine
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        let use_color = config.color.should_color();
        Self {
            engine: CalculatorEngine::with_config(config.engine_config()),
            config,
            use_color,
        }
    }

    /// Forces colored output on or off
    #[must_use]
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// The engine driven by this session
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Parses and dispatches one chunk of tokens.
    ///
    /// The chunk is parsed completely before anything is dispatched, so a bad
    /// token leaves the engine untouched.
    pub fn feed(&mut self, tokens: &str) -> CliResult<()> {
        let intents = parse_script(tokens)?;
        debug!(count = intents.len(), "dispatching intents");
        self.engine.dispatch_all(intents);
        Ok(())
    }

    /// The display line, styled when color is enabled
    #[must_use]
    pub fn render_display(&self) -> String {
        let style = if self.engine.is_error() {
            Style::new().red().bold()
        } else {
            Style::new().bold()
        };
        style
            .force_styling(self.use_color)
            .apply_to(self.engine.display())
            .to_string()
    }

    /// Memory and angle mode, as shown under the display
    #[must_use]
    pub fn render_status(&self) -> String {
        let line = format!(
            "Memory: {}  Mode: {}",
            self.engine.memory_label(),
            self.engine.angle_mode().label()
        );
        Style::new()
            .dim()
            .force_styling(self.use_color)
            .apply_to(line)
            .to_string()
    }

    /// History lines in the configured order
    #[must_use]
    pub fn history_lines(&self, order: HistoryOrder) -> Vec<String> {
        let history = self.engine.history();
        match order {
            HistoryOrder::NewestFirst => history.iter_rev().map(|e| e.display()).collect(),
            HistoryOrder::OldestFirst => history.lines(),
        }
    }

    /// Text rendering: display, optional status line, optional history
    #[must_use]
    pub fn render_text(&self, with_history: bool, order: Option<HistoryOrder>) -> String {
        let mut out = self.render_display();
        if self.config.show_status {
            out.push('\n');
            out.push_str(&self.render_status());
        }
        if with_history {
            let lines = self.history_lines(order.unwrap_or(self.config.history_order));
            out.push_str("\nHistory:");
            if lines.is_empty() {
                out.push_str("\n  (empty)");
            }
            for line in lines {
                out.push_str("\n  ");
                out.push_str(&line);
            }
        }
        out
    }

    /// JSON rendering of the engine snapshot
    pub fn render_json(&self) -> CliResult<String> {
        Ok(self.engine.snapshot().to_json()?)
    }

    /// Runs an interactive loop until end of input or `:quit`
    pub fn repl<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        prompt: bool,
    ) -> CliResult<()> {
        info!("repl started");
        if prompt {
            write!(output, "> ")?;
            output.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();

            match trimmed {
                "" => {}
                ":quit" | ":q" | ":exit" => break,
                ":help" => writeln!(output, "{}", repl_help())?,
                ":history" => {
                    for entry in self.history_lines(self.config.history_order) {
                        writeln!(output, "{entry}")?;
                    }
                }
                ":history json" => writeln!(output, "{}", self.engine.history().to_json()?)?,
                ":memory" => writeln!(output, "{}", self.engine.memory_label())?,
                ":state" => writeln!(output, "{}", self.render_json()?)?,
                ":reset" => {
                    self.engine.reset();
                    writeln!(output, "{}", self.render_display())?;
                }
                _ => match self.feed(trimmed) {
                    Ok(()) => writeln!(output, "{}", self.render_display())?,
                    Err(e) => {
                        warn!(line = trimmed, error = %e, "rejected input");
                        writeln!(output, "error: {e}")?;
                    }
                },
            }

            if prompt {
                write!(output, "> ")?;
                output.flush()?;
            }
        }

        info!(history = self.engine.history().len(), "repl finished");
        Ok(())
    }
}
