//! # Interactive Application State
//!
//! A line-driven selector. Each command that changes the selection starts a new
//! resolution cycle on the session; a watcher task prints every published
//! snapshot, so a slow answer for an earlier selection never shows up once a
//! newer one has been made.

use crate::ui;
use anyhow::Result;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task::JoinHandle,
};
use tracing::info;
use yieldcast::{
    catalog::listing, ForecastSession, Locale, ScenarioResolver, SelectionTuple, Snapshot,
};

pub const HELP: &str = "\
Commands:
  crop <id>        change the crop
  region <id>      change the province
  year <year>      change the forecast year
  scenario <id>    change the weather scenario
  show             print the current state
  catalog          list every option
  help             print this message
  quit             exit";

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Select(SelectionTuple),
    Show,
    Catalog,
    Help,
    Quit,
}

/// The core state for the interactive application.
pub struct App {
    /// `true` while the input loop should keep reading.
    pub running: bool,
    pub locale: Locale,
    session: ForecastSession,
    selection: SelectionTuple,
    pending: Option<JoinHandle<Snapshot>>,
}

impl App {
    pub fn new(resolver: ScenarioResolver, initial: SelectionTuple, locale: Locale) -> Self {
        Self {
            running: true,
            locale,
            session: ForecastSession::new(resolver, initial.clone()),
            selection: initial,
            pending: None,
        }
    }

    pub fn selection(&self) -> &SelectionTuple {
        &self.selection
    }

    /// Parses one input line against the current selection.
    pub fn parse(&self, line: &str) -> Result<Option<Action>, String> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(None);
        };
        let argument = parts.collect::<Vec<_>>().join(" ");
        let needs_argument = |name: &str| -> Result<String, String> {
            if argument.is_empty() {
                Err(format!("'{name}' needs a value."))
            } else {
                Ok(argument.clone())
            }
        };

        let current = &self.selection;
        let action = match command.to_ascii_lowercase().as_str() {
            "crop" => Action::Select(SelectionTuple {
                crop: needs_argument("crop")?,
                ..current.clone()
            }),
            "region" => Action::Select(SelectionTuple {
                region: needs_argument("region")?,
                ..current.clone()
            }),
            "year" => {
                let raw = needs_argument("year")?;
                let year = raw
                    .parse::<i32>()
                    .map_err(|_| format!("'{raw}' is not a year."))?;
                Action::Select(SelectionTuple {
                    year,
                    ..current.clone()
                })
            }
            "scenario" => Action::Select(current.with_scenario(needs_argument("scenario")?)),
            "show" => Action::Show,
            "catalog" => Action::Catalog,
            "help" | "?" => Action::Help,
            "quit" | "exit" | "q" => Action::Quit,
            other => return Err(format!("Unknown command '{other}'. Type 'help'.")),
        };
        Ok(Some(action))
    }

    /// Starts a resolution cycle for `selection` and aborts the one it supersedes.
    pub fn select(&mut self, selection: SelectionTuple) {
        info!("[app] Selection changed to {selection}");
        self.selection = selection.clone();
        let handle = self.session.spawn_select(selection);
        if let Some(stale) = self.pending.replace(handle) {
            // Its outcome would be discarded anyway.
            stale.abort();
        }
    }

    /// Applies one input line, returning text to print, if any.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        match self.parse(line) {
            Ok(None) => None,
            Ok(Some(Action::Select(selection))) => {
                self.select(selection);
                None
            }
            Ok(Some(Action::Show)) => Some(ui::render_snapshot(
                &self.session.snapshot(),
                self.locale,
            )),
            Ok(Some(Action::Catalog)) => Some(ui::render_catalog(&listing(self.locale))),
            Ok(Some(Action::Help)) => Some(HELP.to_string()),
            Ok(Some(Action::Quit)) => {
                self.quit();
                None
            }
            Err(message) => Some(message),
        }
    }

    /// Sets the `running` flag to false to exit the main loop.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Waits for the latest cycle to finish.
    pub async fn settle(&mut self) -> Option<Snapshot> {
        let handle = self.pending.take()?;
        handle.await.ok()
    }
}

/// Runs the interactive loop on stdin until `quit` or end of input.
pub async fn run(mut app: App) -> Result<()> {
    let locale = app.locale;
    let mut updates = app.session.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            println!("{}", ui::render_snapshot(&snapshot, locale));
        }
    });

    println!("{HELP}");
    let initial = app.selection().clone();
    app.select(initial);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while app.running {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if let Some(output) = app.handle_line(&line) {
            println!("{output}");
        }
    }

    // Let the last cycle publish, then close the session so the watcher drains and exits.
    app.settle().await;
    drop(app);
    watcher.await?;
    Ok(())
}
