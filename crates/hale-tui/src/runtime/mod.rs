//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async results arrive through an inbox channel:
//! - Handlers send `UiEvent`s to `inbox_tx`
//! - The runtime drains `inbox_rx` each frame
//!
//! The runtime also owns the subscription cadence: it re-fetches the portal
//! snapshot whenever the configured poll interval has elapsed, so the reducer
//! only ever sees snapshot events, never the data-binding mechanism.

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use hale_core::{Config, PortalClient};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::router::{RedirectTarget, View, route};
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence; drives the spinner and bounds input latency.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// How the portal screen ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalExit {
    /// The user quit.
    Quit,
    /// A terminal route decision; the hosting shell performs the navigation.
    Redirect(RedirectTarget),
}

/// Full-screen portal runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is guaranteed to be restored on drop or panic.
pub struct PortalRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state.
    pub state: AppState,
    /// Portal client shared with spawned handlers.
    client: Arc<PortalClient>,
    /// Inbox sender - handlers send events here.
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time a subscription refresh was scheduled.
    last_refresh: Instant,
}

impl PortalRuntime {
    /// Creates a new portal runtime.
    pub fn new(config: Config) -> Result<Self> {
        let client = Arc::new(PortalClient::from_config(&config)?);

        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_refresh: now,
        })
    }

    /// Runs the main event loop until the user quits or a route decision
    /// redirects out of the TUI.
    pub fn run(&mut self) -> Result<PortalExit> {
        // Initial subscription fetch; afterwards the poll interval takes over.
        let task = self.state.task_seq.next_id();
        self.execute_effect(UiEffect::RefreshSnapshot { task });

        let mut dirty = true; // Start dirty to ensure initial render

        loop {
            if self.state.should_quit {
                return Ok(PortalExit::Quit);
            }
            if let View::Redirect(target) = route(&self.state) {
                return Ok(PortalExit::Redirect(target));
            }

            let events = self.collect_events()?;

            for event in events {
                let effects = update::update(&mut self.state, event);
                dirty = true;
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from all sources (terminal, inbox, timers).
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Schedule a subscription refresh when the poll interval elapsed.
        if let Some(interval) = self.state.config.poll_interval()
            && self.last_refresh.elapsed() >= interval
            && !self.state.tasks.snapshot_refresh.is_running()
        {
            self.last_refresh = Instant::now();
            let task = self.state.task_seq.next_id();
            self.execute_effect(UiEffect::RefreshSnapshot { task });
        }

        // Drain inbox - all async results arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Poll terminal events:
        // - If we already have events to process, do non-blocking poll
        // - Otherwise, block until the next tick is due
        let time_until_tick = TICK_INTERVAL.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= TICK_INTERVAL {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let started = TaskStarted { id };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f().await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    /// Executes a single effect by dispatching to the appropriate handler.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::RefreshSnapshot { task } => {
                let client = Arc::clone(&self.client);
                self.spawn_task(TaskKind::SnapshotRefresh, task, move || {
                    handlers::refresh_snapshot(client)
                });
            }
            UiEffect::ChangeEmail { task, email } => {
                let client = Arc::clone(&self.client);
                self.spawn_task(TaskKind::ChangeEmail, task, move || {
                    handlers::change_email(client, email)
                });
            }
            UiEffect::ResendVerification { task } => {
                let client = Arc::clone(&self.client);
                self.spawn_task(TaskKind::Resend, task, move || {
                    handlers::resend_verification(client)
                });
            }
        }
    }
}

impl Drop for PortalRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
