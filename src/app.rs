//! App state and main loop: input handling, draining poll events, updating
//! histories, and drawing.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::warn;

use crate::history::{RollingSeries, CHART_POINTS};
use crate::net::NetworkActivityTracker;
use crate::poll::{PollEvent, Poller};
use crate::present::{self, safe_to_float};
use crate::sort::{sort_rows, ProcessRow, SortKey, SortState};
use crate::types::MetricSample;
use crate::ui;

/// Selectable poll cadences, whole seconds.
pub const INTERVAL_CHOICES: [u64; 5] = [1, 2, 3, 5, 10];

// "connected" badge auto-hides after this.
const CONNECTED_BADGE_TTL: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    Loading,
    Connected,
    Error(String),
}

pub struct App {
    // Latest decoded sample + chart histories
    sample: Option<MetricSample>,
    cpu_series: RollingSeries,
    ram_series: RollingSeries,
    disk_series: RollingSeries,
    gpu_series: RollingSeries,
    net_tracker: NetworkActivityTracker,

    // Process table state (display rows in feed order until sorted)
    rows: Vec<ProcessRow>,
    sort: SortState,

    // Connection status banner
    badge: Badge,
    badge_since: Instant,
    last_update: Option<DateTime<Local>>,

    interval_secs: u64,
    should_quit: bool,

    // Cached for mouse hit-testing against the last drawn frame
    last_table_area: Option<Rect>,
}

impl App {
    pub fn new(interval_secs: u64) -> Self {
        Self {
            sample: None,
            cpu_series: RollingSeries::new("cpu", CHART_POINTS),
            ram_series: RollingSeries::new("ram", CHART_POINTS),
            disk_series: RollingSeries::new("disk", CHART_POINTS),
            gpu_series: RollingSeries::new("gpu", CHART_POINTS),
            net_tracker: NetworkActivityTracker::new(),
            rows: Vec::new(),
            sort: SortState::default(),
            badge: Badge::Loading,
            badge_since: Instant::now(),
            last_update: None,
            interval_secs,
            should_quit: false,
            last_table_area: None,
        }
    }

    pub async fn run(&mut self, url: &str) -> Result<()> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut poller = Poller::new(url.to_string(), tx);
        poller.start(Duration::from_secs(self.interval_secs));

        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let res = self.event_loop(&mut terminal, rx, &mut poller, url).await;

        // Teardown
        poller.stop();
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, DisableMouseCapture, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut rx: mpsc::UnboundedReceiver<PollEvent>,
        poller: &mut Poller,
        url: &str,
    ) -> Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                match event::read()? {
                    Event::Key(k) => match k.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            self.should_quit = true;
                        }
                        KeyCode::Char('i') | KeyCode::Char('I') => {
                            self.cycle_interval(poller);
                        }
                        KeyCode::Char('p') => self.sort_by(SortKey::Pid),
                        KeyCode::Char('n') => self.sort_by(SortKey::Name),
                        KeyCode::Char('c') => self.sort_by(SortKey::Cpu),
                        KeyCode::Char('m') => self.sort_by(SortKey::Mem),
                        _ => {}
                    },
                    Event::Mouse(m) => {
                        if let Some(area) = self.last_table_area {
                            if let Some(key) = ui::processes::header_hit(m, area) {
                                self.sort_by(key);
                            }
                        }
                    }
                    _ => {}
                }
            }
            if self.should_quit {
                break;
            }

            // Drain poll events
            while let Ok(ev) = rx.try_recv() {
                match ev {
                    PollEvent::Loading => {
                        self.badge = Badge::Loading;
                        self.badge_since = Instant::now();
                    }
                    PollEvent::Sample(sample) => self.apply_sample(*sample),
                    PollEvent::Failed(msg) => self.apply_failure(msg),
                }
            }

            terminal.draw(|f| self.draw(f, url))?;

            sleep(Duration::from_millis(50)).await;
        }
        Ok(())
    }

    fn cycle_interval(&mut self, poller: &mut Poller) {
        let next = INTERVAL_CHOICES
            .iter()
            .copied()
            .find(|&c| c > self.interval_secs)
            .unwrap_or(INTERVAL_CHOICES[0]);
        self.interval_secs = next;
        poller.set_interval(Duration::from_secs(next));
    }

    fn sort_by(&mut self, key: SortKey) {
        sort_rows(key, &mut self.rows, &mut self.sort);
    }

    /// One successful poll: each panel checks its own sub-object and skips
    /// itself when the feed dropped it, without blocking sibling panels.
    fn apply_sample(&mut self, sample: MetricSample) {
        match &sample.cpu {
            Some(cpu) => self.cpu_series.push(cpu.percent),
            None => warn!("sample missing cpu section"),
        }
        match &sample.ram {
            Some(ram) => self.ram_series.push(ram.percent),
            None => warn!("sample missing ram section"),
        }
        match &sample.disk {
            Some(disk) => self.disk_series.push(disk.percent),
            None => warn!("sample missing disk section"),
        }
        match &sample.gpu {
            Some(gpu) => self.gpu_series.push(gpu.usage),
            None => warn!("sample missing gpu section"),
        }
        match &sample.network {
            Some(net) => {
                self.net_tracker
                    .update(safe_to_float(net.sent), safe_to_float(net.recv));
            }
            None => warn!("sample missing network section"),
        }
        match &sample.processes {
            // Fresh rows arrive in feed order; the sort toggle state is kept
            // and applies to the next header click.
            Some(procs) => self.rows = present::process_rows(procs),
            None => warn!("sample missing process list"),
        }

        self.badge = Badge::Connected;
        self.badge_since = Instant::now();
        self.last_update = Some(Local::now());
        self.sample = Some(sample);
    }

    /// Failed poll: status banner only, every other panel keeps its
    /// last-known state.
    fn apply_failure(&mut self, message: String) {
        self.badge = Badge::Error(message);
        self.badge_since = Instant::now();
    }

    /// Badge text for the header, or None when hidden.
    fn badge_text(&self) -> Option<&Badge> {
        match &self.badge {
            Badge::Connected if self.badge_since.elapsed() >= CONNECTED_BADGE_TTL => None,
            b => Some(b),
        }
    }

    fn draw(&mut self, f: &mut ratatui::Frame<'_>, url: &str) {
        let area = f.area();

        // Root rows: header, percent charts, gauges, detail panels, bottom
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(6), // rolling percent charts
                Constraint::Length(3), // gauges (+ battery when present)
                Constraint::Length(7), // detail panels
                Constraint::Min(10),   // activity + processes + status
            ])
            .split(area);

        ui::header::draw_header(
            f,
            rows[0],
            url,
            self.interval_secs,
            self.badge_text(),
            self.last_update.as_ref(),
        );

        // Rolling charts, one per metric
        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(rows[1]);
        ui::charts::draw_percent_chart(f, charts[0], "CPU", &self.cpu_series);
        ui::charts::draw_percent_chart(f, charts[1], "RAM", &self.ram_series);
        ui::charts::draw_percent_chart(f, charts[2], "Disk", &self.disk_series);
        ui::charts::draw_percent_chart(f, charts[3], "GPU", &self.gpu_series);

        // Gauges; the battery slot only exists when the feed reports one
        let battery = present::battery_view(self.sample.as_ref().and_then(|s| s.battery.as_ref()));
        let gauge_constraints: Vec<Constraint> = if battery.is_some() {
            vec![Constraint::Percentage(20); 5]
        } else {
            vec![Constraint::Percentage(25); 4]
        };
        let gauges = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(gauge_constraints)
            .split(rows[2]);
        let s = self.sample.as_ref();
        ui::bars::draw_tier_gauge(
            f,
            gauges[0],
            "CPU",
            &present::bar(s.and_then(|s| s.cpu.as_ref()).and_then(|c| c.percent), "%"),
        );
        ui::bars::draw_tier_gauge(
            f,
            gauges[1],
            "RAM",
            &present::bar(s.and_then(|s| s.ram.as_ref()).and_then(|r| r.percent), "%"),
        );
        ui::bars::draw_tier_gauge(
            f,
            gauges[2],
            "Disk",
            &present::bar(s.and_then(|s| s.disk.as_ref()).and_then(|d| d.percent), "%"),
        );
        ui::bars::draw_tier_gauge(
            f,
            gauges[3],
            "GPU",
            &present::bar(s.and_then(|s| s.gpu.as_ref()).and_then(|g| g.usage), "%"),
        );
        if let Some(view) = &battery {
            ui::battery::draw_battery(f, gauges[4], view);
        }

        // Detail panels
        let details = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(rows[3]);
        ui::detail::draw_cpu_ram_detail(f, details[0], s);
        ui::detail::draw_disk_detail(f, details[1], s);
        ui::detail::draw_gpu_detail(f, details[2], s);
        ui::detail::draw_net_detail(f, details[3], s);

        // Bottom: network activity, process table, system status
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(28),
                Constraint::Percentage(42),
                Constraint::Percentage(30),
            ])
            .split(rows[4]);
        ui::activity::draw_activity(f, bottom[0], &self.net_tracker);

        self.last_table_area = Some(bottom[1]);
        ui::processes::draw_process_table(f, bottom[1], &self.rows, &self.sort);

        ui::status::draw_status(
            f,
            bottom[2],
            s.and_then(|s| s.system.as_ref()),
            s.map(|s| present::heaviest_process_line(s.processes.as_deref().unwrap_or(&[]))),
        );
    }
}
