use chrono::{DateTime, Utc};
use seatwatch_infra::{
    CleanupConfig, Config, Context, EmailMessage, IBrowserGateway, IBrowserSession, IMailer, ISys,
    Repos, SmtpConfig, SweepConfig,
};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A clock the test can move forward between sweeps.
#[derive(Debug)]
pub struct StaticSys(Mutex<DateTime<Utc>>);

impl StaticSys {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }
}

impl ISys for StaticSys {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// A scripted seating page served by [`FakeBrowser`].
#[derive(Debug, Clone)]
pub struct FakePage {
    pub grid_present: bool,
    pub cookie_overlay: bool,
    pub body_text: String,
    /// Seat cells as (label, occupied) pairs.
    pub cells: Vec<(String, bool)>,
    /// Whether the page carries a seat-map zoom control.
    pub zoom_control: bool,
    /// Cells served instead of `cells` after the zoom control was clicked.
    pub cells_after_zoom: Vec<(String, bool)>,
}

impl Default for FakePage {
    fn default() -> Self {
        Self {
            grid_present: true,
            cookie_overlay: false,
            body_text: "Select your seats".to_string(),
            cells: Vec::new(),
            zoom_control: false,
            cells_after_zoom: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct FakeBrowserState {
    pages: Mutex<HashMap<String, FakePage>>,
    navigations: Mutex<Vec<String>>,
    current: Mutex<Option<String>>,
    zoomed: Mutex<HashSet<String>>,
    quits: Mutex<usize>,
}

/// In-memory browser gateway serving scripted pages instead of a WebDriver.
#[derive(Debug, Clone, Default)]
pub struct FakeBrowser {
    state: Arc<FakeBrowserState>,
}

impl FakeBrowser {
    pub fn insert_page(&self, url: &str, page: FakePage) {
        self.state
            .pages
            .lock()
            .unwrap()
            .insert(url.to_string(), page);
    }

    /// Every URL navigated to, in order, across all sessions.
    pub fn navigations(&self) -> Vec<String> {
        self.state.navigations.lock().unwrap().clone()
    }

    pub fn quits(&self) -> usize {
        *self.state.quits.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl IBrowserGateway for FakeBrowser {
    async fn open_session(&self) -> anyhow::Result<Box<dyn IBrowserSession>> {
        Ok(Box::new(FakeSession {
            state: self.state.clone(),
        }))
    }
}

struct FakeSession {
    state: Arc<FakeBrowserState>,
}

impl FakeSession {
    fn current_url(&self) -> Option<String> {
        self.state.current.lock().unwrap().clone()
    }

    fn current_page(&self) -> Option<FakePage> {
        let current = self.current_url()?;
        self.state.pages.lock().unwrap().get(&current).cloned()
    }
}

#[async_trait::async_trait]
impl IBrowserSession for FakeSession {
    async fn navigate(&self, url: &str) -> anyhow::Result<()> {
        self.state.navigations.lock().unwrap().push(url.to_string());
        if !self.state.pages.lock().unwrap().contains_key(url) {
            return Err(anyhow::anyhow!("No page registered for {}", url));
        }
        *self.state.current.lock().unwrap() = Some(url.to_string());
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str, _timeout: Duration) -> anyhow::Result<()> {
        let page = self
            .current_page()
            .ok_or_else(|| anyhow::anyhow!("No page loaded"))?;
        let present = if selector.contains("gridcell") {
            page.grid_present
        } else if selector.contains("osano") {
            page.cookie_overlay
        } else {
            false
        };
        if present {
            Ok(())
        } else {
            Err(anyhow::anyhow!("No element matching {}", selector))
        }
    }

    async fn execute_script(&self, script: &str) -> anyhow::Result<Value> {
        let url = self
            .current_url()
            .ok_or_else(|| anyhow::anyhow!("No page loaded"))?;
        let page = self
            .current_page()
            .ok_or_else(|| anyhow::anyhow!("No page loaded"))?;
        if script.contains("rounded-full") {
            if page.zoom_control {
                self.state.zoomed.lock().unwrap().insert(url);
            }
            return Ok(Value::Bool(page.zoom_control));
        }
        if script.contains("querySelectorAll") {
            let zoomed = self.state.zoomed.lock().unwrap().contains(&url);
            let cells = if zoomed {
                &page.cells_after_zoom
            } else {
                &page.cells
            };
            let cells: Vec<Value> = cells
                .iter()
                .map(|(label, occupied)| json!({ "label": label, "occupied": occupied }))
                .collect();
            return Ok(Value::Array(cells));
        }
        Ok(Value::Null)
    }

    async fn visible_text(&self) -> anyhow::Result<String> {
        let page = self
            .current_page()
            .ok_or_else(|| anyhow::anyhow!("No page loaded"))?;
        Ok(page.body_text)
    }

    async fn quit(&self) -> anyhow::Result<()> {
        *self.state.quits.lock().unwrap() += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct RecordingMailerState {
    sent: Mutex<Vec<EmailMessage>>,
    failing: Mutex<bool>,
}

/// Mail transport that records instead of sending, with a switchable
/// failure mode.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    state: Arc<RecordingMailerState>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.state.sent.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        *self.state.failing.lock().unwrap() = failing;
    }
}

#[async_trait::async_trait]
impl IMailer for RecordingMailer {
    async fn send(&self, email: &EmailMessage) -> anyhow::Result<()> {
        if *self.state.failing.lock().unwrap() {
            return Err(anyhow::anyhow!("SMTP relay rejected the message"));
        }
        self.state.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Config with all the sweep pacing collapsed so tests run instantly.
pub fn test_config() -> Config {
    Config {
        webdriver_url: "http://localhost:9515".to_string(),
        unsubscribe_base_url: "http://unsubscribe.test".to_string(),
        smtp: SmtpConfig {
            host: "localhost".to_string(),
            port: 587,
            username: String::new(),
            password: String::new(),
            sender: "seatwatch@localhost".to_string(),
        },
        sweep: SweepConfig {
            min_interval: Duration::from_secs(600),
            floor: Duration::from_secs(60),
            pacing: Duration::ZERO,
            cooldown: chrono::Duration::hours(6),
            grid_timeout: Duration::from_millis(10),
            overlay_timeout: Duration::from_millis(10),
        },
        cleanup: CleanupConfig {
            interval: Duration::from_secs(6 * 60 * 60),
            movie_retention: chrono::Duration::days(30),
        },
    }
}

pub struct TestApp {
    pub ctx: Context,
    pub browser: FakeBrowser,
    pub mailer: RecordingMailer,
    pub sys: Arc<StaticSys>,
}

/// Full in-memory application context frozen at `now`.
pub fn setup(now: DateTime<Utc>) -> TestApp {
    let browser = FakeBrowser::default();
    let mailer = RecordingMailer::default();
    let sys = Arc::new(StaticSys::new(now));
    let ctx = Context {
        repos: Repos::create_inmemory(),
        config: test_config(),
        sys: sys.clone(),
        browser: Arc::new(browser.clone()),
        mailer: Arc::new(mailer.clone()),
    };
    TestApp {
        ctx,
        browser,
        mailer,
        sys,
    }
}
