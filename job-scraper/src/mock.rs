//! In-memory browser used by the tests of discovery and fetching
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::api::{Error, Result};
use crate::browser::{Session, SessionFactory};
use crate::types::ControlState;

pub(crate) fn vacancy_url(id: &str) -> String {
    format!("https://jobs.dou.ua/companies/acme/vacancies/{}/", id)
}

pub(crate) fn vacancy_page(title: &str, description: &str, salary: Option<&str>) -> String {
    let salary = salary
        .map(|s| format!(r#"<span class="salary">{}</span>"#, s))
        .unwrap_or_default();
    format!(
        r#"<html><body>
        <div class="b-vacancy">
            <div class="l-n"><a href="https://jobs.dou.ua/companies/acme/">Acme   Corp</a></div>
            <h1 class="g-h2">{}</h1>
            <div class="sh-info">
                <span class="place">Kyiv, remote</span>
                {}
            </div>
            <div class="l-vacancy"><p>{}</p></div>
        </div>
        </body></html>"#,
        title, salary, description
    )
}

pub(crate) fn index_page(ids: &[&str]) -> String {
    let entries = ids
        .iter()
        .map(|id| {
            format!(
                r#"<li class="l-vacancy"><div class="title"><a class="vt" href="/companies/acme/vacancies/{}/">Vacancy {}</a></div></li>"#,
                id, id
            )
        })
        .collect::<String>();
    format!(
        r#"<html><body><div id="vacancyListId"><ul>{}</ul></div><div class="more-btn"><a href="">More</a></div></body></html>"#,
        entries
    )
}

#[derive(Default)]
pub(crate) struct MockSiteBuilder {
    index_url: Option<String>,
    index_batches: Vec<Vec<String>>,
    pages: HashMap<String, String>,
    redirects: HashMap<String, String>,
    failing: HashSet<String>,
    controls: VecDeque<ControlState>,
    refused_sessions: usize,
    gate: Option<Arc<Semaphore>>,
}

impl MockSiteBuilder {
    /// Index page that grows by one batch of vacancy ids per successful click
    pub(crate) fn index(mut self, url: &str, batches: Vec<Vec<&str>>) -> Self {
        self.index_url = Some(url.to_owned());
        self.index_batches = batches
            .into_iter()
            .map(|batch| batch.into_iter().map(String::from).collect())
            .collect();
        self
    }

    pub(crate) fn vacancy(mut self, id: &str) -> Self {
        let page = vacancy_page(
            &format!("Vacancy {}", id),
            "Python, Django, PostgreSQL and Docker",
            None,
        );
        self.pages.insert(vacancy_url(id), page);
        self
    }

    pub(crate) fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_owned(), html.to_owned());
        self
    }

    pub(crate) fn redirect(mut self, from: &str, to: &str) -> Self {
        self.redirects.insert(from.to_owned(), to.to_owned());
        self
    }

    pub(crate) fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_owned());
        self
    }

    pub(crate) fn controls(mut self, controls: Vec<ControlState>) -> Self {
        self.controls = controls.into();
        self
    }

    /// The first `count` session opens fail
    pub(crate) fn refuse_sessions(mut self, count: usize) -> Self {
        self.refused_sessions = count;
        self
    }

    /// Every navigation waits for one permit of `gate`
    pub(crate) fn gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn build(self) -> Arc<MockSite> {
        Arc::new(MockSite {
            index_url: self.index_url,
            index_batches: self.index_batches,
            pages: self.pages,
            redirects: self.redirects,
            failing: self.failing,
            gate: self.gate,
            controls: Mutex::new(self.controls),
            refused_sessions: AtomicUsize::new(self.refused_sessions),
            clicks: AtomicUsize::new(0),
            opened: AtomicUsize::new(0),
            closed: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            visited: Mutex::new(Vec::new()),
        })
    }
}

pub(crate) struct MockSite {
    index_url: Option<String>,
    index_batches: Vec<Vec<String>>,
    pages: HashMap<String, String>,
    redirects: HashMap<String, String>,
    failing: HashSet<String>,
    gate: Option<Arc<Semaphore>>,
    controls: Mutex<VecDeque<ControlState>>,
    refused_sessions: AtomicUsize,
    clicks: AtomicUsize,
    opened: AtomicUsize,
    closed: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    visited: Mutex<Vec<String>>,
}

impl MockSite {
    pub(crate) fn builder() -> MockSiteBuilder {
        MockSiteBuilder::default()
    }

    pub(crate) fn session(self: &Arc<Self>) -> MockSession {
        MockSession {
            site: Arc::clone(self),
            current: None,
        }
    }

    pub(crate) fn factory(self: &Arc<Self>) -> MockFactory {
        MockFactory {
            site: Arc::clone(self),
        }
    }

    pub(crate) fn clicks(&self) -> usize {
        self.clicks.load(Ordering::SeqCst)
    }

    pub(crate) fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub(crate) fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Every url passed to `goto`, in call order
    pub(crate) fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }

    fn index_html(&self) -> String {
        let shown = (self.clicks() + 1).min(self.index_batches.len());
        let ids = self.index_batches[..shown]
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>();
        index_page(&ids)
    }
}

pub(crate) struct MockFactory {
    site: Arc<MockSite>,
}

#[async_trait]
impl SessionFactory for MockFactory {
    type Session = MockSession;

    async fn open(&self) -> Result<MockSession> {
        let refused = self
            .site
            .refused_sessions
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if refused {
            return Err(Error::Session("mock refused to open a session".to_owned()));
        }
        self.site.opened.fetch_add(1, Ordering::SeqCst);
        let in_flight = self.site.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.site.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);
        Ok(self.site.session())
    }
}

pub(crate) struct MockSession {
    site: Arc<MockSite>,
    current: Option<String>,
}

#[async_trait]
impl Session for MockSession {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.site.visited.lock().unwrap().push(url.to_owned());
        if let Some(gate) = &self.site.gate {
            gate.acquire().await.unwrap().forget();
        }
        if self.site.failing.contains(url) {
            return Err(Error::Navigation {
                url: url.to_owned(),
                reason: "net::ERR_CONNECTION_RESET".to_owned(),
            });
        }
        let target = self
            .site
            .redirects
            .get(url)
            .cloned()
            .unwrap_or_else(|| url.to_owned());
        let known = self.site.index_url.as_deref() == Some(target.as_str())
            || self.site.pages.contains_key(&target);
        if !known {
            return Err(Error::Navigation {
                url: url.to_owned(),
                reason: "404".to_owned(),
            });
        }
        self.current = Some(target);
        Ok(())
    }

    async fn source(&mut self) -> Result<String> {
        let current = self
            .current
            .as_deref()
            .ok_or_else(|| Error::Session("no page loaded".to_owned()))?;
        if self.site.index_url.as_deref() == Some(current) {
            return Ok(self.site.index_html());
        }
        self.site
            .pages
            .get(current)
            .cloned()
            .ok_or(Error::ElementNotFound("page"))
    }

    async fn current_url(&mut self) -> Result<String> {
        self.current
            .clone()
            .ok_or_else(|| Error::Session("no page loaded".to_owned()))
    }

    async fn press(&mut self, _class_name: &str) -> ControlState {
        let state = self
            .site
            .controls
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(ControlState::Exhausted);
        if state == ControlState::Available {
            self.site.clicks.fetch_add(1, Ordering::SeqCst);
        }
        state
    }

    async fn close(self) -> Result<()> {
        self.site.closed.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .site
            .in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_sub(1)));
        Ok(())
    }
}
