//! Test registry and outcome recording
//!
//! A four-bucket outcome recorder with a distinguished stop-this-test
//! signal ([`NntpError::TestAssertion`]) the runner special-cases, paired
//! with explicit test registration rather than name-convention discovery.

use crate::config::Config;
use crate::error::{NntpError, Result};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// A pinned, boxed, `'static` future — the shape a registered test body
/// returns, since trait objects can't be `async fn` directly without an
/// extra proc-macro crate the rest of this workspace doesn't otherwise need.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A registered test body: given its recorder, the resolved config, and any
/// `--arg test:key=value` overrides, run to completion or return an error.
pub type TestFn = Arc<dyn Fn(Arc<OutcomeRecorder>, Arc<Config>, HashMap<String, String>) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Four-bucket outcome accumulator for a single test run.
///
/// `fail`/`xfail`/`compat`/`skip` accumulate without stopping the test; the
/// `_hard` variants additionally return an [`NntpError::TestAssertion`] for
/// the caller to propagate with `?`, which [`run_test`] recognizes and
/// swallows rather than treating as an unexpected error.
#[derive(Default)]
pub struct OutcomeRecorder {
    fails: Mutex<Vec<String>>,
    xfails: Mutex<Vec<String>>,
    compats: Mutex<Vec<String>>,
    skips: Mutex<Vec<String>>,
}

impl OutcomeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, desc: impl Into<String>) {
        self.fails.lock().unwrap().push(desc.into());
    }

    pub fn xfail(&self, desc: impl Into<String>) {
        self.xfails.lock().unwrap().push(desc.into());
    }

    pub fn compat(&self, desc: impl Into<String>) {
        self.compats.lock().unwrap().push(desc.into());
    }

    pub fn skip(&self, desc: impl Into<String>) {
        self.skips.lock().unwrap().push(desc.into());
    }

    /// Record a fail and return the distinguished stop-this-test error.
    pub fn fail_hard(&self, desc: impl Into<String>) -> NntpError {
        let desc = desc.into();
        self.fail(desc.clone());
        NntpError::TestAssertion(desc)
    }

    /// Record an xfail and return the distinguished stop-this-test error.
    pub fn xfail_hard(&self, desc: impl Into<String>) -> NntpError {
        let desc = desc.into();
        self.xfail(desc.clone());
        NntpError::TestAssertion(desc)
    }

    pub fn fails(&self) -> Vec<String> {
        self.fails.lock().unwrap().clone()
    }

    pub fn xfails(&self) -> Vec<String> {
        self.xfails.lock().unwrap().clone()
    }

    pub fn compats(&self) -> Vec<String> {
        self.compats.lock().unwrap().clone()
    }

    pub fn skips(&self) -> Vec<String> {
        self.skips.lock().unwrap().clone()
    }

    /// True if this recorder accumulated at least one hard or soft fail.
    pub fn has_fails(&self) -> bool {
        !self.fails.lock().unwrap().is_empty()
    }
}

/// The four-bucket outcome report for one test run, returned to the
/// (out-of-scope) front end for tallying and rendering.
#[derive(Debug, Clone, Default)]
pub struct TestReport {
    pub name: String,
    pub fails: Vec<String>,
    pub xfails: Vec<String>,
    pub compats: Vec<String>,
    pub skips: Vec<String>,
}

impl TestReport {
    /// Exit-status-worthy: any hard or soft fail.
    pub fn is_hard_failure(&self) -> bool {
        !self.fails.is_empty()
    }
}

/// Narrow sink a front end (HTML renderer, CI summary, etc.) implements to
/// receive finished reports, decoupling this crate from any particular
/// presentation.
pub trait Reporter: Send + Sync {
    fn report(&self, report: &TestReport);
}

/// Default [`Reporter`] that logs each bucket via `tracing`, at the level
/// matching its severity: fails at `error`, xfails/compats at `warn`/`info`,
/// skips at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingReporter;

impl Reporter for LoggingReporter {
    fn report(&self, report: &TestReport) {
        for fail in &report.fails {
            tracing::error!(test = %report.name, "FAIL: {fail}");
        }
        for xfail in &report.xfails {
            tracing::warn!(test = %report.name, "XFAIL: {xfail}");
        }
        for compat in &report.compats {
            tracing::info!(test = %report.name, "COMPAT: {compat}");
        }
        for skip in &report.skips {
            tracing::debug!(test = %report.name, "SKIP: {skip}");
        }
        if report.fails.is_empty() {
            tracing::info!(test = %report.name, "PASS");
        }
    }
}

/// Maps test names to their registered bodies, keyed by a `test_`-prefixed
/// identifier purely as a naming convention (registration, not reflection,
/// drives discovery here).
#[derive(Clone, Default)]
pub struct TestRegistry {
    tests: HashMap<String, TestFn>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a test body under `name` (conventionally `test_*`).
    pub fn register<F, Fut>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn(Arc<OutcomeRecorder>, Arc<Config>, HashMap<String, String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let name = name.into();
        self.tests.insert(
            name,
            Arc::new(move |recorder, config, args| Box::pin(body(recorder, config, args)) as BoxFuture<'static, Result<()>>),
        );
    }

    /// Test names in the registry, for `--list`.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tests.keys().cloned().collect();
        names.sort();
        names
    }

    /// Run one registered test by name, installing a fresh recorder.
    ///
    /// Any error other than [`NntpError::TestAssertion`] (the hard-stop
    /// signal) is itself recorded as a fail.
    pub async fn run_test(
        &self,
        name: &str,
        config: Arc<Config>,
        args: HashMap<String, String>,
    ) -> Result<TestReport> {
        let test = self
            .tests
            .get(name)
            .ok_or_else(|| NntpError::Other(format!("no such test: {name}")))?
            .clone();
        let recorder = Arc::new(OutcomeRecorder::new());

        tracing::info!(test = name, "starting");
        match test(recorder.clone(), config, args).await {
            Ok(()) => {}
            Err(NntpError::TestAssertion(_)) => {}
            Err(NntpError::Stopped) => return Err(NntpError::Stopped),
            Err(other) => recorder.fail(other.to_string()),
        }
        tracing::info!(test = name, "finished");

        Ok(TestReport {
            name: name.to_string(),
            fails: recorder.fails(),
            xfails: recorder.xfails(),
            compats: recorder.compats(),
            skips: recorder.skips(),
        })
    }

    /// Run every registered test, in name order, stopping the whole sweep
    /// only on cooperative [`NntpError::Stopped`].
    pub async fn run_all(
        &self,
        config: Arc<Config>,
        per_test_args: &HashMap<String, HashMap<String, String>>,
    ) -> Result<Vec<TestReport>> {
        let mut reports = Vec::new();
        for name in self.names() {
            let args = per_test_args.get(&name).cloned().unwrap_or_default();
            reports.push(self.run_test(&name, config.clone(), args).await?);
        }
        Ok(reports)
    }
}
