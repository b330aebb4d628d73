//! Loopback peering server
//!
//! An in-process NNTP server that accepts IHAVE/CHECK/TAKETHIS from the
//! subject under test so propagation can be observed directly.

use crate::error::{NntpError, Result};
use crate::server::{PeeringBackend, ServerFeatures, ServerSession};
use crate::shutdown::ShutdownToken;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// In-memory peering backend recording what the subject offered and sent.
///
/// The checked-list and submitted-map are guarded by one lock each: the
/// server session releases its connection-level work before ever
/// touching this state, so the lock is only ever held for the duration of
/// a single map/vec operation.
#[derive(Default)]
pub struct LoopbackState {
    checked: Mutex<Vec<String>>,
    submitted: Mutex<HashMap<String, Vec<String>>>,
}

impl LoopbackState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Message-ids the subject has offered via `IHAVE`/`CHECK`, in order.
    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }

    /// Message-ids successfully submitted, with their article bodies.
    pub fn submitted(&self) -> HashMap<String, Vec<String>> {
        self.submitted.lock().unwrap().clone()
    }

    /// True once `id` has been submitted — the condition propagation tests
    /// poll for.
    pub fn has_submitted(&self, id: &str) -> bool {
        self.submitted.lock().unwrap().contains_key(id)
    }
}

/// Parse a `reject.<code>.<phase>@…` probe id, for the given calling phase.
fn rejection_for(id: &str, phase: &str) -> Option<u16> {
    let inner = id.trim_start_matches('<').trim_end_matches('>');
    let rest = inner.split('@').next()?.strip_prefix("reject.")?;
    let mut parts = rest.splitn(2, '.');
    let code: u16 = parts.next()?.parse().ok()?;
    let rest_phase = parts.next()?;
    if rest_phase == phase || rest_phase.starts_with(&format!("{phase}.")) {
        Some(code)
    } else {
        None
    }
}

impl PeeringBackend for LoopbackState {
    fn ihave_check(&self, id: &str, phase: &str) -> (u16, String) {
        if let Some(code) = rejection_for(id, phase) {
            return (code, "rejected (probe override)".to_string());
        }
        self.checked.lock().unwrap().push(id.to_string());
        (335, "send it".to_string())
    }

    fn ihave(&self, id: &str, article: &[String], phase: &str) -> (u16, String) {
        if let Some(code) = rejection_for(id, phase) {
            return (code, "rejected (probe override)".to_string());
        }
        let mut submitted = self.submitted.lock().unwrap();
        if submitted.contains_key(id) {
            (435, "duplicate".to_string())
        } else {
            submitted.insert(id.to_string(), article.to_vec());
            (235, "transferred ok".to_string())
        }
    }
}

/// Expand a bind address: `*` to both IPv4/IPv6 wildcards, `*localhost` to
/// both loopbacks, anything else passed through verbatim.
fn expand_bind_host(host: &str) -> Vec<String> {
    match host {
        "*" => vec!["0.0.0.0".to_string(), "[::]".to_string()],
        "*localhost" => vec!["127.0.0.1".to_string(), "[::1]".to_string()],
        other => vec![other.to_string()],
    }
}

/// The in-process NNTP server the harness uses to observe propagation.
pub struct PeeringServer {
    state: Arc<LoopbackState>,
    shutdown: ShutdownToken,
    features: ServerFeatures,
    banner: String,
    listeners: Vec<JoinHandle<()>>,
}

impl PeeringServer {
    pub fn new(shutdown: ShutdownToken, features: ServerFeatures) -> Self {
        Self {
            state: LoopbackState::new(),
            shutdown,
            features,
            banner: "IMPLEMENTATION nntp-conformance-loopback".to_string(),
            listeners: Vec::new(),
        }
    }

    /// Shared observation handle: query `checked()`/`submitted()` from test
    /// code while the server runs.
    pub fn state(&self) -> Arc<LoopbackState> {
        self.state.clone()
    }

    /// Bind `host:port`, expanding `*`/`*localhost`, and start accepting.
    ///
    /// Each bound socket gets its own accept-loop worker; each accepted
    /// connection gets its own session worker, registered with the shutdown
    /// coordinator so `stop()` can wait for them to drain.
    pub async fn bind(&mut self, host: &str, port: u16) -> Result<()> {
        for candidate in expand_bind_host(host) {
            let addr = format!("{candidate}:{port}");
            let listener = TcpListener::bind(&addr)
                .await
                .map_err(|e| NntpError::Other(format!("bind {addr} failed: {e}")))?;
            self.spawn_accept_loop(listener);
        }
        Ok(())
    }

    fn spawn_accept_loop(&mut self, listener: TcpListener) {
        let shutdown = self.shutdown.clone();
        let state = self.state.clone();
        let features = self.features;
        let banner = self.banner.clone();
        let guard = self.shutdown.register();

        let handle = tokio::spawn(async move {
            let _guard = guard;
            loop {
                if shutdown.is_stopping() {
                    return;
                }
                let accepted = tokio::select! {
                    res = listener.accept() => res,
                    _ = tokio::time::sleep(std::time::Duration::from_millis(500)) => continue,
                };
                let Ok((stream, addr)) = accepted else { continue };
                tracing::info!(%addr, "peering connection accepted");
                spawn_connection_worker(stream, shutdown.clone(), features, state.clone(), banner.clone());
            }
        });
        self.listeners.push(handle);
    }

    /// Signal all accept loops and connection workers to stop, then wait
    /// (polling every 125 ms) until none remain outstanding.
    pub async fn stop(&mut self) {
        self.shutdown.stop().await;
        for handle in self.listeners.drain(..) {
            let _ = handle.await;
        }
    }
}

fn spawn_connection_worker(
    stream: TcpStream,
    shutdown: ShutdownToken,
    features: ServerFeatures,
    state: Arc<LoopbackState>,
    banner: String,
) {
    let guard = shutdown.register();
    tokio::spawn(async move {
        let _guard = guard;
        let mut session = ServerSession::new(stream, shutdown, features, state, banner);
        if let Err(e) = session.run().await {
            tracing::warn!(error = %e, "peering connection ended with error");
        }
        tracing::info!("peering connection closed");
    });
}
