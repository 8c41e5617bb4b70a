//! Axum server setup and lifecycle
//!
//! Starting -> Listening -> Draining -> Stopped:
//! - the listener is bound before serving starts, so bind errors are fatal
//! - serving runs in its own task while the caller waits for shutdown
//! - on shutdown, new connections stop and in-flight requests get a fixed
//!   drain budget; overrunning it is an error

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::{oneshot, watch};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::error::{Error, Result};
use crate::state::AppState;

/// Time in-flight requests get to finish once shutdown starts.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Lifecycle phase of a [`Server`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Listening,
    Draining,
    Stopped,
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::aliases::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP server bound to a listener, not yet serving.
pub struct Server {
    listener: TcpListener,
    app: Router,
    drain_timeout: Duration,
    phase: watch::Sender<Phase>,
}

impl Server {
    /// Bind `addr` and prepare to serve the alias routes.
    pub async fn bind(addr: SocketAddr, state: AppState, drain_timeout: Duration) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        Ok(Self::from_listener(listener, state, drain_timeout))
    }

    /// Serve on an already bound listener.
    pub fn from_listener(listener: TcpListener, state: AppState, drain_timeout: Duration) -> Self {
        let (phase, _) = watch::channel(Phase::Starting);
        Self {
            listener,
            app: build_router(state),
            drain_timeout,
            phase,
        }
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().map_err(Error::Serve)
    }

    /// Watch the lifecycle phase.
    pub fn phase(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    /// Serve until `shutdown` resolves, then drain.
    ///
    /// Returns `Error::ShutdownTimeout` if requests are still in flight when
    /// the drain budget runs out; those connections are dropped. If serving
    /// stops on its own before `shutdown` fires, its error is returned.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let Self {
            listener,
            app,
            drain_timeout,
            phase,
        } = self;

        let addr = listener.local_addr().map_err(Error::Serve)?;
        let (drain_tx, drain_rx) = oneshot::channel::<()>();

        let mut serving = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = drain_rx.await;
                })
                .await
        });

        phase.send_replace(Phase::Listening);
        tracing::info!("Server listening on {}", addr);

        tokio::select! {
            joined = &mut serving => {
                phase.send_replace(Phase::Stopped);
                joined?.map_err(Error::Serve)?;
                tracing::warn!("Server stopped without a shutdown request");
                return Ok(());
            }
            _ = shutdown => {}
        }

        tracing::info!("Shutting down...");
        phase.send_replace(Phase::Draining);
        let _ = drain_tx.send(());

        let drained = tokio::time::timeout(drain_timeout, &mut serving).await;
        phase.send_replace(Phase::Stopped);

        match drained {
            Ok(joined) => {
                joined?.map_err(Error::Serve)?;
                tracing::info!("Server gracefully stopped");
                Ok(())
            }
            Err(_) => {
                serving.abort();
                Err(Error::ShutdownTimeout(drain_timeout))
            }
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::warn!("Received SIGTERM, starting shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::db::{AliasStore, MemoryAliasStore, StoreError};
    use crate::models::Alias;

    async fn local_server(store: Arc<dyn AliasStore>, drain_timeout: Duration) -> Server {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        Server::from_listener(listener, AppState::new(store), drain_timeout)
    }

    /// Store whose list call blocks long enough to outlive a short drain.
    struct SlowStore {
        entered: Arc<Notify>,
    }

    #[async_trait]
    impl AliasStore for SlowStore {
        async fn list(&self) -> std::result::Result<Vec<Alias>, StoreError> {
            self.entered.notify_one();
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Vec::new())
        }

        async fn upsert(
            &self,
            _name: &str,
            _text: &str,
        ) -> std::result::Result<Alias, StoreError> {
            unreachable!("not used by these tests")
        }
    }

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let state = AppState::new(Arc::new(MemoryAliasStore::new()));
        let err = Server::bind(addr, state, DRAIN_TIMEOUT).await.err().unwrap();
        assert!(matches!(err, Error::Bind { .. }));
    }

    #[tokio::test]
    async fn serves_until_shutdown_then_stops_cleanly() {
        let server = local_server(Arc::new(MemoryAliasStore::new()), DRAIN_TIMEOUT).await;
        let addr = server.local_addr().unwrap();
        let mut phase = server.phase();
        assert_eq!(*phase.borrow(), Phase::Starting);

        let (trigger, triggered) = oneshot::channel::<()>();
        let running = tokio::spawn(server.run_until(async move {
            let _ = triggered.await;
        }));

        phase.wait_for(|p| *p == Phase::Listening).await.unwrap();

        let client = reqwest::Client::new();
        let url = format!("http://{addr}/aliases");
        let response = client
            .post(&url)
            .body(r#"{"name": "greeting", "text": "hello"}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        assert_eq!(
            response.text().await.unwrap(),
            "Alias for \"greeting\" has been saved!\n"
        );

        let response = client.get(&url).send().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.text().await.unwrap(),
            r#"[{"id":1,"name":"greeting","text":"hello"}]"#
        );
        drop(client);

        trigger.send(()).unwrap();
        running.await.unwrap().expect("clean shutdown");
        assert_eq!(*phase.borrow(), Phase::Stopped);
    }

    #[tokio::test]
    async fn shutdown_with_idle_server_is_clean() {
        let server = local_server(Arc::new(MemoryAliasStore::new()), DRAIN_TIMEOUT).await;
        let phase = server.phase();

        server.run_until(async {}).await.expect("clean shutdown");
        assert_eq!(*phase.borrow(), Phase::Stopped);
    }

    #[tokio::test]
    async fn drain_timeout_is_an_error() {
        let entered = Arc::new(Notify::new());
        let store = Arc::new(SlowStore {
            entered: entered.clone(),
        });
        let server = local_server(store, Duration::from_millis(200)).await;
        let addr = server.local_addr().unwrap();

        let (trigger, triggered) = oneshot::channel::<()>();
        let running = tokio::spawn(server.run_until(async move {
            let _ = triggered.await;
        }));

        let in_flight = tokio::spawn(async move {
            let _ = reqwest::get(format!("http://{addr}/aliases")).await;
        });
        entered.notified().await;

        trigger.send(()).unwrap();
        let err = running.await.unwrap().unwrap_err();
        assert!(matches!(err, Error::ShutdownTimeout(d) if d == Duration::from_millis(200)));

        in_flight.abort();
    }
}
