//! Minimal HTTP server for tests. Requests are anticipated by their path, then inspected and
//! responded to from the test body.

use http_body_util::Full;
use hyper::{server::conn::http1, service::service_fn, Request, Response};
use hyper_util::rt::TokioIo;
use std::{
    collections::HashMap,
    convert::Infallible,
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tokio::{net::TcpListener, sync::oneshot};

pub use hyper;
pub use hyper::{body::Bytes, StatusCode};

struct Anticipation {
    request_tx: oneshot::Sender<Request<()>>,
    response_rx: oneshot::Receiver<Response<Full<Bytes>>>,
}

#[derive(Default)]
struct State {
    /// Made by [`Server::anticipate`], before the request comes.
    anticipations: HashMap<String, Anticipation>,

    unexpected: Vec<String>,
}

pub struct Server {
    port: u16,
    state: Arc<Mutex<State>>,
}

impl Server {
    /// Create new [`Server`], and bind it to a random port on the loopback interface.
    pub async fn bind() -> Self {
        let state = Arc::new(Mutex::new(State::default()));

        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(addr)
            .await
            .expect("could not bind the mock server");
        let port = listener
            .local_addr()
            .expect("mock server has no local address")
            .port();

        let state_clone = state.clone();
        tokio::spawn(async move {
            loop {
                let (stream, _) = match listener.accept().await {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        log::error!("Could not accept the connection: {e}.");
                        continue;
                    }
                };

                let state = state_clone.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |request| handle(state.clone(), request));
                    if let Err(e) = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await
                    {
                        log::debug!("Connection closed: {e}.");
                    }
                });
            }
        });

        Self { port, state }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Anticipate a request with given path. Query is not taken into account.
    pub async fn anticipate(&self, path: impl Into<String>) -> AnticipatedRequest {
        let path = path.into();
        log::info!("Anticipating '{path}'.");

        let (request_tx, request_rx) = oneshot::channel();
        let (response_tx, response_rx) = oneshot::channel();

        self.state.lock().expect("poisoned").anticipations.insert(
            path,
            Anticipation {
                request_tx,
                response_rx,
            },
        );

        AnticipatedRequest {
            request_rx: Some(request_rx),
            response_tx,
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }

        let state = self.state.lock().expect("poisoned");
        assert!(
            state.unexpected.is_empty(),
            "there are unexpected requests: {:?}",
            state.unexpected
        );
    }
}

/// Request which is going to come, or which already came, to the [`Server`].
pub struct AnticipatedRequest {
    request_rx: Option<oneshot::Receiver<Request<()>>>,
    response_tx: oneshot::Sender<Response<Full<Bytes>>>,
}

impl AnticipatedRequest {
    /// Wait for the request to come, and return it without the body.
    pub async fn expect(&mut self) -> Request<()> {
        let request_rx = self
            .request_rx
            .take()
            .expect("request was already expected");
        request_rx.await.expect("server is gone")
    }

    pub async fn respond(self, payload: impl Into<Bytes>) {
        self.respond_with(StatusCode::OK, payload).await;
    }

    pub async fn respond_with_status(self, status: StatusCode) {
        self.respond_with(status, Bytes::new()).await;
    }

    pub async fn respond_with(self, status: StatusCode, payload: impl Into<Bytes>) {
        log::info!("Responding with {status}.");
        let mut response = Response::new(Full::new(payload.into()));
        *response.status_mut() = status;

        // Request might have been abandoned by the client.
        self.response_tx.send(response).ok();
    }
}

async fn handle(
    state: Arc<Mutex<State>>,
    request: Request<hyper::body::Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    log::info!("Incoming request '{}'.", request.uri());

    let anticipation = state
        .lock()
        .expect("poisoned")
        .anticipations
        .remove(request.uri().path());

    let Some(anticipation) = anticipation else {
        log::warn!("Unexpected '{}'.", request.uri());
        state
            .lock()
            .expect("poisoned")
            .unexpected
            .push(request.uri().to_string());
        let mut response = Response::new(Full::new(Bytes::from_static(b"unexpected")));
        *response.status_mut() = StatusCode::IM_A_TEAPOT;
        return Ok(response);
    };

    let (parts, _) = request.into_parts();

    // Test might not be interested in the request itself.
    anticipation
        .request_tx
        .send(Request::from_parts(parts, ()))
        .ok();

    match anticipation.response_rx.await {
        Ok(response) => Ok(response),
        Err(_) => {
            log::warn!("Anticipated request was dropped without a response.");
            let mut response = Response::new(Full::new(Bytes::new()));
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            Ok(response)
        }
    }
}
