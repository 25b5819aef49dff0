//! Shared test utilities.
//!
//! - `FakeCatalogApi`: in-memory `CatalogApi` that records every call
//! - `ScriptedDialogs`: `Dialogs` with pre-programmed confirmation answers
//! - `StubServer`: an axum server on `127.0.0.1:0` that records requests and
//!   answers with configurable responses, for exercising `HttpCatalogApi`
//!   over real HTTP
//! - `EnvGuard`: serialises tests that touch process environment variables

#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use catalog_admin::catalog::{ApiError, CatalogApi, ImageRef, Service, ServicePayload};
use catalog_admin::panel::Dialogs;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::net::TcpListener;

// ==================== Fixtures ====================

pub fn service(id: &str, nome: &str, images: &[&str]) -> Service {
    Service {
        id: id.to_string(),
        nome: nome.to_string(),
        descricao: format!("Descrição de {}", nome),
        preco: Some(30.0),
        duracao: Some(45),
        imagens: images
            .iter()
            .map(|url| ImageRef::Object {
                url: (*url).to_string(),
            })
            .collect(),
    }
}

// ==================== Fake API ====================

/// A request the panel made against the fake API.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(ServicePayload),
    Update(String, ServicePayload),
    Delete(String),
}

#[derive(Default)]
struct FakeState {
    services: Vec<Service>,
    calls: Vec<Call>,
    next_id: u32,
    fail_list: bool,
    /// Status and optional `message` returned by every mutation
    fail_mutations: Option<(u16, Option<String>)>,
}

/// In-memory catalog; clones share state.
#[derive(Clone, Default)]
pub struct FakeCatalogApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeCatalogApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_services(services: Vec<Service>) -> Self {
        let api = Self::new();
        api.lock().services = services;
        api
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Number of list requests made so far
    pub fn list_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::List))
            .count()
    }

    /// Calls other than `List`
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::List))
            .collect()
    }

    pub fn services(&self) -> Vec<Service> {
        self.lock().services.clone()
    }

    pub fn fail_list(&self) {
        self.lock().fail_list = true;
    }

    pub fn fail_mutations_with(&self, status: u16, message: Option<&str>) {
        self.lock().fail_mutations = Some((status, message.map(str::to_string)));
    }

    fn mutation_error(state: &FakeState) -> Result<(), ApiError> {
        match &state.fail_mutations {
            Some((status, message)) => Err(ApiError::Server {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn stored(id: String, payload: &ServicePayload) -> Service {
    Service {
        id,
        nome: payload.nome.clone(),
        descricao: payload.descricao.clone(),
        preco: Some(payload.preco),
        duracao: Some(payload.duracao),
        imagens: payload
            .imagens
            .iter()
            .map(|src| ImageRef::Object { url: src.clone() })
            .collect(),
    }
}

#[async_trait]
impl CatalogApi for FakeCatalogApi {
    async fn list(&self) -> Result<Vec<Service>, ApiError> {
        let mut state = self.lock();
        state.calls.push(Call::List);
        if state.fail_list {
            return Err(ApiError::Server {
                status: 500,
                message: None,
            });
        }
        Ok(state.services.clone())
    }

    async fn create(&self, payload: &ServicePayload) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.calls.push(Call::Create(payload.clone()));
        Self::mutation_error(&state)?;
        state.next_id += 1;
        let id = format!("new-{}", state.next_id);
        state.services.push(stored(id, payload));
        Ok(())
    }

    async fn update(&self, id: &str, payload: &ServicePayload) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.calls.push(Call::Update(id.to_string(), payload.clone()));
        Self::mutation_error(&state)?;
        if let Some(existing) = state.services.iter_mut().find(|s| s.id == id) {
            *existing = stored(id.to_string(), payload);
            Ok(())
        } else {
            Err(ApiError::Server {
                status: 404,
                message: Some("Serviço não encontrado".to_string()),
            })
        }
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.calls.push(Call::Delete(id.to_string()));
        Self::mutation_error(&state)?;
        state.services.retain(|s| s.id != id);
        Ok(())
    }
}

// ==================== Dialogs ====================

/// Records alerts and confirmation prompts; confirmations are answered from
/// a script and default to "no".
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    pub alerts: Vec<String>,
    pub confirms: Vec<String>,
    answers: VecDeque<bool>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

// ==================== Stub HTTP server ====================

/// A request received by the stub server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Default)]
struct StubInner {
    requests: Vec<Recorded>,
    /// Status and body per method; unset methods answer 200 with `[]` for
    /// GET and `{}` otherwise
    responses: HashMap<Method, (u16, String)>,
}

#[derive(Clone, Default)]
struct Stub {
    inner: Arc<Mutex<StubInner>>,
}

pub struct StubServer {
    pub base_url: String,
    stub: Stub,
}

impl StubServer {
    /// Bind to an ephemeral port and start serving in the background.
    pub async fn start() -> StubServer {
        let stub = Stub::default();
        let app = Router::new().fallback(record).with_state(stub.clone());

        let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
            .await
            .unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("stub server error: {}", e);
            }
        });

        StubServer {
            base_url: format!("http://{}:{}/api", addr.ip(), addr.port()),
            stub,
        }
    }

    pub fn respond(&self, method: Method, status: u16, body: &str) {
        self.stub
            .inner
            .lock()
            .unwrap()
            .responses
            .insert(method, (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.stub.inner.lock().unwrap().requests.clone()
    }
}

async fn record(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let mut inner = stub.inner.lock().unwrap();
    inner.requests.push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    let (status, body) = inner.responses.get(&method).cloned().unwrap_or_else(|| {
        if method == Method::GET {
            (200, "[]".to_string())
        } else {
            (200, "{}".to_string())
        }
    });

    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

// ==================== Environment ====================

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Sets environment variables for the duration of a test and restores them
/// on drop. Only one guard exists at a time.
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn set(vars: &[(&'static str, Option<&str>)]) -> EnvGuard {
        let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut saved = Vec::new();
        for (name, value) in vars {
            saved.push((*name, std::env::var(name).ok()));
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
        EnvGuard { saved, _lock: lock }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
    }
}
