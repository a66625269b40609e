#![allow(dead_code)]

use std::collections::HashMap;
use std::process::Command;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

/// In-process stand-in for the lab backend, serving the `/api` routes the
/// client talks to. Runs until the test process exits.
pub struct FakeBackend {
    pub base_url: String,
    pub state: BackendState,
}

#[derive(Clone, Default)]
pub struct BackendState {
    pub findings: Arc<Mutex<Vec<Value>>>,
    pub runs: Arc<Mutex<Vec<Value>>>,
}

impl FakeBackend {
    pub fn posted_findings(&self) -> Vec<Value> {
        self.state.findings.lock().unwrap().clone()
    }

    pub fn runs(&self) -> Vec<Value> {
        self.state.runs.lock().unwrap().clone()
    }
}

pub fn spawn_backend(seed: Vec<Value>) -> Result<FakeBackend> {
    let state = BackendState::default();
    state.findings.lock().unwrap().extend(seed);
    let app = app(state.clone());

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("build backend runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind backend");
            tx.send(listener.local_addr().expect("backend addr"))
                .expect("report backend addr");
            axum::serve(listener, app).await.expect("serve backend");
        });
    });

    let addr = rx
        .recv_timeout(Duration::from_secs(5))
        .context("backend did not start")?;
    Ok(FakeBackend {
        base_url: format!("http://{}/api", addr),
        state,
    })
}

/// A base URL nothing is listening on.
pub fn dead_base_url() -> Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind probe port")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}/api", addr))
}

fn app(state: BackendState) -> Router {
    Router::new()
        .route("/api/findings", get(list_findings).post(create_finding))
        .route("/api/run-experiment", post(run_experiment))
        .route("/api/stats", get(stats))
        .route("/api/reactions", get(reactions))
        .route("/api/reactions/:id", get(reaction))
        .route("/api/tools/:id", get(tool))
        .route("/api/experiments/:id", get(experiment))
        .route("/api/calculate/molarity", post(molarity))
        .route("/api/search", get(search))
        .with_state(state)
}

async fn list_findings(State(state): State<BackendState>) -> Json<Value> {
    Json(Value::Array(state.findings.lock().unwrap().clone()))
}

async fn create_finding(
    State(state): State<BackendState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let id = body.get("id").cloned().unwrap_or(Value::Null);
    state.findings.lock().unwrap().push(body);
    (StatusCode::CREATED, Json(json!({ "success": true, "id": id })))
}

async fn run_experiment(
    State(state): State<BackendState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let chemicals: Vec<String> = body
        .get("chemicals")
        .and_then(|v| v.as_array())
        .map(|a| a.iter().filter_map(|c| c.as_str().map(str::to_string)).collect())
        .unwrap_or_default();
    state.runs.lock().unwrap().push(body.clone());

    if chemicals.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No chemicals selected" })),
        );
    }

    let heat = body.get("heat").and_then(|v| v.as_u64()).unwrap_or(0);
    let reaction = if chemicals.iter().any(|c| c == "Zn") && chemicals.iter().any(|c| c == "HCl") {
        json!({
            "name": "Zinc and Acid",
            "equation": "Zn + 2HCl -> ZnCl2 + H2",
            "type": "Exothermic",
            "energyRelease": 153.9,
            "category": "Single Replacement",
        })
    } else {
        Value::Null
    };

    (
        StatusCode::OK,
        Json(json!({
            "observation": format!("Mixed {}", chemicals.join(" and ")),
            "result": "Reaction observed",
            "safety": "Wear goggles",
            "measurements": {
                "temperature_c": 20.0 + heat as f64 * 5.0,
                "ph": 7.0,
                "rate": "moderate",
                "heat_level": heat,
            },
            "reaction": reaction,
            "toolNotes": [],
            "timestamp": "2024-06-01T09:30:00Z",
        })),
    )
}

async fn stats() -> Json<Value> {
    Json(json!({
        "total_reactions": 2,
        "total_tools": 5,
        "total_experiments": 3,
        "categories": 2,
        "exothermic": 1,
        "endothermic": 1,
    }))
}

async fn reactions(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let all = vec![
        json!({
            "id": "r1",
            "name": "Neutralization",
            "equation": "HCl + NaOH -> NaCl + H2O",
            "category": "Acid-Base",
            "type": "Exothermic",
        }),
        json!({
            "id": "r2",
            "name": "Photosynthesis",
            "equation": "6CO2 + 6H2O -> C6H12O6 + 6O2",
            "category": "Synthesis",
            "type": "Endothermic",
        }),
    ];
    let shown = match params.get("category") {
        Some(cat) => all
            .into_iter()
            .filter(|r| r["category"].as_str() == Some(cat.as_str()))
            .collect(),
        None => all,
    };
    Json(Value::Array(shown))
}

/// Echoes the decoded id so callers can check how it was encoded.
async fn reaction(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "missing" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Reaction not found" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "id": id, "name": "Neutralization", "category": "Acid-Base" })),
    )
}

async fn tool(Path(id): Path<String>) -> Json<Value> {
    Json(json!({ "id": id, "name": "Bunsen Burner", "category": "Heating" }))
}

async fn experiment(Path(id): Path<String>) -> Json<Value> {
    Json(json!({ "id": id, "lab": "chemistry", "name": "Flame Test", "chemicals": ["CuCl2"] }))
}

async fn molarity(Json(body): Json<Value>) -> Json<Value> {
    let moles = body["moles"].as_f64().unwrap_or(0.0);
    let volume = body["volume"].as_f64().unwrap_or(1.0);
    Json(json!({ "moles": moles, "volume": volume, "molarity": moles / volume }))
}

async fn search() -> (StatusCode, Json<Value>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "error": "search index offline" })),
    )
}

pub fn run_vlab(cwd: &std::path::Path, args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_vlab"))
        .args(args)
        .current_dir(cwd)
        .env_remove("VLAB_API")
        .output()
        .with_context(|| format!("run vlab {:?}", args))?;

    if !out.status.success() {
        anyhow::bail!(
            "vlab {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}
