//! HTTP server for interactive chart mode
//!
//! `treetile serve` → starts server, opens browser, renders a chart per
//! request. `GET /?data=movie` picks the dataset; a missing or unknown key
//! falls back to the default. Datasets are fetched fresh on every request,
//! so the page always reflects the remote data.

use crate::chart::{Chart, ChartConfig};
use crate::dataset::{self, Dataset, DATASETS};
use crate::{fetch, render};
use serde::{Deserialize, Serialize};
use tiny_http::{Header, Method, Request, Response, Server};

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self { ok: true, data: Some(data), error: None }
    }

    fn failure(error: String) -> Self {
        Self { ok: false, data: None, error: Some(error) }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct ChartParams {
    #[serde(default)]
    pub data: Option<String>,
}

/// Start server, open browser, render charts until killed.
pub fn start(port: u16, default_key: Option<String>) -> std::io::Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&addr)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let url = match &default_key {
        Some(key) => format!("http://localhost:{}/?data={}", port, key),
        None => format!("http://localhost:{}", port),
    };

    eprintln!("\n\x1b[1;32m🌳 Treetile\x1b[0m");
    eprintln!("   {}", url);
    eprintln!("   Datasets: {}\n", dataset_keys().join(", "));

    // Open browser
    let _ = open::that(&url);

    // Handle requests
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, default_key.as_deref()) {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

fn handle_request(request: Request, default_key: Option<&str>) -> std::io::Result<()> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("/");
    let method = request.method().clone();

    match (&method, path) {
        // Chart page
        (&Method::Get, "/") => {
            let params = parse_params(&url, default_key);
            let ds = dataset::select(params.data.as_deref());
            eprintln!("→ {}", ds.key);

            let html = render_page(ds)?;
            let response = Response::from_string(html)
                .with_header(Header::from_bytes(&b"Content-Type"[..], &b"text/html"[..]).unwrap());
            request.respond(response)
        }

        // API: list dataset descriptors
        (&Method::Get, "/api/datasets") => {
            let json = serde_json::to_string(&ApiResponse::success(&DATASETS))?;
            respond_json(request, json)
        }

        // API: chart model as JSON
        (&Method::Get, "/api/chart") => {
            let params = parse_params(&url, default_key);
            let ds = dataset::select(params.data.as_deref());

            let json = match build_chart(ds) {
                Ok(chart) => serde_json::to_string(&ApiResponse::success(chart))?,
                Err(e) => {
                    log::error!("chart build for '{}' failed: {:#}", ds.key, e);
                    serde_json::to_string(&ApiResponse::<Chart>::failure(e.to_string()))?
                }
            };
            respond_json(request, json)
        }

        // 404
        _ => {
            let response = Response::from_string("Not found").with_status_code(404);
            request.respond(response)
        }
    }
}

fn respond_json(request: Request, json: String) -> std::io::Result<()> {
    let response = Response::from_string(json).with_header(
        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
    );
    request.respond(response)
}

/// Pull `?data=` off the request URL. A request without the parameter takes
/// the server's default key; a garbled query string counts as absent.
fn parse_params(url: &str, default_key: Option<&str>) -> ChartParams {
    let query = url.split('?').nth(1).unwrap_or("");
    let mut params = serde_urlencoded::from_str::<ChartParams>(query).unwrap_or_default();
    if params.data.is_none() {
        params.data = default_key.map(str::to_string);
    }
    params
}

fn build_chart(ds: &Dataset) -> anyhow::Result<Chart> {
    let raw = fetch::dataset(ds)?;
    let root = raw.validate()?;
    Ok(Chart::build(ds, &root, &ChartConfig::default()))
}

/// Full page on success; on fetch or validation failure the heading and
/// description still render and the rest stays blank.
fn render_page(ds: &Dataset) -> std::io::Result<String> {
    let mut buf = Vec::new();
    match build_chart(ds) {
        Ok(chart) => render::html::write(&mut buf, &chart)?,
        Err(e) => {
            log::error!("chart build for '{}' failed: {:#}", ds.key, e);
            render::html::write_empty(&mut buf, ds)?;
        }
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn dataset_keys() -> Vec<&'static str> {
    DATASETS.iter().map(|d| d.key).collect()
}
