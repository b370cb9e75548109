#![allow(dead_code)]

use async_trait::async_trait;
use org_lookup::HttpError;
use org_lookup::application::services::RegistryService;
use org_lookup::config::RegistryConfig;
use org_lookup::domain::entities::LocalOrg;
use org_lookup::infrastructure::http::{HttpResponse, HttpTransport, RegistryHttpClient};
use org_lookup::infrastructure::persistence::MemoryOrgRepository;
use reqwest::header::HeaderMap;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use url::Url;

pub const BASE_URL: &str = "https://api.example.org/";
pub const HEARTBEAT_URL: &str = "https://api.example.org/heartbeat";

/// A request seen by [`ScriptedTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: HeaderMap,
}

/// In-process transport answering from a fixed URL -> response table.
///
/// Unknown URLs get a 404. Every request is recorded in order.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: HashMap<String, HttpResponse>,
    failing: HashSet<String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, response: HttpResponse) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }

    /// Makes requests to `url` fail at the transport level.
    pub fn fail(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn healthy(self) -> Self {
        self.route(HEARTBEAT_URL, HttpResponse::new(200, ""))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &Url, headers: &HeaderMap) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        if self.failing.contains(url.as_str()) {
            return Err(HttpError::transport(url.as_str(), "connection refused"));
        }

        Ok(self
            .routes
            .get(url.as_str())
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, "not found")))
    }
}

pub fn test_config(max_pages: u64, max_results_per_page: u64, max_redirects: u32) -> RegistryConfig {
    RegistryConfig {
        base_url: BASE_URL.to_string(),
        heartbeat_path: "heartbeat".to_string(),
        search_path: "organizations".to_string(),
        max_pages,
        max_results_per_page,
        max_redirects,
        timeout_seconds: 5,
        app_name: "Plan Builder".to_string(),
        app_email: "help@example.org".to_string(),
    }
}

pub fn page_url(query: &str, page: u64) -> String {
    format!("{BASE_URL}organizations?query={query}&page={page}")
}

/// A registry item with an id, a name and a country.
pub fn item(id: u32, name: &str) -> Value {
    json!({
        "id": format!("https://ror.org/{id:05}"),
        "name": name,
        "country": { "country_name": "Nowhere" }
    })
}

/// `count` valid items named `"Org <n>"`, numbered from `start`.
pub fn items(start: u32, count: u32) -> Vec<Value> {
    (start..start + count)
        .map(|n| item(n, &format!("Org {n}")))
        .collect()
}

pub fn page_response(number_of_results: u64, items: Vec<Value>) -> HttpResponse {
    let body = json!({
        "number_of_results": number_of_results,
        "time_taken": 5,
        "items": items,
        "meta": { "types": [], "countries": [] }
    });
    HttpResponse::new(200, body.to_string())
}

pub fn local_orgs() -> MemoryOrgRepository {
    MemoryOrgRepository::new(vec![
        LocalOrg::new("Example College", "EXC"),
        LocalOrg::new("Sample Institute of Technology", "SIT"),
        LocalOrg::new("University of Examples", "UoE"),
        LocalOrg::other("Example Other"),
    ])
}

pub fn create_test_service(
    config: RegistryConfig,
    transport: Arc<ScriptedTransport>,
) -> RegistryService<MemoryOrgRepository> {
    let client = RegistryHttpClient::new(Arc::new(config), transport);
    RegistryService::new(client, Arc::new(local_orgs()))
}
