use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::fetch::{FetchError, Fetcher};

/// In-memory [`Fetcher`] serving canned bodies and recording every URL asked for.
/// Unknown URLs answer 404.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    responses: HashMap<String, Result<Value, u16>>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), Ok(body));
        self
    }

    pub fn fail(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), Err(status));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, url: &str) -> usize {
        self.requests().iter().filter(|r| r.as_str() == url).count()
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.responses.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status {
                status: *status,
                url: url.to_string(),
            }),
            None => Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

pub const API: &str = "http://api.test";

pub fn character_json(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {"name": "Earth (C-137)", "url": format!("{API}/location/1")},
        "location": {"name": "Citadel of Ricks", "url": format!("{API}/location/3")},
        "image": format!("{API}/character/avatar/{id}.jpeg"),
        "episode": [format!("{API}/episode/1"), format!("{API}/episode/2")],
    })
}

pub fn location_json(id: u32, name: &str, residents: &[u32]) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "Planet",
        "dimension": "Dimension C-137",
        "residents": residents
            .iter()
            .map(|r| format!("{API}/character/{r}"))
            .collect::<Vec<_>>(),
    })
}

pub fn episode_json(id: u32, name: &str, characters: &[u32]) -> Value {
    json!({
        "id": id,
        "name": name,
        "air_date": "December 2, 2013",
        "episode": format!("S01E{id:02}"),
        "characters": characters
            .iter()
            .map(|c| format!("{API}/character/{c}"))
            .collect::<Vec<_>>(),
    })
}

pub fn listing(results: Vec<Value>) -> Value {
    let count = results.len();
    json!({"info": {"count": count, "pages": 1}, "results": results})
}
