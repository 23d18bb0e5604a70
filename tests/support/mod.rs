#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use payload_compare::loader::LoadError;
use payload_compare::location::ResourceLocation;
use payload_compare::provider::ResourceProvider;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::time::Duration;

/// Scripted outcome for one resource location.
#[derive(Debug, Clone)]
pub enum Script {
    Ok(Value),
    OkAfter(Value, Duration),
    Unavailable(&'static str),
    UnavailableAfter(&'static str, Duration),
    Malformed,
}

/// In-memory provider that plays back scripted outcomes, so loader
/// scenarios run without network or filesystem access.
pub struct ScriptedProvider {
    scripts: Mutex<HashMap<String, Script>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
        }
    }

    pub fn with(self, location: &str, script: Script) -> Self {
        self.scripts.lock().insert(location.to_string(), script);
        self
    }

    pub fn set(&self, location: &str, script: Script) {
        self.scripts.lock().insert(location.to_string(), script);
    }
}

#[async_trait]
impl ResourceProvider for ScriptedProvider {
    async fn fetch(&self, location: &ResourceLocation) -> Result<Value, LoadError> {
        let script = self
            .scripts
            .lock()
            .get(&location.to_string())
            .cloned()
            .expect("location must be scripted");

        match script {
            Script::Ok(value) => Ok(value),
            Script::OkAfter(value, delay) => {
                tokio::time::sleep(delay).await;
                Ok(value)
            }
            Script::Unavailable(reason) => Err(unavailable(location, reason)),
            Script::UnavailableAfter(reason, delay) => {
                tokio::time::sleep(delay).await;
                Err(unavailable(location, reason))
            }
            Script::Malformed => Err(LoadError::Malformed {
                location: location.to_string(),
                source: serde_json::from_str::<Value>("not json").unwrap_err(),
            }),
        }
    }
}

fn unavailable(location: &ResourceLocation, reason: &str) -> LoadError {
    LoadError::Unavailable {
        location: location.to_string(),
        reason: reason.to_string(),
    }
}

/// Enveloped problem document in the shape served by the response API.
pub fn problem(title: &str, difficulty: &str, tags: &[&str]) -> Value {
    json!({
        "success": true,
        "data": {
            "title": title,
            "difficulty": difficulty,
            "tags": tags,
        }
    })
}
