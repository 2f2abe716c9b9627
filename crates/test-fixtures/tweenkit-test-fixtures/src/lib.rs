//! Shared JSON reference data for tweenkit tests. Files live under the
//! workspace `fixtures/` directory and are indexed by `manifest.json`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    easing: HashMap<String, String>,
    interpolation: HashMap<String, String>,
}

/// Resolve `name` in one manifest section and parse the file it points at.
fn load_entry<T: DeserializeOwned>(
    section: &HashMap<String, String>,
    kind: &str,
    name: &str,
) -> Result<T> {
    let rel = section
        .get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))?;
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../../fixtures")
        .join(rel);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {kind} fixture {rel}"))
}

/// Reference tables of `[x, eased(x)]` samples keyed by easing name.
#[derive(Debug, Deserialize)]
pub struct EasingSamples {
    pub tolerance: f32,
    pub curves: HashMap<String, Vec<[f32; 2]>>,
}

/// A scalar interpolation request driven at a fixed step, with the exact
/// callback sequence it must produce. `request` is left as raw JSON so the
/// consumer deserializes it into its own request type.
#[derive(Debug, Deserialize)]
pub struct InterpolationScenario {
    pub request: serde_json::Value,
    pub dt: f32,
    pub expected: Vec<f32>,
}

pub mod easing {
    use super::*;

    pub fn samples(name: &str) -> Result<EasingSamples> {
        load_entry(&MANIFEST.easing, "easing", name)
    }
}

pub mod interpolation {
    use super::*;

    pub fn scenarios(name: &str) -> Result<HashMap<String, InterpolationScenario>> {
        load_entry(&MANIFEST.interpolation, "interpolation", name)
    }
}
