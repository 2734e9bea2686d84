//! Build script: validates samples.json at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let samples_path: PathBuf = [&manifest_dir, "config", "samples.json"].iter().collect();
    println!("cargo:rerun-if-changed={}", samples_path.display());
    let json = std::fs::read_to_string(&samples_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. samples.json must exist and be valid.",
            samples_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    struct SampleEntry {
        label: String,
        text: String,
    }
    let entries: Vec<SampleEntry> = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!("samples.json is invalid JSON: {}. Fix the file and rebuild.", e)
    });
    for entry in &entries {
        if entry.label.trim().is_empty() || entry.text.trim().is_empty() {
            panic!("samples.json: every sample needs a non-empty label and text");
        }
        if entry.text.chars().count() > 10_000 {
            panic!(
                "samples.json: sample '{}' exceeds 10,000 characters",
                entry.label
            );
        }
    }
    if entries.len() > 9 {
        panic!("samples.json: at most 9 samples are supported (F1-F9)");
    }
}
