//! Preset sample texts for the sample triggers.
//!
//! Loaded from `config/samples.json` (embedded at compile time, validated by build.rs).

use std::sync::OnceLock;

use serde::Deserialize;

/// A canned example the user can load into the input.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Sample {
    pub label: String,
    pub text: String,
}

fn load_builtin_samples() -> Vec<Sample> {
    let json = include_str!("../../config/samples.json");
    serde_json::from_str(json).unwrap_or_else(|e| {
        log::error!("Embedded samples.json is invalid: {}", e);
        Vec::new()
    })
}

static BUILTIN_SAMPLES: OnceLock<Vec<Sample>> = OnceLock::new();

/// Returns the built-in samples, parsing them on first access.
pub fn builtin_samples() -> &'static [Sample] {
    BUILTIN_SAMPLES.get_or_init(load_builtin_samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_samples_load() {
        let samples = builtin_samples();
        assert!(!samples.is_empty());
        assert!(samples.len() <= 9);
        for s in samples {
            assert!(!s.label.is_empty());
            assert!(!s.text.trim().is_empty());
        }
    }
}
