//! Nested-key toggling for development.services.yml
//!
//! This module reads boolean leaves out of a parsed YAML document, computes
//! the toggled Twig debug options and merges them back under
//! `parameters.<twig key>` without touching sibling keys.
//!
//! ## Example
//!
//! ```
//! use drupal_dev_mode::merge::yaml::toggle_twig_debug;
//!
//! let yaml = "parameters:\n  twig.config:\n    debug: true\n    auto_reload: true\n";
//! let (updated, config) = toggle_twig_debug(yaml, "twig.config").unwrap();
//! assert!(!config.debug);
//! assert!(updated.contains("debug: false"));
//! ```
//!
//! Comments and formatting in the original file are not preserved; the whole
//! document is re-serialized.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value as YamlValue};

use crate::error::{Error, Result};

/// Top-level key holding container parameters in a Drupal services file.
pub const PARAMETERS_KEY: &str = "parameters";

/// Look up the value at `path`, returning `None` if any key along the way is
/// missing or the value there is not a mapping.
pub fn value_at<'a>(doc: &'a YamlValue, path: &[&str]) -> Option<&'a YamlValue> {
    let mut current = doc;
    for key in path {
        current = current.as_mapping()?.get(*key)?;
    }
    Some(current)
}

/// Look up a boolean at `path`. Non-boolean values count as absent.
pub fn bool_at(doc: &YamlValue, path: &[&str]) -> Option<bool> {
    value_at(doc, path).and_then(YamlValue::as_bool)
}

/// Navigate to the mapping at `path`, creating missing or null intermediate
/// mappings along the way.
///
/// # Errors
///
/// Returns `Error::Document` if a value along the path exists but is not a
/// mapping (for example `parameters: 3`).
pub fn navigate_mapping<'a>(value: &'a mut YamlValue, path: &[&str]) -> Result<&'a mut Mapping> {
    let mut current = value;
    for key in path {
        let map = as_mapping_or_create(current, key)?;
        current = map
            .entry(YamlValue::String((*key).to_string()))
            .or_insert(YamlValue::Null);
    }

    as_mapping_or_create(current, path.last().copied().unwrap_or("<root>"))
}

fn as_mapping_or_create<'a>(value: &'a mut YamlValue, key: &str) -> Result<&'a mut Mapping> {
    if value.is_null() {
        *value = YamlValue::Mapping(Mapping::new());
    }

    match value {
        YamlValue::Mapping(map) => Ok(map),
        other => Err(Error::Document {
            message: format!(
                "expected a mapping while navigating to '{}', found {}",
                key,
                get_yaml_type_name(other)
            ),
        }),
    }
}

/// Merge `values` into the mapping at `path`.
///
/// If the target already holds a mapping, `values` are shallow-merged into it
/// and unrelated keys are kept. If it holds anything else (including null),
/// or does not exist, it becomes exactly `values`.
pub fn merge_into(doc: &mut YamlValue, path: &[&str], values: Mapping) -> Result<()> {
    let Some((leaf, parents)) = path.split_last() else {
        return Err(Error::Document {
            message: "cannot merge at an empty path".to_string(),
        });
    };

    let parent = navigate_mapping(doc, parents)?;
    let key = YamlValue::String((*leaf).to_string());

    match parent.get_mut(&key) {
        Some(YamlValue::Mapping(existing)) => {
            for (k, v) in values {
                existing.insert(k, v);
            }
        }
        Some(other) => *other = YamlValue::Mapping(values),
        None => {
            parent.insert(key, YamlValue::Mapping(values));
        }
    }

    Ok(())
}

/// The pair of Twig options toggled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwigDebugConfig {
    pub debug: bool,
    pub auto_reload: bool,
}

impl TwigDebugConfig {
    /// Compute the toggled options from the document's current values.
    ///
    /// The current `debug` leaf decides for both: when it is a boolean, each
    /// leaf is negated (a non-boolean `auto_reload` becomes `true`); when it is
    /// missing or not a boolean, both become `true`.
    pub fn toggled_from(doc: &YamlValue, twig_key: &str) -> Self {
        let debug = bool_at(doc, &[PARAMETERS_KEY, twig_key, "debug"]);
        let auto_reload = bool_at(doc, &[PARAMETERS_KEY, twig_key, "auto_reload"]);

        match debug {
            Some(debug) => Self {
                debug: !debug,
                auto_reload: auto_reload.map_or(true, |v| !v),
            },
            None => Self {
                debug: true,
                auto_reload: true,
            },
        }
    }

    pub fn to_mapping(self) -> Mapping {
        let mut map = Mapping::new();
        map.insert("debug".into(), self.debug.into());
        map.insert("auto_reload".into(), self.auto_reload.into());
        map
    }
}

/// Parse development.services.yml contents. An empty file is an empty
/// document.
pub fn parse_document(text: &str) -> Result<YamlValue> {
    if text.trim().is_empty() {
        return Ok(YamlValue::Null);
    }
    Ok(serde_yaml::from_str(text)?)
}

/// Toggle the Twig debug options in `text`, returning the re-serialized
/// document and the options written.
pub fn toggle_twig_debug(text: &str, twig_key: &str) -> Result<(String, TwigDebugConfig)> {
    let mut doc = parse_document(text)?;
    let config = TwigDebugConfig::toggled_from(&doc, twig_key);

    merge_into(&mut doc, &[PARAMETERS_KEY, twig_key], config.to_mapping())?;

    Ok((serde_yaml::to_string(&doc)?, config))
}

/// Get a human-readable name for a YAML value type
pub fn get_yaml_type_name(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "Null",
        YamlValue::Bool(_) => "Bool",
        YamlValue::Number(_) => "Number",
        YamlValue::String(_) => "String",
        YamlValue::Sequence(_) => "Sequence",
        YamlValue::Mapping(_) => "Mapping",
        YamlValue::Tagged(_) => "Tagged",
    }
}
