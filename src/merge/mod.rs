//! Structured-document merge operations
//!
//! Unlike the PHP settings files, which are edited as text, the services YAML
//! file is parsed, changed as a tree and serialized again. The format-specific
//! logic lives in a submodule per format.
//!
//! - YAML (yaml.rs) - Twig debug options under `parameters`

pub mod yaml;

pub use yaml::TwigDebugConfig;
