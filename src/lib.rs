//! # Drupal Dev Mode Library
//!
//! This library switches a local Drupal site in and out of "dev mode". It is
//! used by the `toggle-dev-mode` command-line tool, but every piece works on
//! plain strings or through the [`filesystem::FileStore`] trait, so it can be
//! driven from other programs and tested without touching disk.
//!
//! ## Quick Example
//!
//! ```
//! use drupal_dev_mode::address::SettingAddress;
//! use drupal_dev_mode::engine::toggle_one;
//!
//! let render = SettingAddress::new(["cache", "bins", "render"]).unwrap();
//! let php = "# $settings['cache']['bins']['render'] = 'cache.backend.null';\n";
//!
//! let enabled = toggle_one(php, &render).unwrap();
//! assert_eq!(enabled, "$settings['cache']['bins']['render'] = 'cache.backend.null';\n");
//!
//! // Toggling again restores the original text
//! assert_eq!(toggle_one(&enabled, &render).unwrap(), php);
//! ```
//!
//! ## Core Concepts
//!
//! - **Addresses (`address`)**: key paths such as `cache.bins.render`, rendered
//!   as `$settings['cache']['bins']['render']`.
//! - **Matchers (`matcher`)**: find single-line settings and the
//!   settings.local.php inclusion block, commented or not.
//! - **Engine (`engine`)**: turn matcher findings into new file contents.
//! - **Merge (`merge`)**: structured edits of development.services.yml.
//! - **Paths (`paths`)**: locate the Drupal install and its three files.
//! - **Phases (`phases`)**: the staged pipeline that applies all of the above.
//!
//! ## Execution Flow
//!
//! [`phases::orchestrator::Pipeline::run`] verifies that all three files were
//! found, then toggles Twig debugging, the settings.local.php inclusion and
//! the cache bin overrides, in that order. Each stage starts only after the
//! previous one reported success.

pub mod address;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod filesystem;
pub mod matcher;
pub mod merge;
pub mod output;
pub mod paths;
pub mod phases;
pub mod status;

#[cfg(test)]
mod toggle_proptest;
