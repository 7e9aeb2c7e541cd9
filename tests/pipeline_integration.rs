//! Integration tests running the full pipeline against files on disk.

mod common;

use common::prelude::*;
use drupal_dev_mode::config::DevModeConfig;
use drupal_dev_mode::filesystem::DiskFS;
use drupal_dev_mode::paths::{find_install_path, FilePathSet};
use drupal_dev_mode::phases::orchestrator::{Pipeline, PipelineOutcome};
use drupal_dev_mode::phases::{PipelineEvent, PipelineState, RunContext, Stage};
use drupal_dev_mode::status::{self, BlockStatus, Inspection};

fn resolve(fixture: &TestFixture, config: &DevModeConfig) -> FilePathSet {
    let install = find_install_path(fixture.path(), &config.install_dirs);
    FilePathSet::resolve(install.as_deref(), &config.site)
}

fn run(fixture: &TestFixture, config: &DevModeConfig) -> (PipelineOutcome, Vec<String>) {
    let mut ctx = RunContext::new(resolve(fixture, config));
    let outcome = Pipeline::from_config(config).run(&mut DiskFS, &mut ctx);
    (outcome, ctx.into_log().lines().to_vec())
}

#[test]
fn test_toggle_on_enables_everything() {
    let fixture = TestFixture::new().with_drupal("web");
    let config = DevModeConfig::default();

    let (outcome, log) = run(&fixture, &config);
    assert!(outcome.is_success());
    assert_eq!(log.len(), 6);

    assert!(fixture
        .read_sites_file("development.services.yml")
        .contains("debug: true"));
    assert_eq!(
        fixture.read_sites_file("default/settings.php"),
        drupal::SETTINGS_PHP_ENABLED
    );

    let local = fixture.read_sites_file("default/settings.local.php");
    assert!(local.contains("\n$settings['cache']['bins']['render'] = 'cache.backend.null';"));
    assert!(local.contains("\n$settings['cache']['bins']['page'] = 'cache.backend.null';"));
    // Not in the default list, so untouched
    assert!(local
        .contains("# $settings['cache']['bins']['discovery_migration'] = 'cache.backend.memory';"));
}

#[test]
fn test_toggle_twice_restores_php_files() {
    let fixture = TestFixture::new().with_drupal("docroot");
    let config = DevModeConfig::default();

    run(&fixture, &config);
    let (outcome, _) = run(&fixture, &config);

    assert!(outcome.is_success());
    assert_eq!(
        fixture.read_sites_file("default/settings.php"),
        drupal::SETTINGS_PHP
    );
    assert_eq!(
        fixture.read_sites_file("default/settings.local.php"),
        drupal::SETTINGS_LOCAL_PHP
    );

    let report = status::inspect(&DiskFS, &resolve(&fixture, &config), &config);
    let twig = report.twig.as_inspected().unwrap();
    assert_eq!(twig.debug, Some(false));
    assert_eq!(twig.auto_reload, Some(false));
}

#[test]
fn test_missing_settings_local_stops_before_writing() {
    let fixture = TestFixture::new()
        .with_drupal("web")
        .without_file("web/sites/default/settings.local.php");
    let config = DevModeConfig::default();

    let mut names = Vec::new();
    let outcome = {
        let mut ctx = RunContext::new(resolve(&fixture, &config))
            .with_sink(|event: &PipelineEvent| names.push(event.name()));
        Pipeline::from_config(&config).run(&mut DiskFS, &mut ctx)
    };

    assert_eq!(outcome.state(), PipelineState::Failed(Stage::Paths));
    assert_eq!(names, vec!["paths_verify_failed"]);
    assert_eq!(
        fixture.read_sites_file("development.services.yml"),
        drupal::DEVELOPMENT_SERVICES
    );
    assert_eq!(
        fixture.read_sites_file("default/settings.php"),
        drupal::SETTINGS_PHP
    );
}

#[test]
fn test_no_install_reports_all_paths_false() {
    let fixture = TestFixture::new();
    let config = DevModeConfig::default();

    let (outcome, log) = run(&fixture, &config);
    assert!(!outcome.is_success());
    assert_eq!(
        log,
        vec![
            "Unmet dependencies for Drupal dev mode to be enabled/disabled!",
            "development.services.yml path is false",
            "settings.php path is false",
            "settings.local.php path is false",
        ]
    );
}

#[test]
fn test_custom_site_and_install_dir() {
    let fixture = TestFixture::new().with_drupal_site("public_html", "example.org");
    let config = DevModeConfig {
        install_dirs: vec!["public_html".to_string()],
        site: "example.org".to_string(),
        ..DevModeConfig::default()
    };

    let (outcome, _) = run(&fixture, &config);
    assert!(outcome.is_success());
    assert_eq!(
        fixture.read_sites_file("example.org/settings.php"),
        drupal::SETTINGS_PHP_ENABLED
    );
}

#[test]
fn test_settings_without_block_keeps_twig_change() {
    let fixture = TestFixture::new()
        .with_drupal("web")
        .with_file("web/sites/default/settings.php", "<?php\n$databases = [];\n");
    let config = DevModeConfig::default();

    let (outcome, log) = run(&fixture, &config);
    match outcome {
        PipelineOutcome::Failed { stage, .. } => assert_eq!(stage, Stage::Settings),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(log
        .last()
        .unwrap()
        .contains("Unable to match a settings.local.php inclusion code block"));
    assert!(fixture
        .read_sites_file("development.services.yml")
        .contains("debug: true"));
    assert_eq!(
        fixture.read_sites_file("default/settings.local.php"),
        drupal::SETTINGS_LOCAL_PHP
    );

    let report = status::inspect(&DiskFS, &resolve(&fixture, &config), &config);
    assert!(matches!(
        report.block,
        Inspection::Inspected(BlockStatus::NotFound)
    ));
}
