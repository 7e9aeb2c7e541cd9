//! Benchmarks for the toggle engine.
//!
//! Measures single-line toggles on settings.local.php files of growing size,
//! the inclusion block swap, the Twig YAML round trip and a full pipeline run
//! against an in-memory filesystem.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use drupal_dev_mode::address::SettingAddress;
use drupal_dev_mode::defaults::{default_cache_settings, DEFAULT_TWIG_CONFIG_KEY};
use drupal_dev_mode::engine::{apply_block, toggle_many, toggle_one, BlockMode};
use drupal_dev_mode::filesystem::MemoryFS;
use drupal_dev_mode::matcher::block::COMMENTED_BLOCK;
use drupal_dev_mode::matcher::SettingsLocalBlock;
use drupal_dev_mode::merge::yaml::toggle_twig_debug;
use drupal_dev_mode::paths::{FilePathSet, ResolvedPath};
use drupal_dev_mode::phases::orchestrator::Pipeline;
use drupal_dev_mode::phases::RunContext;

/// A settings.local.php with `filler` unrelated settings around the cache bins.
fn settings_local(filler: usize) -> String {
    let mut text = String::from("<?php\n\n");
    for i in 0..filler {
        text.push_str(&format!("$settings['filler_{}'] = {};\n", i, i));
    }
    text.push_str("# $settings['cache']['bins']['render'] = 'cache.backend.null';\n");
    text.push_str("# $settings['cache']['bins']['page'] = 'cache.backend.null';\n");
    text.push_str("# $settings['cache']['bins']['dynamic_page_cache'] = 'cache.backend.null';\n");
    for i in 0..filler {
        text.push_str(&format!("// $config['filler.{}']['enabled'] = FALSE;\n", i));
    }
    text
}

fn bench_line_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_toggle");
    let render = SettingAddress::new(["cache", "bins", "render"]).unwrap();
    let addresses = default_cache_settings();

    for filler in [0, 100, 1000] {
        let text = settings_local(filler);

        group.bench_with_input(BenchmarkId::new("single", filler), &text, |b, text| {
            b.iter(|| toggle_one(black_box(text), &render).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("defaults", filler), &text, |b, text| {
            b.iter(|| toggle_many(black_box(text), &addresses).unwrap())
        });
    }

    group.finish();
}

fn bench_block_toggle(c: &mut Criterion) {
    let block = SettingsLocalBlock::default();
    let text = format!("<?php\n{}{}", "// filler\n".repeat(500), COMMENTED_BLOCK);

    c.bench_function("block_toggle", |b| {
        b.iter(|| apply_block(black_box(&text), &block, BlockMode::Toggle))
    });
}

fn bench_twig_toggle(c: &mut Criterion) {
    let yaml = "parameters:\n  http.response.debug_cacheability_headers: true\n  twig.config:\n    debug: false\n    auto_reload: false\nservices:\n  cache.backend.null:\n    class: Drupal\\Core\\Cache\\NullBackendFactory\n";

    c.bench_function("twig_toggle", |b| {
        b.iter(|| toggle_twig_debug(black_box(yaml), DEFAULT_TWIG_CONFIG_KEY).unwrap())
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let paths = FilePathSet {
        development_services_yaml: ResolvedPath::Found("/web/sites/development.services.yml".into()),
        settings_php: ResolvedPath::Found("/web/sites/default/settings.php".into()),
        settings_local_php: ResolvedPath::Found("/web/sites/default/settings.local.php".into()),
    };

    let mut fs = MemoryFS::new();
    fs.add_file_string("/web/sites/development.services.yml", "parameters: {}\n");
    fs.add_file_string(
        "/web/sites/default/settings.php",
        &format!("<?php\n{}", COMMENTED_BLOCK),
    );
    fs.add_file_string("/web/sites/default/settings.local.php", &settings_local(100));

    let pipeline = Pipeline::new();
    c.bench_function("pipeline_run", |b| {
        b.iter(|| {
            let mut ctx = RunContext::new(paths.clone());
            pipeline.run(&mut fs, &mut ctx)
        })
    });
}

criterion_group!(
    benches,
    bench_line_toggle,
    bench_block_toggle,
    bench_twig_toggle,
    bench_pipeline
);
criterion_main!(benches);
