//! Integration tests for docgate against fixture trees on disk

use docgate::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write(base: &Path, path: &str, content: &str) {
    let full = base.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

/// A small docs site where every link resolves.
fn healthy_site() -> TempDir {
    let temp = TempDir::new().unwrap();
    let base = temp.path();

    write(
        base,
        "docs/index.mdx",
        r#"import Card from "@site/components/Card";

# Welcome

Start with the [installation guide](/start/install) or the [tutorials](./tutorials/).

<Card title="Guides" href="/guides" />

![Architecture](/images/architecture.svg)

More at https://example.com/docs.
"#,
    );
    write(base, "docs/start/install.md", "# Install\n\nBack to [home](../#top) or [top](#install).\n");
    write(base, "docs/tutorials/index.mdx", "# Tutorials\n\nSee the [API](../api/overview).\n");
    write(base, "docs/guides/index.md", "# Guides\n");
    write(
        base,
        "docs/api/overview.ipynb",
        r##"{
  "cells": [
    {"cell_type": "markdown", "source": ["# Overview\n", "Read [install](/start/install) first.\n"]},
    {"cell_type": "code", "source": ["print('[x](/nowhere)')"], "outputs": []}
  ],
  "metadata": {},
  "nbformat": 4,
  "nbformat_minor": 5
}"##,
    );
    write(base, "public/images/architecture.svg", "<svg/>");
    temp
}

async fn check(base: &Path, config: CheckerConfig) -> RunReport {
    config.validate_in(base).unwrap();
    LinkChecker::new(config, FsContentStore::new(base))
        .unwrap()
        .run()
        .await
        .unwrap()
}

// ==================== Library Tests ====================

#[tokio::test]
async fn test_healthy_site_passes() {
    let site = healthy_site();
    let report = check(site.path(), CheckerConfig::default()).await;

    assert!(report.passed, "{:?}", report.broken_links().collect::<Vec<_>>());
    assert_eq!(report.summary.documents, 5);
    assert_eq!(report.summary.passed, 5);
}

#[tokio::test]
async fn test_broken_links_reported_per_reference() {
    let site = healthy_site();
    write(
        site.path(),
        "docs/start/next.md",
        "Go [here](/missing) and [there](./gone#part) or [home](/).\n",
    );
    let report = check(site.path(), CheckerConfig::default()).await;

    assert!(!report.passed);
    let formatted = ReportFormatter::format(&report, OutputFormat::Human);
    assert!(formatted.contains("❌ docs/start/next.md: Could not find link '/missing'"));
    assert!(formatted.contains("❌ docs/start/next.md: Could not find link './gone'"));
    // "/" collapses onto the content root and finds docs/index.mdx
    assert!(!formatted.contains("Could not find link '/'"));
    assert_eq!(report.summary.broken_links, 2);
}

#[tokio::test]
async fn test_config_file_policies() {
    let site = healthy_site();
    write(site.path(), "docs/errors-index.mdx", "See [errors](/errors).\n");
    write(site.path(), "docs/api/qiskit/circuit.mdx", "[gen](/api/qiskit/generated)\n");
    write(site.path(), "docs/legacy.md", "[old](/old)\n");
    write(
        site.path(),
        "docgate.yaml",
        "synthetic_paths:\n  - docs/errors.mdx\nskipped_prefixes:\n  - docs/api/qiskit\nignored_origins:\n  - docs/legacy.md\n",
    );

    let config = CheckerConfig::load(&site.path().join("docgate.yaml")).unwrap();
    let report = check(site.path(), config).await;

    assert!(report.passed, "{:?}", report.broken_links().collect::<Vec<_>>());
    assert_eq!(report.summary.skipped, 2);
}

#[tokio::test]
async fn test_bad_notebook_does_not_hide_other_results() {
    let site = healthy_site();
    write(site.path(), "docs/broken.ipynb", "{\"cells\": [");
    write(site.path(), "docs/bad-link.md", "[x](/x)\n");
    let report = check(site.path(), CheckerConfig::default()).await;

    assert!(!report.passed);
    assert_eq!(report.summary.errored, 1);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.passed, 5);
}

// ==================== CLI Tests ====================

fn docgate(base: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_docgate"))
        .arg("--root")
        .arg(base)
        .args(args)
        .env_remove("DOCGATE_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_cli_exit_success() {
    let site = healthy_site();
    let output = docgate(site.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("All links resolved"));
}

#[test]
fn test_cli_exit_failure() {
    let site = healthy_site();
    write(site.path(), "docs/a.mdx", "[gone](/missing)\n");
    let output = docgate(site.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ docs/a.mdx: Could not find link '/missing'"));
    assert!(stdout.contains("Some links appear broken 💔"));
}

#[test]
fn test_cli_json_output() {
    let site = healthy_site();
    write(site.path(), "docs/a.mdx", "[gone](/missing)\n");
    let output = docgate(site.path(), &["--format", "json"]);

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["passed"], false);
    assert_eq!(report["summary"]["broken_links"], 1);
}

#[test]
fn test_cli_config_errors_exit_2() {
    let site = healthy_site();

    let output = docgate(site.path(), &["--content-root", "nope"]);
    assert_eq!(output.status.code(), Some(2));

    write(site.path(), "docgate.yaml", "content_extensions: []\n");
    let output = docgate(site.path(), &[]);
    assert_eq!(output.status.code(), Some(2));

    let output = docgate(site.path(), &["--config", "missing.yaml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_unknown_format_exit_2() {
    let site = healthy_site();
    let output = docgate(site.path(), &["--format", "yaml"]);
    assert_eq!(output.status.code(), Some(2));
}
