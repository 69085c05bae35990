//! Custom cargo commands for the sift workspace.
//!
//! Usage:
//!   cargo xtask verify      - Run full verification suite
//!   cargo xtask test        - Run tests under both feature configurations
//!   cargo xtask check       - Quick check (check + test + clippy)
//!   cargo xtask build-wasm  - Build the browser bundle with wasm-pack
//!   cargo xtask demo        - Assemble a runnable demo page in target/demo
//!   cargo xtask bench       - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("build-wasm") => build_wasm()?,
        Some("demo") => demo()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify      Run full verification suite (tests + clippy + CLI + wasm)
  test        Run tests under both feature configurations
  check       Quick check (cargo check + test + clippy)
  build-wasm  Build the browser bundle (wasm-pack, then wasm-opt if installed)
  demo        Build the bundle and assemble a demo page in target/demo
  bench       Run benchmarks
"#
    );
}

/// Everything that has to pass before a release.
fn verify() -> Result<()> {
    println!("sift verification suite\n");

    println!("[1/5] tests, default features");
    run_cargo(&["test", "--quiet"])?;

    // The ASCII-only normalizer path only compiles with defaults off.
    println!("[2/5] tests, no default features");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;

    println!("[3/5] clippy");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("[4/5] CLI smoke test against the bundled fixture");
    run_cargo(&[
        "run",
        "--quiet",
        "--",
        "search",
        "fixtures/articles.json",
        "rust",
        "--json",
    ])?;

    println!("[5/5] wasm bundle");
    build_wasm()?;

    println!("\n✓ everything passed");
    Ok(())
}

/// Run the test suite under both feature configurations; a plain
/// `cargo test` never touches the no-default-features code paths.
fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--no-default-features"])
}

/// The fast loop: compile, test, lint.
fn check() -> Result<()> {
    run_cargo(&["check"])?;
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ check, test, clippy all clean");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Build the browser bundle.
///
/// Runs wasm-pack with the wasm feature set, then wasm-opt as a separate
/// step. wasm-opt is disabled inside wasm-pack (see Cargo.toml) because
/// recent binaryen releases reject the flags wasm-pack passes.
fn build_wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--no-default-features",
            "--features",
            "wasm",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack. Install it with: cargo install wasm-pack")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    let bundle = root.join("pkg/sift_bg.wasm");

    // Shrink the bundle when binaryen is around
    if Command::new("wasm-opt").arg("--version").output().is_ok() {
        let status = Command::new("wasm-opt")
            .arg("-Os")
            .arg(&bundle)
            .arg("-o")
            .arg(&bundle)
            .status()
            .context("Failed to run wasm-opt")?;

        if !status.success() {
            bail!("wasm-opt failed");
        }
    } else {
        println!("  (wasm-opt not installed, skipping size optimization)");
    }

    if let Ok(meta) = std::fs::metadata(&bundle) {
        println!("  pkg/sift_bg.wasm: {:.1} KiB", meta.len() as f64 / 1024.0);
    }

    Ok(())
}

/// Assemble a runnable demo page under target/demo.
///
/// Builds the wasm bundle, then copies it next to a small HTML page and the
/// bundled fixture index, renamed to the file name the widget fetches. The
/// directory has to be served over HTTP; browsers refuse module imports and
/// fetches from file:// pages.
fn demo() -> Result<()> {
    build_wasm()?;

    let root = project_root()?;
    let out = root.join("target/demo");
    std::fs::create_dir_all(&out).context("Failed to create target/demo")?;

    for name in ["sift.js", "sift_bg.wasm"] {
        let from = root.join("pkg").join(name);
        std::fs::copy(&from, out.join(name))
            .with_context(|| format!("Failed to copy {}", from.display()))?;
    }
    std::fs::copy(
        root.join("fixtures/articles.json"),
        out.join("search-index.json"),
    )
    .context("Failed to copy fixtures/articles.json")?;
    std::fs::write(out.join("index.html"), DEMO_PAGE).context("Failed to write index.html")?;

    println!("  demo assembled in target/demo");
    println!("  serve it: python3 -m http.server --directory target/demo");
    Ok(())
}

const DEMO_PAGE: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>sift demo</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 640px; margin: 4rem auto; padding: 0 1rem; }
  .header-search-widget { position: relative; }
  .search-form input { width: 100%; padding: 0.6rem 0.8rem; font-size: 1rem; border: 1px solid #bbb; border-radius: 6px; }
  .search-results { display: none; position: absolute; left: 0; right: 0; top: 100%; margin-top: 4px; background: #fff; border: 1px solid #bbb; border-radius: 6px; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.12); max-height: 420px; overflow-y: auto; }
  .search-results.active { display: block; }
  .search-result-item { display: block; padding: 0.6rem 0.8rem; color: inherit; text-decoration: none; border-bottom: 1px solid #eee; }
  .search-result-item:last-child { border-bottom: none; }
  .search-result-item:hover { background: #f5f5f5; }
  .search-result-placeholder { color: #888; cursor: default; }
  .result-title { font-weight: 600; }
  .result-channel { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.04em; color: #a55; }
  .result-excerpt { font-size: 0.85rem; color: #555; }
</style>
</head>
<body>
<h1>sift</h1>
<p>Type in the box. Try <code>rust</code>, <code>parsing</code>, or <code>benchmarks</code>.</p>
<div class="header-search-widget">
  <form class="search-form" autocomplete="off">
    <input type="search" name="q" placeholder="Search articles...">
  </form>
  <div id="search-results" class="search-results"></div>
</div>
<script type="module">
  import init, { SiftWidget } from "./sift.js";
  await init();
  const widget = new SiftWidget({ baseUrl: "." });
  widget.attach();
</script>
</body>
</html>
"##;

// ============================================================================
// Helpers
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::current_dir().unwrap());

    // xtask lives one level below the workspace root
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
