//! Host-side helper: `cargo run` compiles the portfolio chrome to WASM,
//! assembles the static site, and serves it locally for a quick look.

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    build_wasm_bundle();
    serve_site();

    // Keep process alive while the server child runs.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

/// Compile the wasm bundle into `static/pkg` so the page can load it as an
/// ES module. Missing wasm-pack is a soft failure; the site then serves
/// whatever artifacts are already there.
fn build_wasm_bundle() {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }
}

fn serve_site() {
    println!("Launching local server at http://127.0.0.1:8000 …");
    let _server = Command::new("python3")
        .args(["-m", "http.server", "8000", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");
}
