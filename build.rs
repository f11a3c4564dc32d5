// Build script: assembles the deployable site in `dist/` from `static/`,
// running wasm-pack first when targeting wasm32.
use fs_extra::dir::{self, CopyOptions};
use std::path::Path;
use std::process::Command;
use std::{env, fs};

fn main() {
    let target = env::var("TARGET").unwrap_or_default();
    if target == "wasm32-unknown-unknown" {
        // wasm-pack is assumed available. If not, emit warning.
        let status = Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web"])
            .status();

        if let Ok(st) = status {
            if !st.success() {
                println!("cargo:warning=wasm-pack build failed");
            }
        } else {
            println!("cargo:warning=wasm-pack not installed – skipping");
        }
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let mut options = CopyOptions::new();
        options.overwrite = true;
        options.content_only = true;
        if let Err(e) = dir::copy(static_dir, out_dir, &options) {
            println!("cargo:warning=failed to copy static assets: {e}");
        }
    }

    println!("cargo:rerun-if-changed=static");
}
