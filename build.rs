//! Build script for OmniRoute
//!
//! With the `ui` feature the frontend bundle in `ui/dist` is embedded into the
//! binary, so warn early when it has not been built yet.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "ui")]
    {
        println!("cargo:rerun-if-changed=ui/dist/");
        check_ui_dist();
    }
}

#[cfg(feature = "ui")]
fn check_ui_dist() {
    let ui_dist = std::path::Path::new("ui/dist");
    if ui_dist.join("index.html").exists() {
        return;
    }

    if !ui_dist.exists() {
        // rust-embed refuses a missing folder
        if let Err(e) = std::fs::create_dir_all(ui_dist) {
            println!("cargo:warning=OmniRoute UI: could not create ui/dist: {}", e);
        }
    }

    println!("cargo:warning=");
    println!("cargo:warning=OmniRoute UI assets not found in ui/dist/");
    println!("cargo:warning=Build the frontend before compiling with --features ui:");
    println!("cargo:warning=    cd ui && trunk build --release");
    println!("cargo:warning=The server will answer UI routes with 404 until then.");
    println!("cargo:warning=");
}
