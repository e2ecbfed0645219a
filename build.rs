use std::env;
use std::fs;
use std::path::Path;

#[path = "build/components.rs"]
mod components;

/// Resolve one version component: explicit override first, then the package version.
fn component(override_var: &str, cargo_var: &str) -> u64 {
    println!("cargo:rerun-if-env-changed={}", override_var);

    let override_value = env::var(override_var).ok();
    let cargo_value = env::var(cargo_var).ok();

    // Malformed component fails the build
    match components::resolve_component(
        override_var,
        override_value.as_deref(),
        cargo_var,
        cargo_value.as_deref(),
    ) {
        Ok(value) => value,
        Err(message) => panic!("{}", message),
    }
}

fn main() {
    let major = component("OCCLUM_MAJOR_VERSION", "CARGO_PKG_VERSION_MAJOR");
    let minor = component("OCCLUM_MINOR_VERSION", "CARGO_PKG_VERSION_MINOR");
    let patch = component("OCCLUM_PATCH_VERSION", "CARGO_PKG_VERSION_PATCH");

    let generated = format!(
        "/// Incompatible changes.\n\
         pub const MAJOR: u64 = {major};\n\
         /// Backward-compatible feature additions.\n\
         pub const MINOR: u64 = {minor};\n\
         /// Backward-compatible fixes.\n\
         pub const PATCH: u64 = {patch};\n"
    );

    let out_dir = env::var("OUT_DIR").unwrap_or_else(|_| ".".to_string());
    let dest = Path::new(&out_dir).join("version_components.rs");
    if let Err(e) = fs::write(&dest, generated) {
        panic!("failed to write {}: {}", dest.display(), e);
    }

    // Optional provenance, passed through when the packaging environment provides it
    for var in ["GIT_HASH", "BUILD_DATE"] {
        println!("cargo:rerun-if-env-changed={}", var);
        if let Ok(value) = env::var(var) {
            println!("cargo:rustc-env={}={}", var, value);
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/components.rs");
}
