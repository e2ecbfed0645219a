//! Version component resolution for the build script.
//!
//! Compiled into `build.rs` and, for its tests, into the library test target.

/// Parse one component. The error names where the value came from.
pub fn parse_component(source: &str, raw: &str) -> Result<u64, String> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid {} value '{}': {}", source, raw, e))
}

/// Pick the override when set, otherwise the package version component.
pub fn resolve_component(
    override_var: &str,
    override_value: Option<&str>,
    cargo_var: &str,
    cargo_value: Option<&str>,
) -> Result<u64, String> {
    match override_value {
        Some(raw) => parse_component(override_var, raw),
        None => parse_component(cargo_var, cargo_value.unwrap_or("0")),
    }
}
