//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `orgchart_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    let sample = orgchart_core::sample_org();
    let forest = orgchart_core::build_forest(&sample);

    println!("orgchart_core version={}", orgchart_core::core_version());
    println!(
        "orgchart_core sample entities={} roots={} nodes={}",
        sample.len(),
        forest.len(),
        orgchart_core::forest_size(&forest)
    );
}
