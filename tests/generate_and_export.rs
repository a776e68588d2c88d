//! End-to-end: generate a network, compute metrics, export result files

use rand::{SeedableRng, rngs::SmallRng};
use std::fs;

use smallworld_network_analyzer::config::GeneratorParams;
use smallworld_network_analyzer::network::{generator, metrics};
use smallworld_network_analyzer::{storage, sweep};

#[test]
fn exports_all_result_files() {
    let params = GeneratorParams::new(30, 4, 0.25);
    let mut rng = SmallRng::seed_from_u64(11);
    let network = generator::generate(&params, &mut rng).unwrap();
    let net_metrics = metrics::compute_metrics(&network, &params);

    let dir = std::env::temp_dir().join("smallworld_export_test");
    let _ = fs::remove_dir_all(&dir);
    let dir_str = dir.to_str().unwrap();

    storage::save_results(&network, &net_metrics, &params, dir_str).unwrap();

    for file in [
        "summary.json",
        "nodes.csv",
        "edges.csv",
        "degree_distribution.csv",
        "network.graphml",
    ] {
        assert!(dir.join(file).exists(), "{file} missing");
    }

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["network"]["edge_count"], 60);
    assert_eq!(summary["params"]["k"], 4);

    // Header plus one row per edge and per node.
    let edges_csv = fs::read_to_string(dir.join("edges.csv")).unwrap();
    assert_eq!(edges_csv.lines().count(), 61);
    let nodes_csv = fs::read_to_string(dir.join("nodes.csv")).unwrap();
    assert_eq!(nodes_csv.lines().count(), 31);

    let points = sweep::run_sweep(30, 4, 5, 2, 3).unwrap();
    storage::save_sweep(&points, dir_str).unwrap();
    let sweep_csv = fs::read_to_string(dir.join("sweep.csv")).unwrap();
    assert_eq!(sweep_csv.lines().count(), 6);

    let _ = fs::remove_dir_all(&dir);
}
