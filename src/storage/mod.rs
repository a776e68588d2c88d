//! Results persistence module

use anyhow::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use serde_json::{json, to_string_pretty};

use crate::config::GeneratorParams;
use crate::network::Network;
use crate::network::metrics::{self, NetworkMetrics};
use crate::sweep::SweepPoint;

/// Save a generated network and its metrics to the specified directory
pub fn save_results(
    network: &Network,
    net_metrics: &NetworkMetrics,
    params: &GeneratorParams,
    output_dir: &str,
) -> Result<()> {
    log::info!(
        "Saving network with {} nodes and {} edges to {}",
        network.nodes.len(),
        network.edges.len(),
        output_dir
    );

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    save_summary(network, net_metrics, params, output_dir)?;
    save_network_tables(network, output_dir)?;
    save_degree_distribution(network, output_dir)?;
    save_graphml(network, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save parameters, counts, and the metrics triple
fn save_summary(
    network: &Network,
    net_metrics: &NetworkMetrics,
    params: &GeneratorParams,
    output_dir: &str,
) -> Result<()> {
    log::debug!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let summary = json!({
        "params": {
            "node_count": params.node_count,
            "k": params.k,
            "rewire_probability": params.rewire_probability,
        },
        "network": {
            "node_count": network.nodes.len(),
            "edge_count": network.edges.len(),
            "rewired_edges": network.rewired_count(),
            "rewires_exhausted": network.rewires_exhausted,
        },
        "metrics": {
            "avg_path_length": net_metrics.avg_path_length,
            "avg_clustering_coef": net_metrics.avg_clustering_coef,
            "small_world_index": net_metrics.small_world_index,
        }
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save node and edge lists as CSV tables
fn save_network_tables(network: &Network, output_dir: &str) -> Result<()> {
    log::debug!("Saving node and edge tables");

    let nodes_path = Path::new(output_dir).join("nodes.csv");
    let mut nodes_file = File::create(nodes_path)?;

    writeln!(nodes_file, "id,angle,degree")?;
    for node in &network.nodes {
        writeln!(nodes_file, "{},{:.6},{}", node.id, node.angle, node.degree)?;
    }

    let edges_path = Path::new(output_dir).join("edges.csv");
    let mut edges_file = File::create(edges_path)?;

    writeln!(edges_file, "source,target,original")?;
    for edge in &network.edges {
        writeln!(edges_file, "{},{},{}", edge.source, edge.target, edge.original)?;
    }

    Ok(())
}

/// Save the degree histogram
fn save_degree_distribution(network: &Network, output_dir: &str) -> Result<()> {
    log::debug!("Saving degree distribution");

    let path = Path::new(output_dir).join("degree_distribution.csv");
    let mut file = File::create(path)?;

    writeln!(file, "degree,count")?;
    for (degree, count) in metrics::degree_distribution(&network.nodes) {
        writeln!(file, "{},{}", degree, count)?;
    }

    Ok(())
}

/// Save the network as GraphML for external visualization tools
fn save_graphml(network: &Network, output_dir: &str) -> Result<()> {
    log::debug!("Saving GraphML export");

    let path = Path::new(output_dir).join("network.graphml");
    let mut file = File::create(path)?;

    // Write GraphML header
    writeln!(file, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(file, "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">")?;
    writeln!(file, "  <key id=\"angle\" for=\"node\" attr.name=\"angle\" attr.type=\"double\"/>")?;
    writeln!(file, "  <key id=\"degree\" for=\"node\" attr.name=\"degree\" attr.type=\"int\"/>")?;
    writeln!(file, "  <key id=\"original\" for=\"edge\" attr.name=\"original\" attr.type=\"boolean\"/>")?;
    writeln!(file, "  <graph id=\"G\" edgedefault=\"undirected\">")?;

    // Write nodes
    for node in &network.nodes {
        writeln!(file, "    <node id=\"n{}\">", node.id)?;
        writeln!(file, "      <data key=\"angle\">{:.6}</data>", node.angle)?;
        writeln!(file, "      <data key=\"degree\">{}</data>", node.degree)?;
        writeln!(file, "    </node>")?;
    }

    // Write edges
    for (edge_id, edge) in network.edges.iter().enumerate() {
        writeln!(
            file,
            "    <edge id=\"e{}\" source=\"n{}\" target=\"n{}\">",
            edge_id, edge.source, edge.target
        )?;
        writeln!(file, "      <data key=\"original\">{}</data>", edge.original)?;
        writeln!(file, "    </edge>")?;
    }

    // Write GraphML footer
    writeln!(file, "  </graph>")?;
    writeln!(file, "</graphml>")?;

    Ok(())
}

/// Save sweep results as a CSV for external plotting
pub fn save_sweep(points: &[SweepPoint], output_dir: &str) -> Result<()> {
    log::info!("Saving {} sweep points to {}", points.len(), output_dir);

    fs::create_dir_all(output_dir)?;

    let path = Path::new(output_dir).join("sweep.csv");
    let mut file = File::create(path)?;

    writeln!(file, "p,avg_path_length,avg_clustering_coef,small_world_index")?;
    for point in points {
        writeln!(
            file,
            "{:.4},{:.6},{:.6},{:.6}",
            point.p, point.avg_path_length, point.avg_clustering_coef, point.small_world_index
        )?;
    }

    Ok(())
}
