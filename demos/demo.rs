use adjacency_graph::{Graph, Result, WeightedEdge};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut city_graph: Graph<String, WeightedEdge<f64>> = Graph::new();
    for city in ["Seattle", "San Francisco", "Los Angeles"] {
        city_graph.add_vertex(city.to_string());
    }
    let (seattle, sf, la) = (
        "Seattle".to_string(),
        "San Francisco".to_string(),
        "Los Angeles".to_string(),
    );
    city_graph.add_edge_by_vertices(&seattle, &sf, 1092.0)?;
    city_graph.add_edge_by_vertices(&sf, &la, 559.0)?;
    city_graph.add_edge_by_vertices(&la, &seattle, 1541.0)?;

    print!("{city_graph}");
    println!("{:?}", city_graph.neighbors_for_vertex(&la)?);
    for edge in city_graph.edges_for_vertex(&seattle)? {
        println!("{edge}");
    }
    tracing::info!(
        vertices = city_graph.vertex_count(),
        edges = city_graph.edge_count(),
        "done"
    );
    Ok(())
}
