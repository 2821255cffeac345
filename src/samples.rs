//! Built-in sample graphs for the CLI
//!
//! Vertices are created with the configured key field, so a config that
//! renames the key field still produces usable samples. Unweighted sample
//! edges take the configured default weight.

use keygraph_core::error::{GraphError, Result};
use keygraph_core::{Graph, GraphConfig};
use serde_json::{json, Map, Value};

pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    build: fn(&mut Graph) -> Result<()>,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "emperors",
        description: "Marcus Aurelius linked to four other emperors (directed, unweighted)",
        build: emperors,
    },
    Sample {
        name: "cities",
        description: "Five Roman cities joined by weighted roads (undirected, connected)",
        build: cities,
    },
    Sample {
        name: "bridge",
        description: "Path A-B-C (undirected)",
        build: bridge,
    },
    Sample {
        name: "triangle",
        description: "Triangle A-B-C-A (undirected)",
        build: triangle,
    },
    Sample {
        name: "negative-cycle",
        description: "A->B and B->A, both weighted -1",
        build: negative_cycle,
    },
];

/// Build the named sample using `config`
pub fn build(name: &str, config: &GraphConfig) -> Result<Graph> {
    let sample = SAMPLES.iter().find(|s| s.name == name).ok_or_else(|| {
        let available: Vec<&str> = SAMPLES.iter().map(|s| s.name).collect();
        GraphError::UsageError(format!(
            "unknown sample '{}' (available: {})",
            name,
            available.join(", ")
        ))
    })?;

    let mut graph = Graph::with_config(config.clone());
    (sample.build)(&mut graph)?;
    tracing::debug!(
        sample = sample.name,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built sample graph"
    );
    Ok(graph)
}

fn record(graph: &Graph, key: &str, extra: Value) -> Value {
    let mut fields = match extra {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };
    fields.insert(graph.key_field().to_string(), Value::from(key));
    Value::Object(fields)
}

fn add_plain(graph: &mut Graph, keys: &[&str]) -> Result<()> {
    for &key in keys {
        let payload = record(graph, key, json!({}));
        graph.add(payload)?;
    }
    Ok(())
}

/// Link both directions; `None` leaves the edge unweighted
fn road(graph: &mut Graph, a: &str, b: &str, weight: Option<f64>) -> Result<()> {
    for (from, to) in [(a, b), (b, a)] {
        match weight {
            Some(w) => {
                graph.link(from).to_weighted(&[to], &[w])?;
            }
            None => {
                graph.link(from).to(&[to]);
            }
        }
    }
    Ok(())
}

fn emperors(graph: &mut Graph) -> Result<()> {
    for (name, from, to) in [
        ("Marcus Aurelius", 161, 180),
        ("Lucius Verus", 161, 169),
        ("Antoninus Pius", 138, 161),
        ("Hadrian", 117, 138),
        ("Trajan", 98, 117),
    ] {
        let payload = record(graph, name, json!({ "reign": [from, to] }));
        graph.add(payload)?;
    }
    graph.link("Marcus Aurelius").to(&[
        "Lucius Verus",
        "Antoninus Pius",
        "Hadrian",
        "Trajan",
    ]);
    Ok(())
}

fn cities(graph: &mut Graph) -> Result<()> {
    add_plain(graph, &["Rome", "Ostia", "Capua", "Brundisium", "Mediolanum"])?;
    road(graph, "Rome", "Ostia", Some(2.0))?;
    road(graph, "Rome", "Capua", Some(20.0))?;
    road(graph, "Ostia", "Capua", Some(24.0))?;
    road(graph, "Capua", "Brundisium", Some(35.0))?;
    road(graph, "Rome", "Mediolanum", Some(57.0))?;
    road(graph, "Ostia", "Mediolanum", Some(60.0))?;
    Ok(())
}

fn bridge(graph: &mut Graph) -> Result<()> {
    add_plain(graph, &["A", "B", "C"])?;
    road(graph, "A", "B", None)?;
    road(graph, "B", "C", None)?;
    Ok(())
}

fn triangle(graph: &mut Graph) -> Result<()> {
    add_plain(graph, &["A", "B", "C"])?;
    road(graph, "A", "B", None)?;
    road(graph, "B", "C", None)?;
    road(graph, "C", "A", None)?;
    Ok(())
}

fn negative_cycle(graph: &mut Graph) -> Result<()> {
    add_plain(graph, &["A", "B"])?;
    graph.link("A").to_weighted(&["B"], &[-1.0])?;
    graph.link("B").to_weighted(&["A"], &[-1.0])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sample_builds() {
        let config = GraphConfig::default();
        for sample in SAMPLES {
            let graph = build(sample.name, &config).unwrap();
            assert!(graph.vertex_count() > 0, "{} is empty", sample.name);
        }
    }

    #[test]
    fn test_unknown_sample() {
        let err = build("colosseum", &GraphConfig::default()).unwrap_err();
        assert!(err.to_string().contains("available: emperors"));
    }

    #[test]
    fn test_samples_follow_key_field() {
        let config = GraphConfig::with_key_field("id");
        let graph = build("emperors", &config).unwrap();
        assert_eq!(graph.select("Hadrian").unwrap().payload()["id"], "Hadrian");
        assert_eq!(graph.edge_count(), 4);
    }
}
