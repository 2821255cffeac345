use std::fmt::Write as _;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SampleInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceRow {
    pub vertex: String,
    /// `None` when the vertex is unreachable from the source
    pub distance: Option<f64>,
    pub path: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TreeEdgeRow {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Result of one command, ready to render
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Samples {
        samples: Vec<SampleInfo>,
    },
    Traversal {
        algorithm: &'static str,
        start: String,
        order: Vec<String>,
    },
    Cycle {
        has_cycle: bool,
        has_directed_cycle: bool,
        closing_edge: Option<(String, String)>,
    },
    Distances {
        algorithm: &'static str,
        source: String,
        rows: Vec<DistanceRow>,
    },
    SpanningTree {
        algorithm: &'static str,
        edges: Vec<TreeEdgeRow>,
        total_weight: f64,
    },
    Articulation {
        start: String,
        points: Vec<String>,
    },
}

impl Report {
    pub fn to_json(&self) -> serde_json::Value {
        // Serialization of these plain structs cannot fail; fall back to null
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn to_human(&self) -> String {
        let mut out = String::new();
        match self {
            Report::Samples { samples } => {
                for s in samples {
                    let _ = writeln!(out, "{:<16} {}", s.name, s.description);
                }
            }
            Report::Traversal { order, .. } => {
                for key in order {
                    let _ = writeln!(out, "{}", key);
                }
            }
            Report::Cycle {
                has_cycle,
                has_directed_cycle,
                closing_edge,
            } => {
                let _ = writeln!(out, "cycle: {}", has_cycle);
                let _ = writeln!(out, "directed cycle: {}", has_directed_cycle);
                if let Some((from, to)) = closing_edge {
                    let _ = writeln!(out, "closing edge: {}|{}", from, to);
                }
            }
            Report::Distances { rows, .. } => {
                for row in rows {
                    match row.distance {
                        Some(d) => {
                            let path = row.path.as_deref().unwrap_or_default().join(" -> ");
                            let _ = writeln!(out, "{}\t{}\t{}", row.vertex, d, path);
                        }
                        None => {
                            let _ = writeln!(out, "{}\tinf", row.vertex);
                        }
                    }
                }
            }
            Report::SpanningTree {
                edges,
                total_weight,
                ..
            } => {
                for e in edges {
                    let _ = writeln!(out, "{}|{}\t{}", e.from, e.to, e.weight);
                }
                let _ = writeln!(out, "total weight: {}", total_weight);
            }
            Report::Articulation { points, .. } => {
                if points.is_empty() {
                    out.push_str("(none)\n");
                }
                for key in points {
                    let _ = writeln!(out, "{}", key);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_renders_inf() {
        let report = Report::Distances {
            algorithm: "dijkstra",
            source: "A".to_string(),
            rows: vec![
                DistanceRow {
                    vertex: "A".to_string(),
                    distance: Some(0.0),
                    path: Some(vec!["A".to_string()]),
                },
                DistanceRow {
                    vertex: "Z".to_string(),
                    distance: None,
                    path: None,
                },
            ],
        };
        assert_eq!(report.to_human(), "A\t0\tA\nZ\tinf\n");
    }

    #[test]
    fn test_json_is_tagged() {
        let report = Report::Articulation {
            start: "A".to_string(),
            points: vec!["B".to_string()],
        };
        let json = report.to_json();
        assert_eq!(json["report"], "articulation");
        assert_eq!(json["points"][0], "B");
    }

    #[test]
    fn test_empty_articulation() {
        let report = Report::Articulation {
            start: "A".to_string(),
            points: vec![],
        };
        assert_eq!(report.to_human(), "(none)\n");
    }
}
