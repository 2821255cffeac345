use crate::error::{GraphError, Result};
use crate::graph::types::EdgeId;
use crate::graph::Graph;
use serde::Serialize;
use std::collections::HashSet;

/// Pending link from a single source key, created by [`Graph::link`]
pub struct LinkBuilder<'g> {
    graph: &'g mut Graph,
    from: String,
}

/// What a call to [`LinkBuilder::to`] actually did.
///
/// Absent targets and already-linked pairs are skipped rather than treated as
/// errors; this report is how callers find out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// Edges created by this call, in target order
    pub created: Vec<EdgeId>,
    /// Set when the source key itself is absent; nothing is linked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_source: Option<String>,
    /// Target keys that are not in the graph
    pub missing_targets: Vec<String>,
    /// Target keys already linked from the source
    pub existing: Vec<String>,
}

impl LinkReport {
    /// True when every requested target ended up linked (new or pre-existing)
    pub fn is_complete(&self) -> bool {
        self.missing_source.is_none() && self.missing_targets.is_empty()
    }
}

impl<'g> LinkBuilder<'g> {
    pub(crate) fn new(graph: &'g mut Graph, from: &str) -> Self {
        Self {
            graph,
            from: from.to_string(),
        }
    }

    /// Create one unweighted directed edge per distinct target
    pub fn to<S: AsRef<str>>(self, targets: &[S]) -> LinkReport {
        let targets = dedup_targets(targets);
        let weights = vec![None; targets.len()];
        self.apply(targets, weights)
    }

    /// Create one weighted directed edge per distinct target.
    ///
    /// `weights[i]` belongs to the i-th distinct target. An empty `weights`
    /// slice links without weights; any other length must match the number of
    /// distinct targets.
    pub fn to_weighted<S: AsRef<str>>(self, targets: &[S], weights: &[f64]) -> Result<LinkReport> {
        let targets = dedup_targets(targets);
        if weights.is_empty() {
            let weights = vec![None; targets.len()];
            return Ok(self.apply(targets, weights));
        }
        if weights.len() != targets.len() {
            return Err(GraphError::MismatchedArity {
                targets: targets.len(),
                weights: weights.len(),
            });
        }
        let weights = weights.iter().copied().map(Some).collect();
        Ok(self.apply(targets, weights))
    }

    fn apply(self, targets: Vec<&str>, weights: Vec<Option<f64>>) -> LinkReport {
        let mut report = LinkReport::default();

        let Some(source) = self.graph.id_of(&self.from) else {
            tracing::debug!(from = %self.from, "link source absent, nothing linked");
            report.missing_source = Some(self.from);
            return report;
        };

        for (to, weight) in targets.into_iter().zip(weights) {
            let Some(target) = self.graph.id_of(to) else {
                tracing::debug!(from = %self.from, to = %to, "link target absent, skipped");
                report.missing_targets.push(to.to_string());
                continue;
            };

            match self.graph.insert_edge(source, target, weight) {
                Some(edge) => report.created.push(edge),
                None => {
                    tracing::trace!(from = %self.from, to = %to, "edge already present");
                    report.existing.push(to.to_string());
                }
            }
        }

        report
    }
}

/// Drop repeated target keys, keeping the first occurrence
fn dedup_targets<S: AsRef<str>>(targets: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    targets
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| seen.insert(*t))
        .collect()
}
