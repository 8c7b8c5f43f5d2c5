//! Stage Graph Engine
//!
//! Executes the memo pipeline as an explicit directed graph of typed stages.
//! The graph is validated and levelled at build time; at run time each level
//! executes as one wave. A single-stage wave threads the state straight
//! through, a multi-stage wave clones the fork-point state per branch, runs
//! the branches concurrently and folds their outputs back with the merge
//! contract. A wave never starts before the previous one has fully drained,
//! which is the join barrier the curation stage relies on.

use crate::state::merge::join_states;
use crate::state::ResearchState;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinSet;
use uuid::Uuid;

/// One typed pipeline stage.
///
/// A stage consumes the run state and returns the (possibly extended) state.
/// Stages running in the same wave receive clones of the same fork state and
/// must confine their writes to slices they own; the merge contract handles
/// the rejoin.
#[async_trait]
pub trait Stage: Send + Sync {
    /// Unique stage name, also used in dependency declarations.
    fn name(&self) -> &'static str;

    /// Execute the stage.
    async fn run(&self, state: ResearchState) -> Result<ResearchState>;
}

/// Record of one executed stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageRun {
    /// Stage name.
    pub stage: String,
    /// Unix timestamp when the stage started.
    pub timestamp: i64,
    /// Wall-clock duration of the stage in milliseconds.
    pub duration_ms: u64,
}

/// Output of one full graph run.
#[derive(Debug, Clone, Serialize)]
pub struct GraphRun {
    /// Identifier of this run.
    pub run_id: Uuid,
    /// Final state after the last wave.
    pub state: ResearchState,
    /// Per-stage records in completion order.
    pub stages: Vec<StageRun>,
    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

struct StageNode {
    stage: Arc<dyn Stage>,
    depends_on: Vec<String>,
}

/// Builder collecting stages and their dependencies.
#[derive(Default)]
pub struct StageGraphBuilder {
    nodes: Vec<StageNode>,
}

impl StageGraphBuilder {
    /// Add a stage that runs after all of `depends_on` have completed.
    pub fn add_stage(mut self, stage: Arc<dyn Stage>, depends_on: &[&str]) -> Self {
        self.nodes.push(StageNode {
            stage,
            depends_on: depends_on.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Validate the graph and precompute its execution waves.
    pub fn build(self) -> Result<StageGraph> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.stage.name()) {
                return Err(AppError::Configuration(format!(
                    "duplicate stage name '{}'",
                    node.stage.name()
                )));
            }
        }

        for node in &self.nodes {
            for dep in &node.depends_on {
                if !seen.contains(dep.as_str()) {
                    return Err(AppError::Configuration(format!(
                        "stage '{}' depends on unknown stage '{}'",
                        node.stage.name(),
                        dep
                    )));
                }
            }
        }

        let waves = Self::compute_waves(&self.nodes)?;

        Ok(StageGraph {
            nodes: self.nodes,
            waves,
        })
    }

    /// Level the DAG: wave N holds every stage whose dependencies all sit in
    /// waves before N. Fails when no progress can be made, i.e. on a cycle.
    fn compute_waves(nodes: &[StageNode]) -> Result<Vec<Vec<usize>>> {
        let mut waves = Vec::new();
        let mut placed: HashSet<&str> = HashSet::new();
        let mut remaining: Vec<usize> = (0..nodes.len()).collect();

        while !remaining.is_empty() {
            let (ready, blocked): (Vec<usize>, Vec<usize>) = remaining.iter().partition(|&&idx| {
                nodes[idx]
                    .depends_on
                    .iter()
                    .all(|dep| placed.contains(dep.as_str()))
            });

            if ready.is_empty() {
                let cycle: Vec<&str> = blocked.iter().map(|&idx| nodes[idx].stage.name()).collect();
                return Err(AppError::Configuration(format!(
                    "stage graph contains a cycle involving: {}",
                    cycle.join(", ")
                )));
            }

            for &idx in &ready {
                placed.insert(nodes[idx].stage.name());
            }
            waves.push(ready);
            remaining = blocked;
        }

        Ok(waves)
    }
}

/// A validated, levelled stage graph ready to run.
pub struct StageGraph {
    nodes: Vec<StageNode>,
    waves: Vec<Vec<usize>>,
}

impl StageGraph {
    /// Start building a graph.
    pub fn builder() -> StageGraphBuilder {
        StageGraphBuilder::default()
    }

    /// Stage names per wave, in execution order.
    pub fn execution_waves(&self) -> Vec<Vec<&'static str>> {
        self.waves
            .iter()
            .map(|wave| wave.iter().map(|&idx| self.nodes[idx].stage.name()).collect())
            .collect()
    }

    /// Run the graph to completion over `initial`.
    ///
    /// Any stage error or panicked branch aborts the run; remaining branch
    /// tasks of the current wave are dropped with the join set.
    pub async fn run(&self, initial: ResearchState) -> Result<GraphRun> {
        let run_id = Uuid::new_v4();
        let run_start = std::time::Instant::now();
        let mut state = initial;
        let mut stage_runs = Vec::new();

        for wave in &self.waves {
            if let [only] = wave.as_slice() {
                let node = &self.nodes[*only];
                let timestamp = Utc::now().timestamp();
                let stage_start = std::time::Instant::now();

                tracing::debug!(stage = node.stage.name(), "running stage");
                state = node.stage.run(state).await?;

                stage_runs.push(StageRun {
                    stage: node.stage.name().to_string(),
                    timestamp,
                    duration_ms: stage_start.elapsed().as_millis() as u64,
                });
                continue;
            }

            let fork = state;
            let mut set = JoinSet::new();
            for &idx in wave {
                let stage = Arc::clone(&self.nodes[idx].stage);
                let branch_state = fork.clone();

                set.spawn(async move {
                    let timestamp = Utc::now().timestamp();
                    let stage_start = std::time::Instant::now();

                    tracing::debug!(stage = stage.name(), "running stage");
                    let output = stage.run(branch_state).await;

                    (
                        stage.name(),
                        timestamp,
                        stage_start.elapsed().as_millis() as u64,
                        output,
                    )
                });
            }

            // Fold branches in completion order; the merge contract makes
            // later completions win map collisions and scalar updates.
            let mut branches = Vec::new();
            while let Some(joined) = set.join_next().await {
                let (name, timestamp, duration_ms, output) = joined
                    .map_err(|e| AppError::Workflow(format!("stage task panicked: {}", e)))?;
                let branch = output?;

                stage_runs.push(StageRun {
                    stage: name.to_string(),
                    timestamp,
                    duration_ms,
                });
                branches.push(branch);
            }

            state = join_states(&fork, branches);
        }

        Ok(GraphRun {
            run_id,
            state,
            stages: stage_runs,
            duration_ms: run_start.elapsed().as_millis() as u64,
        })
    }
}
