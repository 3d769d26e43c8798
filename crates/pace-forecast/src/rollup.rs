//! Bottom-up project rollup: teams → objectives → project.
//!
//! Objectives are evaluated in topological order over two edge kinds:
//! dependency edges (predecessor before successor) and decomposition edges
//! (child before parent). Each objective takes the max of its team lead times
//! and its children's lead times, floored by its own dependency buffer. The
//! project takes the max over all objectives.
//!
//! Missing teams, predecessors, or throughput never abort the rollup. The
//! affected objective is flagged and the rest of the project is still
//! forecast. Only invalid input (negative counts, duplicate ids, cycles) is
//! an error.

use std::collections::{BTreeSet, HashMap};

use pace_core::entities::{Objective, Project};
use pace_core::enums::ForecastStatus;
use pace_core::responses::{ForecastIssue, ObjectiveForecast, ProjectForecast};
use pace_core::stores::ForecastSource;
use rustworkx_core::petgraph::algo::toposort;
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};

use crate::context::ForecastContext;
use crate::critical_path::{dependency_buffer, max_with_ties};
use crate::error::ForecastError;
use crate::lead_time::{self, LeadTimeInput};
use crate::numeric::ceil_days;
use crate::org_tree;
use crate::variance;

/// Edge kind in the evaluation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Dependency,
    Decomposition,
}

/// Objective relationships, indexed by position in `project.objectives`.
struct ObjectiveGraph {
    predecessors: Vec<Vec<usize>>,
    unknown_predecessors: Vec<Vec<String>>,
    children: Vec<Vec<usize>>,
    order: Vec<usize>,
}

impl ObjectiveGraph {
    fn build(project: &Project) -> Result<Self, ForecastError> {
        let count = project.objectives.len();
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(count);
        for (position, objective) in project.objectives.iter().enumerate() {
            if index.insert(objective.id.as_str(), position).is_some() {
                return Err(ForecastError::InvalidInput(format!(
                    "duplicate objective id '{}' in project '{}'",
                    objective.id, project.id
                )));
            }
        }

        let mut graph: DiGraph<usize, Link> = DiGraph::with_capacity(count, count);
        let nodes: Vec<NodeIndex> = (0..count).map(|position| graph.add_node(position)).collect();

        let mut predecessors = vec![Vec::new(); count];
        let mut unknown_predecessors: Vec<Vec<String>> = vec![Vec::new(); count];
        let mut children = vec![Vec::new(); count];

        let mut seen_edges = BTreeSet::new();
        let edges = project
            .objectives
            .iter()
            .flat_map(|objective| objective.dependency_edges.iter());
        for edge in edges {
            let pred_id = edge.predecessor_objective_id.as_str();
            let succ_id = edge.successor_objective_id.as_str();
            if !seen_edges.insert((pred_id, succ_id)) {
                continue;
            }

            let Some(&succ) = index.get(succ_id) else {
                tracing::warn!(
                    project_id = %project.id,
                    successor = succ_id,
                    "dependency edge targets an objective outside the project; ignoring"
                );
                continue;
            };
            match index.get(pred_id) {
                Some(&pred) => {
                    graph.add_edge(nodes[pred], nodes[succ], Link::Dependency);
                    predecessors[succ].push(pred);
                }
                None => {
                    tracing::warn!(
                        project_id = %project.id,
                        objective_id = succ_id,
                        predecessor = pred_id,
                        "unknown predecessor objective"
                    );
                    unknown_predecessors[succ].push(pred_id.to_string());
                }
            }
        }

        for (position, objective) in project.objectives.iter().enumerate() {
            let Some(parent_id) = objective.parent_objective_id.as_deref() else {
                continue;
            };
            match index.get(parent_id) {
                Some(&parent) => {
                    graph.add_edge(nodes[position], nodes[parent], Link::Decomposition);
                    children[parent].push(position);
                }
                None => tracing::warn!(
                    objective_id = %objective.id,
                    parent_id,
                    "parent objective not in project; treating as a root"
                ),
            }
        }

        let order = toposort(&graph, None)
            .map_err(|cycle| ForecastError::DependencyCycle {
                objective_id: project.objectives[graph[cycle.node_id()]].id.clone(),
            })?
            .into_iter()
            .map(|node| graph[node])
            .collect();

        Ok(Self {
            predecessors,
            unknown_predecessors,
            children,
            order,
        })
    }
}

/// New work an objective adds to each team, validated.
fn new_item_count(objective: &Objective) -> Result<u32, ForecastError> {
    if objective.new_item_count < 0 {
        return Err(ForecastError::NegativeCount {
            field: format!("new_item_count of objective '{}'", objective.id),
            value: objective.new_item_count,
        });
    }
    u32::try_from(objective.new_item_count).map_err(|_| {
        ForecastError::InvalidInput(format!(
            "new_item_count of objective '{}' is too large: {}",
            objective.id, objective.new_item_count
        ))
    })
}

#[allow(clippy::cast_precision_loss, clippy::too_many_lines)]
fn forecast_objective<S>(
    position: usize,
    project: &Project,
    graph: &ObjectiveGraph,
    done: &[Option<ObjectiveForecast>],
    source: &S,
    ctx: &ForecastContext,
) -> Result<ObjectiveForecast, ForecastError>
where
    S: ForecastSource + ?Sized,
{
    let objective = &project.objectives[position];
    let new_items = new_item_count(objective)?;

    let mut issues: Vec<ForecastIssue> = graph.unknown_predecessors[position]
        .iter()
        .map(|objective_id| ForecastIssue::UnknownPredecessor {
            objective_id: objective_id.clone(),
        })
        .collect();

    let mut dependency_lead_times = Vec::with_capacity(graph.predecessors[position].len());
    for &pred in &graph.predecessors[position] {
        let predecessor = &project.objectives[pred];
        match done[pred].as_ref().and_then(|f| f.total_lead_time_days) {
            Some(days) => dependency_lead_times.push(days as f64),
            None => issues.push(ForecastIssue::UndefinedPredecessor {
                objective_id: predecessor.id.clone(),
            }),
        }
    }
    let dependency_buffer_days = ceil_days(dependency_buffer(&dependency_lead_times)).unwrap_or(0);

    let teams = org_tree::resolve_teams(source, &objective.assigned_team_ids);
    if teams.is_empty() && !objective.assigned_team_ids.is_empty() {
        tracing::warn!(objective_id = %objective.id, "assigned units resolve to no teams");
        issues.extend(
            objective
                .assigned_team_ids
                .iter()
                .map(|team_id| ForecastIssue::UnknownTeam {
                    team_id: team_id.clone(),
                }),
        );
    }

    let mut team_lead_times = Vec::new();
    for team_id in teams {
        if !source.knows_team(&team_id) {
            tracing::warn!(objective_id = %objective.id, team_id, "unknown team; skipping");
            issues.push(ForecastIssue::UnknownTeam { team_id });
            continue;
        }

        let backlog = source.backlog(&team_id);
        let lead = lead_time::team_lead_time(
            &LeadTimeInput {
                team_id: &team_id,
                new_item_count: new_items,
                backlog: &backlog,
                history: source.completions(&team_id),
                dependency_lead_times: &dependency_lead_times,
            },
            ctx,
        )?;
        if lead.lead_time_days.is_none() {
            issues.push(ForecastIssue::UndefinedThroughput {
                team_id: team_id.clone(),
            });
        }
        team_lead_times.push(lead);
    }
    let aggregate = lead_time::aggregate_lead_times(&team_lead_times);

    let mut child_totals = Vec::with_capacity(graph.children[position].len());
    for &child in &graph.children[position] {
        let child_id = project.objectives[child].id.as_str();
        match done[child].as_ref().and_then(|f| f.total_lead_time_days) {
            Some(days) => child_totals.push((child_id, days)),
            None => issues.push(ForecastIssue::UndefinedChild {
                objective_id: child_id.to_string(),
            }),
        }
    }
    let child_max = max_with_ties(child_totals.iter().copied());

    if objective.assigned_team_ids.is_empty() && graph.children[position].is_empty() {
        issues.push(ForecastIssue::Unassigned);
    }

    let total_lead_time_days = [
        aggregate.total_lead_time_days,
        child_max.as_ref().map(|(max, _)| *max),
    ]
    .into_iter()
    .flatten()
    .max()
    .map(|max| max.max(dependency_buffer_days));

    let critical_path = if total_lead_time_days.is_some()
        && total_lead_time_days == aggregate.total_lead_time_days
    {
        aggregate.critical_path
    } else {
        Vec::new()
    };
    let critical_child_ids = match (&child_max, total_lead_time_days) {
        (Some((max, ids)), Some(total)) if *max == total => {
            ids.iter().map(|id| (*id).to_string()).collect()
        }
        _ => Vec::new(),
    };

    let calculated_date = total_lead_time_days.and_then(|days| ctx.date_after(days));
    let variance = calculated_date
        .zip(objective.target_date)
        .map(|(calculated, target)| variance::classify(calculated, target));

    let status = match (total_lead_time_days, issues.is_empty()) {
        (None, _) => ForecastStatus::Unavailable,
        (Some(_), true) => ForecastStatus::Complete,
        (Some(_), false) => ForecastStatus::Partial,
    };

    tracing::debug!(
        objective_id = %objective.id,
        total_lead_time_days,
        dependency_buffer_days,
        %status,
        "objective forecast"
    );

    Ok(ObjectiveForecast {
        objective_id: objective.id.clone(),
        parent_objective_id: objective.parent_objective_id.clone(),
        team_lead_times,
        dependency_buffer_days,
        total_lead_time_days,
        average_lead_time_days: aggregate.average_lead_time_days,
        critical_path,
        critical_child_ids,
        calculated_date,
        target_date: objective.target_date,
        variance,
        status,
        issues,
    })
}

/// Forecast every objective of `project` and roll them up.
///
/// # Errors
///
/// Returns [`ForecastError`] for invalid input: duplicate objective ids,
/// negative item counts, or cycles through dependencies and parent links.
pub fn project_forecast<S>(
    project: &Project,
    source: &S,
    ctx: &ForecastContext,
) -> Result<ProjectForecast, ForecastError>
where
    S: ForecastSource + ?Sized,
{
    let graph = ObjectiveGraph::build(project)?;

    let mut done: Vec<Option<ObjectiveForecast>> = vec![None; project.objectives.len()];
    for &position in &graph.order {
        let forecast = forecast_objective(position, project, &graph, &done, source, ctx)?;
        done[position] = Some(forecast);
    }
    let objective_forecasts: Vec<ObjectiveForecast> = done.into_iter().flatten().collect();

    let totals = objective_forecasts.iter().filter_map(|forecast| {
        forecast
            .total_lead_time_days
            .map(|days| (forecast.objective_id.as_str(), days))
    });
    let (project_lead_time_days, critical_path_objective_ids) = match max_with_ties(totals) {
        Some((max, ids)) => (Some(max), ids.into_iter().map(str::to_string).collect()),
        None => (None, Vec::new()),
    };

    let project_calculated_date = project_lead_time_days.and_then(|days| ctx.date_after(days));
    let variance_vs_target = project_calculated_date
        .zip(project.target_date)
        .map(|(calculated, target)| variance::classify(calculated, target));

    tracing::debug!(
        project_id = %project.id,
        objectives = objective_forecasts.len(),
        project_lead_time_days,
        "project rollup complete"
    );

    Ok(ProjectForecast {
        project_id: project.id.clone(),
        as_of: ctx.today(),
        objective_forecasts,
        project_lead_time_days,
        project_calculated_date,
        critical_path_objective_ids,
        target_date: project.target_date,
        variance_vs_target,
    })
}
