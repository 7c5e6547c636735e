//! Project overview: budget totals, status counters and budget by project type.

use serde::Serialize;

use crate::{
    record::Project,
    series::{
        CategoricalSeries, DetailMap, average_by, count_by_category, highest_by, lowest_by,
        sum_by, sum_with_details,
    },
    status::ProjectStatus,
};

/// A single project picked out by budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectHighlight {
    pub name: Option<String>,
    pub budget: f64,
}

impl ProjectHighlight {
    fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            budget: project.budget.unwrap_or(0.0),
        }
    }
}

/// Summary statistics and chart series for a list of projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub project_count: usize,
    pub total_budget: f64,
    pub active_count: usize,
    pub completed_count: usize,
    /// The project with the largest budget, `None` when there are no projects.
    pub max_budget_project: Option<ProjectHighlight>,
    /// The project with the smallest budget, `None` when there are no projects.
    pub min_budget_project: Option<ProjectHighlight>,
    /// `None` when there are no projects.
    pub average_budget: Option<f64>,
    /// Total budget per project type.
    pub budget_by_type: CategoricalSeries,
    /// Tooltip lines for [Self::budget_by_type], one per project.
    pub budget_details: DetailMap,
    /// Number of projects per project type.
    pub projects_by_type: CategoricalSeries,
    /// Number of projects per status label ("Active", "Completed").
    pub status_series: CategoricalSeries,
}

impl ProjectSummary {
    /// Whether the summary was built from at least one project.
    pub fn has_data(&self) -> bool {
        self.project_count > 0
    }
}

/// Aggregates `projects` into a [ProjectSummary].
///
/// A project counts as completed only when its status is one of the
/// recognised completed spellings, every other project counts as active.
pub fn aggregate_projects(projects: &[Project]) -> ProjectSummary {
    let completed_count = projects
        .iter()
        .filter(|project| project.project_status() == ProjectStatus::Completed)
        .count();

    let (budget_by_type, budget_details) = sum_with_details(
        projects,
        Project::type_label,
        |project| project.budget,
        |project| project.display_name().to_owned(),
    );

    ProjectSummary {
        project_count: projects.len(),
        total_budget: sum_by(projects, |project| project.budget),
        active_count: projects.len() - completed_count,
        completed_count,
        max_budget_project: highest_by(projects, |project| project.budget)
            .map(ProjectHighlight::from_project),
        min_budget_project: lowest_by(projects, |project| project.budget)
            .map(ProjectHighlight::from_project),
        average_budget: average_by(projects, |project| project.budget),
        budget_by_type,
        budget_details,
        projects_by_type: count_by_category(projects, Project::type_label),
        status_series: count_by_category(projects, |project| project.project_status().label()),
    }
}
