use crate::core::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project name identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a new ProjectName after validation
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(DashError::InvalidProject(
                "ProjectName cannot be empty".to_string(),
            ));
        }
        if name.len() > 64 {
            return Err(DashError::InvalidProject(
                "ProjectName cannot exceed 64 characters".to_string(),
            ));
        }
        Ok(ProjectName(name))
    }

    /// Returns the string representation of the project name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string value
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a tracked project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Project is running and receives simulated updates
    Active,
    /// Project is paused and not staffed
    OnHold,
    /// Project has finished delivery
    Completed,
}

impl ProjectStatus {
    /// Returns the lowercase label used in exports and the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Risk bands used for UI coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    /// Risk at or below 35
    Low,
    /// Risk above 35
    Elevated,
    /// Risk above 60
    High,
}

/// Current metrics for a single tracked project.
///
/// `utilization`, `efficiency` and `risk` are bounded percentages in
/// [0, 100]. `completion` never decreases once the record exists. `staff`
/// and `equipment` are static headcounts the simulation does not touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    /// Stable unique identifier for this project
    pub name: ProjectName,
    /// Resource utilization percentage
    pub utilization: f64,
    /// Allocated budget (currency-agnostic)
    pub budget: f64,
    /// Assigned staff count
    pub staff: u32,
    /// Assigned equipment count
    pub equipment: u32,
    /// Delivery efficiency percentage
    pub efficiency: f64,
    /// Completion percentage, monotonically non-decreasing
    pub completion: f64,
    /// Risk score percentage
    pub risk: f64,
    /// Lifecycle status
    pub status: ProjectStatus,
}

impl ProjectMetrics {
    /// Creates a new active project with zeroed metrics
    pub fn new(name: ProjectName) -> Self {
        Self {
            name,
            utilization: 0.0,
            budget: 0.0,
            staff: 0,
            equipment: 0,
            efficiency: 0.0,
            completion: 0.0,
            risk: 0.0,
            status: ProjectStatus::Active,
        }
    }

    /// Returns the risk band for this project
    pub fn risk_level(&self) -> RiskLevel {
        if self.risk > 60.0 {
            RiskLevel::High
        } else if self.risk > 35.0 {
            RiskLevel::Elevated
        } else {
            RiskLevel::Low
        }
    }

    /// Returns true once the project has reached full completion
    pub fn is_complete(&self) -> bool {
        self.completion >= 100.0
    }
}

/// One aggregate sample in the rolling trend window.
///
/// Unlike per-project metrics, trend values are not clamped and may drift
/// outside [0, 100] over a long run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    /// Display-formatted date label
    pub date: String,
    /// Aggregate efficiency value
    pub efficiency: f64,
    /// Aggregate utilization value
    pub utilization: f64,
    /// Aggregate risk value
    pub risk: f64,
}

/// Builds the four seed projects every session starts from.
pub fn default_projects() -> Vec<ProjectMetrics> {
    vec![
        ProjectMetrics {
            name: ProjectName::new("Project A".to_string()).expect("valid seed name"),
            utilization: 80.0,
            budget: 100_000.0,
            staff: 15,
            equipment: 8,
            efficiency: 85.0,
            completion: 70.0,
            risk: 25.0,
            status: ProjectStatus::Active,
        },
        ProjectMetrics {
            name: ProjectName::new("Project B".to_string()).expect("valid seed name"),
            utilization: 60.0,
            budget: 75_000.0,
            staff: 12,
            equipment: 6,
            efficiency: 75.0,
            completion: 45.0,
            risk: 35.0,
            status: ProjectStatus::Active,
        },
        ProjectMetrics {
            name: ProjectName::new("Project C".to_string()).expect("valid seed name"),
            utilization: 40.0,
            budget: 50_000.0,
            staff: 8,
            equipment: 4,
            efficiency: 65.0,
            completion: 30.0,
            risk: 45.0,
            status: ProjectStatus::Active,
        },
        ProjectMetrics {
            name: ProjectName::new("Project D".to_string()).expect("valid seed name"),
            utilization: 70.0,
            budget: 85_000.0,
            staff: 10,
            equipment: 7,
            efficiency: 80.0,
            completion: 60.0,
            risk: 30.0,
            status: ProjectStatus::Active,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_validation() {
        assert!(ProjectName::new("Project A".to_string()).is_ok());
        assert!(ProjectName::new("".to_string()).is_err());
        assert!(ProjectName::new("a".repeat(65)).is_err());
    }

    #[test]
    fn test_default_projects() {
        let projects = default_projects();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[0].name.as_str(), "Project A");
        assert_eq!(projects[0].utilization, 80.0);
        assert_eq!(projects[3].budget, 85_000.0);
        assert!(projects
            .iter()
            .all(|p| p.status == ProjectStatus::Active));
    }

    #[test]
    fn test_risk_levels() {
        let mut project = ProjectMetrics::new(ProjectName::new("p".to_string()).unwrap());
        project.risk = 10.0;
        assert_eq!(project.risk_level(), RiskLevel::Low);
        project.risk = 45.0;
        assert_eq!(project.risk_level(), RiskLevel::Elevated);
        project.risk = 80.0;
        assert_eq!(project.risk_level(), RiskLevel::High);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::Active.to_string(), "active");
        assert_eq!(ProjectStatus::OnHold.as_str(), "on-hold");
    }
}
