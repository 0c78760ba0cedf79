//! # Project Data Structures
//!
//! The `Project` struct is the root container for a set of design
//! scenarios (e.g. one per heading, age, or candidate spacing). Projects
//! serialize to `.spd` (shotcrete panel design) files as human-readable
//! JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! └── scenarios: HashMap<Uuid, Scenario> (named design inputs)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use shotcrete_core::project::{Project, Scenario};
//! use shotcrete_core::design::DesignInput;
//! use shotcrete_core::loads::PanelLoadModel;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Tunnelling");
//! let input = DesignInput::new(1.5, 0.10, 0.25, 25.0,
//!     PanelLoadModel::PyramidalWedge { theta_deg: 60.0 });
//! let id = project.add_scenario(Scenario::new("Crown, 28d", input));
//! assert!(project.get_scenario(&id).is_some());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::design::DesignInput;

/// Current schema version for .spd files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One named design scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// User label (e.g. "Crown pillar, 7d", "Drive A heading")
    pub label: String,

    /// The full design input for this scenario
    pub input: DesignInput,
}

impl Scenario {
    pub fn new(label: impl Into<String>, input: DesignInput) -> Self {
        Scenario {
            label: label.into(),
            input,
        }
    }
}

/// Root project container, serialized to `.spd` files.
///
/// Scenarios live in a flat UUID-keyed map: O(1) lookups, no duplicate-ID
/// issues, stable references when the UI reorders its list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// All design scenarios, keyed by UUID
    pub scenarios: HashMap<Uuid, Scenario>,
}

impl Project {
    /// Create a new empty project.
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            scenarios: HashMap::new(),
        }
    }

    /// Add a scenario and return its assigned UUID.
    pub fn add_scenario(&mut self, scenario: Scenario) -> Uuid {
        let id = Uuid::new_v4();
        self.scenarios.insert(id, scenario);
        self.touch();
        id
    }

    /// Remove a scenario by UUID, returning it if present.
    pub fn remove_scenario(&mut self, id: &Uuid) -> Option<Scenario> {
        let scenario = self.scenarios.remove(id);
        if scenario.is_some() {
            self.touch();
        }
        scenario
    }

    /// Get a scenario by UUID.
    pub fn get_scenario(&self, id: &Uuid) -> Option<&Scenario> {
        self.scenarios.get(id)
    }

    /// Get a mutable scenario reference. Marks the project modified when
    /// the scenario exists.
    pub fn get_scenario_mut(&mut self, id: &Uuid) -> Option<&mut Scenario> {
        if self.scenarios.contains_key(id) {
            self.meta.modified = Utc::now();
            self.scenarios.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of scenarios in the project.
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::PanelLoadModel;

    fn sample_input() -> DesignInput {
        DesignInput::new(
            1.5,
            0.10,
            0.25,
            25.0,
            PanelLoadModel::FlatBlock { h_block_m: 0.6 },
        )
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("Jane Doe", "25-042", "ACME Tunnelling");
        assert_eq!(project.meta.engineer, "Jane Doe");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.scenario_count(), 0);
    }

    #[test]
    fn test_add_remove_scenario() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        let id = project.add_scenario(Scenario::new("Crown, 28d", sample_input()));

        assert_eq!(project.scenario_count(), 1);
        assert_eq!(project.get_scenario(&id).unwrap().label, "Crown, 28d");

        let removed = project.remove_scenario(&id);
        assert!(removed.is_some());
        assert_eq!(project.scenario_count(), 0);
    }

    #[test]
    fn test_get_scenario_mut_touches() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        let id = project.add_scenario(Scenario::new("A", sample_input()));
        let before = project.meta.modified;

        if let Some(scenario) = project.get_scenario_mut(&id) {
            scenario.label = "B".to_string();
        }
        assert!(project.meta.modified >= before);
        assert_eq!(project.get_scenario(&id).unwrap().label, "B");
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Jane Engineer", "25-042", "Test Client");
        project.add_scenario(Scenario::new("Drive A", sample_input()));

        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("Drive A"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.engineer, "Jane Engineer");
        assert_eq!(roundtrip.scenario_count(), 1);
    }
}
