// Core types for the Theory of Change form - no dioxus imports needed here
use serde::{Deserialize, Serialize};

use super::form_validation::validate_field;

/// The editable attributes of a project, in the order the form walks through them
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectField {
    Goal,
    Aim,
    Beneficiaries,
    Activities,
    Objectives,
    ExternalInfluences,
}

impl ProjectField {
    pub const ALL: [ProjectField; 6] = [
        ProjectField::Goal,
        ProjectField::Aim,
        ProjectField::Beneficiaries,
        ProjectField::Activities,
        ProjectField::Objectives,
        ProjectField::ExternalInfluences,
    ];

    /// Record key, also used in element ids and messages
    pub fn key(&self) -> &'static str {
        match self {
            ProjectField::Goal => "goal",
            ProjectField::Aim => "aim",
            ProjectField::Beneficiaries => "beneficiaries",
            ProjectField::Activities => "activities",
            ProjectField::Objectives => "objectives",
            ProjectField::ExternalInfluences => "externalInfluences",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectField::Goal => "Step 1: Identify Big-Picture Goal",
            ProjectField::Aim => "Step 2: Define Project Aim",
            ProjectField::Beneficiaries => "Step 3: Define Project Beneficiaries",
            ProjectField::Activities => "Step 4: Define Project Activities",
            ProjectField::Objectives => "Step 5: Define Project Objectives",
            ProjectField::ExternalInfluences => "Step 6: External Influences",
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            ProjectField::Goal => "e.g., Reduce poverty in rural areas within 5 years",
            ProjectField::Aim => "e.g., Improve access to clean water for villages",
            ProjectField::Beneficiaries => "e.g., Rural households, farmers, local schools",
            ProjectField::Activities => "e.g., Build wells, train locals, provide water filters",
            ProjectField::Objectives => "e.g., 80% households with safe drinking water in 2 years",
            ProjectField::ExternalInfluences => "e.g., Government policies, climate conditions",
        }
    }

    pub fn placeholder(&self) -> String {
        format!("Enter {}...", self.key())
    }

    /// Beneficiaries is a short list, everything else gets a textarea
    pub fn is_single_line(&self) -> bool {
        matches!(self, ProjectField::Beneficiaries)
    }

    fn index(&self) -> usize {
        match self {
            ProjectField::Goal => 0,
            ProjectField::Aim => 1,
            ProjectField::Beneficiaries => 2,
            ProjectField::Activities => 3,
            ProjectField::Objectives => 4,
            ProjectField::ExternalInfluences => 5,
        }
    }
}

/// The project record the form is bound to. Owned by the page, not the form.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectData {
    pub project_title: String,
    pub goal: String,
    pub aim: String,
    pub beneficiaries: String,
    pub activities: String,
    pub objectives: String,
    pub external_influences: String,
}

impl ProjectData {
    pub fn with_title(title: &str) -> Self {
        Self {
            project_title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Goal => &self.goal,
            ProjectField::Aim => &self.aim,
            ProjectField::Beneficiaries => &self.beneficiaries,
            ProjectField::Activities => &self.activities,
            ProjectField::Objectives => &self.objectives,
            ProjectField::ExternalInfluences => &self.external_influences,
        }
    }

    /// Replace one editable attribute. The title has no setter here.
    pub fn set(&mut self, field: ProjectField, value: String) {
        let slot = match field {
            ProjectField::Goal => &mut self.goal,
            ProjectField::Aim => &mut self.aim,
            ProjectField::Beneficiaries => &mut self.beneficiaries,
            ProjectField::Activities => &mut self.activities,
            ProjectField::Objectives => &mut self.objectives,
            ProjectField::ExternalInfluences => &mut self.external_influences,
        };
        *slot = value;
    }

    pub fn display_title(&self) -> &str {
        if self.project_title.is_empty() {
            "Untitled Project"
        } else {
            &self.project_title
        }
    }
}

/// One optional error message per editable attribute
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldErrors {
    messages: [Option<String>; 6],
}

impl FieldErrors {
    pub fn get(&self, field: ProjectField) -> Option<&str> {
        self.messages[field.index()].as_deref()
    }

    pub fn set(&mut self, field: ProjectField, error: Option<String>) {
        self.messages[field.index()] = error;
    }

    pub fn is_empty(&self) -> bool {
        self.messages.iter().all(Option::is_none)
    }
}

/// Local state of the form panel
#[derive(Clone, PartialEq, Debug)]
pub struct FormPanelState {
    pub errors: FieldErrors,
    pub is_open: bool,
}

impl Default for FormPanelState {
    fn default() -> Self {
        Self {
            errors: FieldErrors::default(),
            is_open: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum FormPanelAction {
    /// Re-check a single field against the value the user just typed
    ValidateField(ProjectField, String),
    ToggleSidebar,
}

impl FormPanelState {
    /// Reduces the state in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: FormPanelAction) {
        match action {
            FormPanelAction::ValidateField(field, value) => {
                self.errors.set(field, validate_field(field, &value));
            }
            FormPanelAction::ToggleSidebar => {
                self.is_open = !self.is_open;
            }
        }
    }

    pub fn sidebar_class(&self) -> &'static str {
        if self.is_open {
            "sidebar open"
        } else {
            "sidebar collapsed"
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.is_open {
            "←"
        } else {
            "→"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_and_keys() {
        let keys: Vec<&str> = ProjectField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec!["goal", "aim", "beneficiaries", "activities", "objectives", "externalInfluences"]
        );
        assert!(ProjectField::Beneficiaries.is_single_line());
        assert!(!ProjectField::Goal.is_single_line());
        assert_eq!(ProjectField::Aim.placeholder(), "Enter aim...");
    }

    #[test]
    fn test_set_leaves_title_alone() {
        let mut data = ProjectData::with_title("Clean Water");
        for field in ProjectField::ALL {
            data.set(field, format!("{} text", field.key()));
        }

        assert_eq!(data.project_title, "Clean Water");
        assert_eq!(data.get(ProjectField::ExternalInfluences), "externalInfluences text");
        assert_eq!(data.get(ProjectField::Goal), "goal text");
    }

    #[test]
    fn test_display_title_fallback() {
        assert_eq!(ProjectData::default().display_title(), "Untitled Project");
        assert_eq!(ProjectData::with_title("Wells").display_title(), "Wells");
    }

    #[test]
    fn test_serializes_with_record_keys() {
        let mut data = ProjectData::with_title("T");
        data.set(ProjectField::ExternalInfluences, "policy".to_string());

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["projectTitle"], "T");
        assert_eq!(json["externalInfluences"], "policy");

        // Missing keys fall back to empty strings
        let partial: ProjectData = serde_json::from_str(r#"{"goal":"g"}"#).unwrap();
        assert_eq!(partial.goal, "g");
        assert_eq!(partial.aim, "");
    }

    #[test]
    fn test_validation_is_per_field() {
        let mut state = FormPanelState::default();
        assert!(state.errors.is_empty());

        state.reduce_in_place(FormPanelAction::ValidateField(ProjectField::Goal, "  ".to_string()));
        state.reduce_in_place(FormPanelAction::ValidateField(ProjectField::Aim, "".to_string()));
        assert_eq!(state.errors.get(ProjectField::Goal), Some("goal is required"));
        assert_eq!(state.errors.get(ProjectField::Aim), Some("aim is required"));

        // Fixing one field clears only that field
        state.reduce_in_place(FormPanelAction::ValidateField(ProjectField::Goal, "x".to_string()));
        assert_eq!(state.errors.get(ProjectField::Goal), None);
        assert_eq!(state.errors.get(ProjectField::Aim), Some("aim is required"));
        assert_eq!(state.errors.get(ProjectField::Objectives), None);
    }

    #[test]
    fn test_sidebar_toggle() {
        let mut state = FormPanelState::default();
        assert_eq!(state.sidebar_class(), "sidebar open");
        assert_eq!(state.toggle_icon(), "←");

        state.reduce_in_place(FormPanelAction::ToggleSidebar);
        assert_eq!(state.sidebar_class(), "sidebar collapsed");
        assert_eq!(state.toggle_icon(), "→");

        // Collapsing does not disturb errors
        assert!(state.errors.is_empty());
    }
}
