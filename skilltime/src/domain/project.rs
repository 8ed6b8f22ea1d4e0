use serde::{Deserialize, Serialize};

use super::{ProjectId, TrackerError};

/// Display color used to group a project's entries in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectColor {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Teal,
}

impl ProjectColor {
    pub const ALL: [ProjectColor; 6] = [
        ProjectColor::Blue,
        ProjectColor::Green,
        ProjectColor::Purple,
        ProjectColor::Orange,
        ProjectColor::Red,
        ProjectColor::Teal,
    ];

    /// The next color in the palette, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ProjectColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectColor::Blue => write!(f, "blue"),
            ProjectColor::Green => write!(f, "green"),
            ProjectColor::Purple => write!(f, "purple"),
            ProjectColor::Orange => write!(f, "orange"),
            ProjectColor::Red => write!(f, "red"),
            ProjectColor::Teal => write!(f, "teal"),
        }
    }
}

impl std::str::FromStr for ProjectColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blue" => Ok(ProjectColor::Blue),
            "green" => Ok(ProjectColor::Green),
            "purple" => Ok(ProjectColor::Purple),
            "orange" => Ok(ProjectColor::Orange),
            "red" => Ok(ProjectColor::Red),
            "teal" => Ok(ProjectColor::Teal),
            _ => Err(format!("Unknown project color: {}", s)),
        }
    }
}

/// A billable client engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub client: String,
    pub hourly_rate: f64,
    pub color: ProjectColor,
}

impl Project {
    pub fn new(
        id: impl Into<ProjectId>,
        name: impl Into<String>,
        client: impl Into<String>,
        hourly_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            client: client.into(),
            hourly_rate,
            color: ProjectColor::default(),
        }
    }

    pub fn with_color(mut self, color: ProjectColor) -> Self {
        self.color = color;
        self
    }

    /// Build a new project from a validated form.
    pub fn from_form(id: ProjectId, form: &ProjectForm) -> Result<Self, TrackerError> {
        form.validate()?;
        Ok(Self {
            id,
            name: form.name.trim().to_string(),
            client: form.client.trim().to_string(),
            hourly_rate: form.hourly_rate,
            color: form.color,
        })
    }

    /// Overwrite the editable fields with the form values.
    pub fn apply_form(&mut self, form: &ProjectForm) -> Result<(), TrackerError> {
        form.validate()?;
        self.name = form.name.trim().to_string();
        self.client = form.client.trim().to_string();
        self.hourly_rate = form.hourly_rate;
        self.color = form.color;
        Ok(())
    }
}

/// Input for creating or editing a project.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectForm {
    pub name: String,
    pub client: String,
    pub hourly_rate: f64,
    pub color: ProjectColor,
}

impl ProjectForm {
    pub fn new(name: impl Into<String>, client: impl Into<String>, hourly_rate: f64) -> Self {
        Self {
            name: name.into(),
            client: client.into(),
            hourly_rate,
            color: ProjectColor::default(),
        }
    }

    pub fn with_color(mut self, color: ProjectColor) -> Self {
        self.color = color;
        self
    }

    /// Pre-fill a form from an existing project (edit flow).
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            client: project.client.clone(),
            hourly_rate: project.hourly_rate,
            color: project.color,
        }
    }

    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::BlankProjectField("name"));
        }
        if self.client.trim().is_empty() {
            return Err(TrackerError::BlankProjectField("client"));
        }
        if !self.hourly_rate.is_finite() || self.hourly_rate < 0.0 {
            return Err(TrackerError::InvalidRate(self.hourly_rate));
        }
        Ok(())
    }
}
