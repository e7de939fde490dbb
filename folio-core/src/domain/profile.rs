//! Profile — the full set of biographical content rendered on the page.

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Pictogram shown next to a stat or skill group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Users,
    Building,
    Award,
    LineChart,
    Code,
    Cloud,
    Server,
    Shield,
}

/// How a contact link is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Mail,
    Phone,
    #[serde(rename = "linkedin")]
    LinkedIn,
}

/// A contact link shown in the hero banner and (mail, LinkedIn) in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    /// Text shown to the reader.
    pub label: String,
    /// `mailto:`, `tel:` or web URL.
    pub target: String,
}

/// Summary statistic, animated by a counter unit and shown with a `+` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: Icon,
    pub value: u64,
    pub label: String,
}

/// A skill card: icon, title and a list of skill chips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub icon: Icon,
    pub title: String,
    pub skills: Vec<String>,
}

/// One collapsible career record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Period label, e.g. "2016 - Present".
    pub period: String,
    pub role: String,
    pub organization: String,
    pub summary: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Absent means the technologies section is omitted, not rendered empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

/// Everything the page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Short monogram shown at the left of the navigation bar.
    pub initials: String,
    #[serde(default)]
    pub nav_items: Vec<String>,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl Profile {
    /// Reject profiles the page cannot render sensibly.
    pub fn validate(&self) -> Result<(), FolioError> {
        if self.name.trim().is_empty() {
            return Err(FolioError::InvalidProfile("name is empty".into()));
        }
        if let Some(i) = self.skills.iter().position(|g| g.title.trim().is_empty()) {
            return Err(FolioError::InvalidProfile(format!(
                "skill group {i} has an empty title"
            )));
        }
        if let Some(i) = self.timeline.iter().position(|e| e.role.trim().is_empty()) {
            return Err(FolioError::InvalidProfile(format!(
                "timeline entry {i} has an empty role"
            )));
        }
        Ok(())
    }

    /// Contacts repeated in the footer: mail and LinkedIn, in profile order.
    pub fn footer_contacts(&self) -> impl Iterator<Item = &ContactLink> {
        self.contacts
            .iter()
            .filter(|c| matches!(c.kind, ContactKind::Mail | ContactKind::LinkedIn))
    }
}
