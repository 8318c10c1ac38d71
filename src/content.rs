//! Static site content, embedded at build time from `content/site.json`.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::{cycler::CyclerTimings, progress::Percentage};

const EMBEDDED_CONTENT: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("profile must list at least one hero phrase")]
    NoPhrases,
    #[error("{0} must not be blank")]
    Blank(String),
    #[error("{context} has an invalid link `{href}`: {reason}")]
    InvalidLink {
        context: String,
        href: String,
        reason: &'static str,
    },
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Pink,
    Purple,
    Teal,
}

impl Accent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Teal => "teal",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Highlight {
    pub title: String,
    pub accent: Accent,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub avatar_url: String,
    pub phrases: Vec<String>,
    pub about: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    pub copyright: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Instagram,
    Email,
}

impl SocialKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Github => "GH",
            Self::Linkedin => "in",
            Self::Instagram => "IG",
            Self::Email => "@",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub href: String,
}

impl SocialLink {
    pub fn opens_new_tab(&self) -> bool {
        opens_in_new_tab(&self.href)
    }
}

/// `mailto:` links open the mail client in place; everything else gets a new tab.
pub fn opens_in_new_tab(href: &str) -> bool {
    !href.starts_with("mailto:")
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default)]
    percentage: Option<u32>,
}

impl SkillEntry {
    pub fn percentage(&self) -> Percentage {
        Percentage::from_optional(self.percentage)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SkillGroup {
    pub title: String,
    pub accent: Accent,
    pub skills: Vec<SkillEntry>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub repository_url: String,
    pub image_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Timings {
    pub typing_speed_ms: u32,
    pub deleting_speed_ms: u32,
    pub pause_after_typed_ms: u32,
    /// Added per list position to skill bar and project card delays.
    pub stagger_step_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        let cycler = CyclerTimings::default();
        Self {
            typing_speed_ms: cycler.typing_ms,
            deleting_speed_ms: cycler.deleting_ms,
            pause_after_typed_ms: cycler.pause_ms,
            stagger_step_ms: 200,
        }
    }
}

impl Timings {
    pub fn cycler(&self) -> CyclerTimings {
        CyclerTimings {
            typing_ms: self.typing_speed_ms,
            deleting_ms: self.deleting_speed_ms,
            pause_ms: self.pause_after_typed_ms,
        }
    }

    pub fn stagger_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.stagger_step_ms.saturating_mul(index)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub timings: Timings,
}

impl SiteContent {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let profile = &self.profile;
        ensure_not_blank("profile name", &profile.name)?;
        if profile.phrases.is_empty() {
            return Err(ContentError::NoPhrases);
        }
        ensure_link("profile avatar", &profile.avatar_url, WEB_SCHEMES)?;

        for link in &self.social {
            ensure_not_blank("social link label", &link.label)?;
            ensure_link(&link.label, &link.href, LINK_SCHEMES)?;
        }

        for group in &self.skill_groups {
            ensure_not_blank("skill group title", &group.title)?;
            for skill in &group.skills {
                ensure_not_blank(&format!("skill in {}", group.title), &skill.name)?;
            }
        }

        for project in &self.projects {
            ensure_not_blank("project title", &project.title)?;
            ensure_link(&project.title, &project.repository_url, WEB_SCHEMES)?;
            ensure_link(&project.title, &project.image_url, WEB_SCHEMES)?;
            if let Some(live_url) = project.live_url.as_deref() {
                ensure_link(&project.title, live_url, WEB_SCHEMES)?;
            }
        }

        Ok(())
    }
}

const WEB_SCHEMES: &[&str] = &["http", "https"];
const LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

fn ensure_not_blank(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::Blank(field.to_string()));
    }
    Ok(())
}

fn ensure_link(context: &str, href: &str, schemes: &[&str]) -> Result<(), ContentError> {
    let invalid = |reason| ContentError::InvalidLink {
        context: context.to_string(),
        href: href.to_string(),
        reason,
    };

    let parsed = Url::parse(href).map_err(|_| invalid("not an absolute URL"))?;
    if !schemes.contains(&parsed.scheme()) {
        return Err(invalid("unsupported scheme"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(phrases: &str, extra: &str) -> String {
        format!(
            r#"{{
                "profile": {{
                    "name": "Test Person",
                    "avatar_url": "https://example.com/me.jpg",
                    "phrases": {phrases},
                    "about": "About text",
                    "copyright": "(c) test"
                }}{extra}
            }}"#
        )
    }

    #[test]
    fn embedded_content_is_valid() {
        let content = SiteContent::embedded().expect("embedded content parses");
        assert_eq!(content.profile.phrases.len(), 3);
        assert_eq!(content.skill_groups.len(), 3);
        assert_eq!(content.projects.len(), 3);
        assert!(content.projects[0].live_url.is_some());
        assert!(content.projects[1].live_url.is_none());
        assert_eq!(content.timings.cycler(), CyclerTimings::default());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let content = SiteContent::from_json(&minimal_json(r#"["Hello"]"#, "")).expect("valid");
        assert!(content.social.is_empty());
        assert!(content.projects.is_empty());
        assert_eq!(content.timings, Timings::default());
        assert_eq!(content.timings.stagger_ms(3), 600);
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        let result = SiteContent::from_json(&minimal_json("[]", ""));
        assert!(matches!(result, Err(ContentError::NoPhrases)));
    }

    #[test]
    fn blank_names_are_rejected() {
        let blank_profile = minimal_json(r#"["Hi"]"#, "").replace("Test Person", "  ");
        assert!(matches!(
            SiteContent::from_json(&blank_profile),
            Err(ContentError::Blank(field)) if field == "profile name"
        ));

        let extra = r#",
            "skill_groups": [{
                "title": "Tools",
                "accent": "pink",
                "skills": [{ "name": "Figma", "percentage": 60 }, { "name": " ", "percentage": 10 }]
            }]"#;
        assert!(matches!(
            SiteContent::from_json(&minimal_json(r#"["Hi"]"#, extra)),
            Err(ContentError::Blank(field)) if field == "skill in Tools"
        ));

        let extra = r#",
            "social": [{ "kind": "github", "label": "", "href": "https://github.com/x" }]"#;
        assert!(matches!(
            SiteContent::from_json(&minimal_json(r#"["Hi"]"#, extra)),
            Err(ContentError::Blank(_))
        ));

        let extra = r#",
            "projects": [{
                "title": "\t",
                "description": "d",
                "repository_url": "https://github.com/x/y",
                "image_url": "https://example.com/i.png"
            }]"#;
        assert!(matches!(
            SiteContent::from_json(&minimal_json(r#"["Hi"]"#, extra)),
            Err(ContentError::Blank(field)) if field == "project title"
        ));
    }

    #[test]
    fn missing_percentage_reads_as_zero() {
        let extra = r#",
            "skill_groups": [{
                "title": "Tools",
                "accent": "teal",
                "skills": [{ "name": "Figma" }, { "name": "Canva", "percentage": 140 }]
            }]"#;
        let content = SiteContent::from_json(&minimal_json(r#"["Hi"]"#, extra)).expect("valid");
        let skills = &content.skill_groups[0].skills;

        assert_eq!(skills[0].percentage(), Percentage::ZERO);
        assert_eq!(skills[1].percentage().value(), 100);
    }

    #[test]
    fn bad_links_are_rejected() {
        let extra = r#",
            "social": [{ "kind": "github", "label": "GitHub", "href": "javascript:alert(1)" }]"#;
        let result = SiteContent::from_json(&minimal_json(r#"["Hi"]"#, extra));
        assert!(matches!(
            result,
            Err(ContentError::InvalidLink { reason: "unsupported scheme", .. })
        ));

        let extra = r#",
            "projects": [{
                "title": "Thing",
                "description": "d",
                "repository_url": "github.com/no-scheme",
                "image_url": "https://example.com/i.png"
            }]"#;
        let result = SiteContent::from_json(&minimal_json(r#"["Hi"]"#, extra));
        assert!(matches!(result, Err(ContentError::InvalidLink { .. })));
    }

    #[test]
    fn mail_links_stay_in_place() {
        let mail = SocialLink {
            kind: SocialKind::Email,
            label: "Email".to_string(),
            href: "mailto:someone@example.com".to_string(),
        };
        assert!(!mail.opens_new_tab());
        assert!(opens_in_new_tab("https://github.com/rasika-gup"));
        assert!(ensure_link("Email", &mail.href, LINK_SCHEMES).is_ok());
        assert!(ensure_link("Email", &mail.href, WEB_SCHEMES).is_err());
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = SiteContent::from_json("{ not json");
        assert!(matches!(result, Err(ContentError::Malformed(_))));
    }
}
