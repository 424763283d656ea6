use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(Portfolio::embedded);

#[derive(Embed)]
#[folder = "content"]
struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file `{0}` not found")]
    Missing(String),
    #[error("content file is not valid UTF-8")]
    Encoding,
    #[error("couldn't parse content: {0}")]
    Parse(String),
    #[error("content field `{field}` must not be empty")]
    Empty { field: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroVariant {
    #[default]
    Static,
    Parallax,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceVariant {
    /// The whole card is the activation target.
    #[default]
    Flip,
    /// Explicit "View details" / "Return" controls.
    Disclosure,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    #[serde(default)]
    pub hero: HeroVariant,
    #[serde(default)]
    pub experience: ExperienceVariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub greeting: String,
    pub tagline: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuickFact {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub facts: Vec<QuickFact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    /// Icon CSS class, e.g. `devicon-python-plain`.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub gradient: String,
    pub skills: Vec<Skill>,
}

/// One job, shown as a flip card: summary on the front, responsibilities on the back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperienceRecord {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub domain: Option<String>,
    pub description: String,
    pub skills: Vec<String>,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    pub summary: String,
    /// Tool names highlighted inside responsibility bullets.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub records: Vec<ExperienceRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSize {
    Large,
    #[default]
    Medium,
    Small,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JourneyItem {
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub description: String,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub size: TileSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Moment {
    pub icon: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Journey {
    pub items: Vec<JourneyItem>,
    #[serde(default)]
    pub moments: Vec<Moment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hobby {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub blurb: String,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub layout: Layout,
    pub navigation: Vec<NavItem>,
    pub about: About,
    pub skills: Vec<SkillCategory>,
    pub experience: Experience,
    pub journey: Journey,
    #[serde(default)]
    pub hobbies: Vec<Hobby>,
    pub contact: Contact,
    pub footer_tagline: String,
}

/// Returns the embedded portfolio, parsed and validated on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

impl Portfolio {
    pub fn embedded() -> Result<Self, ContentError> {
        let file = ContentAssets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::Missing(PORTFOLIO_FILE.to_string()))?;
        let text = std::str::from_utf8(&file.data).map_err(|_| ContentError::Encoding)?;
        Self::from_json(text)
    }

    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_str(text).map_err(|e| ContentError::Parse(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Checks that every display string is non-empty, reporting the first offender by path.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut check = Checker::default();

        let p = &self.profile;
        check.text("profile.name", &p.name);
        check.text("profile.brand", &p.brand);
        check.text("profile.greeting", &p.greeting);
        check.text("profile.tagline", &p.tagline);
        check.text("profile.email", &p.email);

        for (i, item) in self.navigation.iter().enumerate() {
            check.text(format!("navigation[{i}].label"), &item.label);
            check.text(format!("navigation[{i}].href"), &item.href);
        }

        check.text("about.heading", &self.about.heading);
        check.all("about.paragraphs", &self.about.paragraphs);
        for (i, fact) in self.about.facts.iter().enumerate() {
            check.text(format!("about.facts[{i}].icon"), &fact.icon);
            check.text(format!("about.facts[{i}].label"), &fact.label);
            check.text(format!("about.facts[{i}].value"), &fact.value);
        }

        for (i, cat) in self.skills.iter().enumerate() {
            check.text(format!("skills[{i}].title"), &cat.title);
            check.text(format!("skills[{i}].description"), &cat.description);
            check.text(format!("skills[{i}].icon"), &cat.icon);
            for (j, skill) in cat.skills.iter().enumerate() {
                check.text(format!("skills[{i}].skills[{j}].name"), &skill.name);
                check.text(format!("skills[{i}].skills[{j}].icon"), &skill.icon);
            }
        }

        check.text("experience.summary", &self.experience.summary);
        check.all("experience.keywords", &self.experience.keywords);
        for (i, rec) in self.experience.records.iter().enumerate() {
            let base = format!("experience.records[{i}]");
            check.text(format!("{base}.role"), &rec.role);
            check.text(format!("{base}.company"), &rec.company);
            check.text(format!("{base}.period"), &rec.period);
            if let Some(domain) = &rec.domain {
                check.text(format!("{base}.domain"), domain);
            }
            check.text(format!("{base}.description"), &rec.description);
            check.all(&format!("{base}.skills"), &rec.skills);
            check.all(&format!("{base}.responsibilities"), &rec.responsibilities);
        }

        for (i, item) in self.journey.items.iter().enumerate() {
            check.text(format!("journey.items[{i}].title"), &item.title);
            check.text(format!("journey.items[{i}].subtitle"), &item.subtitle);
            check.text(format!("journey.items[{i}].icon"), &item.icon);
            check.text(format!("journey.items[{i}].description"), &item.description);
            check.all(&format!("journey.items[{i}].highlights"), &item.highlights);
        }
        for (i, moment) in self.journey.moments.iter().enumerate() {
            check.text(format!("journey.moments[{i}].icon"), &moment.icon);
            check.text(format!("journey.moments[{i}].label"), &moment.label);
        }

        for (i, hobby) in self.hobbies.iter().enumerate() {
            check.text(format!("hobbies[{i}].name"), &hobby.name);
            check.text(format!("hobbies[{i}].icon"), &hobby.icon);
            check.text(format!("hobbies[{i}].description"), &hobby.description);
        }

        check.text("contact.blurb", &self.contact.blurb);
        for (i, link) in self.contact.links.iter().enumerate() {
            check.text(format!("contact.links[{i}].label"), &link.label);
            check.text(format!("contact.links[{i}].href"), &link.href);
            check.text(format!("contact.links[{i}].icon"), &link.icon);
        }

        check.text("footer_tagline", &self.footer_tagline);

        check.finish()
    }
}

#[derive(Default)]
struct Checker {
    first_empty: Option<String>,
}

impl Checker {
    fn text(&mut self, field: impl Into<String>, value: &str) {
        if self.first_empty.is_none() && value.trim().is_empty() {
            self.first_empty = Some(field.into());
        }
    }

    fn all(&mut self, field: &str, values: &[String]) {
        for (i, v) in values.iter().enumerate() {
            self.text(format!("{field}[{i}]"), v);
        }
    }

    fn finish(self) -> Result<(), ContentError> {
        match self.first_empty {
            Some(field) => Err(ContentError::Empty { field }),
            None => Ok(()),
        }
    }
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

/// Year of an RFC 3339 timestamp, as stamped into `BUILD_TIME` by build.rs.
pub fn copyright_year(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp).ok().map(|t| t.year())
}

pub fn build_year() -> Option<i32> {
    copyright_year(env!("BUILD_TIME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> serde_json::Value {
        serde_json::json!({
            "profile": {
                "name": "Ada Lovelace",
                "brand": "Portfolio",
                "greeting": "Welcome",
                "tagline": "Data engineer",
                "email": "ada@example.com"
            },
            "navigation": [{ "label": "About", "href": "#about" }],
            "about": { "heading": "Hello", "paragraphs": ["One"], "facts": [] },
            "skills": [],
            "experience": {
                "summary": "Engineer",
                "records": [{
                    "role": "Data Engineer",
                    "company": "Analytical Engines",
                    "period": "1842 - Present",
                    "description": "Notes on the engine",
                    "skills": ["Python"],
                    "responsibilities": ["Wrote the first program"]
                }]
            },
            "journey": { "items": [] },
            "contact": { "blurb": "Say hi", "links": [] },
            "footer_tagline": "Crafted with precision"
        })
    }

    #[test]
    fn test_embedded_content_loads() {
        let loaded = Portfolio::embedded().expect("embedded content should be valid");
        assert!(!loaded.experience.records.is_empty());
        assert!(!loaded.contact.links.is_empty());
        assert_eq!(portfolio(), Ok(&loaded));
    }

    #[test]
    fn test_minimal_content_and_layout_defaults() {
        let portfolio = Portfolio::from_json(&minimal().to_string()).unwrap();
        assert_eq!(portfolio.layout, Layout::default());
        assert_eq!(portfolio.layout.experience, ExperienceVariant::Flip);
        assert_eq!(portfolio.layout.hero, HeroVariant::Static);
        assert!(portfolio.hobbies.is_empty());
        assert_eq!(portfolio.experience.records[0].domain, None);
    }

    #[test]
    fn test_missing_field_is_named() {
        let mut value = minimal();
        value["experience"]["records"][0]
            .as_object_mut()
            .unwrap()
            .remove("role");
        let err = Portfolio::from_json(&value.to_string()).unwrap_err();
        match err {
            ContentError::Parse(msg) => assert!(msg.contains("missing field `role`"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut value = minimal();
        value["contact"]["links"] = serde_json::json!([
            { "label": "GitHub", "href": "https://github.com", "icon": "x", "url": "oops" }
        ]);
        let err = Portfolio::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Parse(ref msg) if msg.contains("unknown field `url`")));
    }

    #[test]
    fn test_empty_string_reports_path() {
        let mut value = minimal();
        value["experience"]["records"][0]["responsibilities"] =
            serde_json::json!(["Wrote the first program", "  "]);
        let err = Portfolio::from_json(&value.to_string()).unwrap_err();
        assert_eq!(
            err,
            ContentError::Empty {
                field: "experience.records[0].responsibilities[1]".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "content field `experience.records[0].responsibilities[1]` must not be empty"
        );
    }

    #[test]
    fn test_first_empty_field_wins() {
        let mut value = minimal();
        value["profile"]["brand"] = serde_json::json!("");
        value["footer_tagline"] = serde_json::json!("");
        let err = Portfolio::from_json(&value.to_string()).unwrap_err();
        assert_eq!(
            err,
            ContentError::Empty {
                field: "profile.brand".to_string()
            }
        );
    }

    #[test]
    fn test_layout_variants_parse() {
        let mut value = minimal();
        value["layout"] = serde_json::json!({ "hero": "parallax", "experience": "disclosure" });
        let portfolio = Portfolio::from_json(&value.to_string()).unwrap();
        assert_eq!(portfolio.layout.hero, HeroVariant::Parallax);
        assert_eq!(portfolio.layout.experience, ExperienceVariant::Disclosure);

        value["layout"] = serde_json::json!({ "experience": "carousel" });
        assert!(Portfolio::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn test_copyright_year() {
        assert_eq!(copyright_year("2026-10-18T09:30:00+00:00"), Some(2026));
        assert_eq!(copyright_year("1999-12-31T23:59:59-08:00"), Some(1999));
        assert_eq!(copyright_year("yesterday"), None);
        assert!(build_year().is_some());
    }

    #[test]
    fn test_mailto_href() {
        assert_eq!(mailto_href("ada@example.com"), "mailto:ada@example.com");
    }
}
