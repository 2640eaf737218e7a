//! The configuration store: one read-only [`Portfolio`] per process.
//!
//! The stock content (`content/portfolio.toml`) is compiled into the binary.
//! [`stock`] parses it once on first use and hands out a `&'static` reference
//! from then on. [`load_portfolio`] builds a store for a content directory by
//! layering that directory's `portfolio.toml` over the stock content with the
//! same merge rules as the site settings ([`config::merge_toml`]).
//!
//! Loading is the only fallible step. Once a `Portfolio` exists every read
//! is total: the query layer never errors, it returns `None` or an empty `Vec`.
//!
//! [`lint`] reports content problems the store tolerates but an editor would
//! want to know about (duplicate slugs, dangling references, tier/percentage
//! disagreements). It is advisory and never blocks loading.

use crate::config;
use crate::query;
use crate::types::{Portfolio, ProficiencyLevel};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

/// Name of the content overlay file inside the content directory.
pub const PORTFOLIO_FILENAME: &str = "portfolio.toml";

const STOCK_CONTENT: &str = include_str!("../content/portfolio.toml");

static STOCK: LazyLock<Portfolio> =
    LazyLock::new(|| toml::from_str(STOCK_CONTENT).expect("stock content must parse"));

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Content parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// The stock portfolio, parsed on first access.
pub fn stock() -> &'static Portfolio {
    &STOCK
}

/// Raw stock content as a TOML table, the base layer for overlays.
pub fn stock_content_value() -> toml::Value {
    toml::from_str(STOCK_CONTENT).expect("stock content must parse")
}

/// Build the portfolio for a content directory.
///
/// Without a `portfolio.toml` this is a copy of the stock content. With one,
/// its tables are merged key by key over the stock tables and its arrays
/// replace the stock arrays. Unknown keys are rejected.
pub fn load_portfolio(dir: &Path) -> Result<Portfolio, StoreError> {
    let path = dir.join(PORTFOLIO_FILENAME);
    let base = stock_content_value();
    let merged = if path.exists() {
        let overlay: toml::Value = toml::from_str(&fs::read_to_string(&path)?)?;
        tracing::debug!(path = %path.display(), "merging content overlay");
        config::merge_toml(base, overlay)
    } else {
        base
    };
    let portfolio: Portfolio = merged.try_into()?;
    tracing::debug!(
        skills = portfolio.skills.len(),
        projects = portfolio.projects.len(),
        experience = portfolio.experience.len(),
        "portfolio loaded"
    );
    Ok(portfolio)
}

// =============================================================================
// Lint
// =============================================================================

/// An advisory finding about the content.
#[derive(Debug, Clone, PartialEq)]
pub enum LintWarning {
    DuplicateSlug(String),
    ProficiencyMismatch {
        skill: String,
        level: ProficiencyLevel,
        percent: u8,
    },
    UngroupedSkill {
        skill: String,
    },
    DanglingProjectRef {
        testimonial: String,
        project_id: String,
    },
    BadDate {
        owner: String,
        value: String,
    },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSlug(slug) => write!(f, "duplicate project slug '{slug}'"),
            Self::ProficiencyMismatch {
                skill,
                level,
                percent,
            } => {
                let (lo, hi) = level.percent_band();
                write!(
                    f,
                    "skill '{skill}' is {level:?} but {percent}% (expected {lo}-{hi}%)"
                )
            }
            Self::UngroupedSkill { skill } => {
                write!(f, "skill '{skill}' has no configured category")
            }
            Self::DanglingProjectRef {
                testimonial,
                project_id,
            } => write!(
                f,
                "testimonial '{testimonial}' references unknown project '{project_id}'"
            ),
            Self::BadDate { owner, value } => write!(f, "'{owner}' has unparseable date '{value}'"),
        }
    }
}

/// Collect advisory warnings about the content. Order: slugs, skills,
/// testimonials, dates.
pub fn lint(portfolio: &Portfolio) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for project in &portfolio.projects {
        if !seen.insert(project.slug.as_str()) {
            warnings.push(LintWarning::DuplicateSlug(project.slug.clone()));
        }
    }

    let categories: HashSet<_> = portfolio.skill_categories.iter().map(|c| c.id).collect();
    for skill in &portfolio.skills {
        let (lo, hi) = skill.proficiency.percent_band();
        if skill.proficiency_percent < lo || skill.proficiency_percent > hi {
            warnings.push(LintWarning::ProficiencyMismatch {
                skill: skill.id.clone(),
                level: skill.proficiency,
                percent: skill.proficiency_percent,
            });
        }
        if !categories.contains(&skill.category) {
            warnings.push(LintWarning::UngroupedSkill {
                skill: skill.id.clone(),
            });
        }
    }

    for testimonial in &portfolio.testimonials {
        let Some(project_id) = &testimonial.project_id else {
            continue;
        };
        if query::project_for_testimonial(portfolio, testimonial).is_none() {
            warnings.push(LintWarning::DanglingProjectRef {
                testimonial: testimonial.id.clone(),
                project_id: project_id.clone(),
            });
        }
    }

    let dates = portfolio
        .experience
        .iter()
        .flat_map(|e| dated(&e.id, &e.start_date, e.end_date.as_deref()))
        .chain(
            portfolio
                .education
                .iter()
                .flat_map(|e| dated(&e.id, &e.start_date, e.end_date.as_deref())),
        )
        .chain(
            portfolio
                .certifications
                .iter()
                .flat_map(|c| dated(&c.id, &c.issue_date, c.expiry_date.as_deref())),
        );
    for (owner, value) in dates {
        if query::parse_iso_date(value).is_none() {
            warnings.push(LintWarning::BadDate {
                owner: owner.to_string(),
                value: value.to_string(),
            });
        }
    }

    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    warnings
}

fn dated<'a>(owner: &'a str, start: &'a str, end: Option<&'a str>) -> Vec<(&'a str, &'a str)> {
    std::iter::once((owner, start))
        .chain(end.map(|e| (owner, e)))
        .collect()
}
