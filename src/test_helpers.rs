//! Shared test utilities for the studio-site test suite.
//!
//! Provides record builders with sensible defaults, lookup helpers that panic
//! with the available keys on a miss, and contact form shortcuts.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut p = stock().clone();
//! p.skills = vec![
//!     skill("b", SkillCategory::Backend, 2, true),
//!     skill("a", SkillCategory::Frontend, 1, false),
//! ];
//! assert_eq!(ids(&query::skills(&p)), vec!["a", "b"]);
//!
//! let mut form = ContactForm::new(Duration::ZERO, Duration::ZERO);
//! fill(&mut form, &valid_values());
//! ```

use std::fs;
use tempfile::TempDir;

use crate::contact::{ContactForm, ContactValues, Field};
use crate::types::*;

// =========================================================================
// Content directories
// =========================================================================

/// An empty content directory. Loading from it yields the stock content and
/// default settings.
pub fn setup_content() -> TempDir {
    TempDir::new().unwrap()
}

/// A content directory holding the given files, e.g.
/// `[("site.toml", "[site]\nvariant = \"classic\"\n")]`.
pub fn setup_content_with(files: &[(&str, &str)]) -> TempDir {
    let tmp = setup_content();
    for (name, body) in files {
        fs::write(tmp.path().join(name), body).unwrap();
    }
    tmp
}

// =========================================================================
// Record builders
// =========================================================================

pub fn skill(id: &str, category: SkillCategory, order: i32, featured: bool) -> Skill {
    Skill {
        id: id.to_string(),
        name: id.to_uppercase(),
        category,
        proficiency: ProficiencyLevel::Advanced,
        proficiency_percent: 85,
        icon: None,
        color: None,
        years_of_experience: None,
        featured,
        order,
    }
}

pub fn project(id: &str, order: i32, featured: bool, tech: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: id.to_string(),
        slug: id.to_string(),
        short_description: format!("{id} in short"),
        description: format!("About {id}."),
        category: "Web Development".to_string(),
        kind: ProjectType::Web,
        status: Status::Completed,
        featured,
        order,
        tech_stack: tech.iter().map(|t| t.to_string()).collect(),
        links: vec![],
        images: vec![],
        highlights: None,
        client: None,
        duration: None,
        year: 2024,
        tags: vec![],
    }
}

pub fn experience(id: &str, start: &str, end: Option<&str>, order: i32) -> Experience {
    Experience {
        id: id.to_string(),
        company: format!("{id} Inc"),
        company_url: None,
        company_logo: None,
        role: "Developer".to_string(),
        kind: EmploymentType::FullTime,
        location: "Remote".to_string(),
        remote: true,
        start_date: start.to_string(),
        end_date: end.map(str::to_string),
        current: false,
        description: String::new(),
        responsibilities: vec![],
        highlights: vec![],
        tech_stack: vec![],
        order,
    }
}

pub fn certification(id: &str, expiry: Option<&str>, order: i32) -> Certification {
    Certification {
        id: id.to_string(),
        name: id.to_string(),
        issuer: "Issuer".to_string(),
        issuer_logo: None,
        issue_date: "2020-01-01".to_string(),
        expiry_date: expiry.map(str::to_string),
        credential_id: None,
        credential_url: None,
        skills: None,
        featured: false,
        order,
    }
}

pub fn testimonial(id: &str, project_id: Option<&str>, order: i32, featured: bool) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        author: format!("Author {id}"),
        role: "CTO".to_string(),
        company: "Acme".to_string(),
        company_url: None,
        avatar: None,
        content: format!("Quote {id}"),
        rating: Some(5),
        project_id: project_id.map(str::to_string),
        featured,
        order,
    }
}

// =========================================================================
// Lookups and extractors
// =========================================================================

/// Records with a string identifier.
pub trait HasId {
    fn id(&self) -> &str;
}

macro_rules! impl_has_id {
    ($($ty:ty),* $(,)?) => {
        $(impl HasId for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_has_id!(
    Skill,
    Project,
    Experience,
    Education,
    Certification,
    Service,
    Testimonial
);

/// Identifiers in slice order.
pub fn ids<T: HasId>(items: &[&T]) -> Vec<String> {
    items.iter().map(|i| i.id().to_string()).collect()
}

/// Find a project by slug. Panics if not found.
pub fn find_project<'a>(portfolio: &'a Portfolio, slug: &str) -> &'a Project {
    portfolio
        .projects
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = portfolio.projects.iter().map(|p| p.slug.as_str()).collect();
            panic!("project '{slug}' not found. Available: {slugs:?}")
        })
}

// =========================================================================
// Contact form
// =========================================================================

/// Values that pass every field rule.
pub fn valid_values() -> ContactValues {
    ContactValues {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        subject: "Project inquiry".to_string(),
        message: "This is a ten-plus character message.".to_string(),
    }
}

/// Type every value into the form without blurring.
pub fn fill(form: &mut ContactForm, values: &ContactValues) {
    for field in Field::ALL {
        form.change(field, values.get(field));
    }
}
