//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is a content inventory, not a file listing. Every entity leads with
//! its positional index (in display order) and its title; identifiers and
//! details follow as indented context lines. Positions are the order the page
//! shows things in, so `check` output reads top to bottom like the site.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Skills
//! 001 Frontend (4 skills)
//!     001 React 95%
//!     002 Next.js 95%
//!
//! Projects
//! 001 E-Commerce Platform [featured]
//!     Slug: ecommerce-platform
//!     Status: completed · 2024
//!
//! Experience
//! 001 Founder & Lead Developer at Cedar Core
//!     2020-01-01 → present
//! Total: 10 years
//!
//! Settings
//!     Variant: studio
//!     Form: submit after 1500ms, reset after 4000ms, no endpoint
//!     Render: dist (featured projects only)
//!
//! No content warnings
//! ```
//!
//! ## Render
//!
//! ```text
//! Rendered studio page → dist/index.html
//!     4 projects, 14 skills, 3 positions
//! ```
//!
//! ## Submit
//!
//! ```text
//! Not sent: 1 field needs attention
//!     Email: Please enter a valid email
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::contact::{ContactForm, Field, FormEvent};
use crate::query;
use crate::store::LintWarning;
use crate::types::{Portfolio, Status};
use chrono::NaiveDate;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional count.
///
/// ```text
/// 001 Frontend (4 skills)
/// 002 Tools
/// ```
fn entity_header(index: usize, title: &str, count: Option<(usize, &str)>) -> String {
    match count {
        Some((n, noun)) => format!("{} {} ({} {})", format_index(index), title, n, noun),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

fn status_name(status: Status) -> &'static str {
    match status {
        Status::Completed => "completed",
        Status::InProgress => "in progress",
        Status::Planned => "planned",
        Status::Archived => "archived",
    }
}

fn plural(n: i64, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the content inventory, settings and lint findings.
pub fn format_check_output(
    portfolio: &Portfolio,
    config: &SiteConfig,
    warnings: &[LintWarning],
    today: NaiveDate,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Skills".to_string());
    let mut position = 0;
    for (category, skills) in query::skills_grouped_by_category(portfolio) {
        if skills.is_empty() {
            continue;
        }
        position += 1;
        lines.push(entity_header(
            position,
            &category.label,
            Some((skills.len(), "skills")),
        ));
        for (i, skill) in skills.iter().enumerate() {
            lines.push(format!(
                "{}{} {} {}%",
                indent(1),
                format_index(i + 1),
                skill.name,
                skill.proficiency_percent
            ));
        }
    }

    lines.push(String::new());
    lines.push("Projects".to_string());
    for (i, project) in query::projects(portfolio).iter().enumerate() {
        let title = if project.featured {
            format!("{} [featured]", project.title)
        } else {
            project.title.clone()
        };
        lines.push(entity_header(i + 1, &title, None));
        lines.push(format!("{}Slug: {}", indent(1), project.slug));
        lines.push(format!(
            "{}Status: {} · {}",
            indent(1),
            status_name(project.status),
            project.year
        ));
        lines.push(format!(
            "{}Summary: {}",
            indent(1),
            truncate_desc(&project.short_description, 60)
        ));
    }

    lines.push(String::new());
    lines.push("Experience".to_string());
    for (i, exp) in query::experiences(portfolio).iter().enumerate() {
        lines.push(entity_header(
            i + 1,
            &format!("{} at {}", exp.role, exp.company),
            None,
        ));
        let end = match (&exp.end_date, exp.is_ongoing()) {
            (Some(end), false) => end.as_str(),
            _ => "present",
        };
        lines.push(format!("{}{} → {}", indent(1), exp.start_date, end));
    }
    lines.push(format!(
        "Total: {}",
        plural(query::total_experience_years_at(portfolio, today), "year")
    ));

    lines.push(String::new());
    lines.push("Settings".to_string());
    lines.push(format!("{}Variant: {}", indent(1), config.site.variant.as_str()));
    lines.push(format!(
        "{}Form: submit after {}ms, reset after {}ms, {}",
        indent(1),
        config.form.submit_delay_ms,
        config.form.reset_delay_ms,
        match &config.form.endpoint {
            Some(url) => format!("endpoint {url}"),
            None => "no endpoint".to_string(),
        }
    ));
    lines.push(format!(
        "{}Render: {}{}",
        indent(1),
        config.render.output_dir,
        if config.render.featured_projects_only {
            " (featured projects only)"
        } else {
            ""
        }
    ));

    lines.push(String::new());
    if warnings.is_empty() {
        lines.push("No content warnings".to_string());
    } else {
        lines.push(format!("Warnings ({})", warnings.len()));
        for warning in warnings {
            lines.push(format!("{}{}", indent(1), warning));
        }
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(
    portfolio: &Portfolio,
    config: &SiteConfig,
    warnings: &[LintWarning],
    today: NaiveDate,
) {
    for line in format_check_output(portfolio, config, warnings, today) {
        println!("{}", line);
    }
}

// ============================================================================
// Render
// ============================================================================

/// Format the summary printed after writing the page.
pub fn format_render_output(portfolio: &Portfolio, config: &SiteConfig, path: &Path) -> Vec<String> {
    let projects = if config.render.featured_projects_only {
        query::featured_projects(portfolio).len()
    } else {
        query::projects(portfolio).len()
    };
    vec![
        format!(
            "Rendered {} page \u{2192} {}",
            config.site.variant.as_str(),
            path.display()
        ),
        format!(
            "{}{} projects, {} skills, {} positions",
            indent(1),
            projects,
            query::skills(portfolio).len(),
            query::experiences(portfolio).len()
        ),
    ]
}

/// Print render output to stdout.
pub fn print_render_output(portfolio: &Portfolio, config: &SiteConfig, path: &Path) {
    for line in format_render_output(portfolio, config, path) {
        println!("{}", line);
    }
}

// ============================================================================
// Submit
// ============================================================================

/// Format the field errors of a rejected submission.
///
/// ```text
/// Not sent: 1 field needs attention
///     Email: Please enter a valid email
/// ```
pub fn format_submit_errors(form: &ContactForm) -> Vec<String> {
    let errors: Vec<(Field, &str)> = Field::ALL
        .into_iter()
        .filter_map(|f| form.visible_error(f).map(|e| (f, e)))
        .collect();
    let mut lines = vec![match errors.len() {
        1 => "Not sent: 1 field needs attention".to_string(),
        n => format!("Not sent: {n} fields need attention"),
    }];
    for (field, error) in errors {
        lines.push(format!("{}{}: {}", indent(1), field.label(), error));
    }
    lines
}

/// Format the timer transitions of an accepted submission.
pub fn format_submit_events(events: &[FormEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            FormEvent::Delivered => Some("Message sent".to_string()),
            FormEvent::DeliveryFailed(err) => Some(format!("Message not delivered: {err}")),
            FormEvent::Reset => None,
        })
        .collect()
}

pub fn print_submit_errors(form: &ContactForm) {
    for line in format_submit_errors(form) {
        println!("{}", line);
    }
}

pub fn print_submit_events(events: &[FormEvent]) {
    for line in format_submit_events(events) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
