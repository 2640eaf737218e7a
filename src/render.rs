//! Landing page rendering.
//!
//! One page, built as a pure function of the portfolio (through [`query`]),
//! the contact form state, and the site settings. The page variant only
//! changes markup hooks (body class, section index labels); every variant
//! renders the same sections from the same data:
//!
//! ```text
//! nav · hero · about · services · projects · testimonials* · skills ·
//! experience · contact · footer                 (* behind the feature flag)
//! ```
//!
//! Styling is not produced here. Class names are stable hooks for whatever
//! stylesheet the deployment ships.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating, so
//! every interpolated string is escaped. Markdown project descriptions are
//! converted with pulldown-cmark; raw HTML inside them is escaped too.

use crate::config::{SiteConfig, Variant};
use crate::contact::{ContactForm, Field, MESSAGE_MAX_CHARS};
use crate::query;
use crate::types::*;
use chrono::{Datelike, NaiveDate};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a page render reads.
pub struct PageContext<'a> {
    pub portfolio: &'a Portfolio,
    pub config: &'a SiteConfig,
    pub form: &'a ContactForm,
    /// Reference date for derived values (years of experience, copyright).
    pub today: NaiveDate,
}

/// Render the page and write it to `<output_dir>/index.html`.
pub fn write_page(ctx: &PageContext<'_>, output_dir: &Path) -> Result<PathBuf, RenderError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("index.html");
    let markup = render_page(ctx);
    fs::write(&path, markup.into_string())?;
    tracing::info!(path = %path.display(), variant = ctx.config.site.variant.as_str(), "page written");
    Ok(path)
}

/// Render the full landing page.
pub fn render_page(ctx: &PageContext<'_>) -> Markup {
    let p = ctx.portfolio;
    let variant = ctx.config.site.variant;
    let home = query::page_seo(p, "home");

    let mut sections = vec![
        ("about", render_about(p, ctx.today)),
        ("services", render_services(p)),
        (
            "projects",
            render_projects(p, ctx.config.render.featured_projects_only),
        ),
    ];
    if query::is_feature_enabled(p, Feature::Testimonials) {
        sections.push(("testimonials", render_testimonials(p)));
    }
    sections.push(("skills", render_skills(p)));
    sections.push(("experience", render_experience(p)));
    sections.push(("contact", render_contact(p, ctx.form)));

    let content = html! {
        (site_header(p))
        main {
            (render_hero(p))
            @for (idx, (id, body)) in sections.iter().enumerate() {
                section id=(id) {
                    @if variant == Variant::Studio {
                        span.section-index { (format!("{:02}", idx + 1)) " / " (id) }
                    }
                    (body)
                }
            }
        }
        (site_footer(p, ctx.today))
    };

    base_document(
        &query::full_page_title(p, None),
        &home.description,
        &p.seo.theme_color,
        variant,
        content,
    )
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    title: &str,
    description: &str,
    theme_color: &str,
    variant: Variant,
    content: Markup,
) -> Markup {
    let body_class = format!("variant-{}", variant.as_str());
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                meta name="theme-color" content=(theme_color);
                title { (title) }
            }
            body class=(body_class) {
                (content)
            }
        }
    }
}

/// Brand and main navigation
fn site_header(p: &Portfolio) -> Markup {
    let brand = query::branding(p);
    html! {
        header.site-header {
            a.brand href="/" {
                img src=(brand.logo.light) alt=(brand.name);
                span { (brand.name) }
            }
            nav.site-nav {
                ul {
                    @for item in query::main_navigation(p) {
                        li {
                            @if item.external == Some(true) {
                                a href=(item.href) target="_blank" rel="noopener" { (item.label) }
                            } @else {
                                a href=(item.href) { (item.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn cta_buttons(cta: &Cta) -> Markup {
    html! {
        div.cta-buttons {
            a.button.primary href=(cta.primary_button.href) { (cta.primary_button.text) }
            @if let Some(secondary) = &cta.secondary_button {
                a.button.secondary href=(secondary.href) { (secondary.text) }
            }
        }
    }
}

/// Markdown to HTML with raw HTML blocks escaped.
fn markdown(source: &str) -> Markup {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

/// `2020-01-01` → `Jan 2020`; unparseable dates are shown as written.
fn month_year(date: &str) -> String {
    match query::parse_iso_date(date) {
        Some(d) => d.format("%b %Y").to_string(),
        None => date.to_string(),
    }
}

// ============================================================================
// Sections
// ============================================================================

fn render_hero(p: &Portfolio) -> Markup {
    let personal = query::personal_info(p);
    html! {
        section.hero id="hero" {
            p.role { (personal.role) }
            h1 { (personal.tagline) }
            p.lead { (personal.short_bio) }
            @if let Some(cta) = query::cta(p, "hero") {
                (cta_buttons(cta))
            }
            dl.statistics {
                @for stat in query::statistics(p) {
                    div.statistic {
                        dt { (stat.label) }
                        dd { (stat.value) @if let Some(suffix) = &stat.suffix { (suffix) } }
                    }
                }
            }
        }
    }
}

fn render_about(p: &Portfolio, today: NaiveDate) -> Markup {
    let personal = query::personal_info(p);
    let years = query::total_experience_years_at(p, today);
    html! {
        h2 { "About " (personal.name) }
        p.bio { (personal.bio) }
        @if years > 0 {
            p.experience-years { (years) "+ years of experience" }
        }
        ul.values {
            @for value in query::values(p) {
                li {
                    h3 { (value.title) }
                    p { (value.description) }
                }
            }
        }
        @let principles = query::principles(p);
        @if !principles.is_empty() {
            ol.principles {
                @for principle in principles {
                    li {
                        strong { (principle.title) }
                        " "
                        span { (principle.description) }
                    }
                }
            }
        }
    }
}

fn render_services(p: &Portfolio) -> Markup {
    html! {
        h2 { "Services" }
        div.service-grid {
            @for service in query::services(p) {
                article.service id=(service.id) {
                    h3 { (service.title) }
                    p { (service.short_description) }
                    ul.features {
                        @for feature in &service.features {
                            li { (feature) }
                        }
                    }
                }
            }
        }
    }
}

fn render_projects(p: &Portfolio, featured_only: bool) -> Markup {
    let projects = if featured_only {
        query::featured_projects(p)
    } else {
        query::projects(p)
    };
    html! {
        h2 { "Projects" }
        div.project-grid {
            @for project in projects {
                (render_project(project))
            }
        }
    }
}

fn render_project(project: &Project) -> Markup {
    let image = project
        .image(ImageType::Hero)
        .or_else(|| project.image(ImageType::Thumbnail));
    html! {
        article.project id=(project.slug) data-status=(status_label(project.status)) {
            @if let Some(img) = image {
                img src=(img.src) alt=(img.alt) loading="lazy";
            }
            header {
                span.category { (project.category) }
                h3 { (project.title) }
                span.year { (project.year) }
            }
            div.description { (markdown(&project.description)) }
            @if let Some(highlights) = &project.highlights {
                ul.highlights {
                    @for h in highlights {
                        li { (h) }
                    }
                }
            }
            ul.tech-stack {
                @for tech in &project.tech_stack {
                    li { (tech) }
                }
            }
            @if !project.links.is_empty() {
                nav.project-links {
                    @for link in &project.links {
                        a href=(link.url) { (link.label) }
                    }
                }
            }
        }
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Completed => "completed",
        Status::InProgress => "in-progress",
        Status::Planned => "planned",
        Status::Archived => "archived",
    }
}

fn render_testimonials(p: &Portfolio) -> Markup {
    html! {
        h2 { "What Clients Say" }
        @for t in query::featured_testimonials(p) {
            blockquote.testimonial {
                p { (t.content) }
                footer {
                    cite { (t.author) }
                    ", " (t.role) " at " (t.company)
                    @if let Some(project) = query::project_for_testimonial(p, t) {
                        " · "
                        a href={ "#" (project.slug) } { (project.title) }
                    }
                }
            }
        }
    }
}

fn render_skills(p: &Portfolio) -> Markup {
    html! {
        h2 { "Skills" }
        @for (category, skills) in query::skills_grouped_by_category(p) {
            @if !skills.is_empty() {
                div.skill-category data-category=(category.label) {
                    h3 { (category.label) }
                    @if let Some(desc) = &category.description {
                        p { (desc) }
                    }
                    ul {
                        @for skill in skills {
                            li.skill {
                                span.name { (skill.name) }
                                meter min="0" max="100" value=(skill.proficiency_percent) {
                                    (skill.proficiency_percent) "%"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_experience(p: &Portfolio) -> Markup {
    html! {
        h2 { "Experience" }
        ol.timeline {
            @for exp in query::experiences(p) {
                li.position {
                    h3 { (exp.role) " · " (exp.company) }
                    p.dates {
                        (month_year(&exp.start_date)) " – "
                        @match (&exp.end_date, exp.is_ongoing()) {
                            (Some(end), false) => { (month_year(end)) }
                            _ => { "Present" }
                        }
                    }
                    p { (exp.description) }
                    @if !exp.highlights.is_empty() {
                        ul.highlights {
                            @for h in &exp.highlights {
                                li {
                                    (h.text)
                                    @if let Some(metrics) = &h.metrics {
                                        " " span.metrics { (metrics) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_contact(p: &Portfolio, form: &ContactForm) -> Markup {
    let availability = query::availability(p);
    let status = match availability.status {
        AvailabilityStatus::Available => "available",
        AvailabilityStatus::Limited => "limited",
        AvailabilityStatus::Unavailable => "unavailable",
    };
    html! {
        @if let Some(cta) = query::cta(p, "contact") {
            h2 { (cta.title) }
            @if let Some(desc) = &cta.description {
                p { (desc) }
            }
        } @else {
            h2 { "Contact" }
        }
        p.availability data-status=(status) { (availability.message) }
        ul.contact-links {
            @for link in query::contact_links(p) {
                li {
                    a href=(link.href) { (link.label) ": " (link.value) }
                }
            }
        }
        (render_form(form))
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your name",
        Field::Email => "your@email.com",
        Field::Subject => "What's this about?",
        Field::Message => "Tell us about your project...",
    }
}

/// The contact form, or the confirmation while the form shows it.
pub fn render_form(form: &ContactForm) -> Markup {
    if form.is_submitted() {
        return html! {
            div.form-sent role="status" {
                h3 { "Message Sent!" }
                p { "Thank you for reaching out. We'll get back to you soon." }
            }
        };
    }
    let counter = form.message_counter();
    let submitting = form.is_submitting();
    html! {
        form.contact-form method="post" novalidate {
            @for field in Field::ALL {
                @let name = field.as_str();
                @let error = form.visible_error(field);
                div.field.invalid[error.is_some()] {
                    label for=(name) { (field.label()) }
                    @if field == Field::Message {
                        textarea id=(name) name=(name) placeholder=(placeholder(field))
                            maxlength=(MESSAGE_MAX_CHARS) disabled[submitting] {
                            (form.values().get(field))
                        }
                        span.counter.near-limit[counter.near_limit] {
                            (counter.len) "/" (counter.max)
                        }
                    } @else {
                        input id=(name) name=(name)
                            type=(if field == Field::Email { "email" } else { "text" })
                            placeholder=(placeholder(field))
                            value=(form.values().get(field))
                            disabled[submitting];
                    }
                    @if let Some(message) = error {
                        p.error role="alert" { (message) }
                    }
                }
            }
            button type="submit" disabled[submitting] {
                @if submitting { "Sending..." } @else { "Send Message" }
            }
        }
    }
}

fn site_footer(p: &Portfolio, today: NaiveDate) -> Markup {
    html! {
        footer.site-footer {
            p.tagline { (query::branding(p).tagline) }
            @for section in query::footer_navigation(p) {
                nav.footer-section {
                    h4 { (section.title) }
                    ul {
                        @for link in &section.links {
                            li { a href=(link.href) { (link.label) } }
                        }
                    }
                }
            }
            ul.social {
                @for link in query::social_links(p) {
                    li {
                        a href=(link.url) target="_blank" rel="noopener" aria-label=(link.label) {
                            (link.label)
                        }
                    }
                }
            }
            p.copyright { "© " (today.year()) " " (query::branding(p).name) }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
