//! Read-only views over a [`Portfolio`].
//!
//! Every function here is total and side-effect free. Collection accessors
//! return a new `Vec` of references on each call, sorted by `order` with a
//! stable sort (ties keep their file order). Lookups return the first match
//! or `None`. Nothing in this module can fail: missing keys give empty
//! results, unparseable dates are skipped.
//!
//! The functions mirror the content catalog the presentation layer consumes,
//! one accessor per entity and view:
//!
//! | View | Functions |
//! |---|---|
//! | all, by order | [`skills`], [`projects`], [`experiences`], [`education`], [`certifications`], [`services`], [`testimonials`], [`social_links`], [`main_navigation`], [`statistics`] |
//! | featured subset | [`featured_skills`], [`featured_projects`], [`featured_certifications`], [`featured_testimonials`] |
//! | by key | [`skills_by_category`], [`skill_category`], [`projects_by_status`], [`projects_by_category`], [`project_by_slug`], [`projects_by_technology`], [`service_by_id`], [`testimonials_for_project`], [`social_link_by_platform`], [`cta`] |
//! | derived | [`skills_grouped_by_category`], [`project_categories`], [`project_tags`], [`all_technologies`], [`total_experience_years`], [`valid_certifications`], [`client_testimonials`], [`page_seo`], [`full_page_title`] |
//! | unsorted passthrough | [`values`], [`principles`], [`capabilities`], [`contact_links`], [`technologies`], [`process_steps`], [`clients`], [`products`], [`footer_navigation`] |

use crate::types::*;
use chrono::{DateTime, Local, NaiveDate};
use std::collections::{BTreeSet, HashSet};

/// Records with a display sort key.
pub trait Ordered {
    fn order(&self) -> i32;
}

macro_rules! impl_ordered {
    ($($ty:ty),* $(,)?) => {
        $(impl Ordered for $ty {
            fn order(&self) -> i32 {
                self.order
            }
        })*
    };
}

impl_ordered!(
    Skill,
    SkillCategoryConfig,
    Project,
    Experience,
    Education,
    Certification,
    Service,
    Testimonial,
    SocialLink,
    NavItem,
    Statistic,
);

/// Stable ascending sort by `order` into a fresh vector.
pub fn sorted<T: Ordered>(items: &[T]) -> Vec<&T> {
    let mut out: Vec<&T> = items.iter().collect();
    out.sort_by_key(|item| item.order());
    out
}

/// Parse an ISO-8601 date (`2020-01-01`) or timestamp (`2020-01-01T09:00:00Z`).
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// =============================================================================
// Skills
// =============================================================================

pub fn skills(p: &Portfolio) -> Vec<&Skill> {
    sorted(&p.skills)
}

pub fn featured_skills(p: &Portfolio) -> Vec<&Skill> {
    skills(p).into_iter().filter(|s| s.featured).collect()
}

pub fn skills_by_category(p: &Portfolio, category: SkillCategory) -> Vec<&Skill> {
    skills(p)
        .into_iter()
        .filter(|s| s.category == category)
        .collect()
}

/// Skills per configured category, categories in their own `order`.
///
/// Categories with no skills still appear (with an empty list); skills whose
/// category is not configured do not appear at all.
pub fn skills_grouped_by_category(p: &Portfolio) -> Vec<(&SkillCategoryConfig, Vec<&Skill>)> {
    sorted(&p.skill_categories)
        .into_iter()
        .map(|cat| (cat, skills_by_category(p, cat.id)))
        .collect()
}

pub fn skill_category(p: &Portfolio, id: SkillCategory) -> Option<&SkillCategoryConfig> {
    p.skill_categories.iter().find(|c| c.id == id)
}

// =============================================================================
// Projects
// =============================================================================

pub fn projects(p: &Portfolio) -> Vec<&Project> {
    sorted(&p.projects)
}

pub fn featured_projects(p: &Portfolio) -> Vec<&Project> {
    projects(p).into_iter().filter(|pr| pr.featured).collect()
}

pub fn projects_by_status(p: &Portfolio, status: Status) -> Vec<&Project> {
    projects(p)
        .into_iter()
        .filter(|pr| pr.status == status)
        .collect()
}

pub fn projects_by_category<'a>(p: &'a Portfolio, category: &str) -> Vec<&'a Project> {
    projects(p)
        .into_iter()
        .filter(|pr| pr.category == category)
        .collect()
}

pub fn project_by_slug<'a>(p: &'a Portfolio, slug: &str) -> Option<&'a Project> {
    p.projects.iter().find(|pr| pr.slug == slug)
}

/// Distinct project categories in first-seen file order.
pub fn project_categories(p: &Portfolio) -> Vec<&str> {
    unique_in_order(p.projects.iter().map(|pr| pr.category.as_str()))
}

/// Distinct project tags in first-seen file order.
pub fn project_tags(p: &Portfolio) -> Vec<&str> {
    unique_in_order(
        p.projects
            .iter()
            .flat_map(|pr| pr.tags.iter().map(String::as_str)),
    )
}

/// Projects using a technology, compared case-insensitively.
pub fn projects_by_technology<'a>(p: &'a Portfolio, tech: &str) -> Vec<&'a Project> {
    let wanted = tech.to_lowercase();
    projects(p)
        .into_iter()
        .filter(|pr| pr.tech_stack.iter().any(|t| t.to_lowercase() == wanted))
        .collect()
}

/// Every technology named by a project or an experience entry, deduplicated
/// and sorted.
pub fn all_technologies(p: &Portfolio) -> Vec<&str> {
    let projects = p.projects.iter().flat_map(|pr| &pr.tech_stack);
    let experience = p.experience.iter().flat_map(|e| &e.tech_stack);
    projects
        .chain(experience)
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn unique_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}

// =============================================================================
// Experience, education, certifications
// =============================================================================

pub fn experiences(p: &Portfolio) -> Vec<&Experience> {
    sorted(&p.experience)
}

/// First ongoing position in file order.
pub fn current_experience(p: &Portfolio) -> Option<&Experience> {
    p.experience.iter().find(|e| e.is_ongoing())
}

/// Whole years since the earliest experience start, using the local date.
pub fn total_experience_years(p: &Portfolio) -> i64 {
    total_experience_years_at(p, today())
}

/// Whole years (of 365 days) between the earliest parseable start date and
/// `today`. Zero when there is nothing to measure.
pub fn total_experience_years_at(p: &Portfolio, today: NaiveDate) -> i64 {
    let Some(earliest) = p
        .experience
        .iter()
        .filter_map(|e| parse_iso_date(&e.start_date))
        .min()
    else {
        return 0;
    };
    (today - earliest).num_days().div_euclid(365)
}

pub fn education(p: &Portfolio) -> Vec<&Education> {
    sorted(&p.education)
}

pub fn certifications(p: &Portfolio) -> Vec<&Certification> {
    sorted(&p.certifications)
}

pub fn featured_certifications(p: &Portfolio) -> Vec<&Certification> {
    certifications(p)
        .into_iter()
        .filter(|c| c.featured)
        .collect()
}

pub fn valid_certifications(p: &Portfolio) -> Vec<&Certification> {
    valid_certifications_at(p, today())
}

/// Certifications without an expiry, or expiring strictly after `today`.
/// An unparseable expiry counts as expired.
pub fn valid_certifications_at(p: &Portfolio, today: NaiveDate) -> Vec<&Certification> {
    certifications(p)
        .into_iter()
        .filter(|c| match &c.expiry_date {
            None => true,
            Some(expiry) => parse_iso_date(expiry).is_some_and(|d| d > today),
        })
        .collect()
}

// =============================================================================
// Services & testimonials
// =============================================================================

pub fn services(p: &Portfolio) -> Vec<&Service> {
    sorted(&p.services)
}

pub fn service_by_id<'a>(p: &'a Portfolio, id: &str) -> Option<&'a Service> {
    p.services.iter().find(|s| s.id == id)
}

pub fn testimonials(p: &Portfolio) -> Vec<&Testimonial> {
    sorted(&p.testimonials)
}

pub fn featured_testimonials(p: &Portfolio) -> Vec<&Testimonial> {
    testimonials(p).into_iter().filter(|t| t.featured).collect()
}

pub fn testimonials_for_project<'a>(p: &'a Portfolio, project_id: &str) -> Vec<&'a Testimonial> {
    testimonials(p)
        .into_iter()
        .filter(|t| t.project_id.as_deref() == Some(project_id))
        .collect()
}

/// Resolve a testimonial's project reference. `None` when it has none or it
/// dangles.
pub fn project_for_testimonial<'a>(
    p: &'a Portfolio,
    testimonial: &Testimonial,
) -> Option<&'a Project> {
    let id = testimonial.project_id.as_deref()?;
    p.projects.iter().find(|pr| pr.id == id)
}

/// The first three testimonials in file order, reshaped for the clients strip.
pub fn client_testimonials(p: &Portfolio) -> Vec<ClientTestimonial> {
    p.testimonials
        .iter()
        .take(3)
        .map(|t| ClientTestimonial {
            id: t.order,
            quote: t.content.clone(),
            author: t.author.clone(),
            role: t.role.clone(),
            company: t.company.clone(),
            avatar: t.avatar.clone(),
        })
        .collect()
}

// =============================================================================
// Social, navigation, statistics
// =============================================================================

pub fn social_links(p: &Portfolio) -> Vec<&SocialLink> {
    sorted(&p.social_links)
}

pub fn social_link_by_platform(p: &Portfolio, platform: SocialPlatform) -> Option<&SocialLink> {
    p.social_links.iter().find(|l| l.platform == platform)
}

pub fn main_navigation(p: &Portfolio) -> Vec<&NavItem> {
    sorted(&p.navigation.main)
}

/// Footer sections as configured; they are not sorted.
pub fn footer_navigation(p: &Portfolio) -> Vec<&FooterSection> {
    p.navigation.footer.sections.iter().collect()
}

pub fn statistics(p: &Portfolio) -> Vec<&Statistic> {
    sorted(&p.statistics)
}

// =============================================================================
// SEO & calls to action
// =============================================================================

/// Metadata for a page key, falling back to the site defaults.
pub fn page_seo(p: &Portfolio, page: &str) -> PageSeo {
    p.page_seo.get(page).cloned().unwrap_or_else(|| PageSeo {
        title: p.seo.default_title.clone(),
        description: p.seo.description.clone(),
        keywords: None,
        no_index: None,
    })
}

/// `titleTemplate` with its first `%s` replaced, or the default title when
/// no page title is given.
pub fn full_page_title(p: &Portfolio, page_title: Option<&str>) -> String {
    match page_title {
        Some(title) if !title.is_empty() => p.seo.title_template.replacen("%s", title, 1),
        _ => p.seo.default_title.clone(),
    }
}

pub fn cta<'a>(p: &'a Portfolio, id: &str) -> Option<&'a Cta> {
    p.ctas.get(id)
}

// =============================================================================
// Identity & passthrough collections
// =============================================================================

pub fn personal_info(p: &Portfolio) -> &PersonalInfo {
    &p.personal
}

pub fn branding(p: &Portfolio) -> &Branding {
    &p.branding
}

pub fn availability(p: &Portfolio) -> &Availability {
    &p.personal.availability
}

pub fn contact_links(p: &Portfolio) -> Vec<&ContactLink> {
    p.personal.contact.iter().collect()
}

pub fn values(p: &Portfolio) -> Vec<&Value> {
    p.values.iter().collect()
}

pub fn principles(p: &Portfolio) -> Vec<&Principle> {
    p.principles.iter().collect()
}

pub fn capabilities(p: &Portfolio) -> Vec<&Capability> {
    p.capabilities.iter().collect()
}

pub fn technologies(p: &Portfolio) -> Vec<&Technology> {
    p.technologies.iter().collect()
}

pub fn process_steps(p: &Portfolio) -> Vec<&ProcessStep> {
    p.process_steps.iter().collect()
}

pub fn clients(p: &Portfolio) -> Vec<&Client> {
    p.clients.iter().collect()
}

pub fn products(p: &Portfolio) -> Vec<&Product> {
    p.products.iter().collect()
}

/// A copy of the portfolio with every ordered collection in display order.
///
/// This is what `export` prints: consumers of the JSON get the same
/// ordering the query functions give.
pub fn display_ordered(p: &Portfolio) -> Portfolio {
    fn owned<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
        sorted(items).into_iter().cloned().collect()
    }
    let mut out = p.clone();
    out.skills = owned(&p.skills);
    out.skill_categories = owned(&p.skill_categories);
    out.projects = owned(&p.projects);
    out.experience = owned(&p.experience);
    out.education = owned(&p.education);
    out.certifications = owned(&p.certifications);
    out.services = owned(&p.services);
    out.testimonials = owned(&p.testimonials);
    out.social_links = owned(&p.social_links);
    out.navigation.main = owned(&p.navigation.main);
    out.statistics = owned(&p.statistics);
    out
}

pub fn is_feature_enabled(p: &Portfolio, feature: Feature) -> bool {
    let f = &p.features;
    match feature {
        Feature::Blog => f.blog,
        Feature::Testimonials => f.testimonials,
        Feature::Newsletter => f.newsletter,
        Feature::DarkMode => f.dark_mode,
        Feature::Analytics => f.analytics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::stock;
    use crate::test_helpers::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    #[test]
    fn sort_is_stable_on_order_ties() {
        let mut p = stock().clone();
        p.skills = vec![
            skill("c", SkillCategory::Frontend, 2, false),
            skill("a", SkillCategory::Frontend, 1, false),
            skill("d", SkillCategory::Backend, 2, true),
            skill("b", SkillCategory::Backend, 1, true),
            skill("e", SkillCategory::Frontend, 2, true),
        ];
        assert_eq!(ids(&skills(&p)), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn all_collections_are_non_decreasing() {
        let p = stock();
        let orders = |v: Vec<i32>| v.windows(2).all(|w| w[0] <= w[1]);
        assert!(orders(skills(p).iter().map(|x| x.order).collect()));
        assert!(orders(projects(p).iter().map(|x| x.order).collect()));
        assert!(orders(experiences(p).iter().map(|x| x.order).collect()));
        assert!(orders(certifications(p).iter().map(|x| x.order).collect()));
        assert!(orders(services(p).iter().map(|x| x.order).collect()));
        assert!(orders(testimonials(p).iter().map(|x| x.order).collect()));
        assert!(orders(social_links(p).iter().map(|x| x.order).collect()));
        assert!(orders(main_navigation(p).iter().map(|x| x.order).collect()));
        assert!(orders(statistics(p).iter().map(|x| x.order).collect()));
    }

    #[test]
    fn reads_return_fresh_vectors() {
        let p = stock();
        let a = skills(p);
        let b = skills(p);
        assert_eq!(a, b);
        assert_ne!(a.as_ptr(), b.as_ptr());
        let a = contact_links(p);
        let b = contact_links(p);
        assert_eq!(a, b);
        assert_ne!(a.as_ptr(), b.as_ptr());
    }

    #[test]
    fn reads_do_not_reorder_store() {
        let p = stock().clone();
        let before = p.skills.clone();
        let _ = skills(&p);
        let _ = skills_grouped_by_category(&p);
        assert_eq!(p.skills, before);
    }

    // =========================================================================
    // Featured subsets
    // =========================================================================

    #[test]
    fn featured_is_subset_in_same_order() {
        let p = stock();
        let expected: Vec<_> = skills(p).into_iter().filter(|s| s.featured).collect();
        assert_eq!(featured_skills(p), expected);

        let expected: Vec<_> = projects(p).into_iter().filter(|s| s.featured).collect();
        assert_eq!(featured_projects(p), expected);
        assert_eq!(featured_projects(p).len(), 4);

        assert_eq!(
            ids(&featured_certifications(p)),
            vec!["aws-solutions-architect", "gcp-cloud-architect"]
        );
        assert_eq!(
            ids(&featured_testimonials(p)),
            vec!["testimonial-1", "testimonial-2"]
        );
    }

    #[test]
    fn featured_empty_when_none_flagged() {
        let mut p = stock().clone();
        p.skills = vec![skill("a", SkillCategory::Frontend, 1, false)];
        assert!(featured_skills(&p).is_empty());
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    #[test]
    fn project_by_slug_found_and_missing() {
        let p = stock();
        let project = project_by_slug(p, "ecommerce-platform").unwrap();
        assert_eq!(project.slug, "ecommerce-platform");
        assert!(project_by_slug(p, "does-not-exist").is_none());
        assert!(project_by_slug(p, "Ecommerce-Platform").is_none());
    }

    #[test]
    fn projects_by_technology_ignores_case() {
        let p = stock();
        let upper = projects_by_technology(p, "REACT");
        let lower = projects_by_technology(p, "react");
        assert_eq!(upper, lower);
        assert_eq!(ids(&lower), vec!["financial-dashboard"]);
        assert!(projects_by_technology(p, "cobol").is_empty());
    }

    #[test]
    fn projects_by_status_and_category() {
        let p = stock();
        assert_eq!(
            ids(&projects_by_status(p, Status::InProgress)),
            vec!["ai-content-platform"]
        );
        assert!(projects_by_status(p, Status::Archived).is_empty());
        assert_eq!(
            ids(&projects_by_category(p, "Mobile Development")),
            vec!["healthcare-app"]
        );
        assert!(projects_by_category(p, "mobile development").is_empty());
    }

    #[test]
    fn skills_by_category_unknown_is_empty() {
        let p = stock();
        assert!(skills_by_category(p, SkillCategory::SoftSkills).is_empty());
        assert_eq!(
            ids(&skills_by_category(p, SkillCategory::Devops)),
            vec!["aws", "docker"]
        );
    }

    #[test]
    fn lookups_by_id() {
        let p = stock();
        assert_eq!(
            service_by_id(p, "cloud-solutions").unwrap().title,
            "Cloud Solutions"
        );
        assert!(service_by_id(p, "nope").is_none());
        assert_eq!(
            skill_category(p, SkillCategory::Devops).unwrap().label,
            "DevOps"
        );
        assert!(skill_category(p, SkillCategory::Other).is_none());
        assert_eq!(
            social_link_by_platform(p, SocialPlatform::Github)
                .unwrap()
                .label,
            "GitHub"
        );
        assert!(social_link_by_platform(p, SocialPlatform::Mastodon).is_none());
        assert_eq!(cta(p, "hero").unwrap().id, "hero-cta");
        assert!(cta(p, "footer").is_none());
    }

    #[test]
    fn testimonials_for_project_and_back_reference() {
        let p = stock();
        let found = testimonials_for_project(p, "healthcare-app");
        assert_eq!(ids(&found), vec!["testimonial-2"]);
        assert!(testimonials_for_project(p, "saas-platform").is_empty());

        let project = project_for_testimonial(p, found[0]).unwrap();
        assert_eq!(project.id, "healthcare-app");
    }

    #[test]
    fn dangling_testimonial_reference_is_none() {
        let mut p = stock().clone();
        p.testimonials = vec![testimonial("t", Some("gone"), 1, true)];
        assert!(project_for_testimonial(&p, &p.testimonials[0]).is_none());
        let unlinked = testimonial("u", None, 1, true);
        assert!(project_for_testimonial(&p, &unlinked).is_none());
    }

    #[test]
    fn current_experience_is_first_ongoing() {
        let p = stock();
        assert_eq!(current_experience(p).unwrap().id, "cedarcore-founder");

        let mut p = p.clone();
        p.experience = vec![experience("old", "2015-01-01", Some("2016-01-01"), 1)];
        assert!(current_experience(&p).is_none());
    }

    // =========================================================================
    // Derived aggregates
    // =========================================================================

    #[test]
    fn total_years_counts_from_earliest_start() {
        let p = stock();
        // 2015-03-01 + 3650 days = 2025-02-26
        assert_eq!(total_experience_years_at(p, date("2025-02-26")), 10);
        assert_eq!(total_experience_years_at(p, date("2025-02-25")), 9);
        assert_eq!(total_experience_years_at(p, date("2015-03-01")), 0);
    }

    #[test]
    fn total_years_uses_clock() {
        let p = stock();
        let expected = (today() - date("2015-03-01")).num_days() / 365;
        assert_eq!(total_experience_years(p), expected);
    }

    #[test]
    fn total_years_zero_without_dates() {
        let mut p = stock().clone();
        p.experience.clear();
        assert_eq!(total_experience_years_at(&p, date("2025-01-01")), 0);

        p.experience = vec![experience("x", "whenever", None, 1)];
        assert_eq!(total_experience_years_at(&p, date("2025-01-01")), 0);
    }

    #[test]
    fn valid_certifications_by_expiry() {
        let p = stock();
        assert_eq!(
            ids(&valid_certifications_at(p, date("2025-06-01"))),
            vec!["aws-solutions-architect", "mongodb-developer"]
        );
        // Expiry day itself is no longer valid
        assert_eq!(
            ids(&valid_certifications_at(p, date("2025-03-20"))),
            vec!["aws-solutions-architect", "mongodb-developer"]
        );
        assert_eq!(
            ids(&valid_certifications_at(p, date("2025-03-19"))),
            vec![
                "aws-solutions-architect",
                "gcp-cloud-architect",
                "mongodb-developer"
            ]
        );
    }

    #[test]
    fn unparseable_expiry_is_expired() {
        let mut p = stock().clone();
        p.certifications = vec![certification("c", Some("soon"), 1)];
        assert!(valid_certifications_at(&p, date("2020-01-01")).is_empty());
    }

    #[test]
    fn all_technologies_sorted_and_unique() {
        let p = stock();
        let techs = all_technologies(p);
        let mut expected = techs.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(techs, expected);
        assert!(techs.contains(&"Kubernetes"));
        assert!(techs.contains(&"Stripe"));
        assert_eq!(techs.iter().filter(|t| **t == "AWS").count(), 1);
    }

    #[test]
    fn project_categories_and_tags_first_seen_order() {
        let p = stock();
        assert_eq!(
            project_categories(p),
            vec![
                "Web Development",
                "Mobile Development",
                "UI/UX Design",
                "Full Stack",
                "AI/ML"
            ]
        );
        let tags = project_tags(p);
        assert_eq!(&tags[..4], &["e-commerce", "payments", "saas", "dashboard"]);
        assert_eq!(tags.iter().filter(|t| **t == "saas").count(), 1);
    }

    #[test]
    fn skills_grouped_follow_category_order() {
        let mut p = stock().clone();
        p.skill_categories.reverse();
        let grouped = skills_grouped_by_category(&p);
        let cats: Vec<_> = grouped.iter().map(|(c, _)| c.id).collect();
        assert_eq!(cats[0], SkillCategory::Frontend);
        assert_eq!(cats[6], SkillCategory::Tools);
        let (_, frontend) = &grouped[0];
        assert_eq!(
            ids(frontend),
            vec!["react", "nextjs", "typescript", "vue"]
        );
    }

    #[test]
    fn client_testimonials_take_first_three() {
        let mut p = stock().clone();
        p.testimonials.push(testimonial("t4", None, 4, true));
        let clients = client_testimonials(&p);
        assert_eq!(clients.len(), 3);
        assert_eq!(clients[0].id, 1);
        assert_eq!(clients[0].author, "Sarah Chen");
        assert_eq!(clients[2].avatar, None);
    }

    // =========================================================================
    // SEO, navigation, flags
    // =========================================================================

    #[test]
    fn page_seo_falls_back_to_defaults() {
        let p = stock();
        assert_eq!(page_seo(p, "about").title, "About Us");
        let fallback = page_seo(p, "blog");
        assert_eq!(fallback.title, p.seo.default_title);
        assert_eq!(fallback.description, p.seo.description);
    }

    #[test]
    fn full_page_title_applies_template() {
        let p = stock();
        assert_eq!(full_page_title(p, Some("About Us")), "About Us | Cedar Core");
        assert_eq!(full_page_title(p, None), p.seo.default_title);
        assert_eq!(full_page_title(p, Some("")), p.seo.default_title);
    }

    #[test]
    fn full_page_title_replaces_first_placeholder_only() {
        let mut p = stock().clone();
        p.seo.title_template = "%s - %s".to_string();
        assert_eq!(full_page_title(&p, Some("X")), "X - %s");
    }

    #[test]
    fn footer_sections_keep_configured_order() {
        let p = stock();
        let titles: Vec<_> = footer_navigation(p).iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Services", "Company"]);
    }

    #[test]
    fn feature_flags() {
        let p = stock();
        assert!(is_feature_enabled(p, Feature::Testimonials));
        assert!(is_feature_enabled(p, Feature::DarkMode));
        assert!(!is_feature_enabled(p, Feature::Blog));
        assert!(!is_feature_enabled(p, Feature::Analytics));
    }

    #[test]
    fn passthrough_accessors() {
        let p = stock();
        assert_eq!(personal_info(p).name, "Cedar Core");
        assert_eq!(branding(p).colors.primary, "#5D9EFF");
        assert_eq!(availability(p).status, AvailabilityStatus::Available);
        assert_eq!(contact_links(p).len(), 4);
        assert_eq!(values(p).len(), 4);
        assert_eq!(principles(p).len(), 3);
        assert_eq!(capabilities(p).len(), 4);
        assert_eq!(technologies(p).len(), 4);
        assert_eq!(process_steps(p)[0].title, "Discover");
        assert_eq!(clients(p).len(), 3);
        assert_eq!(products(p)[0].id, "dropx");
        assert_eq!(education(p)[0].id, "stanford-cs");
    }

    #[test]
    fn display_ordered_sorts_collections() {
        let mut p = stock().clone();
        p.skills.reverse();
        p.navigation.main.reverse();
        let ordered = display_ordered(&p);
        assert_eq!(ordered.skills[0].id, skills(&p)[0].id);
        assert_eq!(ordered.navigation.main[0].label, "Home");
        // Unordered collections untouched
        assert_eq!(ordered.products, p.products);
    }

    #[test]
    fn parse_iso_date_accepts_timestamps() {
        assert_eq!(parse_iso_date("2020-01-01"), Some(date("2020-01-01")));
        assert_eq!(
            parse_iso_date("2020-01-01T09:30:00Z"),
            Some(date("2020-01-01"))
        );
        assert_eq!(parse_iso_date("01/01/2020"), None);
    }
}
