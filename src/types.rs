//! Content schema for the portfolio store.
//!
//! Every record here is deserialized from `portfolio.toml` and never mutated
//! afterwards. Field names and enum values keep their camelCase / kebab-case
//! wire spelling (`proficiencyPercent`, `soft-skills`, `case-study`) so content
//! written for the original site loads unchanged, and the JSON export can be
//! consumed by any other presentation layer.
//!
//! Most collections carry an `order` integer. It is a display sort key, not an
//! identifier: duplicates are allowed and ties keep their file order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Enumerations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Completed,
    InProgress,
    Planned,
    Archived,
}

/// Proficiency tier. `Skill::proficiency_percent` is expected to agree with
/// it, but nothing enforces that; see [`ProficiencyLevel::percent_band`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    /// Inclusive percentage range a tier usually maps to. Advisory only.
    pub fn percent_band(self) -> (u8, u8) {
        match self {
            Self::Beginner => (0, 49),
            Self::Intermediate => (50, 79),
            Self::Advanced => (80, 89),
            Self::Expert => (90, 100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Web,
    Mobile,
    Desktop,
    Api,
    Library,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Mobile,
    Design,
    Tools,
    SoftSkills,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    Dribbble,
    Behance,
    Medium,
    Dev,
    Stackoverflow,
    Codepen,
    Discord,
    Telegram,
    Whatsapp,
    Tiktok,
    Threads,
    Mastodon,
    Other,
}

// ============================================================================
// Personal information & branding
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactLinkType {
    Email,
    Phone,
    Website,
    Calendar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactLink {
    #[serde(rename = "type")]
    pub kind: ContactLinkType,
    pub label: String,
    pub value: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Location {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
    pub timezone: String,
    pub remote: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityStatus {
    Available,
    Limited,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Availability {
    pub status: AvailabilityStatus,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    pub role: String,
    pub tagline: String,
    pub bio: String,
    pub short_bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub location: Location,
    #[serde(default)]
    pub contact: Vec<ContactLink>,
    pub availability: Availability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Logo {
    pub light: String,
    pub dark: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Fonts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mono: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Branding {
    pub name: String,
    pub tagline: String,
    pub logo: Logo,
    pub colors: BrandColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Fonts>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Value {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Principle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Capability {
    pub icon: String,
    pub label: String,
}

// ============================================================================
// Clients, technologies, process
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Client {
    pub name: String,
    pub industry: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Technology {
    pub name: String,
    pub icon: String,
    pub category: String,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProcessStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

// ============================================================================
// Skills
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: ProficiencyLevel,
    /// 0-100.
    pub proficiency_percent: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillCategoryConfig {
    pub id: SkillCategory,
    pub label: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: i32,
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectLinkType {
    Live,
    Demo,
    Repository,
    CaseStudy,
    Documentation,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub kind: ProjectLinkType,
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageType {
    Thumbnail,
    Screenshot,
    Logo,
    Hero,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
    #[serde(rename = "type")]
    pub kind: ImageType,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Unique within `projects` by convention; `store::lint` reports clashes.
    pub slug: String,
    pub short_description: String,
    /// Markdown.
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    pub status: Status,
    #[serde(default)]
    pub featured: bool,
    pub order: i32,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub year: i32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    /// First image of the given type, by image `order`.
    pub fn image(&self, kind: ImageType) -> Option<&ProjectImage> {
        self.images
            .iter()
            .filter(|img| img.kind == kind)
            .min_by_key(|img| img.order)
    }
}

// ============================================================================
// Experience, education, certifications
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperienceHighlight {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Experience {
    pub id: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    pub role: String,
    #[serde(rename = "type")]
    pub kind: EmploymentType,
    pub location: String,
    #[serde(default)]
    pub remote: bool,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub start_date: String,
    /// Absent means the position is ongoing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<ExperienceHighlight>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub order: i32,
}

impl Experience {
    /// Ongoing when flagged `current` or when no end date is recorded.
    pub fn is_ongoing(&self) -> bool {
        self.current || self.end_date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Education {
    pub id: String,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_logo: Option<String>,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_courses: Option<Vec<String>>,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_logo: Option<String>,
    pub issue_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub featured: bool,
    pub order: i32,
}

// ============================================================================
// Services, testimonials, social
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    pub role: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub content: String,
    /// 1-5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Soft reference to `Project::id`; may dangle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub order: i32,
}

/// Condensed testimonial shape used by the clients strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTestimonial {
    pub id: i32,
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub label: String,
    pub url: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub order: i32,
}

// ============================================================================
// Navigation, SEO, statistics, calls to action
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterSection {
    pub title: String,
    #[serde(default)]
    pub links: Vec<NavItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterNavigation {
    #[serde(default)]
    pub sections: Vec<FooterSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Navigation {
    #[serde(default)]
    pub main: Vec<NavItem>,
    #[serde(default)]
    pub footer: FooterNavigation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OpenGraph {
    #[serde(default)]
    pub images: Vec<OpenGraphImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeoConfig {
    pub default_title: String,
    /// `%s` is replaced with the page title.
    pub title_template: String,
    pub description: String,
    pub site_url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
    pub twitter_card_type: String,
    #[serde(default)]
    pub open_graph: OpenGraph,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub author: String,
    pub theme_color: String,
    pub favicon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PageSeo {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_index: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Statistic {
    pub id: String,
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CtaButton {
    pub text: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Cta {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub primary_button: CtaButton,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button: Option<CtaButton>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Features {
    #[serde(default)]
    pub blog: bool,
    #[serde(default)]
    pub testimonials: bool,
    #[serde(default)]
    pub newsletter: bool,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub analytics: bool,
}

/// Key for [`crate::query::is_feature_enabled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Blog,
    Testimonials,
    Newsletter,
    DarkMode,
    Analytics,
}

/// Product showcase entry. Kept in file order; it has no `order` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub image_src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

// ============================================================================
// Root
// ============================================================================

/// The whole content graph. Built once by [`crate::store`], read-only after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub branding: Branding,
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(default)]
    pub principles: Vec<Principle>,
    #[serde(default)]
    pub capabilities: Vec<Capability>,

    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub process_steps: Vec<ProcessStep>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategoryConfig>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub navigation: Navigation,

    pub seo: SeoConfig,
    #[serde(default, rename = "pageSEO")]
    pub page_seo: BTreeMap<String, PageSeo>,

    #[serde(default)]
    pub statistics: Vec<Statistic>,
    #[serde(default)]
    pub ctas: BTreeMap<String, Cta>,

    #[serde(default)]
    pub features: Features,
}
