//! # Studio Site
//!
//! Content, behavior and markup for a software studio's landing page.
//! All of the site's copy (services, projects, skills, experience, SEO) lives
//! in one typed content file; a catalog of pure query functions turns it into
//! the views the page shows; a small state machine runs the contact form.
//!
//! # Architecture
//!
//! ```text
//! content/portfolio.toml ─▶ store ─▶ query ─▶ render ─▶ dist/index.html
//!                                              ▲
//!                       contact (form state) ──┘
//! ```
//!
//! The store is loaded once and never changes. Everything downstream of it is
//! a pure function of the store plus explicit inputs (the form state, the
//! reference date, the page variant), so each layer is tested without the
//! others.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Content schema: skills, projects, experience, SEO, ... with their wire field names |
//! | [`store`] | Stock content embedded in the binary, content overlays, advisory lint |
//! | [`query`] | Sorted, filtered and derived read-only views over the store |
//! | [`contact`] | Contact form validation and submit/reset cycle with an injectable gateway |
//! | [`navigation`] | Scroll spy and navigation bar visibility |
//! | [`render`] | The landing page, rendered with Maud |
//! | [`config`] | `site.toml` loading, validation and merging |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Immutable Content Root
//!
//! The content is a single [`types::Portfolio`] value. [`store::stock`] parses
//! the embedded content once into a `LazyLock`; [`store::load_portfolio`]
//! builds an owned copy with a directory's overrides layered on top. Query
//! functions take `&Portfolio` and hand back fresh vectors of references, so
//! callers can sort or filter a result without touching the store.
//!
//! ## Not-Found Is Data
//!
//! Lookups return `Option`, collections return possibly-empty `Vec`s, and
//! field validation returns message strings. The only `Result`s in the crate
//! are at I/O boundaries: reading settings and content, writing the page,
//! delivering a message.
//!
//! ## Explicit Time
//!
//! The contact form does not own a timer. [`contact::ContactForm::submit`] and
//! [`contact::ContactForm::advance`] take the current `Instant`, and delivery
//! goes through a [`contact::SubmitGateway`]. Tests step through the whole
//! submit → sent → reset cycle without sleeping, and the binary can plug in
//! an HTTP gateway (cargo feature `http`).
//!
//! ## One Page, Two Variants
//!
//! There is a single renderer. [`config::Variant`] switches markup hooks
//! (body class, section labels) rather than selecting a different set of
//! section components.

pub mod config;
pub mod contact;
pub mod navigation;
pub mod output;
pub mod query;
pub mod render;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
