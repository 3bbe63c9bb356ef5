//! This crate contains all shared UI for the workspace.
//!
//! Page behaviour lives in plain controllers that act on a [`View`]; the
//! components render the [`PageModel`] those controllers update.

pub mod browser;
pub mod content;
pub mod i18n;
pub mod localization;
pub mod model;
pub mod navigation;
pub mod submission;
pub mod view;
pub mod viewport;

mod listeners;

mod site;
pub use site::{use_lang, use_site, Site, SiteProvider};

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;

mod about;
pub use about::About;

mod skills;
pub use skills::Skills;

mod projects;
pub use projects::Projects;

mod contact;
pub use contact::Contact;

mod footer;
pub use footer::{BackToTop, Footer};

mod theme;
pub use theme::PortfolioTheme;

pub use i18n::{t, Lang};
pub use model::{Element as PageElement, PageModel};
pub use view::{NodeRef, Selector, View};
