//! Page renderers.
//!
//! Every page is a pure function of config + loaded content, rendered to
//! a complete HTML document string.
//!
//! - [`layout`]: document shell (head, nav, footer, scripts)
//! - [`sidebar`]: profile sidebar with contact capsules
//! - [`capsule`]: text capsules (link / copy / PDF overlay)
//! - [`collapsible`]: details/summary section renderer
//! - [`home`], [`about`], [`resume`], [`projects`], [`detail`]: pages
//! - [`error`]: fallback error blocks + 404

pub mod about;
pub mod capsule;
pub mod collapsible;
pub mod detail;
pub mod error;
pub mod home;
mod icons;
pub mod layout;
pub mod projects;
pub mod resume;
pub mod sidebar;
