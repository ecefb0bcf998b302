// ABOUTME: GamaProfit landing page rendered to static HTML with maud
// ABOUTME: Content, shared components, sections and the page session

pub mod components;
pub mod content;
pub mod page;
pub mod sections;

pub use content::SiteContent;
pub use page::{PageSession, render_page};
