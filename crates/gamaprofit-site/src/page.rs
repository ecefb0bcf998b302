// ABOUTME: Full-page composition and the per-load session that owns the self-check
// ABOUTME: A session renders once and runs the accessibility check on first mount

use gamaprofit_logging::{debug, instrument};
use gamaprofit_theme::{
    ComputedStyles, RuntimeMode, SelfCheck, SelfCheckReport, SelfCheckRunner, Theme, TokenSet,
    render_stylesheet,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::content::SiteContent;
use crate::sections;

/// Render the complete landing page for `theme`.
///
/// Both token sets are inlined; `theme` only decides whether the root
/// element carries the `dark` class.
#[instrument(skip_all, fields(mode = %theme.mode, year = year))]
pub fn render_page(theme: &Theme, content: &SiteContent, year: i32) -> Markup {
    let stylesheet = render_stylesheet(&TokenSet::light(), &TokenSet::dark());
    render_with_stylesheet(theme, content, year, &stylesheet)
}

fn render_with_stylesheet(
    theme: &Theme,
    content: &SiteContent,
    year: i32,
    stylesheet: &str,
) -> Markup {
    let markup = html! {
        (DOCTYPE)
        html lang="cs" class=[theme.is_dark().then_some("dark")] {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (content.business.name) " | " (content.business.tagline) }
                meta name="description" content=(content.hero.lead);
                script src="https://cdn.tailwindcss.com" {}
                script { (PreEscaped("tailwind.config = { darkMode: 'class' };")) }
                style { (PreEscaped(stylesheet)) }
            }
            body class="min-h-screen bg-white text-slate-900 antialiased dark:bg-slate-950 dark:text-slate-100" {
                (sections::header(content))
                main {
                    (sections::announcement_bar(content))
                    (sections::hero(content))
                    (sections::trust_strip(content))
                    (sections::services(content))
                    (sections::process(content))
                    (sections::usp(content))
                    (sections::testimonials(content))
                    (sections::downloads(content))
                    (sections::contact(content))
                }
                (sections::footer(content, year))
            }
        }
    };
    debug!(bytes = markup.0.len(), "Rendered page");
    markup
}

/// One page load: a theme, the runtime it runs in and its self-check.
///
/// Rendering is repeatable; the self-check runs only on the first
/// [`PageSession::mount`].
#[derive(Debug)]
pub struct PageSession {
    theme: Theme,
    runtime: RuntimeMode,
    stylesheet: String,
    runner: SelfCheckRunner,
}

impl PageSession {
    pub fn new(theme: Theme, runtime: RuntimeMode) -> Self {
        Self::with_check(theme, runtime, SelfCheck::standard())
    }

    pub fn with_check(theme: Theme, runtime: RuntimeMode, check: SelfCheck) -> Self {
        Self {
            theme,
            runtime,
            stylesheet: render_stylesheet(&TokenSet::light(), &TokenSet::dark()),
            runner: SelfCheckRunner::new(check),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn runtime(&self) -> RuntimeMode {
        self.runtime
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    pub fn render(&self, content: &SiteContent, year: i32) -> Markup {
        render_with_stylesheet(&self.theme, content, year, &self.stylesheet)
    }

    /// Check the page's computed root styles, once per session.
    pub fn mount(&self) -> Option<SelfCheckReport> {
        let styles = ComputedStyles::from_stylesheet(&self.stylesheet, self.theme.mode);
        self.runner.on_mount(&styles, self.runtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamaprofit_theme::Mode;

    #[test]
    fn test_light_page_has_no_dark_class() {
        let html = render_page(&Theme::light(), &SiteContent::gamaprofit(), 2025).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="cs">"#));
        assert!(html.contains("--gp-primary: #0A5BD3;"));
    }

    #[test]
    fn test_dark_page_sets_root_class() {
        let html = render_page(&Theme::dark(), &SiteContent::gamaprofit(), 2025).into_string();
        assert!(html.contains(r#"<html lang="cs" class="dark">"#));
    }

    #[test]
    fn test_sections_in_order() {
        let html = render_page(&Theme::light(), &SiteContent::gamaprofit(), 2025).into_string();
        let order = [
            "<header",
            "Blíží se termíny",
            r#"id="hero-title""#,
            "Důvěryhodnost",
            r#"id="sluzby""#,
            r#"id="proces""#,
            r#"id="usp-title""#,
            r#"id="reference""#,
            r#"id="stazeni""#,
            r#"id="kontakt""#,
            "<footer",
        ];
        let positions: Vec<_> = order
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_session_mounts_once() {
        let session = PageSession::new(Theme::light(), RuntimeMode::Development);
        let report = session.mount().expect("first mount runs the check");
        assert!(report.passed(), "{:?}", report.failures);
        assert!(session.mount().is_none());
    }

    #[test]
    fn test_session_in_production_checks_nothing() {
        let session = PageSession::new(Theme::dark(), RuntimeMode::Production);
        assert!(session.mount().is_none());
        assert_eq!(session.runtime(), RuntimeMode::Production);
    }

    #[test]
    fn test_dark_session_reports_failures() {
        let session = PageSession::new(Theme::new(Mode::Dark), RuntimeMode::Development);
        let report = session.mount().unwrap();
        assert_eq!(report.failures.len(), 2);
    }

    #[test]
    fn test_session_render_matches_render_page() {
        let content = SiteContent::gamaprofit();
        let session = PageSession::new(Theme::light(), RuntimeMode::Development);
        assert_eq!(
            session.render(&content, 2025).into_string(),
            render_page(session.theme(), &content, 2025).into_string()
        );
    }
}
