// ABOUTME: Small reusable markup fragments shared across page sections
// ABOUTME: Buttons, brand mark, icons and section headings bound to theme tokens

use gamaprofit_theme::ColorRole;
use maud::{Markup, PreEscaped, html};

use crate::content::{Icon, Image, SectionIntro};

/// Inline `color: var(--gp-…)` declaration
pub fn text_color(role: ColorRole) -> String {
    format!("color: {}", role.var())
}

/// Inline `border-color: var(--gp-…)` declaration
pub fn border_color(role: ColorRole) -> String {
    format!("border-color: {}", role.var())
}

/// Inline 24px stroke icon drawn in `currentColor`.
pub fn icon(icon: Icon, class: &str) -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"
            class=(class) data-icon=(icon.name()) aria-hidden="true" {
            (PreEscaped(glyph(icon)))
        }
    }
}

fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Phone => {
            r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>"#
        }
        Icon::Mail => {
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
        }
        Icon::MapPin => {
            r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
        }
        Icon::Building => {
            r#"<path d="M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z"/><path d="M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2"/><path d="M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2"/><path d="M10 6h4M10 10h4M10 14h4M10 18h4"/>"#
        }
        Icon::FileText => {
            r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 9H8M16 13H8M16 17H8"/>"#
        }
        Icon::Calculator => {
            r#"<rect width="16" height="20" x="4" y="2" rx="2"/><path d="M8 6h8M16 14v4M8 10h.01M12 10h.01M16 10h.01M8 14h.01M12 14h.01M8 18h.01M12 18h.01"/>"#
        }
        Icon::ShieldCheck => {
            r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/>"#
        }
        Icon::Users => {
            r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"/>"#
        }
        Icon::Receipt => {
            r#"<path d="M4 2v20l2-1 2 1 2-1 2 1 2-1 2 1 2-1 2 1V2l-2 1-2-1-2 1-2-1-2 1-2-1-2 1Z"/><path d="M14 8H8M16 12H8M13 16H8"/>"#
        }
        Icon::Cloud => r#"<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"/>"#,
        Icon::Landmark => {
            r#"<path d="M3 22h18M6 18v-7M10 18v-7M14 18v-7M18 18v-7"/><path d="M12 2 20 7H4Z"/>"#
        }
        Icon::Calendar => {
            r#"<path d="M8 2v4M16 2v4M3 10h18"/><path d="M21 14V6a2 2 0 0 0-2-2H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h8"/><path d="m16 20 2 2 4-4"/>"#
        }
        Icon::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
        Icon::Menu => r#"<path d="M4 6h16M4 12h16M4 18h16"/>"#,
    }
}

pub fn brand_mark() -> Markup {
    html! {
        div class="grid h-10 w-10 place-items-center rounded-xl gp-brand" {
            span class="font-bold" { "GP" }
        }
    }
}

pub fn icon_tile(glyph: Icon) -> Markup {
    html! {
        div class="grid h-10 w-10 place-items-center rounded-xl gp-brand" {
            (icon(glyph, "h-5 w-5"))
        }
    }
}

/// Filled primary call to action
pub fn primary_link(label: &str, href: &str, size: &str) -> Markup {
    html! {
        a href=(href) class={ "gp-btn-primary inline-flex items-center rounded-xl font-medium " (size) } {
            (label)
        }
    }
}

/// Primary-outlined secondary action
pub fn outline_link(label: &str, href: &str) -> Markup {
    html! {
        a href=(href)
            class="inline-flex items-center rounded-xl border px-6 py-2 font-medium"
            style={ (border_color(ColorRole::Primary)) "; " (text_color(ColorRole::Primary)) } {
            (label)
        }
    }
}

pub fn section_heading(id: &str, intro: &SectionIntro) -> Markup {
    html! {
        h2 id=(id) class="text-3xl font-semibold tracking-tight sm:text-4xl gp-ink" { (intro.title) }
        p class="mt-3" style=(text_color(ColorRole::Muted)) { (intro.lead) }
    }
}

/// Bordered card frame holding a cover image
pub fn framed_image(image: &Image, aspect: &str) -> Markup {
    html! {
        div class={ "relative w-full overflow-hidden rounded-2xl border shadow-sm gp-card " (aspect) }
            style=(border_color(ColorRole::Border)) {
            img src=(image.src) alt=(image.alt) class="h-full w-full object-cover" loading="lazy";
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_styles_reference_tokens() {
        assert_eq!(text_color(ColorRole::Muted), "color: var(--gp-muted)");
        assert_eq!(border_color(ColorRole::Border), "border-color: var(--gp-border)");
    }

    #[test]
    fn test_icon_is_hidden_from_assistive_tech() {
        let html = icon(Icon::Phone, "h-4 w-4").into_string();
        assert!(html.starts_with("<svg"));
        assert!(html.contains(r#"class="h-4 w-4""#));
        assert!(html.contains(r#"data-icon="phone""#));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn test_every_icon_draws_a_shape() {
        let all = [
            Icon::Phone,
            Icon::Mail,
            Icon::MapPin,
            Icon::Building,
            Icon::FileText,
            Icon::Calculator,
            Icon::ShieldCheck,
            Icon::Users,
            Icon::Receipt,
            Icon::Cloud,
            Icon::Landmark,
            Icon::Calendar,
            Icon::ChevronRight,
            Icon::Menu,
        ];
        for glyph in all {
            let html = icon(glyph, "h-5 w-5").into_string();
            assert!(html.contains("<path"), "{} renders nothing", glyph.name());
            assert!(html.contains(r#"stroke="currentColor""#));
            assert!(html.ends_with("</svg>"));
        }
    }

    #[test]
    fn test_outline_link_escapes_label() {
        let html = outline_link("Mzdy & daně", "#kontakt").into_string();
        assert!(html.contains("Mzdy &amp; daně"));
        assert!(html.contains("border-color: var(--gp-primary); color: var(--gp-primary)"));
    }
}
