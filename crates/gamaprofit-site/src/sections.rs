// ABOUTME: Page sections of the landing page, top to bottom
// ABOUTME: Each function renders one self-contained region from SiteContent

use gamaprofit_theme::ColorRole;
use maud::{Markup, html};

use crate::components::{
    border_color, brand_mark, framed_image, icon, icon_tile, outline_link, primary_link,
    section_heading, text_color,
};
use crate::content::{Icon, SiteContent};

const CONTAINER: &str = "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8";

fn band_style() -> String {
    format!(
        "border-top: 1px solid {border}; border-bottom: 1px solid {border}; background: {surface}",
        border = ColorRole::Border.var(),
        surface = ColorRole::Surface.var(),
    )
}

pub fn header(content: &SiteContent) -> Markup {
    let business = &content.business;
    html! {
        header class="sticky top-0 z-50 w-full border-b bg-white/80 backdrop-blur-md dark:bg-slate-950/80"
            style=(border_color(ColorRole::Border)) {
            (top_utility(content))
            div class={ "flex items-center justify-between py-4 " (CONTAINER) } {
                a href="/" class="flex items-center gap-2" aria-label={ (business.name) ", domů" } {
                    (brand_mark())
                    div {
                        p class="text-lg font-semibold tracking-tight" { (business.name) }
                        p class="text-xs" style=(text_color(ColorRole::Muted)) { (business.tagline) }
                    }
                }
                nav class="hidden items-center gap-8 md:flex" aria-label="Hlavní navigace" {
                    @for link in content.navigation {
                        a href=(link.href) class="text-sm font-medium transition-colors hover:opacity-80"
                            style=(text_color(ColorRole::Ink)) { (link.label) }
                    }
                }
                div class="hidden items-center gap-3 md:flex" {
                    a href=(business.phone_uri()) class="inline-flex items-center gap-2 text-sm font-medium"
                        style=(text_color(ColorRole::Ink)) {
                        (icon(Icon::Phone, "h-4 w-4")) (business.phone)
                    }
                    (primary_link(content.cta_label, "#kontakt", "px-5 py-2 text-sm"))
                }
                // No script: the mobile menu is a native disclosure widget
                details class="relative md:hidden" {
                    summary class="list-none rounded-xl border p-2" style=(border_color(ColorRole::Border))
                        aria-label="Menu" {
                        (icon(Icon::Menu, "h-5 w-5"))
                    }
                    div class="absolute right-0 mt-2 flex w-80 flex-col gap-4 rounded-xl bg-white p-6 shadow dark:bg-slate-950" {
                        @for link in content.navigation {
                            a href=(link.href) class="text-base font-medium" style=(text_color(ColorRole::Ink)) {
                                (link.label)
                            }
                        }
                        (primary_link(content.cta_label, "#kontakt", "mt-2 w-full justify-center px-5 py-2"))
                        div class="mt-6 grid gap-2 text-sm" style=(text_color(ColorRole::Muted)) {
                            a href=(business.phone_uri()) class="inline-flex items-center gap-2 hover:opacity-80" {
                                (icon(Icon::Phone, "h-4 w-4")) (business.phone)
                            }
                            a href=(business.mail_uri()) class="inline-flex items-center gap-2 hover:opacity-80" {
                                (icon(Icon::Mail, "h-4 w-4")) (business.email)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn top_utility(content: &SiteContent) -> Markup {
    let business = &content.business;
    html! {
        div class="hidden gp-gradient-bar text-xs md:block"
            style={ "border-bottom: 1px solid " (ColorRole::Border.var()) "; " (text_color(ColorRole::Ink)) } {
            div class={ "flex items-center justify-between py-2 " (CONTAINER) } {
                div class="flex items-center gap-4" {
                    span class="inline-flex items-center gap-1" {
                        (icon(Icon::MapPin, "h-3.5 w-3.5")) (business.location)
                    }
                    span class="inline-flex items-center gap-1" {
                        (icon(Icon::Building, "h-3.5 w-3.5"))
                        "ID datové schránky: "
                        strong class="ml-1" { (business.data_box) }
                    }
                }
                div class="flex items-center gap-4" {
                    a href=(business.mail_uri()) class="inline-flex items-center gap-1 hover:opacity-80" {
                        (icon(Icon::Mail, "h-3.5 w-3.5")) (business.email)
                    }
                    a href=(business.phone_uri()) class="inline-flex items-center gap-1 hover:opacity-80" {
                        (icon(Icon::Phone, "h-3.5 w-3.5")) (business.phone)
                    }
                }
            }
        }
    }
}

pub fn announcement_bar(content: &SiteContent) -> Markup {
    let announcement = &content.announcement;
    html! {
        div class="gp-gradient-bar py-2 text-xs"
            style={ "border-bottom: 1px solid " (ColorRole::Border.var()) "; " (text_color(ColorRole::Ink)) } {
            div class={ "flex items-center justify-between " (CONTAINER) } {
                div class="flex items-center gap-2" {
                    (icon(Icon::Calendar, "h-4 w-4"))
                    p class="hidden sm:block" { (announcement.text) }
                    p class="sm:hidden" { (announcement.short_text) }
                }
                a href=(announcement.link.href) class="inline-flex items-center gap-1 font-medium hover:opacity-80" {
                    (announcement.link.label)
                    (icon(Icon::ChevronRight, "h-4 w-4"))
                }
            }
        }
    }
}

pub fn hero(content: &SiteContent) -> Markup {
    let hero = &content.hero;
    html! {
        section aria-labelledby="hero-title" class="relative overflow-hidden" {
            div class="pointer-events-none absolute inset-0 -z-10 opacity-70 gp-hero-bubble" {}
            div class="pointer-events-none absolute inset-0 -z-10 opacity-40 gp-grid-spot" {}

            div class={ "grid grid-cols-1 items-center gap-12 py-16 md:grid-cols-2 md:py-20 " (CONTAINER) } {
                div {
                    h1 id="hero-title" class="text-4xl font-semibold tracking-tight sm:text-5xl gp-ink" {
                        (hero.title)
                    }
                    p class="mt-5 max-w-xl text-lg" style=(text_color(ColorRole::Muted)) { (hero.lead) }
                    div class="mt-8 flex flex-wrap items-center gap-3" {
                        (primary_link(content.cta_label, "#kontakt", "px-6 py-3"))
                        (outline_link("Naše služby", "#sluzby"))
                    }
                    div class="mt-8 flex flex-wrap gap-2" {
                        @for chip in hero.chips {
                            span class="gp-chip rounded-full px-3 py-1 text-xs font-medium" { (chip) }
                        }
                    }
                }
                div class="relative" {
                    (framed_image(&hero.image, "mx-auto aspect-[4/3] max-w-xl"))
                    div class="pointer-events-none absolute -bottom-6 -right-6 hidden rotate-3 sm:block" {
                        div class="flex items-center gap-3 rounded-xl border bg-white/90 p-4 text-sm backdrop-blur dark:bg-slate-900/80"
                            style=(border_color(ColorRole::Border)) {
                            (icon(Icon::ShieldCheck, "h-5 w-5"))
                            div {
                                p class="font-medium" { (hero.badge_title) }
                                p style=(text_color(ColorRole::Muted)) { (hero.badge_text) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn trust_strip(content: &SiteContent) -> Markup {
    html! {
        section aria-label="Důvěryhodnost" class="border-y bg-[var(--gp-surface)] dark:bg-transparent"
            style=(border_color(ColorRole::Border)) {
            div class={ "grid grid-cols-2 gap-6 py-8 sm:grid-cols-4 " (CONTAINER) } {
                @for kpi in content.kpis {
                    div class="text-center" {
                        p class="gp-kpi text-2xl font-semibold tracking-tight" style=(text_color(ColorRole::Primary)) {
                            (kpi.value)
                        }
                        p class="mt-1 text-xs" style=(text_color(ColorRole::Muted)) { (kpi.label) }
                    }
                }
            }
        }
    }
}

pub fn services(content: &SiteContent) -> Markup {
    html! {
        section id="sluzby" aria-labelledby="services-title" class={ "py-16 " (CONTAINER) } {
            div class="mx-auto max-w-2xl text-center" {
                (section_heading("services-title", &content.services))
            }
            div class="mt-10 grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3" {
                @for service in content.service_items {
                    article class="group rounded-2xl border p-6 transition hover:-translate-y-0.5 hover:shadow-md gp-card"
                        style=(border_color(ColorRole::Border)) {
                        div class="flex items-center gap-3" {
                            (icon_tile(service.icon))
                            h3 class="text-lg font-semibold gp-ink" { (service.title) }
                        }
                        ul class="mt-4 space-y-1 text-sm" style=(text_color(ColorRole::Muted)) {
                            @for bullet in service.bullets {
                                li class="flex items-start gap-2" {
                                    span style=(text_color(ColorRole::Border)) {
                                        (icon(Icon::ChevronRight, "mt-0.5 h-4 w-4 flex-none"))
                                    }
                                    span { (bullet) }
                                }
                            }
                        }
                        div class="mt-5" {
                            a href="#kontakt" class="inline-flex items-center text-sm font-medium hover:opacity-80"
                                style=(text_color(ColorRole::Primary)) {
                                (content.service_link_label)
                                (icon(Icon::ChevronRight, "ml-1 h-4 w-4"))
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn process(content: &SiteContent) -> Markup {
    html! {
        section id="proces" aria-labelledby="process-title" class="py-16" style=(band_style()) {
            div class=(CONTAINER) {
                div class="mx-auto max-w-2xl text-center" {
                    (section_heading("process-title", &content.process))
                }
                ol class="mt-10 grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4" {
                    @for step in content.steps {
                        li class="rounded-2xl border p-4 gp-card" style=(border_color(ColorRole::Border)) {
                            div class="flex items-center gap-3" {
                                (icon_tile(step.icon))
                                p class="font-medium gp-ink" { (step.title) }
                            }
                            p class="mt-3 text-sm" style=(text_color(ColorRole::Muted)) { (step.text) }
                        }
                    }
                }
            }
        }
    }
}

pub fn usp(content: &SiteContent) -> Markup {
    html! {
        section aria-labelledby="usp-title" class={ "py-16 " (CONTAINER) } {
            div class="grid grid-cols-1 items-center gap-10 md:grid-cols-2" {
                div {
                    (section_heading("usp-title", &content.usp))
                    ul class="mt-6 space-y-3" {
                        @for item in content.usp_items {
                            li class="flex items-start gap-3" {
                                span style=(text_color(ColorRole::Primary)) {
                                    (icon(item.icon, "mt-0.5 h-5 w-5 flex-none"))
                                }
                                div {
                                    p class="font-medium gp-ink" { (item.title) }
                                    p class="text-sm" style=(text_color(ColorRole::Muted)) { (item.text) }
                                }
                            }
                        }
                    }
                    div class="mt-8 flex gap-3" {
                        (primary_link(content.usp_cta_label, "#kontakt", "px-6 py-2"))
                        (outline_link("Reference", "#reference"))
                    }
                }
                div class="relative" {
                    (framed_image(&content.usp_image, "mx-auto aspect-[4/3] max-w-xl"))
                }
            }
        }
    }
}

pub fn testimonials(content: &SiteContent) -> Markup {
    html! {
        section id="reference" aria-labelledby="testimonials-title" class="py-16" style=(band_style()) {
            div class=(CONTAINER) {
                div class="mx-auto max-w-2xl text-center" {
                    (section_heading("testimonials-title", &content.testimonials))
                }
                div class="mt-10 grid grid-cols-1 gap-6 md:grid-cols-3" {
                    @for testimonial in content.testimonial_items {
                        figure class="rounded-2xl border p-4 gp-card" style=(border_color(ColorRole::Border)) {
                            blockquote class="text-sm leading-relaxed" style=(text_color(ColorRole::Ink)) {
                                "“" (testimonial.quote) "”"
                            }
                            figcaption class="mt-4 text-sm" style=(text_color(ColorRole::Muted)) {
                                p class="font-medium" style=(text_color(ColorRole::Ink)) { (testimonial.name) }
                                p { (testimonial.role) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn downloads(content: &SiteContent) -> Markup {
    let downloads = &content.downloads;
    html! {
        section id="stazeni" aria-labelledby="downloads-title" class={ "py-16 " (CONTAINER) } {
            div class="grid grid-cols-1 items-center gap-8 md:grid-cols-2" {
                div {
                    (section_heading("downloads-title", &downloads.intro))
                    div class="mt-6 flex flex-wrap gap-3" {
                        // No document is attached yet, so this must not navigate or submit
                        button type="button" class="gp-btn-primary rounded-xl px-6 py-2 font-medium" {
                            (downloads.download_label)
                        }
                        (outline_link(downloads.help_label, "#kontakt"))
                    }
                }
                (framed_image(&downloads.preview, "aspect-[3/2]"))
            }
        }
    }
}

pub fn contact(content: &SiteContent) -> Markup {
    let contact = &content.contact;
    let business = &content.business;
    let field = "w-full rounded-xl border bg-transparent px-3 py-2";
    html! {
        section id="kontakt" aria-labelledby="contact-title" class="py-16"
            style={ "border-top: 1px solid " (ColorRole::Border.var()) "; background: " (ColorRole::Surface.var()) } {
            div class={ "grid grid-cols-1 gap-10 md:grid-cols-2 " (CONTAINER) } {
                div {
                    (section_heading("contact-title", &contact.intro))
                    form class="mt-8 grid grid-cols-1 gap-4" onsubmit="event.preventDefault()" {
                        div class="grid grid-cols-1 gap-4 sm:grid-cols-2" {
                            input class=(field) name="name" required aria-label="Jméno" placeholder="Jméno a příjmení";
                            input class=(field) name="company" aria-label="Firma" placeholder="Firma (volitelné)";
                        }
                        div class="grid grid-cols-1 gap-4 sm:grid-cols-2" {
                            input class=(field) name="email" type="email" required aria-label="E-mail" placeholder="E-mail";
                            input class=(field) name="ico" aria-label="IČ" placeholder="IČ (volitelné)";
                        }
                        textarea class={ (field) " min-h-[120px]" } name="message" required aria-label="Zpráva"
                            placeholder="Stručně popište, co potřebujete…" {}
                        div class="flex items-center justify-between gap-3" {
                            p class="text-xs" style=(text_color(ColorRole::Muted)) { (contact.consent) }
                            button type="submit" class="gp-btn-primary rounded-xl px-6 py-2 font-medium" {
                                (contact.submit_label)
                            }
                        }
                    }
                }
                div class="space-y-4" {
                    div class="rounded-2xl border p-6 gp-card" style=(border_color(ColorRole::Border)) {
                        div class="space-y-3 text-sm" style=(text_color(ColorRole::Ink)) {
                            div class="flex items-center gap-3" { (icon(Icon::Phone, "h-4 w-4")) (business.phone) }
                            div class="flex items-center gap-3" { (icon(Icon::Mail, "h-4 w-4")) (business.email) }
                            div class="flex items-center gap-3" { (icon(Icon::MapPin, "h-4 w-4")) (business.location) }
                            div class="flex items-center gap-3" {
                                (icon(Icon::Building, "h-4 w-4")) "ID datové schránky: " (business.data_box)
                            }
                        }
                    }
                    (framed_image(&contact.map, "aspect-[4/3]"))
                }
            }
        }
    }
}

pub fn footer(content: &SiteContent, year: i32) -> Markup {
    let business = &content.business;
    html! {
        footer class="bg-white py-10 text-sm dark:bg-slate-950"
            style={ "border-top: 1px solid " (ColorRole::Border.var()) } {
            div class={ "grid grid-cols-1 gap-10 md:grid-cols-4 " (CONTAINER) } {
                div {
                    div class="flex items-center gap-2" {
                        (brand_mark())
                        p class="font-semibold gp-ink" { (business.name) }
                    }
                    p class="mt-3 max-w-xs" style=(text_color(ColorRole::Muted)) { (business.summary) }
                }
                div {
                    p class="mb-3 font-semibold gp-ink" { "Navigace" }
                    ul class="space-y-2" style=(text_color(ColorRole::Muted)) {
                        @for link in content.navigation {
                            li { a href=(link.href) class="hover:opacity-80" { (link.label) } }
                        }
                    }
                }
                div {
                    p class="mb-3 font-semibold gp-ink" { "Právní" }
                    ul class="space-y-2" style=(text_color(ColorRole::Muted)) {
                        @for link in content.legal {
                            li { a href=(link.href) class="hover:opacity-80" { (link.label) } }
                        }
                    }
                }
                div {
                    p class="mb-3 font-semibold gp-ink" { "Fakturační údaje" }
                    ul class="space-y-1" style=(text_color(ColorRole::Muted)) {
                        @for line in content.billing {
                            li { (line) }
                        }
                    }
                    div class="mt-4 text-xs" style=(text_color(ColorRole::Muted)) {
                        "© " (year) " " (business.name) ". Všechna práva vyhrazena."
                    }
                }
            }
        }
    }
}
