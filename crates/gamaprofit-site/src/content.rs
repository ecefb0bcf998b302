// ABOUTME: Static copy for the GamaProfit landing page
// ABOUTME: Plain data only; sections decide how each piece is laid out

/// Pictograms used next to headings and contact lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Phone,
    Mail,
    MapPin,
    Building,
    FileText,
    Calculator,
    ShieldCheck,
    Users,
    Receipt,
    Cloud,
    Landmark,
    Calendar,
    ChevronRight,
    Menu,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Phone => "phone",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Building => "building-2",
            Icon::FileText => "file-text",
            Icon::Calculator => "calculator",
            Icon::ShieldCheck => "shield-check",
            Icon::Users => "users",
            Icon::Receipt => "receipt-text",
            Icon::Cloud => "cloud",
            Icon::Landmark => "landmark",
            Icon::Calendar => "calendar-check-2",
            Icon::ChevronRight => "chevron-right",
            Icon::Menu => "menu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Business {
    pub name: &'static str,
    pub legal_name: &'static str,
    pub tagline: &'static str,
    /// Display form, e.g. `+420 000 000 000`
    pub phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub data_box: &'static str,
    pub summary: &'static str,
}

impl Business {
    /// `tel:` URI with whitespace removed
    pub fn phone_uri(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    pub fn mail_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Announcement {
    pub text: &'static str,
    pub short_text: &'static str,
    pub link: Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub lead: &'static str,
    pub chips: &'static [&'static str],
    pub image: Image,
    pub badge_title: &'static str,
    pub badge_text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpi {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

/// A numbered step, or a selling point when `icon` is unused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionIntro {
    pub title: &'static str,
    pub lead: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Downloads {
    pub intro: SectionIntro,
    pub download_label: &'static str,
    pub help_label: &'static str,
    pub preview: Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub intro: SectionIntro,
    pub consent: &'static str,
    pub submit_label: &'static str,
    pub map: Image,
}

/// Everything the landing page says
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteContent {
    pub business: Business,
    pub navigation: &'static [Link],
    pub cta_label: &'static str,
    pub announcement: Announcement,
    pub hero: Hero,
    pub kpis: &'static [Kpi],
    pub services: SectionIntro,
    pub service_items: &'static [Service],
    pub service_link_label: &'static str,
    pub process: SectionIntro,
    pub steps: &'static [Step],
    pub usp: SectionIntro,
    pub usp_items: &'static [Step],
    pub usp_cta_label: &'static str,
    pub usp_image: Image,
    pub testimonials: SectionIntro,
    pub testimonial_items: &'static [Testimonial],
    pub downloads: Downloads,
    pub contact: Contact,
    pub legal: &'static [Link],
    pub billing: &'static [&'static str],
}

const NAVIGATION: &[Link] = &[
    Link::new("Služby", "#sluzby"),
    Link::new("Jak pracujeme", "#proces"),
    Link::new("Reference", "#reference"),
    Link::new("Ke stažení", "#stazeni"),
    Link::new("Kontakt", "#kontakt"),
];

const CHIPS: &[&str] = &[
    "Účetnictví",
    "Daňová evidence",
    "Mzdy & personalistika",
    "Daňová přiznání",
    "Zastupování na úřadech",
    "On-line účetnictví",
];

const KPIS: &[Kpi] = &[
    Kpi { value: "100+", label: "Klienti v různých oborech" },
    Kpi { value: "∞", label: "Mzdy zpracované měsíčně" },
    Kpi { value: "Standard", label: "On-line spolupráce" },
    Kpi { value: "Ano", label: "Zastupování na úřadech" },
];

const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Receipt,
        title: "Vedení účetnictví",
        bullets: &["Účtování dokladů", "DPH a KH", "Výkazy a uzávěrky"],
    },
    Service {
        icon: Icon::FileText,
        title: "Daňová evidence (OSVČ)",
        bullets: &["Příjmy/výdaje", "Paušály", "On-line sdílení"],
    },
    Service {
        icon: Icon::Users,
        title: "Mzdy & personalistika",
        bullets: &["Mzdová agenda", "Přihlášky/odhlášky", "ELDP, exekuce"],
    },
    Service {
        icon: Icon::Calculator,
        title: "Daňová přiznání",
        bullets: &["FO/PO", "Silniční, nemovitosti", "DPH, kontrolní hlášení"],
    },
    Service {
        icon: Icon::Landmark,
        title: "Zastupování na úřadech",
        bullets: &["Finanční úřad", "ČSSZ, zdravotní", "Kontroly a komunikace"],
    },
    Service {
        icon: Icon::Cloud,
        title: "On\u{2011}line účetnictví",
        bullets: &["Sběr dokladů digitálně", "Napojení banky", "Přehled kdykoli"],
    },
];

const STEPS: &[Step] = &[
    Step {
        icon: Icon::Phone,
        title: "1) Krátký hovor",
        text: "Ujasníme si rozsah a termíny.",
    },
    Step {
        icon: Icon::FileText,
        title: "2) Předání podkladů",
        text: "Digitálně nebo fyzicky, jak je vám pohodlné.",
    },
    Step {
        icon: Icon::Calculator,
        title: "3) Nastavení a běh",
        text: "Napojení banky, automatizace, pravidelné výstupy.",
    },
    Step {
        icon: Icon::ShieldCheck,
        title: "4) Jistota a zastupování",
        text: "Hlídáme termíny a komunikujeme s úřady.",
    },
];

const USP_ITEMS: &[Step] = &[
    Step {
        icon: Icon::ShieldCheck,
        title: "Transparentní komunikace",
        text: "Mluvíme srozumitelně a držíme slovo.",
    },
    Step {
        icon: Icon::ShieldCheck,
        title: "Přebíráme odpovědnost",
        text: "Termíny hlídáme my, ne vy.",
    },
    Step {
        icon: Icon::ShieldCheck,
        title: "On-line spolupráce",
        text: "Doklady posíláte digitálně, přehled máte kdykoli.",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Jan Novák",
        role: "e\u{2011}shop s doplňky",
        quote: "Převzetí účetnictví proběhlo hladce. Vyhovuje nám on\u{2011}line režim a jasné termíny výstupů.",
    },
    Testimonial {
        name: "Lucie Veselá",
        role: "stavební firma",
        quote: "U kontrol na úřadech jsme konečně v klidu. Komunikace je rychlá a konkrétní.",
    },
    Testimonial {
        name: "Petr Dvořák",
        role: "služby B2B",
        quote: "Mzdová agenda bez chyb. Oceňuji přehledné podklady pro management.",
    },
];

const LEGAL: &[Link] = &[
    Link::new("Zpracování osobních údajů", "/gdpr"),
    Link::new("Cookies", "/cookies"),
    Link::new("Obchodní podmínky", "/obchodni-podminky"),
];

const BILLING: &[&str] = &[
    "GamaProfit s.r.o.",
    "IČ: ———— • DIČ: ————",
    "Datová schránka: xxxxxxx",
];

impl SiteContent {
    /// The production copy of gamaprofit.cz
    pub const fn gamaprofit() -> Self {
        Self {
            business: Business {
                name: "GamaProfit",
                legal_name: "GamaProfit s.r.o.",
                tagline: "Účetnictví • Mzdy • Daně",
                phone: "+420 000 000 000",
                email: "info@gamaprofit.cz",
                location: "Nepomuk • Plzeňsko",
                data_box: "xxxxxxx",
                summary: "Stabilní účetní partner pro malé a střední firmy. Transparentně, včas, bez stresu.",
            },
            navigation: NAVIGATION,
            cta_label: "Nezávazná konzultace",
            announcement: Announcement {
                text: "Blíží se termíny: DPH (měsíční), kontrolní hlášení, záloha na daň z příjmů.",
                short_text: "Aktuální daňové termíny.",
                link: Link::new("Poradna", "#poradna"),
            },
            hero: Hero {
                title: "Účetnictví, mzdy a daně pro malé a střední firmy.",
                lead: "Přebíráme plnou odpovědnost za vaše povinnosti. Transparentně, včas a v souladu se zákonem.",
                chips: CHIPS,
                image: Image {
                    src: "/hero-ledger.jpg",
                    alt: "Ilustrativní pracovní scéna, účetní agenda",
                },
                badge_title: "Bezpečná správa dokladů",
                badge_text: "GDPR-ready, kontrola termínů, auditní stopa",
            },
            kpis: KPIS,
            services: SectionIntro {
                title: "Čím vám pomůžeme",
                lead: "Kompletní agenda na jednom místě. Jasná odpovědnost, žádné stresy.",
            },
            service_items: SERVICES,
            service_link_label: "Získat kalkulaci",
            process: SectionIntro {
                title: "Jak spolupracujeme",
                lead: "Jednoduchý proces bez zbytečných kroků.",
            },
            steps: STEPS,
            usp: SectionIntro {
                title: "Proč si vybrat GamaProfit",
                lead: "Stabilní tým, jasné dohody a bezpečná práce s daty. Cíl: klid ve vaší firmě.",
            },
            usp_items: USP_ITEMS,
            usp_cta_label: "Domluvme si 15 minut",
            usp_image: Image {
                src: "/office-ledger-2.jpg",
                alt: "Tým při práci",
            },
            testimonials: SectionIntro {
                title: "Co o nás říkají",
                lead: "Krátké zkušenosti klientů z různých oborů.",
            },
            testimonial_items: TESTIMONIALS,
            downloads: Downloads {
                intro: SectionIntro {
                    title: "Checklist předání účetnictví",
                    lead: "Praktický seznam dokumentů a kroků, aby převzetí proběhlo rychle a bez chyb.",
                },
                download_label: "Stáhnout PDF",
                help_label: "Potřebuji s tím pomoct",
                preview: Image {
                    src: "/checklist-preview.jpg",
                    alt: "Náhled checklistu",
                },
            },
            contact: Contact {
                intro: SectionIntro {
                    title: "Ozvěte se nám",
                    lead: "Nezávazně probereme vaši situaci a doporučíme nejefektivnější postup.",
                },
                consent: "Odesláním souhlasíte se zpracováním osobních údajů.",
                submit_label: "Odeslat",
                map: Image {
                    src: "/map-placeholder.jpg",
                    alt: "Mapa, Nepomuk",
                },
            },
            legal: LEGAL,
            billing: BILLING,
        }
    }

    /// Navigation entry pointing at `href`
    pub fn nav_link(&self, href: &str) -> Option<&Link> {
        self.navigation.iter().find(|link| link.href == href)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::gamaprofit()
    }
}
