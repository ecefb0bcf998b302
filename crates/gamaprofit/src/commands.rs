// ABOUTME: Implementations of the check, css, tokens and build subcommands
// ABOUTME: Output goes to a caller-supplied writer so commands stay testable

use anyhow::{Context, Result};
use chrono::Datelike;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use gamaprofit_logging::{PerfTimer, info, timed, warn};
use gamaprofit_site::{PageSession, SiteContent};
use gamaprofit_theme::{
    AssertionFailure, ComputedStyles, Mode, Rgb, RuntimeMode, SelfCheck, SelfCheckReport, Theme,
    TokenSet, contrast_ratio, parse_color, relative_luminance, render_stylesheet,
};

pub const INDEX_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "gamaprofit.css";

/// A build slower than this logs a warning
const BUILD_BUDGET: Duration = Duration::from_secs(2);

/// Run the self-check for each mode. Returns `false` when any check failed.
pub fn check(
    out: &mut impl Write,
    check: &SelfCheck,
    modes: &[Mode],
    stylesheet: Option<&Path>,
    runtime: RuntimeMode,
) -> Result<bool> {
    if runtime.is_production() {
        writeln!(out, "self-check skipped (production)")?;
        return Ok(true);
    }

    let css = stylesheet
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read stylesheet {}", path.display()))
        })
        .transpose()?;

    let mut healthy = true;
    for &mode in modes {
        let report = match &css {
            Some(css) => check.run(&ComputedStyles::from_stylesheet(css, mode), runtime),
            None => check.run(&Theme::new(mode), runtime),
        };
        write_report(out, mode, &report)?;
        healthy &= report.passed();
    }
    Ok(healthy)
}

fn write_report(out: &mut impl Write, mode: Mode, report: &SelfCheckReport) -> Result<()> {
    writeln!(out, "{mode}: {report}")?;
    for failure in &report.failures {
        match failure {
            AssertionFailure::InsufficientContrast {
                foreground,
                background,
                required,
                actual,
                ..
            } => writeln!(
                out,
                "  - {failure} ({foreground} on {background}: {actual:.2}, needs {required:.2})"
            )?,
            AssertionFailure::MissingToken { .. } => writeln!(out, "  - {failure}")?,
        }
    }
    Ok(())
}

/// Print the stylesheet, or write it to `path`.
pub fn css(out: &mut impl Write, path: Option<&Path>) -> Result<()> {
    let stylesheet = render_stylesheet(&TokenSet::light(), &TokenSet::dark());
    match path {
        Some(path) => {
            write_file(path, &stylesheet)?;
            info!(path = %path.display(), "Stylesheet written");
        }
        None => out.write_all(stylesheet.as_bytes())?,
    }
    Ok(())
}

/// Tabulate every token with its resolved color and contrast against white.
///
/// With `role`, print only that token's value; an unknown role is an error.
pub fn tokens(out: &mut impl Write, modes: &[Mode], role: Option<&str>) -> Result<()> {
    for &mode in modes {
        let theme = Theme::new(mode);
        theme.validate()?;

        if let Some(role) = role {
            writeln!(out, "{mode}: {}", theme.lookup(role)?)?;
            continue;
        }

        writeln!(out, "{mode}")?;
        writeln!(
            out,
            "  {:<18} {:<24} {:<8} {:>9} {:>8}",
            "property", "value", "hex", "luminance", "vs white"
        )?;
        for (role, value) in theme.tokens.iter() {
            // Validated above; tints report their opaque color
            let rgb = parse_color(value)?.rgb;
            writeln!(
                out,
                "  {:<18} {:<24} {:<8} {:>9.4} {:>8.2}",
                role.css_property(),
                value,
                rgb.to_hex(),
                relative_luminance(rgb),
                contrast_ratio(rgb, Rgb::WHITE)
            )?;
        }
    }
    Ok(())
}

/// Options for [`build`]
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub out_dir: PathBuf,
    pub mode: Mode,
    pub runtime: RuntimeMode,
    pub year: i32,
}

impl BuildOptions {
    pub fn new(out_dir: PathBuf, mode: Mode, runtime: RuntimeMode) -> Self {
        Self {
            out_dir,
            mode,
            runtime,
            year: chrono::Local::now().year(),
        }
    }
}

/// Render the site into `options.out_dir`, mounting it once first.
pub fn build(out: &mut impl Write, check: SelfCheck, options: &BuildOptions) -> Result<()> {
    let _timer = PerfTimer::new("build").warn_after(BUILD_BUDGET);
    let session = PageSession::with_check(Theme::new(options.mode), options.runtime, check);

    if let Some(report) = session.mount() {
        write_report(out, options.mode, &report)?;
        if !report.passed() {
            warn!(failures = report.failures.len(), "Building with accessibility findings");
        }
    }

    std::fs::create_dir_all(&options.out_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            options.out_dir.display()
        )
    })?;

    let page = timed!("render_page", {
        session.render(&SiteContent::gamaprofit(), options.year)
    });
    write_file(&options.out_dir.join(INDEX_FILE), &page.into_string())?;
    write_file(&options.out_dir.join(STYLESHEET_FILE), session.stylesheet())?;

    info!(
        files_written = 2_u64,
        out_dir = %options.out_dir.display(),
        "Site written"
    );
    writeln!(out, "wrote {}", options.out_dir.display())?;
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
