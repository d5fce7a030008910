//! HTML feature scanner: selector counts plus media and iframe sets.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::archive::{file_extension, SourceFile};
use crate::model::StatisticsRecord;
use crate::scan::{Accumulation, ContentScanner};

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e:?}"))
}

static BUTTON: LazyLock<Selector> = LazyLock::new(|| selector("button"));
static NAV: LazyLock<Selector> = LazyLock::new(|| selector(r#"[class*="nav"]"#));
static DROPDOWN: LazyLock<Selector> = LazyLock::new(|| selector(r#"div[class*="dropdown"]"#));
static EXTERNAL_LINK: LazyLock<Selector> = LazyLock::new(|| selector(r#"a[href*="http"]"#));
static INTERNAL_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"a[href]:not([href*="http"])"#));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static PAGINATION: LazyLock<Selector> = LazyLock::new(|| selector(r#"div[class*="pagination"]"#));
static HEAD_META: LazyLock<Selector> = LazyLock::new(|| selector("head > meta"));
static ALT: LazyLock<Selector> = LazyLock::new(|| selector("[alt]"));
static FORM: LazyLock<Selector> = LazyLock::new(|| selector("form"));
static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static GALLERY: LazyLock<Selector> = LazyLock::new(|| selector(r#"[class*="gallery"]"#));
static MEDIA_SOURCE: LazyLock<Selector> = LazyLock::new(|| selector("source[src]"));
static IFRAME: LazyLock<Selector> = LazyLock::new(|| selector("iframe[src]"));
static LIST: LazyLock<Selector> = LazyLock::new(|| selector("ul, ol, li, dl, dt, dd"));
static INLINE_STYLE: LazyLock<Selector> = LazyLock::new(|| selector("[style]"));
static CODE: LazyLock<Selector> = LazyLock::new(|| selector("code"));
static TOOLTIP: LazyLock<Selector> = LazyLock::new(|| selector(r#"[class*="tooltip"]"#));

/// Counts of one parsed HTML document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentCounts {
    pub button: u64,
    pub nav_bar: u64,
    pub drop_down_check: u64,
    pub external_link: u64,
    pub internal_link: u64,
    pub image: u64,
    pub pagination: u64,
    pub head_meta: u64,
    pub alt_ck: u64,
    pub form_ck: u64,
    pub table_ck: u64,
    pub img_gallery: u64,
    pub list_ck: u64,
    pub inline_code: u64,
    pub code: u64,
    pub tooltips: u64,
    pub media_types: BTreeSet<String>,
    pub iframe_sites: BTreeSet<String>,
}

/// Structural feature scanner for `.html` documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlScanner {
    accumulation: Accumulation,
}

impl HtmlScanner {
    pub fn new(accumulation: Accumulation) -> Self {
        Self { accumulation }
    }

    /// Parse and count one document. Returns `None` when no tree can be
    /// recovered (empty or whitespace-only content).
    pub fn scan_document(content: &[u8]) -> Option<DocumentCounts> {
        let text = String::from_utf8_lossy(content);
        if text.trim().is_empty() {
            return None;
        }
        let document = Html::parse_document(&text);
        let count = |sel: &Selector| document.select(sel).count() as u64;

        let media_types = document
            .select(&MEDIA_SOURCE)
            .filter_map(|el| el.value().attr("src"))
            .map(media_extension)
            .collect();
        let iframe_sites = document
            .select(&IFRAME)
            .filter_map(|el| el.value().attr("src"))
            .map(|src| iframe_home_site(src).to_string())
            .collect();

        Some(DocumentCounts {
            button: count(&BUTTON),
            nav_bar: count(&NAV),
            drop_down_check: count(&DROPDOWN),
            external_link: count(&EXTERNAL_LINK),
            internal_link: count(&INTERNAL_LINK),
            image: count(&IMAGE),
            pagination: count(&PAGINATION),
            head_meta: count(&HEAD_META),
            alt_ck: count(&ALT),
            form_ck: count(&FORM),
            table_ck: count(&TABLE),
            img_gallery: count(&GALLERY),
            list_ck: count(&LIST),
            inline_code: count(&INLINE_STYLE),
            code: count(&CODE),
            tooltips: count(&TOOLTIP),
            media_types,
            iframe_sites,
        })
    }

    fn fold(&self, doc: DocumentCounts, stats: &mut StatisticsRecord) {
        stats.button += doc.button;
        stats.nav_bar += doc.nav_bar;
        stats.drop_down_check += doc.drop_down_check;
        stats.external_link += doc.external_link;
        stats.internal_link += doc.internal_link;
        stats.image += doc.image;
        stats.pagination += doc.pagination;
        stats.head_meta += doc.head_meta;
        stats.alt_ck += doc.alt_ck;
        stats.form_ck += doc.form_ck;
        stats.table_ck += doc.table_ck;
        stats.img_gallery += doc.img_gallery;
        stats.media_type.extend(doc.media_types);
        stats.iframe_types.extend(doc.iframe_sites);

        match self.accumulation {
            Accumulation::LastDocument => {
                stats.list_ck = doc.list_ck;
                stats.inline_code = doc.inline_code;
                stats.code = doc.code;
                stats.tooltips = doc.tooltips;
            }
            Accumulation::Sum => {
                stats.list_ck += doc.list_ck;
                stats.inline_code += doc.inline_code;
                stats.code += doc.code;
                stats.tooltips += doc.tooltips;
            }
        }
    }
}

impl ContentScanner for HtmlScanner {
    fn name(&self) -> &'static str {
        "html"
    }

    fn extension(&self) -> &'static str {
        ".html"
    }

    fn scan(&self, files: &[SourceFile], stats: &mut StatisticsRecord) {
        stats.html_num = files.len() as u64;

        for file in files {
            match Self::scan_document(&file.content) {
                Some(doc) => self.fold(doc, stats),
                None => {
                    tracing::debug!(file = %file.name, "skipping HTML document with no content")
                }
            }
        }
    }
}

/// Extension of a media `src` without the dot; `""` when there is none.
pub fn media_extension(src: &str) -> String {
    file_extension(src).trim_start_matches('.').to_string()
}

/// Host part of an iframe `src`: drop a leading `http://`/`https://`, keep
/// everything up to the first `/`.
pub fn iframe_home_site(src: &str) -> &str {
    let rest = src
        .strip_prefix("https://")
        .or_else(|| src.strip_prefix("http://"))
        .unwrap_or(src);
    rest.split('/').next().unwrap_or(rest)
}
