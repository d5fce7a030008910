//! Rubric evaluation: map a finished statistics record onto pass/fail checks
//! and the auxiliary richness tally.
//!
//! Both functions are pure; they never touch the record or do IO.

mod config;

pub use config::{RubricConfig, RubricConfigError, Thresholds};

use crate::model::{CheckOutcome, Richness, StatisticsRecord, Verdict};

/// Highest richness score: ten feature points, two media, two iframe, one
/// script, one style.
pub const MAX_RICHNESS: u32 = 16;

/// Evaluate the seven pass/fail checks.
pub fn evaluate(stats: &StatisticsRecord, thresholds: &Thresholds) -> Verdict {
    let at_least = |value: u64, min: u64| CheckOutcome::from_bool(value >= min);

    Verdict {
        html_num: at_least(stats.html_num, thresholds.html_pages),
        nav_menu: at_least(stats.internal_link, thresholds.internal_links),
        css_elements: at_least(stats.css, thresholds.css_rules),
        external_links: at_least(stats.external_link, thresholds.external_links),
        img_num: at_least(stats.visual_media(), thresholds.visual_media),
        head_meta: at_least(stats.head_meta, thresholds.head_meta),
        alt: at_least(stats.alt_ck, thresholds.alt_attributes),
    }
}

/// Compute the feature-diversity tally (0..=16 with default thresholds).
pub fn richness(stats: &StatisticsRecord, thresholds: &Thresholds) -> Richness {
    let mut score: u32 =
        stats.feature_counters().iter().filter(|(_, count)| *count > 0).count() as u32;

    score += (stats.media_type.len() as u32).min(thresholds.richness_media_cap);
    score += (stats.iframe_types.len() as u32).min(thresholds.richness_iframe_cap);
    if stats.js_code_line >= thresholds.richness_js_lines {
        score += 1;
    }
    if stats.css >= thresholds.richness_css_rules {
        score += 1;
    }

    Richness { score, max: MAX_RICHNESS }
}
