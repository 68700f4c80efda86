//! Seasonality engine.
//!
//! Works out, for a produce item viewed through a market's region and a
//! reference "today" month, whether the item is in season, how fresh it ranks,
//! and how its peak window maps onto a Jan..Dec band chart.
//!
//! Everything here is total: months are always normalized, unknown regions
//! shift by zero, and no function can fail.

use crate::model::{BasketPersona, Month, PeakWindow, ProduceItem, ProduceSort};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Tuning constants for [`SeasonEngine::freshness_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessWeights {
    /// Score of an item that is in season right now
    #[serde(default = "default_in_season")]
    pub in_season: u32,

    /// Score of an out-of-season item whose window starts this month
    #[serde(default = "default_base")]
    pub base: u32,

    /// Points lost per month of distance to the window start
    #[serde(default = "default_decay")]
    pub decay: u32,
}

fn default_in_season() -> u32 {
    100
}

fn default_base() -> u32 {
    60
}

fn default_decay() -> u32 {
    6
}

impl Default for FreshnessWeights {
    fn default() -> Self {
        Self {
            in_season: default_in_season(),
            base: default_base(),
            decay: default_decay(),
        }
    }
}

impl FreshnessWeights {
    /// Out-of-season score, floored at zero.
    pub fn score_for_distance(&self, distance: u8) -> u32 {
        self.base
            .saturating_sub(self.decay.saturating_mul(distance as u32))
    }
}

/// Region tag to month shift. Unknown tags shift by zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionOffsets {
    shifts: HashMap<String, i32>,
}

impl RegionOffsets {
    pub fn new(shifts: HashMap<String, i32>) -> Self {
        Self { shifts }
    }

    /// Built-in table with `overrides` applied on top.
    pub fn with_overrides(mut self, overrides: &HashMap<String, i32>) -> Self {
        for (region, shift) in overrides {
            self.shifts.insert(region.clone(), *shift);
        }
        self
    }

    pub fn offset_for(&self, region: &str) -> i32 {
        self.shifts.get(region).copied().unwrap_or(0)
    }
}

/// Applies a month shift to both bounds of a window, normalizing into `0..=11`.
pub fn shift_peak(peak: PeakWindow, offset: i32) -> PeakWindow {
    PeakWindow {
        start: peak.start.shifted(offset),
        end: peak.end.shifted(offset),
    }
}

/// Inclusive membership test that treats `start > end` as wrapping year-end.
pub fn is_in_season(month: Month, peak: PeakWindow) -> bool {
    if peak.start <= peak.end {
        peak.start <= month && month <= peak.end
    } else {
        month >= peak.start || month <= peak.end
    }
}

/// "Nov – Mar" style label.
pub fn month_range_label(peak: PeakWindow) -> String {
    format!("{} – {}", peak.start.short_name(), peak.end.short_name())
}

/// A contiguous run of the band chart, in percent of the year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandSegment {
    pub left: f64,
    pub right: f64,
}

impl BandSegment {
    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }
}

/// Peak window laid out on a Jan (0%) .. Dec (100%) axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandChart {
    pub segments: Vec<BandSegment>,
    /// Position of the reference month
    pub today: f64,
}

impl BandChart {
    pub fn total_width(&self) -> f64 {
        self.segments.iter().map(BandSegment::width).sum()
    }

    /// Whether a month's cell overlaps any segment.
    pub fn covers(&self, month: Month) -> bool {
        let left = percent_of_year(month.index() as u32);
        let right = percent_of_year(month.index() as u32 + 1);
        self.segments
            .iter()
            .any(|s| s.left < right && left < s.right)
    }
}

fn percent_of_year(months: u32) -> f64 {
    months as f64 / Month::COUNT as f64 * 100.0
}

/// Splits a wrapping window into a tail (`start`..100%) and a head (0%..`end`+1).
pub fn renderable_band(peak: PeakWindow, today: Month) -> BandChart {
    let start = peak.start.index() as u32;
    let end_exclusive = peak.end.index() as u32 + 1;

    let segments = if peak.start <= peak.end {
        vec![BandSegment {
            left: percent_of_year(start),
            right: percent_of_year(end_exclusive),
        }]
    } else {
        vec![
            BandSegment {
                left: percent_of_year(start),
                right: 100.0,
            },
            BandSegment {
                left: 0.0,
                right: percent_of_year(end_exclusive),
            },
        ]
    };

    BandChart {
        segments,
        today: percent_of_year(today.index() as u32),
    }
}

/// Everything the presentation layer needs about one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalView {
    pub in_season: bool,
    pub score: u32,
    pub shifted_peak: PeakWindow,
    pub label: String,
    pub band: BandChart,
}

/// Region offsets plus freshness tuning, shared by every evaluation.
#[derive(Debug, Clone, Default)]
pub struct SeasonEngine {
    offsets: RegionOffsets,
    weights: FreshnessWeights,
}

impl SeasonEngine {
    pub fn new(offsets: RegionOffsets, weights: FreshnessWeights) -> Self {
        Self { offsets, weights }
    }

    pub fn region_offset(&self, region: &str) -> i32 {
        self.offsets.offset_for(region)
    }

    pub fn shifted_peak(&self, item: &ProduceItem, region: &str) -> PeakWindow {
        shift_peak(item.peak, self.region_offset(region))
    }

    pub fn is_in_season(&self, item: &ProduceItem, today: Month, region: &str) -> bool {
        is_in_season(today, self.shifted_peak(item, region))
    }

    /// Full marks in season, otherwise decays with the months left until the window opens.
    pub fn freshness_score(&self, item: &ProduceItem, today: Month, region: &str) -> u32 {
        let peak = self.shifted_peak(item, region);
        if is_in_season(today, peak) {
            return self.weights.in_season;
        }
        self.weights
            .score_for_distance(today.distance_to(peak.start))
    }

    pub fn evaluate(&self, item: &ProduceItem, today: Month, region: &str) -> SeasonalView {
        let peak = self.shifted_peak(item, region);
        SeasonalView {
            in_season: is_in_season(today, peak),
            score: self.freshness_score(item, today, region),
            shifted_peak: peak,
            label: month_range_label(peak),
            band: renderable_band(peak, today),
        }
    }

    /// Stable ordering: `Fresh` is score descending then name, `Az` is name only.
    pub fn sort(&self, items: &mut [ProduceItem], mode: ProduceSort, today: Month, region: &str) {
        match mode {
            ProduceSort::Az => items.sort_by(|a, b| compare_names(&a.name, &b.name)),
            ProduceSort::Fresh => items.sort_by(|a, b| {
                let sa = self.freshness_score(a, today, region);
                let sb = self.freshness_score(b, today, region);
                sb.cmp(&sa).then_with(|| compare_names(&a.name, &b.name))
            }),
        }
    }

    /// `Focus` keeps only what is in season; other personas show everything.
    pub fn apply_persona(
        &self,
        items: &mut Vec<ProduceItem>,
        persona: BasketPersona,
        today: Month,
        region: &str,
    ) {
        if persona == BasketPersona::Focus {
            items.retain(|item| self.is_in_season(item, today, region));
        }
    }
}

/// Case-insensitive name order with a case-sensitive tiebreak, so it stays total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
