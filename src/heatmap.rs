use crate::calendar::{build_month_blocks, MonthBlock};
use crate::models::ActivityRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// Visual intensity of a heatmap cell, ordered from empty to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum IntensityTier {
    Empty,
    Low,
    Medium,
    High,
    Max,
}

impl IntensityTier {
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Empty,
            1..=2 => Self::Low,
            3..=4 => Self::Medium,
            5..=7 => Self::High,
            _ => Self::Max,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }
}

/// Date to count mapping built from raw records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLookup {
    counts: HashMap<NaiveDate, u32>,
}

impl ActivityLookup {
    /// Records whose date is not `YYYY-MM-DD` are dropped. Later records win on duplicates.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ActivityRecord>,
    {
        let mut counts = HashMap::new();
        for record in records {
            match parse_iso_date(&record.date) {
                Some(date) => {
                    counts.insert(date, record.count);
                }
                None => debug!(date = %record.date, "skipping activity record with malformed date"),
            }
        }
        Self { counts }
    }

    pub fn count(&self, date: NaiveDate) -> u32 {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatCell {
    pub date: NaiveDate,
    pub count: u32,
    pub tier: IntensityTier,
}

impl HeatCell {
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    pub fn count_label(&self) -> String {
        format!("{} activities", self.count)
    }

    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.date_label(), self.count_label())
    }
}

/// Render-time sizing in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapLayout {
    pub cell_size: u32,
    pub gap: u32,
    pub month_gap: u32,
}

impl Default for HeatmapLayout {
    fn default() -> Self {
        Self {
            cell_size: 10,
            gap: 4,
            month_gap: 15,
        }
    }
}

/// Month blocks for a given day plus the counts to paint them with.
#[derive(Debug, Clone)]
pub struct Heatmap {
    pub today: NaiveDate,
    pub blocks: Vec<MonthBlock>,
    pub lookup: ActivityLookup,
}

impl Heatmap {
    pub fn build(today: NaiveDate, records: &[ActivityRecord]) -> Self {
        Self {
            today,
            blocks: build_month_blocks(today),
            lookup: ActivityLookup::from_records(records),
        }
    }

    pub fn cell(&self, date: NaiveDate) -> HeatCell {
        let count = self.lookup.count(date);
        HeatCell {
            date,
            count,
            tier: IntensityTier::from_count(count),
        }
    }

    /// Every populated cell across all months, oldest first.
    pub fn cells(&self) -> impl Iterator<Item = HeatCell> + '_ {
        self.blocks
            .iter()
            .flat_map(|block| {
                let mut days: Vec<_> = block.days().collect();
                days.sort();
                days
            })
            .map(|date| self.cell(date))
    }

    pub fn view(&self, layout: &HeatmapLayout) -> HeatmapView {
        let months = self
            .blocks
            .iter()
            .map(|block| MonthView {
                year: block.year,
                month: block.month,
                label: block.label,
                weeks: block.week_count(),
                width: block.header_width(layout.cell_size, layout.gap),
                columns: block
                    .weeks
                    .iter()
                    .map(|week| {
                        week.iter()
                            .map(|slot| slot.as_ref().map(|date| CellView::from(self.cell(*date))))
                            .collect()
                    })
                    .collect(),
            })
            .collect();

        HeatmapView {
            today: iso_date(self.today),
            cell_size: layout.cell_size,
            gap: layout.gap,
            month_gap: layout.month_gap,
            months,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HeatmapView {
    pub today: String,
    pub cell_size: u32,
    pub gap: u32,
    pub month_gap: u32,
    pub months: Vec<MonthView>,
}

#[derive(Debug, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub label: &'static str,
    pub weeks: usize,
    pub width: u32,
    pub columns: Vec<Vec<Option<CellView>>>,
}

#[derive(Debug, Serialize)]
pub struct CellView {
    pub date: String,
    pub count: u32,
    pub level: u8,
    pub tooltip: String,
}

impl From<HeatCell> for CellView {
    fn from(cell: HeatCell) -> Self {
        Self {
            date: iso_date(cell.date),
            count: cell.count,
            level: cell.tier.level(),
            tooltip: cell.tooltip(),
        }
    }
}

/// Keeps the latest heatmap and rebuilds only when today or the records change.
#[derive(Debug, Default)]
pub struct HeatmapCache {
    entry: Option<(u64, Arc<Heatmap>)>,
}

impl HeatmapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(&mut self, today: NaiveDate, records: &[ActivityRecord]) -> Arc<Heatmap> {
        let key = input_key(today, records);
        if let Some((cached_key, heatmap)) = &self.entry {
            if *cached_key == key {
                return Arc::clone(heatmap);
            }
        }

        debug!(%today, records = records.len(), "rebuilding heatmap");
        let heatmap = Arc::new(Heatmap::build(today, records));
        self.entry = Some((key, Arc::clone(&heatmap)));
        heatmap
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}

fn input_key(today: NaiveDate, records: &[ActivityRecord]) -> u64 {
    let mut hasher = DefaultHasher::new();
    today.hash(&mut hasher);
    records.hash(&mut hasher);
    hasher.finish()
}
