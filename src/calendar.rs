use chrono::{Datelike, Duration, NaiveDate};

pub const MONTH_COUNT: usize = 12;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One cell of a week column. `None` renders as a blank, non-interactive cell.
pub type DaySlot = Option<NaiveDate>;

/// Seven slots, Sunday first.
pub type WeekColumn = [DaySlot; 7];

/// One calendar month laid out as its own week-aligned grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBlock {
    pub year: i32,
    /// Zero-based month index (0 = January).
    pub month: u32,
    pub label: &'static str,
    pub weeks: Vec<WeekColumn>,
}

impl MonthBlock {
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn month_start(&self) -> NaiveDate {
        // Blocks are only constructed from valid (year, month) pairs.
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or_default()
    }

    pub fn month_end(&self) -> NaiveDate {
        month_end(self.month_start()).unwrap_or_default()
    }

    pub fn grid_start(&self) -> NaiveDate {
        align_to_sunday(self.month_start())
    }

    /// Populated slots in column-major order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flat_map(|week| week.iter().flatten().copied())
    }

    /// Header width in pixels for a month label sized to this block.
    pub fn header_width(&self, cell_size: u32, gap: u32) -> u32 {
        let weeks = self.week_count() as u32;
        (weeks * (cell_size + gap)).saturating_sub(gap)
    }
}

/// Builds the trailing twelve months ending with the month containing `today`,
/// oldest first. Days outside their month or after `today` are left empty.
pub fn build_month_blocks(today: NaiveDate) -> Vec<MonthBlock> {
    trailing_months(today)
        .into_iter()
        .filter_map(|(year, month)| build_month_block(year, month, today))
        .collect()
}

/// The twelve (year, zero-based month) pairs ending with `today`'s month.
pub fn trailing_months(today: NaiveDate) -> Vec<(i32, u32)> {
    let current = today.year() * 12 + today.month0() as i32;
    (0..MONTH_COUNT as i32)
        .rev()
        .map(|offset| {
            let index = current - offset;
            (index.div_euclid(12), index.rem_euclid(12) as u32)
        })
        .collect()
}

fn build_month_block(year: i32, month: u32, today: NaiveDate) -> Option<MonthBlock> {
    let month_start = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    let month_end = month_end(month_start)?;

    let grid_start = align_to_sunday(month_start);
    let grid_end = align_to_saturday(month_end);

    let total_days = (grid_end - grid_start).num_days() + 1;
    let week_count = (total_days + 6) / 7;

    let weeks = (0..week_count)
        .map(|col| {
            let mut week: WeekColumn = [None; 7];
            for (row, slot) in week.iter_mut().enumerate() {
                let date = grid_start + Duration::days(col * 7 + row as i64);
                let in_month = date >= month_start && date <= month_end;
                if in_month && date <= today {
                    *slot = Some(date);
                }
            }
            week
        })
        .collect();

    Some(MonthBlock {
        year,
        month,
        label: MONTH_LABELS[month as usize],
        weeks,
    })
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// The Sunday on or before `date`.
pub fn align_to_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// The Saturday on or after `date`.
pub fn align_to_saturday(date: NaiveDate) -> NaiveDate {
    date + Duration::days(6 - date.weekday().num_days_from_sunday() as i64)
}
