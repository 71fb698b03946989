use crate::models::{EntryStore, HeatmapCell, StreaksResponse, WordEntry};
use chrono::{Duration, Local, NaiveDate};
use std::collections::HashMap;

const WINDOW_DAYS: i64 = 365;

pub fn build_streaks(store: &EntryStore) -> StreaksResponse {
    build_streaks_at(Local::now().date_naive(), &store.entries)
}

pub fn build_streaks_at(today: NaiveDate, entries: &[WordEntry]) -> StreaksResponse {
    let daily = daily_totals(entries);

    let start = today - Duration::days(WINDOW_DAYS);
    let mut heatmap = Vec::with_capacity(WINDOW_DAYS as usize + 1);
    let mut day = start;
    while day <= today {
        heatmap.push(HeatmapCell {
            date: day,
            count: daily.get(&day).copied().unwrap_or(0),
        });
        day += Duration::days(1);
    }

    let total_words = entries
        .iter()
        .fold(0u64, |sum, entry| sum.saturating_add(entry.word_count));

    StreaksResponse {
        current_streak: current_streak(today, &daily),
        longest_streak: longest_streak(&daily),
        total_words,
        writing_days: daily.len() as u32,
        heatmap,
    }
}

fn daily_totals(entries: &[WordEntry]) -> HashMap<NaiveDate, u64> {
    let mut totals = HashMap::new();
    for entry in entries {
        let day = totals.entry(entry.date).or_insert(0u64);
        *day = day.saturating_add(entry.word_count);
    }
    totals
}

fn current_streak(today: NaiveDate, daily: &HashMap<NaiveDate, u64>) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while daily.contains_key(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

// Runs over distinct days: multiple entries on one day neither extend nor
// break a run.
fn longest_streak(daily: &HashMap<NaiveDate, u64>) -> u32 {
    let mut days: Vec<NaiveDate> = daily.keys().copied().collect();
    days.sort_unstable();

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for day in days {
        run = match previous {
            Some(prev) if (day - prev).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }
    longest
}
