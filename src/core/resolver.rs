use crate::core::catalog::Catalog;
use crate::domain::model::{DevelopmentRecord, ResolvedWeekData};

/// Answers development data for any week against a catalog.
///
/// Catalogued weeks come back verbatim. Weeks between two catalogued weeks get
/// linearly interpolated length and weight, with every text field taken from the
/// lower neighbour. Weeks outside the catalog are clamped to the nearest end.
#[derive(Debug, Clone, Copy)]
pub struct WeekDataResolver<'a> {
    catalog: &'a Catalog,
}

impl WeekDataResolver<'static> {
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'a> WeekDataResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn get_exact_match(&self, week: i64) -> Option<&'a DevelopmentRecord> {
        self.catalog.get(week)
    }

    pub fn resolve(&self, week: f64) -> ResolvedWeekData {
        if week.fract() == 0.0 && week >= i64::MIN as f64 && week <= i64::MAX as f64 {
            if let Some(record) = self.get_exact_match(week as i64) {
                tracing::debug!(week = record.week, "exact catalog match");
                return ResolvedWeekData::from(record);
            }
        }

        let first = self.catalog.first();
        let last = self.catalog.last();

        // NaN 視為低於範圍
        if week.is_nan() || week <= f64::from(first.week) {
            tracing::debug!(week, clamped_to = first.week, "week below catalog range");
            return ResolvedWeekData::from(first);
        }
        if week >= f64::from(last.week) {
            tracing::debug!(week, clamped_to = last.week, "week above catalog range");
            return ResolvedWeekData::from(last);
        }

        let Some((lower, upper)) = self.catalog.bracket(week) else {
            // 排序過的目錄在範圍內一定找得到區間
            return ResolvedWeekData::from(first);
        };

        let ratio = (week - f64::from(lower.week)) / f64::from(upper.week - lower.week);
        let length_cm = interpolate(lower.length_cm, upper.length_cm, ratio);
        let weight_grams = interpolate(lower.weight_grams, upper.weight_grams, ratio);

        tracing::debug!(
            week,
            lower = lower.week,
            upper = upper.week,
            ratio,
            length_cm,
            weight_grams,
            "interpolated week data"
        );

        ResolvedWeekData {
            week,
            length_cm,
            weight_grams,
            size_label: label_or(length_cm, "cm", &lower.size_label),
            weight_label: label_or(weight_grams, "g", &lower.weight_label),
            comparison_object: lower.comparison_object.clone(),
            comparison_emoji: lower.comparison_emoji.clone(),
            description: lower.description.clone(),
            baby_milestones: lower.baby_milestones.clone(),
            mom_milestones: lower.mom_milestones.clone(),
            organs_developing: lower.organs_developing.clone(),
        }
    }

    /// Every integer week in `from..=to`.
    pub fn timeline(&self, from: u32, to: u32) -> Vec<ResolvedWeekData> {
        (from..=to).map(|week| self.resolve(f64::from(week))).collect()
    }
}

/// Zero means "not measured"; never interpolate through it.
fn interpolate(lower: f64, upper: f64, ratio: f64) -> f64 {
    match (lower != 0.0, upper != 0.0) {
        (true, true) => round_half_up(lower + (upper - lower) * ratio),
        (true, false) => lower,
        (false, true) => upper,
        (false, false) => 0.0,
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn label_or(value: f64, unit: &str, fallback: &str) -> String {
    if value != 0.0 {
        format!("{}{}", value, unit)
    } else {
        fallback.to_string()
    }
}
