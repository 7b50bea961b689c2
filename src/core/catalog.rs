use crate::domain::model::DevelopmentRecord;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use std::sync::OnceLock;

/// Sorted, read-only set of development records keyed by week.
///
/// A `Catalog` can only be built through [`Catalog::new`], which enforces
/// ascending, duplicate-free weeks and non-negative measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<DevelopmentRecord>,
}

impl Catalog {
    pub fn new(records: Vec<DevelopmentRecord>) -> std::result::Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        for record in &records {
            check_measurement(record.week, "length_cm", record.length_cm)?;
            check_measurement(record.week, "weight_grams", record.weight_grams)?;
        }

        for pair in records.windows(2) {
            let (previous, current) = (pair[0].week, pair[1].week);
            if previous == current {
                return Err(CatalogError::DuplicateWeek { week: current });
            }
            if previous > current {
                return Err(CatalogError::Unsorted {
                    previous,
                    week: current,
                });
            }
        }

        Ok(Self { records })
    }

    /// 內建資料表，整個程序只初始化一次
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog {
            records: builtin_records(),
        })
    }

    pub fn records(&self) -> &[DevelopmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> &DevelopmentRecord {
        &self.records[0]
    }

    pub fn last(&self) -> &DevelopmentRecord {
        &self.records[self.records.len() - 1]
    }

    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.iter().map(|r| r.week)
    }

    /// Exact lookup; weeks outside `u32` are simply not found.
    pub fn get(&self, week: i64) -> Option<&DevelopmentRecord> {
        let week = u32::try_from(week).ok()?;
        self.records
            .binary_search_by_key(&week, |r| r.week)
            .ok()
            .map(|idx| &self.records[idx])
    }

    /// First adjacent pair with `lower.week <= week < upper.week`.
    pub fn bracket(&self, week: f64) -> Option<(&DevelopmentRecord, &DevelopmentRecord)> {
        self.records
            .windows(2)
            .find(|pair| f64::from(pair[0].week) <= week && week < f64::from(pair[1].week))
            .map(|pair| (&pair[0], &pair[1]))
    }
}

fn check_measurement(
    week: u32,
    field: &'static str,
    value: f64,
) -> std::result::Result<(), CatalogError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidMeasurement { week, field, value })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load_catalog(&self) -> Result<Catalog> {
        Ok(Catalog::builtin().clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    week: u32,
    length_cm: f64,
    weight_grams: f64,
    size_label: &str,
    weight_label: &str,
    comparison: (&str, &str),
    description: &str,
    baby_milestones: &str,
    mom_milestones: &str,
    organs: &[&str],
) -> DevelopmentRecord {
    DevelopmentRecord {
        week,
        length_cm,
        weight_grams,
        size_label: size_label.to_string(),
        weight_label: weight_label.to_string(),
        comparison_object: comparison.0.to_string(),
        comparison_emoji: comparison.1.to_string(),
        description: description.to_string(),
        baby_milestones: baby_milestones.to_string(),
        mom_milestones: mom_milestones.to_string(),
        organs_developing: organs.iter().map(|o| o.to_string()).collect(),
    }
}

fn builtin_records() -> Vec<DevelopmentRecord> {
    vec![
        record(
            1,
            0.0,
            0.0,
            "Not yet measurable",
            "Not yet measurable",
            ("Microscopic cell", "🔬"),
            "Your body is preparing for ovulation and conception.",
            "Fertilization has not happened yet.",
            "Your menstrual cycle marks the start of the pregnancy count.",
            &[],
        ),
        record(
            4,
            0.2,
            0.0,
            "0.2cm",
            "Less than 1g",
            ("Poppy seed", "🌱"),
            "The blastocyst implants in the uterine lining.",
            "The neural tube and placenta begin to form.",
            "You may notice a missed period and light spotting.",
            &["Neural tube", "Placenta"],
        ),
        record(
            8,
            1.6,
            1.0,
            "1.6cm",
            "1g",
            ("Raspberry", "🍇"),
            "Tiny fingers and toes are forming and the heart beats steadily.",
            "Arms and legs bud and the first movements begin.",
            "Morning sickness and fatigue are common.",
            &["Heart", "Brain", "Lungs", "Liver"],
        ),
        record(
            12,
            5.4,
            14.0,
            "5.4cm",
            "14g",
            ("Lime", "🍋"),
            "All major organs are in place and keep maturing.",
            "Reflexes develop and fingernails appear.",
            "Nausea often eases as the first trimester ends.",
            &["Kidneys", "Intestines", "Vocal cords"],
        ),
        record(
            16,
            11.6,
            100.0,
            "11.6cm",
            "100g",
            ("Avocado", "🥑"),
            "The skeleton hardens and facial muscles can make expressions.",
            "Eyes move slowly and the baby can hear muffled sounds.",
            "Energy usually returns and the bump starts to show.",
            &["Skeleton", "Ears", "Eyes"],
        ),
        record(
            20,
            25.6,
            300.0,
            "25cm",
            "300g",
            ("Banana", "🍌"),
            "Halfway there. Measurements switch from crown-rump to crown-heel.",
            "Vernix coats the skin and swallowing is practised.",
            "You may feel the first clear kicks.",
            &["Skin", "Digestive system"],
        ),
        record(
            24,
            30.0,
            600.0,
            "30cm",
            "600g",
            ("Ear of corn", "🌽"),
            "The lungs develop branches and surfactant production starts.",
            "Sleep and wake cycles become regular.",
            "Glucose screening usually happens around now.",
            &["Lungs", "Inner ear"],
        ),
        record(
            28,
            37.6,
            1000.0,
            "37.6cm",
            "1kg",
            ("Eggplant", "🍆"),
            "Eyes open and close and the brain grows quickly.",
            "The baby responds to light and sound.",
            "The third trimester begins; backaches are common.",
            &["Brain", "Eyes"],
        ),
        record(
            32,
            42.4,
            1700.0,
            "42.4cm",
            "1.7kg",
            ("Coconut", "🥥"),
            "Fat builds up under the skin and bones are fully formed.",
            "Toenails and fingernails are complete.",
            "Braxton Hicks contractions may appear.",
            &["Bones", "Immune system"],
        ),
        record(
            36,
            47.4,
            2600.0,
            "47.4cm",
            "2.6kg",
            ("Honeydew melon", "🍈"),
            "The baby is gaining weight quickly and moving into birth position.",
            "Lungs are nearly mature.",
            "Breathing gets easier as the baby drops.",
            &["Lungs", "Digestive system"],
        ),
        record(
            40,
            51.2,
            3400.0,
            "51cm",
            "3.4kg",
            ("Watermelon", "🍉"),
            "Full term. The baby is ready to meet you.",
            "All systems are ready for life outside the womb.",
            "Watch for signs of labour and keep your hospital bag ready.",
            &[],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(week: u32, length_cm: f64, weight_grams: f64) -> DevelopmentRecord {
        DevelopmentRecord {
            week,
            length_cm,
            weight_grams,
            size_label: format!("{}cm", length_cm),
            weight_label: format!("{}g", weight_grams),
            comparison_object: "Test".to_string(),
            comparison_emoji: String::new(),
            description: String::new(),
            baby_milestones: String::new(),
            mom_milestones: String::new(),
            organs_developing: vec![],
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.records().to_vec()).unwrap();
        assert_eq!(&rebuilt, builtin);
        assert_eq!(
            builtin.weeks().collect::<Vec<_>>(),
            vec![1, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40]
        );
    }

    #[test]
    fn test_builtin_source_loads_builtin_catalog() {
        let loaded = BuiltinCatalog.load_catalog().unwrap();
        assert_eq!(&loaded, Catalog::builtin());
        assert_eq!(loaded.len(), 11);
        assert_eq!(loaded.first().week, 1);
        assert_eq!(loaded.last().week, 40);
    }

    #[test]
    fn test_builtin_is_initialised_once() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert_eq!(Catalog::new(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn test_rejects_duplicates_and_unsorted() {
        let duplicate = vec![sample(4, 1.0, 1.0), sample(4, 2.0, 2.0)];
        assert_eq!(
            Catalog::new(duplicate),
            Err(CatalogError::DuplicateWeek { week: 4 })
        );

        let unsorted = vec![sample(8, 1.0, 1.0), sample(4, 2.0, 2.0)];
        assert_eq!(
            Catalog::new(unsorted),
            Err(CatalogError::Unsorted {
                previous: 8,
                week: 4
            })
        );
    }

    #[test]
    fn test_rejects_negative_or_nan_measurements() {
        assert!(matches!(
            Catalog::new(vec![sample(4, -1.0, 1.0)]),
            Err(CatalogError::InvalidMeasurement {
                field: "length_cm",
                ..
            })
        ));
        assert!(matches!(
            Catalog::new(vec![sample(4, 1.0, f64::NAN)]),
            Err(CatalogError::InvalidMeasurement {
                field: "weight_grams",
                ..
            })
        ));
    }

    #[test]
    fn test_exact_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(12).map(|r| r.week), Some(12));
        assert!(catalog.get(13).is_none());
        assert!(catalog.get(-4).is_none());
        assert!(catalog.get(i64::MAX).is_none());
    }

    #[test]
    fn test_bracket_selects_first_matching_pair() {
        let catalog = Catalog::builtin();
        let (lower, upper) = catalog.bracket(10.0).unwrap();
        assert_eq!((lower.week, upper.week), (8, 12));

        let (lower, upper) = catalog.bracket(12.0).unwrap();
        assert_eq!((lower.week, upper.week), (12, 16));

        assert!(catalog.bracket(40.0).is_none());
        assert!(catalog.bracket(0.5).is_none());
    }
}
