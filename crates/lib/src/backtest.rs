//! # Walk-Forward Backtest
//!
//! The published accuracy record of the live coffee model for Đắk Lắk. Each
//! year from 2018 to 2024 was predicted by a model trained only on the years
//! before it, then compared with the recorded harvest. The factor table lists
//! the weather drivers the model weighs most.
//!
//! The data ships with the crate so the results can be shown without the
//! prediction API.

use crate::types::Locale;
use serde::Serialize;

/// Years of weather history the model's features are built from.
pub const WEATHER_DATA_YEARS: u32 = 35;

/// How close a backtest prediction came to the recorded harvest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyGrade {
    /// Within 2% of the actual yield.
    Good,
    /// Within 10%.
    Medium,
    Poor,
}

impl AccuracyGrade {
    pub fn from_error_pct(error_pct: f64) -> Self {
        if error_pct < 2.0 {
            AccuracyGrade::Good
        } else if error_pct < 10.0 {
            AccuracyGrade::Medium
        } else {
            AccuracyGrade::Poor
        }
    }

    pub fn name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (AccuracyGrade::Good, Locale::Vi) => "Tốt",
            (AccuracyGrade::Good, Locale::En) => "Good",
            (AccuracyGrade::Medium, Locale::Vi) => "Trung bình",
            (AccuracyGrade::Medium, Locale::En) => "Medium",
            (AccuracyGrade::Poor, Locale::Vi) => "Kém",
            (AccuracyGrade::Poor, Locale::En) => "Poor",
        }
    }
}

/// One backtested year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BacktestYear {
    pub year: i32,
    /// Recorded yield, tons per hectare.
    pub actual: f64,
    pub predicted: f64,
    /// Absolute error as a percentage of `actual`, as published.
    pub error_pct: f64,
    /// How many earlier years the model was trained on.
    pub train_years: u32,
    pub explanation_vi: &'static str,
    pub explanation_en: &'static str,
}

impl BacktestYear {
    pub fn grade(&self) -> AccuracyGrade {
        AccuracyGrade::from_error_pct(self.error_pct)
    }

    pub fn explanation(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Vi => self.explanation_vi,
            Locale::En => self.explanation_en,
        }
    }
}

pub const BACKTEST: [BacktestYear; 7] = [
    BacktestYear {
        year: 2018,
        actual: 2.51,
        predicted: 2.21,
        error_pct: 12.07,
        train_years: 3,
        explanation_vi: "Năm đầu tiên mô hình dự báo, chỉ được học từ 3 năm trước đó (2015-2017) nên chưa đủ ví dụ về các kiểu thời tiết khác nhau.",
        explanation_en: "The model's first forecast year. It had learned from only three earlier years (2015-2017), too few to cover the range of weather patterns.",
    },
    BacktestYear {
        year: 2019,
        actual: 2.29,
        predicted: 2.27,
        error_pct: 0.76,
        train_years: 4,
        explanation_vi: "Dự báo rất chính xác. Thời tiết năm này tương tự các năm trước nên mô hình dễ nhận ra quy luật.",
        explanation_en: "A very accurate forecast. The weather resembled earlier years, so the model recognized the pattern easily.",
    },
    BacktestYear {
        year: 2020,
        actual: 2.43,
        predicted: 2.25,
        error_pct: 7.41,
        train_years: 5,
        explanation_vi: "Sai số trung bình. Năm 2020 có một số biến động thời tiết khác thường so với các năm trước.",
        explanation_en: "A moderate error. 2020 had some weather swings unlike the years before it.",
    },
    BacktestYear {
        year: 2021,
        actual: 2.47,
        predicted: 2.31,
        error_pct: 6.53,
        train_years: 6,
        explanation_vi: "Dự báo khá tốt. Với 6 năm dữ liệu huấn luyện, mô hình bắt đầu nhận ra nhiều quy luật hơn.",
        explanation_en: "A fairly good forecast. With six years of training data the model began to pick up more patterns.",
    },
    BacktestYear {
        year: 2022,
        actual: 2.62,
        predicted: 2.44,
        error_pct: 6.69,
        train_years: 7,
        explanation_vi: "Năng suất cao kỷ lục (2.62 tấn/ha). Mô hình dự báo thấp hơn thực tế vì chưa từng thấy năng suất cao như vậy.",
        explanation_en: "A record harvest (2.62 t/ha). The model predicted low because it had never seen a yield that high.",
    },
    BacktestYear {
        year: 2023,
        actual: 2.56,
        predicted: 2.40,
        error_pct: 6.43,
        train_years: 8,
        explanation_vi: "Sai số ổn định ở mức trung bình. Mô hình tiếp tục cải thiện khi có thêm dữ liệu.",
        explanation_en: "The error held steady at a moderate level while the model kept improving with more data.",
    },
    BacktestYear {
        year: 2024,
        actual: 2.52,
        predicted: 2.51,
        error_pct: 0.34,
        train_years: 9,
        explanation_vi: "Dự báo gần như hoàn hảo. Với 9 năm dữ liệu, mô hình đã học đủ mối quan hệ giữa thời tiết và năng suất.",
        explanation_en: "A near-perfect forecast. After nine years of data the model had learned how weather drives coffee yield.",
    },
];

/// A weather driver of the model, with its share of total importance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Factor {
    pub importance_pct: f64,
    pub name_vi: &'static str,
    pub name_en: &'static str,
    pub effect_vi: &'static str,
    pub effect_en: &'static str,
}

impl Factor {
    pub fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Vi => self.name_vi,
            Locale::En => self.name_en,
        }
    }

    pub fn effect(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Vi => self.effect_vi,
            Locale::En => self.effect_en,
        }
    }
}

/// Ordered by importance.
pub const FACTORS: [Factor; 6] = [
    Factor {
        importance_pct: 47.3,
        name_vi: "Bức xạ mặt trời (tháng 6-9)",
        name_en: "Solar radiation (Jun-Sep)",
        effect_vi: "Nhiều ánh sáng → quang hợp tốt → hạt nặng hơn → năng suất cao",
        effect_en: "More sunlight → better photosynthesis → heavier beans → higher yield",
    },
    Factor {
        importance_pct: 29.3,
        name_vi: "Bức xạ từ vệ tinh NASA",
        name_en: "NASA satellite radiation",
        effect_vi: "Xác nhận vai trò của ánh sáng trong giai đoạn tích lũy",
        effect_en: "Confirms the role of sunlight while the beans fill",
    },
    Factor {
        importance_pct: 11.6,
        name_vi: "Chỉ số El Niño / La Niña",
        name_en: "El Niño / La Niña index",
        effect_vi: "El Niño → hạn hán → năng suất giảm; La Niña → mưa nhiều → tăng nhẹ",
        effect_en: "El Niño → drought → lower yield; La Niña → more rain → slightly higher",
    },
    Factor {
        importance_pct: 3.0,
        name_vi: "Mưa đầu vụ (tháng 2-3)",
        name_en: "Early-season rain (Feb-Mar)",
        effect_vi: "Mưa vừa đủ → hoa nở đồng loạt → nhiều quả",
        effect_en: "Enough rain → even flowering → more cherries",
    },
    Factor {
        importance_pct: 2.5,
        name_vi: "Chỉ số hạn SPEI",
        name_en: "SPEI drought index",
        effect_vi: "Hạn nặng → thiếu nước → rụng quả non",
        effect_en: "Severe drought → water stress → young cherries drop",
    },
    Factor {
        importance_pct: 2.0,
        name_vi: "Số ngày nắng nóng >33°C",
        name_en: "Days above 33°C",
        effect_vi: "Nắng nóng kéo dài → cây bị stress → rụng hoa, rụng quả",
        effect_en: "Long heat waves → plant stress → flowers and cherries drop",
    },
];

// --- Localized report ---

#[derive(Clone, Debug, Serialize)]
pub struct BacktestEntry {
    pub year: i32,
    pub actual: f64,
    pub predicted: f64,
    pub error_pct: f64,
    pub train_years: u32,
    pub grade: AccuracyGrade,
    pub explanation: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct FactorEntry {
    pub name: &'static str,
    pub importance_pct: f64,
    pub effect: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BacktestSummary {
    pub mean_actual: f64,
    pub mean_error_pct: f64,
    /// The year with the smallest error.
    pub best_year: i32,
    pub worst_year: i32,
    pub total_years: usize,
    pub weather_data_years: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct BacktestReport {
    pub years: Vec<BacktestEntry>,
    pub factors: Vec<FactorEntry>,
    pub summary: BacktestSummary,
}

/// Aggregates over [`BACKTEST`].
pub fn summary() -> BacktestSummary {
    let count = BACKTEST.len() as f64;
    let by_error = |a: &&BacktestYear, b: &&BacktestYear| a.error_pct.total_cmp(&b.error_pct);
    let best = BACKTEST.iter().min_by(by_error);
    let worst = BACKTEST.iter().max_by(by_error);

    BacktestSummary {
        mean_actual: BACKTEST.iter().map(|y| y.actual).sum::<f64>() / count,
        mean_error_pct: BACKTEST.iter().map(|y| y.error_pct).sum::<f64>() / count,
        best_year: best.map_or(0, |y| y.year),
        worst_year: worst.map_or(0, |y| y.year),
        total_years: BACKTEST.len(),
        weather_data_years: WEATHER_DATA_YEARS,
    }
}

pub fn report(locale: Locale) -> BacktestReport {
    BacktestReport {
        years: BACKTEST
            .iter()
            .map(|y| BacktestEntry {
                year: y.year,
                actual: y.actual,
                predicted: y.predicted,
                error_pct: y.error_pct,
                train_years: y.train_years,
                grade: y.grade(),
                explanation: y.explanation(locale),
            })
            .collect(),
        factors: FACTORS
            .iter()
            .map(|f| FactorEntry {
                name: f.name(locale),
                importance_pct: f.importance_pct,
                effect: f.effect(locale),
            })
            .collect(),
        summary: summary(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_errors_match_values() {
        // Errors were computed before the yields were rounded to two decimals.
        for year in BACKTEST {
            let error = (year.actual - year.predicted).abs() / year.actual * 100.0;
            assert!(
                (error - year.error_pct).abs() < 0.25,
                "{}: {error:.2} vs {}",
                year.year,
                year.error_pct
            );
        }
    }

    #[test]
    fn test_grades() {
        let grades: Vec<AccuracyGrade> = BACKTEST.iter().map(|y| y.grade()).collect();
        assert_eq!(grades[0], AccuracyGrade::Poor);
        assert_eq!(grades[1], AccuracyGrade::Good);
        assert_eq!(grades[6], AccuracyGrade::Good);
        assert!(grades[2..6].iter().all(|g| *g == AccuracyGrade::Medium));
    }

    #[test]
    fn test_summary() {
        let summary = summary();
        assert_eq!(summary.best_year, 2024);
        assert_eq!(summary.worst_year, 2018);
        assert_eq!(summary.total_years, 7);
        assert_eq!(format!("{:.2}", summary.mean_error_pct), "5.75");
        assert_eq!(summary.weather_data_years, 35);
    }

    #[test]
    fn test_report_is_localized_and_ordered() {
        let report = report(Locale::En);
        assert_eq!(report.years.first().map(|y| y.year), Some(2018));
        assert!(report.years[4].explanation.contains("record harvest"));
        assert_eq!(report.factors[0].name, "Solar radiation (Jun-Sep)");
        assert!(report
            .factors
            .windows(2)
            .all(|w| w[0].importance_pct >= w[1].importance_pct));

        let vi = super::report(Locale::Vi);
        assert_eq!(vi.factors[2].name, "Chỉ số El Niño / La Niña");
    }
}
