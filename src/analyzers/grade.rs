use crate::analyzers::utility::parse_decimal;

/// One row of the grading scale: an integer percentage range, its letter
/// label and the grade-point it is worth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    pub low: f64,
    pub high: f64,
    pub label: &'static str,
    pub grade_point: f64,
}

impl GradeBand {
    const fn new(low: f64, high: f64, label: &'static str, grade_point: f64) -> Self {
        Self {
            low,
            high,
            label,
            grade_point,
        }
    }

    /// Both bounds are inclusive. Bounds are whole percentages, so a
    /// fractional score between two bands (88.5) belongs to neither.
    pub fn contains(&self, score: f64) -> bool {
        score >= self.low && score <= self.high
    }
}

/// The grading scale, checked in declaration order.
///
/// | Range  | Label | Grade-point |
/// |--------|-------|-------------|
/// | 97–100 | A+    | 4.5 |
/// | 93–96  | A     | 4.3 |
/// | 89–92  | A-    | 4.0 |
/// | 85–88  | B+    | 3.8 |
/// | 81–84  | B     | 3.4 |
/// | 77–80  | B-    | 3.0 |
/// | 73–76  | C+    | 2.6 |
/// | 69–72  | C     | 2.2 |
/// | 65–68  | C-    | 1.8 |
/// | 60–64  | D     | 1.2 |
/// | 40–59  | F     | 0.0 |
/// | 0–39   | F-    | 0.0 |
pub static GRADE_BANDS: [GradeBand; 12] = [
    GradeBand::new(97.0, 100.0, "A+", 4.5),
    GradeBand::new(93.0, 96.0, "A", 4.3),
    GradeBand::new(89.0, 92.0, "A-", 4.0),
    GradeBand::new(85.0, 88.0, "B+", 3.8),
    GradeBand::new(81.0, 84.0, "B", 3.4),
    GradeBand::new(77.0, 80.0, "B-", 3.0),
    GradeBand::new(73.0, 76.0, "C+", 2.6),
    GradeBand::new(69.0, 72.0, "C", 2.2),
    GradeBand::new(65.0, 68.0, "C-", 1.8),
    GradeBand::new(60.0, 64.0, "D", 1.2),
    GradeBand::new(40.0, 59.0, "F", 0.0),
    GradeBand::new(0.0, 39.0, "F-", 0.0),
];

/// Finds the band whose label is exactly `label`.
pub fn band_for_label(label: &str) -> Option<&'static GradeBand> {
    GRADE_BANDS.iter().find(|band| band.label == label)
}

/// Finds the band containing a percentage score. Scores outside [0, 100]
/// and fractional scores between two bands have no band.
pub fn band_for_score(score: f64) -> Option<&'static GradeBand> {
    GRADE_BANDS.iter().find(|band| band.contains(score))
}

/// Converts a course's letter grade or percentage score into a grade-point.
///
/// A non-empty `letter` that names a band wins over `score`. Anything that
/// resolves to no band (unparseable, negative, above 100, between two bands,
/// unknown letter with no usable score) is worth 0, the same as a failing
/// grade.
pub fn grade_point_for(score: &str, letter: &str) -> f64 {
    if !letter.is_empty() {
        if let Some(band) = band_for_label(letter) {
            return band.grade_point;
        }
    }

    parse_decimal(score)
        .and_then(band_for_score)
        .map_or(0.0, |band| band.grade_point)
}
