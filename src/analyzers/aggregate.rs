use crate::analyzers::grade::grade_point_for;
use crate::analyzers::types::{CourseRecord, GpaOutcome, GpaReport, SkipReason};
use crate::analyzers::utility::parse_decimal;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Exam types that count toward the average: unspecified, exam (考试) and
/// assessment (考查). Anything else is left out.
pub static ALLOWED_EXAM_TYPES: &[&str] = &["", "考试", "考查"];

/// Retake-status value for a first, regular sitting.
pub const REGULAR_SITTING: &str = "正考";

/// Credit and grade-point multiplier for degree-required courses.
pub const DEGREE_COURSE_WEIGHT: f64 = 1.2;

/// Running weighted sums for one aggregation run.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Accumulator {
    pub weighted_points: f64,
    pub weighted_credits: f64,
}

impl Accumulator {
    /// Adds one course's contribution.
    pub fn add(&mut self, grade_point: f64, credit: f64, degree_course: bool) {
        let weight = if degree_course {
            DEGREE_COURSE_WEIGHT
        } else {
            1.0
        };
        self.weighted_points += grade_point * credit * weight;
        self.weighted_credits += credit * weight;
    }

    pub fn finish(&self) -> GpaOutcome {
        if self.weighted_credits == 0.0 {
            GpaOutcome::NoQualifyingCourses
        } else {
            GpaOutcome::Gpa(self.weighted_points / self.weighted_credits)
        }
    }
}

/// Applies the inclusion policy to a row and returns its credit if it
/// qualifies.
pub fn qualifying_credit(record: &CourseRecord) -> Result<f64, SkipReason> {
    if !record.is_major() {
        return Err(SkipReason::NotMajor);
    }
    if !ALLOWED_EXAM_TYPES.contains(&record.exam_type.as_str()) {
        return Err(SkipReason::ExamType);
    }
    if record.retake_status != REGULAR_SITTING {
        return Err(SkipReason::NotRegularSitting);
    }
    if !record.is_valid() {
        return Err(SkipReason::Invalid);
    }
    if !record.is_passed() {
        return Err(SkipReason::NotPassed);
    }
    parse_decimal(&record.credit).ok_or(SkipReason::BadCredit)
}

/// Resolves a row's grade-point: the explicit grade-point column when it
/// holds a number, otherwise the letter grade or percentage score.
pub fn resolve_grade_point(record: &CourseRecord) -> f64 {
    parse_decimal(&record.grade_point)
        .unwrap_or_else(|| grade_point_for(&record.percentage_score, &record.overall_grade))
}

/// Aggregates transcript rows into a weighted GPA.
///
/// Rows that fail the policy checks are counted per [`SkipReason`] and
/// otherwise ignored.
pub fn aggregate_courses<I>(rows: I) -> GpaReport
where
    I: IntoIterator<Item = CourseRecord>,
{
    let mut acc = Accumulator::default();
    let mut skipped: BTreeMap<SkipReason, usize> = BTreeMap::new();
    let mut rows_read = 0;
    let mut rows_used = 0;

    for record in rows {
        rows_read += 1;

        let credit = match qualifying_credit(&record) {
            Ok(credit) => credit,
            Err(reason) => {
                trace!(row = rows_read, ?reason, "Row skipped");
                *skipped.entry(reason).or_default() += 1;
                continue;
            }
        };

        let grade_point = resolve_grade_point(&record);
        let degree_course = record.is_degree_course();
        acc.add(grade_point, credit, degree_course);
        rows_used += 1;

        trace!(
            row = rows_read,
            credit,
            grade_point,
            degree_course,
            "Row included"
        );
    }

    let outcome = acc.finish();
    debug!(
        rows_read,
        rows_used,
        weighted_points = acc.weighted_points,
        weighted_credits = acc.weighted_credits,
        "Aggregation finished"
    );

    GpaReport {
        outcome,
        weighted_points: acc.weighted_points,
        weighted_credits: acc.weighted_credits,
        rows_read,
        rows_used,
        skipped,
    }
}
