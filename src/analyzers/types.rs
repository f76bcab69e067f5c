//! Data types used by the GPA pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analyzers::utility::is_yes;

/// A single transcript row, deserialized by the export's column names.
///
/// Cells are kept as raw text; the aggregator decides what parses.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "是否主修", default)]
    pub major: String,
    #[serde(rename = "考试类型", default)]
    pub exam_type: String,
    #[serde(rename = "重修重考", default)]
    pub retake_status: String,
    #[serde(rename = "是否有效", default)]
    pub valid: String,
    #[serde(rename = "是否及格", default)]
    pub passed: String,
    #[serde(rename = "学分", default)]
    pub credit: String,
    #[serde(rename = "是否学位课", default)]
    pub degree_course: String,
    #[serde(rename = "绩点", default)]
    pub grade_point: String,
    #[serde(rename = "百分制成绩", default)]
    pub percentage_score: String,
    #[serde(rename = "总成绩", default)]
    pub overall_grade: String,
}

impl CourseRecord {
    pub fn is_major(&self) -> bool {
        is_yes(&self.major)
    }

    pub fn is_valid(&self) -> bool {
        is_yes(&self.valid)
    }

    pub fn is_passed(&self) -> bool {
        is_yes(&self.passed)
    }

    pub fn is_degree_course(&self) -> bool {
        is_yes(&self.degree_course)
    }
}

/// Why a row was left out of the average. Variants are listed in the order
/// the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NotMajor,
    ExamType,
    NotRegularSitting,
    Invalid,
    NotPassed,
    BadCredit,
}

/// Final result of an aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum GpaOutcome {
    Gpa(f64),
    NoQualifyingCourses,
}

/// Outcome plus the bookkeeping gathered while walking the rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaReport {
    pub outcome: GpaOutcome,
    pub weighted_points: f64,
    pub weighted_credits: f64,
    pub rows_read: usize,
    pub rows_used: usize,
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl GpaReport {
    pub fn rows_skipped(&self) -> usize {
        self.skipped.values().sum()
    }
}
