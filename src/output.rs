//! User-facing result lines and report logging.
//!
//! Every run ends with exactly one line on stdout built by one of these
//! functions.

use anyhow::Result;
use std::io::ErrorKind;
use tracing::debug;

use crate::analyzers::types::{GpaOutcome, GpaReport};
use crate::error::TranscriptError;

pub const NO_COURSES_MESSAGE: &str = "无有效课程，无法计算GPA";
pub const UNKNOWN_ENCODING_MESSAGE: &str = "无法识别文件编码，请确认文件为UTF-8或GBK编码";

/// Formats the outcome of a run, with the GPA to four decimal places.
pub fn format_outcome(outcome: &GpaOutcome) -> String {
    match outcome {
        GpaOutcome::Gpa(gpa) => format!("加权平均学分绩点（GPA）：{gpa:.4}"),
        GpaOutcome::NoQualifyingCourses => NO_COURSES_MESSAGE.to_string(),
    }
}

/// Formats a file-level failure for the user. The English `Display` text of
/// [`TranscriptError`] goes to the logs only.
pub fn format_error(error: &TranscriptError) -> String {
    match error {
        TranscriptError::Io { path, source } => {
            let reason = match source.kind() {
                ErrorKind::NotFound => "文件不存在",
                ErrorKind::PermissionDenied => "没有读取权限",
                ErrorKind::IsADirectory => "路径是目录",
                _ => "读取失败",
            };
            format!("无法读取成绩文件 {path}：{reason}")
        }
        TranscriptError::UnknownEncoding => UNKNOWN_ENCODING_MESSAGE.to_string(),
        TranscriptError::MissingColumn(column) => format!("成绩文件缺少必需列「{column}」"),
        TranscriptError::Csv(e) => match e.position() {
            Some(pos) => format!("成绩文件格式错误：第{}行无法解析", pos.line()),
            None => "成绩文件格式错误：无法解析".to_string(),
        },
    }
}

/// Logs the full report as JSON at debug level.
pub fn log_report_json(report: &GpaReport) -> Result<()> {
    debug!("{}", serde_json::to_string(report)?);
    Ok(())
}
