//! Global constants for the report uploader.
//!
//! This module centralizes all hardcoded values so deployment-specific
//! naming lives in one place. Every value here can be overridden through
//! the YAML configuration file or the command line.

/// Default S3 bucket that receives the report archive
pub const DEFAULT_BUCKET: &str = "company-daily-reports-automation";

/// Default local directory holding the report files
pub const DEFAULT_REPORTS_DIR: &str = "daily_reports";

/// Default path of the ZIP archive; its filename doubles as the object key
pub const DEFAULT_ARCHIVE_PATH: &str = "daily_reports.zip";

/// Number of placeholder reports written into an empty report directory
pub const PLACEHOLDER_REPORT_COUNT: usize = 3;

/// Deflate level used for archive entries
pub const ARCHIVE_COMPRESSION_LEVEL: i32 = 6;

/// Default filename for `init-config` output
pub const DEFAULT_CONFIG_FILENAME: &str = "report-uploader.yaml";
