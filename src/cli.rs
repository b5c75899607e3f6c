use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::DEFAULT_CONFIG_FILENAME;

/// Command-line arguments for the report uploader.
///
/// The three run values (bucket, reports directory, archive path) default
/// to the configuration file and can be overridden individually here.
#[derive(Parser, Debug)]
#[clap(name = "report-uploader", about = "Archives a folder of daily reports and uploads the archive to S3")]
pub struct Args {
    /// Path to a YAML run configuration file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// S3 bucket that receives the archive
    #[clap(short, long)]
    pub bucket: Option<String>,

    /// Local directory holding the report files
    #[clap(long)]
    pub reports_dir: Option<PathBuf>,

    /// Destination path for the ZIP archive
    #[clap(long)]
    pub archive: Option<PathBuf>,

    /// AWS region for S3 calls
    #[clap(long)]
    pub region: Option<String>,

    /// AWS profile to use for S3 credentials
    #[clap(long)]
    pub profile: Option<String>,

    /// Stop after the archive is written, without uploading
    #[clap(long)]
    pub skip_upload: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default configuration file
    InitConfig {
        /// Path to output configuration file
        #[clap(default_value = DEFAULT_CONFIG_FILENAME)]
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_args_parsing() {
        let args = Args::parse_from(&[
            "report-uploader",
            "--bucket", "test-bucket",
            "--reports-dir", "/tmp/reports",
            "--verbose",
        ]);

        assert_eq!(args.bucket, Some("test-bucket".to_string()));
        assert_eq!(args.reports_dir, Some(PathBuf::from("/tmp/reports")));
        assert!(args.verbose);
        assert!(!args.skip_upload);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_aws_args() {
        let args = Args::parse_from(&[
            "report-uploader",
            "--bucket", "my-bucket",
            "--region", "us-west-2",
            "--profile", "dev",
        ]);

        assert_eq!(args.bucket, Some("my-bucket".to_string()));
        assert_eq!(args.region, Some("us-west-2".to_string()));
        assert_eq!(args.profile, Some("dev".to_string()));
    }

    #[test]
    fn test_default_values() {
        let args = Args::parse_from(&["report-uploader"]);

        assert!(args.config.is_none());
        assert!(args.bucket.is_none());
        assert!(args.reports_dir.is_none());
        assert!(args.archive.is_none());
        assert!(!args.verbose);
        assert!(!args.skip_upload);
    }

    #[test]
    fn test_skip_upload_with_archive_override() {
        let args = Args::parse_from(&[
            "report-uploader",
            "--archive", "/tmp/out/reports.zip",
            "--skip-upload",
        ]);

        assert_eq!(args.archive, Some(PathBuf::from("/tmp/out/reports.zip")));
        assert!(args.skip_upload);
    }

    #[test]
    fn test_init_config_subcommand() {
        let args = Args::parse_from(&[
            "report-uploader",
            "init-config",
            "custom-config.yaml",
        ]);

        match args.command {
            Some(Commands::InitConfig { path }) => {
                assert_eq!(path, PathBuf::from("custom-config.yaml"));
            }
            _ => panic!("Expected InitConfig command"),
        }
    }

    #[test]
    fn test_init_config_default_path() {
        let args = Args::parse_from(&["report-uploader", "init-config"]);

        match args.command {
            Some(Commands::InitConfig { path }) => {
                assert_eq!(path, PathBuf::from("report-uploader.yaml"));
            }
            _ => panic!("Expected InitConfig command"),
        }
    }

    #[test]
    fn test_config_file_arg() {
        let args = Args::parse_from(&[
            "report-uploader",
            "-c", "/etc/report-uploader.yaml",
        ]);

        assert_eq!(args.config, Some(PathBuf::from("/etc/report-uploader.yaml")));
    }
}
