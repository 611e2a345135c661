//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// chronica static blog generator CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild the entire site: all pages and the link structure are regenerated
    Build {
        /// Synthesize default source and stylesheet files when required inputs are missing
        #[arg(long)]
        create_defaults: bool,
    },

    /// Regenerate only documents changed since the last run (not implemented yet)
    Update,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_build_with_create_defaults() {
        let cli = Cli::parse_from(["chronica", "build", "--create-defaults"]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(matches!(
            cli.command,
            Commands::Build {
                create_defaults: true
            }
        ));
    }

    #[test]
    fn test_root_flag() {
        let cli = Cli::parse_from(["chronica", "--root", "/srv/blog", "build"]);
        assert_eq!(cli.root, PathBuf::from("/srv/blog"));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["chronica"]).is_err());
    }
}
