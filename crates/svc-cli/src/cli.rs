//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use svc_manifest::RewriteContext;

/// Rewrite service application manifests for local debugging or deployment
#[derive(Parser, Debug)]
#[command(name = "svc-manifest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the nearest directory containing service.toml)
    #[arg(long, global = true, env = "SVC_MANIFEST_ROOT")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load a manifest from res/ and rewrite its URLs
    ///
    /// Examples:
    ///   svc-manifest manifest provider/app.json
    ///   svc-manifest manifest demo/app.json --provider-version local
    ///   svc-manifest manifest provider/app.json -c deploy --out dist/provider/app.json
    Manifest {
        /// Manifest path relative to res/
        config_path: String,

        /// Where URLs should point
        #[arg(short, long, value_enum, default_value_t = ContextArg::Debug)]
        context: ContextArg,

        /// Provider version, channel, URL or `local`; `default` keeps the declared URL
        #[arg(short, long, default_value = "default")]
        provider_version: String,

        /// Override the runtime version
        #[arg(short, long)]
        runtime_version: Option<String>,

        /// Write the rewritten manifest to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Resolve the provider manifest URL for a version or channel
    ProviderUrl {
        /// Version number, channel (stable, staging, testing), URL or `local`
        version: String,

        /// Currently declared manifest URL, whose query string is kept
        #[arg(short, long)]
        manifest_url: Option<String>,
    },

    /// Show the resolved project configuration
    Config,
}

/// Rewrite context as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextArg {
    Debug,
    Deploy,
}

impl From<ContextArg> for RewriteContext {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::Debug => RewriteContext::Debug,
            ContextArg::Deploy => RewriteContext::Deploy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_manifest_defaults() {
        let cli = Cli::try_parse_from(["svc-manifest", "manifest", "provider/app.json"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Manifest {
                config_path: "provider/app.json".into(),
                context: ContextArg::Debug,
                provider_version: "default".into(),
                runtime_version: None,
                out: None,
            }
        );
    }

    #[test]
    fn parse_manifest_deploy() {
        let cli = Cli::try_parse_from([
            "svc-manifest",
            "manifest",
            "provider/app.json",
            "--context",
            "deploy",
            "-p",
            "1.2.3",
            "-r",
            "9.9.9",
        ])
        .unwrap();
        match cli.command {
            Commands::Manifest {
                context,
                provider_version,
                runtime_version,
                ..
            } => {
                assert_eq!(RewriteContext::from(context), RewriteContext::Deploy);
                assert_eq!(provider_version, "1.2.3");
                assert_eq!(runtime_version.as_deref(), Some("9.9.9"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_unknown_context() {
        assert!(
            Cli::try_parse_from(["svc-manifest", "manifest", "a.json", "-c", "staging"]).is_err()
        );
    }
}
