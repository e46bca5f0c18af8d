//! Folio CLI
//!
//! Single binary that builds, checks, and previews the essay site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use folio::cmd::show::Format;

/// Command-line interface for folio.
#[derive(Parser)]
#[command(name = "folio", version, about = "Static essay site generator")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the static site
    Build {
        /// Output directory (overrides build.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override site base URL (e.g., https://example.com)
        #[arg(long)]
        base_url: Option<String>,
        /// Emit plain code blocks without syntax highlighting
        #[arg(long)]
        no_highlight: bool,
    },
    /// Validate configuration and articles
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// List published articles
    List,
    /// Render one article body to stdout
    Show {
        /// Article slug
        slug: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Build the site and serve it locally
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Output directory (overrides build.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            output,
            base_url,
            no_highlight,
        } => {
            folio::cmd::build::run(
                &cli.config,
                output.as_deref(),
                base_url.as_deref(),
                no_highlight,
            )?;
        }
        Commands::Check { strict } => {
            folio::cmd::check::run(&cli.config, strict)?;
        }
        Commands::List => {
            folio::cmd::list::run()?;
        }
        Commands::Show { slug, format } => {
            folio::cmd::show::run(&cli.config, &slug, format)?;
        }
        Commands::Serve { port, output } => {
            folio::cmd::serve::run(&cli.config, port, output.as_deref()).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_build_command_parsing() {
        let args = ["folio", "build", "--output", "dist"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, PathBuf::from("folio.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Build {
                output,
                base_url,
                no_highlight,
            } => {
                assert_eq!(output, Some(PathBuf::from("dist")));
                assert!(base_url.is_none());
                assert!(!no_highlight);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_overrides() {
        let args = [
            "folio",
            "build",
            "--base-url",
            "https://example.com",
            "--no-highlight",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Build {
                output,
                base_url,
                no_highlight,
            } => {
                assert!(output.is_none());
                assert_eq!(base_url.as_deref(), Some("https://example.com"));
                assert!(no_highlight);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["folio", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_list_command_parsing() {
        let cli = Cli::parse_from(["folio", "list"]);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_cli_show_command_parsing() {
        let cli = Cli::parse_from(["folio", "show", "conceptual-engineering"]);
        match cli.command {
            Commands::Show { slug, format } => {
                assert_eq!(slug, "conceptual-engineering");
                assert_eq!(format, Format::Html);
            }
            _ => panic!("Expected Show command"),
        }

        let cli = Cli::parse_from(["folio", "show", "x", "--format", "json"]);
        match cli.command {
            Commands::Show { format, .. } => assert_eq!(format, Format::Json),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_show_rejects_unknown_format() {
        let result = Cli::try_parse_from(["folio", "show", "x", "--format", "pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_serve_command_parsing() {
        let cli = Cli::parse_from(["folio", "serve", "--port", "8080"]);

        match cli.command {
            Commands::Serve { port, output } => {
                assert_eq!(port, 8080);
                assert!(output.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["folio", "-vvv", "list"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["folio", "--config", "site.toml", "build"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }
}
