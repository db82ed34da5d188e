use clap::Parser;
use namedropper::application::{describe_scheme, ConfigService, MakeTagService, TagRequest};
use namedropper::cli::{format_config_list, format_scheme_rows, Cli, Commands};
use namedropper::domain::{AuthorityResource, DocumentFormat};
use namedropper::error::NameDropperError;
use namedropper::infrastructure::{load_resource, Config};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "namedropper=debug"
    } else {
        "namedropper=warn"
    };

    // Logs go to stderr; stdout carries only markup
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), NameDropperError> {
    match cli.command {
        Commands::Tag {
            text,
            format,
            kind,
            uri,
            authority_id,
            resource,
        } => {
            let resource = match (resource, kind) {
                (Some(path), _) => load_resource(&path)?,
                (None, Some(kind)) => AuthorityResource::new(
                    kind,
                    uri.unwrap_or_default(),
                    authority_id.unwrap_or_default(),
                ),
                (None, None) => {
                    return Err(NameDropperError::InvalidInput(
                        "No authority resource given: pass --kind or --resource".to_string(),
                    ))
                }
            };

            let service = MakeTagService::new(Config::discover()?);
            let markup = service.execute(&TagRequest {
                format,
                display_text: Some(text),
                resource: Some(resource),
            })?;
            println!("{}", markup);
            Ok(())
        }
        Commands::Scheme { format } => {
            let format = format
                .as_deref()
                .map(|s| DocumentFormat::from_str(s).map_err(NameDropperError::InvalidInput))
                .transpose()?;
            print!("{}", format_scheme_rows(&describe_scheme(format)));
            Ok(())
        }
        Commands::Config { key, list } => {
            let service = ConfigService::new(Config::discover()?);

            if list {
                print!("{}", format_config_list(&service.list()?));
            } else if let Some(k) = key {
                println!("{}", service.get(&k)?);
            } else {
                println!("Usage: namedropper config [--list | <key>]");
                println!("Valid keys: format");
            }
            Ok(())
        }
    }
}
