use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;

use statuslens::catalog;
use statuslens::config::{default_settings_path, load_settings};
use statuslens::errors::{Result, StatusLensError};
use statuslens::host::HostServer;
use statuslens::logging::init_tracing;
use statuslens::plugin::{PluginContext, StatusPlugin};
use statuslens::resolver::{reference_url, resolve};
use statuslens::types::*;

/// Action keyword used when the CLI issues a scoped query.
const CLI_ACTION_KEYWORD: &str = "http";

/// HTTP status code lookup.
#[derive(Parser)]
#[command(name = "statuslens", version, about = "HTTP status code lookup")]
struct Cli {
    /// Settings file (default: platform config dir, or $STATUSLENS_SETTINGS)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a status code
    Lookup {
        /// Status code, e.g. 404
        code: String,
        /// Reference to link (default: from settings)
        #[arg(short, long, value_enum)]
        reference: Option<ReferenceArg>,
        /// Treat the lookup as an unscoped global query
        #[arg(long)]
        global: bool,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Open the reference page for a status code in a browser
    Open {
        /// Status code, e.g. 404
        code: String,
        /// Reference to open (default: from settings)
        #[arg(short, long, value_enum)]
        reference: Option<ReferenceArg>,
    },
    /// List known status codes
    List {
        /// Only codes of this class (1-5)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=5))]
        class: Option<u32>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Serve the launcher host protocol over stdio
    Serve,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the current settings
    Show,
    /// Set which documentation results link to
    SetReference {
        #[arg(value_enum)]
        reference: ReferenceArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReferenceArg {
    Rfc,
    Mdn,
}

impl From<ReferenceArg> for ReferenceType {
    fn from(arg: ReferenceArg) -> Self {
        match arg {
            ReferenceArg::Rfc => ReferenceType::Rfc,
            ReferenceArg::Mdn => ReferenceType::Mdn,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings_path = cli.settings.unwrap_or_else(default_settings_path);

    match cli.command {
        Commands::Lookup {
            code,
            reference,
            global,
            json,
        } => {
            let preference = match reference {
                Some(r) => r.into(),
                None => load_settings(&settings_path)?.reference_type,
            };
            let query = if global {
                Query::global(&code)
            } else {
                Query::scoped(CLI_ACTION_KEYWORD, &code)
            };
            let results = resolve(&query, preference, "");
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No status code matches '{}'", code);
            } else {
                for r in &results {
                    println!("{}", r.title);
                    println!("  {}", r.subtitle);
                    println!("  {}", r.target_url);
                }
            }
        }
        Commands::Open { code, reference } => {
            let mut plugin = StatusPlugin::load(settings_path)?;
            plugin.initialize(&PluginContext::default())?;
            let entry = catalog::lookup(&code).ok_or_else(|| StatusLensError::Catalog {
                message: "unknown status code".to_string(),
                code: code.clone(),
            })?;
            let preference = reference
                .map(ReferenceType::from)
                .unwrap_or(plugin.settings().reference_type);
            let url = reference_url(entry, preference);
            if !plugin.open_url(&url) {
                return Err(StatusLensError::Launch {
                    message: "no browser could open the page".to_string(),
                    url,
                });
            }
            println!("Opened {}", url);
        }
        Commands::List { class, json } => {
            let entries: Vec<&StatusEntry> = match class.and_then(StatusClass::from_digit) {
                Some(c) => catalog::entries_in_class(c).collect(),
                None => catalog::entries().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for e in &entries {
                    let class = e.class().map(|c| c.as_str()).unwrap_or("unknown");
                    println!("{}  {:<14} {}", e.code, class, e.reason_phrase);
                }
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let settings = load_settings(&settings_path)?;
                println!("Settings: {}", settings_path.display());
                println!("  Reference type: {}", settings.reference_type.label());
                println!(
                    "  Browser: {}",
                    settings.browser.as_deref().unwrap_or("(system default)")
                );
            }
            ConfigCommands::SetReference { reference } => {
                let mut plugin = StatusPlugin::load(settings_path.clone())?;
                let reference: ReferenceType = reference.into();
                plugin.set_reference_type(reference)?;
                println!(
                    "Reference type set to {} in {}",
                    reference.label(),
                    settings_path.display()
                );
            }
        },
        Commands::Serve => {
            let plugin = StatusPlugin::load(settings_path)?;
            let mut server = HostServer::new(plugin);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server.run())?;
        }
    }
    Ok(())
}
