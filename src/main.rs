use clap::{Parser, Subcommand};
use studio_site::contact::{ContactForm, ContactValues, Field, SubmitGateway, SubmitOutcome};
use studio_site::{config, output, query, render, store};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "studio-site")]
#[command(about = "Content, contact form and landing page for a software studio")]
#[command(long_about = "\
Content, contact form and landing page for a software studio

The site's copy ships inside the binary. A content directory can override
any part of it and tune how the site is built:

  content/
  ├── portfolio.toml    # Content overrides (tables merge, arrays replace)
  └── site.toml         # Site settings: variant, form timing, output

Both files are optional. Run 'studio-site gen-config' for a documented
site.toml and 'studio-site export' to see the resolved content.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    content: PathBuf,

    /// Log debug detail (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct SubmitArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    subject: String,
    #[arg(long, default_value = "")]
    message: String,
}

#[derive(Subcommand)]
enum Command {
    /// Render index.html from the resolved content
    Render {
        /// Output directory (defaults to render.output_dir from site.toml)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a content inventory and content warnings
    Check,
    /// Print the resolved content as JSON, in display order
    Export,
    /// Validate and deliver a contact message through the configured gateway
    Submit(SubmitArgs),
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Render { out } => {
            let site = config::load_config(&cli.content)?;
            let portfolio = store::load_portfolio(&cli.content)?;
            let form = ContactForm::from_config(&site.form);
            let out = out.unwrap_or_else(|| PathBuf::from(&site.render.output_dir));
            let ctx = render::PageContext {
                portfolio: &portfolio,
                config: &site,
                form: &form,
                today: chrono::Local::now().date_naive(),
            };
            let path = render::write_page(&ctx, &out)?;
            output::print_render_output(&portfolio, &site, &path);
        }
        Command::Check => {
            tracing::info!(dir = %cli.content.display(), "checking content");
            let site = config::load_config(&cli.content)?;
            let portfolio = store::load_portfolio(&cli.content)?;
            let warnings = store::lint(&portfolio);
            output::print_check_output(
                &portfolio,
                &site,
                &warnings,
                chrono::Local::now().date_naive(),
            );
        }
        Command::Export => {
            let portfolio = store::load_portfolio(&cli.content)?;
            let json = serde_json::to_string_pretty(&query::display_ordered(&portfolio))?;
            println!("{json}");
        }
        Command::Submit(args) => {
            let site = config::load_config(&cli.content)?;
            let values = ContactValues {
                name: args.name,
                email: args.email,
                subject: args.subject,
                message: args.message,
            };
            let mut form = ContactForm::from_config(&site.form);
            for field in Field::ALL {
                form.change(field, values.get(field));
            }
            if form.submit(Instant::now()) != SubmitOutcome::Accepted {
                output::print_submit_errors(&form);
                return Err("contact message was not sent".into());
            }
            let mut gateway = gateway(&site.form)?;
            if let Some(deadline) = form.next_deadline() {
                std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
                let events = form.advance(deadline, gateway.as_mut());
                output::print_submit_events(&events);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "http")]
const GATEWAY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// HTTP delivery when an endpoint is configured, otherwise log only.
#[cfg(feature = "http")]
fn gateway(
    form: &config::FormConfig,
) -> Result<Box<dyn SubmitGateway>, studio_site::contact::GatewayError> {
    match &form.endpoint {
        Some(endpoint) => Ok(Box::new(studio_site::contact::HttpGateway::new(
            endpoint.clone(),
            GATEWAY_TIMEOUT,
        )?)),
        None => Ok(Box::new(studio_site::contact::LogGateway)),
    }
}

#[cfg(not(feature = "http"))]
fn gateway(
    form: &config::FormConfig,
) -> Result<Box<dyn SubmitGateway>, studio_site::contact::GatewayError> {
    if form.endpoint.is_some() {
        tracing::warn!("form.endpoint is set but this build has no `http` feature; logging only");
    }
    Ok(Box::new(studio_site::contact::LogGateway))
}
