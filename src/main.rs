//! blog-index - ordered, paginated listings for a markdown blog.

use anyhow::{Result, bail};
use blog_index::{
    build::build_listing,
    cli::{Cli, Commands},
    config::SiteConfig,
    init::new_site,
    list::list_page,
    log,
};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        log!("error"; "{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Init => new_site(&config),
        Commands::Build => build_listing(&config).map(|_| ()),
        Commands::List { page } => list_page(&config, *page),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.clone().unwrap_or_else(|| "./".into());
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    if cli.is_init() {
        return Ok(config);
    }

    if !config.config_path.exists() {
        bail!("Config file not found. Run `blog-index init` first.");
    }
    config.validate()?;
    config.validate_content_dir()?;

    Ok(config)
}
