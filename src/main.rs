use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use gomii_deploy::core::config::{Config, DEFAULT_BASE_URL, DEFAULT_INSTALL_DIR};
use gomii_deploy::{commands, logging};

#[derive(Parser)]
#[clap(name = "gomii-deploy")]
#[clap(about = "Download a Gomii package archive into the local package directory")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Name of the package to fetch (e.g. hello-world)
    #[clap(allow_hyphen_values = true)]
    package: Option<String>,

    /// Anything after the package name is ignored
    #[clap(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,

    /// Server the archive is fetched from
    #[clap(long, env = "GOMII_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Existing directory the archive is written to
    #[clap(long, env = "GOMII_INSTALL_DIR", default_value = DEFAULT_INSTALL_DIR)]
    install_dir: PathBuf,

    /// Give up on the request after this many seconds (default: wait forever)
    #[clap(long, env = "GOMII_TIMEOUT")]
    timeout: Option<u64>,

    /// Print diagnostic logs to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let Some(package) = cli.package else {
        println!("Usage: gomii-deploy <package-name>");
        std::process::exit(1);
    };

    let config = Config::new(
        cli.base_url,
        cli.install_dir,
        cli.timeout.map(Duration::from_secs),
    );

    if let Err(e) = commands::deploy::deploy_package(&package, &config) {
        println!("Deployment failed: {e}");
        std::process::exit(1);
    }

    println!("Deployment complete!");
}
