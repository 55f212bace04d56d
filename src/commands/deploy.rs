use crate::core::{
    config::{Config, PackageName},
    download::Downloader,
};
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

/// Fetch `package` into the install directory and return where it landed.
pub fn deploy_package(package: &str, config: &Config) -> Result<PathBuf> {
    let name = PackageName::parse(package)?;
    let downloader = Downloader::new(config.timeout)?;
    deploy_with(&downloader, &name, config)
}

pub fn deploy_with(downloader: &Downloader, name: &PackageName, config: &Config) -> Result<PathBuf> {
    let package_url = config.get_package_url(name);
    let destination = config.get_package_path(name);

    println!("Downloading: {package_url}");
    info!(package = %name, destination = %destination.display(), "starting deployment");

    let bytes = downloader.download_file(&package_url, &destination)?;

    println!("Package downloaded successfully: {}", destination.display());
    info!(package = %name, bytes, "deployment finished");

    Ok(destination)
}
