mod serve;

use asset_viewer_core::ViewerConfig;
use asset_viewer_core::config::{DEFAULT_PORT, resolve_assets_dir};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "asset-viewer",
    version,
    about = "Browse 3D models and textures in a directory from your browser",
    long_about = "Scans a directory for glTF models (.glb, .gltf) and textures (.png, .jpg, .jpeg, .webp), \
                  serves them over HTTP together with a thumbnail grid UI, and rescans on every reload."
)]
pub struct Cli {
    /// Path to the assets directory. If a project root containing public/assets is
    /// provided, that subfolder is used.
    #[arg(value_name = "PATH", env = "ASSET_VIEWER_PATH")]
    pub path: Option<PathBuf>,

    /// Port to run the server on
    #[arg(short, long, default_value_t = DEFAULT_PORT, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Open the default browser pointing to the server root after start
    #[arg(short, long)]
    pub open: bool,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Origin allowed to call the API from another dev server (e.g. http://localhost:5173)
    #[arg(long, value_name = "ORIGIN")]
    pub cors_origin: Option<String>,
}

impl Cli {
    /// Validate the parsed arguments into the immutable viewer configuration.
    pub fn into_config(self, cwd: &Path) -> asset_viewer_core::Result<ViewerConfig> {
        let Some(raw) = self.path else {
            return Err(asset_viewer_core::ViewerError::InvalidConfig(
                "Path is required (provide <PATH> or set ASSET_VIEWER_PATH)".to_string(),
            ));
        };
        let assets_dir = resolve_assets_dir(cwd, &raw)?;

        Ok(ViewerConfig::new(assets_dir)
            .with_host(self.host)
            .with_port(self.port)
            .with_open(self.open)
            .with_cors_origin(self.cors_origin))
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    let config = match cli.into_config(&cwd) {
        Ok(config) => config,
        Err(e) => Cli::command()
            .error(ErrorKind::ValueValidation, e.to_string())
            .exit(),
    };

    let _guard = asset_viewer_runtime::init_logging("cli");

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(serve::run(config))
}
