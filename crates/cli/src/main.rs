fn main() -> Result<(), Box<dyn std::error::Error>> {
    asset_viewer_cli::run()
}
