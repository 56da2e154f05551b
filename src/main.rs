//! Native driver for the annotation workspace.
//!
//! Opens an image, replays a JSON array of workspace messages against it and
//! prints the resulting submit payload.
//!
//! ```text
//! geoannot-native [IMAGE] [SCRIPT.json] [--svg OUT.svg] [--task ID] [--save-config]
//! ```
//!
//! Without IMAGE a file dialog asks for one; without SCRIPT messages are read
//! from stdin.

#[cfg(not(target_arch = "wasm32"))]
mod driver {
    use std::io::Read;
    use std::path::{Path, PathBuf};

    use clap::Parser;
    use geoannot::model::StaticTaskSource;
    use geoannot::state::IMAGE_EXTENSIONS;
    use geoannot::{
        AppConfig, ConfigError, FormatError, ImageError, LoadedImage, Message, WorkspaceSession,
        render_svg,
    };
    use thiserror::Error;

    /// Errors that end a driver run.
    #[derive(Error, Debug)]
    pub enum DriverError {
        #[error(transparent)]
        Image(#[from] ImageError),

        #[error(transparent)]
        Config(#[from] ConfigError),

        #[error(transparent)]
        Format(#[from] FormatError),

        #[error("I/O error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Invalid message script: {0}")]
        Script(#[from] serde_json::Error),

        #[error("No image selected")]
        NoImage,

        #[error("Unknown task: {0}")]
        UnknownTask(String),
    }

    #[derive(Parser, Debug)]
    #[command(
        name = "geoannot-native",
        about = "Replay workspace messages against an image and print the submit payload"
    )]
    struct Args {
        /// Image to annotate; a file dialog asks when omitted
        image: Option<PathBuf>,

        /// JSON array of messages; read from stdin when omitted
        script: Option<PathBuf>,

        /// Write the overlay as SVG
        #[arg(long, value_name = "OUT.svg")]
        svg: Option<PathBuf>,

        /// Open the workspace for a task from the sample queue
        #[arg(long, value_name = "ID")]
        task: Option<String>,

        /// Write the effective configuration to the default config path
        #[arg(long)]
        save_config: bool,
    }

    fn init_logging(config: &AppConfig) {
        // RUST_LOG overrides the configured level
        env_logger::Builder::new()
            .filter_level(config.preferences.log_level.to_level_filter())
            .parse_default_env()
            .init();
    }

    fn pick_image() -> Result<PathBuf, DriverError> {
        log::info!("Opening image dialog...");
        rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
            .ok_or(DriverError::NoImage)
    }

    fn read_script(path: Option<&Path>) -> Result<Vec<Message>, DriverError> {
        let json = match path {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        Ok(serde_json::from_str(&json)?)
    }

    fn export_path(config: &AppConfig, out: &Path) -> PathBuf {
        let folder = &config.preferences.export_folder;
        if out.is_relative() && !folder.is_empty() {
            Path::new(folder).join(out)
        } else {
            out.to_path_buf()
        }
    }

    pub fn run() -> Result<(), DriverError> {
        let args = Args::parse();
        let config = AppConfig::load_from_default_path().unwrap_or_default();
        init_logging(&config);

        if args.save_config {
            config.save_to_default_path()?;
        }

        let mut session = match &args.task {
            Some(id) => WorkspaceSession::open_task(&StaticTaskSource::sample(), id, &config)
                .ok_or_else(|| DriverError::UnknownTask(id.clone()))?,
            None => WorkspaceSession::with_config(&config),
        };

        let image_path = match args.image {
            Some(path) => path,
            None => pick_image()?,
        };
        session.load_image(LoadedImage::from_path(&image_path)?);

        let messages = read_script(args.script.as_deref())?;
        log::info!("Replaying {} messages", messages.len());
        for message in messages {
            session.update(message);
        }

        if let Some(out) = &args.svg {
            let path = export_path(&config, out);
            let svg = render_svg(&session.overlay_scene())?;
            std::fs::write(&path, svg)?;
            log::info!("Wrote overlay to {:?}", path);
        }

        if let Some(payload) = session.submit_payload() {
            println!("{}", payload.to_json()?);
        }

        session.close();
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> Result<Args, clap::Error> {
            Args::try_parse_from(std::iter::once("geoannot-native").chain(list.iter().copied()))
        }

        #[test]
        fn test_parse_positional_and_flags() {
            let parsed = args(&["core.png", "script.json", "--svg", "out.svg", "--task", "101"])
                .expect("parse");
            assert_eq!(parsed.image, Some(PathBuf::from("core.png")));
            assert_eq!(parsed.script, Some(PathBuf::from("script.json")));
            assert_eq!(parsed.svg, Some(PathBuf::from("out.svg")));
            assert_eq!(parsed.task.as_deref(), Some("101"));
            assert!(!parsed.save_config);
        }

        #[test]
        fn test_parse_defaults() {
            let parsed = args(&["--save-config"]).expect("parse");
            assert!(parsed.image.is_none());
            assert!(parsed.script.is_none());
            assert!(parsed.svg.is_none());
            assert!(parsed.save_config);
        }

        #[test]
        fn test_parse_rejects_bad_usage() {
            assert!(args(&["--svg"]).is_err());
            assert!(args(&["--zoom"]).is_err());
            assert!(args(&["a", "b", "c"]).is_err());
        }

        #[test]
        fn test_export_path_uses_configured_folder() {
            let mut config = AppConfig::new();
            assert_eq!(
                export_path(&config, Path::new("o.svg")),
                PathBuf::from("o.svg")
            );
            config.preferences.export_folder = "/tmp/exports".to_string();
            assert_eq!(
                export_path(&config, Path::new("o.svg")),
                PathBuf::from("/tmp/exports/o.svg")
            );
            assert_eq!(
                export_path(&config, Path::new("/abs/o.svg")),
                PathBuf::from("/abs/o.svg")
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = driver::run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// No driver for the web build
#[cfg(target_arch = "wasm32")]
fn main() {}
