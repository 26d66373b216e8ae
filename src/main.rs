// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use disparity_view::config::Config;
use disparity_view::constants::DEFAULT_MAX_RANGE;
use disparity_view::terminal::{self, PreviewSource};
use std::path::{Path, PathBuf};
use tracing::info;

mod cli;

#[derive(Parser)]
#[command(name = "disparity-view")]
#[command(about = "False-color viewer for stereo disparity images")]
#[command(version = env!("GIT_VERSION"))]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable disparity topics from a JSON source listing
    Topics {
        /// File holding `[{"name": ..., "type": ...}, ...]`
        input: PathBuf,
    },

    /// Print the disparity colour table
    Colormap {
        /// Print rows in stored channel order instead of RGB
        #[arg(long)]
        stored: bool,
    },

    /// Render disparity in the terminal
    Preview {
        /// Raw 32FC1 sample dump (animated test pattern when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(long, default_value = "0")]
        width: u32,

        #[arg(long, default_value = "0")]
        height: u32,

        /// Bytes per row (default: width * 4)
        #[arg(long)]
        stride: Option<usize>,

        /// Minimum valid disparity
        #[arg(long, default_value = "0")]
        min: f32,

        /// Maximum valid disparity
        #[arg(long, default_value_t = DEFAULT_MAX_RANGE)]
        max: f32,

        /// Samples are stored big-endian
        #[arg(long)]
        big_endian: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;

    // Set RUST_LOG to override the configured filter
    // Examples: RUST_LOG=debug, RUST_LOG=disparity_view=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();

    // Config is read before the subscriber exists, so report it now
    if let Some(path) = &cli.config {
        report_config(path, &config);
    }

    match cli.command {
        Commands::Topics { input } => cli::list_topics(&input, &config),
        Commands::Colormap { stored } => cli::print_colormap(stored),
        Commands::Preview {
            input,
            width,
            height,
            stride,
            min,
            max,
            big_endian,
        } => {
            let source = match input {
                Some(path) => PreviewSource::Still(cli::load_raw_frame(
                    &path,
                    cli::RawFrameLayout {
                        width,
                        height,
                        stride,
                        min,
                        max,
                        big_endian,
                    },
                )?),
                None => PreviewSource::Synthetic,
            };
            terminal::run(source, &config)
        }
    }
}

fn report_config(path: &Path, config: &Config) {
    info!(
        path = %path.display(),
        log_filter = %config.log_filter,
        dynamic_range = config.dynamic_range,
        "Loaded configuration"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::try_parse_from(["disparity-view", "colormap", "--config", "view.json"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("view.json")));
    }

    #[test]
    fn test_loaded_config_is_reported_once_logging_is_up() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let config = Config {
            log_filter: "info".to_string(),
            ..Config::default()
        };
        tracing::subscriber::with_default(subscriber, || {
            report_config(Path::new("view.json"), &config);
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Loaded configuration"));
        assert!(output.contains("view.json"));
    }
}
