use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gridplay::config::AppConfig;
use gridplay::logging;
use gridplay::modes::{LifeMode, SnakeMode, terminal_size};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "gridplay")]
#[command(version, about = "Game of Life and Snake in the terminal")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run Conway's Game of Life (r: randomize, p: pause, c: continue, q: quit)
    Life {
        /// Fraction of cells alive after seeding
        #[arg(long)]
        density: Option<f64>,

        /// Milliseconds per generation
        #[arg(long)]
        interval_ms: Option<u64>,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        size: SizeArgs,
    },

    /// Play Snake with the arrow keys or WASD
    Snake {
        /// Starting length of the snake
        #[arg(long)]
        length: Option<u32>,

        /// Milliseconds per move
        #[arg(long)]
        interval_ms: Option<u64>,

        /// RNG seed for reproducible food placement
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        size: SizeArgs,
    },
}

/// Grid size; defaults to the terminal size
#[derive(Args)]
struct SizeArgs {
    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,
}

impl SizeArgs {
    /// Rows and columns, with `reserved_rows` kept free below the grid
    fn resolve(&self, reserved_rows: usize) -> Result<(usize, usize)> {
        if let (Some(rows), Some(cols)) = (self.rows, self.cols) {
            return Ok((rows, cols));
        }

        let (term_rows, term_cols) = terminal_size()?;
        Ok((
            self.rows
                .unwrap_or_else(|| term_rows.saturating_sub(reserved_rows)),
            self.cols.unwrap_or(term_cols),
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if cli.log_file.is_some() {
        config.log.file = cli.log_file.clone();
    }

    match cli.command {
        Command::Life {
            density,
            interval_ms,
            seed,
            size,
        } => {
            if let Some(density) = density {
                config.life.density = density;
            }
            if let Some(interval_ms) = interval_ms {
                config.life.tick_interval_ms = interval_ms;
            }
            if seed.is_some() {
                config.life.seed = seed;
            }
            config.validate()?;
            logging::init(&config.log)?;

            let (rows, cols) = size.resolve(0)?;
            info!(rows, cols, life = ?config.life, "starting life");
            LifeMode::new(rows, cols, &config.life)?.run().await?;
        }
        Command::Snake {
            length,
            interval_ms,
            seed,
            size,
        } => {
            if let Some(length) = length {
                config.snake.initial_length = length;
            }
            if let Some(interval_ms) = interval_ms {
                config.snake.tick_interval_ms = interval_ms;
            }
            if seed.is_some() {
                config.snake.seed = seed;
            }
            config.validate()?;
            logging::init(&config.log)?;

            // Bottom row holds the score line
            let (rows, cols) = size.resolve(1)?;
            info!(rows, cols, snake = ?config.snake, "starting snake");
            SnakeMode::new(rows, cols, config.snake)?.run().await?;
        }
    }

    Ok(())
}
