use crate::config::{Config, RenderOptions};
use crate::render::{emit_all, render_table, write_output_svg};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mahjong-wall",
    version,
    about = "Generate SVG illustrations of a mahjong table wall"
)]
pub struct Args {
    /// Directory the SVG files are written to
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Also write the computed geometry as JSON next to each SVG
    #[arg(long = "dump-layout")]
    pub dump_layout: bool,

    /// Print the document for this column count to stdout instead of writing files
    #[arg(long = "stdout", value_name = "COLUMNS")]
    pub stdout: Option<usize>,

    /// With --stdout, draw the dice-roll start markers
    #[arg(long = "with-start", requires = "stdout")]
    pub with_start: bool,
}

pub fn run() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = Config::default();

    if let Some(column_count) = args.stdout {
        let options = RenderOptions::new().with_starts(args.with_start);
        let svg = render_table(&config, column_count, options)?;
        return write_output_svg(&svg, None);
    }

    let written = emit_all(&config, &args.out_dir, args.dump_layout)?;
    for path in written {
        eprintln!("{}", path.display());
    }
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let args = Args::try_parse_from(["mahjong-wall"]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(!args.dump_layout);
        assert_eq!(args.stdout, None);
    }

    #[test]
    fn with_start_needs_stdout() {
        assert!(Args::try_parse_from(["mahjong-wall", "--with-start"]).is_err());
        let args =
            Args::try_parse_from(["mahjong-wall", "--stdout", "18", "--with-start"]).unwrap();
        assert_eq!(args.stdout, Some(18));
        assert!(args.with_start);
    }
}
