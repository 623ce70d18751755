//! Renders a hexagon grid wireframe to a PNG file.
//!
//! ```text
//! hexgrid <cells-x> <cells-y> <outer-radius> <output.png> [--stroke-width W]
//! ```
//!
//! Logging defaults to WARN, INFO for `hexgrid`; override with `RUST_LOG`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use hexgrid::{HexGrid, RenderGrid, RenderStyle};

const USAGE: &str =
    "usage: hexgrid <cells-x> <cells-y> <outer-radius> <output.png> [--stroke-width W]";

#[derive(Debug, PartialEq)]
struct Args {
    cells_x: u32,
    cells_y: u32,
    outer_radius: f64,
    output: PathBuf,
    stroke_width: Option<f64>,
}

fn parse_args(raw: &[String]) -> Result<Args> {
    let mut positional = Vec::new();
    let mut stroke_width = None;
    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        if arg == "--stroke-width" {
            let value = iter.next().context("--stroke-width needs a value")?;
            stroke_width = Some(
                value
                    .parse::<f64>()
                    .with_context(|| format!("invalid stroke width {value:?}"))?,
            );
        } else {
            positional.push(arg.as_str());
        }
    }

    let [cells_x, cells_y, outer_radius, output] = positional.as_slice() else {
        bail!("{USAGE}");
    };

    Ok(Args {
        cells_x: cells_x
            .parse()
            .with_context(|| format!("invalid cells-x {cells_x:?}"))?,
        cells_y: cells_y
            .parse()
            .with_context(|| format!("invalid cells-y {cells_y:?}"))?,
        outer_radius: outer_radius
            .parse()
            .with_context(|| format!("invalid outer-radius {outer_radius:?}"))?,
        output: PathBuf::from(*output),
        stroke_width,
    })
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hexgrid=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&raw)?;

    let grid = HexGrid::new(args.cells_x, args.cells_y, args.outer_radius)
        .context("failed to lay out grid")?;

    let mut style = RenderStyle::default();
    if let Some(width) = args.stroke_width {
        style = style.with_stroke_width(width)?;
    }

    RenderGrid::new(&grid)
        .with_style(style)
        .execute(&args.output)
        .with_context(|| format!("failed to render {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn parses_positional_args() {
        let args = parse_args(&strings(&["2", "3", "10.5", "out.png"])).unwrap();
        assert_eq!(
            args,
            Args {
                cells_x: 2,
                cells_y: 3,
                outer_radius: 10.5,
                output: PathBuf::from("out.png"),
                stroke_width: None,
            }
        );
    }

    #[test]
    fn parses_stroke_width_anywhere() {
        let args =
            parse_args(&strings(&["--stroke-width", "2", "1", "1", "4", "a.png"])).unwrap();
        assert_eq!(args.stroke_width, Some(2.0));
        assert_eq!(args.output, PathBuf::from("a.png"));
    }

    #[test]
    fn rejects_missing_args() {
        assert!(parse_args(&strings(&["2", "3"])).is_err());
        assert!(parse_args(&strings(&["2", "3", "1", "a.png", "extra"])).is_err());
    }

    #[test]
    fn rejects_negative_counts() {
        assert!(parse_args(&strings(&["-1", "3", "1", "a.png"])).is_err());
    }

    #[test]
    fn rejects_dangling_stroke_width() {
        assert!(parse_args(&strings(&["1", "1", "1", "a.png", "--stroke-width"])).is_err());
    }
}
