use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser};

use polysweep::{
    compute_polygon_area, generators, sweep, triangulate, Error, Point, Segments,
    TriangulationOptions,
};

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum Example {
    Regular,
    Star,
    Comb,
}

#[derive(Parser)]
struct Cli {
    #[arg(long)]
    output: PathBuf,

    #[command(flatten)]
    input: Input,

    /// The size parameter of the generated example.
    #[arg(long, default_value_t = 10)]
    size: usize,

    #[arg(long)]
    skip_simple_check: bool,

    #[arg(long)]
    skip_collinear_check: bool,

    #[arg(long)]
    skip_winding_check: bool,

    #[arg(long)]
    epsilon: Option<f64>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// A text file with one `x y` vertex per line.
    input: Option<PathBuf>,

    #[arg(long)]
    example: Option<Example>,
}

fn read_points(path: &Path) -> anyhow::Result<Vec<Point>> {
    let input = std::fs::read_to_string(path)?;
    let mut ret = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut coords = line.split_whitespace().map(str::parse::<f64>);
        let (Some(x), Some(y), None) = (coords.next(), coords.next(), coords.next()) else {
            anyhow::bail!("line {}: expected two coordinates", i + 1);
        };
        ret.push(Point::new(
            x.with_context(|| format!("line {}", i + 1))?,
            y.with_context(|| format!("line {}", i + 1))?,
        ));
    }
    Ok(ret)
}

fn get_polygon(input: &Input, size: usize) -> anyhow::Result<Vec<Point>> {
    match (&input.input, &input.example) {
        (Some(path), None) => read_points(path),
        (None, Some(example)) => Ok(match example {
            Example::Regular => generators::regular_polygon(size, 100.0),
            Example::Star => generators::star(size, 40.0, 100.0),
            Example::Comb => generators::comb(size),
        }),
        _ => unreachable!(),
    }
}

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Cli::parse();
    let polygon = get_polygon(&args.input, args.size)?;

    let (area, winding) = compute_polygon_area(&polygon);
    tracing::info!(vertices = polygon.len(), area, ?winding, "read polygon");

    let opts = TriangulationOptions {
        skip_simple_check: args.skip_simple_check,
        skip_collinear_check: args.skip_collinear_check,
        skip_winding_check: args.skip_winding_check,
        epsilon: args.epsilon.unwrap_or(0.0),
        ..Default::default()
    };

    let triangulation = match triangulate(&polygon, opts) {
        Ok(t) => t,
        Err(Error::NotSimplePolygon) => {
            let segments = Segments::from_closed_cycle(polygon.iter().copied());
            for int in sweep::sweep(&segments) {
                if !segments.contour_adjacent(int.segments.0, int.segments.1) {
                    tracing::warn!(x = int.point.x, y = int.point.y, "edges cross");
                }
            }
            anyhow::bail!(Error::NotSimplePolygon);
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(
        triangles = triangulation.triangles.len(),
        reversed = triangulation.reversed,
        "triangulated"
    );

    svg::save(&args.output, &triangulation.to_svg())?;

    Ok(())
}
