use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flatgeom::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Vertex-array geometry inspector")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute measures for a ring or path stored as JSON [[x, y], ...]
    Measure {
        #[arg(long)]
        input: String,
    },
    /// Classify a point against a ring
    Contains {
        #[arg(long)]
        input: String,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
    },
    /// Sample a random ring and write it as JSON
    Gen {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: u32,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Measure { input } => measure(&input),
        Action::Contains { input, x, y } => contains(&input, x, y),
        Action::Gen {
            seed,
            index,
            vertices,
            out,
        } => generate(seed, index, vertices, &out),
    }
}

#[derive(Serialize)]
struct Measures {
    count: u32,
    closed: bool,
    simple: bool,
    length: f64,
    signed_area: f64,
    area: f64,
    winding: &'static str,
    /// `[min_x, min_y, max_x, max_y]`, absent for an empty input.
    bbox: Option<[f64; 4]>,
}

/// Parse a JSON `[[x, y], ...]` file into a raw vertex buffer.
fn read_vertex_buffer(path: &str) -> Result<Vec<u8>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let pts: Vec<[f64; 2]> =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    let mut buf = vec![0u8; pts.len() * VERTEX_SIZE];
    let mut vv = VertexVec::new(&mut buf, pts.len() as u32);
    for [x, y] in pts {
        vv.add(Vertex::new(x, y));
    }
    Ok(buf)
}

fn measures_of(ring: &VertexVec<'_>) -> Measures {
    let mut bbox = BoundingBox::default();
    for i in 0..ring.count() {
        bbox.expand(ring.get(i));
    }
    Measures {
        count: ring.count(),
        closed: ring.is_closed(),
        simple: ring.is_simple(),
        length: ring.length(),
        signed_area: ring.signed_area(),
        area: ring.area(),
        winding: match ring.winding_order() {
            WindingOrder::Clockwise => "clockwise",
            WindingOrder::CounterClockwise => "counter_clockwise",
        },
        bbox: bbox
            .is_valid()
            .then_some([bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y]),
    }
}

fn measure(input: &str) -> Result<()> {
    let mut buf = read_vertex_buffer(input)?;
    let count = (buf.len() / VERTEX_SIZE) as u32;
    let ring = VertexVec::from_buffer(&mut buf, count);
    tracing::info!(input, count, "measure");
    println!("{}", serde_json::to_string_pretty(&measures_of(&ring))?);
    Ok(())
}

fn contains(input: &str, x: f64, y: f64) -> Result<()> {
    let mut buf = read_vertex_buffer(input)?;
    let count = (buf.len() / VERTEX_SIZE) as u32;
    let ring = VertexVec::from_buffer(&mut buf, count);
    tracing::info!(input, x, y, "contains");
    let verdict = match ring.contains_vertex(Vertex::new(x, y), true) {
        Contains::Inside => "inside",
        Contains::Outside => "outside",
        Contains::OnEdge => "on_edge",
    };
    println!("{}", serde_json::json!({ "contains": verdict }));
    Ok(())
}

// Named to stay clear of the `gen` keyword reserved from edition 2024 on.
fn generate(seed: u64, index: u64, vertices: u32, out: &str) -> Result<()> {
    let cfg = RingCfg {
        vertices,
        ..RingCfg::default()
    };
    let mut buf = vec![0u8; ring_buffer_size(&cfg)];
    let ring = draw_ring(&mut buf, cfg, ReplayToken { seed, index });
    tracing::info!(seed, index, count = ring.count(), out, "gen");

    let pts: Vec<[f64; 2]> = (0..ring.count())
        .map(|i| {
            let v = ring.get(i);
            [v.x, v.y]
        })
        .collect();
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&pts)?)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_json(dir: &tempfile::TempDir, name: &str, json: &str) -> String {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(json.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn measures_of_square_ring() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(
            &dir,
            "square.json",
            "[[0,0],[10,0],[10,10],[0,10],[0,0]]",
        );
        let mut buf = read_vertex_buffer(&path).unwrap();
        let count = (buf.len() / VERTEX_SIZE) as u32;
        let ring = VertexVec::from_buffer(&mut buf, count);
        let m = measures_of(&ring);
        assert_eq!(m.count, 5);
        assert!(m.closed);
        assert!(m.simple);
        assert!((m.area - 100.0).abs() < 1e-12);
        assert_eq!(m.winding, "counter_clockwise");
        assert_eq!(m.bbox, Some([0.0, 0.0, 10.0, 10.0]));
    }

    #[test]
    fn gen_output_feeds_back_into_measure() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ring.json").to_string_lossy().into_owned();
        generate(11, 2, 8, &out).unwrap();

        let mut buf = read_vertex_buffer(&out).unwrap();
        let count = (buf.len() / VERTEX_SIZE) as u32;
        let ring = VertexVec::from_buffer(&mut buf, count);
        let m = measures_of(&ring);
        assert_eq!(m.count, 9);
        assert!(m.closed);
        assert!(m.simple);
        assert_eq!(m.winding, "counter_clockwise");
    }

    #[test]
    fn bad_input_is_reported_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(&dir, "bad.json", "not json");
        let err = read_vertex_buffer(&path).unwrap_err();
        assert!(err.to_string().contains("parsing"));
    }
}
