use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;
use wirestrip::prelude::*;

mod input;

#[derive(Parser)]
#[command(name = "wirestrip")]
#[command(about = "Wireframe asset exporter")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the strip decomposition of a mesh description
    Strips {
        #[arg(long)]
        input: PathBuf,
    },
    /// Export a mesh description to the binary wireframe format
    Export {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Export a glyph description to the compact font format
    Glyph {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Strips { input } => strips(&input),
        Action::Export { input, out } => export(&input, &out),
        Action::Glyph { input, out } => glyph(&input, &out),
    }
}

fn strips(input: &Path) -> Result<()> {
    let mesh = input::load_mesh(input)?;
    let dec = decompose(mesh.edges());
    tracing::info!(
        edges = mesh.edges().len(),
        strips = dec.strip_count(),
        "decomposed"
    );
    for (i, strip) in dec.strips().iter().enumerate() {
        println!("strip {i}: {:?}", strip.vertices());
    }
    Ok(())
}

fn export(input: &Path, out: &Path) -> Result<()> {
    let mesh = input::load_mesh(input)?;
    let bytes = encode_mesh(&mesh).context("encoding wireframe mesh")?;
    write_out(out, &bytes)?;
    tracing::info!(bytes = bytes.len(), out = %out.display(), "exported mesh");
    Ok(())
}

fn glyph(input: &Path, out: &Path) -> Result<()> {
    let glyph = input::load_glyph(input)?;
    let bytes = encode_glyph(&glyph).context("encoding glyph")?;
    write_out(out, &bytes)?;
    tracing::info!(bytes = bytes.len(), out = %out.display(), "exported glyph");
    Ok(())
}

fn write_out(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
