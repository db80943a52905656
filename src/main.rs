//! Elliptic curve / modular form explorer — terminal front end.

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::info;

use elliptic_modular_sim::config::{FieldRegion, SeriesOrder};
use elliptic_modular_sim::input;
use elliptic_modular_sim::model::CurveModel;
use elliptic_modular_sim::render;

/// Real locus of y² = x³ + ax + b next to log(|j| + 1) over the upper half-plane
#[derive(Parser)]
#[command(name = "elliptic-modular-sim", version, about)]
struct Cli {
    /// Coefficient of x
    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    a: f64,

    /// Constant term
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    b: f64,

    /// Field columns (Re τ); defaults to the chosen region's resolution
    #[arg(long)]
    nx: Option<usize>,

    /// Field rows (Im τ)
    #[arg(long)]
    ny: Option<usize>,

    /// Use the smaller 20×20 region over [−2, 2] × [0.1, 2]
    #[arg(long, default_value_t = false)]
    classic: bool,

    /// Positive q-powers kept in every series (clamped to 6)
    #[arg(long, default_value_t = 2)]
    order: usize,

    /// Read "a b" lines from stdin and redraw after each one
    #[arg(long, default_value_t = false)]
    interactive: bool,
}

const LOCUS_WIDTH: usize = 61;
const LOCUS_HEIGHT: usize = 25;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let base = if cli.classic { FieldRegion::classic() } else { FieldRegion::default() };
    let region = base.with_resolution(cli.nx.unwrap_or(base.nx), cli.ny.unwrap_or(base.ny));
    let model = CurveModel::new(cli.a, cli.b)
        .with_field_region(region)
        .with_order(SeriesOrder::new(cli.order));
    info!("starting with {} on a {}x{} grid", model.curve().equation(), region.nx, region.ny);

    draw(&model)?;
    if cli.interactive {
        run_interactive(model)?;
    }
    Ok(())
}

fn run_interactive(mut model: CurveModel) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            prompt()?;
            continue;
        }
        if trimmed == "q" || trimmed == "quit" {
            break;
        }
        match input::parse_line(trimmed) {
            Ok(curve) => {
                model = model.set_parameters(curve.a, curve.b);
                draw(&model)?;
            }
            Err(e) => {
                println!("  {}", e);
                println!("  keeping {}", model.curve().equation());
            }
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("a b> ");
    io::stdout().flush()
}

fn draw(model: &CurveModel) -> Result<(), Box<dyn std::error::Error>> {
    let curve = model.curve();

    println!();
    println!("━━━ Elliptic Curve: {} ━━━", curve.equation());
    println!();
    println!("  Discriminant:   Δ = {}", model.discriminant());
    match model.j_invariant() {
        Ok(j) => println!("  j-invariant:    j = {:.2}", j),
        Err(e) => println!("  j-invariant:    undefined ({})", e),
    }

    let branches = model.locus_branches();
    println!("  Real branches:  {}", branches.len());
    for (k, branch) in branches.iter().enumerate() {
        let (lo, hi) = branch.x_span();
        println!("    #{}  x ∈ [{:>7.3}, {:>7.3}]  ({} samples)", k + 1, lo, hi, branch.len());
    }
    println!();

    let points = model.real_locus();
    let canvas = render::locus_plot(&points, LOCUS_WIDTH, LOCUS_HEIGHT, (-10.0, 10.0), (-10.0, 10.0));
    print!("{}", canvas.render());
    println!();

    let field = model.default_field()?;
    println!(
        "━━━ Modular Form in Upper Half-Plane ({}×{}, order {}) ━━━",
        field.nx(),
        field.ny(),
        model.order().get()
    );
    println!();

    let mut canvas = render::heat_map(&field);
    let specials = model.special_points();
    render::overlay_domain(&mut canvas, &model.domain_overlay(), &specials);
    print!("{}", canvas.render());
    println!();

    if let Some((lo, hi)) = field.min_max() {
        println!("  log(|j| + 1) ∈ [{:.3}, {:.3}]   undefined cells: {}", lo, hi, field.undefined_count());
    } else {
        println!("  no defined cells ({} undefined)", field.undefined_count());
    }
    for p in &specials {
        println!("  {:<2} τ = {:<12}  j ≈ {:>9.0}   ({})", p.name, format!("{:.3}", p.tau), p.j.re, p.annotation);
    }
    println!("  legend: o fundamental domain, ~ translates, ? undefined");
    println!();
    Ok(())
}
