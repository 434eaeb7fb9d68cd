use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rectpick::{solve, SolverCfg};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod report;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "rectpick")]
#[command(about = "Pick at least K buildings minimizing bounding-rectangle perimeter plus cost")]
struct Cmd {
    /// Log every scored candidate
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve an instance and print the cost and rectangle edges
    Solve {
        /// Text file (`N K` then `x y cost` rows) or CSV with x,y,cost columns
        #[arg(long)]
        input: PathBuf,
        /// Minimum selection size; required for CSV, overrides K for text
        #[arg(long)]
        k: Option<usize>,
        /// Also write a JSON report (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = 10)]
        window: usize,
        #[arg(long, value_delimiter = ',', default_values_t = [3, 5, 10])]
        clusters: Vec<usize>,
        #[arg(long, default_value_t = 100)]
        max_iter: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Write a seeded random instance in the text format
    Gen {
        #[arg(long)]
        n: usize,
        #[arg(long)]
        k: usize,
        #[arg(long)]
        out: PathBuf,
        /// Coordinates are drawn from [0, extent)
        #[arg(long, default_value_t = 1000.0)]
        extent: f64,
        /// Costs are drawn from [-max_cost, max_cost)
        #[arg(long, default_value_t = 50.0)]
        max_cost: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            k,
            out,
            window,
            clusters,
            max_iter,
            seed,
        } => {
            let cfg = SolverCfg {
                local_window: window,
                cluster_counts: clusters,
                max_iter,
                seed,
            };
            run_solve(&input, k, out.as_deref(), &cfg)
        }
        Action::Gen {
            n,
            k,
            out,
            extent,
            max_cost,
            seed,
        } => run_gen(n, k, &out, extent, max_cost, seed),
    }
}

fn run_solve(input: &Path, k: Option<usize>, out: Option<&Path>, cfg: &SolverCfg) -> Result<()> {
    tracing::info!(input = %input.display(), k = ?k, "solve");
    let inst = input::load(input, k)?;
    if inst.min_k > inst.len() {
        tracing::warn!(n = inst.len(), k = inst.min_k, "K exceeds N; no selection is feasible");
    }
    let sol = solve(&inst, cfg);
    print!("{}", report::render_text(&sol));

    if let Some(out) = out {
        ensure_parent(out)?;
        let doc = report::Report::new(&inst, cfg, &sol);
        fs::write(out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = serde_json::json!({ "k": inst.min_k, "cfg": doc.cfg });
        let prov = write_sidecar(out, Payload::new(params).with_input(input.to_string_lossy()))?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "report written");
    }
    Ok(())
}

fn run_gen(n: usize, k: usize, out: &Path, extent: f64, max_cost: f64, seed: u64) -> Result<()> {
    if !(extent > 0.0 && max_cost > 0.0) {
        bail!("extent and max_cost must be positive");
    }
    tracing::info!(n, k, seed, out = %out.display(), "gen");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut text = format!("{n} {k}\n");
    for _ in 0..n {
        let x = rng.gen_range(0.0..extent);
        let y = rng.gen_range(0.0..extent);
        let c = rng.gen_range(-max_cost..max_cost);
        text.push_str(&format!("{x:.6} {y:.6} {c:.6}\n"));
    }
    ensure_parent(out)?;
    fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({ "n": n, "k": k, "extent": extent, "max_cost": max_cost, "seed": seed });
    write_sidecar(out, Payload::new(params))?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn gen_then_solve_round_trip() {
        let dir = tempdir().unwrap();
        let inst_path = dir.path().join("data/inst.txt");
        run_gen(50, 4, &inst_path, 100.0, 10.0, 3).unwrap();
        assert!(dir.path().join("data/inst.provenance.json").exists());
        let inst = input::load(&inst_path, None).unwrap();
        assert_eq!((inst.len(), inst.min_k), (50, 4));

        let out = dir.path().join("out/best.json");
        run_solve(&inst_path, None, Some(&out), &SolverCfg::default()).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert!(v["cost"].is_number());
        assert_eq!(v["corners"].as_array().unwrap().len(), 4);
        let prov: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join("out/best.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(prov["params"]["k"], 4);
        assert_eq!(prov["params"]["cfg"]["seed"], 42);
        assert_eq!(prov["params"]["cfg"]["cluster_counts"], serde_json::json!([3, 5, 10]));
        assert_eq!(prov["inputs"][0], inst_path.to_string_lossy().as_ref());
    }

    #[test]
    fn gen_writes_one_line_per_building() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inst.txt");
        run_gen(5, 2, &path, 10.0, 1.0, 9).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "5 2");
        assert!(lines[1..].iter().all(|l| l.split_whitespace().count() == 3));
    }

    #[test]
    fn gen_rejects_empty_ranges() {
        let dir = tempdir().unwrap();
        assert!(run_gen(3, 1, &dir.path().join("x.txt"), 0.0, 1.0, 0).is_err());
    }

    #[test]
    fn cli_defaults_match_solver_defaults() {
        let cmd = Cmd::try_parse_from(["rectpick", "solve", "--input", "in.txt"]).unwrap();
        let Action::Solve {
            window,
            clusters,
            max_iter,
            seed,
            ..
        } = cmd.action
        else {
            panic!("expected solve");
        };
        let d = SolverCfg::default();
        assert_eq!(window, d.local_window);
        assert_eq!(clusters, d.cluster_counts);
        assert_eq!(max_iter, d.max_iter);
        assert_eq!(seed, d.seed);
    }
}
