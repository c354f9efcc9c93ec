use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path as FsPath;
use tracing_subscriber::fmt::SubscriberBuilder;

use p3loops::domain::{Domain, Symmetry};
use p3loops::notation::{format_edge, format_path, format_point, parse_path};
use p3loops::path::Path;
use p3loops::search::{EnumeratorCfg, Loop, LoopEnumerator, MoveTree, NodeId, NodeKind};
use p3loops::validate::Validator;
use p3loops::walk::{random_walk, ReplayToken};
use p3loops::{EngineCfg, SameGeneratorRule};

mod provenance;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scheme {
    /// Quarter turns: North ≡ East, South ≡ West
    P4,
    /// Half turns about each side's midpoint
    P2,
}

#[derive(Parser)]
#[command(name = "p3loops")]
#[command(about = "Build, check, and enumerate non-crossing chord loops on a glued square")]
struct Cmd {
    /// Identification scheme of the square
    #[arg(long, value_enum, default_value_t = Scheme::P4)]
    scheme: Scheme,

    /// Zones per side (default: 1 for p4, 2 for p2)
    #[arg(long)]
    zones: Option<usize>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Validate a path edge by edge, e.g. "south@10 -> east@30; north@30 -> west@10"
    Check {
        #[arg(long)]
        path: String,
    },
    /// Enumerate loops and write a table (.csv or .parquet) plus a provenance sidecar
    Loops {
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long, default_value_t = 6)]
        max_length: usize,
        #[arg(long)]
        out: String,
    },
    /// Print the move tree of a path as JSON
    Tree {
        #[arg(long)]
        path: String,
        #[arg(long, default_value_t = 2)]
        depth: usize,
    },
    /// Print a random admissible path
    Walk {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 8)]
        max_edges: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let domain = build_domain(cmd.scheme, cmd.zones)?;
    let label = domain_label(&domain);
    match cmd.action {
        Action::Check { path } => check(&domain, &path),
        Action::Loops {
            count,
            max_length,
            out,
        } => loops(&domain, &label, count, max_length, &out),
        Action::Tree { path, depth } => tree(&domain, &path, depth),
        Action::Walk {
            seed,
            index,
            max_edges,
        } => walk(&domain, ReplayToken::new(seed, index), max_edges),
        Action::Report => report(&label),
    }
}

fn build_domain(scheme: Scheme, zones: Option<usize>) -> Result<Domain> {
    let (symmetry, default_zones) = match scheme {
        Scheme::P4 => (Symmetry::QuarterTurn, 1),
        Scheme::P2 => (Symmetry::HalfTurn, 2),
    };
    let zones = zones.unwrap_or(default_zones);
    Domain::new(symmetry, zones).with_context(|| format!("building {scheme:?} domain with {zones} zones"))
}

fn domain_label(domain: &Domain) -> String {
    let scheme = match domain.symmetry() {
        Symmetry::QuarterTurn => "p4",
        Symmetry::HalfTurn => "p2",
    };
    format!("{scheme} z={}", domain.zones())
}

fn check(domain: &Domain, text: &str) -> Result<()> {
    let edges = parse_path(domain, text).context("parsing --path")?;
    let validator = Validator::continuous(domain, EngineCfg::default());
    let mut path = Path::new();
    for (i, edge) in edges.iter().enumerate() {
        match path.append(&validator, *edge) {
            Ok(()) => println!("{i}: ok    {}", format_edge(domain, edge)),
            Err(err) => {
                if i + 1 != edges.len() || !validator.is_closing_edge(&path, edge) {
                    println!("{i}: FAIL  {}: {err}", format_edge(domain, edge));
                    tracing::warn!(edge = i, %err, "path rejected");
                    break;
                }
                path.close(&validator)?;
                println!("{i}: close {}", format_edge(domain, edge));
            }
        }
    }
    match path.continuation(domain) {
        Some(p) => println!("continuation: {}", format_point(domain, &p)),
        None if path.is_closed() => println!("continuation: none (closed)"),
        None => println!("continuation: any"),
    }
    println!("index: {}", p3loops::api::wallpaper_index_of(domain, &path));
    Ok(())
}

fn loop_table(domain: &Domain, loops: &[Loop]) -> Result<DataFrame> {
    let length: Vec<u32> = loops.iter().map(|l| l.len() as u32).collect();
    let tx: Vec<i64> = loops.iter().map(|l| l.index().tx).collect();
    let ty: Vec<i64> = loops.iter().map(|l| l.index().ty).collect();
    let r: Vec<u32> = loops.iter().map(|l| u32::from(l.index().r)).collect();
    let edges: Vec<String> = loops
        .iter()
        .map(|l| format_path(domain, l.edges()))
        .collect();
    let df = DataFrame::new(vec![
        Series::new("length".into(), length),
        Series::new("tx".into(), tx),
        Series::new("ty".into(), ty),
        Series::new("r".into(), r),
        Series::new("edges".into(), edges),
    ])?;
    Ok(df)
}

fn write_table(df: &mut DataFrame, out: &str) -> Result<()> {
    let out_path = FsPath::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(out_path).with_context(|| format!("creating {out}"))?;
    match out_path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            let mut file = file;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        Some("parquet") => {
            ParquetWriter::new(file).finish(df)?;
        }
        _ => bail!("unsupported output format for {out}; use .csv or .parquet"),
    }
    Ok(())
}

fn loops(domain: &Domain, label: &str, count: usize, max_length: usize, out: &str) -> Result<()> {
    tracing::info!(count, max_length, out, domain = label, "loops");
    let mut en = LoopEnumerator::new(domain.clone(), EnumeratorCfg::default());
    let query = en.get_loops(count, max_length);
    let exhausted = query.exhausted;
    let mut df = loop_table(domain, query.loops)?;
    tracing::info!(rows = df.height(), exhausted, "enumerated");
    write_table(&mut df, out)?;
    let payload = provenance::Payload::new(
        label,
        serde_json::json!({
            "count": count,
            "max_length": max_length,
            "found": df.height(),
            "exhausted": exhausted,
        }),
    );
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

#[derive(Serialize)]
struct NodeOut {
    id: usize,
    parent: Option<usize>,
    choice: Option<String>,
    edges: Vec<String>,
    kind: &'static str,
    children: Vec<usize>,
    choices: Option<usize>,
    index: Option<String>,
}

fn tree_json(domain: &Domain, tree: &MoveTree) -> Vec<NodeOut> {
    tree.nodes()
        .iter()
        .enumerate()
        .map(|(id, n)| {
            let (kind, choices, index) = match &n.kind {
                NodeKind::Branch(_) => ("branch", None, None),
                NodeKind::DeadEnd => ("dead_end", None, None),
                NodeKind::Closed { index } => ("closed", None, Some(index.to_string())),
                NodeKind::Unexpanded { choices } => ("unexpanded", Some(*choices), None),
            };
            NodeOut {
                id,
                parent: n.parent.map(|p| p.0),
                choice: n.choice.map(|m| m.to_string()),
                edges: n.edges.iter().map(|e| format_edge(domain, e)).collect(),
                kind,
                children: tree
                    .children(NodeId(id))
                    .iter()
                    .map(|c| c.0)
                    .collect(),
                choices,
                index,
            }
        })
        .collect()
}

fn tree(domain: &Domain, text: &str, depth: usize) -> Result<()> {
    let edges = parse_path(domain, text).context("parsing --path")?;
    let validator = Validator::continuous(domain, EngineCfg::default());
    let path = validator
        .validate_path(&edges)
        .map_err(|(i, err)| anyhow::anyhow!("edge {i} rejected: {err}"))?;
    let tree = p3loops::api::build_move_tree(domain, &path, depth)?;
    tracing::info!(nodes = tree.len(), closed = tree.closed_leaves(), "tree");
    println!("{}", serde_json::to_string_pretty(&tree_json(domain, &tree))?);
    Ok(())
}

fn walk(domain: &Domain, token: ReplayToken, max_edges: usize) -> Result<()> {
    let w = random_walk(domain, token, max_edges, SameGeneratorRule::Literal);
    let path = w.to_continuous()?;
    println!("{}", format_path(domain, path.edges()));
    println!("index: {}", p3loops::api::wallpaper_index_of(domain, &path));
    Ok(())
}

fn report(label: &str) -> Result<()> {
    let payload = provenance::Payload::new(label, serde_json::json!({}));
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use p3loops::path::DiscretePath;
    use p3loops::search::TreeCfg;
    use tempfile::tempdir;

    #[test]
    fn loops_table_round_trips_through_csv() {
        let d = build_domain(Scheme::P4, None).unwrap();
        let loops = p3loops::api::enumerate_loops(&d, 3, 5);
        let mut df = loop_table(&d, &loops).unwrap();
        assert_eq!(df.height(), loops.len());
        let dir = tempdir().unwrap();
        let out = dir.path().join("loops.csv");
        let out = out.to_string_lossy().into_owned();
        write_table(&mut df, &out).unwrap();
        let back = LazyCsvReader::new(&out)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(back.shape(), df.shape());
    }

    #[test]
    fn unknown_table_format_is_rejected() {
        let d = build_domain(Scheme::P4, None).unwrap();
        let mut df = loop_table(&d, &[]).unwrap();
        let dir = tempdir().unwrap();
        let out = dir.path().join("loops.txt");
        assert!(write_table(&mut df, &out.to_string_lossy()).is_err());
    }

    #[test]
    fn half_turn_needs_even_zones() {
        assert!(build_domain(Scheme::P2, Some(3)).is_err());
        assert_eq!(domain_label(&build_domain(Scheme::P2, None).unwrap()), "p2 z=2");
    }

    #[test]
    fn tree_json_links_children_to_parents() {
        let d = build_domain(Scheme::P4, None).unwrap();
        let seed = DiscretePath::seed(&d).to_continuous().unwrap();
        let tree = MoveTree::build(&d, &seed, 1, TreeCfg::default()).unwrap();
        let nodes = tree_json(&d, &tree);
        assert_eq!(nodes[0].kind, "branch");
        for c in &nodes[0].children {
            assert_eq!(nodes[*c].parent, Some(0));
        }
    }
}
