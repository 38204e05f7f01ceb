use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use stallings::random::{draw_base, ReplayToken, WordCfg};
use stallings::whitehead::{cyclic_length, WhiteheadAutomorphism};
use stallings::{FringeCfg, Subgroup, Symbol};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod report;

use input::{parse_base, parse_word};

#[derive(Parser)]
#[command(name = "stallings-cli", version = stallings::VERSION)]
#[command(about = "Stallings graphs of free-group subgroups; words are JSON integer arrays")]
struct Cmd {
    /// Write the JSON report to this file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Fold a base and answer membership/coordinate queries
    Fold {
        #[arg(long)]
        base: String,
        #[arg(long)]
        query: Vec<String>,
    },
    /// Index in the free group (rank defaults to the largest symbol)
    Index {
        #[arg(long)]
        base: String,
        #[arg(long)]
        rank: Option<usize>,
    },
    /// Shortest coset representatives of a finite-index subgroup
    Cosets {
        #[arg(long)]
        base: String,
        #[arg(long)]
        rank: Option<usize>,
    },
    /// Intersection of two subgroups
    Intersect {
        #[arg(long)]
        left: String,
        #[arg(long)]
        right: String,
    },
    /// Distinct subgroups obtained from vertex partitions of the Stallings graph
    Fringe {
        #[arg(long)]
        base: String,
        #[arg(long, default_value_t = FringeCfg::default().max_vertices)]
        max_vertices: usize,
    },
    /// Apply a Whitehead automorphism to one or more words
    Whitehead {
        #[arg(long, allow_negative_numbers = true)]
        pivot: Symbol,
        #[arg(long)]
        cut: String,
        #[arg(long, required = true)]
        word: Vec<String>,
    },
    /// Draw a reproducible random base and fold it
    Random {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 2)]
        rank: Symbol,
        #[arg(long, default_value_t = 1)]
        min_len: usize,
        #[arg(long, default_value_t = 6)]
        max_len: usize,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let doc = run(cmd.action)?;
    report::emit(cmd.out.as_deref(), &doc)
}

fn run(action: Action) -> Result<Value> {
    match action {
        Action::Fold { base, query } => fold(&base, &query),
        Action::Index { base, rank } => index(&base, rank),
        Action::Cosets { base, rank } => cosets(&base, rank),
        Action::Intersect { left, right } => intersect(&left, &right),
        Action::Fringe { base, max_vertices } => fringe(&base, max_vertices),
        Action::Whitehead { pivot, cut, word } => whitehead(pivot, &cut, &word),
        Action::Random {
            seed,
            index,
            count,
            rank,
            min_len,
            max_len,
        } => random(
            ReplayToken { seed, index },
            count,
            WordCfg {
                rank,
                min_len,
                max_len,
            },
        ),
    }
}

fn fold(base: &str, queries: &[String]) -> Result<Value> {
    let sg = Subgroup::from_base(parse_base(base)?);
    tracing::info!(
        vertices = sg.graph().size(),
        foldings = sg.foldings().len(),
        "fold"
    );
    let mut answers = Vec::with_capacity(queries.len());
    for raw in queries {
        let word = parse_word(raw)?;
        let coordinates = sg.coordinates(&word).ok();
        answers.push(json!({
            "word": word.factors(),
            "member": sg.contains(&word),
            "coordinates": coordinates,
        }));
    }
    let mut doc = report::subgroup(&sg);
    doc["queries"] = json!(answers);
    Ok(doc)
}

fn rank_or_auto(sg: &Subgroup, rank: Option<usize>) -> usize {
    rank.unwrap_or(sg.graph().max_label() as usize)
}

fn index(base: &str, rank: Option<usize>) -> Result<Value> {
    let sg = Subgroup::from_base(parse_base(base)?);
    let rank = rank_or_auto(&sg, rank);
    Ok(json!({
        "rank": rank,
        "index": report::index(sg.index(rank)),
        "vertices": sg.graph().size(),
    }))
}

fn cosets(base: &str, rank: Option<usize>) -> Result<Value> {
    let sg = Subgroup::from_base(parse_base(base)?);
    let rank = rank_or_auto(&sg, rank);
    let reps = sg
        .cosets(rank)
        .with_context(|| format!("cosets of base {base}"))?;
    Ok(json!({
        "rank": rank,
        "index": reps.len(),
        "representatives": report::words(&reps),
    }))
}

fn intersect(left: &str, right: &str) -> Result<Value> {
    let h = Subgroup::from_base(parse_base(left)?);
    let k = Subgroup::from_base(parse_base(right)?);
    let i = Subgroup::intersection(&h, &k);
    tracing::info!(
        left = h.graph().size(),
        right = k.graph().size(),
        result = i.graph().size(),
        "intersect"
    );
    Ok(report::subgroup(&i))
}

fn fringe(base: &str, max_vertices: usize) -> Result<Value> {
    let sg = Subgroup::from_base(parse_base(base)?);
    let found = sg
        .fringe(FringeCfg { max_vertices })
        .with_context(|| format!("fringe of base {base}"))?;
    let members: Vec<Value> = found.iter().map(report::subgroup).collect();
    Ok(json!({
        "vertices": sg.graph().size(),
        "count": members.len(),
        "subgroups": members,
    }))
}

fn whitehead(pivot: Symbol, cut: &str, words: &[String]) -> Result<Value> {
    anyhow::ensure!(
        pivot != 0 && pivot != Symbol::MIN,
        "pivot must be a non-zero invertible symbol"
    );
    let cut: Vec<Symbol> =
        serde_json::from_str(cut).with_context(|| format!("parsing cut set {cut:?}"))?;
    anyhow::ensure!(
        !cut.contains(&pivot) && !cut.contains(&-pivot),
        "cut set must not contain the pivot or its inverse"
    );
    let phi = WhiteheadAutomorphism::new(pivot, cut);
    let base = words
        .iter()
        .map(|w| parse_word(w))
        .collect::<Result<Vec<_>>>()?;
    let image = phi.apply_all(&base);
    Ok(json!({
        "pivot": pivot,
        "cut": phi.cut.iter().collect::<Vec<_>>(),
        "words": report::words(&base),
        "images": report::words(&image),
        "cyclic_length": [cyclic_length(&base), cyclic_length(&image)],
    }))
}

fn random(tok: ReplayToken, count: usize, cfg: WordCfg) -> Result<Value> {
    anyhow::ensure!(cfg.rank >= 1, "rank must be positive");
    let sg = Subgroup::from_base(draw_base(cfg, count, tok));
    tracing::info!(seed = tok.seed, index = tok.index, count, "random base");
    let mut doc = report::subgroup(&sg);
    doc["replay"] = json!({ "seed": tok.seed, "index": tok.index });
    Ok(doc)
}
