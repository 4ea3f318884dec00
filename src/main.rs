use anyhow::{Context, Result};
use balanced_bst::Tree;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "balanced-bst",
    about = "Build a balanced BST, push it out of balance, then rebalance it"
)]
struct Cli {
    /// How many random values to start with.
    #[arg(long, default_value_t = 10)]
    len: usize,
    /// Random values are drawn from `0..max`.
    #[arg(long, default_value_t = 100)]
    max: i32,
    /// Seed for the random values. A fresh seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Values inserted after the initial build to unbalance the tree.
    #[arg(long, value_delimiter = ',', default_values_t = [150, 200, 250, 300])]
    insert: Vec<i32>,
    /// Explicit starting values (e.g. "5,3,8,3,1") used instead of a random array.
    #[arg(long)]
    values: Option<String>,
}

#[derive(Debug, Error)]
enum ConfigError {
    #[error("--max must be positive, got {0}")]
    EmptyRange(i32),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut tree: Tree<i32> = match &cli.values {
        Some(values) => values.parse::<Tree<i32>>().context("failed to parse --values")?,
        None => {
            let values = random_array(cli.len, cli.max, cli.seed)?;
            println!("Initial array: {values:?}");
            Tree::build(values)
        }
    };

    println!("\nInitial tree:");
    report(&tree);

    for value in &cli.insert {
        if !tree.insert(*value) {
            info!(value, "value already present");
        }
    }

    println!("\nAfter inserts:");
    print!("{tree}");
    println!("Is balanced? {}", tree.is_balanced());

    tree.rebalance();

    println!("\nAfter rebalance:");
    report(&tree);

    Ok(())
}

fn random_array(len: usize, max: i32, seed: Option<u64>) -> Result<Vec<i32>, ConfigError> {
    if max <= 0 {
        return Err(ConfigError::EmptyRange(max));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok((0..len).map(|_| rng.gen_range(0..max)).collect())
}

fn report(tree: &Tree<i32>) {
    print!("{tree}");
    println!("Is balanced? {}", tree.is_balanced());
    println!("Height: {}", Tree::height(tree.root()));
    println!("Level-order: {:?}", tree.level_order());
    println!("Preorder: {:?}", tree.preorder());
    println!("Inorder: {:?}", tree.inorder());
    println!("Postorder: {:?}", tree.postorder());
}
