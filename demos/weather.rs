//! Grows a C4.5 tree on the weather dataset and prints it.
//!
//! ```text
//! RUST_LOG=c45=debug cargo run --example weather
//! ```
use c45::prelude::*;
use colored::Colorize;
use tracing_subscriber::EnvFilter;


fn weather() -> Result<(Dataset, Vec<&'static str>)> {
    let feature_labels = vec!["weather", "humidity", "israin"];
    let dataset = Dataset::new(vec![
        vec!["sunny",  "70", "yes", "play"],
        vec!["sunny",  "90", "yes", "ntpl"],
        vec!["sunny",  "85", "no",  "ntpl"],
        vec!["sunny",  "95", "no",  "ntpl"],
        vec!["sunny",  "70", "no",  "play"],
        vec!["cloudy", "78", "no",  "play"],
        vec!["cloudy", "65", "yes", "play"],
        vec!["cloudy", "75", "no",  "play"],
        vec!["rainy",  "80", "yes", "ntpl"],
        vec!["rainy",  "70", "yes", "ntpl"],
        vec!["rainy",  "80", "no",  "play"],
        vec!["rainy",  "80", "no",  "play"],
        vec!["rainy",  "96", "no",  "play"],
    ])?;
    Ok((dataset, feature_labels))
}


fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (dataset, feature_labels) = weather()?;

    let learner = DecisionTreeBuilder::new().build();
    println!("{learner}");

    let f = learner.fit(&dataset, &feature_labels)?;

    println!("{}", "Decision tree:".bold().red());
    f.print_tree();

    let query = ["sunny", "70", "no"];
    let answer = f.predict(&query)?.unwrap_or("unknown");
    println!("\n{} {query:?} => {}", "Predict".bold().cyan(), answer.green());

    Ok(())
}
