//! Trains a two-input perceptron on the AND gate and prints its predictions.
//!
//! Run with: `cargo run --example perceptron_and`
//! Set `RUST_LOG=debug` to see per-epoch progress.

use densevec::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = PerceptronConfig::default()
        .with_learning_rate(0.01)
        .with_threshold(1.0)
        .with_max_epochs(10_000)
        .with_random_state(42);
    let mut perceptron = Perceptron::with_config(2, config)?;
    println!("initial  {perceptron}");

    let inputs = [
        Vector::from_values(2, &[0.0, 0.0])?,
        Vector::from_values(2, &[0.0, 1.0])?,
        Vector::from_values(2, &[1.0, 0.0])?,
        Vector::from_values(2, &[1.0, 1.0])?,
    ];
    let targets = [0.0, 0.0, 0.0, 1.0];

    let summary = perceptron.fit(&inputs, &targets)?;
    println!("trained  {perceptron}");
    println!(
        "epochs: {} converged: {} accuracy: {:.2}",
        summary.epochs,
        summary.converged,
        perceptron.score(&inputs, &targets)?
    );

    println!("weights:");
    perceptron.weights().print();

    for input in &inputs {
        println!("prediction for {input} -> {}", perceptron.predict(input)?);
    }

    Ok(())
}
