//! Push the unit square through a perspective map and locate its extremes.
//!
//! Usage:
//!   RUST_LOG=trace cargo run -p npkit --example projective_square
//!
//! The last corner is sent to infinity on purpose, so the unchecked transform
//! prints `inf` for it and the checked one reports the row.

use nalgebra::{matrix, vector};
use ndarray::Array1;
use npkit::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // w = 2 - x - y vanishes at the corner (1, 1)
    let m = matrix![1.0, 0.0, 0.0; 0.0, 1.0, 0.0; -1.0, -1.0, 2.0];
    let square = [
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0],
    ];

    let mapped = perspective_multiply(&m, &square);
    for (p, q) in square.iter().zip(&mapped) {
        println!("({:>4.1}, {:>4.1}) -> ({:>6.3}, {:>6.3})", p.x, p.y, q.x, q.y);
    }
    match try_perspective_multiply(&m, &square, ProjCfg::default()) {
        Ok(_) => println!("all corners finite"),
        Err(err) => println!("checked transform: {err}"),
    }

    let finite: Vec<bool> = mapped.iter().map(|q| q.x.is_finite()).collect();
    println!("first corner at infinity: {:?}", find_first_false(&finite));

    let xs = Array1::from_iter(mapped[..3].iter().map(|q| q.x));
    match (nd_argmin(&xs), nd_argmax(&xs)) {
        (Ok(lo), Ok(hi)) => println!("finite corners: min x at {lo}, max x at {hi}"),
        (Err(err), _) | (_, Err(err)) => println!("extremum failed: {err}"),
    }
}
