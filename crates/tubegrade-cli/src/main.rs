//! tubegrade - Video catalog and comment quality scoring CLI
//!
//! A small catalog tool that scores a video's comments with a keyword
//! sentiment heuristic and turns the score into a recommendation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a demonstration catalog
//! tubegrade sample --output catalog.json
//!
//! # Score a video's comments
//! tubegrade analyze vid-ferrets --catalog catalog.json
//!
//! # Score ad-hoc comment text
//! tubegrade score "good video" "the worst"
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
