//! Print where a tooltip lands for every placement token, around a host close
//! to the top-left corner of the viewport.
//!
//! Run with: RUST_LOG=debug cargo run --example placement_table --features tracing

use glam::dvec2;
use perch::dom::memory::{Element, MemoryDocument};
use perch::{Document, PositionOptions, Rect, position_element_at, position_elements};

const TOKENS: [&str; 12] = [
    "top", "top-left", "top-right",
    "bottom", "bottom-left", "bottom-right",
    "left", "left-top", "left-bottom",
    "right", "right-top", "right-bottom",
];

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut doc = MemoryDocument::new(1280.0, 720.0);
    let root = doc.root();
    let host = doc.append(root, Element::new("button").at(Rect::new(12.0, 16.0, 80.0, 32.0)));
    let tooltip = doc.append(root, Element::new("tooltip").at(Rect::new(0.0, 0.0, 140.0, 48.0)));
    let options = PositionOptions::new().append_to_body(true);

    println!("{:<14} {:>16} {:>22}", "token", "as requested", "auto");
    for token in TOKENS {
        let fixed = position_elements(&doc, host, tooltip, token, options)?;
        let auto = position_elements(&doc, host, tooltip, &format!("auto {token}"), options)?;
        println!(
            "{:<14} {:>16} {:>22}",
            token,
            format!("({}, {})", fixed.top, fixed.left),
            format!("({}, {}) {}", auto.top, auto.left, auto.placement),
        );
    }

    let menu = doc.append(root, Element::new("menu").at(Rect::new(0.0, 0.0, 180.0, 240.0)));
    let pos = position_element_at(&doc, dvec2(1200.0, 650.0), menu, "auto bottom-left")?;
    println!("\ncontext menu at (1200, 650): ({}, {}) {}", pos.top, pos.left, pos.placement);

    Ok(())
}
