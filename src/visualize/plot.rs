// src/visualize/plot.rs
use plotters::prelude::*;

use crate::graph::debruijn::DebruijnGraph;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;

/// Render the graph as a PNG snapshot.
///
/// Nodes sit on a circle in lexical fragment order, so the same graph always
/// renders the same image. Edges heavier than 3 are drawn solid and dark,
/// lighter ones pale.
pub fn draw_graph(graph: &DebruijnGraph, output: &str) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(output, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let nodes = graph.nodes_lexical();
    if nodes.is_empty() {
        root.present()?;
        return Ok(());
    }

    let cx = f64::from(WIDTH) / 2.0;
    let cy = f64::from(HEIGHT) / 2.0;
    let radius = cy - 40.0;
    let position = |rank: usize| {
        let angle = rank as f64 / nodes.len() as f64 * std::f64::consts::TAU;
        (
            (cx + radius * angle.cos()) as i32,
            (cy + radius * angle.sin()) as i32,
        )
    };

    let rank_of = |id| nodes.iter().position(|&n| n == id).unwrap_or(0);

    for (from, to, weight) in graph.edges() {
        let points = vec![position(rank_of(from)), position(rank_of(to))];
        if weight > 3 {
            root.draw(&PathElement::new(points, BLACK.stroke_width(2)))?;
        } else {
            root.draw(&PathElement::new(points, BLUE.mix(0.4).stroke_width(1)))?;
        }
    }

    for rank in 0..nodes.len() {
        root.draw(&Circle::new(position(rank), 3, RED.filled()))?;
    }

    root.present()?;
    Ok(())
}
