//! Print the classification of every edge in a house description.
//!
//! Usage:
//!   cargo run -p floorplan --example classify_edges -- data/house.yaml

use floorplan::{classify_room, load_house, MatchTolerance};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/house.yaml".to_string());
    let house = match load_house(&path) {
        Ok(house) => house,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    for floor in &house.floors {
        println!("{}", floor.title());
        for room in &floor.rooms {
            for edge in classify_room(room, MatchTolerance::Exact) {
                println!(
                    "  {:<12} #{:<2} ({}, {}) -> ({}, {}): {}",
                    room.id,
                    edge.index,
                    edge.from.x,
                    edge.from.y,
                    edge.to.x,
                    edge.to.y,
                    edge.kind.label()
                );
            }
        }
    }
}
