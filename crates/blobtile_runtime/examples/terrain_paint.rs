//! Paints a small map with one auto-tile kind, prints the variant mask each
//! cell selects, then resolves one cell to its atlas sprite.
//!
//! Run with: `cargo run -p blobtile_runtime --example terrain_paint`

use std::collections::HashSet;

use image::{Rgba, RgbaImage};

use blobtile_runtime::{
    AutoTile, RefreshSink, SharedVariantTable, TileGrid, TileKindId, VariantTable,
};
use blobtile_synth::SynthesizedTileset;

const MAP: [&str; 6] = [
    "..####..",
    ".#####..",
    ".##..#..",
    ".#####..",
    "..###...",
    "........",
];

struct MapGrid {
    kind: TileKindId,
    cells: HashSet<(i32, i32)>,
}

impl TileGrid for MapGrid {
    fn occupant(&self, x: i32, y: i32) -> Option<TileKindId> {
        self.cells.contains(&(x, y)).then_some(self.kind)
    }
}

struct PrintSink;

impl RefreshSink for PrintSink {
    fn request_recompute(&mut self, x: i32, y: i32) {
        println!("  recompute requested at ({}, {})", x, y);
    }
}

fn main() {
    // Synthesize a tileset from a flat-colored stand-in strip and install
    // it into a shared table.
    let tileset = SynthesizedTileset::from_strip("demo", &demo_strip(16))
        .expect("demo strip is well-formed");
    let table = SharedVariantTable::empty();
    table.install(VariantTable::from_manifest(&tileset.manifest).expect("manifest is complete"));

    let tile = AutoTile::new("Demo".to_string(), table);

    // Rows of MAP are printed top first, so row 0 gets the highest y.
    let mut cells = HashSet::new();
    for (row, line) in MAP.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch == '#' {
                cells.insert((col as i32, (MAP.len() - 1 - row) as i32));
            }
        }
    }
    let grid = MapGrid { kind: tile.id, cells };

    println!("Variant masks:");
    for row in 0..MAP.len() {
        let y = (MAP.len() - 1 - row) as i32;
        let mut line = String::new();
        for x in 0..MAP[0].len() as i32 {
            if grid.occupant(x, y).is_some() {
                line.push_str(&format!("{:>4}", tile.select_variant(&grid, x, y).bits()));
            } else {
                line.push_str("   .");
            }
        }
        println!("{}", line);
    }

    let sprite = tile.sprite(&grid, 2, 3).expect("cell (2, 3) is painted");
    println!(
        "\nCell (2, 3) renders '{}' from atlas rect ({}, {}) {}x{}",
        sprite.name, sprite.rect.x, sprite.rect.y, sprite.rect.width, sprite.rect.height
    );

    println!("\nEditing (5, 2) dirties its same-kind neighborhood:");
    tile.refresh_neighborhood(&grid, &mut PrintSink, 5, 2);
}

/// Five flat-colored square tiles side by side.
fn demo_strip(tile: u32) -> RgbaImage {
    let colors = [
        Rgba([60, 160, 60, 255]),
        Rgba([80, 180, 80, 255]),
        Rgba([100, 200, 100, 255]),
        Rgba([120, 220, 120, 255]),
        Rgba([140, 240, 140, 255]),
    ];
    let mut strip = RgbaImage::new(tile * 5, tile);
    for (index, color) in colors.iter().enumerate() {
        for dy in 0..tile {
            for dx in 0..tile {
                strip.put_pixel(index as u32 * tile + dx, dy, *color);
            }
        }
    }
    strip
}
