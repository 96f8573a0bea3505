//! 3D playback of a solution using kiss3d.

use kiss3d::prelude::*;

use bloxorz::{BlockState, Map, Marker, Orientation, Solution};

/// Height of a floor tile.
const TILE_HEIGHT: f32 = 0.1;
/// Tile and block edge length, slightly under 1.0 for visible gaps.
const TILE_SIZE: f32 = 0.95;

fn tile_color(marker: Marker) -> Color {
    match marker {
        Marker::Target => Color::new(1.0, 0.6, 0.2, 1.0), // orange
        Marker::BlockStart => Color::new(0.5, 0.7, 0.5, 1.0), // pale green
        _ => Color::new(0.6, 0.6, 0.6, 1.0),               // grey
    }
}

fn block_color() -> Color {
    Color::new(0.7, 0.2, 0.2, 1.0) // brick red
}

/// Maps grid cells to world space.
///
/// Coordinate conventions:
/// - Grid x maps to world X, grid y (rows, growing downwards) maps to world Z.
/// - The floor sits at Y = 0 and the map is centered on the origin.
struct Layout {
    offset_x: f32,
    offset_z: f32,
}

impl Layout {
    fn new(map: &Map) -> Self {
        Self {
            offset_x: -(map.width() as f32 - 1.0) / 2.0,
            offset_z: -(map.height() as f32 - 1.0) / 2.0,
        }
    }

    fn cell(&self, x: f32, y: f32, height: f32) -> Vec3 {
        Vec3::new(x + self.offset_x, height, y + self.offset_z)
    }
}

/// Adds one tile per passable cell.
fn build_floor(scene: &mut SceneNode3d, map: &Map, layout: &Layout) -> Vec<SceneNode3d> {
    let mut tiles = Vec::new();
    for y in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            let Some(marker) = map.get((x, y)).filter(|m| m.is_passable()) else {
                continue;
            };
            let node = scene
                .add_cube(TILE_SIZE, TILE_HEIGHT, TILE_SIZE)
                .set_color(tile_color(marker))
                .set_position(layout.cell(x as f32, y as f32, -TILE_HEIGHT / 2.0));
            tiles.push(node);
        }
    }
    tiles
}

/// Adds the block as a single cuboid spanning its footprint.
fn build_block(scene: &mut SceneNode3d, state: &BlockState, layout: &Layout) -> SceneNode3d {
    let (width, depth) = state.orientation.extent();
    let height = match state.orientation {
        Orientation::Standing => 2.0,
        _ => 1.0,
    };

    // centre of the footprint, raised to sit on the floor
    let (x, y) = state.anchor;
    let center_x = x as f32 + (width as f32 - 1.0) / 2.0;
    let center_y = y as f32 + (depth as f32 - 1.0) / 2.0;

    scene
        .add_cube(
            width as f32 - (1.0 - TILE_SIZE),
            height - (1.0 - TILE_SIZE),
            depth as f32 - (1.0 - TILE_SIZE),
        )
        .set_color(block_color())
        .set_position(layout.cell(center_x, center_y, height / 2.0))
}

/// All states along the solution, starting position first.
fn states_along(map: &Map, solution: &Solution) -> Vec<BlockState> {
    let start = BlockState::standing(map.start());
    std::iter::once(start)
        .chain(solution.moves.iter().scan(start, |state, &direction| {
            *state = state.step(direction);
            Some(*state)
        }))
        .collect()
}

fn title(step: usize, solution: &Solution) -> String {
    let done = solution.to_string();
    format!(
        "Move {}/{} [{}] - [Left/Right] step, [R] reset",
        step,
        solution.len(),
        &done[..step]
    )
}

/// Shows the map and lets the user step the block through the solution.
pub fn display(map: Map, solution: Solution) {
    pollster::block_on(display_async(map, solution));
}

async fn display_async(map: Map, solution: Solution) {
    let states = states_along(&map, &solution);
    let last_step = states.len() - 1;
    let mut current_step = 0;

    let mut window = Window::new(&title(current_step, &solution)).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(map.width().max(map.height()) as f32 * 1.5);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 10.0, 5.0));

    let layout = Layout::new(&map);
    let _floor = build_floor(&mut scene, &map, &layout);
    let mut block = build_block(&mut scene, &states[current_step], &layout);

    // whether the block must be rebuilt (after a step change)
    let mut needs_rebuild = false;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::Right if current_step < last_step => {
                            current_step += 1;
                            needs_rebuild = true;
                        }
                        Key::Left if current_step > 0 => {
                            current_step -= 1;
                            needs_rebuild = true;
                        }
                        Key::R => {
                            current_step = 0;
                            needs_rebuild = true;
                        }
                        _ => {}
                    }
                }
            }
        }

        if needs_rebuild {
            block.remove();
            block = build_block(&mut scene, &states[current_step], &layout);
            window.set_title(&title(current_step, &solution));
            needs_rebuild = false;
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_along_ends_on_target() {
        let map = Map::parse(&["B11X"]).unwrap();
        let solution: Solution = "RR".parse().unwrap();
        let states = states_along(&map, &solution);

        assert_eq!(states.len(), 3);
        assert_eq!(states[0], BlockState::standing((0, 0)));
        assert_eq!(states[1], BlockState::new((1, 0), Orientation::LyingX));
        assert!(states[2].is_standing_on(map.target()));
    }

    #[test]
    fn test_title_shows_moves_so_far() {
        let solution: Solution = "RRD".parse().unwrap();
        assert_eq!(
            title(2, &solution),
            "Move 2/3 [RR] - [Left/Right] step, [R] reset"
        );
    }
}
