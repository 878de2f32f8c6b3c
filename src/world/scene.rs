use log::{debug, info, trace};

use super::movement::{consume_first_pickup, move_and_collide, Collider, MoveOutcome};
use crate::collision::{test_aabb_overlap_with, CollisionManifold, NormalPolicy};
use crate::common::Visual;
use crate::input::MovementIntent;
use crate::objects::Body;

/// Per-frame movement speed.
pub const DEFAULT_SPEED: f64 = 5.0;

/// A body together with the visual that represents it. Removing an entity
/// removes both at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub body: Body,
    pub visual: Visual,
}

impl Entity {
    pub fn new(body: Body, visual: Visual) -> Self {
        Self { body, visual }
    }
}

impl Collider for Entity {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// What happened during one [`Scene::update`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub movement: MoveOutcome,
    pub consumed: Option<Entity>,
}

/// A player-controlled entity moving among walls and pickups.
///
/// All collections are owned here and handed explicitly to the movement
/// functions each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub player: Entity,
    pub walls: Vec<Entity>,
    pub pickups: Vec<Entity>,
    /// Distance moved per tick along each requested direction.
    pub speed: f64,
    /// When false, walls never block movement; they are only overlap-tested.
    pub solid_walls: bool,
    pub normal_policy: NormalPolicy,
    pickups_collected: usize,
}

impl Scene {
    /// Creates a scene with only the player in it.
    pub fn new(player: Entity) -> Self {
        Self {
            player,
            walls: Vec::new(),
            pickups: Vec::new(),
            speed: DEFAULT_SPEED,
            solid_walls: true,
            normal_policy: NormalPolicy::default(),
            pickups_collected: 0,
        }
    }

    /// Adds a wall and returns its index.
    pub fn add_wall(&mut self, wall: Entity) -> usize {
        let index = self.walls.len();
        self.walls.push(wall);
        index
    }

    /// Adds a pickup and returns its current index.
    pub fn add_pickup(&mut self, pickup: Entity) -> usize {
        let index = self.pickups.len();
        self.pickups.push(pickup);
        index
    }

    /// Number of pickups consumed since the scene was created.
    pub fn pickups_collected(&self) -> usize {
        self.pickups_collected
    }

    /// Advances the scene by one tick: resolve movement per axis against the
    /// walls, then consume at most one overlapping pickup.
    pub fn update(&mut self, intent: MovementIntent) -> StepReport {
        let displacement = intent.displacement(self.speed);
        if !intent.is_idle() {
            trace!("intent {:?} -> displacement {:?}", intent, displacement);
        }

        let movement = if self.solid_walls {
            move_and_collide(&mut self.player.body, displacement, &self.walls)
        } else {
            let no_walls: &[Entity] = &[];
            move_and_collide(&mut self.player.body, displacement, no_walls)
        };

        if movement.is_blocked() {
            debug!(
                "player blocked at ({:.1}, {:.1}): {:?}",
                self.player.body.position.x, self.player.body.position.y, movement
            );
        }

        let consumed = consume_first_pickup(&self.player.body, &mut self.pickups);
        if consumed.is_some() {
            self.pickups_collected += 1;
            info!(
                "pickup collected ({} so far, {} remaining)",
                self.pickups_collected,
                self.pickups.len()
            );
        }

        StepReport { movement, consumed }
    }

    /// Indices of the walls the player currently overlaps.
    pub fn overlapping_walls(&self) -> Vec<usize> {
        self.wall_contacts().into_iter().map(|(idx, _)| idx).collect()
    }

    /// Collision details between the player and every wall it overlaps,
    /// paired with the wall index.
    pub fn wall_contacts(&self) -> Vec<(usize, CollisionManifold<'_>)> {
        self.walls
            .iter()
            .enumerate()
            .filter_map(|(idx, wall)| {
                test_aabb_overlap_with(&self.player.body, &wall.body, self.normal_policy)
                    .map(|manifold| (idx, manifold))
            })
            .collect()
    }
}
