use aabb_physics::{Entity, MovementIntent, Rgba, Scene, SceneConfig, Visual};
use ggez::event::{self, EventHandler};
use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh, Rect, Text};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameResult};
use log::debug;

struct MainState {
    scene: Scene,
    target_fps: u32,
    highlight_overlaps: bool,
}

impl MainState {
    fn new(config: &SceneConfig, highlight_overlaps: bool) -> MainState {
        MainState {
            scene: config.build_scene(),
            target_fps: config.window.target_fps,
            highlight_overlaps,
        }
    }
}

fn to_color(c: Rgba) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

/// Arrow keys or WASD.
fn read_intent(ctx: &Context) -> MovementIntent {
    let pressed =
        |a: KeyCode, b: KeyCode| ctx.keyboard.is_key_pressed(a) || ctx.keyboard.is_key_pressed(b);
    MovementIntent {
        up: pressed(KeyCode::Up, KeyCode::W),
        down: pressed(KeyCode::Down, KeyCode::S),
        left: pressed(KeyCode::Left, KeyCode::A),
        right: pressed(KeyCode::Right, KeyCode::D),
    }
}

fn entity_mesh(ctx: &Context, entity: &Entity, visual: Visual) -> GameResult<Mesh> {
    let body = &entity.body;
    let color = to_color(visual.color());
    match visual {
        Visual::Outline { thickness, .. } => {
            let bounds = body.world_bounds();
            let size = bounds.max - bounds.min;
            Mesh::new_rectangle(
                ctx,
                DrawMode::stroke(thickness),
                Rect::new(
                    bounds.min.x as f32,
                    bounds.min.y as f32,
                    size.x as f32,
                    size.y as f32,
                ),
                color,
            )
        }
        Visual::FilledCircle { radius, .. } => Mesh::new_circle(
            ctx,
            DrawMode::fill(),
            GVec2::new(body.position.x as f32, body.position.y as f32),
            radius,
            0.1,
            color,
        ),
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.target_fps) {
            let intent = read_intent(ctx);
            let report = self.scene.update(intent);
            if let Some(pickup) = report.consumed {
                debug!("consumed pickup at {:?}", pickup.body.position);
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::BLACK);

        let hits = if self.highlight_overlaps {
            self.scene.overlapping_walls()
        } else {
            Vec::new()
        };

        for (idx, wall) in self.scene.walls.iter().enumerate() {
            let visual = if hits.contains(&idx) {
                wall.visual.with_color(Rgba::RED)
            } else {
                wall.visual
            };
            let mesh = entity_mesh(ctx, wall, visual)?;
            canvas.draw(&mesh, DrawParam::new());
        }

        for pickup in &self.scene.pickups {
            let mesh = entity_mesh(ctx, pickup, pickup.visual)?;
            canvas.draw(&mesh, DrawParam::new());
        }

        let player = &self.scene.player;
        let mesh = entity_mesh(ctx, player, player.visual)?;
        canvas.draw(&mesh, DrawParam::new());

        if self.scene.pickups_collected() > 0 || !self.scene.pickups.is_empty() {
            let hud = Text::new(format!(
                "Collected: {}  Remaining: {}",
                self.scene.pickups_collected(),
                self.scene.pickups.len()
            ));
            canvas.draw(
                &hud,
                DrawParam::new()
                    .dest(GVec2::new(10.0, 10.0))
                    .color(Color::WHITE),
            );
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(
        &mut self,
        ctx: &mut Context,
        input: KeyInput,
        _repeated: bool,
    ) -> GameResult {
        if input.keycode == Some(KeyCode::Escape) {
            ctx.request_quit();
        }
        Ok(())
    }
}

pub fn run_visual(config: SceneConfig, highlight_overlaps: bool) -> GameResult {
    let cb = ggez::ContextBuilder::new("collision_demo", "author")
        .window_setup(ggez::conf::WindowSetup::default().title(&config.window.title))
        .window_mode(
            ggez::conf::WindowMode::default().dimensions(config.window.width, config.window.height),
        );

    let (ctx, event_loop) = cb.build()?;
    let state = MainState::new(&config, highlight_overlaps);
    event::run(ctx, event_loop, state)
}
