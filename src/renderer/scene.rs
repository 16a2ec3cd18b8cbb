//! Scene drawing: background, ground, player, obstacles

use glam::Vec2;

use super::{Surface, colors};
use crate::consts::PLAYER_CORNER_RADIUS;
use crate::sim::{Aabb, Session};

/// Ground line thickness
const GROUND_LINE_WIDTH: f32 = 2.0;
/// Eye square size and offset from the player's top-right corner
const EYE_SIZE: f32 = 4.0;
const EYE_INSET: Vec2 = Vec2::new(12.0, 10.0);

/// Redraw the whole frame from the session
pub fn draw(session: &Session, surface: &mut impl Surface) {
    let size = surface.size();
    surface.fill_rect(Aabb::new(0.0, 0.0, size.x, size.y), colors::BACKGROUND);

    let ground_y = session.tuning.ground_y + 1.0;
    surface.line(
        Vec2::new(0.0, ground_y),
        Vec2::new(size.x, ground_y),
        GROUND_LINE_WIDTH,
        colors::GROUND,
    );

    let player = session.player.bounds;
    surface.fill_round_rect(player, PLAYER_CORNER_RADIUS, colors::PLAYER);
    surface.fill_rect(
        Aabb::new(
            player.right() - EYE_INSET.x,
            player.top() + EYE_INSET.y,
            EYE_SIZE,
            EYE_SIZE,
        ),
        colors::PLAYER_EYE,
    );

    for obstacle in &session.obstacles {
        surface.fill_rect(obstacle.bounds, colors::OBSTACLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Color;
    use crate::sim::Obstacle;
    use crate::tuning::Tuning;

    #[derive(Debug, PartialEq)]
    enum Cmd {
        Rect(Aabb),
        RoundRect(Aabb),
        Line(Vec2, Vec2),
    }

    struct Recorder(Vec<Cmd>);

    impl Surface for Recorder {
        fn size(&self) -> Vec2 {
            Vec2::new(640.0, 200.0)
        }

        fn fill_rect(&mut self, rect: Aabb, _color: Color) {
            self.0.push(Cmd::Rect(rect));
        }

        fn fill_round_rect(&mut self, rect: Aabb, _radius: f32, _color: Color) {
            self.0.push(Cmd::RoundRect(rect));
        }

        fn line(&mut self, from: Vec2, to: Vec2, _width: f32, _color: Color) {
            self.0.push(Cmd::Line(from, to));
        }
    }

    #[test]
    fn test_draw_order() {
        let mut session = Session::new(1, Tuning::default(), 0);
        let ob = Aabb::new(300.0, 110.0, 20.0, 40.0);
        session.obstacles.push(Obstacle { bounds: ob });

        let mut surface = Recorder(Vec::new());
        draw(&session, &mut surface);

        assert_eq!(
            surface.0,
            vec![
                Cmd::Rect(Aabb::new(0.0, 0.0, 640.0, 200.0)),
                Cmd::Line(Vec2::new(0.0, 151.0), Vec2::new(640.0, 151.0)),
                Cmd::RoundRect(session.player.bounds),
                Cmd::Rect(Aabb::new(88.0, 120.0, 4.0, 4.0)),
                Cmd::Rect(ob),
            ]
        );
    }
}
