//! Per-frame motion and collision
//!
//! Screen coordinates: origin top-left, y grows downward. Velocities are in
//! pixels per frame, `delta` is the frame count since the last step.

use super::state::{Ball, GameEvent, Paddle};
use crate::consts::*;

/// What happened to the ball during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    InPlay,
    /// Crossed the left edge
    Lost,
}

/// True when `pos` (looking `speed` pixels ahead) touches the top edge
#[inline]
pub fn is_top_border(pos: f32, speed: f32) -> bool {
    pos - speed.abs() <= 0.0
}

#[inline]
pub fn is_bottom_border(pos: f32, speed: f32) -> bool {
    pos + speed.abs() >= HEIGHT
}

#[inline]
pub fn is_left_border(pos: f32, speed: f32) -> bool {
    pos - speed.abs() <= 0.0
}

#[inline]
pub fn is_right_border(pos: f32, speed: f32) -> bool {
    pos + speed.abs() >= WIDTH
}

/// Advance the paddle: border stops, damping, speed cap, integration
pub fn move_paddle(paddle: &mut Paddle, delta: f32) {
    let vy = paddle.vel.y;

    paddle.vel.y = if is_top_border(paddle.pos.y, 0.0) && vy < 0.0 {
        0.0
    } else if is_bottom_border(paddle.pos.y + paddle.height(), 0.0) && vy > 0.0 {
        0.0
    } else if vy.abs() < STOP_EPSILON {
        0.0
    } else if vy.abs() < MAX_SPEED {
        vy * DAMPING
    } else {
        vy.signum() * MAX_SPEED
    };

    paddle.pos.y += paddle.vel.y * delta;
}

/// Does the ball cross the paddle's x-line during this step with vertical
/// overlap?
///
/// The tested stretch runs from one frame past the previous position to one
/// frame past the current one, so consecutive steps tile the ball's path
/// whatever their deltas. Vertically both boxes are projected one frame
/// ahead, widened by the travel of any frames beyond the first.
pub fn ball_paddle_hit(paddle: &Paddle, ball: &Ball, delta: f32) -> bool {
    let x1 = ball.pos.x - ball.vel.x * (delta - 1.0);
    let x2 = ball.pos.x + ball.vel.x;
    let crosses = paddle.pos.x <= x1 && paddle.pos.x >= x2;

    let extra = (delta - 1.0).max(0.0);
    let (ball_top, ball_bottom) = swept_span(ball.pos.y + ball.vel.y, ball.vel.y * extra, ball.size());
    let (paddle_top, paddle_bottom) = swept_span(
        paddle.pos.y + paddle.vel.y,
        paddle.vel.y * extra,
        paddle.height(),
    );

    crosses && ball_bottom >= paddle_top && ball_top <= paddle_bottom
}

/// Vertical extent of a box of `height` whose top moved `travel` to reach `top`
fn swept_span(top: f32, travel: f32, height: f32) -> (f32, f32) {
    let start = top - travel;
    (start.min(top), start.max(top) + height)
}

/// Advance the ball and resolve walls and paddle
///
/// Each wall only reflects a ball moving toward it, so a ball still inside a
/// bounce zone on the next frame is not inverted a second time. The paddle is
/// checked before the left edge: a long step may carry a blocked ball past the
/// paddle line, in which case it is mirrored back in front of the paddle.
pub fn move_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    delta: f32,
    events: &mut Vec<GameEvent>,
) -> BallOutcome {
    ball.pos += ball.vel * delta;
    let size = ball.size();

    let hits_top = is_top_border(ball.pos.y, ball.vel.y) && ball.vel.y < 0.0;
    let hits_bottom = is_bottom_border(ball.pos.y + size, ball.vel.y) && ball.vel.y > 0.0;
    if hits_top || hits_bottom {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::Bounce);
    }

    if is_right_border(ball.pos.x + size, ball.vel.x) && ball.vel.x > 0.0 {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::Bounce);
    }

    if ball_paddle_hit(paddle, ball, delta) {
        ball.vel.x = -ball.vel.x;
        if ball.pos.x < paddle.pos.x {
            ball.pos.x = 2.0 * paddle.pos.x - ball.pos.x;
        }
        events.push(GameEvent::Bounce);
        return BallOutcome::InPlay;
    }

    if is_left_border(ball.pos.x, ball.vel.x) {
        return BallOutcome::Lost;
    }

    BallOutcome::InPlay
}

/// Scale the ball's velocity by the growth factor, each axis capped at
/// [`MAX_BALL_SPEED`] with its sign kept
pub fn grow_ball_speed(ball: &mut Ball) {
    let grown = ball.vel * BALL_SPEED_INCREASE;
    ball.vel = grown.clamp(
        glam::Vec2::splat(-MAX_BALL_SPEED),
        glam::Vec2::splat(MAX_BALL_SPEED),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn paddle_at(y: f32, vy: f32) -> Paddle {
        Paddle {
            pos: Vec2::new(PADDLE_X, y),
            vel: Vec2::new(0.0, vy),
        }
    }

    fn ball(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: BALL_RADIUS,
        }
    }

    proptest! {
        #[test]
        fn prop_top_clamp(y in -50.0f32..=0.0, vy in -20.0f32..-0.0001, delta in 0.1f32..6.0) {
            let mut paddle = paddle_at(y, vy);
            move_paddle(&mut paddle, delta);
            prop_assert_eq!(paddle.vel.y, 0.0);
            prop_assert_eq!(paddle.pos.y, y);
        }

        #[test]
        fn prop_bottom_clamp(
            y in (HEIGHT - PADDLE_HEIGHT)..(HEIGHT + 50.0),
            vy in 0.0001f32..20.0,
            delta in 0.1f32..6.0,
        ) {
            let mut paddle = paddle_at(y, vy);
            move_paddle(&mut paddle, delta);
            prop_assert_eq!(paddle.vel.y, 0.0);
        }

        #[test]
        fn prop_damping(
            y in 10.0f32..(HEIGHT - PADDLE_HEIGHT - 10.0),
            speed in STOP_EPSILON..(MAX_SPEED - 0.001),
            up in any::<bool>(),
        ) {
            let vy = if up { -speed } else { speed };
            let mut paddle = paddle_at(y, vy);
            move_paddle(&mut paddle, 1.0);
            prop_assert!((paddle.vel.y.abs() - speed * DAMPING).abs() < 1e-5);
            prop_assert_eq!(paddle.vel.y.signum(), vy.signum());
        }

        #[test]
        fn prop_paddle_speed_never_exceeds_max(
            y in 10.0f32..(HEIGHT - PADDLE_HEIGHT - 10.0),
            vy in -50.0f32..50.0,
        ) {
            let mut paddle = paddle_at(y, vy);
            move_paddle(&mut paddle, 1.0);
            prop_assert!(paddle.vel.y.abs() <= MAX_SPEED);
        }

        #[test]
        fn prop_aimed_ball_always_bounces(
            x in 71.0f32..400.0,
            // Ball rows overlapping the resting paddle (y 250..350)
            y in 227.0f32..349.0,
            speed in 1.0f32..=MAX_BALL_SPEED,
            delta in 0.1f32..=MAX_FRAME_DELTA,
        ) {
            let paddle = Paddle::default();
            let mut b = ball(Vec2::new(x, y), Vec2::new(-speed, 0.0));
            let mut events = Vec::new();

            let mut steps = 0;
            while b.vel.x < 0.0 {
                prop_assert_eq!(move_ball(&mut b, &paddle, delta, &mut events), BallOutcome::InPlay);
                steps += 1;
                prop_assert!(steps < 10_000);
            }
            prop_assert_eq!(events, vec![GameEvent::Bounce]);
            prop_assert!(b.pos.x >= PADDLE_X);
        }

        #[test]
        fn prop_growth_respects_cap(vx in -20.0f32..20.0, vy in -20.0f32..20.0) {
            let mut b = ball(Vec2::ZERO, Vec2::new(vx, vy));
            grow_ball_speed(&mut b);
            prop_assert!(b.vel.x.abs() <= MAX_BALL_SPEED);
            prop_assert!(b.vel.y.abs() <= MAX_BALL_SPEED);
            prop_assert!(b.vel.x == 0.0 || b.vel.x.signum() == vx.signum());
        }
    }

    #[test]
    fn test_paddle_stops_below_epsilon() {
        let mut paddle = paddle_at(200.0, 0.09);
        move_paddle(&mut paddle, 1.0);
        assert_eq!(paddle.vel.y, 0.0);
        assert_eq!(paddle.pos.y, 200.0);
    }

    #[test]
    fn test_paddle_full_speed_holds() {
        let mut paddle = paddle_at(200.0, -MAX_SPEED);
        move_paddle(&mut paddle, 2.0);
        assert_eq!(paddle.vel.y, -MAX_SPEED);
        assert_eq!(paddle.pos.y, 190.0);
    }

    #[test]
    fn test_paddle_can_leave_top_border_downward() {
        let mut paddle = paddle_at(0.0, MAX_SPEED);
        move_paddle(&mut paddle, 1.0);
        assert_eq!(paddle.vel.y, MAX_SPEED);
        assert_eq!(paddle.pos.y, 5.0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut events = Vec::new();
        let mut b = ball(Vec2::new(400.0, 8.0), Vec2::new(5.0, -5.0));
        let outcome = move_ball(&mut b, &Paddle::default(), 1.0, &mut events);
        assert_eq!(outcome, BallOutcome::InPlay);
        assert_eq!(b.pos, Vec2::new(405.0, 3.0));
        assert_eq!(b.vel.y, 5.0);
        assert_eq!(events, vec![GameEvent::Bounce]);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut events = Vec::new();
        let mut b = ball(Vec2::new(400.0, 568.0), Vec2::new(5.0, 5.0));
        move_ball(&mut b, &Paddle::default(), 1.0, &mut events);
        assert_eq!(b.vel.y, -5.0);
        assert_eq!(events, vec![GameEvent::Bounce]);
    }

    #[test]
    fn test_right_wall_bounce_is_idempotent() {
        let mut events = Vec::new();
        let paddle = Paddle::default();
        let mut b = ball(Vec2::new(775.0, 300.0), Vec2::new(5.0, 0.0));

        move_ball(&mut b, &paddle, 1.0, &mut events);
        assert_eq!(b.vel.x, -5.0);
        assert_eq!(events.len(), 1);

        // Still inside the bounce zone, now heading away
        assert!(is_right_border(b.pos.x + b.size(), b.vel.x));
        move_ball(&mut b, &paddle, 1.0, &mut events);
        assert_eq!(b.vel.x, -5.0);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_corner_bounces_both_axes_once() {
        let mut events = Vec::new();
        let mut b = ball(Vec2::new(770.0, 570.0), Vec2::new(5.0, 5.0));
        move_ball(&mut b, &Paddle::default(), 1.0, &mut events);
        assert_eq!(b.vel, Vec2::new(-5.0, -5.0));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_left_edge_is_a_loss() {
        let mut events = Vec::new();
        let mut b = ball(Vec2::new(10.0, 300.0), Vec2::new(-5.0, 5.0));
        let outcome = move_ball(&mut b, &Paddle::default(), 1.0, &mut events);
        assert_eq!(outcome, BallOutcome::Lost);
        assert_eq!(b.vel.x, -5.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_paddle_hit() {
        let paddle = Paddle::default(); // x 50, y 250..350
        let b = ball(Vec2::new(53.0, 290.0), Vec2::new(-5.0, 5.0));
        assert!(ball_paddle_hit(&paddle, &b, 1.0));

        // Moving right never hits
        let b = ball(Vec2::new(53.0, 290.0), Vec2::new(5.0, 5.0));
        assert!(!ball_paddle_hit(&paddle, &b, 1.0));

        // Above the paddle
        let b = ball(Vec2::new(53.0, 200.0), Vec2::new(-5.0, 5.0));
        assert!(!ball_paddle_hit(&paddle, &b, 1.0));

        // Not reaching the paddle line yet
        let b = ball(Vec2::new(70.0, 290.0), Vec2::new(-5.0, 5.0));
        assert!(!ball_paddle_hit(&paddle, &b, 1.0));
    }

    #[test]
    fn test_paddle_hit_uses_paddle_motion() {
        // Ball bottom at 245: misses a resting paddle, meets one moving up
        let b = ball(Vec2::new(53.0, 216.0), Vec2::new(-5.0, 5.0));
        assert!(!ball_paddle_hit(&paddle_at(250.0, 0.0), &b, 1.0));
        assert!(ball_paddle_hit(&paddle_at(250.0, -5.0), &b, 1.0));
    }

    #[test]
    fn test_move_ball_reflects_off_paddle() {
        let mut events = Vec::new();
        let mut b = ball(Vec2::new(58.0, 290.0), Vec2::new(-5.0, 5.0));
        let outcome = move_ball(&mut b, &Paddle::default(), 1.0, &mut events);
        assert_eq!(outcome, BallOutcome::InPlay);
        assert_eq!(b.vel.x, 5.0);
        assert_eq!(events, vec![GameEvent::Bounce]);
    }

    /// Step until the ball turns around or is lost
    fn run_to_paddle(start: Vec2, vel: Vec2, delta: f32) -> (Ball, BallOutcome, usize) {
        let paddle = Paddle::default();
        let mut b = ball(start, vel);
        let mut events = Vec::new();
        loop {
            let outcome = move_ball(&mut b, &paddle, delta, &mut events);
            if outcome == BallOutcome::Lost || b.vel.x > 0.0 {
                return (b, outcome, events.len());
            }
        }
    }

    #[test]
    fn test_paddle_blocks_at_any_delta() {
        for delta in [0.5, 1.0, 2.0, 6.0] {
            let (b, outcome, bounces) = run_to_paddle(Vec2::new(58.0, 290.0), Vec2::new(-5.0, 0.0), delta);
            assert_eq!(outcome, BallOutcome::InPlay, "delta {delta}");
            assert_eq!(b.vel.x, 5.0, "delta {delta}");
            assert_eq!(bounces, 1, "delta {delta}");
            assert!(b.pos.x >= PADDLE_X, "delta {delta}: x {}", b.pos.x);
        }
    }

    #[test]
    fn test_long_step_mirrors_overshoot() {
        let mut events = Vec::new();
        let mut b = ball(Vec2::new(58.0, 290.0), Vec2::new(-5.0, 0.0));
        move_ball(&mut b, &Paddle::default(), 6.0, &mut events);
        // 30 px of travel lands at x 28, 22 px behind the paddle line
        assert_eq!(b.pos.x, 72.0);
        assert_eq!(b.vel.x, 5.0);

        // Heading away, the next long step is not a loss
        let outcome = move_ball(&mut b, &Paddle::default(), 6.0, &mut events);
        assert_eq!(outcome, BallOutcome::InPlay);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_long_step_still_misses_beside_paddle() {
        for delta in [0.5, 2.0, 6.0] {
            let (_, outcome, bounces) = run_to_paddle(Vec2::new(58.0, 100.0), Vec2::new(-5.0, 0.0), delta);
            assert_eq!(outcome, BallOutcome::Lost, "delta {delta}");
            assert_eq!(bounces, 0, "delta {delta}");
        }
    }

    #[test]
    fn test_wall_bounces_at_any_delta() {
        let paddle = Paddle::default();
        for delta in [0.5, 2.0, 6.0] {
            let mut events = Vec::new();
            let mut b = ball(Vec2::new(400.0, 4.0), Vec2::new(0.0, -5.0));
            for _ in 0..3 {
                move_ball(&mut b, &paddle, delta, &mut events);
            }
            assert_eq!(b.vel.y, 5.0, "top, delta {delta}");
            assert_eq!(events.len(), 1, "top, delta {delta}");

            let mut events = Vec::new();
            let mut b = ball(Vec2::new(772.0, 300.0), Vec2::new(5.0, 0.0));
            for _ in 0..3 {
                move_ball(&mut b, &paddle, delta, &mut events);
            }
            assert_eq!(b.vel.x, -5.0, "right, delta {delta}");
            assert_eq!(events.len(), 1, "right, delta {delta}");
        }
    }

    #[test]
    fn test_growth_factor() {
        let mut b = ball(Vec2::ZERO, Vec2::new(5.0, -5.0));
        grow_ball_speed(&mut b);
        assert!((b.vel.x - 5.025).abs() < 1e-5);
        assert!((b.vel.y + 5.025).abs() < 1e-5);
    }

    #[test]
    fn test_growth_clamps_to_exact_max() {
        let mut b = ball(Vec2::ZERO, Vec2::new(19.99, 19.99));
        grow_ball_speed(&mut b);
        assert_eq!(b.vel, Vec2::new(20.0, 20.0));

        let mut b = ball(Vec2::ZERO, Vec2::new(-19.99, 19.99));
        grow_ball_speed(&mut b);
        assert_eq!(b.vel, Vec2::new(-20.0, 20.0));

        grow_ball_speed(&mut b);
        assert_eq!(b.vel, Vec2::new(-20.0, 20.0));
    }
}
