use std::io;
use std::time::Duration;

use ball_collision::compute::TICK;
use ball_collision::entities::*;
use ball_collision::error::{EntityRef, Phase, TickFault};
use ball_collision::game_loop::*;
use ball_collision::input::Direction;
use ball_collision::render::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, PartialEq)]
enum Call {
    Clear,
    Disc(Point, f64, Tint),
    Text(Point, String),
    Present,
}

/// Records draw calls; fails `present` while `failures` is non-zero.
#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<Call>,
    failures: u32,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) -> Result<(), RenderError> {
        self.calls.clear();
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn draw_disc(&mut self, center: Point, size: f64, tint: Tint) -> Result<(), RenderError> {
        self.calls.push(Call::Disc(center, size, tint));
        Ok(())
    }

    fn draw_text(&mut self, at: Point, text: &str) -> Result<(), RenderError> {
        self.calls.push(Call::Text(at, text.to_string()));
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone").into());
        }
        self.calls.push(Call::Present);
        Ok(())
    }
}

/// A loop with no big balls near the player so nothing scores by accident.
fn quiet_loop() -> GameLoop<StdRng> {
    let mut game = GameLoop::new(StdRng::seed_from_u64(7));
    game.state.store.big_balls.clear();
    game
}

#[test]
fn new_loop_starts_running_with_one_big_ball() {
    let game = GameLoop::new(StdRng::seed_from_u64(1));
    assert!(game.status().is_running());
    assert_eq!(game.state.store.big_balls.len(), 1);
    assert!(game.state.store.power_ups.is_empty());
    assert_eq!(game.state.score, 0);
    assert_eq!(game.state.ticks, 0);
}

#[test]
fn step_draws_a_full_frame() {
    let mut game = quiet_loop();
    game.state.store.add_big_ball(BigBall { pos: Point::new(100.0, 100.0), dx: 0.5, dy: 0.5 });
    let mut r = RecordingRenderer::default();

    assert!(game.step(Duration::ZERO, &mut r).is_running());
    assert_eq!(game.state.ticks, 1);

    assert_eq!(r.calls.first(), Some(&Call::Clear));
    assert_eq!(r.calls.last(), Some(&Call::Present));
    assert!(r.calls.contains(&Call::Disc(Point::new(100.5, 100.5), BIG_BALL_SIZE, Tint::Blue)));
    assert!(r.calls.contains(&Call::Disc(Point::ORIGIN, PLAYER_SIZE, Tint::Red)));
    assert!(r.calls.contains(&Call::Text(SCORE_LABEL_AT, "Score: 0".to_string())));
}

#[test]
fn boosted_player_is_drawn_yellow() {
    let mut game = quiet_loop();
    game.state.store.player.boosted = true;
    game.state.store.player.boost_remaining = Duration::from_secs(5);
    let mut r = RecordingRenderer::default();
    game.step(Duration::ZERO, &mut r);
    assert!(r.calls.contains(&Call::Disc(Point::ORIGIN, PLAYER_SIZE, Tint::Yellow)));
}

#[test]
fn steer_then_step_moves_player_along_one_axis() {
    let mut game = quiet_loop();
    game.steer(Direction::Up);
    game.steer(Direction::Left);
    let p = &game.state.store.player;
    assert_eq!((p.dx, p.dy), (-PLAYER_BASE_SPEED, 0.0));

    game.step(Duration::ZERO, &mut RecordingRenderer::default());
    let p = &game.state.store.player;
    assert!(p.pos.x < 0.0);
    assert_eq!(p.pos.y, 0.0);
}

#[test]
fn collision_sees_post_move_positions() {
    let mut game = quiet_loop();
    // 32 units away: out of reach until the player steps 3 units closer
    game.state.store.add_big_ball(BigBall { pos: Point::new(32.0, 0.0), dx: 0.0, dy: 0.0 });
    game.steer(Direction::Right);

    game.step(Duration::ZERO, &mut RecordingRenderer::default());
    assert_eq!(game.state.score, 1);
    assert_eq!(game.state.store.big_balls.len(), 2);
    assert_eq!(game.state.store.player.pos, Point::ORIGIN);
}

#[test]
fn a_couple_of_render_faults_only_skip_frames() {
    let mut game = quiet_loop();
    let mut r = RecordingRenderer { failures: 2, ..Default::default() };

    for tick in 0..3u32 {
        assert!(game.step(TICK * tick, &mut r).is_running());
    }
    assert_eq!(game.state.ticks, 3);
    assert_eq!(r.calls.last(), Some(&Call::Present));
}

#[test]
fn a_good_frame_resets_the_render_fault_count() {
    let mut game = quiet_loop();
    let mut r = RecordingRenderer::default();
    for tick in 0..10u32 {
        // Two failures, one success, repeat
        if tick % 3 != 2 {
            r.failures = 1;
        }
        assert!(game.step(TICK * tick, &mut r).is_running());
    }
}

#[test]
fn persistent_render_faults_halt_the_loop() {
    let mut game = quiet_loop();
    let mut r = RecordingRenderer { failures: u32::MAX, ..Default::default() };

    for tick in 0..MAX_CONSECUTIVE_RENDER_FAULTS - 1 {
        assert!(game.step(TICK * tick, &mut r).is_running());
    }
    let status = game.step(TICK * MAX_CONSECUTIVE_RENDER_FAULTS, &mut r);
    assert!(matches!(status, LoopState::Faulted(TickFault::Render(_))));
}

#[test]
fn simulation_fault_halts_before_render() {
    let mut game = quiet_loop();
    game.state.store.player.pos = Point::new(f64::INFINITY, 0.0);
    let mut r = RecordingRenderer::default();

    let status = game.step(Duration::ZERO, &mut r);
    match status {
        LoopState::Faulted(TickFault::NonFinitePosition { phase, entity }) => {
            assert_eq!(*phase, Phase::AdvancePlayer);
            assert_eq!(*entity, EntityRef::Player);
        }
        other => panic!("expected a motion fault, got {other:?}"),
    }
    assert!(r.calls.is_empty());
    assert_eq!(game.state.ticks, 0);

    // Faulted is terminal
    game.step(TICK, &mut r);
    assert_eq!(game.state.ticks, 0);
    assert!(r.calls.is_empty());
}

#[test]
fn fault_reports_the_phase_that_failed() {
    let mut game = quiet_loop();
    game.state.store.add_big_ball(BigBall { pos: Point::new(f64::NAN, 0.0), dx: 0.5, dy: 0.5 });
    let status = game.step(Duration::ZERO, &mut RecordingRenderer::default());
    let LoopState::Faulted(fault) = status else {
        panic!("expected a fault, got {status:?}");
    };
    assert_eq!(fault.phase(), Phase::AdvanceBigBalls);
    assert_eq!(fault.to_string(), "advance-big-balls: big ball #0 has a non-finite position");

    let mut game = quiet_loop();
    let mut r = RecordingRenderer { failures: u32::MAX, ..Default::default() };
    for tick in 0..MAX_CONSECUTIVE_RENDER_FAULTS {
        game.step(TICK * tick, &mut r);
    }
    let LoopState::Faulted(fault) = game.status() else {
        panic!("expected a render fault");
    };
    assert_eq!(fault.phase(), Phase::Render);
}

#[test]
fn score_never_decreases_over_a_long_run() {
    let mut game = GameLoop::new(StdRng::seed_from_u64(99));
    let mut r = RecordingRenderer::default();
    let mut last_score = 0;

    // Chase the first ball so scoring actually happens
    for tick in 0..4_000u32 {
        let target = game.state.store.big_balls[0].pos;
        let p = game.state.store.player.pos;
        let direction = if (target.x - p.x).abs() > (target.y - p.y).abs() {
            if target.x > p.x { Direction::Right } else { Direction::Left }
        } else if target.y > p.y {
            Direction::Up
        } else {
            Direction::Down
        };
        game.steer(direction);

        assert!(game.step(TICK * tick, &mut r).is_running());
        assert!(game.state.score >= last_score);
        assert!(!game.state.store.big_balls.is_empty());
        last_score = game.state.score;
    }
    assert!(game.state.score > 0);
}

#[test]
fn sleep_budget_fills_the_rest_of_the_tick() {
    assert_eq!(sleep_budget(Duration::from_millis(20), TICK), Duration::from_millis(30));
    assert_eq!(sleep_budget(Duration::ZERO, TICK), TICK);
}

#[test]
fn overrun_ticks_do_not_sleep() {
    assert_eq!(sleep_budget(Duration::from_millis(50), TICK), Duration::ZERO);
    assert_eq!(sleep_budget(Duration::from_millis(80), TICK), Duration::ZERO);
}
