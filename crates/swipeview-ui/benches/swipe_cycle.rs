use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swipeview_foundation::PointerEvent;
use swipeview_testing::SwipeRobot;
use swipeview_ui::{Card, SwipeViewConfig};
use swipeview_ui_graphics::Size;

fn robot() -> SwipeRobot<u32> {
    SwipeRobot::new(Size::new(1080.0, 1920.0), SwipeViewConfig::default())
}

fn programmatic_dislike_cycle(c: &mut Criterion) {
    let robot = robot();

    c.bench_function("programmatic_dislike_cycle", |b| {
        b.iter(|| {
            robot.view().add_card(Card::new(black_box(7)), 0);
            robot.view().dislike_card();
            robot.wait_for_animation();
        });
    });
}

fn dragged_spring_back_cycle(c: &mut Criterion) {
    let robot = robot().with_cards([1, 2, 3]);

    c.bench_function("dragged_spring_back_cycle", |b| {
        b.iter(|| {
            robot.send(PointerEvent::down(540.0, 960.0));
            for step in 1..=20 {
                let x = 540.0 + step as f32 * 10.0;
                robot.send(PointerEvent::moved(black_box(x), 960.0));
            }
            robot.send(PointerEvent::up(740.0, 960.0));
            robot.wait_for_idle();
        });
    });
}

criterion_group!(benches, programmatic_dislike_cycle, dragged_spring_back_cycle);
criterion_main!(benches);
