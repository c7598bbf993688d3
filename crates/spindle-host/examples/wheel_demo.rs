//! Wheel Engine Demonstration
//!
//! Drives one fair spin and one covertly forced spin through the frame
//! driver, printing what a rendering host would observe.

use spindle_core::WheelConfig;
use spindle_engine::WheelEngine;
use spindle_host::{ChordRecognizer, FrameDriver, SegmentList};

fn main() {
    println!("=== Spindle Wheel Demonstration ===\n");

    let labels = SegmentList::new(
        ["Pizza", "Sushi", "Tacos", "Curry", "Salad"]
            .into_iter()
            .map(String::from)
            .collect(),
    )
    .expect("non-empty label list");

    let config = WheelConfig::with_segments(labels.len());
    let mut driver = FrameDriver::new(WheelEngine::new(config).expect("valid config"));
    driver.outcome_hook(|outcome| {
        println!(
            "   outcome: index {} at {:?} after {:.2} turns of deceleration",
            outcome.index, outcome.rotation, outcome.travel
        );
    });

    // 1. Fair spin: friction alone decides
    println!("1. Fair spin");
    driver.engine_mut().spin_start();
    for _ in 0..90 {
        driver.frame();
    }
    driver.engine_mut().spin_stop();
    let fair = driver.run_to_rest(100_000).expect("wheel stops");
    println!("   winner: {}\n", labels.display(fair.index));

    // 2. Forced spin: the chord gesture nominates segment 3 ("3" + hold)
    println!("2. Forced spin (covert chord: digit 3, one-second hold)");
    let mut chord = ChordRecognizer::default();
    chord.press_digit('3');
    chord.modifier_down(0);

    driver.engine_mut().spin_start();
    for now_ms in (0..2000).step_by(16) {
        if let Some(index) = chord.poll(now_ms) {
            driver.engine_mut().set_target(index);
        }
        driver.frame();
    }
    driver.engine_mut().spin_stop();
    let forced = driver.run_to_rest(100_000).expect("wheel stops");
    println!("   winner: {}", labels.display(forced.index));
    println!("   (same deceleration profile, predetermined landing)");
}
