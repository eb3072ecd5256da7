// Example: wide-variant stage driven by a simulated page scroll.
use scrollstage::{ScrollStage, StageOptions, StageTargets, Target, Viewport, VisualState};

fn main() {
    let opts = StageOptions::new()
        .with_pin_start(600.0)
        .with_renderer(Some(|t: &Target<&'static str>, s: &VisualState| {
            if t.index() == Some(1) {
                println!(
                    "  {:>8} scale={:.3} opacity={:.3} y={:?}",
                    t.key, s.scale, s.opacity, s.translate_y
                );
            }
        }))
        .with_on_pin_change(Some(|pinned: bool| println!("pinned={pinned}")));

    let mut stage: ScrollStage<&'static str> = ScrollStage::new(opts);
    let targets = StageTargets::new(["design", "build", "launch", "support"]).with_header("intro");
    if let Err(err) = stage.initialize(targets, Viewport::new(1440.0, 900.0)) {
        eprintln!("initialize failed: {err}");
        return;
    }

    let timeline = stage.timeline().map(|t| (t.len(), t.total_duration()));
    println!("variant={:?} segments/duration={timeline:?}", stage.variant());

    let budget = stage
        .driver()
        .and_then(|d| d.attachment())
        .map_or(0.0, |a| a.budget);
    let mut offset = 0.0;
    while offset <= 600.0 + budget + 200.0 {
        stage.on_scroll(offset, 0);
        println!("offset={offset:.0} state={:?}", stage.scroll_state());
        offset += budget / 8.0;
    }

    stage.teardown();
}
