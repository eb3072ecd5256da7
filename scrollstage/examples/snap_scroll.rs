// Example: narrow-variant snapping with a 60fps tick loop and user input interrupting a snap.
use scrollstage::{ScrollStage, StageOptions, StageTargets, Viewport};

fn main() {
    let mut stage: ScrollStage = ScrollStage::new(StageOptions::new());
    if let Err(err) = stage.initialize(StageTargets::new(0..4u64), Viewport::new(390.0, 844.0)) {
        eprintln!("initialize failed: {err}");
        return;
    }
    stage.subscribe_variant(|v| println!("variant -> {v:?}"));

    let budget = stage
        .driver()
        .and_then(|d| d.attachment())
        .map_or(0.0, |a| a.budget);
    println!("variant={:?} budget={budget:.1}", stage.variant());

    // The user flicks to 62% and lets go.
    let mut page_offset = 0.62 * budget;
    stage.on_scroll(page_offset, 0);

    let mut now_ms = 0u64;
    while now_ms < 1_000 {
        now_ms += 16;

        // At ~250ms the user grabs the page again, mid-snap.
        if (250..250 + 16).contains(&now_ms) {
            page_offset -= 120.0;
            stage.on_scroll(page_offset, now_ms);
        }

        if let Some(off) = stage.tick(now_ms) {
            // The embedder applies the offset; its scroll event is recognised as an echo.
            page_offset = off;
            stage.on_scroll(off, now_ms);
            println!(
                "t={now_ms}ms off={off:.1} progress={:.4} phase={:?}",
                stage.progress().unwrap_or_default(),
                stage.snap_phase()
            );
        }
    }

    // Rotating the device crosses the breakpoint: the wide timeline restarts at progress 0.
    stage.on_resize(Viewport::new(844.0, 390.0));
    stage.tick(now_ms + 16);
    println!(
        "after rotate: variant={:?} progress={:?}",
        stage.variant(),
        stage.progress()
    );
}
