// Example: frame-aligned controller with CSS output, as a DOM adapter would use it.
use scrollstage::{StageOptions, StageTargets, Target, Viewport, VisualState};
use scrollstage_adapter::{Controller, CssStyle};

fn main() {
    let opts = StageOptions::new().with_renderer(Some(|t: &Target<u32>, s: &VisualState| {
        println!("  #card-{} {{ {} }}", t.key, CssStyle::from_state(s));
    }));
    let mut c: Controller<u32> = Controller::new(opts);
    if let Err(err) = c.initialize(StageTargets::new([7, 8, 9]), Viewport::new(375.0, 812.0)) {
        eprintln!("initialize failed: {err}");
        return;
    }

    // A burst of wheel events between two frames only renders once.
    for (i, off) in [120.0, 260.0, 410.0, 530.0].into_iter().enumerate() {
        c.push_scroll(off, i as u64 * 4);
    }
    println!("frame@16 pending={}", c.pending());
    c.frame(16);

    let mut now_ms = 16;
    while now_ms < 600 {
        now_ms += 16;
        if let Some(off) = c.frame(now_ms) {
            println!("frame@{now_ms} scroll container -> {off:.1}");
            c.push_scroll(off, now_ms);
        }
    }
    println!("settled progress={:?}", c.progress());
}
