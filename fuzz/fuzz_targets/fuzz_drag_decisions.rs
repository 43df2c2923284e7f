#![no_main]

use glide_core::event::{PointerEvent, PointerEventKind};
use glide_core::gesture::{DragConfig, DragRecognizer, SwipeDecision};
use libfuzzer_sys::fuzz_target;
use web_time::Instant;

fuzz_target!(|data: &[u8]| {
    // First byte: threshold in hundredths. Second: root width in tens of px.
    if data.len() < 2 {
        return;
    }
    let threshold = f64::from(data[0] % 101) / 100.0;
    let width = f64::from(data[1]) * 10.0;
    let payload = &data[2..];

    let mut dr = DragRecognizer::new(DragConfig {
        commit_threshold: threshold,
    });
    let now = Instant::now();
    dr.start(
        &PointerEvent::touch(PointerEventKind::Down, 0.0, 0.0),
        width * 3.0,
        now,
    );

    for pair in payload.chunks_exact(2) {
        let x = f64::from(i8::from_le_bytes([pair[0]])) * 8.0;
        let y = f64::from(i8::from_le_bytes([pair[1]])) * 8.0;
        let mv = dr
            .drag(&PointerEvent::touch(PointerEventKind::Move, x, y))
            .expect("gesture active");
        assert!(mv.offset_percent.is_finite(), "non-finite preview");
    }

    let release = dr.end(width, now).expect("gesture active");
    assert!(!dr.is_dragging());
    if width == 0.0 {
        assert!(matches!(
            release.decision(),
            None | Some(SwipeDecision::SnapBack)
        ));
    }
});
