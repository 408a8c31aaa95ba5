//! Offline snapshot renders through the simulated output stage


use anomaly_audio::render::{RcFilter, Renderer, OUTPUT_SAMPLE_RATE_HZ};
use anomaly_audio::{BeepPattern, Engine, SNAPSHOT_DURATION_MS};

/// Silence before the trigger, in milliseconds.
const PRE_SILENCE_MS: u32 = 100;

fn render_snapshot(trigger: impl FnOnce(&mut Engine)) -> Vec<i16> {
    let mut engine = Engine::default();
    let mut renderer = Renderer::for_engine(&engine);

    let mut samples = vec![0; renderer.samples_for_ms(SNAPSHOT_DURATION_MS)];
    let split = renderer.samples_for_ms(PRE_SILENCE_MS);

    let (pre, post) = samples.split_at_mut(split);
    renderer.render(&mut engine, pre);
    trigger(&mut engine);
    renderer.render(&mut engine, post);

    samples
}

#[test]
fn snapshots() {
    logging::init();

    let snapshots: [(&str, fn(&mut Engine)); 5] = [
        ("geiger_click.wav", |e| e.trigger_click()),
        ("beep_single.wav", |e| e.start_pattern(BeepPattern::Single)),
        ("beep_double.wav", |e| e.start_pattern(BeepPattern::Double)),
        ("beep_error.wav", |e| e.start_pattern(BeepPattern::Error)),
        ("beep_alert.wav", |e| e.start_pattern(BeepPattern::Alert)),
    ];

    for (name, trigger) in snapshots {
        let samples = render_snapshot(trigger);
        assert_eq!(samples.len(), 96_000);

        let split = 4800;
        assert!(
            samples[..split].iter().all(|&s| s == 0),
            "{name} not silent before trigger"
        );
        assert!(
            samples[split..].iter().any(|&s| s != 0),
            "{name} is silent after trigger"
        );

        let path = format!("snapshots/{name}");
        wav_writer::write(&path, OUTPUT_SAMPLE_RATE_HZ, &samples).unwrap();
        let (rate, read_back) = wav_writer::read(&path).unwrap();
        assert_eq!(rate, OUTPUT_SAMPLE_RATE_HZ);
        assert_eq!(read_back, samples);
    }
}

#[test]
fn snapshots_are_repeatable() {
    let a = render_snapshot(|e| e.trigger_burst(4, 8));
    let b = render_snapshot(|e| e.trigger_burst(4, 8));
    assert_eq!(a, b);
}

#[test]
fn renderer_holds_each_engine_sample() {
    let mut engine = Engine::default();
    let mut reference = Engine::default();
    let mut renderer = Renderer::for_engine(&engine);
    assert_eq!(renderer.upsample_factor(), 3);
    assert_eq!(renderer.output_rate_hz(), OUTPUT_SAMPLE_RATE_HZ);

    engine.beep_start(1000, 1000, 255);
    reference.beep_start(1000, 1000, 255);
    let out: Vec<f32> = (0..30).map(|_| renderer.next(&mut engine)).collect();

    // 30 output samples consume 10 engine samples.
    for _ in 0..10 {
        reference.tick();
    }
    assert_eq!(engine.tick(), reference.tick());

    // Eight low engine samples pull the output down, the next two push it up.
    assert!(out.iter().all(|&x| (-1.0..=1.0).contains(&x)));
    assert!(out[23] < out[0]);
    assert!(out[29] > out[23]);
}

#[test]
fn rc_filter_settles_to_input() {
    let mut filter = RcFilter::new(3000.0, 48_000.0);
    let mut y = 0.0;
    for _ in 0..1000 {
        y = filter.process(0.5);
    }
    assert!((y - 0.5).abs() < 1e-4);

    filter.reset();
    assert!(filter.process(1.0) < 0.5);
}

#[test]
fn pcm_output_truncates() {
    let mut engine = Engine::default();
    let mut renderer = Renderer::for_engine(&engine);
    engine.start_pattern(BeepPattern::Alert);

    for _ in 0..200 {
        let mut float_engine = engine.clone();
        let mut float_renderer = renderer;
        let expected = (float_renderer.next(&mut float_engine) * 32767.0).trunc() as i16;
        assert_eq!(renderer.next_pcm(&mut engine), expected);
    }
}
