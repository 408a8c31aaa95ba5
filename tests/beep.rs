//! Tests for the beep oscillator


use anomaly_audio::beep::oscillator::{BeepOscillator, BEEP_AMPLITUDE_PER_LEVEL};
use anomaly_audio::{Engine, SampleRate, SAMPLE_RATE_HZ};

/// Counts non-silent samples until `engine` has been quiet for a while.
fn sounding_samples(engine: &mut Engine, ticks: usize) -> (usize, Vec<i16>) {
    let samples: Vec<i16> = (0..ticks).map(|_| engine.tick()).collect();
    let sounding = samples.iter().take_while(|&&s| s != 0).count();
    assert!(samples[sounding..].iter().all(|&s| s == 0));
    (sounding, samples)
}

#[test]
fn duration_is_exact() {
    let mut engine = Engine::default();
    engine.beep_start(1000, 200, 255);

    let (sounding, wav_data) = sounding_samples(&mut engine, 6400);
    assert_eq!(sounding, 3200);
    assert!(!engine.is_beep_active());

    wav_writer::write("beep/1khz.wav", SAMPLE_RATE_HZ, &wav_data).ok();
}

#[test]
fn square_wave_shape() {
    let mut engine = Engine::default();
    engine.beep_start(1000, 10, 255);

    let amplitude = (255 * BEEP_AMPLITUDE_PER_LEVEL) as i16;
    let samples: Vec<i16> = (0..16).map(|_| engine.tick()).collect();

    // 1 kHz at 16 kHz: 8 samples low, then 8 samples high.
    assert!(samples[..8].iter().all(|&s| s == -amplitude));
    assert!(samples[8..].iter().all(|&s| s == amplitude));
}

#[test]
fn frequency_is_clamped() {
    let sample_rate = SampleRate::default();

    let mut low = BeepOscillator::new(sample_rate);
    low.start(50, 100, 128);
    let mut floor = BeepOscillator::new(sample_rate);
    floor.start(200, 100, 128);
    assert_eq!(low.phase_step(), floor.phase_step());

    let mut high = BeepOscillator::new(sample_rate);
    high.start(9000, 100, 128);
    assert_eq!(high.phase_step(), sample_rate.phase_step_32(3000));
}

#[test]
fn zero_level_or_duration_is_silent() {
    let mut engine = Engine::default();

    engine.beep_start(1000, 200, 0);
    assert!(!engine.is_beep_active());
    assert_eq!(engine.tick(), 0);

    engine.beep_start(1000, 0, 255);
    assert!(!engine.is_beep_active());
    assert_eq!(engine.tick(), 0);
}

#[test]
fn zero_level_cancels_running_tone() {
    let mut engine = Engine::default();
    engine.beep_start(1000, 200, 255);
    engine.tick();

    engine.beep_start(1000, 200, 0);
    assert!(!engine.is_beep_active());
    assert_eq!(engine.tick(), 0);
}

#[test]
fn restart_replaces_tone() {
    let mut engine = Engine::default();
    engine.beep_start(1000, 200, 255);
    for _ in 0..1000 {
        engine.tick();
    }

    engine.beep_start(500, 10, 64);
    let (sounding, _) = sounding_samples(&mut engine, 1000);
    assert_eq!(sounding, 160);
}

#[test]
fn stop_all_silences_next_tick() {
    let mut engine = Engine::default();
    engine.beep_start(1000, 200, 255);
    assert_ne!(engine.tick(), 0);

    engine.stop_all();
    assert!(!engine.is_beep_active());
    assert_eq!(engine.tick(), 0);
}

#[test]
fn duration_rounds_up() {
    let sample_rate = SampleRate::new(44_100);
    assert_eq!(sample_rate.samples_for_ms(1), 45);
    assert_eq!(sample_rate.samples_for_ms(10), 441);

    let mut osc = BeepOscillator::new(sample_rate);
    osc.start(1000, 1, 255);
    assert_eq!(osc.samples_remaining(), 45);
}

#[test]
fn zero_sample_rate_stays_silent() {
    let sample_rate = SampleRate::new(0);
    assert_eq!(sample_rate.samples_for_ms(200), 0);
    assert_eq!(sample_rate.phase_step_16(440), u16::MAX);

    let mut oscillator = BeepOscillator::new(sample_rate);
    oscillator.start(1000, 200, 255);
    assert!(!oscillator.is_active());
    assert_eq!(oscillator.next(), 0);
}
