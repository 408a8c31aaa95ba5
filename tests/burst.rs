//! Tests for the burst scheduler


use anomaly_audio::click::burst::BurstScheduler;
use anomaly_audio::config::{BURST_MAX_DELAY_SAMPLES, BURST_MIN_DELAY_SAMPLES};
use anomaly_audio::noise::Lfsr;
use anomaly_audio::{Engine, EngineConfig, VoiceAllocation, SAMPLE_RATE_HZ};

const WINDOW: core::ops::RangeInclusive<u32> =
    BURST_MIN_DELAY_SAMPLES as u32..=BURST_MAX_DELAY_SAMPLES as u32;

/// Runs `burst` until it goes idle and returns the ticks (1-based) that fired.
fn fire_times(burst: &mut BurstScheduler, noise: &mut Lfsr) -> Vec<u32> {
    let mut fires = Vec::new();
    let mut tick = 0;
    while burst.is_active() {
        tick += 1;
        if burst.advance(noise) {
            fires.push(tick);
        }
        assert!(tick < 100_000, "burst never finished");
    }
    fires
}

/// Ticks at which the canonical voice restarted.
fn click_starts(engine: &mut Engine, ticks: usize) -> Vec<usize> {
    let mut starts = Vec::new();
    for tick in 0..ticks {
        engine.tick();
        if engine.voices().voices()[0].position() == 1 {
            starts.push(tick);
        }
    }
    starts
}

#[test]
fn fixed_count_fires_exactly() {
    let mut burst = BurstScheduler::default();
    let mut noise = Lfsr::new();

    assert_eq!(burst.trigger(3, 3, &mut noise), Some(3));
    let first_delay = burst.next_delay() as u32;
    assert!(WINDOW.contains(&first_delay));

    let fires = fire_times(&mut burst, &mut noise);
    assert_eq!(fires.len(), 3);
    assert_eq!(fires[0], first_delay);
    for pair in fires.windows(2) {
        assert!(WINDOW.contains(&(pair[1] - pair[0])));
    }
    assert_eq!(burst.remaining(), 0);
}

#[test]
fn zero_counts_are_ignored() {
    let mut burst = BurstScheduler::default();
    let mut noise = Lfsr::new();

    assert_eq!(burst.trigger(0, 0, &mut noise), None);
    assert!(!burst.is_active());
    assert_eq!(noise, Lfsr::new());
    assert!(!burst.advance(&mut noise));
}

#[test]
fn counts_are_normalized() {
    let mut noise = Lfsr::new();

    for _ in 0..200 {
        let mut burst = BurstScheduler::default();
        let count = burst.trigger(0, 2, &mut noise).unwrap();
        assert!((1..=2).contains(&count));
        assert_eq!(fire_times(&mut burst, &mut noise).len(), count as usize);
    }

    let mut burst = BurstScheduler::default();
    assert_eq!(burst.trigger(5, 2, &mut noise), Some(5));
}

#[test]
fn counts_cover_range() {
    let mut noise = Lfsr::new();
    let mut seen = [false; 9];

    for _ in 0..500 {
        let mut burst = BurstScheduler::default();
        let count = burst.trigger(2, 8, &mut noise).unwrap();
        seen[count as usize] = true;
    }

    assert!(seen[2..=8].iter().all(|&s| s));
    assert!(!seen[0] && !seen[1]);
}

#[test]
fn cancel_stops_pending_clicks() {
    let mut burst = BurstScheduler::default();
    let mut noise = Lfsr::new();

    burst.trigger(4, 4, &mut noise);
    burst.cancel();
    assert!(fire_times(&mut burst, &mut noise).is_empty());
}

#[test]
fn engine_burst_retriggers_voice() {
    let mut engine = Engine::default();
    engine.trigger_burst(3, 3);
    assert!(engine.is_burst_active());

    let starts = click_starts(&mut engine, 3 * BURST_MAX_DELAY_SAMPLES as usize + 10);
    assert_eq!(starts.len(), 3);
    assert!(!engine.is_burst_active());
    for pair in starts.windows(2) {
        assert!(WINDOW.contains(&((pair[1] - pair[0]) as u32)));
    }
}

#[test]
fn custom_delay_window() {
    let config = EngineConfig {
        burst_delay_min_samples: 100,
        burst_delay_max_samples: 100,
        ..Default::default()
    };
    let mut engine = Engine::new(config).unwrap();
    engine.trigger_burst(4, 4);

    let starts = click_starts(&mut engine, 1000);
    assert_eq!(starts, vec![99, 199, 299, 399]);
}

fn positions(engine: &Engine) -> Vec<u16> {
    let voices = engine.voices().voices();
    voices.iter().map(|v| v.position()).collect()
}

fn spaced_engine(voice_allocation: VoiceAllocation) -> Engine {
    let config = EngineConfig {
        max_voices: 4,
        voice_allocation,
        burst_delay_min_samples: 100,
        burst_delay_max_samples: 100,
        ..Default::default()
    };
    Engine::new(config).unwrap()
}

#[test]
fn polyphonic_burst_fills_free_slots_then_steals_oldest() {
    let mut engine = spaced_engine(VoiceAllocation::Polyphonic);
    engine.trigger_burst(5, 5);
    assert_eq!(engine.burst().remaining(), 5);
    assert_eq!(engine.burst().next_delay(), 100);

    // Clicks fire on ticks 99, 199, 299, 399 and 499.
    for _ in 0..451 {
        engine.tick();
    }
    assert_eq!(engine.active_voices(), 4);
    assert_eq!(positions(&engine), vec![352, 252, 152, 52]);
    assert_eq!(engine.burst().remaining(), 1);

    for _ in 0..49 {
        engine.tick();
    }
    assert_eq!(engine.active_voices(), 4);
    assert_eq!(positions(&engine), vec![1, 301, 201, 101]);
    assert!(!engine.is_burst_active());
}

#[test]
fn monophonic_burst_clears_all_slots() {
    let mut engine = spaced_engine(VoiceAllocation::Monophonic);
    engine.trigger_burst(3, 3);

    for _ in 0..300 {
        engine.tick();
    }
    assert_eq!(engine.active_voices(), 1);
    assert_eq!(positions(&engine), vec![1, 0, 0, 0]);
    assert_eq!(engine.burst().remaining(), 0);
}

#[test]
fn long_burst() {
    let mut engine = Engine::default();
    let mut wav_data = Vec::new();

    engine.trigger_burst(10, 20);
    for _ in 0..SAMPLE_RATE_HZ {
        wav_data.push(engine.tick());
    }

    assert!(!engine.is_burst_active());
    wav_writer::write("click/burst.wav", SAMPLE_RATE_HZ, &wav_data).ok();
}
