use fractal_zoomer::{
    AnimationDriver, BackgroundFrameWriter, ColourPolicy, EngineConfig, FrameCache, FramePlayback,
    FrameRecorder, FractalKinds, Mode, NeverCancel, Phase, StopFlag, copy_argb_to_rgba,
};

fn small_config(cache_dir: &std::path::Path) -> EngineConfig {
    EngineConfig {
        width: 40,
        height: 30,
        max_iterations: 120,
        view_radius: 0.5,
        cache_dir: cache_dir.to_path_buf(),
        ..EngineConfig::default()
    }
}

#[test]
fn record_then_replay_through_background_writer() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(&dir.path().join("dumps"));

    let recorder = FrameRecorder::start(config.frame_cache()).unwrap();
    let mut driver = AnimationDriver::recording(
        config.engine_state().unwrap(),
        Some(Box::new(BackgroundFrameWriter::spawn(recorder))),
    )
    .unwrap();

    let mut recorded = Vec::new();
    let ticks = driver
        .run(5, &NeverCancel, |_, frame| recorded.push(frame.clone()))
        .unwrap();

    assert_eq!(ticks, 5);
    assert_eq!(driver.finish_recording().unwrap(), 5);

    driver
        .start_replay(FramePlayback::open(config.frame_cache()).unwrap())
        .unwrap();
    assert_eq!(driver.phase(), Phase::Replaying);

    let mut replayed = Vec::new();
    driver
        .run(7, &NeverCancel, |_, frame| replayed.push(frame.clone()))
        .unwrap();

    assert_eq!(&replayed[..5], recorded.as_slice());
    assert_eq!(replayed[5], recorded[4]);
    assert_eq!(replayed[6], recorded[4]);
}

#[test]
fn replay_order_is_numeric_not_lexical() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(dir.path());
    let mut driver = AnimationDriver::recording(config.engine_state().unwrap(), None).unwrap();
    let cache = FrameCache::new(dir.path());

    let mut frames = Vec::new();
    for _ in 0..3 {
        frames.push(driver.tick().unwrap().clone());
    }

    // Indices 1, 2 and 10 list as 1, 10, 2 when sorted as strings.
    for (index, frame) in [1, 2, 10].into_iter().zip(&frames) {
        cache.write_record(index, frame).unwrap();
    }

    let playback = FramePlayback::open(cache).unwrap();
    let mut replay = AnimationDriver::replaying(config.engine_state().unwrap(), playback).unwrap();

    for expected in &frames {
        assert_eq!(replay.tick().unwrap(), expected);
    }
}

#[test]
fn stop_flag_halts_between_frames() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = small_config(dir.path());
    config.mode = Mode::new(FractalKinds::Julia, ColourPolicy::Hsv);
    config.zoom_target = Default::default();

    let mut driver = AnimationDriver::recording(config.engine_state().unwrap(), None).unwrap();
    let stop = StopFlag::new();
    let mut surface = vec![0u8; 40 * 30 * 4];

    let ticks = driver
        .run(50, &stop, |tick, frame| {
            copy_argb_to_rgba(frame, &mut surface).unwrap();
            if tick == 3 {
                stop.stop();
            }
        })
        .unwrap();

    assert_eq!(ticks, 4);
    assert!(surface.chunks_exact(4).all(|rgba| rgba[3] == 255));
}
