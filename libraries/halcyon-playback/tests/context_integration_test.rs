//! Player context integration tests
//!
//! Exercises the context the way the page tree does: several widgets hold
//! clones, buttons call the entry points, the bottom bar re-renders from
//! notifications.

use halcyon_core::catalog::sample_tracks;
use halcyon_core::{Platform, Track, TrackSource};
use halcyon_playback::controls::{self, NowPlaying};
use halcyon_playback::{
    PlaybackConfig, PlaybackEvent, PlaybackState, PlayerContext, PlayerStatus,
};
use std::sync::{Arc, Mutex};
use std::thread;

fn create_track(id: &str) -> Track {
    Track::new(
        id,
        format!("Track {}", id),
        "Test Artist",
        TrackSource::new(Platform::Spotify, format!("sp-{}", id)),
    )
}

type Log = Arc<Mutex<Vec<(PlaybackEvent, PlaybackState)>>>;

fn record(ctx: &PlayerContext) -> Log {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    ctx.subscribe(move |event: &PlaybackEvent, state: &PlaybackState| {
        sink.lock().unwrap().push((event.clone(), state.clone()));
    });
    log
}

#[test]
fn test_listeners_see_post_operation_state() {
    let ctx = PlayerContext::default();
    let log = record(&ctx);

    ctx.play_track(create_track("x"));

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(
        log[0].0,
        PlaybackEvent::TrackChanged {
            track_id: Some("x".to_string()),
            previous_track_id: None,
        }
    );
    assert_eq!(
        log[1].0,
        PlaybackEvent::StateChanged {
            status: PlayerStatus::Playing
        }
    );
    assert!(log.iter().all(|(_, state)| state.is_playing));
}

#[test]
fn test_noops_do_not_notify() {
    let ctx = PlayerContext::default();
    let log = record(&ctx);

    ctx.pause();
    ctx.resume();
    ctx.skip_to_next();
    ctx.clear_queue();

    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_every_listener_notified_in_subscription_order() {
    let ctx = PlayerContext::default();
    let order = Arc::new(Mutex::new(Vec::new()));

    for name in ["header", "bottom-bar", "track-card"] {
        let sink = Arc::clone(&order);
        ctx.subscribe(move |_: &PlaybackEvent, _: &PlaybackState| {
            sink.lock().unwrap().push(name);
        });
    }

    ctx.add_to_queue(create_track("a"));

    assert_eq!(
        *order.lock().unwrap(),
        vec!["header", "bottom-bar", "track-card"]
    );
}

#[test]
fn test_skip_notifies_queue_and_track_change() {
    let ctx = PlayerContext::default();
    ctx.add_to_queue(create_track("a"));
    ctx.add_to_queue(create_track("b"));
    let log = record(&ctx);

    ctx.skip_to_next();

    let events: Vec<_> = log.lock().unwrap().iter().map(|(e, _)| e.clone()).collect();
    assert!(events.contains(&PlaybackEvent::QueueChanged { length: 1 }));
    assert!(events.contains(&PlaybackEvent::TrackChanged {
        track_id: Some("a".to_string()),
        previous_track_id: None,
    }));
}

#[test]
fn test_end_session_resets_and_notifies() {
    let ctx = PlayerContext::default();
    ctx.play_track(create_track("x"));
    ctx.add_to_queue(create_track("a"));
    let log = record(&ctx);

    ctx.end_session();

    assert_eq!(ctx.status(), PlayerStatus::Idle);
    assert!(ctx.get_state().queue.is_empty());
    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].0, PlaybackEvent::SessionReset);
}

#[test]
fn test_bottom_bar_follows_session() {
    let ctx = PlayerContext::new(PlaybackConfig::default());
    let bar: Arc<Mutex<Option<NowPlaying>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&bar);
    ctx.subscribe(move |_: &PlaybackEvent, state: &PlaybackState| {
        *sink.lock().unwrap() = NowPlaying::from_state(state);
    });

    let tracks = sample_tracks();
    controls::play(&ctx, tracks[0].clone()).unwrap();
    controls::add_to_player_queue(&ctx, tracks[1].clone()).unwrap();

    {
        let bar = bar.lock().unwrap();
        let bar = bar.as_ref().unwrap();
        assert_eq!(bar.title, tracks[0].title);
        assert_eq!(bar.up_next.as_deref(), Some(tracks[1].title.as_str()));
        assert_eq!(bar.toggle_label(), "Pause");
    }

    ctx.toggle_play_pause();
    assert_eq!(bar.lock().unwrap().as_ref().unwrap().toggle_label(), "Play");

    ctx.stop();
    assert!(bar.lock().unwrap().is_none());
}

#[test]
fn test_concurrent_widgets_keep_invariant() {
    let ctx = PlayerContext::default();
    let violations = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&violations);
    ctx.subscribe(move |_: &PlaybackEvent, state: &PlaybackState| {
        if state.is_playing && state.current_track.is_none() {
            *sink.lock().unwrap() += 1;
        }
    });

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let ctx = ctx.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    let track = create_track(&format!("{}-{}", worker, i));
                    match i % 5 {
                        0 => ctx.play_track(track),
                        1 => ctx.add_to_queue(track),
                        2 => ctx.pause(),
                        3 => {
                            ctx.skip_to_next();
                        }
                        _ => ctx.stop(),
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(*violations.lock().unwrap(), 0);
    let state = ctx.get_state();
    assert!(!state.is_playing || state.current_track.is_some());
}
