use tempo_shim::{now, system_time, Clock, FixedClock, SystemClock, TimePair};

#[test]
fn test_system_time_nanoseconds_have_millisecond_resolution() {
    for _ in 0..1_000 {
        let (seconds, nanoseconds) = system_time();
        assert!(seconds >= 0);
        assert!(nanoseconds <= 999_000_000);
        assert_eq!(nanoseconds % 1_000_000, 0);
    }
}

#[test]
fn test_system_time_seconds_do_not_go_backwards() {
    let mut previous = system_time().0;
    for _ in 0..1_000 {
        let (seconds, _) = system_time();
        assert!(seconds >= previous, "{} < {}", seconds, previous);
        previous = seconds;
    }
}

#[test]
fn test_now_agrees_with_system_time() {
    let before = system_time();
    let pair = now();
    let after = system_time();

    assert!(before <= <(i64, u32)>::from(pair));
    assert!(<(i64, u32)>::from(pair) <= after);
}

#[test]
fn test_clocks_are_shareable_trait_objects() {
    let clocks: Vec<Box<dyn Clock>> = vec![
        Box::new(SystemClock::new()),
        Box::new(FixedClock::new(-250)),
    ];

    let system = clocks[0].system_time();
    assert_eq!(system.nanoseconds % 1_000_000, 0);

    assert_eq!(
        clocks[1].system_time(),
        TimePair { seconds: -1, nanoseconds: 750_000_000 }
    );

    let handle = std::thread::spawn(move || clocks[1].now_millis());
    assert_eq!(handle.join().unwrap(), -250);
}
