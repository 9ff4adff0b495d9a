use dragon_catch_engine::DragonGame;

#[test]
fn perf_smoke_tick() {
    let sizes: Vec<f64> = (0..64).flat_map(|_| [48.0, 32.0]).collect();
    let mut game = DragonGame::new(1280.0, 720.0, &sizes, 7)
        .unwrap_or_else(|_| panic!("sizes come in pairs"));
    game.enable_perf_metrics(true);

    let mut now = 0.0;
    for _ in 0..120 {
        game.tick(now);
        now += 16.0;
    }

    let stats = game.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.sprites_stepped(), 64);
    assert_eq!(stats.frame(), 120);
}
