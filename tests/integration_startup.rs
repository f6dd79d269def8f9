//! Integration test to ensure a session can start up and play through.

use coinrush::{
    find_path, Arena, Coin, CoinRushResult, Entity, GameCompletionState, GameEvent, GameState,
    LatticeGrid, MoveInput, Obstacle, PathPublisher, Position, SpawnConfig, SpawnCounts, Spike,
};

#[test]
fn test_basic_startup() -> CoinRushResult<()> {
    let config = SpawnConfig::new(12345, SpawnCounts::new(5, 5, 5));
    let game_state = GameState::new(config)?;

    assert_eq!(game_state.score, 0);
    assert_eq!(game_state.tick_count, 0);
    assert_eq!(game_state.get_completion_state(), GameCompletionState::Playing);
    assert_eq!(game_state.arena.player.center(), Position::new(400, 300));

    // Nothing spawns on top of the player
    let player = game_state.arena.player.rect;
    for rect in game_state.arena.occupied_rects().iter().skip(1) {
        assert!(!rect.intersects(&player));
    }

    Ok(())
}

#[test]
fn test_same_seed_same_arena() -> CoinRushResult<()> {
    let config = SpawnConfig::new(99, SpawnCounts::new(4, 4, 4));
    let a = GameState::new(config.clone())?;
    let b = GameState::new(config)?;

    let centers = |state: &GameState| -> Vec<Position> {
        state
            .arena
            .obstacles
            .iter()
            .map(Entity::center)
            .chain(state.arena.spikes.iter().map(Entity::center))
            .chain(state.arena.coins.iter().map(Entity::center))
            .collect()
    };
    assert_eq!(centers(&a), centers(&b));
    Ok(())
}

#[test]
fn test_walk_to_coin_along_hint() {
    let mut arena = Arena::reference();
    arena.coins.push(Coin::new(Position::new(400, 150)));
    let mut state = GameState::with_arena(arena, SpawnConfig::new(1, SpawnCounts::default()));

    let (start, goal) = state.path_request().expect("a coin is present");
    let path = find_path(
        &LatticeGrid::arena(),
        start,
        goal,
        &state.arena.obstacle_snapshot(),
    );
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));

    // Walk straight up until the coin is picked up
    let mut collected = false;
    for _ in 0..60 {
        let events = state.tick(MoveInput::new(0, -1));
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::CoinCollected { .. }))
        {
            collected = true;
            break;
        }
    }
    assert!(collected);
    assert_eq!(state.score, 1);
    assert!(state.path_request().is_none());
}

#[test]
fn test_spike_beats_winning_coin() {
    // Touching a spike and the winning coin in the same tick is a loss
    let mut arena = Arena::reference();
    arena.coins.push(Coin::new(Position::new(400, 300)));
    arena.spikes.push(Spike::new(Position::new(400, 300)));
    let mut state = GameState::with_arena(arena, SpawnConfig::new(1, SpawnCounts::default()));
    state.score = 9;

    state.tick(MoveInput::default());
    assert_eq!(state.score, 10);
    assert_eq!(state.get_completion_state(), GameCompletionState::Lost);
}

#[test]
fn test_session_with_publisher() -> CoinRushResult<()> {
    let mut arena = Arena::reference();
    arena.obstacles.push(Obstacle::new(Position::new(500, 300)));
    arena.coins.push(Coin::new(Position::new(600, 300)));
    let mut state = GameState::with_arena(arena, SpawnConfig::new(1, SpawnCounts::default()));
    let mut publisher = PathPublisher::for_grid(LatticeGrid::arena());

    for _ in 0..30 {
        state.tick(MoveInput::default());
        if let Some((start, goal)) = state.path_request() {
            publisher.request_path_if_idle(start, goal, state.arena.obstacle_snapshot())?;
        }
    }
    publisher.wait_idle();

    let path = publisher.read_current_path();
    assert_eq!(path.first(), Some(&Position::new(400, 300)));
    assert_eq!(path.last(), Some(&Position::new(600, 300)));
    let snapshot = state.arena.obstacle_snapshot();
    assert!(path.iter().all(|p| !snapshot.blocks(*p)));
    assert!(publisher.completed_searches() >= 1);
    Ok(())
}
