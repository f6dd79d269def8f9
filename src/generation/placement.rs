//! # Entity Placement
//!
//! Random rejection sampling of spawn points that keep clear of everything
//! already in the arena.

use crate::config::{COIN_SIZE, OBSTACLE_SIZE, SPIKE_SIZE};
use crate::game::{Arena, Coin, EntityId, Obstacle, Position, Spike};
use crate::generation::SpawnConfig;
use crate::utils::Rect;
use log::{debug, warn};
use rand::Rng;

/// Picks a spawn center for a `w` x `h` entity.
///
/// Candidates are drawn uniformly from the arena shrunk by `config.margin` on
/// every side. A candidate is accepted when its rectangle stays out of every
/// occupied rectangle grown by `config.min_spacing` on each side. Returns
/// `None` after `config.placement_attempts` rejected candidates, or at once
/// if the margins leave no room.
pub fn find_free_spot<R: Rng + ?Sized>(
    w: i32,
    h: i32,
    occupied: &[Rect],
    arena_width: i32,
    arena_height: i32,
    config: &SpawnConfig,
    rng: &mut R,
) -> Option<Position> {
    let xs = config.margin..=arena_width.saturating_sub(config.margin);
    let ys = config.margin..=arena_height.saturating_sub(config.margin);
    if xs.is_empty() || ys.is_empty() {
        return None;
    }

    let clearance = config.min_spacing * 2;
    for _ in 0..config.placement_attempts {
        let candidate = Position::new(rng.gen_range(xs.clone()), rng.gen_range(ys.clone()));
        let rect = Rect::from_center(candidate, w, h);
        if !occupied
            .iter()
            .any(|other| rect.intersects(&other.inflate(clearance, clearance)))
        {
            return Some(candidate);
        }
    }
    None
}

/// Outcome of populating an arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementReport {
    pub coins: u32,
    pub obstacles: u32,
    pub spikes: u32,
    /// Entities that found no free spot and were skipped
    pub skipped: u32,
}

/// Places the configured coins, then obstacles, then spikes.
///
/// Each entity keeps clear of everything placed before it, the player
/// included. Entities that cannot be placed are skipped and logged.
pub fn populate_arena<R: Rng + ?Sized>(
    arena: &mut Arena,
    config: &SpawnConfig,
    rng: &mut R,
) -> PlacementReport {
    let mut report = PlacementReport::default();

    for _ in 0..config.counts.coins {
        match spawn_coin(arena, config, rng) {
            Some(_) => report.coins += 1,
            None => report.skipped += 1,
        }
    }

    for _ in 0..config.counts.obstacles {
        match free_spot_in(arena, OBSTACLE_SIZE, config, rng) {
            Some(center) => {
                arena.obstacles.push(Obstacle::new(center));
                report.obstacles += 1;
            }
            None => {
                warn!("no free spot for an obstacle, skipping it");
                report.skipped += 1;
            }
        }
    }

    for _ in 0..config.counts.spikes {
        match free_spot_in(arena, SPIKE_SIZE, config, rng) {
            Some(center) => {
                arena.spikes.push(Spike::new(center));
                report.spikes += 1;
            }
            None => {
                warn!("no free spot for a spike, skipping it");
                report.skipped += 1;
            }
        }
    }

    debug!("populated arena: {:?}", report);
    report
}

/// Adds one coin at a free spot. Returns its id, or `None` if the arena is
/// too crowded.
pub fn spawn_coin<R: Rng + ?Sized>(
    arena: &mut Arena,
    config: &SpawnConfig,
    rng: &mut R,
) -> Option<EntityId> {
    let Some(center) = free_spot_in(arena, COIN_SIZE, config, rng) else {
        warn!("no free spot for a coin, skipping it");
        return None;
    };
    let coin = Coin::new(center);
    let id = coin.id;
    arena.coins.push(coin);
    Some(id)
}

fn free_spot_in<R: Rng + ?Sized>(
    arena: &Arena,
    size: i32,
    config: &SpawnConfig,
    rng: &mut R,
) -> Option<Position> {
    find_free_spot(
        size,
        size,
        &arena.occupied_rects(),
        arena.width,
        arena.height,
        config,
        rng,
    )
}
