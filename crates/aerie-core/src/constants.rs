//! Simulation constants and tuning parameters.

// --- Frame driver ---

/// Default frame-driver tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Player locomotion ---

/// Height of the player's centre when standing on the ground plane.
pub const GROUND_HEIGHT: f64 = 1.0;

/// A non-flying player at or below GROUND_HEIGHT + this snaps to the ground.
pub const GROUND_SETTLE_TOLERANCE: f64 = 0.01;

/// Gravitational acceleration (units/s²).
pub const GRAVITY: f64 = -9.8;

/// Fixed vertical velocity while jet flight is active (units/s).
pub const FLIGHT_ASCENT_RATE: f64 = 5.0;

/// Energy drained per second of flight.
pub const FLIGHT_ENERGY_DRAIN: f64 = 20.0;

/// Energy regenerated per second while grounded.
pub const ENERGY_REGEN_RATE: f64 = 10.0;

/// Base horizontal speed (units/s).
pub const BASE_MOVE_SPEED: f64 = 5.0;

/// Extra horizontal speed while boosting (units/s).
pub const BOOST_BONUS: f64 = 2.0;

// --- Resource meters ---

/// Player health ceiling.
pub const MAX_HEALTH: f64 = 100.0;

/// Default flight energy ceiling.
pub const DEFAULT_MAX_ENERGY: f64 = 100.0;

/// Boss health ceiling (and starting value).
pub const BOSS_MAX_HEALTH: f64 = 200.0;

// --- Combat ---

/// Boss health removed per bullet hit.
pub const BOSS_HIT_DAMAGE: f64 = 10.0;

/// Bullet speed (units/s).
pub const BULLET_SPEED: f64 = 20.0;

/// Bullet lifetime (seconds).
pub const BULLET_LIFETIME_SECS: f64 = 2.0;

/// Distance in front of the player at which control-signal fire spawns a bullet.
pub const MUZZLE_OFFSET: f64 = 1.5;

/// How long a drone explosion stays on screen (seconds).
pub const EXPLOSION_LINGER_SECS: f64 = 0.5;

/// Explosion visual scale.
pub const EXPLOSION_SCALE: f64 = 1.0;

// --- Enemies ---

/// Drones pursue the player inside this distance.
pub const DRONE_AGGRO_RADIUS: f64 = 15.0;

/// Drone pursuit speed (units/s).
pub const DRONE_SPEED: f64 = 2.0;

// --- Pickups ---

/// Health restored by one powerup.
pub const POWERUP_HEAL: f64 = 10.0;

// --- Jet flame ---

/// Lifetime of one jet flame puff (seconds).
pub const JET_FLAME_SECS: f64 = 0.2;

/// Jet flame visual scale.
pub const JET_FLAME_SCALE: f64 = 0.3;

/// Jet flame drop below the player's centre.
pub const JET_FLAME_DROP: f64 = 1.0;

// --- Collision volumes (half-extents) ---

pub const PLAYER_HALF_EXTENTS: [f64; 3] = [0.5, 1.0, 0.5];
pub const DRONE_HALF_EXTENT: f64 = 0.5;
pub const BULLET_HALF_EXTENT: f64 = 0.1;
pub const POWERUP_HALF_EXTENT: f64 = 0.25;
pub const CHECKPOINT_HALF_EXTENT: f64 = 0.75;
pub const BOSS_HALF_EXTENT: f64 = 1.5;

// --- Notifications ---

pub const HEAL_TEXT: &str = "+10 HP";
pub const HEAL_TEXT_POSITION: [f64; 2] = [0.4, 0.4];
pub const HEAL_TEXT_SECS: f64 = 1.0;

pub const CHECKPOINT_TEXT: &str = "Checkpoint reached";
pub const CHECKPOINT_TEXT_POSITION: [f64; 2] = [0.4, 0.5];
pub const CHECKPOINT_TEXT_SECS: f64 = 1.0;

pub const BOSS_DEFEATED_TEXT: &str = "Boss Defeated!";
pub const BOSS_DEFEATED_TEXT_POSITION: [f64; 2] = [0.4, 0.55];
pub const BOSS_DEFEATED_TEXT_SECS: f64 = 2.0;

// --- Default world layout ---

pub const PLAYER_SPAWN: [f64; 3] = [0.0, 1.0, 0.0];
pub const CHECKPOINT_POSITIONS: [[f64; 3]; 1] = [[5.0, 1.0, 5.0]];
pub const POWERUP_POSITIONS: [[f64; 3]; 2] = [[3.0, 1.0, 3.0], [-3.0, 1.0, -4.0]];
pub const DRONE_POSITIONS: [[f64; 3]; 2] = [[10.0, 3.0, 10.0], [-8.0, 5.0, -6.0]];
pub const BOSS_POSITION: [f64; 3] = [20.0, 3.0, 20.0];

// --- Scenery ---

/// Pillar grid coordinates along both x and z.
pub const PILLAR_GRID: [f64; 6] = [-5.0, -3.0, -1.0, 1.0, 3.0, 5.0];
pub const PILLAR_MIN_HEIGHT: f64 = 2.0;
pub const PILLAR_MAX_HEIGHT: f64 = 8.0;

pub const WHEEL_POSITIONS: [[f64; 3]; 2] = [[10.0, 0.0, 10.0], [-10.0, 0.0, -10.0]];

/// Ferris wheel spin rate (degrees/s).
pub const WHEEL_SPIN_RATE_DEG: f64 = 10.0;
