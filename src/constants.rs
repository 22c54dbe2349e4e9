// Scoring constants
pub const BRICK_SCORE: u32 = 10;
pub const FOOD_SCORE: u32 = 25;
pub const BOSS_HIT_SCORE: u32 = 50;
pub const COMBO_WINDOW_MS: u64 = 2_000;
pub const COMBO_HITS_PER_MULTIPLIER: u32 = 5;
pub const MAX_COMBO_MULTIPLIER: u32 = 8;

// Run constants
pub const STARTING_LIVES: u32 = 3;
pub const STARTING_COINS: u64 = 0;
pub const COINS_PER_BRICK: u64 = 1;
pub const COINS_PER_FOOD: u64 = 2;
pub const BOSS_CLEAR_COIN_BONUS: u64 = 75;

// Boss constants
pub const BOSS_BASE_HP: u32 = 30;
pub const BOSS_HP_PER_STAGE: u32 = 5;

// Save system constants
pub const SAVE_VERSION_MAGIC: u64 = 0x534E414B454F5554; // "SNAKEOUT" in hex
