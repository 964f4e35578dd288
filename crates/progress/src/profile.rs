//! Player profile - coins, XP, streak, records, and badges
//!
//! The profile mirrors its backing key-value store at all times: every
//! mutation writes through immediately, so a host can drop the profile at
//! any point without losing state. Timestamps are injected by the caller
//! (`now_ms`), never read from a clock, which keeps streak arithmetic
//! deterministic under test.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use arcade_hub_types::{PARTICIPATION_XP, STREAK_BREAK_MS, STREAK_CLAIM_MS, XP_PER_LEVEL};

use crate::ledger::{Ledger, Transaction, TransactionKind};
use crate::store::KvStore;

/// Storage keys - the on-disk contract, kept stable
mod keys {
    pub const COINS: &str = "hub_coins";
    pub const RECORDS: &str = "hub_records";
    pub const TASKS: &str = "hub_tasks";
    pub const TRANSACTIONS: &str = "hub_transactions";
    pub const NICKNAME: &str = "hub_nickname";
    pub const AVATAR: &str = "hub_avatar";
    pub const STREAK: &str = "hub_streak";
    pub const LAST_CLAIM: &str = "hub_last_claim";
    pub const XP: &str = "hub_xp";
    pub const LEVEL: &str = "hub_level";
    pub const GAMES_PLAYED: &str = "hub_games_played";
    pub const BADGES: &str = "hub_badges";
}

const DEFAULT_NICKNAME: &str = "Guest";
const DEFAULT_AVATAR: &str = "1";

/// Outcome of a daily streak claim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakClaim {
    Claimed { streak: u32 },
    /// Less than the claim window has passed since the last claim
    TooEarly { remaining_ms: u64 },
}

/// The hub state, backed by a flat key-value store
#[derive(Debug, Clone)]
pub struct Profile<S: KvStore> {
    store: S,
    coins: u64,
    game_records: HashMap<String, u32>,
    completed_tasks: Vec<String>,
    nickname: String,
    avatar: String,
    streak: u32,
    last_claim_ms: u64,
    xp: u32,
    level: u32,
    games_played: u32,
    transactions: Ledger,
    unlocked_badges: HashMap<String, u64>,
}

fn parse_scalar<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn parse_json<T: DeserializeOwned + Default>(value: Option<String>) -> T {
    value
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

impl<S: KvStore> Profile<S> {
    /// Load the profile from a store; missing or malformed keys fall back
    /// to guest defaults.
    pub fn load(store: S) -> Self {
        Self {
            coins: parse_scalar(store.get(keys::COINS), 0),
            game_records: parse_json(store.get(keys::RECORDS)),
            completed_tasks: parse_json(store.get(keys::TASKS)),
            nickname: store
                .get(keys::NICKNAME)
                .unwrap_or_else(|| DEFAULT_NICKNAME.to_string()),
            avatar: store
                .get(keys::AVATAR)
                .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            streak: parse_scalar(store.get(keys::STREAK), 0),
            last_claim_ms: parse_scalar(store.get(keys::LAST_CLAIM), 0),
            xp: parse_scalar(store.get(keys::XP), 0),
            level: parse_scalar(store.get(keys::LEVEL), 1).max(1),
            games_played: parse_scalar(store.get(keys::GAMES_PLAYED), 0),
            transactions: parse_json(store.get(keys::TRANSACTIONS)),
            unlocked_badges: parse_json(store.get(keys::BADGES)),
            store,
        }
    }

    /// Backing store (e.g. to flush a file-backed store to disk)
    pub fn store(&self) -> &S {
        &self.store
    }

    fn save_scalar(&mut self, key: &str, value: impl ToString) {
        self.store.set(key, value.to_string());
    }

    fn save_json(&mut self, key: &str, encoded: Result<String, serde_json::Error>) {
        // Encoding these in-memory collections cannot fail; a hypothetical
        // failure just skips the write, leaving the previous value.
        if let Ok(raw) = encoded {
            self.store.set(key, raw);
        }
    }

    // --- Coins ---

    pub fn coins(&self) -> u64 {
        self.coins
    }

    /// Grant coins and log the earn. Zero amounts are ignored.
    pub fn add_coins(&mut self, amount: u64, label: Option<&str>, now_ms: u64) {
        if amount == 0 {
            return;
        }
        self.coins += amount;
        self.save_scalar(keys::COINS, self.coins);
        self.push_transaction(
            TransactionKind::Earn,
            label.unwrap_or("Coins earned"),
            amount,
            now_ms,
        );
    }

    // --- Records ---

    pub fn record(&self, game_id: &str) -> u32 {
        self.game_records.get(game_id).copied().unwrap_or(0)
    }

    /// Keep the best score per game. Returns true on a new record.
    pub fn update_record(&mut self, game_id: &str, score: u32) -> bool {
        if score <= self.record(game_id) {
            return false;
        }
        self.game_records.insert(game_id.to_string(), score);
        let encoded = serde_json::to_string(&self.game_records);
        self.save_json(keys::RECORDS, encoded);
        true
    }

    // --- Tasks ---

    pub fn is_task_completed(&self, task_id: &str) -> bool {
        self.completed_tasks.iter().any(|id| id == task_id)
    }

    pub fn completed_tasks(&self) -> &[String] {
        &self.completed_tasks
    }

    /// Complete a task once, granting its coin and XP rewards.
    /// Returns false if the task was already completed.
    pub fn complete_task(
        &mut self,
        task_id: &str,
        reward: u64,
        xp_reward: u32,
        now_ms: u64,
    ) -> bool {
        if self.is_task_completed(task_id) {
            return false;
        }
        self.completed_tasks.push(task_id.to_string());
        let encoded = serde_json::to_string(&self.completed_tasks);
        self.save_json(keys::TASKS, encoded);

        self.add_coins(reward, None, now_ms);
        self.add_xp(xp_reward);
        true
    }

    // --- XP / level ---

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// XP needed to clear the current level (linear growth)
    pub fn xp_to_next_level(&self) -> u32 {
        self.level * XP_PER_LEVEL
    }

    /// Grant XP, carrying remainder across level-ups when several are
    /// gained at once. Zero amounts are ignored.
    pub fn add_xp(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.xp += amount;
        while self.xp >= self.xp_to_next_level() {
            self.xp -= self.xp_to_next_level();
            self.level += 1;
        }
        self.save_scalar(keys::XP, self.xp);
        self.save_scalar(keys::LEVEL, self.level);
    }

    // --- Streak ---

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn last_claim_ms(&self) -> u64 {
        self.last_claim_ms
    }

    /// Attempt to claim the daily streak at `now_ms`.
    ///
    /// The first-ever claim starts the streak at 1. After that: claims
    /// inside the 24 h window are rejected with the remaining wait;
    /// claims between 24 h and 48 h extend the streak; later claims
    /// restart it at 1.
    pub fn claim_streak(&mut self, now_ms: u64) -> StreakClaim {
        if self.last_claim_ms == 0 {
            self.streak = 1;
        } else {
            let elapsed = now_ms.saturating_sub(self.last_claim_ms);
            if elapsed < STREAK_CLAIM_MS {
                return StreakClaim::TooEarly {
                    remaining_ms: STREAK_CLAIM_MS - elapsed,
                };
            }
            if elapsed >= STREAK_BREAK_MS {
                self.streak = 1;
            } else {
                self.streak += 1;
            }
        }

        self.last_claim_ms = now_ms;
        self.save_scalar(keys::STREAK, self.streak);
        self.save_scalar(keys::LAST_CLAIM, self.last_claim_ms);
        StreakClaim::Claimed {
            streak: self.streak,
        }
    }

    /// Zero out a streak whose 48 h window lapsed. Called on hub init so
    /// the displayed streak is accurate before any claim attempt.
    pub fn check_streak_expiry(&mut self, now_ms: u64) {
        if self.last_claim_ms == 0 || self.streak == 0 {
            return;
        }
        if now_ms.saturating_sub(self.last_claim_ms) >= STREAK_BREAK_MS {
            self.streak = 0;
            self.save_scalar(keys::STREAK, self.streak);
        }
    }

    // --- Games played ---

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn increment_games_played(&mut self) {
        self.games_played += 1;
        self.save_scalar(keys::GAMES_PLAYED, self.games_played);
    }

    /// Intake for a finished game round (natural end, exit, or restart):
    /// updates the per-game record, grants participation XP, and counts
    /// the round. Returns true on a new record.
    pub fn record_game_result(&mut self, game_id: &str, score: u32) -> bool {
        let new_record = self.update_record(game_id, score);
        self.add_xp(PARTICIPATION_XP);
        self.increment_games_played();
        new_record
    }

    // --- Badges ---

    /// Record a badge unlock; the first unlock timestamp wins.
    /// Returns true when the badge was newly unlocked.
    pub fn register_badge_unlock(&mut self, badge_id: &str, now_ms: u64) -> bool {
        if self.unlocked_badges.contains_key(badge_id) {
            return false;
        }
        self.unlocked_badges.insert(badge_id.to_string(), now_ms);
        let encoded = serde_json::to_string(&self.unlocked_badges);
        self.save_json(keys::BADGES, encoded);
        true
    }

    /// Unlock timestamp for a badge, 0 if still locked (used for sorting)
    pub fn badge_unlock_time(&self, badge_id: &str) -> u64 {
        self.unlocked_badges.get(badge_id).copied().unwrap_or(0)
    }

    // --- Ledger ---

    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.entries()
    }

    fn push_transaction(&mut self, kind: TransactionKind, label: &str, amount: u64, now_ms: u64) {
        self.transactions.push(Transaction {
            kind,
            label: label.to_string(),
            amount,
            time_ms: now_ms,
        });
        let encoded = serde_json::to_string(&self.transactions);
        self.save_json(keys::TRANSACTIONS, encoded);
    }

    // --- Profile data ---

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn set_nickname(&mut self, name: &str) {
        self.nickname = name.to_string();
        self.store.set(keys::NICKNAME, self.nickname.clone());
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn set_avatar(&mut self, avatar: &str) {
        self.avatar = avatar.to_string();
        self.store.set(keys::AVATAR, self.avatar.clone());
    }

    /// Reset everything to guest defaults and persist the reset
    /// (identity disconnect semantics).
    pub fn reset_to_guest(&mut self) {
        self.coins = 0;
        self.game_records.clear();
        self.completed_tasks.clear();
        self.nickname = DEFAULT_NICKNAME.to_string();
        self.avatar = DEFAULT_AVATAR.to_string();
        self.streak = 0;
        self.last_claim_ms = 0;
        self.xp = 0;
        self.level = 1;
        self.games_played = 0;
        self.transactions = Ledger::new();
        self.unlocked_badges.clear();
        self.save_all();
    }

    fn save_all(&mut self) {
        self.save_scalar(keys::COINS, self.coins);
        let records = serde_json::to_string(&self.game_records);
        self.save_json(keys::RECORDS, records);
        let tasks = serde_json::to_string(&self.completed_tasks);
        self.save_json(keys::TASKS, tasks);
        let ledger = serde_json::to_string(&self.transactions);
        self.save_json(keys::TRANSACTIONS, ledger);
        self.store.set(keys::NICKNAME, self.nickname.clone());
        self.store.set(keys::AVATAR, self.avatar.clone());
        self.save_scalar(keys::STREAK, self.streak);
        self.save_scalar(keys::LAST_CLAIM, self.last_claim_ms);
        self.save_scalar(keys::XP, self.xp);
        self.save_scalar(keys::LEVEL, self.level);
        self.save_scalar(keys::GAMES_PLAYED, self.games_played);
        let badges = serde_json::to_string(&self.unlocked_badges);
        self.save_json(keys::BADGES, badges);
    }
}
