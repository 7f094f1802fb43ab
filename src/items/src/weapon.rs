//src/items/src/weapon.rs
use std::fmt;

use context::CombatContext;
use strum::{Display, EnumIter};

/// 武器种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum WeaponKind {
    Sword,
    Bow,
    Staff,
}

/// Anything a hero can strike with.
pub trait Weapon: fmt::Debug {
    fn kind(&self) -> WeaponKind;

    /// Damage of one use; randomized weapons roll through `ctx`.
    fn damage(&self, ctx: &mut CombatContext) -> u32;

    /// Flavour line narrated on every use.
    fn use_message(&self) -> &'static str;
}

/// 剑：固定伤害
#[derive(Debug, Clone)]
pub struct Sword {
    damage: u32,
}

impl Sword {
    pub const DAMAGE: u32 = 20;

    pub fn new() -> Self {
        Self {
            damage: Self::DAMAGE,
        }
    }
}

impl Default for Sword {
    fn default() -> Self {
        Self::new()
    }
}

impl Weapon for Sword {
    fn kind(&self) -> WeaponKind {
        WeaponKind::Sword
    }

    fn damage(&self, _ctx: &mut CombatContext) -> u32 {
        self.damage
    }

    fn use_message(&self) -> &'static str {
        "Удар мечом!"
    }
}

/// 弓：概率暴击
#[derive(Debug, Clone)]
pub struct Bow {
    damage: u32,
    critical_chance: f64,
    critical_modifier: u32,
}

impl Bow {
    pub const DAMAGE: u32 = 15;
    pub const CRITICAL_CHANCE: f64 = 0.3;
    pub const CRITICAL_MODIFIER: u32 = 2;

    pub fn new() -> Self {
        Self {
            damage: Self::DAMAGE,
            critical_chance: Self::CRITICAL_CHANCE,
            critical_modifier: Self::CRITICAL_MODIFIER,
        }
    }
}

impl Default for Bow {
    fn default() -> Self {
        Self::new()
    }
}

impl Weapon for Bow {
    fn kind(&self) -> WeaponKind {
        WeaponKind::Bow
    }

    fn damage(&self, ctx: &mut CombatContext) -> u32 {
        // inclusive: a roll of exactly 0.3 still crits
        if ctx.roll() <= self.critical_chance {
            ctx.log("Критический урон!");
            return self.damage * self.critical_modifier;
        }
        self.damage
    }

    fn use_message(&self) -> &'static str {
        "Выстрел из лука!"
    }
}

/// 法杖：围绕基础值上下浮动
#[derive(Debug, Clone)]
pub struct Staff {
    damage: u32,
    scatter: f64,
}

impl Staff {
    pub const DAMAGE: u32 = 25;
    pub const SCATTER: f64 = 0.2;

    pub fn new() -> Self {
        Self {
            damage: Self::DAMAGE,
            scatter: Self::SCATTER,
        }
    }

    /// Damage for a given roll in `[0, 1)`.
    pub fn damage_for_roll(&self, roll: f64) -> u32 {
        let factor = 1.0 + (roll * 2.0 * self.scatter - self.scatter);
        (self.damage as f64 * factor).round().max(0.0) as u32
    }
}

impl Default for Staff {
    fn default() -> Self {
        Self::new()
    }
}

impl Weapon for Staff {
    fn kind(&self) -> WeaponKind {
        WeaponKind::Staff
    }

    fn damage(&self, ctx: &mut CombatContext) -> u32 {
        let roll = ctx.roll();
        self.damage_for_roll(roll)
    }

    fn use_message(&self) -> &'static str {
        "Воздух накаляется, из посоха вылетает огненный шар!"
    }
}
