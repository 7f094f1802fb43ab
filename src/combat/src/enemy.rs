// src/combat/src/enemy.rs

use context::CombatContext;

use crate::combatant::DamageTarget;

/// 敌人的能力集合
pub trait Enemy {
    fn name(&self) -> String;

    fn health(&self) -> i32;

    /// 基础攻击伤害
    fn damage(&self) -> u32;

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// 受到伤害（各子类型有自己的减伤与日志）
    fn take_damage(&mut self, amount: u32, ctx: &mut CombatContext);

    /// 攻击玩家，伤害经过玩家自己的减伤规则
    fn attack(&mut self, target: &mut dyn DamageTarget, ctx: &mut CombatContext);
}

/// Health left after a hit; saturates instead of wrapping on huge amounts.
pub fn apply_damage(health: i32, amount: u32) -> i32 {
    health.saturating_sub(i32::try_from(amount).unwrap_or(i32::MAX))
}

/// Subtracts `amount` and narrates what is left, as plain enemies do.
pub(crate) fn suffer(name: &str, health: &mut i32, amount: u32, ctx: &CombatContext) {
    ctx.log(format!("{name} получает {amount} урона!"));
    *health = apply_damage(*health, amount);
    report_health(name, *health, ctx);
}

pub(crate) fn report_health(name: &str, health: i32, ctx: &CombatContext) {
    if health > 0 {
        ctx.log(format!("У {name} осталось {health} здоровья"));
    }
}

/// 哥布林
#[derive(Debug, Clone)]
pub struct Goblin {
    health: i32,
    damage: u32,
}

impl Goblin {
    pub const NAME: &'static str = "Гоблин";
    pub const HEALTH: i32 = 50;
    pub const DAMAGE: u32 = 10;

    pub fn new() -> Self {
        Self {
            health: Self::HEALTH,
            damage: Self::DAMAGE,
        }
    }
}

impl Default for Goblin {
    fn default() -> Self {
        Self::new()
    }
}

impl Enemy for Goblin {
    fn name(&self) -> String {
        Self::NAME.to_string()
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn damage(&self) -> u32 {
        self.damage
    }

    fn take_damage(&mut self, amount: u32, ctx: &mut CombatContext) {
        suffer(Self::NAME, &mut self.health, amount, ctx);
    }

    fn attack(&mut self, target: &mut dyn DamageTarget, ctx: &mut CombatContext) {
        ctx.log(format!("{} атакует {}!", Self::NAME, target.name()));
        target.take_damage(self.damage, ctx);
    }
}

/// 巨龙：对所有伤害有固定抗性
#[derive(Debug, Clone)]
pub struct Dragon {
    health: i32,
    damage: u32,
    resistance: f64,
}

impl Dragon {
    pub const NAME: &'static str = "Дракон";
    pub const HEALTH: i32 = 100;
    pub const DAMAGE: u32 = 30;
    pub const RESISTANCE: f64 = 0.2;

    pub fn new() -> Self {
        Self {
            health: Self::HEALTH,
            damage: Self::DAMAGE,
            resistance: Self::RESISTANCE,
        }
    }

    pub fn resistance(&self) -> f64 {
        self.resistance
    }
}

impl Default for Dragon {
    fn default() -> Self {
        Self::new()
    }
}

impl Enemy for Dragon {
    fn name(&self) -> String {
        Self::NAME.to_string()
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn damage(&self) -> u32 {
        self.damage
    }

    fn take_damage(&mut self, amount: u32, ctx: &mut CombatContext) {
        let resisted = (amount as f64 * (1.0 - self.resistance)).round().max(0.0) as u32;
        suffer(Self::NAME, &mut self.health, resisted, ctx);
    }

    fn attack(&mut self, target: &mut dyn DamageTarget, ctx: &mut CombatContext) {
        ctx.log("Дракон дышит огнем!");
        target.take_damage(self.damage, ctx);
    }
}
