//! 被附魔的武器：把一件武器适配成敌人

use context::CombatContext;
use items::Weapon;

use crate::combatant::DamageTarget;
use crate::enemy::{Enemy, apply_damage, report_health};

/// A weapon animated into an enemy. Its attack damage is rolled once from the
/// weapon when it is created; any hit may dispel the enchantment outright.
#[derive(Debug, Clone)]
pub struct EnchantedWeapon {
    health: i32,
    damage: u32,
}

impl EnchantedWeapon {
    pub const NAME: &'static str = "Магическое оружие";
    pub const HEALTH: i32 = 50;
    pub const DISPEL_PROBABILITY: f64 = 0.2;

    pub fn new(weapon: &dyn Weapon, ctx: &mut CombatContext) -> Self {
        Self {
            health: Self::HEALTH,
            damage: weapon.damage(ctx),
        }
    }
}

impl Enemy for EnchantedWeapon {
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
        ctx.log(format!("{} получает {amount} урона!", Self::NAME));
        self.health = apply_damage(self.health, amount);

        if ctx.roll() <= Self::DISPEL_PROBABILITY {
            ctx.log("Атака рассеяла заклятие с оружия!");
            self.health = 0;
        }

        report_health(Self::NAME, self.health, ctx);
    }

    fn attack(&mut self, target: &mut dyn DamageTarget, ctx: &mut CombatContext) {
        ctx.log(format!("{} атакует {}!", Self::NAME, target.name()));
        target.take_damage(self.damage, ctx);
    }
}
