// src/hero/src/companion.rs

use combat::Enemy;
use context::CombatContext;
use error::GameError;
use strum::Display;

use crate::class::Class;

/// How a companion fights.
pub trait AttackStrategy {
    fn style(&self) -> CompanionStyle;
    fn execute(&self, enemy: &mut dyn Enemy, ctx: &mut CombatContext);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CompanionStyle {
    Melee,
    Ranged,
}

/// 近战同伴
pub struct MeleeAttackStrategy;

impl MeleeAttackStrategy {
    pub const DAMAGE: u32 = 10;
}

impl AttackStrategy for MeleeAttackStrategy {
    fn style(&self) -> CompanionStyle {
        CompanionStyle::Melee
    }

    fn execute(&self, enemy: &mut dyn Enemy, ctx: &mut CombatContext) {
        ctx.log("Компаньон атакует в ближнем бою!");
        enemy.take_damage(Self::DAMAGE, ctx);
    }
}

/// 远程同伴
pub struct RangedAttackStrategy;

impl RangedAttackStrategy {
    pub const DAMAGE: u32 = 7;
}

impl AttackStrategy for RangedAttackStrategy {
    fn style(&self) -> CompanionStyle {
        CompanionStyle::Ranged
    }

    fn execute(&self, enemy: &mut dyn Enemy, ctx: &mut CombatContext) {
        ctx.log("Компаньон атакует издалека!");
        enemy.take_damage(Self::DAMAGE, ctx);
    }
}

/// Secondary attacker whose strategy is fixed when the character is created.
pub struct Companion {
    strategy: Box<dyn AttackStrategy>,
}

impl Companion {
    pub fn new(strategy: Box<dyn AttackStrategy>) -> Self {
        Self { strategy }
    }

    /// Mage gets a melee companion, warrior a ranged one, thief a coin flip.
    pub fn for_class(class: Class, ctx: &mut CombatContext) -> Result<Self, GameError> {
        let strategy: Box<dyn AttackStrategy> = match class {
            Class::Mage => Box::new(MeleeAttackStrategy),
            Class::Warrior => Box::new(RangedAttackStrategy),
            Class::Thief => {
                if ctx.roll() < 0.5 {
                    Box::new(MeleeAttackStrategy)
                } else {
                    Box::new(RangedAttackStrategy)
                }
            }
            other => return Err(GameError::InvalidClass(other.to_string())),
        };

        Ok(Self::new(strategy))
    }

    pub fn style(&self) -> CompanionStyle {
        self.strategy.style()
    }

    pub fn attack(&self, enemy: &mut dyn Enemy, ctx: &mut CombatContext) {
        self.strategy.execute(enemy, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::{Dragon, Goblin};

    #[test]
    fn fixed_companions() {
        let mut ctx = CombatContext::scripted(vec![0.0]);
        let mage = Companion::for_class(Class::Mage, &mut ctx).unwrap();
        let warrior = Companion::for_class(Class::Warrior, &mut ctx).unwrap();

        assert_eq!(mage.style(), CompanionStyle::Melee);
        assert_eq!(warrior.style(), CompanionStyle::Ranged);
        assert_eq!(ctx.roll(), 0.0);
    }

    #[test]
    fn thief_companion_is_a_coin_flip() {
        let mut ctx = CombatContext::scripted(vec![0.49, 0.5]);
        let first = Companion::for_class(Class::Thief, &mut ctx).unwrap();
        let second = Companion::for_class(Class::Thief, &mut ctx).unwrap();

        assert_eq!(first.style(), CompanionStyle::Melee);
        assert_eq!(second.style(), CompanionStyle::Ranged);
    }

    #[test]
    fn rogue_has_no_companion() {
        let mut ctx = CombatContext::scripted(vec![0.0]);
        let err = Companion::for_class(Class::Rogue, &mut ctx).err().unwrap();
        assert!(matches!(err, GameError::InvalidClass(name) if name == "ROGUE"));
    }

    #[test]
    fn companion_hits_bypass_equipment() {
        let mut ctx = CombatContext::scripted(vec![0.0]);
        let mut goblin = Goblin::new();
        let mut dragon = Dragon::new();

        Companion::new(Box::new(MeleeAttackStrategy)).attack(&mut goblin, &mut ctx);
        Companion::new(Box::new(RangedAttackStrategy)).attack(&mut dragon, &mut ctx);

        assert_eq!(goblin.health(), 40);
        // dragon resistance still applies on its own intake: round(7 * 0.8) = 6
        assert_eq!(dragon.health(), 94);
        assert!(ctx.logger().contains("Компаньон атакует в ближнем бою!"));
        assert!(ctx.logger().contains("Компаньон атакует издалека!"));
    }
}
