//! 回合制战斗循环
//!
//! Each turn: hero attack, companion attack, then a stun roll decides whether
//! the enemy strikes back. Deaths are checked only between turns, hero first.

use combat::Enemy;
use context::CombatContext;
use error::GameError;
use hero::{Companion, Hero};
use strum::Display;

/// 敌人被击晕、跳过反击的概率
pub const STUN_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BattleState {
    NotStarted,
    InProgress,
    PlayerDefeated,
    EnemyDefeated,
}

impl BattleState {
    pub fn is_over(self) -> bool {
        matches!(self, Self::PlayerDefeated | Self::EnemyDefeated)
    }
}

/// One fight between the hero (plus companion) and a single enemy.
pub struct Battle {
    hero: Hero,
    companion: Option<Companion>,
    enemy: Box<dyn Enemy>,
    state: BattleState,
    turns: u32,
}

impl Battle {
    pub fn new(hero: Hero, companion: Option<Companion>, enemy: Box<dyn Enemy>) -> Self {
        Self {
            hero,
            companion,
            enemy,
            state: BattleState::NotStarted,
            turns: 0,
        }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn enemy(&self) -> &dyn Enemy {
        self.enemy.as_ref()
    }

    fn refresh_state(&mut self) {
        self.state = if !self.hero.is_alive() {
            BattleState::PlayerDefeated
        } else if !self.enemy.is_alive() {
            BattleState::EnemyDefeated
        } else {
            BattleState::InProgress
        };
    }

    /// 执行一个回合，返回回合结束后的状态
    pub fn step(&mut self, ctx: &mut CombatContext) -> BattleState {
        if self.state == BattleState::NotStarted {
            self.refresh_state();
        }
        if self.state.is_over() {
            return self.state;
        }

        self.turns += 1;
        self.hero.attack(self.enemy.as_mut(), ctx);
        if let Some(companion) = &self.companion {
            companion.attack(self.enemy.as_mut(), ctx);
        }

        // an enemy already at zero health still gets this roll
        if ctx.roll() < STUN_PROBABILITY {
            ctx.log(format!(
                "{} был оглушен атакой {}!",
                self.enemy.name(),
                self.hero.name()
            ));
        } else {
            self.enemy.attack(&mut self.hero, ctx);
        }

        self.refresh_state();
        self.state
    }

    /// Runs until one side is down. `pace` is called before every turn.
    pub fn run<F>(&mut self, ctx: &mut CombatContext, mut pace: F) -> Result<BattleState, GameError>
    where
        F: FnMut() -> Result<(), GameError>,
    {
        self.refresh_state();
        tracing::debug!(enemy = %self.enemy.name(), hero = self.hero.name(), "battle started");

        while self.state == BattleState::InProgress {
            pace()?;
            self.step(ctx);
        }

        tracing::info!(state = %self.state, turns = self.turns, "battle finished");
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::Goblin;
    use hero::{Class, HeroConfig, MeleeAttackStrategy};
    use items::{LightArmor, Sword};

    fn hero() -> Hero {
        Hero::new(HeroConfig {
            name: "Артур".to_string(),
            class: Class::Warrior,
            weapon: Box::new(Sword::new()),
            armor: Box::new(LightArmor),
        })
    }

    #[test]
    fn stunned_enemy_skips_retaliation() {
        let mut ctx = CombatContext::scripted(vec![0.1]);
        let mut battle = Battle::new(hero(), None, Box::new(Goblin::new()));

        assert_eq!(battle.step(&mut ctx), BattleState::InProgress);
        assert_eq!(battle.hero().health(), 100);
        assert_eq!(battle.enemy().health(), 30);
        assert!(ctx.logger().contains("Гоблин был оглушен атакой Артур!"));
    }

    #[test]
    fn enemy_strikes_back_without_stun() {
        let mut ctx = CombatContext::scripted(vec![0.9]);
        let mut battle = Battle::new(hero(), None, Box::new(Goblin::new()));

        battle.step(&mut ctx);
        // goblin 10 through light armor
        assert_eq!(battle.hero().health(), 92);
    }

    #[test]
    fn companion_joins_every_turn() {
        let mut ctx = CombatContext::scripted(vec![0.1]);
        let companion = Companion::new(Box::new(MeleeAttackStrategy));
        let mut battle = Battle::new(hero(), Some(companion), Box::new(Goblin::new()));

        let mut prompts = 0;
        let state = battle
            .run(&mut ctx, || {
                prompts += 1;
                Ok(())
            })
            .unwrap();

        // 20 + 10 per turn against 50 health
        assert_eq!(state, BattleState::EnemyDefeated);
        assert_eq!(battle.turns(), 2);
        assert_eq!(prompts, 2);
    }

    #[test]
    fn dead_enemy_still_rolls_and_retaliates() {
        let mut ctx = CombatContext::scripted(vec![0.9]);
        let mut battle = Battle::new(hero(), None, Box::new(Goblin::new()));

        battle.step(&mut ctx);
        battle.step(&mut ctx);
        battle.step(&mut ctx);

        assert_eq!(battle.state(), BattleState::EnemyDefeated);
        assert_eq!(battle.turns(), 3);
        // three retaliations, the last from a goblin at -10 health
        assert_eq!(battle.hero().health(), 76);
        assert_eq!(battle.step(&mut ctx), BattleState::EnemyDefeated);
        assert_eq!(battle.turns(), 3);
    }

    #[test]
    fn pacing_error_aborts() {
        let mut ctx = CombatContext::scripted(vec![0.9]);
        let mut battle = Battle::new(hero(), None, Box::new(Goblin::new()));

        let result = battle.run(&mut ctx, || Err(GameError::InputError("eof".into())));
        assert!(matches!(result, Err(GameError::InputError(_))));
        assert_eq!(battle.turns(), 0);
    }
}
