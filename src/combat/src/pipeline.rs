//! Damage pipeline applied to incoming damage before health is reduced.
//!
//! Stages run left-to-right. A stage either continues with a (possibly
//! changed) value or breaks, ending the pipeline with its value. Invulnerability
//! breaks with 0, so stages after it never run.

use std::fmt;
use std::ops::ControlFlow;

use context::GameLogger;

/// One stage of a [`DamagePipeline`].
pub trait DamageModifier: fmt::Debug {
    fn apply(&mut self, damage: u32, logger: &GameLogger) -> ControlFlow<u32, u32>;
}

/// 增益/减益：按倍率修改伤害
#[derive(Debug, Clone, Copy)]
pub struct Multiplier {
    factor: f64,
}

impl Multiplier {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl DamageModifier for Multiplier {
    fn apply(&mut self, damage: u32, logger: &GameLogger) -> ControlFlow<u32, u32> {
        logger.log(format!(
            "На персонажа наложен эффект, который модифицирует урон в {} раз!",
            self.factor
        ));

        let damage = (damage as f64 * self.factor).round().max(0.0) as u32;

        logger.log(format!("Урон стал {damage}"));
        ControlFlow::Continue(damage)
    }
}

/// 无敌：伤害归零并终止管道
#[derive(Debug, Clone, Copy, Default)]
pub struct Invulnerability;

impl DamageModifier for Invulnerability {
    fn apply(&mut self, _damage: u32, logger: &GameLogger) -> ControlFlow<u32, u32> {
        logger.log("На персонажа наложена неуязвимость!!!");
        ControlFlow::Break(0)
    }
}

/// 护盾：吸收伤害直到耐久耗尽，耐久跨调用保留
#[derive(Debug, Clone, Copy)]
pub struct Barrier {
    integrity: u32,
}

impl Barrier {
    pub fn new(integrity: u32) -> Self {
        Self { integrity }
    }

    pub fn integrity(&self) -> u32 {
        self.integrity
    }
}

impl DamageModifier for Barrier {
    fn apply(&mut self, damage: u32, logger: &GameLogger) -> ControlFlow<u32, u32> {
        if self.integrity == 0 {
            logger.log("Барьер персонажа не может заблокировать урон");
            return ControlFlow::Continue(damage);
        }

        logger.log(format!(
            "У персонажа есть барьер с прочностью {}",
            self.integrity
        ));

        if self.integrity >= damage {
            self.integrity -= damage;
            logger.log("Барьер полностью поглотил урон");
            logger.log("Урон стал 0");
            return ControlFlow::Continue(0);
        }

        let rest = damage - self.integrity;
        self.integrity = 0;
        logger.log("Барьер персонажа был рассеян");
        logger.log(format!("Урон стал {rest}"));
        ControlFlow::Continue(rest)
    }
}

/// Ordered damage stages, fixed once built.
#[derive(Debug, Default)]
pub struct DamagePipeline {
    stages: Vec<Box<dyn DamageModifier>>,
}

impl DamagePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage.
    pub fn then(mut self, stage: impl DamageModifier + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn handle(&mut self, damage: u32, logger: &GameLogger) -> u32 {
        match self
            .stages
            .iter_mut()
            .try_fold(damage, |damage, stage| stage.apply(damage, logger))
        {
            ControlFlow::Continue(damage) | ControlFlow::Break(damage) => damage,
        }
    }
}
