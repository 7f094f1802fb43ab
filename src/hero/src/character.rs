// src/hero/src/character.rs

use combat::{DamagePipeline, DamageTarget, Enemy, apply_damage};
use context::CombatContext;
use items::{Armor, Weapon};

use crate::class::Class;

/// Everything needed to create a hero. All fields are required.
#[derive(Debug)]
pub struct HeroConfig {
    pub name: String,
    pub class: Class,
    pub weapon: Box<dyn Weapon>,
    pub armor: Box<dyn Armor>,
}

/// 玩家角色
#[derive(Debug)]
pub struct Hero {
    name: String,
    class: Class,
    weapon: Box<dyn Weapon>,
    armor: Box<dyn Armor>,
    health: i32,
    /// 在护甲之前处理的伤害管道（默认为空）
    pipeline: DamagePipeline,
}

impl Hero {
    pub fn new(config: HeroConfig) -> Self {
        let HeroConfig {
            name,
            class,
            weapon,
            armor,
        } = config;

        Self {
            name,
            health: class.starting_health(),
            class,
            weapon,
            armor,
            pipeline: DamagePipeline::new(),
        }
    }

    /// Incoming damage runs through `pipeline` before armor.
    pub fn with_pipeline(mut self, pipeline: DamagePipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn weapon(&self) -> &dyn Weapon {
        self.weapon.as_ref()
    }

    pub fn armor(&self) -> &dyn Armor {
        self.armor.as_ref()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// 用武器攻击敌人
    pub fn attack(&self, enemy: &mut dyn Enemy, ctx: &mut CombatContext) {
        ctx.log(format!("{} атакует врага {}", self.name, enemy.name()));
        ctx.log(self.weapon.use_message());
        let damage = self.weapon.damage(ctx);
        enemy.take_damage(damage, ctx);
    }
}

impl DamageTarget for Hero {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_alive(&self) -> bool {
        Hero::is_alive(self)
    }

    fn take_damage(&mut self, amount: u32, ctx: &mut CombatContext) {
        let incoming = if self.pipeline.is_empty() {
            amount
        } else {
            self.pipeline.handle(amount, ctx.logger())
        };
        let reduced = self.armor.reduce(incoming);
        self.health = apply_damage(self.health, reduced);

        ctx.log(self.armor.block_message());
        ctx.log(format!("{} получил урон: {reduced}", self.name));

        if self.health > 0 {
            ctx.log(format!("{} осталось {} здоровья", self.name, self.health));
        }
    }
}
