//! Enemy augmentations.
//!
//! An [`AugmentedEnemy`] is a base enemy plus an ordered list of augments.
//! The last augment is the outermost layer: attacking runs the outermost
//! augment, which runs the layers beneath it. Order matters, e.g. a Windfury
//! over a Legendary repeats the Legendary bonus hit, a Legendary over a
//! Windfury adds it once.

use context::CombatContext;
use strum::{Display, EnumIter};

use crate::combatant::DamageTarget;
use crate::enemy::Enemy;

/// 敌人强化类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Augment {
    /// 传奇：每次攻击后追加一次固定伤害
    Legendary,
    /// 风怒：每次攻击执行两遍
    Windfury,
}

impl Augment {
    pub const LEGENDARY_BONUS_DAMAGE: u32 = 20;

    pub fn title(&self) -> &'static str {
        match self {
            Augment::Legendary => "Легендарный",
            Augment::Windfury => "Обладающий Неистовством Ветра",
        }
    }
}

/// 概率：在强敌诅咒下出现第二个强化
pub const SECOND_AUGMENT_PROBABILITY: f64 = 0.3;

/// Rolls the augments of a strong enemy: one, sometimes two, in random order.
pub fn roll_augments(ctx: &mut CombatContext) -> Vec<Augment> {
    let second = ctx.roll() <= SECOND_AUGMENT_PROBABILITY;

    let (first, other) = if ctx.roll() < 0.5 {
        (Augment::Legendary, Augment::Windfury)
    } else {
        (Augment::Windfury, Augment::Legendary)
    };

    if second {
        vec![first, other]
    } else {
        vec![first]
    }
}

/// Base enemy with layered augments. Everything except the name and the
/// attack forwards to the base enemy.
pub struct AugmentedEnemy {
    base: Box<dyn Enemy>,
    augments: Vec<Augment>,
}

impl AugmentedEnemy {
    pub fn new(base: Box<dyn Enemy>) -> Self {
        Self {
            base,
            augments: Vec::new(),
        }
    }

    /// Wraps one more augment around the current layers.
    pub fn with(mut self, augment: Augment) -> Self {
        self.augments.push(augment);
        self
    }

    pub fn with_all(mut self, augments: impl IntoIterator<Item = Augment>) -> Self {
        self.augments.extend(augments);
        self
    }

    /// Attack through the innermost `depth` layers.
    fn attack_layers(
        &mut self,
        depth: usize,
        target: &mut dyn DamageTarget,
        ctx: &mut CombatContext,
    ) {
        let Some(layer) = depth.checked_sub(1) else {
            self.base.attack(target, ctx);
            return;
        };

        match self.augments[layer] {
            Augment::Legendary => {
                self.attack_layers(layer, target, ctx);
                ctx.log("Враг легендарный и наносит дополнительный урон!!!");
                target.take_damage(Augment::LEGENDARY_BONUS_DAMAGE, ctx);
            }
            Augment::Windfury => {
                self.attack_layers(layer, target, ctx);
                ctx.log("Неистовство ветра позволяет врагу атаковать второй раз!!!");
                self.attack_layers(layer, target, ctx);
            }
        }
    }
}

impl Enemy for AugmentedEnemy {
    fn name(&self) -> String {
        self.augments
            .iter()
            .fold(self.base.name(), |name, augment| {
                format!("{} {}", augment.title(), name)
            })
    }

    fn health(&self) -> i32 {
        self.base.health()
    }

    fn damage(&self) -> u32 {
        self.base.damage()
    }

    fn is_alive(&self) -> bool {
        self.base.is_alive()
    }

    fn take_damage(&mut self, amount: u32, ctx: &mut CombatContext) {
        self.base.take_damage(amount, ctx);
    }

    fn attack(&mut self, target: &mut dyn DamageTarget, ctx: &mut CombatContext) {
        let depth = self.augments.len();
        self.attack_layers(depth, target, ctx);
    }
}
