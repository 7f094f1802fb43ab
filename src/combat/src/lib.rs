// src/combat/src/lib.rs
//! 战斗实体模型：敌人、伤害管道与敌人强化

pub mod augment;
pub mod combatant;
pub mod enchanted;
pub mod enemy;
pub mod pipeline;


pub use crate::augment::{Augment, AugmentedEnemy, roll_augments};
pub use crate::combatant::DamageTarget;
pub use crate::enchanted::EnchantedWeapon;
pub use crate::enemy::{Dragon, Enemy, Goblin, apply_damage};
pub use crate::pipeline::{Barrier, DamageModifier, DamagePipeline, Invulnerability, Multiplier};
