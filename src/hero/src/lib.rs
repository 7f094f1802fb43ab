// src/hero/src/lib.rs
//! 英雄系统：职业、初始装备、同伴与玩家角色

pub mod character;
pub mod class;
pub mod companion;
pub mod equipment;

// 重新导出主要类型
pub use self::{
    character::{Hero, HeroConfig},
    class::Class,
    companion::{
        AttackStrategy, Companion, CompanionStyle, MeleeAttackStrategy, RangedAttackStrategy,
    },
    equipment::{EquipmentChest, WeaponEquipmentFacade, starting_chest},
};
