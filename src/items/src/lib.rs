//src/items/src/lib.rs
//! 装备：武器与护甲

pub mod armor;
pub mod weapon;

pub use crate::armor::{Armor, ArmorKind, HeavyArmor, LightArmor, Robe, reduce_damage};
pub use crate::weapon::{Bow, Staff, Sword, Weapon, WeaponKind};
