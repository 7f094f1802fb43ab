// src/items/src/armor.rs
use std::fmt;

use strum::{Display, EnumIter};

/// 护甲种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ArmorKind {
    Heavy,
    Light,
    Robe,
}

/// Damage left after armor with the given defense fraction.
pub fn reduce_damage(raw: u32, defense: f64) -> u32 {
    (raw as f64 * (1.0 - defense)).round().max(0.0) as u32
}

/// Reduces incoming damage by a fixed fraction.
pub trait Armor: fmt::Debug {
    fn kind(&self) -> ArmorKind;

    /// Defense fraction in `[0, 1)`.
    fn defense(&self) -> f64;

    /// Flavour line narrated whenever the armor takes a hit.
    fn block_message(&self) -> &'static str;

    fn reduce(&self, raw: u32) -> u32 {
        reduce_damage(raw, self.defense())
    }
}

macro_rules! armor {
    ($name:ident, $kind:expr, $defense:expr, $message:expr) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name;

        impl $name {
            pub const DEFENSE: f64 = $defense;
        }

        impl Armor for $name {
            fn kind(&self) -> ArmorKind {
                $kind
            }

            fn defense(&self) -> f64 {
                Self::DEFENSE
            }

            fn block_message(&self) -> &'static str {
                $message
            }
        }
    };
}

armor!(
    HeavyArmor,
    ArmorKind::Heavy,
    0.3,
    "Тяжелая броня блокирует значительную часть урона"
);
armor!(LightArmor, ArmorKind::Light, 0.2, "Легкая броня блокирует урон");
armor!(Robe, ArmorKind::Robe, 0.1, "Роба блокирует немного урона");

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn heavy_armor_takes_thirty_percent() {
        assert_eq!(HeavyArmor.reduce(20), 14);
    }

    #[test]
    fn light_armor_takes_twenty_percent() {
        assert_eq!(LightArmor.reduce(50), 40);
        assert_eq!(Robe.reduce(30), 27);
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(reduce_damage(0, 0.3), 0);
    }

    proptest! {
        #[test]
        fn reduction_matches_formula(raw in 0u32..100_000, defense in 0.0f64..1.0) {
            let expected = (raw as f64 * (1.0 - defense)).round().max(0.0) as u32;
            prop_assert_eq!(reduce_damage(raw, defense), expected);
            prop_assert!(reduce_damage(raw, defense) <= raw);
        }
    }
}
