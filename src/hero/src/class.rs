// src/hero/src/class.rs

use error::GameError;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// 英雄职业枚举（输入区分大小写）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Class {
    Warrior, // 战士（生命值最高）
    Thief,   // 盗贼（弓与轻甲，同伴随机）
    Mage,    // 法师（法杖与长袍）
    Rogue,   // 游荡者（没有同伴）
}

impl Class {
    /// 获取职业的初始生命值
    pub fn starting_health(&self) -> i32 {
        match self {
            Class::Warrior => 100,
            Class::Thief => 90,
            Class::Mage => 80,
            Class::Rogue => 10,
        }
    }

    /// Parses a class name exactly as listed, e.g. `WARRIOR`.
    pub fn parse(input: &str) -> Result<Self, GameError> {
        input
            .parse()
            .map_err(|_| GameError::UnknownClass(input.to_string()))
    }

    /// "WARRIOR, THIEF, MAGE, ROGUE"
    pub fn listing() -> String {
        Class::iter()
            .map(|class| class.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_names_only() {
        assert_eq!(Class::parse("WARRIOR").unwrap(), Class::Warrior);
        assert_eq!(Class::parse("MAGE").unwrap(), Class::Mage);
        assert!(matches!(
            Class::parse("warrior"),
            Err(GameError::UnknownClass(name)) if name == "warrior"
        ));
        assert!(Class::parse("PALADIN").is_err());
    }

    #[test]
    fn listing_keeps_declaration_order() {
        assert_eq!(Class::listing(), "WARRIOR, THIEF, MAGE, ROGUE");
    }

    #[test]
    fn starting_health_per_class() {
        assert_eq!(Class::Warrior.starting_health(), 100);
        assert_eq!(Class::Thief.starting_health(), 90);
        assert_eq!(Class::Mage.starting_health(), 80);
        assert_eq!(Class::Rogue.starting_health(), 10);
    }
}
