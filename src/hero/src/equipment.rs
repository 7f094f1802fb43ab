// src/hero/src/equipment.rs
//! 初始装备箱与武器外观

use items::{Armor, Bow, HeavyArmor, LightArmor, Robe, Staff, Sword, Weapon};

use crate::class::Class;

/// A matching weapon + armor kit.
pub trait EquipmentChest {
    fn weapon(&self) -> Box<dyn Weapon>;
    fn armor(&self) -> Box<dyn Armor>;
}

pub struct WarriorEquipmentChest;

impl EquipmentChest for WarriorEquipmentChest {
    fn weapon(&self) -> Box<dyn Weapon> {
        Box::new(Sword::new())
    }

    fn armor(&self) -> Box<dyn Armor> {
        Box::new(HeavyArmor)
    }
}

pub struct MagicalEquipmentChest;

impl EquipmentChest for MagicalEquipmentChest {
    fn weapon(&self) -> Box<dyn Weapon> {
        Box::new(Staff::new())
    }

    fn armor(&self) -> Box<dyn Armor> {
        Box::new(Robe)
    }
}

/// 盗贼与游荡者共用的装备
pub struct ThiefEquipmentChest;

impl EquipmentChest for ThiefEquipmentChest {
    fn weapon(&self) -> Box<dyn Weapon> {
        Box::new(Bow::new())
    }

    fn armor(&self) -> Box<dyn Armor> {
        Box::new(LightArmor)
    }
}

/// 获取职业的初始装备箱
pub fn starting_chest(class: Class) -> Box<dyn EquipmentChest> {
    match class {
        Class::Warrior => Box::new(WarriorEquipmentChest),
        Class::Mage => Box::new(MagicalEquipmentChest),
        Class::Thief | Class::Rogue => Box::new(ThiefEquipmentChest),
    }
}

/// Exposes only the weapon of a class's chest.
pub struct WeaponEquipmentFacade {
    chest: Box<dyn EquipmentChest>,
}

impl WeaponEquipmentFacade {
    pub fn new(class: Class) -> Self {
        Self {
            chest: starting_chest(class),
        }
    }

    pub fn weapon(&self) -> Box<dyn Weapon> {
        self.chest.weapon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use items::{ArmorKind, WeaponKind};

    #[test]
    fn kits_per_class() {
        let kit = |class| {
            let chest = starting_chest(class);
            (chest.weapon().kind(), chest.armor().kind())
        };

        assert_eq!(kit(Class::Warrior), (WeaponKind::Sword, ArmorKind::Heavy));
        assert_eq!(kit(Class::Mage), (WeaponKind::Staff, ArmorKind::Robe));
        assert_eq!(kit(Class::Thief), (WeaponKind::Bow, ArmorKind::Light));
        assert_eq!(kit(Class::Rogue), (WeaponKind::Bow, ArmorKind::Light));
    }

    #[test]
    fn facade_hands_out_the_weapon() {
        let facade = WeaponEquipmentFacade::new(Class::Mage);
        assert_eq!(facade.weapon().kind(), WeaponKind::Staff);
    }
}
