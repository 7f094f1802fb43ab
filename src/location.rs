//! 地点：决定遭遇的敌人与胜利积分

use combat::{Dragon, EnchantedWeapon, Enemy, Goblin};
use context::CombatContext;
use error::GameError;
use hero::{Class, WeaponEquipmentFacade};
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum LocationKind {
    #[strum(serialize = "мистический лес")]
    Forest,
    #[strum(serialize = "проклятый особняк")]
    HauntedManor,
    #[strum(serialize = "логово дракона")]
    DragonBarrow,
}

impl LocationKind {
    /// Case-insensitive lookup by the location's Russian name.
    pub fn parse(input: &str) -> Result<Self, GameError> {
        let wanted = input.to_lowercase();
        Self::iter()
            .find(|kind| kind.to_string() == wanted)
            .ok_or_else(|| GameError::UnknownLocation(input.to_string()))
    }

    pub fn base_score(self) -> u32 {
        match self {
            Self::Forest => 10,
            Self::HauntedManor => 50,
            Self::DragonBarrow => 100,
        }
    }

    /// 胜利积分，强化敌人翻倍
    pub fn score(self, strong_enemy: bool) -> u32 {
        if strong_enemy {
            self.base_score() * 2
        } else {
            self.base_score()
        }
    }

    /// "(мистический лес, проклятый особняк, логово дракона)"
    pub fn menu() -> String {
        let names: Vec<String> = Self::iter().map(|kind| kind.to_string()).collect();
        format!("({})", names.join(", "))
    }

    pub fn build(self, ctx: &mut CombatContext) -> Box<dyn Location> {
        match self {
            Self::Forest => Box::new(Forest),
            Self::HauntedManor => Box::new(HauntedManor::new(ctx)),
            Self::DragonBarrow => Box::new(DragonBarrow),
        }
    }
}

pub trait Location {
    fn kind(&self) -> LocationKind;
    fn spawn_enemy(&self, ctx: &mut CombatContext) -> Box<dyn Enemy>;
}

pub struct Forest;

impl Location for Forest {
    fn kind(&self) -> LocationKind {
        LocationKind::Forest
    }

    fn spawn_enemy(&self, _ctx: &mut CombatContext) -> Box<dyn Enemy> {
        Box::new(Goblin::new())
    }
}

pub struct DragonBarrow;

impl Location for DragonBarrow {
    fn kind(&self) -> LocationKind {
        LocationKind::DragonBarrow
    }

    fn spawn_enemy(&self, _ctx: &mut CombatContext) -> Box<dyn Enemy> {
        Box::new(Dragon::new())
    }
}

/// 闹鬼的宅邸：随机职业的武器被附魔成敌人
pub struct HauntedManor {
    class: Class,
    facade: WeaponEquipmentFacade,
}

impl HauntedManor {
    /// Picks the haunted class uniformly among all classes.
    pub fn new(ctx: &mut CombatContext) -> Self {
        let classes: Vec<Class> = Class::iter().collect();
        let index = ((ctx.roll() * classes.len() as f64) as usize).min(classes.len() - 1);
        Self::for_class(classes[index])
    }

    pub fn for_class(class: Class) -> Self {
        Self {
            class,
            facade: WeaponEquipmentFacade::new(class),
        }
    }

    pub fn class(&self) -> Class {
        self.class
    }
}

impl Location for HauntedManor {
    fn kind(&self) -> LocationKind {
        LocationKind::HauntedManor
    }

    fn spawn_enemy(&self, ctx: &mut CombatContext) -> Box<dyn Enemy> {
        Box::new(EnchantedWeapon::new(self.facade.weapon().as_ref(), ctx))
    }
}
