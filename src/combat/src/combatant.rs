// src/combat/src/combatant.rs

use context::CombatContext;

/// 可以承受敌人攻击的一方（玩家角色）
#[cfg_attr(test, mockall::automock)]
pub trait DamageTarget {
    /// 获取名称
    fn name(&self) -> String;

    /// 是否存活
    fn is_alive(&self) -> bool;

    /// 承受原始伤害，由目标自身的减伤规则处理
    fn take_damage(&mut self, amount: u32, ctx: &mut CombatContext);
}
