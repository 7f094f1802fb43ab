// src/chain_demo.rs
//! 启动时的伤害管道演示

use combat::{Barrier, DamagePipeline, Invulnerability, Multiplier};
use context::GameLogger;

use crate::input::Console;

const RULE: &str = "--------------------------------------------------------";

/// Inputs of the demo run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainDemo {
    pub incoming_damage: u32,
    pub multiplier: f64,
    pub invulnerability: bool,
    pub barrier: u32,
}

impl Default for ChainDemo {
    fn default() -> Self {
        Self {
            incoming_damage: 100,
            multiplier: 1.5,
            invulnerability: true,
            barrier: 100,
        }
    }
}

impl ChainDemo {
    /// Multiplier → Invulnerability → Barrier, then the optional extra stages.
    pub fn pipeline(&self) -> DamagePipeline {
        let mut pipeline = DamagePipeline::new()
            .then(Multiplier::new(self.multiplier))
            .then(Invulnerability)
            .then(Barrier::new(100));

        if self.invulnerability {
            pipeline = pipeline.then(Invulnerability);
        }
        if self.barrier > 0 {
            pipeline = pipeline.then(Barrier::new(self.barrier));
        }
        pipeline
    }

    /// 打印测试数据并运行管道，返回最终伤害
    pub fn run(&self, console: &mut dyn Console, logger: &GameLogger) -> u32 {
        console.say(RULE);
        console.say("----------ТЕСТОВЫЙ ПРОГОН ЦЕПОЧКИ ОБЯЗАННОСТЕЙ----------");
        console.say("Тестовые данные:");
        console.say(&format!("    Входящий урон: {},", self.incoming_damage));
        console.say(&format!("    Множитель: {},", self.multiplier));
        console.say(&format!("    Неуязвимость: {},", self.invulnerability));
        console.say(&format!("    Прочность барьера: {}", self.barrier));

        let final_damage = self.pipeline().handle(self.incoming_damage, logger);
        logger.log(format!("Итоговый урон: {final_damage}"));

        console.say("----------------ТЕСТОВЫЙ ПРОГОН ЗАВЕРШЕН----------------");
        console.say(RULE);
        final_damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedConsole;
    use pretty_assertions::assert_eq;

    #[test]
    fn demo_ends_at_zero() {
        let mut console = ScriptedConsole::default();
        let logger = GameLogger::memory();

        let damage = ChainDemo::default().run(&mut console, &logger);

        assert_eq!(damage, 0);
        assert_eq!(
            logger.messages(),
            vec![
                "На персонажа наложен эффект, который модифицирует урон в 1.5 раз!",
                "Урон стал 150",
                "На персонажа наложена неуязвимость!!!",
                "Итоговый урон: 0",
            ]
        );
        assert_eq!(console.transcript()[3], "    Входящий урон: 100,");
    }

    #[test]
    fn optional_stages_follow_the_flags() {
        let demo = ChainDemo {
            invulnerability: false,
            barrier: 0,
            ..ChainDemo::default()
        };
        assert_eq!(demo.pipeline().len(), 3);
        assert_eq!(ChainDemo::default().pipeline().len(), 5);
    }
}
