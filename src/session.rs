// src/session.rs
//! 一局完整的游戏：创建角色 → 选择地点 → 战斗 → 结算

use anyhow::Context;
use combat::{AugmentedEnemy, Enemy, roll_augments};
use context::CombatContext;
use hero::{Class, Companion, Hero, HeroConfig, starting_chest};
use save::PlayerProfile;

use crate::event_bus::{EventPublisher, GameEvent, SharedRepository};
use crate::game_loop::{Battle, BattleState};
use crate::input::Console;
use crate::location::LocationKind;

/// 强敌诅咒的概率
pub const STRONG_ENEMY_PROBABILITY: f64 = 0.5;

pub const NAME_PROMPT: &str = "Введите имя: ";
pub const CLASS_PROMPT: &str = "Введите класс: ";
pub const LOCATION_PROMPT: &str = "Введите локацию: ";
pub const ATTACK_PROMPT: &str = "Введите что-нибудь чтобы атаковать!";

/// How a finished run went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub state: BattleState,
    pub location: LocationKind,
    pub strong_enemy: bool,
    pub turns: u32,
    /// Profile as stored after the run.
    pub profile: PlayerProfile,
}

pub struct Session<C: Console> {
    console: C,
    ctx: CombatContext,
    repository: SharedRepository,
    publisher: EventPublisher,
}

impl<C: Console> Session<C> {
    pub fn new(
        console: C,
        ctx: CombatContext,
        repository: SharedRepository,
        publisher: EventPublisher,
    ) -> Self {
        Self {
            console,
            ctx,
            repository,
            publisher,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn context(&self) -> &CombatContext {
        &self.ctx
    }

    fn load_profile(&self, name: &str) -> anyhow::Result<PlayerProfile> {
        let profile = self
            .repository
            .borrow_mut()
            .get_profile(name)
            .with_context(|| format!("failed to load profile of {name}"))?;
        Ok(profile)
    }

    fn create_hero(&mut self, name: &str) -> anyhow::Result<(Hero, Companion)> {
        self.console
            .say(&format!("Выберите класс из списка: {}", Class::listing()));
        let class = Class::parse(&self.console.ask(CLASS_PROMPT)?)?;

        let chest = starting_chest(class);
        let hero = Hero::new(HeroConfig {
            name: name.to_string(),
            class,
            weapon: chest.weapon(),
            armor: chest.armor(),
        });
        let companion = Companion::for_class(class, &mut self.ctx)?;
        tracing::debug!(%class, companion = %companion.style(), "hero created");

        Ok((hero, companion))
    }

    /// Strong-enemy curse: with probability 0.5 the enemy gets augments.
    fn curse(&mut self, name: &str, enemy: Box<dyn Enemy>) -> (Box<dyn Enemy>, bool) {
        if self.ctx.roll() >= STRONG_ENEMY_PROBABILITY {
            return (enemy, false);
        }

        self.ctx.log(format!(
            "Боги особенно немилостивы к {name}, сегодня его ждет страшная битва..."
        ));
        let augments = roll_augments(&mut self.ctx);
        tracing::debug!(?augments, "strong enemy");
        (Box::new(AugmentedEnemy::new(enemy).with_all(augments)), true)
    }

    /// 运行一整局
    pub fn run(&mut self) -> anyhow::Result<SessionOutcome> {
        self.console.say("Создайте своего персонажа:");
        let name = self.console.ask(NAME_PROMPT)?;
        let profile = self.load_profile(&name)?;
        self.console.say(&format!(
            "Текущий счет игрока {name}: {}",
            profile.score()
        ));

        let (hero, companion) = self.create_hero(&name)?;

        self.publisher.notify_all(GameEvent::GameStart, &profile)?;
        self.ctx.log(format!("{name} очнулся на распутье!"));
        self.ctx
            .log(format!("К {name} присоединяется компаньон!"));

        self.console.say(&format!(
            "Куда вы двинетесь? Выберите локацию: {}",
            LocationKind::menu()
        ));
        let location_name = self.console.ask(LOCATION_PROMPT)?;
        let kind = LocationKind::parse(&location_name)?;
        let location = kind.build(&mut self.ctx);
        self.ctx.log(format!("{name} отправился в {location_name}"));

        let enemy = location.spawn_enemy(&mut self.ctx);
        let (enemy, strong_enemy) = self.curse(&name, enemy);
        self.ctx.log(format!(
            "У {name} на пути возникает {}, начинается бой!",
            enemy.name()
        ));

        let mut battle = Battle::new(hero, Some(companion), enemy);
        let console = &mut self.console;
        let state = battle.run(&mut self.ctx, || console.ask(ATTACK_PROMPT).map(drop))?;

        let profile = if state == BattleState::PlayerDefeated {
            self.ctx.log(format!("{name} был убит..."));
            self.publisher.notify_all(GameEvent::GameOver, &profile)?;

            let profile = self.load_profile(&name)?;
            self.console
                .say(&format!("Новый счет игрока {name}: {}", profile.score()));
            profile
        } else {
            self.ctx.log(format!(
                "Злой {} был побежден! {name} отправился дальше по тропе судьбы...",
                battle.enemy().name()
            ));

            let score = kind.score(strong_enemy);
            self.repository
                .borrow_mut()
                .update_high_score(&name, score)
                .with_context(|| format!("failed to store score of {name}"))?;

            let profile = self.load_profile(&name)?;
            self.console
                .say(&format!("Новый счет игрока {name}: {}", profile.score()));
            self.publisher.notify_all(GameEvent::GameVictory, &profile)?;
            profile
        };

        tracing::info!(player = %name, %state, score = profile.score(), "run finished");
        Ok(SessionOutcome {
            state,
            location: kind,
            strong_enemy,
            turns: battle.turns(),
            profile,
        })
    }
}
