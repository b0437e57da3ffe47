use crate::domain::model::Topic;
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Named {
    fn name(&self) -> &str;
}

pub trait Mover: Named {
    fn walk(&self, console: &dyn Console) {
        console.line(&format!("{} moved.", self.name()));
    }
}

pub trait HasHealth: Named {
    fn health(&self) -> u32;
    fn set_health(&mut self, health: u32);

    /// Health never drops below zero.
    fn take_damage(&mut self, amount: u32, console: &dyn Console) {
        self.set_health(self.health().saturating_sub(amount));
        console.line(&format!(
            "{} has {} health remaining",
            self.name(),
            self.health()
        ));
    }
}

pub trait Attacker: Named {
    fn attack_damage(&self) -> u32;

    fn attack(&self, target: &mut dyn HasHealth, console: &dyn Console) {
        console.line(&format!(
            "{} attacked {} for {} damage.",
            self.name(),
            target.name(),
            self.attack_damage()
        ));
        target.take_damage(self.attack_damage(), console);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    attack_damage: u32,
    health: u32,
}

impl Character {
    pub fn new(name: impl Into<String>, attack_damage: u32, health: u32) -> Self {
        Self {
            name: name.into(),
            attack_damage,
            health,
        }
    }
}

impl Named for Character {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Mover for Character {}

impl Attacker for Character {
    fn attack_damage(&self) -> u32 {
        self.attack_damage
    }
}

impl HasHealth for Character {
    fn health(&self) -> u32 {
        self.health
    }

    fn set_health(&mut self, health: u32) {
        self.health = health;
    }
}

/// Can be damaged; cannot move or attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wall {
    name: String,
    health: u32,
}

impl Wall {
    pub fn new(name: impl Into<String>, health: u32) -> Self {
        Self {
            name: name.into(),
            health,
        }
    }
}

impl Named for Wall {
    fn name(&self) -> &str {
        &self.name
    }
}

impl HasHealth for Wall {
    fn health(&self) -> u32 {
        self.health
    }

    fn set_health(&mut self, health: u32) {
        self.health = health;
    }
}

/// Attacks only; has no health to lose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turret {
    name: String,
    attack_damage: u32,
}

impl Turret {
    pub fn new(name: impl Into<String>, attack_damage: u32) -> Self {
        Self {
            name: name.into(),
            attack_damage,
        }
    }
}

impl Named for Turret {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Attacker for Turret {
    fn attack_damage(&self) -> u32 {
        self.attack_damage
    }
}

#[derive(Debug, Default)]
pub struct InterfaceSegregationLesson;

#[async_trait]
impl Lesson for InterfaceSegregationLesson {
    fn name(&self) -> &'static str {
        "solid-isp"
    }

    fn topic(&self) -> Topic {
        Topic::Solid
    }

    fn summary(&self) -> &'static str {
        "Interface segregation: entities pick only the capabilities they need"
    }

    async fn run(&self, console: &dyn Console) -> Result<()> {
        let turret = Turret::new("turret", 5);
        let mut character = Character::new("character", 3, 10);
        let mut wall = Wall::new("wall", 200);

        turret.attack(&mut character, console);
        character.walk(console);
        character.attack(&mut wall, console);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Transcript;

    #[test]
    fn test_damage_saturates_at_zero() {
        let transcript = Transcript::new();
        let mut wall = Wall::new("wall", 2);

        Turret::new("turret", 5).attack(&mut wall, &transcript);

        assert_eq!(wall.health(), 0);
        assert_eq!(
            transcript.into_lines(),
            vec!["turret attacked wall for 5 damage.", "wall has 0 health remaining"]
        );
    }

    #[test]
    fn test_character_can_fight_another_character() {
        let transcript = Transcript::new();
        let attacker = Character::new("knight", 4, 10);
        let mut defender = Character::new("squire", 1, 10);

        attacker.attack(&mut defender, &transcript);
        assert_eq!(defender.health(), 6);
    }

    #[tokio::test]
    async fn test_lesson_output() {
        let transcript = Transcript::new();
        InterfaceSegregationLesson.run(&transcript).await.unwrap();

        assert_eq!(
            transcript.into_lines(),
            vec![
                "turret attacked character for 5 damage.",
                "character has 5 health remaining",
                "character moved.",
                "character attacked wall for 3 damage.",
                "wall has 197 health remaining",
            ]
        );
    }
}
