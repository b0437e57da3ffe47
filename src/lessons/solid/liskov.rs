//! A square that inherits rectangle setters breaks callers that grow one
//! side. Birds get small capability traits instead of a base class.

use crate::domain::model::Topic;
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Resizable {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);

    fn area(&self) -> u32 {
        self.width() * self.height()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Resizable for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

/// Setting either side sets both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }
}

impl Resizable for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }

    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }
}

pub fn increase_width(shape: &mut dyn Resizable) {
    shape.set_width(shape.width() + 1);
}

pub trait Flyer {
    fn fly(&self) -> &'static str {
        "I can fly"
    }
}

pub trait Swimmer {
    fn swim(&self) -> &'static str {
        "I can swim"
    }
}

pub trait Quacker {
    fn quack(&self) -> &'static str {
        "I can quack"
    }
}

#[derive(Debug, Default)]
pub struct Duck;

impl Flyer for Duck {}
impl Quacker for Duck {}

#[derive(Debug, Default)]
pub struct Penguin;

impl Swimmer for Penguin {}

pub fn make_fly(bird: &impl Flyer) -> &'static str {
    bird.fly()
}

pub fn make_swim(bird: &impl Swimmer) -> &'static str {
    bird.swim()
}

#[derive(Debug, Default)]
pub struct LiskovLesson;

#[async_trait]
impl Lesson for LiskovLesson {
    fn name(&self) -> &'static str {
        "solid-lsp"
    }

    fn topic(&self) -> Topic {
        Topic::Solid
    }

    fn summary(&self) -> &'static str {
        "Liskov substitution: rectangle/square and composable bird capabilities"
    }

    async fn run(&self, console: &dyn Console) -> Result<()> {
        let mut rectangle = Rectangle::new(10, 2);
        let mut square = Square::new(5);

        increase_width(&mut rectangle);
        increase_width(&mut square);
        console.line(&rectangle.area().to_string());
        console.line(&square.area().to_string());

        let duck = Duck;
        let penguin = Penguin;
        console.line(make_fly(&duck));
        console.line(duck.quack());
        console.line(make_swim(&penguin));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Transcript;

    #[test]
    fn test_rectangle_grows_by_its_height() {
        let mut rectangle = Rectangle::new(10, 2);
        increase_width(&mut rectangle);
        assert_eq!(rectangle.area(), 22);
    }

    #[test]
    fn test_square_breaks_the_rectangle_expectation() {
        let mut square = Square::new(5);
        let expected_for_a_rectangle = (square.width() + 1) * square.height();

        increase_width(&mut square);

        assert_eq!(expected_for_a_rectangle, 30);
        assert_eq!(square.area(), 36);
        assert_eq!(square.height(), 6);
    }

    #[test]
    fn test_square_set_height_sets_both() {
        let mut square = Square::new(2);
        square.set_height(4);
        assert_eq!((square.width(), square.height()), (4, 4));
    }

    #[test]
    fn test_bird_capabilities() {
        assert_eq!(make_fly(&Duck), "I can fly");
        assert_eq!(Duck.quack(), "I can quack");
        assert_eq!(make_swim(&Penguin), "I can swim");
    }

    #[tokio::test]
    async fn test_lesson_output() {
        let transcript = Transcript::new();
        LiskovLesson.run(&transcript).await.unwrap();

        assert_eq!(
            transcript.into_lines(),
            vec!["22", "36", "I can fly", "I can quack", "I can swim"]
        );
    }
}
