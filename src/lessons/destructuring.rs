use crate::domain::model::Topic;
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const NO_VALUE: &str = "No value";
pub const DEFAULT_FOOD: &str = "rice";
pub const NO_STREET: &str = "no street";

pub fn first_two_and_rest<T>(items: &[T]) -> Option<(&T, &T, &[T])> {
    match items {
        [one, two, rest @ ..] => Some((one, two, rest)),
        _ => None,
    }
}

pub fn head_and_rest<T>(items: &[T]) -> Option<(&T, &[T])> {
    match items {
        [head, rest @ ..] => Some((head, rest)),
        [] => None,
    }
}

pub fn combine<T: Clone>(left: &[T], right: &[T]) -> Vec<T> {
    [left, right].concat()
}

pub fn sum_and_multiply(a: f64, b: f64) -> Vec<f64> {
    vec![a + b, a * b, a / b]
}

/// Takes the first two results and renders the third, falling back to
/// `"No value"` when it is missing.
pub fn unpack_results(values: &[f64]) -> Option<(f64, f64, String)> {
    let [sum, multiply, rest @ ..] = values else {
        return None;
    };
    let division = rest
        .first()
        .map_or_else(|| NO_VALUE.to_string(), f64::to_string);
    Some((*sum, *multiply, division))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favourite_food: Option<String>,
}

/// Fields to overwrite; `None` keeps the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub address: Option<Address>,
    pub favourite_food: Option<String>,
}

impl From<Person> for PersonPatch {
    fn from(person: Person) -> Self {
        let Person {
            name,
            age,
            address,
            favourite_food,
        } = person;
        Self {
            name: Some(name),
            age: Some(age),
            address,
            favourite_food,
        }
    }
}

impl Person {
    /// Shallow merge. The address is replaced as a whole, never merged
    /// field by field.
    pub fn merged_with(self, patch: impl Into<PersonPatch>) -> Person {
        let PersonPatch {
            name,
            age,
            address,
            favourite_food,
        } = patch.into();

        Person {
            name: name.unwrap_or(self.name),
            age: age.unwrap_or(self.age),
            address: address.or(self.address),
            favourite_food: favourite_food.or(self.favourite_food),
        }
    }
}

/// Renamed and defaulted view over a [`Person`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonView<'a> {
    pub first_name: &'a str,
    pub age: u32,
    pub favourite_food: &'a str,
    pub street: &'a str,
}

impl<'a> From<&'a Person> for PersonView<'a> {
    fn from(person: &'a Person) -> Self {
        let Person {
            name: first_name,
            age,
            address,
            favourite_food,
        } = person;

        let street = address
            .as_ref()
            .and_then(|address| address.street.as_deref())
            .unwrap_or(NO_STREET);

        Self {
            first_name,
            age: *age,
            favourite_food: favourite_food.as_deref().unwrap_or(DEFAULT_FOOD),
            street,
        }
    }
}

pub fn print_user(Person { name, age, .. }: &Person) -> String {
    format!("The name is {} and age is {}", name, age)
}

/// Keys from `right` overwrite keys from `left`; nested values are not merged.
pub fn shallow_merge(left: &Map<String, Value>, right: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = left.clone();
    merged.extend(right.iter().map(|(key, value)| (key.clone(), value.clone())));
    merged
}

pub fn yamada() -> Person {
    Person {
        name: "Yamada".to_string(),
        age: 21,
        address: Some(Address {
            city: "Tokyo".to_string(),
            country: "Japan".to_string(),
            street: None,
        }),
        favourite_food: None,
    }
}

pub fn muthu() -> Person {
    Person {
        name: "Muthu".to_string(),
        age: 23,
        address: None,
        favourite_food: None,
    }
}

#[derive(Debug, Default)]
pub struct DestructuringLesson;

#[async_trait]
impl Lesson for DestructuringLesson {
    fn name(&self) -> &'static str {
        "destructuring"
    }

    fn topic(&self) -> Topic {
        Topic::Destructuring
    }

    fn summary(&self) -> &'static str {
        "Slice patterns, defaults for missing fields and shallow record merges"
    }

    async fn run(&self, console: &dyn Console) -> Result<()> {
        let first = [1, 2, 3, 4, 5];
        let second = [6, 7, 8, 9];

        if let Some((one, two, rest)) = first_two_and_rest(&first) {
            console.line(&one.to_string());
            console.line(&two.to_string());
            console.line(&format!("{:?}", rest));
        }
        console.line(&format!("{:?}", combine(&first, &second)));

        if let Some((sum, multiply, division)) = unpack_results(&sum_and_multiply(2.0, 3.0)) {
            console.line(&sum.to_string());
            console.line(&multiply.to_string());
            console.line(&division);
        }

        let person1 = yamada();
        let person2 = muthu();

        let PersonView {
            first_name,
            age,
            favourite_food,
            street,
        } = PersonView::from(&person1);
        console.line(first_name);
        console.line(&age.to_string());
        console.line(favourite_food);
        console.line(street);

        let person3 = person1.clone().merged_with(person2.clone());
        console.line(&serde_json::to_string(&person3)?);

        console.line(&print_user(&person2));
        Ok(())
    }
}
