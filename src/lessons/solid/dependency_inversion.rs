use crate::domain::model::Topic;
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

pub const BIKE_PRICE_DOLLARS: u64 = 200;
pub const HELMET_PRICE_DOLLARS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub payer: String,
    pub amount_cents: u64,
    pub method: &'static str,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = self.amount_cents / 100;
        let cents = self.amount_cents % 100;
        if cents == 0 {
            write!(f, "{} made a payment of ${} {}", self.payer, dollars, self.method)
        } else {
            write!(
                f,
                "{} made a payment of ${}.{:02} {}",
                self.payer, dollars, cents, self.method
            )
        }
    }
}

/// Vendor API the legacy store is hard-wired to.
pub struct CreditCardX {
    user: String,
}

impl CreditCardX {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    pub fn make_payment(&self, amount_in_cents: u64) -> Receipt {
        Receipt {
            payer: self.user.clone(),
            amount_cents: amount_in_cents,
            method: "using Credit Card X",
        }
    }
}

/// Depends directly on one card; switching cards means editing every purchase.
pub struct LegacyStore {
    card: CreditCardX,
}

impl LegacyStore {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            card: CreditCardX::new(user),
        }
    }

    pub fn purchase_bike(&self, quantity: u64) -> Receipt {
        self.card.make_payment(BIKE_PRICE_DOLLARS * quantity * 100)
    }

    pub fn purchase_helmet(&self, quantity: u64) -> Receipt {
        self.card.make_payment(HELMET_PRICE_DOLLARS * quantity * 100)
    }
}

pub trait PaymentProcessor: Send + Sync {
    fn pay(&self, amount_in_dollars: u64) -> Receipt;
}

pub struct Store<P: PaymentProcessor> {
    processor: P,
}

impl<P: PaymentProcessor> Store<P> {
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    pub fn purchase_bike(&self, quantity: u64) -> Receipt {
        self.processor.pay(BIKE_PRICE_DOLLARS * quantity)
    }

    pub fn purchase_helmet(&self, quantity: u64) -> Receipt {
        self.processor.pay(HELMET_PRICE_DOLLARS * quantity)
    }
}

pub struct CreditCardYolo {
    user: String,
}

impl CreditCardYolo {
    pub fn make_payment(&self, amount_in_cents: u64) -> Receipt {
        Receipt {
            payer: self.user.clone(),
            amount_cents: amount_in_cents,
            method: "with Credit Card Yolo",
        }
    }
}

pub struct CreditCardYoloProcessor {
    card: CreditCardYolo,
}

impl CreditCardYoloProcessor {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            card: CreditCardYolo { user: user.into() },
        }
    }
}

impl PaymentProcessor for CreditCardYoloProcessor {
    fn pay(&self, amount_in_dollars: u64) -> Receipt {
        self.card.make_payment(amount_in_dollars * 100)
    }
}

pub struct CreditCardZulu {
    user: String,
}

impl CreditCardZulu {
    pub fn make_payment(&self, amount_in_cents: u64) -> Receipt {
        Receipt {
            payer: self.user.clone(),
            amount_cents: amount_in_cents,
            method: "with Credit Card Zulu",
        }
    }
}

pub struct CreditCardZuluProcessor {
    card: CreditCardZulu,
}

impl CreditCardZuluProcessor {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            card: CreditCardZulu { user: user.into() },
        }
    }
}

impl PaymentProcessor for CreditCardZuluProcessor {
    fn pay(&self, amount_in_dollars: u64) -> Receipt {
        self.card.make_payment(amount_in_dollars * 100)
    }
}

#[derive(Debug, Default)]
pub struct DependencyInversionLesson;

#[async_trait]
impl Lesson for DependencyInversionLesson {
    fn name(&self) -> &'static str {
        "solid-dip"
    }

    fn topic(&self) -> Topic {
        Topic::Solid
    }

    fn summary(&self) -> &'static str {
        "Dependency inversion: the store only knows the PaymentProcessor trait"
    }

    async fn run(&self, console: &dyn Console) -> Result<()> {
        let legacy = LegacyStore::new("Store Best");
        console.line(&legacy.purchase_bike(2).to_string());
        console.line(&legacy.purchase_helmet(2).to_string());

        let store = Store::new(CreditCardYoloProcessor::new("Sally"));
        console.line(&store.purchase_helmet(2).to_string());
        console.line(&store.purchase_bike(2).to_string());

        let store2 = Store::new(CreditCardZuluProcessor::new("John"));
        console.line(&store2.purchase_helmet(4).to_string());
        console.line(&store2.purchase_bike(3).to_string());
        Ok(())
    }
}
