use std::ops::Deref;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Order {
    #[prost(oneof = "order::Payment", tags = "1, 2")]
    payment: Option<order::Payment>,
}

#[derive(Default)]
pub struct OrderBuilder {
    message: Order,
}

impl Deref for OrderBuilder {
    type Target = Order;

    fn deref(&self) -> &Order {
        &self.message
    }
}

pub mod order {
    use schedule_transmission::OneofAccessors;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Card {
        #[prost(string, tag = "1")]
        pub last_digits: String,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof, OneofAccessors)]
    #[accessors(
        message = "super::Order",
        builder = "super::OrderBuilder",
        field = "payment",
        case = "PaymentCase"
    )]
    pub enum Payment {
        #[prost(message, tag = "1")]
        Card(Card),
        #[prost(uint64, tag = "2")]
        GiftCardBalance(u64),
    }
}

fn main() {
    use order::{Card, PaymentCase};

    let mut builder = OrderBuilder::default();
    builder
        .set_gift_card_balance(250)
        .set_card(Card {
            last_digits: "4242".into(),
        });
    assert_eq!(builder.payment_case(), PaymentCase::Card);
    assert!(!builder.has_gift_card_balance());

    assert_eq!(builder.take_gift_card_balance(), None);
    assert_eq!(builder.card().last_digits, "4242");

    let order = builder.message;
    assert_eq!(order.card_or_none().map(|c| c.last_digits.as_str()), Some("4242"));
    assert_eq!(order.gift_card_balance_or_none(), None);
}
