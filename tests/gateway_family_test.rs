use paykit::Gateway;
use paykit::domain::ports::GatewayFactoryBox;
use paykit::infrastructure::gateways::{MercadoPagoFactory, PagSeguroFactory};

const CARDS: &[&str] = &[
    "",
    "5",
    "1234567890123456",
    "5234567890123456",
    "0000000000000000",
    "5555555555555555",
    "523456789012345",
    "52345678901234567",
    "abcdefghijklmnop",
    "5bcdefghijklmnop",
];

#[test]
fn test_factories_as_trait_objects() {
    let factories: Vec<GatewayFactoryBox> =
        vec![Box::new(PagSeguroFactory), Box::new(MercadoPagoFactory)];

    let names: Vec<&str> = factories.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["PagSeguro", "MercadoPago"]);
}

#[test]
fn test_each_create_call_returns_a_fresh_instance() {
    for gateway in Gateway::ALL {
        let factory = gateway.factory();

        let (v1, v2) = (factory.create_validator(), factory.create_validator());
        assert!(!std::ptr::addr_eq(&*v1, &*v2));

        let (p1, p2) = (factory.create_processor(), factory.create_processor());
        assert!(!std::ptr::addr_eq(&*p1, &*p2));

        let (l1, l2) = (factory.create_logger(), factory.create_logger());
        assert!(!std::ptr::addr_eq(&*l1, &*l2));
    }
}

#[test]
fn test_pagseguro_accepts_exactly_sixteen_characters() {
    let validator = Gateway::PagSeguro.factory().create_validator();
    for card in CARDS {
        assert_eq!(
            validator.validate_card(card),
            card.chars().count() == 16,
            "card {card:?}"
        );
    }
}

#[test]
fn test_mercadopago_accepts_sixteen_characters_starting_with_five() {
    let validator = Gateway::MercadoPago.factory().create_validator();
    for card in CARDS {
        assert_eq!(
            validator.validate_card(card),
            card.chars().count() == 16 && card.starts_with('5'),
            "card {card:?}"
        );
    }
}

#[test]
fn test_mercadopago_accepted_set_is_subset_of_pagseguro() {
    let pagseguro = Gateway::PagSeguro.factory().create_validator();
    let mercadopago = Gateway::MercadoPago.factory().create_validator();

    for card in CARDS {
        if mercadopago.validate_card(card) {
            assert!(pagseguro.validate_card(card), "card {card:?}");
        }
    }
    assert!(pagseguro.validate_card("1234567890123456"));
    assert!(!mercadopago.validate_card("1234567890123456"));
}

#[test]
fn test_processor_ids_carry_the_variant_prefix_and_never_repeat() {
    let pagseguro = Gateway::PagSeguro.factory().create_processor();
    let mercadopago = Gateway::MercadoPago.factory().create_processor();

    let mut seen = std::collections::HashSet::new();
    for i in 0..500 {
        let amount = rust_decimal::Decimal::from(i);
        let a = pagseguro.process_transaction(amount, "1234567890123456");
        let b = mercadopago.process_transaction(amount, "5234567890123456");
        assert!(a.as_str().starts_with("PAGSEG-"));
        assert!(b.as_str().starts_with("MP-"));
        assert!(seen.insert(a));
        assert!(seen.insert(b));
    }
}
