use rand::Rng;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use vendo::catalog::{Catalog, Item};
use vendo::machine::Machine;
use vendo::selection::Selection;

fn catalog() -> Catalog {
    Catalog::new(HashMap::from([
        (
            Selection::Soda,
            Item {
                price: dec!(1.00),
                quantity: 5,
            },
        ),
        (
            Selection::Chips,
            Item {
                price: dec!(1.50),
                quantity: 0,
            },
        ),
    ]))
}

#[test]
fn test_failing_requests_never_mutate_state() {
    let mut machine = Machine::with_balance(catalog(), dec!(0.25));
    let balance = machine.balance();
    let soda = *machine.item_for(Selection::Soda).unwrap();
    let chips = *machine.item_for(Selection::Chips).unwrap();

    let mut rng = rand::thread_rng();
    for _ in 0..1_000 {
        let result = match rng.gen_range(0..6) {
            0 => machine.vend(Selection::Gum, 1),    // not stocked
            1 => machine.vend(Selection::Chips, 1),  // out of stock
            2 => machine.vend(Selection::Soda, 99),  // beyond stock
            3 => machine.vend(Selection::Soda, 0),   // zero quantity
            4 => machine.vend(Selection::Soda, 1),   // 0.75 short
            _ => machine.deposit(dec!(-0.01)),       // negative deposit
        };
        assert!(result.is_err());
    }

    assert_eq!(machine.balance(), balance);
    assert_eq!(*machine.item_for(Selection::Soda).unwrap(), soda);
    assert_eq!(*machine.item_for(Selection::Chips).unwrap(), chips);
}

#[test]
fn test_repeated_exact_decimal_transactions_do_not_drift() {
    let mut machine = Machine::new(catalog());

    // 0.10 in binary floating point accumulates drift over this many
    // additions; decimal arithmetic must stay exact.
    for _ in 0..1_000 {
        machine.deposit(dec!(0.10)).unwrap();
    }
    assert_eq!(machine.balance(), dec!(100.00));

    for _ in 0..5 {
        machine.vend(Selection::Soda, 1).unwrap();
    }
    assert_eq!(machine.balance(), dec!(95.00));
    assert_eq!(machine.item_for(Selection::Soda).unwrap().quantity, 0);
}
