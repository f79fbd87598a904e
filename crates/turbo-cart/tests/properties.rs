//! Randomized cart operation sequences.
//!
//! Run with: `cargo test -p turbo-cart --test properties`

use std::collections::HashSet;

use proptest::prelude::*;
use turbo_cache::MemoryStore;
use turbo_cart::prelude::*;

const IDS: [&str; 4] = ["cuy", "hortalizas", "abono", "semillas"];

fn product(index: usize) -> Product {
    let id = IDS[index];
    let price = Money::new((index as i64 + 1) * 10000);
    Product::new(id, id.to_uppercase(), price, format!("{id}.jpg")).with_stock(index as u32 * 5)
}

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
    Update(usize, i64),
    Increase(usize),
    Decrease(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    let id = 0..IDS.len();
    prop_oneof![
        5 => id.clone().prop_map(Op::Add),
        2 => id.clone().prop_map(Op::Remove),
        2 => (id.clone(), -3i64..8).prop_map(|(i, q)| Op::Update(i, q)),
        1 => id.clone().prop_map(Op::Increase),
        1 => id.prop_map(Op::Decrease),
        1 => Just(Op::Clear),
    ]
}

fn apply(store: &mut CartStore<MemoryStore>, op: &Op) {
    let id = |i: &usize| ProductId::new(IDS[*i]);
    let result = match op {
        Op::Add(i) => store.add_item(&product(*i)),
        Op::Remove(i) => store.remove_item(&id(i)),
        Op::Update(i, q) => store.update_quantity(&id(i), *q),
        Op::Increase(i) => store.increase_quantity(&id(i)),
        Op::Decrease(i) => store.decrease_quantity(&id(i)),
        Op::Clear => store.clear(),
    };
    result.unwrap();
}

fn run(ops: &[Op]) -> CartStore<MemoryStore> {
    let mut store = CartStore::open(MemoryStore::new(), StoreConfig::default());
    for op in ops {
        apply(&mut store, op);
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// Quantities stay positive, ids stay unique and totals agree with the items.
    #[test]
    fn test_invariants_hold_after_any_sequence(ops in proptest::collection::vec(op(), 0..40)) {
        let store = run(&ops);
        let items = store.cart().items();

        let mut seen = HashSet::new();
        for item in items {
            prop_assert!(item.quantity >= 1);
            prop_assert!(seen.insert(item.id.clone()));
        }

        let quantities: u64 = items.iter().map(|i| u64::from(i.quantity)).sum();
        prop_assert_eq!(store.get_total_items(), quantities);

        let subtotal: Money = items.iter().map(|i| i.price.times(i.quantity)).sum();
        prop_assert_eq!(store.get_subtotal(), subtotal);

        let expected_shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Money::zero()
        } else {
            FLAT_SHIPPING_FEE
        };
        prop_assert_eq!(store.get_shipping(), expected_shipping);
        prop_assert_eq!(store.get_total(), subtotal + expected_shipping);
    }

    /// With only adds, total items equals the number of adds.
    #[test]
    fn test_adds_count_one_unit_each(adds in proptest::collection::vec(0..IDS.len(), 0..40)) {
        let ops: Vec<Op> = adds.iter().copied().map(Op::Add).collect();
        let store = run(&ops);

        prop_assert_eq!(store.get_total_items(), adds.len() as u64);
        let distinct: HashSet<_> = adds.iter().collect();
        prop_assert_eq!(store.cart().len(), distinct.len());
    }

    /// Removing an id that is not in the cart leaves the items unchanged.
    #[test]
    fn test_remove_absent_leaves_items_unchanged(ops in proptest::collection::vec(op(), 0..30)) {
        let mut store = run(&ops);
        let before = store.cart().clone();

        store.remove_item(&ProductId::new("not-in-catalog")).unwrap();
        prop_assert_eq!(store.cart(), &before);

        if let Some(absent) = IDS.iter().find(|id| !before.contains(&ProductId::new(**id))) {
            store.remove_item(&ProductId::new(*absent)).unwrap();
            prop_assert_eq!(store.cart(), &before);
        }
    }

    /// Setting a quantity of zero or less is the same as removing the item.
    #[test]
    fn test_update_to_non_positive_matches_remove(
        ops in proptest::collection::vec(op(), 0..30),
        target in 0..IDS.len(),
        quantity in -5i64..=0,
    ) {
        let id = ProductId::new(IDS[target]);
        let present = run(&ops).cart().contains(&id);

        let mut updated = run(&ops);
        updated.update_quantity(&id, quantity).unwrap();

        let mut removed = run(&ops);
        removed.remove_item(&id).unwrap();

        prop_assert_eq!(updated.cart(), removed.cart());
        prop_assert!(!updated.cart().contains(&id));
        if present {
            prop_assert_eq!(
                updated.storage().raw(DEFAULT_SLOT),
                removed.storage().raw(DEFAULT_SLOT)
            );
        }
    }

    /// Reopening the store over the same storage yields the same cart.
    #[test]
    fn test_reopen_restores_cart(ops in proptest::collection::vec(op(), 0..40)) {
        let store = run(&ops);
        let expected = store.cart().clone();

        let reopened = CartStore::open(store.into_storage(), StoreConfig::default());
        prop_assert_eq!(reopened.cart(), &expected);
        let summary = CartSummary::compute(&expected, &ShippingPolicy::default());
        prop_assert_eq!(reopened.get_total(), summary.total);
    }
}
