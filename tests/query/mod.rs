use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use outcome_rail::{ApplyPaging, OrderBy, Paging, Search, SortDirection, DEFAULT_PAGE_SIZE};

#[test]
fn page_size_below_one_clamps_to_default() {
    let mut paging = Paging::first_page();
    paging.set_page_size(0);
    assert_eq!(paging.page_size(), DEFAULT_PAGE_SIZE);

    paging.set_page_size(-5);
    assert_eq!(paging.page_size(), 20);
}

#[test]
fn page_number_below_one_clamps_to_first_page() {
    let mut paging = Paging::first_page();
    paging.set_page_number(-3);
    assert_eq!(paging.page_number(), 1);

    paging.set_page_number(0);
    assert_eq!(paging.page_number(), 1);
}

#[test]
fn skip_amount_is_zero_based() {
    assert_eq!(Paging::new(1, 20).skip_amount(), 0);
    assert_eq!(Paging::new(3, 10).skip_amount(), 20);
}

#[test]
fn default_paging_is_first_page_with_paging_on() {
    let paging = Paging::default();
    assert_eq!(paging.page_number(), 1);
    assert_eq!(paging.page_size(), DEFAULT_PAGE_SIZE);
    assert!(paging.use_paging());
}

#[test]
fn apply_paging_disabled_returns_input_unmodified() {
    let mut paging = Paging::new(5, 2);
    paging.set_use_paging(false);

    let items: Vec<i32> = (1..=10).apply_paging(&paging).collect();
    assert_eq!(items, (1..=10).collect::<Vec<_>>());
}

#[test]
fn apply_paging_skips_and_takes() {
    let second_page: Vec<i32> = (1..=10).apply_paging(&Paging::new(2, 3)).collect();
    assert_eq!(second_page, [4, 5, 6]);

    let past_the_end: Vec<i32> = (1..=10).apply_paging(&Paging::new(9, 3)).collect();
    assert!(past_the_end.is_empty());
}

#[test]
fn apply_paging_is_lazy() {
    // An unbounded source terminates only because the adapter is a plain
    // skip/take chain.
    let page: Vec<u64> = (0u64..).apply_paging(&Paging::new(2, 4)).collect();
    assert_eq!(page, [4, 5, 6, 7]);
}

#[test]
fn order_by_equality_is_name_and_direction() {
    let a = OrderBy::<i32>::ascending("value", i32::cmp);
    let b = OrderBy::<i32>::new("value", |x, y| y.cmp(x), SortDirection::Ascending);
    let c = OrderBy::<i32>::descending("value", i32::cmp);

    assert_eq!(a, b);
    assert_ne!(a, c);

    let hash = |order: &OrderBy<i32>| {
        let mut hasher = DefaultHasher::new();
        order.hash(&mut hasher);
        hasher.finish()
    };
    assert_eq!(hash(&a), hash(&b));
}

#[test]
fn huge_page_values_saturate_instead_of_wrapping() {
    let mut paging = Paging::first_page();
    paging.set_page_size(i64::MAX);
    assert_eq!(
        paging.page_size(),
        usize::try_from(i64::MAX).unwrap_or(usize::MAX)
    );

    paging.set_page_number(i64::MAX);
    assert!(paging.page_number() >= 1);
}

#[test]
fn order_by_is_clonable_without_a_clonable_element_type() {
    struct Opaque(i32);

    let order = OrderBy::<Opaque>::ascending("value", |a, b| a.0.cmp(&b.0));
    let copy = order.clone();

    assert_eq!(order, copy);
    assert_eq!(copy.field(), "value");
}

#[test]
fn order_by_direction_reverses_comparison() {
    let ascending = OrderBy::<i32>::ascending("value", i32::cmp);
    let descending = OrderBy::<i32>::descending("value", i32::cmp);

    let mut items = vec![3, 1, 2];
    ascending.sort(&mut items);
    assert_eq!(items, [1, 2, 3]);

    descending.sort(&mut items);
    assert_eq!(items, [3, 2, 1]);
}

#[test]
fn search_orders_then_pages() {
    let search = Search {
        order: Some(OrderBy::descending("value", i32::cmp)),
        paging: Paging::new(2, 2),
    };

    assert_eq!(search.apply(vec![5, 1, 4, 2, 3]), [3, 2]);
}

#[test]
fn default_search_returns_the_first_default_page() {
    let search = Search::<i32>::default();
    let items: Vec<i32> = search.apply((1..=30).collect());
    assert_eq!(items.len(), DEFAULT_PAGE_SIZE);
    assert_eq!(items[0], 1);
}
