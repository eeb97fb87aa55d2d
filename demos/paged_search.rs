//! Ordering and paging a query collection.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example paged_search
//! ```

use outcome_rail::{Outcome, OrderBy, Paging, Search};

#[derive(Debug)]
struct City {
    name: &'static str,
    population: u64,
}

fn main() {
    let cities = vec![
        City { name: "Springfield", population: 116_000 },
        City { name: "Riverton", population: 64_000 },
        City { name: "Lakeside", population: 203_000 },
        City { name: "Hillcrest", population: 87_000 },
        City { name: "Milford", population: 152_000 },
    ];

    let search = Search {
        order: Some(OrderBy::descending("population", |a: &City, b: &City| {
            a.population.cmp(&b.population)
        })),
        paging: Paging::new(1, 3),
    };

    let total = cities.len();
    let page = search.apply(cities);
    let outcome = Outcome::success(page).with_count(total);

    println!("total rows: {}", outcome.count());
    for city in outcome.payload().into_iter().flatten() {
        println!("{:>12} {:>8}", city.name, city.population);
    }
}
