use std::collections::HashMap;

/// Folds items into one accumulator per key, keeping keys in first-appearance order.
///
/// `init` seeds the accumulator from the first item for a key; `update` folds
/// every later item into it.
pub fn tally_in_order<'a, T, A>(
    items: &'a [T],
    key: impl Fn(&'a T) -> &'a str,
    init: impl Fn(&'a T) -> A,
    update: impl Fn(&mut A, &'a T),
) -> Vec<(&'a str, A)> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut tallies: Vec<(&'a str, A)> = Vec::new();

    for item in items {
        let k = key(item);
        match index.get(k) {
            Some(&i) => update(&mut tallies[i].1, item),
            None => {
                index.insert(k, tallies.len());
                tallies.push((k, init(item)));
            }
        }
    }

    tallies
}

/// Computes the arithmetic mean of a running total. Returns 0.0 for an empty tally.
pub fn mean(total: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    total as f64 / count as f64
}
