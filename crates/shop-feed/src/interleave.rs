//! Advert interleaving.
//!
//! After every complete chunk of products one advert is inserted, taken
//! round-robin from the pool. A trailing partial chunk gets no advert.
//! The rotation never shows the same advert id twice in a row unless the
//! pool holds only one distinct id.

use shop_commerce::catalog::{Advertisement, FeedEntry, Product};

/// Products between adverts.
pub const ADVERT_CHUNK_SIZE: usize = 5;

/// Interleaved display sequence plus where the rotation stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct Interleaved {
    pub entries: Vec<FeedEntry>,
    pub next_cursor: usize,
}

impl Interleaved {
    pub fn advert_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_advert()).count()
    }
}

/// Interleave with the default chunk size.
pub fn interleave(products: &[Product], adverts: &[Advertisement], cursor: usize) -> Interleaved {
    interleave_with_chunk(ADVERT_CHUNK_SIZE, products, adverts, cursor)
}

/// Interleave one advert after every `chunk_size` products.
///
/// `cursor` is the pool index of the first advert to show; a cursor past
/// the end of the pool starts again from zero. With an empty pool the
/// products pass through and the cursor comes back unchanged.
pub fn interleave_with_chunk(
    chunk_size: usize,
    products: &[Product],
    adverts: &[Advertisement],
    cursor: usize,
) -> Interleaved {
    let chunk_size = chunk_size.max(1);

    if adverts.is_empty() {
        return Interleaved {
            entries: products.iter().cloned().map(FeedEntry::Product).collect(),
            next_cursor: cursor,
        };
    }

    let mut cursor = if cursor >= adverts.len() { 0 } else { cursor };
    let mut entries = Vec::with_capacity(products.len() + products.len() / chunk_size);

    for chunk in products.chunks(chunk_size) {
        entries.extend(chunk.iter().cloned().map(FeedEntry::Product));
        if chunk.len() < chunk_size {
            break;
        }

        let chosen = &adverts[cursor];
        entries.push(FeedEntry::Advert(chosen.clone()));
        cursor = advance(adverts, cursor);
    }

    Interleaved {
        entries,
        next_cursor: cursor,
    }
}

/// Step past `cursor`, skipping entries that repeat its id. Gives up after
/// one lap so a single-id pool still terminates.
fn advance(pool: &[Advertisement], cursor: usize) -> usize {
    let shown = &pool[cursor].id;
    let mut next = step(cursor, pool.len());
    for _ in 0..pool.len() {
        if pool[next].id != *shown {
            break;
        }
        next = step(next, pool.len());
    }
    next
}

fn step(index: usize, len: usize) -> usize {
    if index + 1 >= len {
        0
    } else {
        index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::money::{Currency, Money};

    fn products(n: usize) -> Vec<Product> {
        (1..=n)
            .map(|i| Product::new(format!("p{i}"), format!("Lure {i}"), "rapala", "red", Money::new(500, Currency::USD)))
            .collect()
    }

    fn pool(ids: &[&str]) -> Vec<Advertisement> {
        ids.iter().map(|id| Advertisement::new(*id, format!("Ad {id}"))).collect()
    }

    fn keys(entries: &[FeedEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| match e {
                FeedEntry::Product(p) => p.id.to_string(),
                FeedEntry::Advert(a) => a.id.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_twelve_products_three_adverts() {
        let result = interleave(&products(12), &pool(&["a1", "a2", "a3"]), 0);

        assert_eq!(
            keys(&result.entries),
            vec!["p1", "p2", "p3", "p4", "p5", "a1", "p6", "p7", "p8", "p9", "p10", "a2", "p11", "p12"]
        );
        assert_eq!(result.next_cursor, 2);
    }

    #[test]
    fn test_exact_multiple_ends_with_advert() {
        let result = interleave(&products(10), &pool(&["a1", "a2"]), 0);
        assert_eq!(result.entries.len(), 12);
        assert!(result.entries.last().unwrap().is_advert());
    }

    #[test]
    fn test_short_list_gets_no_adverts() {
        let result = interleave(&products(4), &pool(&["a1"]), 0);
        assert_eq!(result.advert_count(), 0);
        assert_eq!(result.next_cursor, 0);
    }

    #[test]
    fn test_empty_pool_passes_products_through() {
        let result = interleave(&products(11), &[], 3);
        assert_eq!(keys(&result.entries), keys(&interleave(&products(11), &[], 0).entries));
        assert_eq!(result.entries.len(), 11);
        assert_eq!(result.next_cursor, 3);
    }

    #[test]
    fn test_rotation_wraps_round_robin() {
        let result = interleave(&products(20), &pool(&["a1", "a2", "a3"]), 0);
        let adverts: Vec<String> = keys(&result.entries)
            .into_iter()
            .filter(|k| k.starts_with('a'))
            .collect();
        assert_eq!(adverts, vec!["a1", "a2", "a3", "a1"]);
        assert_eq!(result.next_cursor, 1);
    }

    #[test]
    fn test_adjacent_duplicates_are_skipped() {
        let result = interleave(&products(20), &pool(&["a1", "b", "b", "c"]), 0);
        let adverts: Vec<String> = keys(&result.entries)
            .into_iter()
            .filter(|k| !k.starts_with('p'))
            .collect();
        assert_eq!(adverts, vec!["a1", "b", "c", "a1"]);
    }

    #[test]
    fn test_wraparound_duplicate_is_skipped() {
        let result = interleave(&products(15), &pool(&["a1", "a2", "a1"]), 0);
        let adverts: Vec<String> = keys(&result.entries)
            .into_iter()
            .filter(|k| k.starts_with('a'))
            .collect();
        assert_eq!(adverts, vec!["a1", "a2", "a1"]);
        // a1 at index 0 would repeat, so the rotation lands on a2.
        assert_eq!(result.next_cursor, 1);
    }

    #[test]
    fn test_single_id_pool_repeats() {
        let result = interleave(&products(15), &pool(&["solo", "solo"]), 0);
        assert_eq!(result.advert_count(), 3);
    }

    #[test]
    fn test_cursor_past_end_starts_over() {
        let result = interleave(&products(5), &pool(&["a1", "a2"]), 7);
        assert_eq!(keys(&result.entries).last().unwrap(), "a1");
    }

    #[test]
    fn test_products_keep_relative_order() {
        let input = products(23);
        let result = interleave(&input, &pool(&["a1", "a2", "a3"]), 0);
        let shown: Vec<&Product> = result.entries.iter().filter_map(|e| e.as_product()).collect();
        assert_eq!(shown.len(), input.len());
        assert!(shown.iter().zip(input.iter()).all(|(a, b)| *a == b));
        assert_eq!(result.advert_count(), 23 / ADVERT_CHUNK_SIZE);
    }

    #[test]
    fn test_custom_chunk_size() {
        let result = interleave_with_chunk(2, &products(5), &pool(&["a1", "a2"]), 0);
        assert_eq!(keys(&result.entries), vec!["p1", "p2", "a1", "p3", "p4", "a2", "p5"]);
    }
}
