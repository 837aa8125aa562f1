//! Display ordering for file names.
//!
//! Names are compared with the CLDR root collation at tertiary strength, the
//! same order a browser's `localeCompare` produces without a locale: `_`
//! before `-` before `.`, accents as secondary differences, and lowercase
//! before uppercase on a case-only tie. Names the collator considers equal
//! fall back to code point order, so two distinct names never compare equal.

use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;
use tracing::warn;

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);

    // Default data locale is the root locale.
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("Root collator unavailable, sorting by code point: {}", e);
            None
        }
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

/// Compare two names the way the asset grid orders them.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}
