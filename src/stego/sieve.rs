// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Incremental sieve of Eratosthenes.
//!
//! [`Primes`] is an infinite iterator over the primes in ascending order.
//! It keeps a map from each upcoming composite to the primes that divide it,
//! so memory grows with the number of primes yielded — never with any fixed
//! upper bound. That makes it safe to drive pixel traversal over carriers of
//! any size: the sequence is lazy, restartable, and identical on every run.
//!
//! [`count_primes_below`] is the bounded counterpart for capacity math: a
//! one-shot bool-vector sieve that counts π(n) without constructing the
//! sequence.

use std::collections::HashMap;

/// Infinite iterator over the prime numbers: 2, 3, 5, 7, 11, ...
#[derive(Debug, Clone)]
pub struct Primes {
    /// Next candidate to examine.
    candidate: u64,
    /// Maps each known upcoming composite to the primes that divide it.
    composites: HashMap<u64, Vec<u64>>,
}

impl Primes {
    pub fn new() -> Self {
        Self {
            candidate: 2,
            composites: HashMap::new(),
        }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let n = self.candidate;
            self.candidate += 1;

            match self.composites.remove(&n) {
                Some(divisors) => {
                    // n is composite: reschedule each divisor at its next multiple.
                    for p in divisors {
                        self.composites.entry(n + p).or_default().push(p);
                    }
                }
                None => {
                    // n is prime. Its first interesting multiple is n² — every
                    // smaller multiple has a smaller prime factor already tracked.
                    self.composites.insert(n * n, vec![n]);
                    return Some(n);
                }
            }
        }
    }
}

/// Count the primes strictly below `limit` (π of the exclusive bound).
///
/// Uses a plain bool-vector sieve, so it allocates `limit` bytes. Intended
/// for one-shot capacity checks where `limit` is a carrier's pixel count.
pub fn count_primes_below(limit: u64) -> u64 {
    if limit <= 2 {
        return 0;
    }
    let limit = limit as usize;
    let mut is_composite = vec![false; limit];
    let mut count = 0u64;
    for n in 2..limit {
        if is_composite[n] {
            continue;
        }
        count += 1;
        let mut m = n.saturating_mul(n);
        while m < limit {
            is_composite[m] = true;
            m += n;
        }
    }
    count
}
