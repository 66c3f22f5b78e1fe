//! Built-in letter frequencies used when decoding without a supplied table.

use crate::frequency::FrequencyTable;

/// Relative frequencies of the uppercase English letters.
pub const STANDARD_FREQUENCIES: [(char, u64); 26] = [
    ('A', 19),
    ('B', 16),
    ('C', 17),
    ('D', 11),
    ('E', 42),
    ('F', 12),
    ('G', 14),
    ('H', 17),
    ('I', 16),
    ('J', 5),
    ('K', 10),
    ('L', 20),
    ('M', 19),
    ('N', 24),
    ('O', 18),
    ('P', 13),
    ('Q', 1),
    ('R', 25),
    ('S', 35),
    ('T', 25),
    ('U', 15),
    ('V', 5),
    ('W', 21),
    ('X', 2),
    ('Y', 8),
    ('Z', 3),
];

/// The standard table as a [`FrequencyTable`].
pub fn standard_table() -> FrequencyTable {
    FrequencyTable::from_static(&STANDARD_FREQUENCIES)
}
