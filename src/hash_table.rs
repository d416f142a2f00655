use ahash::RandomState;
use hashbrown::HashSet;

/// Base of the polynomial string hash
pub const HASH_BASE: u64 = 447;

/// Modulus of the polynomial string hash, the prime `10^9 + 7`
pub const HASH_MODULUS: u64 = 1_000_000_007;

/// Polynomial rolling hash of a string
///
/// Horner evaluation over the Unicode scalar values of `s`:
///
/// ```text
/// h = 0
/// h = (h * 447 + c) mod (10^9 + 7)    for each char c
/// ```
///
/// ```
/// use classic_dsa::polynomial_hash;
///
/// assert_eq!(polynomial_hash(""), 0);
/// assert_eq!(polynomial_hash("a"), 97);
/// assert_eq!(polynomial_hash("ab"), 97 * 447 + 98);
/// ```
pub fn polynomial_hash(s: &str) -> u64 {
    s.chars().fold(0, |h, c| {
        (h * HASH_BASE + u64::from(u32::from(c))) % HASH_MODULUS
    })
}

/// # String Hash Set
///
/// A set of strings that stores only each string's [`polynomial_hash`].
/// Membership is decided by hash equality alone, so two distinct strings with
/// the same hash are the same element.
///
/// ```
/// use classic_dsa::StringHashSet;
///
/// let mut set = StringHashSet::new();
/// set.add("jane");
/// assert!(set.contains("jane"));
/// assert!(set.remove("jane"));
/// assert!(!set.contains("jane"));
/// ```
#[derive(Debug, Clone)]
pub struct StringHashSet {
    hashes: HashSet<u64, RandomState>,
}

impl Default for StringHashSet {
    fn default() -> Self {
        Self::new()
    }
}

impl StringHashSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self {
            hashes: HashSet::with_hasher(RandomState::default()),
        }
    }

    /// Adds `s`, returning true if its hash was not present yet
    pub fn add(&mut self, s: &str) -> bool {
        self.hashes.insert(polynomial_hash(s))
    }

    /// Returns true if some added string shares the hash of `s`
    pub fn contains(&self, s: &str) -> bool {
        self.hashes.contains(&polynomial_hash(s))
    }

    /// Removes the hash of `s`, returning true if it was present
    pub fn remove(&mut self, s: &str) -> bool {
        self.hashes.remove(&polynomial_hash(s))
    }

    /// Returns the number of distinct hashes stored
    #[inline]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Returns true if the set is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

impl<'a> Extend<&'a str> for StringHashSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.hashes.extend(iter.into_iter().map(polynomial_hash));
    }
}

impl<'a> FromIterator<&'a str> for StringHashSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
