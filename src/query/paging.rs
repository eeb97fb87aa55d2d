//! Skip/take paging with defensive clamping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Effective page size substituted whenever an invalid size is assigned.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Paging configuration with defensive clamping on assignment.
///
/// Invalid values never fail: a page number below 1 clamps to 1, a page
/// size below 1 clamps to [`DEFAULT_PAGE_SIZE`]. With `use_paging` off the
/// configuration is inert and [`ApplyPaging`] passes sequences through
/// unchanged.
///
/// # Examples
///
/// ```
/// use outcome_rail::Paging;
///
/// let mut paging = Paging::new(-3, 0);
/// assert_eq!(paging.page_number(), 1);
/// assert_eq!(paging.page_size(), 20);
///
/// paging.set_page_number(4);
/// assert_eq!(paging.skip_amount(), 60);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", from = "RawPaging")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paging {
    page_number: usize,
    page_size: usize,
    use_paging: bool,
}

impl Paging {
    /// Creates an active paging configuration, clamping invalid input.
    #[must_use]
    pub fn new(page_number: i64, page_size: i64) -> Self {
        let mut paging = Self::first_page();
        paging.set_page_number(page_number);
        paging.set_page_size(page_size);
        paging
    }

    /// Paging turned off: sequences pass through unchanged.
    #[must_use]
    pub fn no_paging() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            use_paging: false,
        }
    }

    /// The first page at the default size, paging on.
    #[must_use]
    pub fn first_page() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            use_paging: true,
        }
    }

    #[must_use]
    #[inline]
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    #[must_use]
    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    #[inline]
    pub fn use_paging(&self) -> bool {
        self.use_paging
    }

    /// Sets the page number; values below 1 clamp to 1.
    #[inline]
    pub fn set_page_number(&mut self, value: i64) {
        self.page_number = if value < 1 {
            1
        } else {
            usize::try_from(value).unwrap_or(usize::MAX)
        };
    }

    /// Sets the page size; values below 1 clamp to [`DEFAULT_PAGE_SIZE`].
    #[inline]
    pub fn set_page_size(&mut self, value: i64) {
        self.page_size = if value < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            usize::try_from(value).unwrap_or(usize::MAX)
        };
    }

    /// Toggles whether paging applies at all.
    #[inline]
    pub fn set_use_paging(&mut self, value: bool) {
        self.use_paging = value;
    }

    /// Number of leading elements skipped: `(page_number - 1) * page_size`.
    #[must_use]
    #[inline]
    pub fn skip_amount(&self) -> usize {
        (self.page_number - 1) * self.page_size
    }
}

impl Default for Paging {
    /// First page, default size, paging on.
    fn default() -> Self {
        Self::first_page()
    }
}

/// Unclamped wire form; conversion applies the clamping rules, so a
/// deserialized `Paging` can never hold invalid values.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPaging {
    #[serde(default = "default_page_number")]
    page_number: i64,
    #[serde(default = "default_page_size")]
    page_size: i64,
    #[serde(default)]
    use_paging: bool,
}

#[cfg(feature = "serde")]
fn default_page_number() -> i64 {
    1
}

#[cfg(feature = "serde")]
fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}

#[cfg(feature = "serde")]
impl From<RawPaging> for Paging {
    fn from(raw: RawPaging) -> Self {
        let mut paging = Self::new(raw.page_number, raw.page_size);
        paging.set_use_paging(raw.use_paging);
        paging
    }
}

/// Lazy paging application over any iterable sequence.
///
/// The adapter never materializes the source: it is a plain
/// `skip`/`take` chain, degenerate (`skip 0`, `take usize::MAX`) when
/// paging is off, so deferred sources stay deferred.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ApplyPaging, Paging};
///
/// let all: Vec<i32> = (1..=5).apply_paging(&Paging::no_paging()).collect();
/// assert_eq!(all, [1, 2, 3, 4, 5]);
///
/// let second_page: Vec<i32> = (1..=5).apply_paging(&Paging::new(2, 2)).collect();
/// assert_eq!(second_page, [3, 4]);
/// ```
pub trait ApplyPaging: IntoIterator + Sized {
    fn apply_paging(
        self,
        paging: &Paging,
    ) -> core::iter::Take<core::iter::Skip<Self::IntoIter>> {
        let (skip, take) = if paging.use_paging() {
            (paging.skip_amount(), paging.page_size())
        } else {
            (0, usize::MAX)
        };
        self.into_iter().skip(skip).take(take)
    }
}

impl<I: IntoIterator> ApplyPaging for I {}
