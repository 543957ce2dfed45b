//! Heuristic selection for sorting, fitting and splitting.
//!
//! Each group is a separate enum, so choices within a group are mutually
//! exclusive while choices across groups combine freely in [`PackOptions`].

/// Which property of a rectangle `Pack::sort` orders the input by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SortKey {
    Area,
    Width,
    Height,

    /// The caller-supplied key given to `Pack::push_indexed`.
    Param,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Area
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Descending
    }
}

/// How a bin picks the free rectangle an incoming rectangle goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FitPolicy {
    /// Smallest leftover area, i.e. the tightest fit.
    MinArea,

    /// Largest leftover area, i.e. the loosest fit. A free rectangle that
    /// would be left with no area at all is never picked under this policy.
    MaxArea,

    /// First free rectangle large enough.
    First,

    /// Last free rectangle large enough.
    Last,
}

impl Default for FitPolicy {
    fn default() -> Self {
        FitPolicy::MinArea
    }
}

/// How a bin chooses between the two guillotine cuts after placing a
/// rectangle.
///
/// Every placement leaves two candidate pairs of free fragments. The policy
/// compares either the smaller or the larger fragment of each pair, and keeps
/// the pair where that fragment is smaller or larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SplitPolicy {
    MinAreaMin,
    MinAreaMax,
    MaxAreaMin,

    /// Keep the pair with the largest single fragment.
    MaxAreaMax,
}

impl Default for SplitPolicy {
    fn default() -> Self {
        SplitPolicy::MaxAreaMax
    }
}

/// The part of [`PackOptions`] a single `Bin` cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinOptions {
    pub fit: FitPolicy,
    pub split: SplitPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackOptions {
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub fit: FitPolicy,
    pub split: SplitPolicy,
}

impl PackOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_key(self, sort_key: SortKey) -> Self {
        Self { sort_key, ..self }
    }

    pub fn sort_order(self, sort_order: SortOrder) -> Self {
        Self { sort_order, ..self }
    }

    pub fn fit(self, fit: FitPolicy) -> Self {
        Self { fit, ..self }
    }

    pub fn split(self, split: SplitPolicy) -> Self {
        Self { split, ..self }
    }

    pub fn bin_options(&self) -> BinOptions {
        BinOptions {
            fit: self.fit,
            split: self.split,
        }
    }
}
