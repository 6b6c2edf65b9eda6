//! Measurement constraints passed from a host to the grid and from the grid
//! to its slots.

/// A one-axis size constraint.
///
/// This is the usual three-mode contract of retained-mode toolkits: the parent
/// either dictates a size, caps it, or leaves it open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MeasureSpec {
    /// The child must be exactly this size.
    Exactly(f32),
    /// The child may be any size up to this bound.
    AtMost(f32),
    /// No constraint.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// An exact constraint; negative or NaN sizes become zero.
    pub fn exactly(size: f32) -> Self {
        Self::Exactly(sanitize(size))
    }

    /// An upper bound; negative or NaN sizes become zero.
    pub fn at_most(size: f32) -> Self {
        Self::AtMost(sanitize(size))
    }

    /// The bound carried by the spec, or zero when unspecified.
    #[inline]
    pub fn size(self) -> f32 {
        match self {
            Self::Exactly(size) | Self::AtMost(size) => size,
            Self::Unspecified => 0.0,
        }
    }

    /// The bound carried by the spec, or `fallback` when unspecified.
    #[inline]
    pub fn available_or(self, fallback: f32) -> f32 {
        match self {
            Self::Exactly(size) | Self::AtMost(size) => size,
            Self::Unspecified => fallback,
        }
    }

    /// Reconcile a desired size with this constraint.
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(size) => desired.min(size),
            Self::Unspecified => desired,
        }
    }

    /// Size a container takes when it has nothing to lay out.
    ///
    /// Bounded specs yield their bound; an open spec yields `minimum`.
    pub fn default_size(self, minimum: f32) -> f32 {
        match self {
            Self::Exactly(size) | Self::AtMost(size) => size,
            Self::Unspecified => minimum,
        }
    }

    /// Turn an exact constraint into an upper bound, so a child may choose
    /// its own size within the parent's box.
    pub fn loosen(self) -> Self {
        match self {
            Self::Exactly(size) => Self::AtMost(size),
            other => other,
        }
    }
}

fn sanitize(size: f32) -> f32 {
    if size.is_nan() { 0.0 } else { size.max(0.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(MeasureSpec::exactly(50.0).resolve(80.0), 50.0);
        assert_eq!(MeasureSpec::at_most(50.0).resolve(80.0), 50.0);
        assert_eq!(MeasureSpec::at_most(50.0).resolve(30.0), 30.0);
        assert_eq!(MeasureSpec::Unspecified.resolve(30.0), 30.0);
    }

    #[test]
    fn test_default_size_and_loosen() {
        assert_eq!(MeasureSpec::Unspecified.default_size(12.0), 12.0);
        assert_eq!(MeasureSpec::at_most(40.0).default_size(12.0), 40.0);
        assert_eq!(MeasureSpec::exactly(40.0).loosen(), MeasureSpec::AtMost(40.0));
        assert_eq!(MeasureSpec::Unspecified.loosen(), MeasureSpec::Unspecified);
    }

    #[test]
    fn test_negative_sizes_clamp() {
        assert_eq!(MeasureSpec::exactly(-5.0).size(), 0.0);
        assert_eq!(MeasureSpec::at_most(f32::NAN).size(), 0.0);
        assert_eq!(MeasureSpec::Unspecified.available_or(7.0), 7.0);
    }
}
