use num::traits::PrimInt;

use crate::prelude::ErrorsIsqrt;

/// Common interface for the integer square root algorithms so they can be
/// swapped or raced against each other.
///
/// An engine computes `floor(sqrt(n))` for any primitive integer `n >= 0` and
/// rejects negative input with [`ErrorsIsqrt::InvalidArgument`].
pub trait IntegerSquareRootEngine {
    /// Short human readable name, used as a benchmark label.
    fn name(&self) -> &'static str;

    /// Returns the largest `r` such that `r * r <= n`.
    fn isqrt<T: PrimInt>(&self, n: T) -> Result<T, ErrorsIsqrt>;
}
