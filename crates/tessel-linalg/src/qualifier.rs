//! Storage qualifiers.
//!
//! Every container type in this crate ([`Vector`], [`Matrix`], [`Quat`]) carries a *qualifier*
//! type parameter `Q` that selects its memory layout. The qualifier never affects the values
//! stored in a container, and it is never consulted by arithmetic or comparison operations: two
//! containers holding the same elements behave identically regardless of their qualifier.
//!
//! Operations that take two containers require both of them to use the same qualifier. Use the
//! `requalify` methods to convert between layouts explicitly.
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix
//! [`Quat`]: crate::Quat

use std::{fmt, hash::Hash};

mod sealed {
    pub trait Sealed {}
}

/// Marker types selecting the memory layout of a container.
///
/// This trait is sealed; the available qualifiers are [`Packed`] and [`Aligned`].
pub trait Qualifier:
    sealed::Sealed + Copy + Default + Eq + Hash + fmt::Debug + Send + Sync + 'static
{
    /// A zero-sized type stored after the elements of a container.
    ///
    /// Its alignment becomes the minimum alignment of the container.
    type Align: Copy + Default + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    /// The (only) value of [`Qualifier::Align`].
    const ALIGN: Self::Align;
}

/// Qualifier for tightly packed containers.
///
/// Containers using this qualifier have the same size and alignment as an array of their
/// elements. This is the default qualifier.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct Packed;

/// Qualifier for containers aligned to (at least) 16 bytes.
///
/// The size of the container is rounded up to a multiple of 16 bytes, so a 3-element [`f32`]
/// vector occupies 16 bytes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct Aligned;

/// Zero-sized type with an alignment of 16 bytes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[repr(C, align(16))]
pub struct Align16;

impl sealed::Sealed for Packed {}
impl sealed::Sealed for Aligned {}

impl Qualifier for Packed {
    type Align = ();
    const ALIGN: Self::Align = ();
}

impl Qualifier for Aligned {
    type Align = Align16;
    const ALIGN: Self::Align = Align16;
}

#[cfg(test)]
mod tests {
    use std::mem::{align_of, size_of};

    use crate::{Matrix, Vector};

    use super::*;

    #[test]
    fn packed_layout() {
        assert_eq!(size_of::<Vector<f32, 3, Packed>>(), 12);
        assert_eq!(align_of::<Vector<f32, 3, Packed>>(), align_of::<f32>());
        assert_eq!(size_of::<Vector<u8, 1, Packed>>(), 1);
        assert_eq!(size_of::<Matrix<f32, 3, 3, Packed>>(), 36);
    }

    #[test]
    fn aligned_layout() {
        assert_eq!(size_of::<Vector<f32, 3, Aligned>>(), 16);
        assert_eq!(align_of::<Vector<f32, 3, Aligned>>(), 16);
        assert_eq!(size_of::<Vector<u8, 1, Aligned>>(), 16);
        assert_eq!(size_of::<Vector<f64, 4, Aligned>>(), 32);
        assert_eq!(size_of::<Matrix<f32, 3, 3, Aligned>>(), 48);
        assert_eq!(align_of::<Matrix<f32, 3, 3, Aligned>>(), 16);
    }
}
