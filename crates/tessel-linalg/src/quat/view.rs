use std::ops::{Deref, DerefMut};

use crate::{qualifier::Qualifier, Quat};

#[repr(C)]
pub struct IJKW<T> {
    pub i: T,
    pub j: T,
    pub k: T,
    pub w: T,
    _priv: (),
}

impl<T, Q: Qualifier> Deref for Quat<T, Q> {
    type Target = IJKW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // Safety: `Quat` is a transparent wrapper around a `#[repr(C)]` `Vector` whose four
        // elements come first.
        unsafe { &*(self as *const Self).cast::<IJKW<T>>() }
    }
}

impl<T, Q: Qualifier> DerefMut for Quat<T, Q> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // Safety: see `deref`.
        unsafe { &mut *(self as *mut Self).cast::<IJKW<T>>() }
    }
}
