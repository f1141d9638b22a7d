//! Named element access (`v.x`, `v.g`, `v.h`, ...) for vectors with up to 4 elements.

use std::ops::{Deref, DerefMut};

use crate::{qualifier::Qualifier, Vector};

#[repr(C)]
pub struct X<T> {
    pub x: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

#[repr(C)]
pub struct R<T> {
    pub r: T,
    _priv: (),
}

#[repr(C)]
pub struct RG<T> {
    pub r: T,
    pub g: T,
    _priv: (),
}

#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (),
}

#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (),
}

#[repr(C)]
pub struct WH<T> {
    pub w: T,
    pub h: T,
    _priv: (),
}

macro_rules! vector_views {
    ($($n:literal => $view:ident),+ $(,)?) => {
        $(
            impl<T, Q: Qualifier> Deref for Vector<T, $n, Q> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: `Vector` is `#[repr(C)]` and starts with its `$n` elements, which is
                    // exactly the layout of the view (its trailing `()` takes no space).
                    unsafe { &*(self as *const Self).cast::<$view<T>>() }
                }
            }

            impl<T, Q: Qualifier> DerefMut for Vector<T, $n, Q> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // Safety: see `deref`.
                    unsafe { &mut *(self as *mut Self).cast::<$view<T>>() }
                }
            }
        )+
    };
}
vector_views!(1 => X, 2 => XY, 3 => XYZ, 4 => XYZW);

// Views with the same layout, but different field names.
macro_rules! alias_views {
    ($($from:ident => $to:ident),+ $(,)?) => {
        $(
            impl<T> Deref for $from<T> {
                type Target = $to<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: both views are `#[repr(C)]` with identical field types.
                    unsafe { &*(self as *const Self).cast::<$to<T>>() }
                }
            }

            impl<T> DerefMut for $from<T> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // Safety: see `deref`.
                    unsafe { &mut *(self as *mut Self).cast::<$to<T>>() }
                }
            }
        )+
    };
}
alias_views!(X => R, XY => RG, XYZ => RGB, XYZW => RGBA, RG => WH);
