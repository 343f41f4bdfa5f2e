/******************************************\
|==========================================|
|        Macro: impl_from_to_primitive     |
|==========================================|
\******************************************/

/// Generates index conversions for a fieldless `#[repr(u8)]` enum with a `NUM` constant.
///
/// It provides:
/// - `unsafe fn from_unchecked(index: u8) -> Self`: assumes `index < NUM`.
/// - `fn from_index(index: u8) -> Option<Self>`: checked conversion.
/// - `fn index(&self) -> usize`: the discriminant as an array index.
#[macro_export]
macro_rules! impl_from_to_primitive {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Converts primitive type u8 to ", stringify!($enum_name))]
            /// ## Safety
            /// - `index` must be smaller than `NUM`, otherwise the result is not a valid variant
            #[inline]
            pub const unsafe fn from_unchecked(index: u8) -> Self {
                debug_assert!((index as usize) < Self::NUM, "Index out of bounds");
                unsafe { std::mem::transmute(index) }
            }

            #[doc=concat!("Converts primitive type u8 to ", stringify!($enum_name), ", returning `None` when out of range")]
            #[inline]
            pub const fn from_index(index: u8) -> Option<Self> {
                if (index as usize) < Self::NUM {
                    Some(unsafe { Self::from_unchecked(index) })
                } else {
                    None
                }
            }

            #[doc=concat!("Converts ", stringify!($enum_name), " to primitive type usize")]
            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }
        }
    };
}

/******************************************\
|==========================================|
|          Macro: impl_enum_iter           |
|==========================================|
\******************************************/

/// Generates an `iter()` method walking every variant of an enum in discriminant order.
///
/// Requires `NUM` and `from_unchecked` (see [`impl_from_to_primitive`]).
#[macro_export]
macro_rules! impl_enum_iter {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Returns iterator for all the elements in ", stringify!($enum_name))]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
                (0..Self::NUM as u8).map(|i| unsafe { Self::from_unchecked(i) })
            }
        }
    };
}

/******************************************\
|==========================================|
|           Macro: impl_bit_ops            |
|==========================================|
\******************************************/

/// Implements `&`, `|`, `^`, `!` and the assigning forms for a newtype over an integer.
#[macro_export]
macro_rules! impl_bit_ops {
    ($struct_name:ident) => {
        impl std::ops::BitAnd for $struct_name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self::Output {
                Self(self.0 & rhs.0)
            }
        }

        impl std::ops::BitOr for $struct_name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self::Output {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitXor for $struct_name {
            type Output = Self;

            fn bitxor(self, rhs: Self) -> Self::Output {
                Self(self.0 ^ rhs.0)
            }
        }

        impl std::ops::Not for $struct_name {
            type Output = Self;

            fn not(self) -> Self::Output {
                Self(!self.0)
            }
        }

        impl std::ops::BitAndAssign for $struct_name {
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0;
            }
        }

        impl std::ops::BitOrAssign for $struct_name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl std::ops::BitXorAssign for $struct_name {
            fn bitxor_assign(&mut self, rhs: Self) {
                self.0 ^= rhs.0;
            }
        }
    };
}
