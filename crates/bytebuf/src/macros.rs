//! Simple macros for basic decode impls.

/// Generates a `Decode` impl for a wrapper type.
#[macro_export]
macro_rules! impl_wrapper_decode {
    ($this:ty => $target:ty) => {
        impl $crate::Decode for $this {
            fn decode(cur: &mut $crate::Cursor<'_>) -> $crate::BufResult<Self> {
                <$target as $crate::Decode>::decode(cur).map(Self)
            }
        }
    };
}

/// Generates a struct with a `Decode` impl that reads each field in
/// declaration order, assuming each field is itself `Decode`.
#[macro_export]
macro_rules! impl_decode_flat_struct {
    {
        $( #[ $sattr:meta ] )*
        $v:vis struct $name:ident {
            $(
                $( #[ $fattr:meta ] )*
                $fname:ident : $fty:ty,
            )*
        }
    } => {
        $( #[ $sattr ] )*
        $v struct $name {
            $(
                $( #[ $fattr ] )*
                $fname : $fty,
            )*
        }

        impl $name {
            $v fn new($( $fname : $fty ),*) -> Self {
                Self { $( $fname ),* }
            }

            $(
                $v fn $fname(&self) -> &$fty {
                    &self.$fname
                }
            )*
        }

        impl $crate::Decode for $name {
            fn decode(cur: &mut $crate::Cursor<'_>) -> $crate::BufResult<Self> {
                $(
                    let $fname = <$fty as $crate::Decode>::decode(cur)?;
                )*
                Ok(Self::new($($fname),*))
            }
        }
    }
}
