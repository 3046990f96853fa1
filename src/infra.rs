pub mod export;

#[doc(hidden)]
pub mod modeling;
#[doc(hidden)]
pub mod testing;

#[cfg(feature = "proptest")]
#[doc(hidden)]
pub mod proptest;

#[cfg(feature = "arbitrary")]
#[doc(hidden)]
pub mod arbitrary;
