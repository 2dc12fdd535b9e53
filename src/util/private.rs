use faststr::FastStr;

// Prevent users from implementing the trait in generic-json.
pub trait Sealed {}
impl Sealed for usize {}
impl Sealed for i32 {}
impl Sealed for i64 {}
impl Sealed for isize {}
impl Sealed for str {}
impl Sealed for std::string::String {}
impl Sealed for FastStr {}
impl<'a, T> Sealed for &'a T where T: ?Sized + Sealed {}
