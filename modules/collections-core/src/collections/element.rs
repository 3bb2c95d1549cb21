use std::fmt::Debug;

/// Fundamental constraints for values stored in the containers of this crate.
///
/// Elements only need to be debuggable and free of borrowed data. Equality is
/// not demanded globally; operations that search by value (such as
/// [`LinkedList::find_index`](crate::collections::LinkedList::find_index)) add a
/// `PartialEq` bound at the method level instead.
pub trait Element: Debug + 'static {}

impl<T> Element for T where T: Debug + 'static {}
